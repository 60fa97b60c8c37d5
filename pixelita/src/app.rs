//! Pixelita application — canvas view, brush controls, theme editing
//!
//! Thin wiring over pixelita-core: pointer events become cell paints,
//! button clicks become theme mutations and PNG exports.

use crate::style;
use egui::{ColorImage, Context, Sense, TextureHandle, TextureOptions, Vec2};
use pixelita_core::{storage, CanvasModel, Color, ThemeConfig};
use std::path::PathBuf;

/// Cells per side of the fixed drawing grid
const CANVAS_CELLS: u32 = 60;
/// On-screen canvas size in pixels
const DISPLAY_SIZE: u32 = 600;
/// Exported PNG size in pixels
const EXPORT_SIZE: u32 = 1080;
/// Pastel grid overlay drawn on the display rasterization only
const GRID_COLOR: Color = Color::new(0xd8, 0xb0, 0xff);
/// Initial brush color
const DEFAULT_BRUSH: Color = Color::new(0xff, 0x69, 0xb4);

/// Font families offered in the theme editor. The first entry that has a
/// matching font file on disk actually renders; the rest fall back to the
/// built-in fonts but are still persisted.
const FONT_CHOICES: &[&str] = &[
    "Comic Sans MS",
    "IBM Plex Sans",
    "JetBrains Mono",
    "DejaVu Sans",
    "Arial",
];

pub struct PixelitaApp {
    canvas: CanvasModel,
    brush_color: Color,
    theme: ThemeConfig,
    theme_path: PathBuf,
    texture: Option<TextureHandle>,
    texture_dirty: bool,
    show_export_dialog: bool,
    export_filename: String,
    show_theme_dialog: bool,
    status: String,
}

impl PixelitaApp {
    pub fn new(cc: &eframe::CreationContext<'_>) -> Self {
        let theme_path = storage::theme_path();
        let theme = ThemeConfig::load_or_default(&theme_path);
        style::apply_theme(&cc.egui_ctx, &theme);

        Self {
            canvas: CanvasModel::new(CANVAS_CELLS, CANVAS_CELLS),
            brush_color: DEFAULT_BRUSH,
            theme,
            theme_path,
            texture: None,
            texture_dirty: true,
            show_export_dialog: false,
            export_filename: "untitled.png".to_string(),
            show_theme_dialog: false,
            status: "left-drag paints, right-click erases".to_string(),
        }
    }

    fn update_texture(&mut self, ctx: &Context) {
        if self.texture_dirty {
            let bitmap = self.canvas.rasterize(DISPLAY_SIZE, Some(GRID_COLOR));
            let size = [DISPLAY_SIZE as usize, DISPLAY_SIZE as usize];
            let color_image = ColorImage::from_rgb(size, bitmap.as_raw());
            self.texture = Some(ctx.load_texture("canvas", color_image, TextureOptions::NEAREST));
            self.texture_dirty = false;
        }
    }

    fn render_canvas(&mut self, ui: &mut egui::Ui, ctx: &Context) {
        self.update_texture(ctx);

        let side = DISPLAY_SIZE as f32;
        let (rect, response) = ui.allocate_exact_size(Vec2::splat(side), Sense::click_and_drag());
        if ui.is_rect_visible(rect) {
            if let Some(texture) = &self.texture {
                ui.painter().image(
                    texture.id(),
                    rect,
                    egui::Rect::from_min_max(egui::pos2(0.0, 0.0), egui::pos2(1.0, 1.0)),
                    egui::Color32::WHITE,
                );
            }
        }

        if let Some(pos) = response.interact_pointer_pos() {
            let rel = pos - rect.min;
            if rel.x >= 0.0 && rel.y >= 0.0 && rel.x < side && rel.y < side {
                let (x, y) = self.canvas.map_pointer_to_cell(
                    rel.x as u32,
                    rel.y as u32,
                    DISPLAY_SIZE,
                    DISPLAY_SIZE,
                );
                let erasing =
                    response.double_clicked() || ui.input(|i| i.pointer.secondary_down());
                if erasing {
                    self.canvas.erase(x, y);
                    self.texture_dirty = true;
                } else if ui.input(|i| i.pointer.primary_down()) {
                    self.canvas.paint(x, y, self.brush_color);
                    self.texture_dirty = true;
                }
            }
        }
    }

    fn render_controls(&mut self, ui: &mut egui::Ui, ctx: &Context) {
        ui.horizontal(|ui| {
            ui.label("brush color");
            if color_picker(ui, &mut self.brush_color) {
                self.status = format!("brush set to {}", self.brush_color.to_hex());
            }
        });
        ui.add_space(4.0);

        if ui.button("save as png (1080×1080)").clicked() {
            self.show_export_dialog = true;
        }
        if ui.button("change theme").clicked() {
            self.show_theme_dialog = true;
        }
        if ui.button("reset theme").clicked() {
            self.theme = ThemeConfig::reset();
            self.apply_and_save_theme(ctx);
        }
    }

    fn render_export_dialog(&mut self, ctx: &Context) {
        if !self.show_export_dialog {
            return;
        }
        let mut open = true;
        let mut done = false;
        egui::Window::new("save as png")
            .open(&mut open)
            .collapsible(false)
            .resizable(false)
            .show(ctx, |ui| {
                ui.label("file name (saved to your pictures folder):");
                ui.text_edit_singleline(&mut self.export_filename);
                ui.add_space(4.0);
                ui.horizontal(|ui| {
                    if ui.button("save").clicked() {
                        self.export();
                        done = true;
                    }
                    if ui.button("cancel").clicked() {
                        done = true;
                    }
                });
            });
        if done || !open {
            self.show_export_dialog = false;
        }
    }

    fn export(&mut self) {
        let mut name = self.export_filename.trim().to_string();
        if name.is_empty() {
            name = "untitled.png".to_string();
        }
        if !name.to_lowercase().ends_with(".png") {
            name.push_str(".png");
        }
        let path = storage::pictures_dir().join(name);
        match self.canvas.export_png(&path, EXPORT_SIZE) {
            Ok(()) => self.status = format!("saved {}", path.display()),
            Err(e) => self.status = format!("export failed: {e}"),
        }
    }

    fn render_theme_dialog(&mut self, ctx: &Context) {
        if !self.show_theme_dialog {
            return;
        }
        let mut open = true;
        let mut changed = false;
        egui::Window::new("theme")
            .open(&mut open)
            .collapsible(false)
            .resizable(false)
            .show(ctx, |ui| {
                ui.horizontal(|ui| {
                    ui.label("window color");
                    changed |= color_picker(ui, &mut self.theme.window_color);
                });
                ui.horizontal(|ui| {
                    ui.label("button color");
                    changed |= color_picker(ui, &mut self.theme.button_color);
                });
                ui.horizontal(|ui| {
                    ui.label("font");
                    egui::ComboBox::from_id_source("theme_font")
                        .selected_text(self.theme.font.clone())
                        .show_ui(ui, |ui| {
                            for &font in FONT_CHOICES {
                                changed |= ui
                                    .selectable_value(&mut self.theme.font, font.to_string(), font)
                                    .changed();
                            }
                        });
                });
            });
        if changed {
            self.apply_and_save_theme(ctx);
        }
        if !open {
            self.show_theme_dialog = false;
        }
    }

    /// Re-style the context and persist the theme, surfacing save failures
    /// in the status line.
    fn apply_and_save_theme(&mut self, ctx: &Context) {
        style::apply_theme(ctx, &self.theme);
        match self.theme.save(&self.theme_path) {
            Ok(()) => self.status = "theme saved".to_string(),
            Err(e) => self.status = format!("theme save failed: {e}"),
        }
    }
}

/// Small swatch button that edits a core color in place. Returns true on
/// change.
fn color_picker(ui: &mut egui::Ui, color: &mut Color) -> bool {
    let mut rgb = [color.r, color.g, color.b];
    let changed = ui.color_edit_button_srgb(&mut rgb).changed();
    if changed {
        *color = Color::new(rgb[0], rgb[1], rgb[2]);
    }
    changed
}

impl eframe::App for PixelitaApp {
    fn update(&mut self, ctx: &Context, _frame: &mut eframe::Frame) {
        egui::TopBottomPanel::bottom("status").show(ctx, |ui| {
            ui.label(&self.status);
        });

        egui::CentralPanel::default().show(ctx, |ui| {
            ui.vertical_centered(|ui| {
                ui.add_space(8.0);
                self.render_canvas(ui, ctx);
                ui.add_space(8.0);
                self.render_controls(ui, ctx);
            });
        });

        self.render_export_dialog(ctx);
        self.render_theme_dialog(ctx);
    }
}
