//! Applies the persisted theme to the egui context

use egui::{Color32, FontData, FontDefinitions, FontFamily, Rounding, Stroke, Visuals};
use pixelita_core::{Color, ThemeConfig};
use std::path::PathBuf;

/// Text color on the pastel window background
const INK: Color32 = Color32::from_rgb(0x4b, 0x00, 0x82);

pub fn color32(c: Color) -> Color32 {
    Color32::from_rgb(c.r, c.g, c.b)
}

/// Apply the theme colors and font to the whole context. Called once at
/// startup and again after every theme mutation.
pub fn apply_theme(ctx: &egui::Context, theme: &ThemeConfig) {
    install_font(ctx, &theme.font);

    let window = color32(theme.window_color);
    let button = color32(theme.button_color);

    let mut visuals = Visuals::light();
    visuals.window_fill = window;
    visuals.panel_fill = window;
    visuals.faint_bg_color = window;
    visuals.window_rounding = Rounding::same(8.0);
    visuals.widgets.noninteractive.fg_stroke = Stroke::new(1.0, INK);

    let themed = |ws: &mut egui::style::WidgetVisuals| {
        ws.bg_fill = button;
        ws.weak_bg_fill = button;
        ws.rounding = Rounding::same(8.0);
        ws.fg_stroke = Stroke::new(1.0, Color32::WHITE);
    };
    themed(&mut visuals.widgets.inactive);
    themed(&mut visuals.widgets.hovered);
    themed(&mut visuals.widgets.active);
    themed(&mut visuals.widgets.open);

    let mut style = (*ctx.style()).clone();
    style.visuals = visuals;
    style.spacing.button_padding = egui::vec2(8.0, 6.0);
    ctx.set_style(style);
}

/// Install the configured font family as the proportional default when a
/// matching font file can be found on disk. Unknown families fall back
/// silently to the built-in fonts.
fn install_font(ctx: &egui::Context, family: &str) {
    let mut fonts = FontDefinitions::default();
    if let Some(data) = load_font_bytes(family) {
        fonts
            .font_data
            .insert(family.to_owned(), FontData::from_owned(data));
        fonts
            .families
            .entry(FontFamily::Proportional)
            .or_default()
            .insert(0, family.to_owned());
    }
    ctx.set_fonts(fonts);
}

/// Search standard font locations for `<family>.ttf` / `<family>.otf`,
/// with and without spaces in the file name.
fn load_font_bytes(family: &str) -> Option<Vec<u8>> {
    let compact = family.replace(' ', "");
    for dir in font_dirs() {
        for name in [family, compact.as_str()] {
            for ext in ["ttf", "otf"] {
                if let Ok(data) = std::fs::read(dir.join(format!("{name}.{ext}"))) {
                    return Some(data);
                }
            }
        }
    }
    None
}

fn font_dirs() -> Vec<PathBuf> {
    let mut dirs = vec![
        PathBuf::from("/usr/share/fonts"),
        PathBuf::from("/usr/share/fonts/truetype"),
        PathBuf::from("/usr/local/share/fonts"),
        PathBuf::from("/Library/Fonts"),
        PathBuf::from("C:\\Windows\\Fonts"),
    ];
    if let Some(base) = directories::BaseDirs::new() {
        dirs.push(base.home_dir().join(".fonts"));
    }
    dirs
}
