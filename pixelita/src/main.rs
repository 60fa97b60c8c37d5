//! Pixelita — a pastel pixel-art studio
//!
//! A fixed 60×60 drawing grid with a one-cell brush, PNG export at
//! 1080×1080, and a persisted pastel theme.

mod app;
mod style;

use app::PixelitaApp;
use eframe::NativeOptions;

fn main() -> eframe::Result<()> {
    let options = NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([640.0, 780.0])
            .with_title("Pixelita"),
        ..Default::default()
    };

    eframe::run_native(
        "Pixelita",
        options,
        Box::new(|cc| Box::new(PixelitaApp::new(cc))),
    )
}
