//! pixelita-core — canvas model and theme store for the pixelita app

pub mod canvas;
pub mod color;
pub mod error;
pub mod storage;
pub mod theme;

pub use canvas::CanvasModel;
pub use color::Color;
pub use error::Error;
pub use theme::ThemeConfig;
