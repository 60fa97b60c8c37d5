//! Persisted UI theme — window color, button color, font family
//!
//! A cosmetic setting, not a correctness-critical one: a missing or
//! malformed file silently resolves to the defaults, and missing fields
//! fall back individually.

use crate::color::Color;
use crate::error::Error;
use serde::{Deserialize, Serialize};
use std::path::Path;

pub const DEFAULT_WINDOW_COLOR: Color = Color::new(0xf3, 0xe6, 0xff);
pub const DEFAULT_BUTTON_COLOR: Color = Color::new(0xb5, 0x7e, 0xdc);
pub const DEFAULT_FONT: &str = "Comic Sans MS";

/// The persisted theme record. Always fully populated.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ThemeConfig {
    #[serde(default = "default_window_color")]
    pub window_color: Color,
    #[serde(default = "default_button_color")]
    pub button_color: Color,
    #[serde(default = "default_font")]
    pub font: String,
}

fn default_window_color() -> Color {
    DEFAULT_WINDOW_COLOR
}

fn default_button_color() -> Color {
    DEFAULT_BUTTON_COLOR
}

fn default_font() -> String {
    DEFAULT_FONT.to_string()
}

impl Default for ThemeConfig {
    fn default() -> Self {
        Self {
            window_color: DEFAULT_WINDOW_COLOR,
            button_color: DEFAULT_BUTTON_COLOR,
            font: default_font(),
        }
    }
}

impl ThemeConfig {
    /// Read the theme from `path`, falling back to the defaults when the
    /// file is absent or does not parse.
    pub fn load_or_default(path: &Path) -> Self {
        std::fs::read_to_string(path)
            .ok()
            .and_then(|s| serde_json::from_str(&s).ok())
            .unwrap_or_default()
    }

    /// Serialize to pretty JSON and overwrite `path`, creating parent
    /// directories first. The caller surfaces the error; no retry.
    pub fn save(&self, path: &Path) -> Result<(), Error> {
        if let Some(parent) = path.parent() {
            let _ = std::fs::create_dir_all(parent);
        }
        let json = serde_json::to_string_pretty(self)?;
        std::fs::write(path, json)?;
        Ok(())
    }

    /// A fresh copy of the hard-coded defaults. No disk I/O; the caller
    /// decides whether to persist.
    pub fn reset() -> Self {
        Self::default()
    }
}
