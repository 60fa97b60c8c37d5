//! Per-user storage locations

use std::path::PathBuf;

/// Per-user config directory for pixelita. Falls back to the current
/// directory when no home can be resolved.
pub fn config_dir() -> PathBuf {
    directories::ProjectDirs::from("", "", "pixelita")
        .map(|d| d.config_dir().to_path_buf())
        .unwrap_or_else(|| PathBuf::from("."))
}

/// Location of the persisted theme file.
pub fn theme_path() -> PathBuf {
    config_dir().join("theme.json")
}

/// The user's pictures directory, the default home for exported PNGs.
pub fn pictures_dir() -> PathBuf {
    directories::UserDirs::new()
        .and_then(|d| d.picture_dir().map(|p| p.to_path_buf()))
        .unwrap_or_else(|| PathBuf::from("."))
}
