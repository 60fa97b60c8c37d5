use thiserror::Error;

/// Errors surfaced by PNG export and theme persistence.
#[derive(Debug, Error)]
pub enum Error {
    #[error("i/o: {0}")]
    Io(#[from] std::io::Error),
    #[error("image: {0}")]
    Image(#[from] image::ImageError),
    #[error("theme encoding: {0}")]
    Json(#[from] serde_json::Error),
}
