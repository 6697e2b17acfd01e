//! Error types for the export and render paths.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum DashboardError {
    #[error("Unknown view: {0}")]
    UnknownView(String),
    #[error("Chart rendering failed: {0}")]
    Render(String),
    #[error("Image encoding error: {0}")]
    Image(#[from] image::ImageError),
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Zip error: {0}")]
    Zip(#[from] zip::result::ZipError),
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, DashboardError>;
