//! Error types for theme handling

use thiserror::Error;

use crate::upload::UploadError;

#[derive(Error, Debug)]
pub enum ThemeError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Upload rejected: {0}")]
    Upload(#[from] UploadError),
}

pub type ThemeResult<T> = Result<T, ThemeError>;
