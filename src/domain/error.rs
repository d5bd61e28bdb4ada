//! Domain error types

use thiserror::Error;

use super::slicer::SlicerParseError;

/// Errors that can occur in the PrintQuote application
#[derive(Error, Debug)]
pub enum AppError {
    #[error("Storage error: {0}")]
    Storage(String),

    #[error("Serialization error: {0}")]
    Serialization(String),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Calculation incomplete: {0}")]
    Incomplete(String),

    #[error("Import error: {0}")]
    Import(#[from] SlicerParseError),
}

impl From<serde_json::Error> for AppError {
    fn from(e: serde_json::Error) -> Self {
        AppError::Serialization(e.to_string())
    }
}

/// Result type alias for PrintQuote operations
pub type AppResult<T> = Result<T, AppError>;
