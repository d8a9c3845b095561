//! Error types for radview.

use std::path::PathBuf;

use thiserror::Error;

/// The main error type for radview operations.
#[derive(Error, Debug)]
pub enum ViewError {
    /// A field was given a value outside its valid range.
    #[error("invalid value: {0}")]
    Validation(String),

    /// Text did not match the expected view syntax.
    #[error("invalid view format: {0}")]
    Format(String),

    /// A referenced file or directory does not exist.
    #[error("can't find {}", .0.display())]
    NotFound(PathBuf),

    /// I/O error.
    #[error("I/O error: {0}")]
    IoError(#[from] std::io::Error),

    /// JSON serialization error.
    #[error("JSON error: {0}")]
    JsonError(#[from] serde_json::Error),
}

impl ViewError {
    pub(crate) fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    pub(crate) fn format(msg: impl Into<String>) -> Self {
        Self::Format(msg.into())
    }
}

/// A specialized Result type for radview operations.
pub type Result<T> = std::result::Result<T, ViewError>;
