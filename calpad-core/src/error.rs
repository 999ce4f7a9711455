//! Error types for calpad.

use thiserror::Error;

/// Errors that can occur in calpad operations.
#[derive(Error, Debug)]
pub enum CalpadError {
    #[error("Missing required field: {0}")]
    MissingField(&'static str),

    #[error("Invalid date '{0}'. Expected YYYY-MM-DD")]
    InvalidDate(String),

    #[error("Invalid time '{0}'. Expected HH:MM")]
    InvalidTime(String),

    #[error("Storage error: {0}")]
    Storage(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type alias for calpad operations.
pub type CalpadResult<T> = Result<T, CalpadError>;
