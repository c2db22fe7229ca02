//! Error types for loading, editing and sharing estimates.

use std::path::PathBuf;
use thiserror::Error;

/// Error codes for estimate processing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCode {
    /// File not found (-1)
    FileNotFound = -1,
    /// Empty file (-2)
    EmptyFile = -2,
    /// Malformed estimate or price list (-3)
    ParseError = -3,
    /// Unknown item id (E100)
    ItemNotFound = 100,
    /// Two items share an id (E101)
    DuplicateId = 101,
    /// Estimate failed validation (E102)
    ValidationFailed = 102,
    /// Clipboard write failed (E300)
    ClipboardFailed = 300,
}

/// Main error type for the estimator.
#[derive(Debug, Error)]
pub enum EstimateError {
    #[error("File not found: {path}")]
    FileNotFound { path: PathBuf },

    #[error("Empty file: {path}")]
    EmptyFile { path: PathBuf },

    #[error("Invalid JSON in {path}: {message}")]
    InvalidJson { path: PathBuf, message: String },

    #[error("No item with id '{id}'")]
    ItemNotFound { id: String },

    #[error("Duplicate item id '{id}'")]
    DuplicateId { id: String },

    #[error("Validation failed: {}", errors.join("; "))]
    Validation { errors: Vec<String> },

    #[error("Failed to copy to clipboard: {message}")]
    Clipboard { message: String },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl EstimateError {
    /// Get the error code for this error.
    pub fn code(&self) -> ErrorCode {
        match self {
            EstimateError::FileNotFound { .. } => ErrorCode::FileNotFound,
            EstimateError::EmptyFile { .. } => ErrorCode::EmptyFile,
            EstimateError::InvalidJson { .. } => ErrorCode::ParseError,
            EstimateError::ItemNotFound { .. } => ErrorCode::ItemNotFound,
            EstimateError::DuplicateId { .. } => ErrorCode::DuplicateId,
            EstimateError::Validation { .. } => ErrorCode::ValidationFailed,
            EstimateError::Clipboard { .. } => ErrorCode::ClipboardFailed,
            EstimateError::Io(_) => ErrorCode::FileNotFound,
        }
    }

    /// Get the numeric error code value.
    pub fn code_value(&self) -> i32 {
        self.code() as i32
    }
}

/// Result type alias for estimator operations.
pub type Result<T> = std::result::Result<T, EstimateError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_codes() {
        let err = EstimateError::ItemNotFound { id: "abc".into() };
        assert_eq!(err.code(), ErrorCode::ItemNotFound);
        assert_eq!(err.code_value(), 100);

        let err = EstimateError::EmptyFile {
            path: PathBuf::from("estimate.json"),
        };
        assert_eq!(err.code_value(), -2);

        let err = EstimateError::Validation {
            errors: vec!["Material 1: negative quantity".into()],
        };
        assert_eq!(err.code(), ErrorCode::ValidationFailed);
        assert_eq!(err.code_value(), 102);
    }

    #[test]
    fn test_error_display() {
        let err = EstimateError::Clipboard {
            message: "no clipboard tool".into(),
        };
        assert_eq!(
            err.to_string(),
            "Failed to copy to clipboard: no clipboard tool"
        );

        let err = EstimateError::Validation {
            errors: vec!["a".into(), "b".into()],
        };
        assert_eq!(err.to_string(), "Validation failed: a; b");
    }
}
