//! Error types and error handling for the mdslice chunking engine.
//!
//! This module defines the error types used throughout the
//! application. Chunking itself is total over its input domain and
//! returns plain values; errors surface only from configuration
//! validation and the file pipeline.

use thiserror::Error;

/// Result type alias for mdslice operations
pub type Result<T> = std::result::Result<T, SliceError>;

/// Main error type for the mdslice engine
#[derive(Error, Debug)]
pub enum SliceError {
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    #[error("Invalid path: {0}")]
    InvalidPath(String),

    #[error("Processing failed: {0}")]
    ProcessingFailed(String),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerdeError(#[from] serde_json::Error),

    #[error("TOML parsing error: {0}")]
    TomlError(#[from] toml::de::Error),
}

impl SliceError {
    /// Get user-friendly error message
    pub fn message(&self) -> String {
        self.to_string()
    }

    /// Check if this is a "not found" type error
    pub fn is_not_found(&self) -> bool {
        matches!(self, SliceError::InvalidPath(_))
    }

    /// Check if this is a bad request error (invalid input)
    pub fn is_bad_request(&self) -> bool {
        matches!(
            self,
            SliceError::InvalidConfig(_) | SliceError::InvalidPath(_)
        )
    }
}
