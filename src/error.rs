//! Error types for countrygen

use std::io;
use thiserror::Error;

/// Main error type for countrygen
#[derive(Error, Debug)]
pub enum CodegenError {
    /// A country code had the wrong length or a character outside `A..=Z`
    #[error("Invalid ISO code: {code:?} (expected {expected} uppercase letters)")]
    InvalidCode { code: String, expected: usize },

    #[error("Country not found: {0}")]
    NotFound(String),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("INI parse error: {0}")]
    IniParse(String),
}

/// Result type alias for countrygen operations
pub type Result<T> = std::result::Result<T, CodegenError>;

impl CodegenError {
    /// Shorthand for an [`CodegenError::InvalidCode`] carrying the offending code
    pub fn invalid_code(code: &str, expected: usize) -> Self {
        CodegenError::InvalidCode {
            code: code.to_string(),
            expected,
        }
    }
}
