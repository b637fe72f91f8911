//! Error handling for the HDL converter
//!
//! The AST model itself cannot fail: mismatched literal payloads and absent
//! return types are ruled out by the types. The errors here cover the edges
//! of the system: raw tag conversion, configuration parsing, JSON text and
//! file I/O.

use thiserror::Error;

/// Main error type shared by every crate in the workspace
#[derive(Error, Debug, Clone, PartialEq)]
pub enum HdlError {
    #[error("Invalid symbol type tag: {raw}")]
    InvalidSymbolType { raw: i32 },

    #[error("Invalid document shape '{value}' (expected 'complete' or 'legacy')")]
    InvalidShape { value: String },

    #[error("Invalid language '{value}'")]
    InvalidLanguage { value: String },

    #[error("JSON error: {message}")]
    Json { message: String },

    #[error("IO error: {message}")]
    Io { message: String },
}

/// Result alias used across the workspace
pub type Result<T> = std::result::Result<T, HdlError>;

/// Convert from std::io::Error
impl From<std::io::Error> for HdlError {
    fn from(err: std::io::Error) -> Self {
        HdlError::Io {
            message: err.to_string(),
        }
    }
}

/// Convert from serde_json::Error
impl From<serde_json::Error> for HdlError {
    fn from(err: serde_json::Error) -> Self {
        HdlError::Json {
            message: err.to_string(),
        }
    }
}
