//! Error types for the AcroForm inspector

use std::path::PathBuf;
use thiserror::Error;

/// Result type alias using our Error type
pub type Result<T> = std::result::Result<T, Error>;

/// Main error type for the inspector library
#[derive(Error, Debug)]
pub enum Error {
    /// PDF processing error
    #[error("PDF error: {0}")]
    Pdf(#[from] lopdf::Error),

    /// File not found
    #[error("File not found: {}", .0.display())]
    FileNotFound(PathBuf),

    /// Widget rectangle that is not four numbers
    #[error("Malformed /Rect: {0}")]
    MalformedRect(String),

    /// Dictionary entry with an unexpected object type
    #[error("Unexpected type for /{key}: expected {expected}")]
    UnexpectedType {
        key: String,
        expected: &'static str,
    },

    /// General error
    #[error("{0}")]
    General(String),
}

impl Error {
    pub(crate) fn unexpected(key: &[u8], expected: &'static str) -> Self {
        Error::UnexpectedType {
            key: String::from_utf8_lossy(key).into_owned(),
            expected,
        }
    }
}
