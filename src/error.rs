// file: src/error.rs
// description: Custom error types and result type aliases
// reference: https://docs.rs/thiserror

use crate::models::DocumentFormat;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, SummarizeError>;

#[derive(Error, Debug)]
pub enum SummarizeError {
    #[error("Unsupported file format: {0} (expected .pdf, .docx or .txt)")]
    UnsupportedFormat(String),

    #[error("Text is not valid UTF-8: {0}")]
    Decode(String),

    #[error("Could not read {format} document: {message}")]
    Extraction {
        format: DocumentFormat,
        message: String,
    },

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Validation error: {0}")]
    Validation(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(String),
}

impl SummarizeError {
    pub fn extraction(format: DocumentFormat, message: impl Into<String>) -> Self {
        Self::Extraction {
            format,
            message: message.into(),
        }
    }
}

impl From<serde_json::Error> for SummarizeError {
    fn from(err: serde_json::Error) -> Self {
        Self::Serialization(err.to_string())
    }
}
