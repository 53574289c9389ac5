//! Error types for the bilex-core library.

use thiserror::Error;

/// Main error type for the bilex library.
#[derive(Error, Debug)]
pub enum BilexError {
    /// Field extraction error.
    #[error("extraction error: {0}")]
    Extraction(#[from] ExtractionError),

    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Configuration error.
    #[error("configuration error: {0}")]
    Config(String),
}

/// Errors related to bill field extraction.
///
/// A bill with no recognizable fields is not an error; every field degrades
/// to its zero-confidence sentinel instead. Only input that is not text at
/// all fails.
#[derive(Error, Debug)]
pub enum ExtractionError {
    /// Input bytes are not valid UTF-8 text.
    #[error("input is not valid UTF-8 text: {0}")]
    InvalidInput(String),
}

/// Result type for the bilex library.
pub type Result<T> = std::result::Result<T, BilexError>;
