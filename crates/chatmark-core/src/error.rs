//! Error types for chatmark
//!
//! Parsing itself never fails; these cover the I/O, configuration and
//! output layers wrapped around the parser.

use thiserror::Error;

/// Main error type for chatmark operations
#[derive(Error, Debug)]
pub enum ChatmarkError {
    /// IO error while reading input or writing output
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),

    /// Output error while serializing a document
    #[error("Output error: {0}")]
    Output(String),
}

/// Result type alias for chatmark operations
pub type Result<T> = std::result::Result<T, ChatmarkError>;
