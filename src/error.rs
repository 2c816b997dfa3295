//! Error types for the textsift library.
//!
//! The core validation, extraction, and analysis operations are total and
//! never fail. Errors only arise at the edges: reading configuration,
//! building user-supplied patterns, and rejecting malformed arguments to
//! the transformation utilities.

use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Result type alias for fallible textsift operations.
pub type TextSiftResult<T> = Result<T, TextSiftError>;

/// Error type for all fallible textsift operations.
#[derive(Debug, Error)]
pub enum TextSiftError {
    /// Error occurred while reading a file
    #[error("IO error for path '{}': {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// Configuration file could not be parsed
    #[error("Invalid configuration in '{}': {reason}", path.display())]
    Config { path: PathBuf, reason: String },

    /// Pattern compilation error
    #[error("Pattern error for '{pattern}': {reason}")]
    PatternError { pattern: String, reason: String },

    /// Invalid arguments or parameters
    #[error("Invalid input for '{parameter}': {reason}")]
    InvalidInput { parameter: String, reason: String },

    /// Text-cleaning operation name not recognized
    #[error("Unknown cleaning operation '{name}'")]
    UnknownOperation { name: String },
}
