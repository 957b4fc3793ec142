//! Error types for prereq operations.
//!
//! Graph queries never fail: absence and cycles are reported through `Option`
//! and `bool`. Errors only come from the collaborators around the engine
//! (configuration files and matrix imports).

use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// The error type for prereq operations.
#[derive(Debug, Error)]
pub enum Error {
    /// IO error occurred.
    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    /// Configuration error.
    #[error("Configuration error: {0}")]
    Config(String),

    /// Matrix import failed.
    #[error(transparent)]
    Import(#[from] ImportError),
}

/// Errors raised while importing an adjacency-matrix file.
///
/// Rows parsed before the error stay committed to the target graph; the
/// import never rolls back.
#[derive(Debug, Error)]
pub enum ImportError {
    /// The import file could not be opened or read.
    #[error("Cannot read import file '{}': {source}", path.display())]
    Unavailable {
        /// Path of the import file
        path: PathBuf,
        /// Underlying IO error
        #[source]
        source: io::Error,
    },

    /// Reading from the import source failed mid-stream.
    #[error("Failed to read import data: {0}")]
    Read(#[from] io::Error),

    /// A token was not an integer.
    #[error("Malformed value '{token}' at line {line_number}, column {column}: expected an integer")]
    Malformed {
        /// 1-based line number
        line_number: usize,
        /// 1-based column number
        column: usize,
        /// The offending token, trimmed
        token: String,
    },
}

/// A specialized Result type for prereq operations.
pub type Result<T> = std::result::Result<T, Error>;
