//! Error types for FASTA loading and parsing.

use std::path::PathBuf;
use thiserror::Error;

/// Result type alias for fastatype operations
pub type Result<T> = std::result::Result<T, FastaError>;

/// Errors raised while loading, parsing or writing FASTA files.
#[derive(Debug, Error)]
pub enum FastaError {
    /// Path is missing or is not a regular file
    #[error("{} does not exist or is not a regular file", .path.display())]
    FileNotFound {
        /// Path that was requested
        path: PathBuf,
    },

    /// Malformed FASTA content
    #[error("Invalid FASTA format at line {line}: {msg}")]
    InvalidFormat {
        /// 1-based line number where the problem was found
        line: usize,
        /// Error message
        msg: String,
    },

    /// I/O error while reading or writing
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}
