//! Error types for the core library

use thiserror::Error;

/// Errors reported by the core matcher and scanner
#[derive(Error, Debug)]
pub enum CoreError {
    /// Marker supplied at construction was empty
    #[error("marker must not be empty")]
    EmptyMarker,

    /// Scanner chunk size is unusable
    #[error("invalid chunk size: {0}")]
    InvalidChunkSize(usize),

    /// I/O error while reading a stream
    #[error("I/O error: {0}")]
    Io(String),

    /// Stream bytes were not valid UTF-8
    #[error("invalid UTF-8 at byte offset {offset}")]
    InvalidUtf8 {
        /// Byte position in the stream where the invalid sequence starts
        offset: usize,
    },
}

impl From<std::io::Error> for CoreError {
    fn from(err: std::io::Error) -> Self {
        CoreError::Io(err.to_string())
    }
}

/// Result type for core operations
pub type Result<T> = std::result::Result<T, CoreError>;
