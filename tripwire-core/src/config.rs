//! Scanner configuration

use crate::error::{CoreError, Result};

/// Default read size for stream scanning (64 KiB)
pub const DEFAULT_CHUNK_SIZE: usize = 64 * 1024;

/// Configuration for [`StreamScanner`](crate::StreamScanner)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScanConfig {
    /// Number of bytes requested from the reader per iteration
    pub chunk_size: usize,
}

impl Default for ScanConfig {
    fn default() -> Self {
        Self {
            chunk_size: DEFAULT_CHUNK_SIZE,
        }
    }
}

impl ScanConfig {
    /// Create a configuration with an explicit chunk size
    pub fn new(chunk_size: usize) -> Result<Self> {
        if chunk_size == 0 {
            return Err(CoreError::InvalidChunkSize(chunk_size));
        }
        Ok(Self { chunk_size })
    }
}
