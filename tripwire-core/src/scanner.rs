//! Reader-driven scanning built on top of [`MarkerMatcher`]

use crate::config::ScanConfig;
use crate::error::{CoreError, Result};
use crate::matcher::MarkerMatcher;
use std::io::Read;
use std::time::Instant;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// One detected marker occurrence.
///
/// Offsets address the position just past the end of the occurrence within
/// the whole stream, counted from the start of the scan.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct MarkerHit {
    /// Scalar offset of the end of the occurrence
    pub char_offset: usize,
    /// Byte offset of the end of the occurrence
    pub byte_offset: usize,
}

/// Statistics collected over one scan
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct ScanMetadata {
    /// Total UTF-8 bytes consumed from the reader
    pub bytes_processed: usize,
    /// Total Unicode scalars consumed from the reader
    pub chars_processed: usize,
    /// Number of read calls that returned data
    pub chunks_read: usize,
    /// Wall-clock scan time in milliseconds
    pub processing_time_ms: u64,
}

/// Result of scanning one stream
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct ScanReport {
    /// The marker that was searched for
    pub marker: String,
    /// Every occurrence found, in stream order
    pub hits: Vec<MarkerHit>,
    /// Scan statistics
    pub metadata: ScanMetadata,
}

/// Scans byte streams for a marker, feeding a [`MarkerMatcher`] chunk by
/// chunk.
///
/// The scanner reads fixed-size byte chunks, re-assembles UTF-8 sequences
/// that were split by the read boundary, and records every occurrence the
/// matcher surfaces — including back-to-back occurrences completed by a
/// single chunk, which it drains with empty-chunk probes before reading
/// further input.
#[derive(Debug)]
pub struct StreamScanner {
    matcher: MarkerMatcher,
    config: ScanConfig,
}

impl StreamScanner {
    /// Create a scanner with the default configuration
    pub fn new(marker: &str) -> Result<Self> {
        Self::with_config(marker, ScanConfig::default())
    }

    /// Create a scanner with an explicit configuration
    pub fn with_config(marker: &str, config: ScanConfig) -> Result<Self> {
        if config.chunk_size == 0 {
            return Err(CoreError::InvalidChunkSize(config.chunk_size));
        }
        Ok(Self {
            matcher: MarkerMatcher::new(marker)?,
            config,
        })
    }

    /// The marker this scanner searches for
    pub fn marker(&self) -> &str {
        self.matcher.marker()
    }

    /// Scan a reader to exhaustion and report every marker occurrence.
    ///
    /// Each call starts a logically new stream: the matcher is reset before
    /// any data is read. Input must be valid UTF-8; a sequence split across
    /// read boundaries is carried over and re-assembled, while genuinely
    /// invalid or truncated input fails with [`CoreError::InvalidUtf8`].
    pub fn scan<R: Read>(&mut self, mut reader: R) -> Result<ScanReport> {
        let start = Instant::now();
        self.matcher.reset();

        let mut hits = Vec::new();
        let mut chunks_read = 0;
        let mut carry: Vec<u8> = Vec::new();
        let mut raw = vec![0u8; self.config.chunk_size];

        loop {
            let n = reader.read(&mut raw).map_err(CoreError::from)?;
            if n == 0 {
                break;
            }
            chunks_read += 1;

            let mut data = std::mem::take(&mut carry);
            data.extend_from_slice(&raw[..n]);

            let (text, rest) = split_utf8(&data, self.matcher.bytes_processed())?;
            self.feed(text, &mut hits);
            carry = rest.to_vec();
        }

        if !carry.is_empty() {
            // Stream ended in the middle of a multi-byte sequence.
            return Err(CoreError::InvalidUtf8 {
                offset: self.matcher.bytes_processed(),
            });
        }

        Ok(ScanReport {
            marker: self.matcher.marker().to_string(),
            hits,
            metadata: ScanMetadata {
                bytes_processed: self.matcher.bytes_processed(),
                chars_processed: self.matcher.chars_processed(),
                chunks_read,
                processing_time_ms: start.elapsed().as_millis() as u64,
            },
        })
    }

    /// Scan an in-memory string (convenience over [`scan`](Self::scan))
    pub fn scan_text(&mut self, text: &str) -> Result<ScanReport> {
        self.scan(text.as_bytes())
    }

    /// Feed one decoded chunk, then drain any backlog occurrences
    fn feed(&mut self, chunk: &str, hits: &mut Vec<MarkerHit>) {
        let mut piece = chunk;
        while self.matcher.append_and_check(piece) {
            hits.push(MarkerHit {
                char_offset: self.matcher.chars_processed() - self.matcher.pending_chars(),
                byte_offset: self.matcher.bytes_processed() - self.matcher.pending_bytes(),
            });
            piece = "";
        }
    }
}

/// Split raw bytes into the longest valid UTF-8 prefix and the incomplete
/// trailing sequence, if any. Bytes that can never complete a valid sequence
/// are an error, reported at their absolute stream offset.
fn split_utf8(data: &[u8], stream_offset: usize) -> Result<(&str, &[u8])> {
    match std::str::from_utf8(data) {
        Ok(text) => Ok((text, &data[data.len()..])),
        Err(err) => {
            let valid = err.valid_up_to();
            if err.error_len().is_some() {
                return Err(CoreError::InvalidUtf8 {
                    offset: stream_offset + valid,
                });
            }
            let (head, tail) = data.split_at(valid);
            let text = std::str::from_utf8(head).map_err(|_| CoreError::InvalidUtf8 {
                offset: stream_offset + valid,
            })?;
            Ok((text, tail))
        }
    }
}
