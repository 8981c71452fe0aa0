//! Incremental marker matching over an append-only character stream

use crate::error::{CoreError, Result};

/// Detects occurrences of a fixed marker string in a growing text stream.
///
/// Text arrives in arbitrary chunks; the matcher carries just enough trailing
/// context between calls to recognize an occurrence that spans a chunk
/// boundary, while keeping memory bounded regardless of how much text has
/// been appended in total.
#[derive(Debug, Clone)]
pub struct MarkerMatcher {
    /// Marker to search for, as supplied at construction
    marker: String,
    /// Marker decomposed into Unicode scalars for window comparison
    marker_chars: Vec<char>,
    /// Carried suffix of the stream that may still participate in a match
    buffer: Vec<char>,
    /// Scalars appended since construction or the last reset
    chars_processed: usize,
    /// UTF-8 bytes appended since construction or the last reset
    bytes_processed: usize,
}

impl MarkerMatcher {
    /// Create a matcher that looks for `marker`.
    ///
    /// The marker is fixed for the matcher's lifetime. Comparison is exact
    /// Unicode-scalar equality: no case folding, no normalization.
    pub fn new(marker: &str) -> Result<Self> {
        if marker.is_empty() {
            return Err(CoreError::EmptyMarker);
        }
        Ok(Self {
            marker: marker.to_string(),
            marker_chars: marker.chars().collect(),
            buffer: Vec::new(),
            chars_processed: 0,
            bytes_processed: 0,
        })
    }

    /// The marker this matcher searches for
    pub fn marker(&self) -> &str {
        &self.marker
    }

    /// Append `chunk` to the stream and check for an unreported occurrence.
    ///
    /// Returns `true` if the carried buffer plus this chunk contains an
    /// occurrence of the marker that has not been reported before. At most
    /// one occurrence is surfaced per call: everything through the end of
    /// the first occurrence found is consumed, and any remaining text —
    /// including further complete occurrences — stays buffered for
    /// subsequent calls to surface. A call with an empty chunk can therefore
    /// still return `true` when a backlog occurrence is pending.
    ///
    /// When no occurrence is found, the buffer is trimmed to the longest
    /// suffix that is a proper prefix of the marker, so after any `false`
    /// return the carried state holds fewer scalars than the marker itself.
    pub fn append_and_check(&mut self, chunk: &str) -> bool {
        for ch in chunk.chars() {
            self.buffer.push(ch);
            self.chars_processed += 1;
            self.bytes_processed += ch.len_utf8();
        }

        if let Some(start) = self.find_first() {
            self.buffer.drain(..start + self.marker_chars.len());
            return true;
        }

        self.discard_unmatchable();
        false
    }

    /// Purge all accumulated state, keeping the marker.
    ///
    /// Call this before monitoring a logically new, independent stream.
    pub fn reset(&mut self) {
        self.buffer.clear();
        self.chars_processed = 0;
        self.bytes_processed = 0;
    }

    /// Scalars appended since construction or the last reset
    pub fn chars_processed(&self) -> usize {
        self.chars_processed
    }

    /// UTF-8 bytes appended since construction or the last reset
    pub fn bytes_processed(&self) -> usize {
        self.bytes_processed
    }

    /// Scalars currently carried in the buffer
    pub fn pending_chars(&self) -> usize {
        self.buffer.len()
    }

    /// UTF-8 length of the carried buffer
    pub fn pending_bytes(&self) -> usize {
        self.buffer.iter().map(|ch| ch.len_utf8()).sum()
    }

    /// Position of the first marker occurrence in the buffer, if complete
    fn find_first(&self) -> Option<usize> {
        let m = self.marker_chars.len();
        if self.buffer.len() < m {
            return None;
        }
        (0..=self.buffer.len() - m).find(|&i| self.buffer[i..i + m] == self.marker_chars[..])
    }

    /// Drop leading scalars that can no longer start an occurrence.
    ///
    /// Keeps the longest buffer suffix that is a proper prefix of the marker;
    /// every shorter viable suffix is contained in it, and anything earlier
    /// is already known not to match.
    fn discard_unmatchable(&mut self) {
        let max_keep = (self.marker_chars.len() - 1).min(self.buffer.len());
        let keep = (1..=max_keep)
            .rev()
            .find(|&k| self.buffer[self.buffer.len() - k..] == self.marker_chars[..k])
            .unwrap_or(0);
        self.buffer.drain(..self.buffer.len() - keep);
    }
}
