//! Incremental marker detection over chunked text streams
//!
//! This crate answers one question efficiently: has a fixed marker string
//! appeared yet in a stream of text that arrives chunk by chunk? Occurrences
//! are detected even when they span chunk boundaries, and the carried state
//! stays bounded by the marker length no matter how much text flows through.
//!
//! The typical host feeds tokens from a streaming source (a model response,
//! a transcript, a log tail) and treats a `true` result as "the sentinel has
//! now definitively appeared".
//!
//! # Example
//!
//! ```rust
//! use tripwire_core::MarkerMatcher;
//!
//! let mut matcher = MarkerMatcher::new("<|done|>")?;
//!
//! // The marker may arrive split across any number of chunks.
//! assert!(!matcher.append_and_check("streaming text <|do"));
//! assert!(matcher.append_and_check("ne|> trailing"));
//!
//! // Start over for an independent stream.
//! matcher.reset();
//! assert!(!matcher.append_and_check("fresh"));
//! # Ok::<(), tripwire_core::CoreError>(())
//! ```
//!
//! For whole files or sockets, [`StreamScanner`] drives a matcher over any
//! [`std::io::Read`], handling UTF-8 sequences split by read boundaries and
//! reporting the offset of every occurrence.

#![warn(missing_docs)]

pub mod config;
pub mod error;
pub mod matcher;
pub mod scanner;

pub use config::{ScanConfig, DEFAULT_CHUNK_SIZE};
pub use error::{CoreError, Result};
pub use matcher::MarkerMatcher;
pub use scanner::{MarkerHit, ScanMetadata, ScanReport, StreamScanner};
