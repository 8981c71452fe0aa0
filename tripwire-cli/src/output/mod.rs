//! Output formatting module

use anyhow::Result;
use tripwire_core::ScanReport;

/// Trait for output formatters
pub trait OutputFormatter {
    /// Format the scan result for one source
    fn format_report(&mut self, source: &str, report: &ScanReport) -> Result<()>;

    /// Finalize output (e.g., close JSON document)
    fn finish(&mut self) -> Result<()>;
}

pub mod json;
pub mod text;

pub use json::JsonFormatter;
pub use text::TextFormatter;
