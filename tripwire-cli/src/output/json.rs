//! JSON output formatter

use super::OutputFormatter;
use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::io::Write;
use tripwire_core::ScanReport;

/// JSON formatter - outputs one object per scanned source
pub struct JsonFormatter<W: Write> {
    writer: W,
    pretty: bool,
    reports: Vec<SourceReport>,
}

/// Data structure for JSON output
#[derive(Debug, Serialize, Deserialize)]
pub struct SourceReport {
    /// The scanned source (file path or `<stdin>`)
    pub source: String,
    /// The scan result for that source
    #[serde(flatten)]
    pub report: ScanReport,
}

impl<W: Write> JsonFormatter<W> {
    /// Create a new JSON formatter
    pub fn new(writer: W, pretty: bool) -> Self {
        Self {
            writer,
            pretty,
            reports: Vec::new(),
        }
    }
}

impl<W: Write> OutputFormatter for JsonFormatter<W> {
    fn format_report(&mut self, source: &str, report: &ScanReport) -> Result<()> {
        self.reports.push(SourceReport {
            source: source.to_string(),
            report: report.clone(),
        });
        Ok(())
    }

    fn finish(&mut self) -> Result<()> {
        if self.pretty {
            serde_json::to_writer_pretty(&mut self.writer, &self.reports)?;
        } else {
            serde_json::to_writer(&mut self.writer, &self.reports)?;
        }
        writeln!(self.writer)?;
        self.writer.flush()?;
        Ok(())
    }
}
