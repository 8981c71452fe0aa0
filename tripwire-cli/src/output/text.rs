//! Plain text output formatter

use super::OutputFormatter;
use anyhow::Result;
use std::io::{self, Write};
use tripwire_core::ScanReport;

/// Plain text formatter - one `source:byte_offset` line per hit plus a
/// per-source summary
pub struct TextFormatter<W: Write> {
    writer: W,
}

impl<W: Write> TextFormatter<W> {
    /// Create a new text formatter
    pub fn new(writer: W) -> Self {
        Self { writer }
    }
}

impl TextFormatter<io::Stdout> {
    /// Create a formatter that writes to stdout
    pub fn stdout() -> Self {
        Self::new(io::stdout())
    }
}

impl<W: Write> OutputFormatter for TextFormatter<W> {
    fn format_report(&mut self, source: &str, report: &ScanReport) -> Result<()> {
        let marker_bytes = report.marker.len();
        for hit in &report.hits {
            writeln!(self.writer, "{}:{}", source, hit.byte_offset - marker_bytes)?;
        }
        writeln!(
            self.writer,
            "{}: {} occurrences in {} bytes",
            source,
            report.hits.len(),
            report.metadata.bytes_processed
        )?;
        Ok(())
    }

    fn finish(&mut self) -> Result<()> {
        self.writer.flush()?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tripwire_core::StreamScanner;

    #[test]
    fn hits_print_start_offsets() {
        let mut scanner = StreamScanner::new("STOP").unwrap();
        let report = scanner.scan_text("xxSTOPyySTOP").unwrap();

        let mut out = Vec::new();
        let mut formatter = TextFormatter::new(&mut out);
        formatter.format_report("input.txt", &report).unwrap();
        formatter.finish().unwrap();

        let rendered = String::from_utf8(out).unwrap();
        assert!(rendered.contains("input.txt:2\n"));
        assert!(rendered.contains("input.txt:8\n"));
        assert!(rendered.contains("input.txt: 2 occurrences in 12 bytes"));
    }

    #[test]
    fn clean_source_prints_only_summary() {
        let mut scanner = StreamScanner::new("STOP").unwrap();
        let report = scanner.scan_text("nothing here").unwrap();

        let mut out = Vec::new();
        let mut formatter = TextFormatter::new(&mut out);
        formatter.format_report("clean.txt", &report).unwrap();

        let rendered = String::from_utf8(out).unwrap();
        assert_eq!(rendered, "clean.txt: 0 occurrences in 12 bytes\n");
    }
}
