//! File access for streaming scans

use anyhow::{Context, Result};
use std::fs::{self, File};
use std::io::BufReader;
use std::path::Path;

/// Opens files for buffered streaming reads
pub struct FileReader;

impl FileReader {
    /// Open a file for buffered reading
    pub fn open(path: &Path) -> Result<BufReader<File>> {
        let file = File::open(path)
            .with_context(|| format!("Failed to open file: {}", path.display()))?;

        Ok(BufReader::new(file))
    }

    /// Get file size in bytes
    pub fn file_size(path: &Path) -> Result<u64> {
        let metadata = fs::metadata(path)
            .with_context(|| format!("Failed to get metadata for: {}", path.display()))?;

        Ok(metadata.len())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Read;
    use tempfile::TempDir;

    #[test]
    fn open_reads_full_content() {
        let temp_dir = TempDir::new().unwrap();
        let file_path = temp_dir.path().join("stream.txt");
        fs::write(&file_path, "chunked content").unwrap();

        let mut reader = FileReader::open(&file_path).unwrap();
        let mut content = String::new();
        reader.read_to_string(&mut content).unwrap();
        assert_eq!(content, "chunked content");
    }

    #[test]
    fn open_nonexistent_file_fails_with_path() {
        let result = FileReader::open(Path::new("/nonexistent/stream.txt"));
        let err_msg = result.unwrap_err().to_string();
        assert!(err_msg.contains("Failed to open file"));
    }

    #[test]
    fn file_size_matches_content() {
        let temp_dir = TempDir::new().unwrap();
        let file_path = temp_dir.path().join("sized.txt");
        fs::write(&file_path, "a".repeat(2048)).unwrap();

        assert_eq!(FileReader::file_size(&file_path).unwrap(), 2048);
    }
}
