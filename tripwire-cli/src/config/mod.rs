//! Configuration module

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// CLI configuration structure
#[derive(Debug, Deserialize, Serialize, Default)]
pub struct CliConfig {
    /// Scan configuration
    #[serde(default)]
    pub scan: ScanSection,

    /// Output configuration
    #[serde(default)]
    pub output: OutputSection,

    /// Performance configuration
    #[serde(default)]
    pub performance: PerformanceSection,
}

/// Scan-related configuration
#[derive(Debug, Deserialize, Serialize, Default)]
#[serde(default)]
pub struct ScanSection {
    /// Marker string to detect
    pub marker: Option<String>,
}

/// Output-related configuration
#[derive(Debug, Deserialize, Serialize)]
#[serde(default)]
pub struct OutputSection {
    /// Default output format ("text" or "json")
    pub default_format: String,

    /// Pretty print JSON output
    pub pretty_json: bool,
}

impl Default for OutputSection {
    fn default() -> Self {
        Self {
            default_format: "text".to_string(),
            pretty_json: true,
        }
    }
}

/// Performance-related configuration
#[derive(Debug, Deserialize, Serialize)]
#[serde(default)]
pub struct PerformanceSection {
    /// Read size for streaming input (KiB)
    pub chunk_size_kb: usize,

    /// Number of worker threads for parallel scans (0 = auto)
    pub worker_threads: usize,
}

impl Default for PerformanceSection {
    fn default() -> Self {
        Self {
            chunk_size_kb: 64,
            worker_threads: 0,
        }
    }
}

impl CliConfig {
    /// Load configuration from a TOML file
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;

        toml::from_str(&content)
            .with_context(|| format!("Failed to parse config file: {}", path.display()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_sensible() {
        let config = CliConfig::default();
        assert!(config.scan.marker.is_none());
        assert_eq!(config.output.default_format, "text");
        assert!(config.output.pretty_json);
        assert_eq!(config.performance.chunk_size_kb, 64);
        assert_eq!(config.performance.worker_threads, 0);
    }

    #[test]
    fn partial_config_fills_defaults() {
        let config: CliConfig = toml::from_str(
            r#"
            [scan]
            marker = "<|done|>"
            "#,
        )
        .unwrap();

        assert_eq!(config.scan.marker.as_deref(), Some("<|done|>"));
        assert_eq!(config.output.default_format, "text");
        assert_eq!(config.performance.chunk_size_kb, 64);
    }

    #[test]
    fn full_config_round_trips() {
        let config: CliConfig = toml::from_str(
            r#"
            [scan]
            marker = "STOP"

            [output]
            default_format = "json"
            pretty_json = false

            [performance]
            chunk_size_kb = 8
            worker_threads = 4
            "#,
        )
        .unwrap();

        assert_eq!(config.scan.marker.as_deref(), Some("STOP"));
        assert_eq!(config.output.default_format, "json");
        assert!(!config.output.pretty_json);
        assert_eq!(config.performance.chunk_size_kb, 8);
        assert_eq!(config.performance.worker_threads, 4);
    }
}
