//! Error handling for the CLI application

use std::fmt;

/// Custom error type for CLI-specific errors
#[derive(Debug)]
pub enum CliError {
    /// No marker supplied on the command line or in a config file
    MissingMarker,
    /// Invalid input file pattern
    InvalidPattern(String),
    /// Configuration error
    ConfigError(String),
    /// Scan failure from core
    ScanError(String),
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CliError::MissingMarker => {
                write!(f, "No marker specified: pass --marker or set one in a config file")
            }
            CliError::InvalidPattern(pattern) => write!(f, "Invalid file pattern: {pattern}"),
            CliError::ConfigError(msg) => write!(f, "Configuration error: {msg}"),
            CliError::ScanError(msg) => write!(f, "Scan error: {msg}"),
        }
    }
}

impl std::error::Error for CliError {}

/// Result type alias for CLI operations
pub type CliResult<T> = Result<T, anyhow::Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_marker_display() {
        let error = CliError::MissingMarker;
        assert!(error.to_string().contains("--marker"));
    }

    #[test]
    fn invalid_pattern_display() {
        let error = CliError::InvalidPattern("[invalid".to_string());
        assert_eq!(error.to_string(), "Invalid file pattern: [invalid");
    }

    #[test]
    fn config_error_display() {
        let error = CliError::ConfigError("missing field 'marker'".to_string());
        assert_eq!(
            error.to_string(),
            "Configuration error: missing field 'marker'"
        );
    }

    #[test]
    fn error_trait_object() {
        let error = CliError::ScanError("short read".to_string());
        let _: &dyn std::error::Error = &error;
        assert!(format!("{:?}", error).contains("ScanError"));
    }
}
