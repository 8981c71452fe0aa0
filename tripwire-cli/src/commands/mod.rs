//! CLI command implementations

use clap::Subcommand;

pub mod generate_config;
pub mod scan;

/// Available CLI commands
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Scan files or stdin for a marker string
    Scan(scan::ScanArgs),

    /// Generate a configuration file template
    GenerateConfig(generate_config::GenerateConfigArgs),
}
