//! Generate config command implementation

use anyhow::{Context, Result};
use clap::Args;
use std::path::PathBuf;

/// Arguments for the generate-config command
#[derive(Debug, Args)]
pub struct GenerateConfigArgs {
    /// Marker to pre-fill in the template
    #[arg(short, long, value_name = "STRING", default_value = "<|done|>")]
    pub marker: String,

    /// Output file path
    #[arg(short, long, value_name = "FILE", required = true)]
    pub output: PathBuf,
}

impl GenerateConfigArgs {
    /// Execute the generate-config command
    pub fn execute(&self) -> Result<()> {
        use std::fs;

        println!("Generating configuration template...");
        println!("  Marker: {}", self.marker);
        println!("  Output file: {}", self.output.display());

        let template = self.generate_template();

        fs::write(&self.output, template)
            .with_context(|| format!("Failed to write to {}", self.output.display()))?;

        println!("✓ Configuration template generated successfully!");
        println!();
        println!("Next steps:");
        println!("1. Edit the configuration file to adjust the marker or defaults");
        println!("2. Use it for scanning:");
        println!(
            "   tripwire scan -i input.txt --config {}",
            self.output.display()
        );

        Ok(())
    }

    /// Generate template configuration content
    fn generate_template(&self) -> String {
        format!(
            r#"# tripwire configuration

[scan]
# Marker string to detect in the stream
marker = "{}"

[output]
# Default output format: "text" or "json"
default_format = "text"
# Pretty print JSON output
pretty_json = true

[performance]
# Read size for streaming input (KiB)
chunk_size_kb = 64
# Worker threads for parallel scans (0 = auto)
worker_threads = 0
"#,
            self.marker
        )
    }
}
