//! Scan command implementation

use crate::config::CliConfig;
use crate::error::CliError;
use crate::input::{self, FileReader};
use crate::output::{JsonFormatter, OutputFormatter, TextFormatter};
use crate::progress::ProgressReporter;
use anyhow::{Context, Result};
use clap::Args;
use rayon::prelude::*;
use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::PathBuf;
use tripwire_core::{ScanConfig, ScanReport, StreamScanner};

/// Arguments for the scan command
#[derive(Debug, Args)]
pub struct ScanArgs {
    /// Input files or patterns (supports glob), or "-" for stdin
    #[arg(short, long, value_name = "FILE/PATTERN", required = true)]
    pub input: Vec<String>,

    /// Marker string to search for (overrides the config file)
    #[arg(short, long, value_name = "STRING")]
    pub marker: Option<String>,

    /// Output file (default: stdout)
    #[arg(short, long, value_name = "FILE")]
    pub output: Option<PathBuf>,

    /// Output format (default: text, or the config file setting)
    #[arg(short, long, value_enum)]
    pub format: Option<OutputFormat>,

    /// Configuration file
    #[arg(short, long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Read size in KiB for streaming input
    #[arg(long, value_name = "KB")]
    pub chunk_kb: Option<usize>,

    /// Scan multiple files in parallel
    #[arg(short, long)]
    pub parallel: bool,

    /// Worker threads for parallel scanning (0 = auto)
    #[arg(short, long, value_name = "N")]
    pub threads: Option<usize>,

    /// Suppress progress output
    #[arg(short, long)]
    pub quiet: bool,

    /// Increase verbosity
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

/// Supported output formats
#[derive(Debug, Clone, Copy, clap::ValueEnum)]
pub enum OutputFormat {
    /// One `source:byte_offset` line per hit plus a per-source summary
    Text,
    /// JSON array of per-source reports with metadata
    Json,
}

impl ScanArgs {
    /// Execute the scan command
    pub fn execute(&self) -> Result<()> {
        self.init_logging();

        let config = match &self.config {
            Some(path) => CliConfig::load(path)?,
            None => CliConfig::default(),
        };

        let marker = match self.marker.clone().or_else(|| config.scan.marker.clone()) {
            Some(marker) => marker,
            None => return Err(CliError::MissingMarker.into()),
        };

        let chunk_kb = self.chunk_kb.unwrap_or(config.performance.chunk_size_kb);
        let scan_config = ScanConfig::new(chunk_kb.saturating_mul(1024))
            .map_err(|e| CliError::ConfigError(e.to_string()))?;

        log::info!("Scanning for marker {:?}", marker);
        log::debug!("Arguments: {:?}", self);

        let results = if self.reads_stdin() {
            let report = self.scan_stdin(&marker, scan_config)?;
            vec![("<stdin>".to_string(), report)]
        } else {
            self.scan_files(&marker, scan_config, &config)?
        };

        let total: usize = results.iter().map(|(_, report)| report.hits.len()).sum();
        log::info!(
            "Found {} occurrences across {} sources",
            total,
            results.len()
        );

        self.write_results(&results, &config)
    }

    fn reads_stdin(&self) -> bool {
        self.input.len() == 1 && self.input[0] == "-"
    }

    fn scan_stdin(&self, marker: &str, scan_config: ScanConfig) -> Result<ScanReport> {
        let mut scanner = StreamScanner::with_config(marker, scan_config)?;
        let report = scanner
            .scan(io::stdin().lock())
            .context("Failed to scan stdin")?;
        Ok(report)
    }

    fn scan_files(
        &self,
        marker: &str,
        scan_config: ScanConfig,
        config: &CliConfig,
    ) -> Result<Vec<(String, ScanReport)>> {
        let files = input::resolve_patterns(&self.input)?;
        log::debug!("Resolved {} input files", files.len());

        let mut progress = ProgressReporter::new(self.quiet);
        progress.start(files.len() as u64);

        let scan_one = |path: &PathBuf| -> Result<(String, ScanReport)> {
            let reader = FileReader::open(path)?;
            let mut scanner = StreamScanner::with_config(marker, scan_config)?;
            let report = scanner
                .scan(reader)
                .with_context(|| format!("Failed to scan {}", path.display()))?;
            progress.source_completed(&path.display().to_string());
            Ok((path.display().to_string(), report))
        };

        let results: Result<Vec<_>> = if self.parallel && files.len() > 1 {
            let requested = self.threads.unwrap_or(config.performance.worker_threads);
            let threads = if requested == 0 {
                num_cpus::get()
            } else {
                requested
            };
            let pool = rayon::ThreadPoolBuilder::new()
                .num_threads(threads)
                .build()
                .context("Failed to build scan thread pool")?;
            pool.install(|| files.par_iter().map(scan_one).collect())
        } else {
            files.iter().map(scan_one).collect()
        };

        progress.finish();
        results
    }

    fn write_results(&self, results: &[(String, ScanReport)], config: &CliConfig) -> Result<()> {
        let writer: Box<dyn Write> = match &self.output {
            Some(path) => {
                let file = File::create(path).with_context(|| {
                    format!("Failed to create output file: {}", path.display())
                })?;
                Box::new(BufWriter::new(file))
            }
            None => Box::new(io::stdout()),
        };

        let mut formatter: Box<dyn OutputFormatter> = match self.resolve_format(config)? {
            OutputFormat::Text => Box::new(TextFormatter::new(writer)),
            OutputFormat::Json => Box::new(JsonFormatter::new(writer, config.output.pretty_json)),
        };

        for (source, report) in results {
            formatter.format_report(source, report)?;
        }
        formatter.finish()
    }

    fn resolve_format(&self, config: &CliConfig) -> Result<OutputFormat> {
        if let Some(format) = self.format {
            return Ok(format);
        }
        match config.output.default_format.as_str() {
            "text" => Ok(OutputFormat::Text),
            "json" => Ok(OutputFormat::Json),
            other => {
                Err(CliError::ConfigError(format!("unknown output format: {other}")).into())
            }
        }
    }

    /// Initialize logging based on verbosity level
    fn init_logging(&self) {
        let log_level = match self.verbose {
            0 => "warn",
            1 => "info",
            2 => "debug",
            _ => "trace",
        };

        if !self.quiet {
            env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(log_level))
                .init();
        }
    }
}
