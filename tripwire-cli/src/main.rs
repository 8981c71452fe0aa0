//! Command-line entry point for tripwire

use clap::Parser;
use tripwire_cli::commands::Commands;

/// Detect marker strings in streaming text
#[derive(Debug, Parser)]
#[command(name = "tripwire", version, about, propagate_version = true)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

fn main() {
    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Scan(args) => args.execute(),
        Commands::GenerateConfig(args) => args.execute(),
    };

    if let Err(err) = result {
        eprintln!("Error: {err:#}");
        std::process::exit(1);
    }
}
