//! Cachepack CLI - command-line interface for dependency cache packing

pub mod commands;
pub mod progress;

use clap::Parser;
use commands::Commands;

#[derive(Parser)]
#[command(name = "cachepack")]
#[command(about = "Pack dependency caches into a portable archive", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

/// Run the cachepack CLI
pub fn run_cli() -> anyhow::Result<()> {
    // Setup logging
    tracing_subscriber::fmt::init();

    let cli = Cli::parse();
    cli.command.execute()?;

    Ok(())
}
