//! xmltidy CLI - command-line interface for XML formatting

pub mod commands;

use clap::Parser;
use commands::Commands;

#[derive(Parser)]
#[command(name = "xmltidy")]
#[command(about = "xmltidy: pretty-print, compact and validate XML", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

/// Run the xmltidy CLI
///
/// # Errors
/// Returns an error when the requested operation fails.
pub fn run_cli() -> anyhow::Result<()> {
    // Setup logging
    tracing_subscriber::fmt::init();

    let cli = Cli::parse();
    cli.command.execute()?;

    Ok(())
}
