//! maxwalk - Directory walking with cancellable file notifications
//!
//! maxwalk provides:
//! - Depth-first walking that announces a directory's files before its subdirectories
//! - Early cancellation from a per-file stop rule
//! - Max-by-score file selection (largest or newest file)
//! - Unified output format (jsonl/json/md/raw)

use anyhow::Result;
use clap::Parser;
use maxwalk::cli;
use tracing::Level;

fn main() -> Result<()> {
    let cli = cli::Cli::parse();
    init_logging(&cli);
    cli::run(cli)
}

/// Diagnostics go to stderr so stdout stays machine-readable
fn init_logging(cli: &cli::Cli) {
    let level = if cli.quiet {
        Level::WARN
    } else if cli.verbose {
        Level::DEBUG
    } else {
        Level::INFO
    };

    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_max_level(level)
        .with_ansi(!cli.no_color)
        .with_target(false)
        .init();
}
