// textveil/src/main.rs
//! Textveil entry point.
//!
//! Parses the CLI, initializes logging, and dispatches to the command
//! runners.

use anyhow::Result;
use clap::Parser;
use log::LevelFilter;

use textveil::cli::{Cli, Commands};
use textveil::commands::{redact, scan};
use textveil::logger;

fn main() -> Result<()> {
    let args = Cli::parse();

    let level = if args.debug {
        Some(LevelFilter::Debug)
    } else if args.quiet {
        Some(LevelFilter::Off)
    } else {
        None
    };
    logger::init_logger(level);

    match &args.command {
        Commands::Redact(cmd) => redact::run_redact(cmd, args.quiet),
        Commands::Scan(cmd) => scan::run_scan(cmd, args.quiet),
    }
}
