// textveil/src/cli.rs
//! This file defines the command-line interface (CLI) for the textveil
//! application, including all available commands and their arguments.

use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;
use textveil_core::RedactionMode;

/// Top-level CLI definition.
#[derive(Parser, Debug)]
#[command(
    name = "textveil",
    author = "Veilworks",
    version = env!("CARGO_PKG_VERSION"),
    about = "Detect and redact personally identifiable information in text",
    long_about = "Textveil is a command-line utility for finding personally identifiable information (PII) in free-form text and producing a transformed copy with the detected spans removed or replaced by type labels. Detection is rule-based: structured regex patterns, dictionary lookups, and capitalization heuristics. Alongside the rewritten text it reports a similarity score and a breakdown of detections by category.",
    arg_required_else_help = true,
)]
pub struct Cli {
    /// Disable informational messages
    #[arg(long, short = 'q', help = "Suppress all informational and debug messages.")]
    pub quiet: bool,

    /// Enable debug logging (overrides RUST_LOG for 'textveil' crate to DEBUG)
    #[arg(long, short = 'd', help = "Enable debug logging.")]
    pub debug: bool,

    /// The subcommand to run
    #[command(subcommand)]
    pub command: Commands,
}

/// All available commands for the `textveil` CLI.
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Rewrites an input file or stdin, masking or removing detected PII.
    #[command(about = "Rewrites an input file or stdin, masking or removing detected PII.")]
    Redact(RedactCommand),

    /// Scans an input for PII and prints a detection summary without rewriting.
    #[command(about = "Scans an input for PII and prints a detection summary without rewriting.")]
    Scan(ScanCommand),
}

/// Arguments for the `redact` command.
#[derive(Parser, Debug)]
pub struct RedactCommand {
    /// Path to an input file (reads from stdin if not provided).
    #[arg(long, short = 'i', value_name = "FILE", help = "Read input from a specified file instead of stdin.")]
    pub input_file: Option<PathBuf>,

    /// Write rewritten output to this file instead of stdout.
    #[arg(long, short = 'o', value_name = "FILE", help = "Write output to a specified file instead of stdout.")]
    pub output: Option<PathBuf>,

    /// How detected spans are rewritten.
    #[arg(long, short = 'm', value_enum, default_value = "mask", help = "Replace spans with bracketed type labels (mask) or remove them (redact).")]
    pub mode: ModeChoice,

    /// Path to a custom pattern configuration file (YAML).
    #[arg(long = "config", value_name = "FILE", help = "Path to a custom pattern configuration file (YAML).")]
    pub config: Option<PathBuf>,

    /// Explicitly enable only these pattern names (comma-separated).
    #[arg(long, short = 'e', value_delimiter = ',', help = "Explicitly enable only these pattern names (comma-separated).")]
    pub enable: Vec<String>,

    /// Explicitly disable these pattern names (comma-separated).
    #[arg(long, short = 'x', value_delimiter = ',', help = "Explicitly disable these pattern names (comma-separated).")]
    pub disable: Vec<String>,

    /// Suppress the detection summary.
    #[arg(long = "no-summary", help = "Suppress the detection summary.")]
    pub no_summary: bool,

    /// Print the full report as JSON to stdout.
    #[arg(long = "json-stdout", help = "Print the full report (output, score, entities, counts) as JSON to stdout.")]
    pub json_stdout: bool,
}

/// Arguments for the `scan` command.
#[derive(Parser, Debug)]
pub struct ScanCommand {
    /// Path to an input file (reads from stdin if not provided).
    #[arg(long, short = 'i', value_name = "FILE", help = "Read input from a specified file instead of stdin.")]
    pub input_file: Option<PathBuf>,

    /// Path to a custom pattern configuration file (YAML).
    #[arg(long = "config", value_name = "FILE", help = "Path to a custom pattern configuration file (YAML).")]
    pub config: Option<PathBuf>,

    /// Explicitly enable only these pattern names (comma-separated).
    #[arg(long = "enable", short = 'e', value_delimiter = ',', help = "Explicitly enable only these pattern names (comma-separated).")]
    pub enable: Vec<String>,

    /// Explicitly disable these pattern names (comma-separated).
    #[arg(long = "disable", short = 'x', value_delimiter = ',', help = "Explicitly disable these pattern names (comma-separated).")]
    pub disable: Vec<String>,

    /// Export the detection summary to a JSON file.
    #[arg(long = "json-file", value_name = "FILE", help = "Export the detection summary to a JSON file.")]
    pub json_file: Option<PathBuf>,

    /// Print the detection summary as JSON to stdout (conflicts with --json-file).
    #[arg(long = "json-stdout", conflicts_with = "json_file", help = "Export the detection summary to stdout as JSON.")]
    pub json_stdout: bool,
}

/// Enum for selecting how detected spans are rewritten.
#[derive(Debug, Clone, Copy, ValueEnum, PartialEq, Eq)]
pub enum ModeChoice {
    /// Replace each detected span with its bracketed type label.
    Mask,
    /// Remove each detected span entirely.
    Redact,
}

impl From<ModeChoice> for RedactionMode {
    fn from(choice: ModeChoice) -> Self {
        match choice {
            ModeChoice::Mask => RedactionMode::Mask,
            ModeChoice::Redact => RedactionMode::Redact,
        }
    }
}
