// textveil/src/commands/redact.rs
//! Redact command implementation: runs the full pipeline and routes the
//! rewritten text, summary, and optional JSON report.

use anyhow::{Context, Result};
use log::{debug, info};
use serde::Serialize;
use std::fs;
use std::io::{self, Write};
use is_terminal::IsTerminal;

use textveil_core::{EntitySpan, EntityType, RedactionEngine, RedactionReport};

use crate::cli::RedactCommand;
use crate::ui::entity_table;

/// JSON payload for `--json-stdout`.
#[derive(Serialize)]
struct JsonReport<'a> {
    output: &'a str,
    similarity: f64,
    entities: &'a [EntitySpan],
    counts: JsonCounts,
}

#[derive(Serialize)]
struct JsonCounts {
    total: usize,
    person: usize,
    email_address: usize,
    phone_number: usize,
}

fn build_json_report(report: &RedactionReport) -> JsonReport<'_> {
    JsonReport {
        output: &report.output,
        similarity: report.similarity,
        entities: &report.entities,
        counts: JsonCounts {
            total: report.entities.len(),
            person: report.count_of(EntityType::Person),
            email_address: report.count_of(EntityType::EmailAddress),
            phone_number: report.count_of(EntityType::PhoneNumber),
        },
    }
}

/// The main operation runner for `textveil redact`.
pub fn run_redact(cmd: &RedactCommand, quiet: bool) -> Result<()> {
    info!("Starting redact operation.");

    let input = super::read_input(cmd.input_file.as_ref())?;
    let config = super::load_config(cmd.config.as_ref(), &cmd.enable, &cmd.disable)?;
    let engine = RedactionEngine::new(config)?;
    let report = engine.process(&input, cmd.mode.into())?;

    debug!(
        "Content rewritten. Original length: {}, output length: {}",
        input.len(),
        report.output.len()
    );

    if cmd.json_stdout {
        let payload = build_json_report(&report);
        println!("{}", serde_json::to_string_pretty(&payload)?);
        info!("Redact operation completed.");
        return Ok(());
    }

    handle_primary_output(cmd, &report.output)?;
    handle_summary(&report, cmd.no_summary, quiet)?;

    info!("Redact operation completed.");
    Ok(())
}

fn handle_primary_output(cmd: &RedactCommand, output: &str) -> Result<()> {
    if let Some(path) = cmd.output.clone() {
        info!("Writing rewritten content to file: {}", path.display());
        let mut file = fs::File::create(&path)
            .with_context(|| format!("Failed to create output file: {}", path.display()))?;
        writeln!(file, "{}", output)?;
    } else {
        let stdout = io::stdout();
        let mut writer = stdout.lock();
        writeln!(writer, "{}", output)?;
    }
    Ok(())
}

fn handle_summary(report: &RedactionReport, no_summary: bool, quiet: bool) -> Result<()> {
    if !no_summary && !quiet {
        let stderr_supports_color = io::stderr().is_terminal();
        entity_table::print_summary(report, &mut io::stderr(), stderr_supports_color)?;
    }
    Ok(())
}
