// textveil/src/commands/scan.rs
//! Scan command implementation: detection-only summary, no rewriting.

use anyhow::{Context, Result};
use log::info;
use serde::Serialize;
use std::fs;
use std::io::{self, Write};
use is_terminal::IsTerminal;

use textveil_core::{count_by_type, EntitySpan, EntityType, RedactionEngine};

use crate::cli::ScanCommand;
use crate::ui::{entity_table, output_format};

/// JSON payload for `--json-file` / `--json-stdout`.
#[derive(Serialize)]
struct ScanSummary<'a> {
    entities: &'a [EntitySpan],
    total: usize,
    person: usize,
    email_address: usize,
    phone_number: usize,
}

fn build_summary(entities: &[EntitySpan]) -> ScanSummary<'_> {
    ScanSummary {
        entities,
        total: entities.len(),
        person: count_by_type(entities, EntityType::Person),
        email_address: count_by_type(entities, EntityType::EmailAddress),
        phone_number: count_by_type(entities, EntityType::PhoneNumber),
    }
}

/// The main operation runner for `textveil scan`.
pub fn run_scan(cmd: &ScanCommand, quiet: bool) -> Result<()> {
    info!("Starting scan operation.");

    let input = super::read_input(cmd.input_file.as_ref())?;
    let config = super::load_config(cmd.config.as_ref(), &cmd.enable, &cmd.disable)?;
    let engine = RedactionEngine::new(config)?;
    let entities = engine.detect(&input)?;

    if cmd.json_stdout {
        let payload = build_summary(&entities);
        println!("{}", serde_json::to_string_pretty(&payload)?);
        info!("Scan operation completed.");
        return Ok(());
    }

    if let Some(path) = cmd.json_file.clone() {
        let payload = build_summary(&entities);
        let json = serde_json::to_string_pretty(&payload)?;
        fs::write(&path, json)
            .with_context(|| format!("Failed to write JSON summary to {}", path.display()))?;
        info!("Scan summary written to {}", path.display());
        return Ok(());
    }

    let stderr_supports_color = io::stderr().is_terminal();
    if entities.is_empty() {
        output_format::print_info_message(
            &mut io::stderr(),
            "No entities detected.",
            stderr_supports_color,
        )?;
        return Ok(());
    }

    let stdout = io::stdout();
    let mut writer = stdout.lock();
    entity_table::print_counts(&entities, &mut writer)?;
    if !quiet {
        writeln!(writer, "{}", entity_table::render_entity_table(&entities))?;
    }

    info!("Scan operation completed.");
    Ok(())
}
