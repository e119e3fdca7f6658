// textveil/src/ui/entity_table.rs
//! Rendering of the detection summary: the entity table, per-type counts,
//! and the similarity score.

use anyhow::Result;
use comfy_table::{presets::UTF8_FULL, Cell, ContentArrangement, Table};
use owo_colors::OwoColorize;
use std::io::Write;

use textveil_core::{count_by_type, EntitySpan, EntityType, RedactionReport};

/// Builds the Type / Text / Start / End table over a resolved entity list.
pub fn render_entity_table(entities: &[EntitySpan]) -> Table {
    let mut table = Table::new();
    table
        .load_preset(UTF8_FULL)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_header(vec!["Type", "Text", "Start", "End"]);

    for entity in entities {
        table.add_row(vec![
            Cell::new(entity.entity_type),
            Cell::new(&entity.text),
            Cell::new(entity.start),
            Cell::new(entity.end),
        ]);
    }
    table
}

/// Prints the total and per-type entity counts.
pub fn print_counts(entities: &[EntitySpan], writer: &mut dyn Write) -> Result<()> {
    writeln!(writer, "Entities detected: {}", entities.len())?;
    writeln!(
        writer,
        "  PERSON: {}  EMAIL_ADDRESS: {}  PHONE_NUMBER: {}",
        count_by_type(entities, EntityType::Person),
        count_by_type(entities, EntityType::EmailAddress),
        count_by_type(entities, EntityType::PhoneNumber),
    )?;
    Ok(())
}

/// Prints the full post-redaction summary: similarity score, counts, and the
/// entity table. The score carries one decimal, per the display contract.
pub fn print_summary(
    report: &RedactionReport,
    writer: &mut dyn Write,
    supports_color: bool,
) -> Result<()> {
    writeln!(writer)?;
    let score_line = format!("Similarity score: {:.1}%", report.similarity);
    if supports_color {
        writeln!(writer, "{}", score_line.bold())?;
    } else {
        writeln!(writer, "{}", score_line)?;
    }
    print_counts(&report.entities, writer)?;
    if !report.entities.is_empty() {
        writeln!(writer, "{}", render_entity_table(&report.entities))?;
    }
    Ok(())
}
