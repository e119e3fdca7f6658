//! Rewriter: applies masking or redaction to the source text using a
//! resolved entity list.

use serde::{Deserialize, Serialize};

use crate::entity::EntitySpan;

/// How matched spans are rewritten in the output text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RedactionMode {
    /// Replace each span with its bracketed type label.
    Mask,
    /// Remove each span entirely.
    Redact,
}

/// Rewrites `text`, replacing every entity span according to `mode`.
///
/// Entities are processed in descending start order so earlier replacements
/// never invalidate the offsets of spans still to be processed. The entity
/// list itself is left untouched; a new string is returned.
pub fn rewrite(text: &str, entities: &[EntitySpan], mode: RedactionMode) -> String {
    let mut ordered: Vec<&EntitySpan> = entities.iter().collect();
    ordered.sort_by(|a, b| b.start.cmp(&a.start));

    let mut output = text.to_string();
    for entity in ordered {
        let replacement = match mode {
            RedactionMode::Mask => format!("[{}]", entity.entity_type),
            RedactionMode::Redact => String::new(),
        };
        output.replace_range(entity.start..entity.end, &replacement);
    }
    output
}
