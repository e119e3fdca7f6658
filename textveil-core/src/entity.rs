// textveil-core/src/entity.rs
//! Core data structures for detected entities, plus utility functions for
//! counting, filtering, and logging entity contents without leaking PII
//! into debug output.

use serde::{Serialize, Deserialize};
use log::debug;
use std::fmt;

use lazy_static::lazy_static;

lazy_static! {
    /// A static boolean that is initialized once to determine if PII is allowed in debug logs.
    static ref PII_DEBUG_ALLOWED: bool = {
        std::env::var("TEXTVEIL_ALLOW_DEBUG_PII")
            .map(|s| s.eq_ignore_ascii_case("true"))
            .unwrap_or(false)
    };
}

/// The fixed set of entity categories the detection pipeline can emit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum EntityType {
    EmailAddress,
    PhoneNumber,
    IpAddress,
    CreditCard,
    Url,
    DateTime,
    Person,
    Location,
}

impl EntityType {
    /// The canonical label used in masked output and reports.
    pub fn label(&self) -> &'static str {
        match self {
            EntityType::EmailAddress => "EMAIL_ADDRESS",
            EntityType::PhoneNumber => "PHONE_NUMBER",
            EntityType::IpAddress => "IP_ADDRESS",
            EntityType::CreditCard => "CREDIT_CARD",
            EntityType::Url => "URL",
            EntityType::DateTime => "DATE_TIME",
            EntityType::Person => "PERSON",
            EntityType::Location => "LOCATION",
        }
    }
}

impl fmt::Display for EntityType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// A single detected entity: a typed, positioned substring of the source text.
///
/// `start` and `end` are byte offsets into the source text, always on
/// character boundaries, with `end` exclusive. `text` is the exact substring
/// of the source at `[start, end)`, original casing preserved.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EntitySpan {
    pub entity_type: EntityType,
    pub text: String,
    pub start: usize,
    pub end: usize,
}

impl EntitySpan {
    /// Builds a span over `source[start..end]`, capturing the original-case text.
    pub fn new(entity_type: EntityType, source: &str, start: usize, end: usize) -> Self {
        Self {
            entity_type,
            text: source[start..end].to_string(),
            start,
            end,
        }
    }

    /// Length of the span in bytes.
    pub fn len(&self) -> usize {
        self.end - self.start
    }

    pub fn is_empty(&self) -> bool {
        self.start == self.end
    }
}

/// Counts entities of the given type in a resolved entity list.
pub fn count_by_type(entities: &[EntitySpan], entity_type: EntityType) -> usize {
    entities.iter().filter(|e| e.entity_type == entity_type).count()
}

/// Returns references to every entity of the given type, preserving order.
pub fn filter_by_type(entities: &[EntitySpan], entity_type: EntityType) -> Vec<&EntitySpan> {
    entities.iter().filter(|e| e.entity_type == entity_type).collect()
}

pub fn redact_sensitive(s: &str) -> String {
    const MAX_LEN: usize = 8;
    if s.len() <= MAX_LEN {
        "[REDACTED]".to_string()
    } else {
        format!("[REDACTED: {} chars]", s.len())
    }
}

fn get_loggable_content(sensitive_content: &str) -> String {
    if *PII_DEBUG_ALLOWED {
        sensitive_content.to_string()
    } else {
        redact_sensitive(sensitive_content)
    }
}

pub fn log_entity_debug(module_path: &str, entity_type: EntityType, sensitive_content: &str) {
    debug!("{} Detected {} span: '{}'",
        module_path,
        entity_type,
        get_loggable_content(sensitive_content)
    );
}
