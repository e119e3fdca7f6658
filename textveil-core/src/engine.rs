// textveil-core/src/engine.rs
//! The redaction engine: orchestrates the matchers, the span aggregator, the
//! rewriter, and the similarity scorer.
//!
//! One engine instance holds the compiled structured patterns and can be
//! reused across inputs; every invocation is an independent, re-entrant run
//! with a fresh, call-local entity list.
//!
//! License: MIT OR APACHE 2.0

use std::collections::HashMap;
use std::sync::Arc;
use anyhow::{Context, Result};
use log::debug;

use crate::aggregator;
use crate::compiler::{get_or_compile_patterns, CompiledPatterns};
use crate::config::{DetectionConfig, PatternRule};
use crate::entity::{count_by_type, EntitySpan, EntityType};
use crate::errors::TextveilError;
use crate::matchers::{location, pattern, person};
use crate::rewriter::{self, RedactionMode};
use crate::similarity;

/// The result of one full pipeline invocation.
#[derive(Debug, Clone, PartialEq)]
pub struct RedactionReport {
    /// The rewritten text.
    pub output: String,
    /// The resolved, non-overlapping entity list, ascending by start offset.
    pub entities: Vec<EntitySpan>,
    /// Normalized Levenshtein similarity between input and output, 0 to 100.
    pub similarity: f64,
}

impl RedactionReport {
    /// Number of detected entities of the given type.
    pub fn count_of(&self, entity_type: EntityType) -> usize {
        count_by_type(&self.entities, entity_type)
    }
}

/// The rule-based detection and rewriting engine.
#[derive(Debug)]
pub struct RedactionEngine {
    compiled_patterns: Arc<CompiledPatterns>,
    config: DetectionConfig,
}

impl RedactionEngine {
    pub fn new(config: DetectionConfig) -> Result<Self> {
        let compiled_patterns = get_or_compile_patterns(&config)
            .context("Failed to compile detection patterns for RedactionEngine")?;

        Ok(Self {
            compiled_patterns,
            config,
        })
    }

    /// Runs every matcher over `text` and resolves overlaps into the final
    /// entity list.
    ///
    /// Matchers run in a fixed order: structured patterns in config order,
    /// then the person heuristic, then the location passes. That order is
    /// the tie-break priority during overlap resolution.
    pub fn detect(&self, text: &str) -> Result<Vec<EntitySpan>, TextveilError> {
        if text.trim().is_empty() {
            return Err(TextveilError::EmptyInput);
        }

        let rules_by_name: HashMap<&str, &PatternRule> = self.config.patterns.iter()
            .map(|rule| (rule.name.as_str(), rule))
            .collect();

        let mut raw: Vec<EntitySpan> = Vec::new();
        for compiled in &self.compiled_patterns.patterns {
            if let Some(rule) = rules_by_name.get(compiled.name.as_str()) {
                if let Some(false) = rule.enabled {
                    continue;
                }
                raw.extend(pattern::find_pattern_matches(text, compiled));
            }
        }
        raw.extend(person::find_persons(text));
        raw.extend(location::find_locations(text));

        debug!("Collected {} raw spans before overlap resolution.", raw.len());
        let resolved = aggregator::resolve_overlaps(raw);
        debug!("Resolved entity list holds {} spans.", resolved.len());
        Ok(resolved)
    }

    /// Runs the full pipeline: detection, rewriting, and similarity scoring.
    pub fn process(&self, text: &str, mode: RedactionMode) -> Result<RedactionReport, TextveilError> {
        let entities = self.detect(text)?;
        let output = rewriter::rewrite(text, &entities, mode);
        let similarity = similarity::levenshtein_similarity(text, &output);
        Ok(RedactionReport {
            output,
            entities,
            similarity,
        })
    }

    /// Returns a reference to the compiled patterns used by the engine.
    pub fn compiled_patterns(&self) -> &CompiledPatterns {
        &self.compiled_patterns
    }

    /// Returns a reference to the engine's configuration.
    pub fn config(&self) -> &DetectionConfig {
        &self.config
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_blank_input_is_rejected_before_matching() {
        let engine = RedactionEngine::new(DetectionConfig::load_default_patterns().unwrap()).unwrap();
        assert!(matches!(engine.detect("   \n\t "), Err(TextveilError::EmptyInput)));
        assert!(matches!(engine.detect(""), Err(TextveilError::EmptyInput)));
    }

    #[test]
    fn test_disabled_pattern_is_skipped() {
        let mut config = DetectionConfig::load_default_patterns().unwrap();
        for rule in &mut config.patterns {
            if rule.name == "email" {
                rule.enabled = Some(false);
            }
        }
        let engine = RedactionEngine::new(config).unwrap();
        let entities = engine.detect("write to a@b.com soon").unwrap();
        assert!(entities.iter().all(|e| e.entity_type != EntityType::EmailAddress));
    }
}
