//! Configuration management for `textveil-core`.
//!
//! This module defines the data structures for structured detection patterns.
//! It handles serialization/deserialization of YAML configurations and provides
//! utilities for loading, merging, and validating these configs.
//!
//! License: MIT OR Apache-2.0

use anyhow::{anyhow, Context, Result};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::path::Path;
use log::{debug, info, warn};
use regex::Regex;

use crate::entity::EntityType;

/// Maximum allowed length for a regex pattern string.
pub const MAX_PATTERN_LENGTH: usize = 500;

/// A single structured-pattern rule used by the detection engine.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Deserialize, Serialize)]
pub struct PatternRule {
    /// Unique identifier for the rule (e.g., "email").
    pub name: String,
    /// Human-readable description of what the rule targets.
    #[serde(default)]
    pub description: Option<String>,
    /// The entity category emitted for matches of this rule.
    pub entity_type: EntityType,
    /// The regex pattern string.
    pub pattern: Option<String>,
    /// If true, the pattern is matched case-insensitively.
    #[serde(default)]
    pub case_insensitive: bool,
    /// Explicit override for enabling/disabling the rule.
    #[serde(default)]
    pub enabled: Option<bool>,
}

/// The ordered set of structured pattern rules for one engine instance.
///
/// Rule order is significant: it is the priority order the span aggregator
/// uses when overlapping candidate spans share a start offset, so structured
/// patterns are kept in their declared sequence end to end.
#[derive(Debug, Default, Deserialize, Serialize, Clone, PartialEq, Eq, Hash)]
pub struct DetectionConfig {
    /// Structured pattern rules, in priority order.
    pub patterns: Vec<PatternRule>,
}

impl DetectionConfig {
    /// Loads detection patterns from a YAML file.
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        info!("Loading custom patterns from: {}", path.display());
        let text = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file {}", path.display()))?;
        let config: DetectionConfig = serde_yml::from_str(&text)
            .with_context(|| format!("Failed to parse config file {}", path.display()))?;

        validate_patterns(&config.patterns)?;
        info!("Loaded {} patterns from file {}.", config.patterns.len(), path.display());

        Ok(config)
    }

    /// Loads the built-in detection patterns from the embedded configuration.
    pub fn load_default_patterns() -> Result<Self> {
        debug!("Loading default patterns from embedded string...");
        let default_yaml = include_str!("../config/default_patterns.yaml");
        let config: DetectionConfig = serde_yml::from_str(default_yaml)
            .context("Failed to parse default patterns")?;

        debug!("Loaded {} default patterns.", config.patterns.len());
        Ok(config)
    }

    /// Filters active patterns based on enable/disable lists provided via CLI.
    pub fn set_active_patterns(&mut self, enable_patterns: &[String], disable_patterns: &[String]) {
        let enable_set: HashSet<&str> = enable_patterns.iter().map(String::as_str).collect();
        let disable_set: HashSet<&str> = disable_patterns.iter().map(String::as_str).collect();

        debug!("Initial pattern count before filtering: {}", self.patterns.len());

        let all_pattern_names: HashSet<&str> = self.patterns.iter().map(|p| p.name.as_str()).collect();

        for pattern_name in enable_set.difference(&all_pattern_names) {
            warn!("Pattern '{}' in `enable_patterns` list does not exist.", pattern_name);
        }

        for pattern_name in disable_set.difference(&all_pattern_names) {
            warn!("Pattern '{}' in `disable_patterns` list does not exist.", pattern_name);
        }

        self.patterns.retain(|pattern| {
            let name = pattern.name.as_str();
            !disable_set.contains(name) && (enable_set.is_empty() || enable_set.contains(name))
        });

        debug!("Final active pattern count after filtering: {}", self.patterns.len());
    }
}

/// Merges user-defined patterns with defaults.
///
/// A user pattern replaces a same-named default in place, so the aggregation
/// priority implied by the default ordering survives the merge; patterns the
/// defaults do not know are appended after them.
pub fn merge_patterns(
    default_config: DetectionConfig,
    user_config: Option<DetectionConfig>,
) -> DetectionConfig {
    debug!("merge_patterns called. Initial default pattern count: {}", default_config.patterns.len());

    let mut patterns = default_config.patterns;

    if let Some(user_cfg) = user_config {
        debug!("User config provided. Merging {} user patterns.", user_cfg.patterns.len());
        for user_pattern in user_cfg.patterns {
            match patterns.iter_mut().find(|p| p.name == user_pattern.name) {
                Some(slot) => *slot = user_pattern,
                None => patterns.push(user_pattern),
            }
        }
    }

    debug!("Final total patterns after merge: {}", patterns.len());
    DetectionConfig { patterns }
}

/// Validates pattern integrity (unique names, regex compilation, length cap).
fn validate_patterns(patterns: &[PatternRule]) -> Result<()> {
    let mut pattern_names = HashSet::new();
    let mut errors = Vec::new();

    for rule in patterns {
        if rule.name.is_empty() {
            errors.push("A pattern has an empty `name` field.".to_string());
        } else if !pattern_names.insert(rule.name.clone()) {
            errors.push(format!("Duplicate pattern name found: '{}'.", rule.name));
        }

        let pattern = match &rule.pattern {
            Some(p) => p,
            None => {
                errors.push(format!("Pattern '{}' is missing the `pattern` field.", rule.name));
                continue;
            }
        };

        if pattern.is_empty() {
            errors.push(format!("Pattern '{}' has an empty `pattern` field.", rule.name));
        }

        if pattern.len() > MAX_PATTERN_LENGTH {
            errors.push(format!(
                "Pattern '{}': pattern length ({}) exceeds maximum allowed ({}).",
                rule.name, pattern.len(), MAX_PATTERN_LENGTH
            ));
        }

        if let Err(e) = Regex::new(pattern) {
            errors.push(format!("Pattern '{}' has an invalid regex pattern: {}", rule.name, e));
        }
    }

    if !errors.is_empty() {
        let full_error_message = format!("Pattern validation failed:\n{}", errors.join("\n"));
        Err(anyhow!(full_error_message))
    } else {
        Ok(())
    }
}
