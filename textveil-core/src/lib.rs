// textveil-core/src/lib.rs
//! # Textveil Core Library
//!
//! `textveil-core` provides the fundamental, platform-independent logic for
//! detecting personally identifiable information (PII) in free-form text and
//! rewriting it. It defines the core data structures for entity spans,
//! provides pattern compilation and dictionary/heuristic matchers, and
//! implements the overlap-resolution, rewriting, and similarity-scoring steps
//! that turn raw matches into a final report.
//!
//! The library is designed to be pure and stateless, focusing solely on the
//! transformation of input text, without concerns for I/O or
//! application-specific state management. The only process-wide state is the
//! immutable dictionaries and the compiled-pattern cache.
//!
//! ## Modules
//!
//! * `config`: Defines `PatternRule`s and `DetectionConfig` for the structured patterns.
//! * `compiler`: Compiles pattern rules into reusable compiled regexes.
//! * `dictionary`: Static name/location/stopword sets backing the heuristics.
//! * `entity`: Entity span and type definitions plus pure count/filter queries.
//! * `matchers`: The pattern, person, and location matchers.
//! * `aggregator`: Resolves overlapping candidate spans into a disjoint final set.
//! * `rewriter`: Applies masking or redaction to produce the output text.
//! * `similarity`: Levenshtein distance and normalized similarity scoring.
//! * `engine`: The `RedactionEngine` facade running the full pipeline.
//! * `headless`: Convenience wrappers for one-shot, non-interactive use.
//!
//! ## Public API
//!
//! The public API provides a cohesive set of types and functions for
//! configuring and running the detection pipeline. Key components are
//! organized by functionality:
//!
//! **Configuration & Patterns**
//!
//! * [`DetectionConfig`]: Manages the ordered set of `PatternRule`s, including loading and merging.
//! * [`PatternRule`]: Defines a single structured pattern and its entity category.
//! * [`merge_patterns`]: Merges default and user-defined configurations.
//! * [`DetectionConfig::load_from_file`]: Loads patterns from a YAML file.
//! * [`DetectionConfig::load_default_patterns`]: Loads the built-in pattern set.
//!
//! **Detection Engine**
//!
//! * [`RedactionEngine`]: Runs the matcher cascade, aggregation, rewriting, and scoring.
//! * [`RedactionReport`]: The output text, final entity list, and similarity score.
//! * [`RedactionMode`]: Selects masking (type labels) or redaction (removal).
//!
//! **Entities**
//!
//! * [`EntitySpan`]: A typed, positioned substring identified as PII.
//! * [`EntityType`]: The fixed set of detectable categories.
//! * [`count_by_type`] / [`filter_by_type`]: Pure queries over a final entity list.
//!
//! **Headless Mode**
//!
//! * [`headless_redact_string`]: A convenience function for a full, one-shot run.
//!
//! ## Usage Example
//!
//! ```rust
//! use textveil_core::{DetectionConfig, RedactionEngine, RedactionMode, EntityType};
//! use anyhow::Result;
//!
//! fn main() -> Result<()> {
//!     // 1. Load the built-in detection patterns.
//!     let config = DetectionConfig::load_default_patterns()?;
//!
//!     // 2. Build an engine; it can be reused across inputs.
//!     let engine = RedactionEngine::new(config)?;
//!
//!     // 3. Run the full pipeline on some content.
//!     let report = engine.process(
//!         "Contact john@example.com or call 555-123-4567.",
//!         RedactionMode::Mask,
//!     )?;
//!
//!     assert!(report.output.contains("[EMAIL_ADDRESS]"));
//!     assert!(report.output.contains("[PHONE_NUMBER]"));
//!     assert_eq!(report.count_of(EntityType::EmailAddress), 1);
//!     Ok(())
//! }
//! ```
//!
//! ## Error Handling
//!
//! The library uses `anyhow::Error` for fallible configuration operations and
//! defines the specific [`TextveilError`] type for pipeline errors; empty or
//! all-whitespace input is rejected with `TextveilError::EmptyInput` before
//! any matcher runs. A matcher finding nothing is a normal empty result, not
//! an error.
//!
//! ## Design Principles
//!
//! * **Stateless:** Each invocation builds a fresh, call-local entity list;
//!   independent inputs can be processed in parallel.
//! * **Deterministic:** Matcher order is the overlap-resolution priority and
//!   is fixed end to end.
//! * **Testable:** Each matcher returns its own span list and is unit-testable
//!   in isolation.
//! * **Heuristic by design:** Detection is rule-based; false positives and
//!   negatives are accepted, not fought with statistics.
//!
//! ---
//! License: MIT OR Apache-2.0

// All modules must be declared before they can be used.
pub mod aggregator;
pub mod compiler;
pub mod config;
pub mod dictionary;
pub mod engine;
pub mod entity;
pub mod errors;
pub mod headless;
pub mod matchers;
pub mod rewriter;
pub mod similarity;

// Correctly re-exporting modules and types from their canonical locations.
// This ensures the public API is clean and well-defined.

/// Re-exports the public configuration types and functions for managing detection patterns.
pub use config::{
    merge_patterns,
    DetectionConfig,
    PatternRule,
    MAX_PATTERN_LENGTH,
};

/// Re-exports the custom error type for clear error reporting.
pub use errors::TextveilError;

/// Re-exports the engine facade and its report type.
pub use engine::{RedactionEngine, RedactionReport};

/// Re-exports entity types and the pure entity-list queries.
pub use entity::{count_by_type, filter_by_type, redact_sensitive, EntitySpan, EntityType};

/// Re-exports the rewrite mode selector.
pub use rewriter::RedactionMode;

/// Re-exports the similarity scoring functions.
pub use similarity::{levenshtein_distance, levenshtein_similarity};

/// Re-exports the one-shot convenience function for non-interactive use.
pub use headless::headless_redact_string;

// Re-export key types from the compiler module for advanced usage.
pub use compiler::{compile_patterns, CompiledPattern, CompiledPatterns};
