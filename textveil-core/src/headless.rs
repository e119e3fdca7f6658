// textveil-core/src/headless.rs

//! `headless.rs`
//! Convenience wrappers for using the engine in headless mode (non-UI).
//! Provides helper functions for a full, one-shot redaction of strings.

use anyhow::Result;
use crate::config::DetectionConfig;
use crate::engine::RedactionEngine;
use crate::rewriter::RedactionMode;

/// Fully processes an input string and returns only the rewritten text.
/// This function is the primary entry point for non-interactive use.
///
/// # Arguments
///
/// * `config` - The merged DetectionConfig (defaults + optional user overrides).
/// * `content` - The string to be processed.
/// * `mode` - Whether spans are masked with type labels or removed.
pub fn headless_redact_string(
    config: DetectionConfig,
    content: &str,
    mode: RedactionMode,
) -> Result<String> {
    let engine = RedactionEngine::new(config)?;
    let report = engine.process(content, mode)?;
    Ok(report.output)
}

#[cfg(test)]
mod tests {
    use super::*;
    use anyhow::Result;

    #[test]
    fn test_headless_redact_string_mask() -> Result<()> {
        let content = "My email is test@example.com, and another is another@example.net.";
        let config = DetectionConfig::load_default_patterns()?;

        let output = headless_redact_string(config, content, RedactionMode::Mask)?;

        let expected = "My email is [EMAIL_ADDRESS], and another is [EMAIL_ADDRESS].";
        assert_eq!(output, expected);
        Ok(())
    }

    #[test]
    fn test_headless_redact_string_redact() -> Result<()> {
        let content = "My email is test@example.com, and another is another@example.net.";
        let config = DetectionConfig::load_default_patterns()?;

        let output = headless_redact_string(config, content, RedactionMode::Redact)?;

        let expected = "My email is , and another is .";
        assert_eq!(output, expected);
        Ok(())
    }
}
