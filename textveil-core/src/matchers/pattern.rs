//! Structured pattern matcher: applies one compiled regex to the input text.

use crate::compiler::CompiledPattern;
use crate::entity::{log_entity_debug, EntitySpan};

/// Runs a single compiled pattern over `text` and returns every
/// non-overlapping match, scanning left to right from offset zero.
///
/// Each call is a fresh, stateless scan: no cursor state survives between
/// invocations, regardless of how often the pattern is reused.
pub fn find_pattern_matches(text: &str, pattern: &CompiledPattern) -> Vec<EntitySpan> {
    pattern
        .regex
        .find_iter(text)
        .map(|m| {
            log_entity_debug(module_path!(), pattern.entity_type, m.as_str());
            EntitySpan::new(pattern.entity_type, text, m.start(), m.end())
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::entity::EntityType;
    use regex::RegexBuilder;

    fn email_pattern() -> CompiledPattern {
        CompiledPattern {
            regex: RegexBuilder::new(r"[a-zA-Z0-9._%+-]+@[a-zA-Z0-9.-]+\.[a-zA-Z]{2,}")
                .build()
                .unwrap(),
            entity_type: EntityType::EmailAddress,
            name: "email".to_string(),
        }
    }

    #[test]
    fn test_finds_every_occurrence() {
        let text = "Mail test@example.com or another@example.net please.";
        let spans = find_pattern_matches(text, &email_pattern());
        assert_eq!(spans.len(), 2);
        assert_eq!(spans[0].text, "test@example.com");
        assert_eq!(spans[0].start, 5);
        assert_eq!(spans[0].end, 21);
        assert_eq!(spans[1].text, "another@example.net");
        assert_eq!(text[spans[1].start..spans[1].end].to_string(), spans[1].text);
    }

    #[test]
    fn test_scan_state_does_not_leak_between_calls() {
        let pattern = email_pattern();
        let text = "reach me at a@b.com today";
        let first = find_pattern_matches(text, &pattern);
        let second = find_pattern_matches(text, &pattern);
        assert_eq!(first, second);
        assert_eq!(first.len(), 1);
    }

    #[test]
    fn test_no_matches_is_empty_not_error() {
        let spans = find_pattern_matches("nothing to see here", &email_pattern());
        assert!(spans.is_empty());
    }
}
