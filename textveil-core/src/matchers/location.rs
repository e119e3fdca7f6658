//! Location matchers: a dictionary pass over known location phrases plus
//! three capitalization/context heuristics layered on top of it.
//!
//! The passes run in a fixed order (dictionary, keyword, capitalized phrase,
//! preposition) and emit raw, possibly overlapping spans; overlap resolution
//! is the aggregator's job.

use once_cell::sync::Lazy;
use regex::Regex;

use crate::dictionary;
use crate::entity::{log_entity_debug, EntitySpan, EntityType};

/// Capitalized phrase followed by a locative keyword ("Gazipur district").
/// Case-insensitive, so lowercase phrases qualify as well.
static KEYWORD_PATTERN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)([A-Z][a-z]+(?:\s+[A-Z][a-z]+)*)\s+(?:city|state|zone|province|district|county|region|area|territory|nation|country)").unwrap()
});

/// Bare multi-word capitalized phrase ("New South Wales").
static CAPITALIZED_PHRASE_PATTERN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"\b([A-Z][a-z]+(?:\s+[A-Z][a-z]+)+)\b").unwrap()
});

/// Locative context words searched in the window around a candidate phrase.
static CONTEXT_PATTERN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)\b(in|from|at|near|located|province|state|country|city|zone|district|region)\b").unwrap()
});

/// Preposition followed by a single capitalized token ("in Dhaka").
static PREPOSITION_PATTERN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"\b(in|from|at|near|to|towards|via|through)\s+([A-Z][a-z]{2,})\b").unwrap()
});

/// Half-width in bytes of the context window examined around a candidate
/// capitalized phrase.
const CONTEXT_WINDOW: usize = 50;

/// Scans `text` for location spans with all four passes.
pub fn find_locations(text: &str) -> Vec<EntitySpan> {
    let mut spans = Vec::new();
    find_dictionary_locations(text, &mut spans);
    find_keyword_locations(text, &mut spans);
    find_capitalized_phrase_locations(text, &mut spans);
    find_preposition_locations(text, &mut spans);
    spans
}

/// Dictionary pass: scans the ASCII-lowercased text for every known phrase.
///
/// A hit is accepted only when the bytes on both sides are not lowercase
/// ASCII letters. Digits, punctuation, and non-ASCII letters do not block a
/// match: the check deliberately treats only `[a-z]` as word characters, and
/// the resulting over-matching near uppercase or accented neighbors is a
/// known limitation that must not be widened to Unicode-aware boundaries.
fn find_dictionary_locations(text: &str, spans: &mut Vec<EntitySpan>) {
    let lower = text.to_ascii_lowercase();
    let bytes = lower.as_bytes();

    for phrase in dictionary::location_phrases() {
        let mut search = 0usize;
        while let Some(offset) = lower[search..].find(phrase) {
            let found = search + offset;
            let end = found + phrase.len();

            let blocked_before = found > 0 && bytes[found - 1].is_ascii_lowercase();
            let blocked_after = end < bytes.len() && bytes[end].is_ascii_lowercase();

            if !blocked_before && !blocked_after {
                log_entity_debug(module_path!(), EntityType::Location, &text[found..end]);
                spans.push(EntitySpan::new(EntityType::Location, text, found, end));
            }

            // Overlapping occurrences restart one byte past the last hit.
            search = found + 1;
        }
    }
}

/// Keyword pass: a phrase directly followed by a locative keyword is tagged
/// as one location span including the keyword.
fn find_keyword_locations(text: &str, spans: &mut Vec<EntitySpan>) {
    for m in KEYWORD_PATTERN.find_iter(text) {
        log_entity_debug(module_path!(), EntityType::Location, m.as_str());
        spans.push(EntitySpan::new(EntityType::Location, text, m.start(), m.end()));
    }
}

/// Phrase pass: a bare capitalized phrase of two to four words counts as a
/// location only when locative context appears within the window around it.
fn find_capitalized_phrase_locations(text: &str, spans: &mut Vec<EntitySpan>) {
    for m in CAPITALIZED_PHRASE_PATTERN.find_iter(text) {
        let word_count = m.as_str().split_whitespace().count();
        if !(2..=4).contains(&word_count) {
            continue;
        }
        if has_locative_context(text, m.start(), m.end()) {
            log_entity_debug(module_path!(), EntityType::Location, m.as_str());
            spans.push(EntitySpan::new(EntityType::Location, text, m.start(), m.end()));
        }
    }
}

/// Looks for a locative context word within `CONTEXT_WINDOW` bytes on each
/// side of the candidate span, clamped to the text bounds.
fn has_locative_context(text: &str, start: usize, end: usize) -> bool {
    let mut window_start = start.saturating_sub(CONTEXT_WINDOW);
    while !text.is_char_boundary(window_start) {
        window_start += 1;
    }
    let mut window_end = usize::min(text.len(), end + CONTEXT_WINDOW);
    while !text.is_char_boundary(window_end) {
        window_end -= 1;
    }
    CONTEXT_PATTERN.is_match(&text[window_start..window_end])
}

/// Preposition pass: a preposition followed by a single capitalized token of
/// three or more characters tags that token, unless its lowercase form is a
/// known person name.
fn find_preposition_locations(text: &str, spans: &mut Vec<EntitySpan>) {
    for caps in PREPOSITION_PATTERN.captures_iter(text) {
        let Some(word) = caps.get(2) else { continue };
        if dictionary::is_known_name(&word.as_str().to_ascii_lowercase()) {
            continue;
        }
        log_entity_debug(module_path!(), EntityType::Location, word.as_str());
        spans.push(EntitySpan::new(EntityType::Location, text, word.start(), word.end()));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dictionary_phrase_keeps_original_casing() {
        let spans = find_locations("Welcome to New York today.");
        assert_eq!(spans[0].text, "New York");
        assert_eq!(spans[0].entity_type, EntityType::Location);
        assert_eq!(spans[0].start, 11);
        assert_eq!(spans[0].end, 19);
    }

    #[test]
    fn test_embedded_dictionary_phrase_is_blocked() {
        // 'usa' occurs inside the token but is flanked by lowercase letters.
        assert!(find_locations("thusail stands alone").is_empty());
    }

    #[test]
    fn test_digit_neighbors_do_not_block() {
        // Only lowercase ASCII blocks a boundary; digits and punctuation
        // never do.
        let spans = find_locations("code 7dhaka9 here");
        assert_eq!(spans.len(), 1);
        assert_eq!(spans[0].text, "dhaka");
    }

    #[test]
    fn test_keyword_phrase_includes_keyword() {
        let spans = find_locations("Gazipur district is crowded.");
        assert!(spans.iter().any(|s| s.text == "Gazipur district"));
    }

    #[test]
    fn test_capitalized_phrase_requires_locative_context() {
        assert!(find_locations("Sierra Leone flags waved.").is_empty());
        let spans = find_locations("She arrived from Sierra Leone yesterday.");
        assert!(spans.iter().any(|s| s.text == "Sierra Leone"));
    }

    #[test]
    fn test_preposition_tags_single_capitalized_token() {
        let spans = find_locations("I work in Gotham these days.");
        assert_eq!(spans.len(), 1);
        assert_eq!(spans[0].text, "Gotham");
    }

    #[test]
    fn test_preposition_defers_to_known_person_names() {
        assert!(find_locations("a letter from Sarah arrived").is_empty());
    }
}
