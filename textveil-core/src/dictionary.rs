//! Static dictionaries backing the person and location matchers.
//!
//! The word lists are embedded at compile time and parsed once into lookup
//! sets on first use; they are immutable for the process lifetime. All
//! entries are lowercase, so callers must lowercase their keys before any
//! lookup in this module.

use once_cell::sync::Lazy;
use std::collections::HashSet;

fn parse_word_list(raw: &'static str) -> Vec<&'static str> {
    raw.lines()
        .map(str::trim)
        .filter(|line| !line.is_empty() && !line.starts_with('#'))
        .collect()
}

/// Known person-name tokens: given names, surnames, and honorifics.
static PERSON_NAMES: Lazy<HashSet<&'static str>> =
    Lazy::new(|| parse_word_list(include_str!("../config/names.txt")).into_iter().collect());

/// Known location phrases in file order. The dictionary location matcher
/// scans phrases in this order, which keeps tie-breaks between overlapping
/// hits deterministic across runs.
static LOCATION_PHRASES: Lazy<Vec<&'static str>> =
    Lazy::new(|| parse_word_list(include_str!("../config/locations.txt")));

static LOCATIONS: Lazy<HashSet<&'static str>> =
    Lazy::new(|| LOCATION_PHRASES.iter().copied().collect());

/// Common English words that suppress false person-name matches.
static STOPWORDS: Lazy<HashSet<&'static str>> =
    Lazy::new(|| parse_word_list(include_str!("../config/stopwords.txt")).into_iter().collect());

/// True if `token` (lowercase) is a known person-name token.
pub fn is_known_name(token: &str) -> bool {
    PERSON_NAMES.contains(token)
}

/// True if `token` (lowercase) is a known location word or phrase.
pub fn is_known_location(token: &str) -> bool {
    LOCATIONS.contains(token)
}

/// True if `token` (lowercase) is a stoplisted common word.
pub fn is_stopword(token: &str) -> bool {
    STOPWORDS.contains(token)
}

/// Iterates over every known location phrase, in file order.
pub fn location_phrases() -> impl Iterator<Item = &'static str> {
    LOCATION_PHRASES.iter().copied()
}
