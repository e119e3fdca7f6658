//! Person-name matcher.
//!
//! A shallow capitalization heuristic layered on a dictionary of known name
//! tokens and a stoplist of common English words. This is a rule-based
//! guesser, not a statistical recognizer; both false positives and false
//! negatives are expected and accepted.

use crate::dictionary;
use crate::entity::{log_entity_debug, EntitySpan, EntityType};

/// Maximum gap in bytes between two tokens merged into one person span.
const MAX_MERGE_GAP: usize = 2;

/// Lowercased ASCII letters of `word`, everything else stripped.
fn clean_key(word: &str) -> String {
    word.chars()
        .filter(|c| c.is_ascii_alphabetic())
        .map(|c| c.to_ascii_lowercase())
        .collect()
}

/// True if the token's first character is an uppercase letter with a distinct
/// lowercase form. Tokens led by digits or punctuation never qualify.
fn starts_capitalized(word: &str) -> bool {
    word.chars().next().is_some_and(|c| c.is_uppercase())
}

/// True if the token at `start` opens a sentence: it sits at offset zero, or
/// the preceding text, ignoring trailing whitespace, ends with a sentence
/// terminator.
fn is_sentence_start(text: &str, start: usize) -> bool {
    if start == 0 {
        return true;
    }
    text[..start].trim_end().ends_with(['.', '!', '?'])
}

/// Scans `text` for person-name spans.
///
/// Tokens are taken on whitespace and resolved to offsets by searching from a
/// running cursor, so repeated identical tokens map to successive occurrences.
/// A capitalized token counts as a name when the dictionary knows it, or when
/// it is at least three letters long, not stoplisted, not sentence-initial,
/// and not a known location word (location words are left to the location
/// matchers). A name is greedily extended with an immediately following
/// capitalized token when the gap between them is at most two bytes.
pub fn find_persons(text: &str) -> Vec<EntitySpan> {
    let mut spans = Vec::new();
    let words: Vec<&str> = text.split_whitespace().collect();
    let mut cursor = 0usize;
    let mut i = 0usize;

    while i < words.len() {
        let word = words[i];
        let key = clean_key(word);

        // Skip empty or very short tokens before touching the cursor.
        if key.len() < 2 {
            i += 1;
            continue;
        }

        let Some(offset) = text[cursor..].find(word) else {
            i += 1;
            continue;
        };
        let start = cursor + offset;
        cursor = start + word.len();

        if starts_capitalized(word) {
            let known_name = dictionary::is_known_name(&key);
            let location_word = !known_name && dictionary::is_known_location(&key);

            let candidate = known_name
                || (!dictionary::is_stopword(&key)
                    && !location_word
                    && !is_sentence_start(text, start)
                    && key.len() >= 3);

            if candidate {
                let mut end = start + word.len();

                // Extend with the following token for full names like "John Smith".
                if i + 1 < words.len() {
                    let next = words[i + 1];
                    let next_key = clean_key(next);
                    if starts_capitalized(next)
                        && (dictionary::is_known_name(&next_key) || next.len() > 2)
                    {
                        if let Some(next_offset) = text[end..].find(next) {
                            let next_start = end + next_offset;
                            if next_start - end <= MAX_MERGE_GAP {
                                end = next_start + next.len();
                                i += 1; // the merged token is consumed
                            }
                        }
                    }
                }

                log_entity_debug(module_path!(), EntityType::Person, &text[start..end]);
                spans.push(EntitySpan::new(EntityType::Person, text, start, end));
            }
        }
        i += 1;
    }
    spans
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_full_name_merges_adjacent_tokens() {
        let spans = find_persons("Please ask John Smith about it.");
        assert_eq!(spans.len(), 1);
        assert_eq!(spans[0].text, "John Smith");
        assert_eq!(spans[0].entity_type, EntityType::Person);
    }

    #[test]
    fn test_sentence_start_requires_known_name() {
        assert!(find_persons("Transmission started late.").is_empty());
        let spans = find_persons("Sarah started late.");
        assert_eq!(spans.len(), 1);
        assert_eq!(spans[0].text, "Sarah");
    }

    #[test]
    fn test_unknown_capitalized_word_mid_sentence_is_flagged() {
        let spans = find_persons("We met Zubaida yesterday.");
        assert_eq!(spans.len(), 1);
        assert_eq!(spans[0].text, "Zubaida");
    }

    #[test]
    fn test_stopword_is_never_a_person() {
        assert!(find_persons("It was The end.").is_empty());
    }

    #[test]
    fn test_location_word_is_left_for_location_matchers() {
        assert!(find_persons("She flew to Dhaka.").is_empty());
    }

    #[test]
    fn test_repeated_tokens_resolve_to_successive_offsets() {
        let spans = find_persons("Emily called Emily back.");
        assert_eq!(spans.len(), 2);
        assert_eq!(spans[0].start, 0);
        assert_eq!(spans[1].start, 13);
        assert!(spans[1].start > spans[0].end);
    }

    #[test]
    fn test_punctuation_between_merged_tokens_is_preserved() {
        let spans = find_persons("Report it to Hasan, Karim next week.");
        assert_eq!(spans.len(), 1);
        assert_eq!(spans[0].text, "Hasan, Karim");
    }
}
