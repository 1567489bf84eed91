//! Tokenization and normalization for incoming questions.
//!
//! Everything downstream (scoring, intent detection, topic matching)
//! works on the token stream produced here: lowercased, punctuation
//! stripped, whitespace split, stop words removed. Duplicate tokens are
//! kept on purpose - repeated words strengthen overlap counts later.

use once_cell::sync::Lazy;
use std::collections::HashSet;

/// Punctuation stripped before splitting.
const PUNCTUATION: &[char] = &[
    '?', '!', '.', ',', ';', ':', '\'', '"', '(', ')', '[', ']', '{', '}',
];

/// English stop words (common function words and pronouns to filter out).
const STOP_WORDS: &[&str] = &[
    "a", "an", "the", "is", "are", "am", "was", "were", "be", "been", "being", "have", "has",
    "had", "having", "do", "does", "did", "doing", "will", "would", "shall", "should", "may",
    "might", "must", "can", "could", "to", "of", "in", "for", "on", "with", "at", "by", "from",
    "as", "into", "through", "during", "before", "after", "above", "below", "between", "out",
    "off", "over", "under", "again", "further", "then", "once", "here", "there", "when", "where",
    "why", "how", "all", "any", "both", "each", "every", "few", "more", "most", "other", "some",
    "such", "no", "nor", "not", "only", "own", "same", "so", "than", "too", "very", "just",
    "also", "about", "up", "down", "if", "or", "and", "but", "because", "until", "while", "it",
    "its", "itself", "this", "that", "these", "those", "my", "mine", "your", "yours", "his",
    "her", "hers", "our", "ours", "their", "theirs", "what", "which", "who", "whom", "whose",
    "me", "him", "them", "i", "you", "he", "she", "we", "they", "myself", "yourself", "himself",
    "herself", "ourselves", "themselves", "im", "ive", "id", "youre", "youve", "dont",
    "doesnt", "didnt", "cant", "cannot", "wont", "isnt", "arent", "wasnt", "werent", "please",
    "really",
];

/// Stop words as a set; built once, read-only afterwards.
static STOP_SET: Lazy<HashSet<&'static str>> = Lazy::new(|| STOP_WORDS.iter().copied().collect());

/// Extract significant tokens from free text.
///
/// Lowercases, strips punctuation, splits on whitespace runs, and drops
/// tokens shorter than 2 characters or present in the stop-word set.
/// Original word order and duplicates are preserved. Empty or
/// punctuation-only input yields an empty list; there are no error paths.
#[must_use]
pub fn extract_keywords(text: &str) -> Vec<String> {
    let cleaned: String = text
        .to_lowercase()
        .chars()
        .map(|c| if PUNCTUATION.contains(&c) { ' ' } else { c })
        .collect();

    cleaned
        .split_whitespace()
        .filter(|t| t.len() >= 2 && !STOP_SET.contains(*t))
        .map(str::to_string)
        .collect()
}

/// Whether a message text looks like a question worth surfacing.
///
/// Used by the trending scan: a text qualifies when it contains a `?`
/// or starts with a common interrogative.
#[must_use]
pub fn looks_like_question(text: &str) -> bool {
    let trimmed = text.trim();
    if trimmed.contains('?') {
        return true;
    }
    let lower = trimmed.to_lowercase();
    const OPENERS: &[&str] = &[
        "how ", "what ", "when ", "where ", "why ", "who ", "which ", "can ", "do ", "does ",
        "is ", "are ", "will ",
    ];
    OPENERS.iter().any(|o| lower.starts_with(o))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn stop_words_removed() {
        let tokens = extract_keywords("What is the service fee?");
        assert_eq!(tokens, vec!["service", "fee"]);
    }

    #[test]
    fn duplicates_preserved_in_order() {
        let tokens = extract_keywords("fee fee payment fee");
        assert_eq!(tokens, vec!["fee", "fee", "payment", "fee"]);
    }

    #[test]
    fn punctuation_only_is_empty() {
        assert!(extract_keywords("?!.,;:").is_empty());
        assert!(extract_keywords("").is_empty());
        assert!(extract_keywords("   ").is_empty());
    }

    #[test]
    fn short_tokens_dropped() {
        let tokens = extract_keywords("I r fee");
        assert_eq!(tokens, vec!["fee"]);
    }

    #[test]
    fn question_detection() {
        assert!(looks_like_question("How do I withdraw?"));
        assert!(looks_like_question("can i bid twice"));
        assert!(!looks_like_question("thanks for the gig"));
    }
}
