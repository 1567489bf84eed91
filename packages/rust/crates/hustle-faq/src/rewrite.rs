//! Answer rewriting: substitute a human-written answer with a canonical
//! or generated one, or lightly clean the text that was passed in.

use crate::generate::{generate_answer, is_fallback};
use crate::matcher::match_question;

/// Leading salutations stripped during cleanup (matched case-insensitively).
const SALUTATIONS: &[&str] = &[
    "dear sir/madam,",
    "dear sir,",
    "dear madam,",
    "dear customer,",
    "dear user,",
    "hello,",
    "hi there,",
];

/// Trailing sign-offs stripped during cleanup. The team line is listed
/// first so "Best regards, The HustleKE Team" unwinds in one pass.
const SIGNOFFS: &[&str] = &[
    "the hustleke team",
    "best regards",
    "kind regards",
    "regards",
    "sincerely",
    "yours truly",
    "thank you for contacting us",
];

/// Strip leading salutations, repeating while any still matches.
fn strip_salutations(text: &str) -> &str {
    let mut rest = text.trim_start();
    loop {
        let lower = rest.to_ascii_lowercase();
        let Some(hit) = SALUTATIONS.iter().find(|s| lower.starts_with(*s)) else {
            return rest;
        };
        rest = rest[hit.len()..].trim_start();
    }
}

/// Strip trailing sign-off lines, unwinding punctuation between passes.
fn strip_signoffs(text: &str) -> &str {
    let mut rest = text.trim_end();
    loop {
        let lower = rest.to_ascii_lowercase();
        let Some(hit) = SIGNOFFS.iter().find(|s| lower.ends_with(*s)) else {
            return rest;
        };
        rest = rest[..rest.len() - hit.len()].trim_end_matches([' ', '\t', '\n', '\r', ',', '-']);
    }
}

/// Clean a human-written answer: drop salutations and sign-offs, make
/// sure the text ends with terminal punctuation. Returns the input
/// unchanged when cleaning would leave nothing.
fn clean_answer(original: &str) -> String {
    let stripped = strip_signoffs(strip_salutations(original));
    let cleaned = stripped.trim();
    if cleaned.is_empty() {
        return original.to_string();
    }
    if cleaned.ends_with(['.', '!', '?']) {
        cleaned.to_string()
    } else {
        format!("{cleaned}.")
    }
}

/// Rewrite a human-written answer for its question.
///
/// A knowledge-base match replaces the answer outright; failing that, a
/// non-fallback generated answer does. Only when neither produces
/// anything specific is the original text cleaned up and returned.
#[must_use]
pub fn rewrite_answer(original_answer: &str, question: &str) -> String {
    if let Some(entry) = match_question(question) {
        return entry.answer.to_string();
    }

    let generated = generate_answer(question);
    if !is_fallback(&generated) {
        return generated;
    }

    clean_answer(original_answer)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn kb_match_replaces_answer() {
        let rewritten = rewrite_answer("whatever was written", "What is the service fee?");
        assert!(rewritten.contains("10% service fee"));
    }

    #[test]
    fn clean_input_passes_through_unchanged() {
        let rewritten = rewrite_answer("This is already clean.", "some unmapped question");
        assert_eq!(rewritten, "This is already clean.");
    }

    #[test]
    fn salutation_and_signoff_stripped() {
        let rewritten = rewrite_answer(
            "Dear Customer, your issue was resolved yesterday. Best regards, The HustleKE Team",
            "zzqq unmapped zzqq",
        );
        assert_eq!(rewritten, "your issue was resolved yesterday.");
    }

    #[test]
    fn terminal_punctuation_appended() {
        let rewritten = rewrite_answer(
            "Hello, we restored your access",
            "zzqq unmapped zzqq",
        );
        assert_eq!(rewritten, "we restored your access.");
    }

    #[test]
    fn empty_after_cleaning_returns_original() {
        let original = "Hello, Best regards";
        let rewritten = rewrite_answer(original, "zzqq unmapped zzqq");
        assert_eq!(rewritten, original);
    }
}
