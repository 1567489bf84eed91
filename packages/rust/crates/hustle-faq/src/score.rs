//! Relevance scoring between a raw query and one knowledge-base entry.
//!
//! All weights and thresholds live here as named constants so they can
//! be tuned and tested independently of the control flow that uses them.

use crate::kb::KnowledgeBaseEntry;
use crate::similarity::words_match;
use crate::synonyms::expand_with_synonyms;
use crate::text::extract_keywords;

/// Points per word of an entry keyword found as a substring of the query.
pub const KEYWORD_SUBSTRING_WEIGHT: f64 = 3.0;
/// Points per query token matching a word of the entry's question.
pub const QUESTION_WORD_WEIGHT: f64 = 2.0;
/// Points per query token matching a word of the entry's answer.
pub const ANSWER_WORD_WEIGHT: f64 = 0.3;
/// Bonus when a synonym expansion of a query token equals an entry keyword.
pub const SYNONYM_KEYWORD_BONUS: f64 = 2.0;
/// Answer-word matches counted toward the relevance ratio are capped here.
pub const ANSWER_MATCH_RATIO_CAP: f64 = 2.0;
/// Base of the relevance-ratio blend: score is scaled into
/// `[RATIO_BASE, RATIO_BASE + RATIO_SPAN * ratio]`.
pub const RATIO_BASE: f64 = 0.4;
/// Span of the relevance-ratio blend.
pub const RATIO_SPAN: f64 = 0.6;

/// Floor of the single-match acceptance threshold.
pub const MATCH_THRESHOLD_MIN: f64 = 3.0;
/// Per-token scaling of the single-match acceptance threshold.
pub const MATCH_THRESHOLD_PER_TOKEN: f64 = 1.2;
/// Floor of the ranked-list (search surface) threshold.
pub const MULTI_THRESHOLD_MIN: f64 = 1.5;
/// Per-token scaling of the ranked-list threshold.
pub const MULTI_THRESHOLD_PER_TOKEN: f64 = 0.5;

/// Count query tokens whose synonym expansion matches any target token.
/// One hit per query token; the first matching expansion wins.
fn count_word_matches(query_tokens: &[String], target_tokens: &[String]) -> usize {
    query_tokens
        .iter()
        .filter(|qt| {
            expand_with_synonyms(qt)
                .iter()
                .any(|form| target_tokens.iter().any(|tt| words_match(form, tt)))
        })
        .count()
}

/// Score one knowledge-base entry against a raw query.
///
/// Monotonically higher for better matches; exactly 0 when the query has
/// no extractable tokens. The weights are load-bearing - tests pin them.
#[must_use]
pub fn score_question(query: &str, entry: &KnowledgeBaseEntry) -> f64 {
    let query_lower = query.to_lowercase();
    let query_tokens = extract_keywords(&query_lower);
    if query_tokens.is_empty() {
        return 0.0;
    }

    let mut score = 0.0;

    // Direct keyword substring hits; multi-word keywords score per word.
    for keyword in entry.keywords {
        if query_lower.contains(keyword) {
            #[allow(clippy::cast_precision_loss)]
            let words = keyword.split_whitespace().count() as f64;
            score += KEYWORD_SUBSTRING_WEIGHT * words;
        }
    }

    // Word-level overlap with the canonical question and answer.
    let question_tokens = extract_keywords(entry.question);
    let answer_tokens = extract_keywords(entry.answer);

    let question_matches = count_word_matches(&query_tokens, &question_tokens);
    let answer_matches = count_word_matches(&query_tokens, &answer_tokens);

    #[allow(clippy::cast_precision_loss)]
    {
        score += QUESTION_WORD_WEIGHT * question_matches as f64;
        score += ANSWER_WORD_WEIGHT * answer_matches as f64;
    }

    // Exact synonym-to-keyword hits, beyond the substring check above.
    for qt in &query_tokens {
        let expanded = expand_with_synonyms(qt);
        if entry
            .keywords
            .iter()
            .any(|kw| expanded.iter().any(|form| form.eq_ignore_ascii_case(kw)))
        {
            score += SYNONYM_KEYWORD_BONUS;
        }
    }

    // Relevance-ratio dampening: weak overall overlap drags strong
    // keyword hits back down.
    #[allow(clippy::cast_precision_loss)]
    let ratio = (question_matches as f64 + (answer_matches as f64).min(ANSWER_MATCH_RATIO_CAP))
        / query_tokens.len() as f64;
    score * (RATIO_BASE + ratio * RATIO_SPAN)
}

/// Single-match acceptance threshold for a query of `token_count` tokens.
#[must_use]
pub fn match_threshold(token_count: usize) -> f64 {
    #[allow(clippy::cast_precision_loss)]
    let scaled = token_count as f64 * MATCH_THRESHOLD_PER_TOKEN;
    MATCH_THRESHOLD_MIN.max(scaled)
}

/// Ranked-list minimum score for a query of `token_count` tokens. Looser
/// than the single-match threshold: this feeds the related-articles and
/// search surfaces, not the confident-answer surface.
#[must_use]
pub fn multi_threshold(token_count: usize) -> f64 {
    #[allow(clippy::cast_precision_loss)]
    let scaled = token_count as f64 * MULTI_THRESHOLD_PER_TOKEN;
    MULTI_THRESHOLD_MIN.max(scaled)
}
