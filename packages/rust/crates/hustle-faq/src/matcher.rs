//! Matcher orchestration: intent short-circuit, then scored ranking
//! against the whole knowledge base with length-scaled thresholds.

use hustle_types::SearchResult;
use tracing::debug;

use crate::intent::detect_intent;
use crate::kb::{self, KNOWLEDGE_BASE, KnowledgeBaseEntry};
use crate::score::{match_threshold, multi_threshold, score_question};
use crate::text::extract_keywords;

/// Default cap for the ranked-list surface.
pub const DEFAULT_MULTI_LIMIT: usize = 5;

/// A knowledge-base entry with its relevance score.
#[derive(Debug, Clone, Copy)]
pub struct ScoredEntry {
    /// The matched entry
    pub entry: &'static KnowledgeBaseEntry,
    /// Relevance score from the scorer
    pub score: f64,
}

/// Find the single best knowledge-base answer for a query, if any.
///
/// Queries under 2 characters (trimmed) are rejected. A fired intent
/// with a non-empty FAQ mapping short-circuits scoring entirely;
/// otherwise the best-scoring entry must clear `max(3, tokens * 1.2)`.
#[must_use]
pub fn match_question(text: &str) -> Option<&'static KnowledgeBaseEntry> {
    let trimmed = text.trim().to_lowercase();
    if trimmed.len() < 2 {
        return None;
    }

    if let Some(intent) = detect_intent(text)
        && let Some(first_id) = intent.faq_ids.first()
        && let Some(entry) = kb::entry(first_id)
    {
        debug!(intent = intent.intent, faq = entry.id, "intent short-circuit");
        return Some(entry);
    }

    let token_count = extract_keywords(&trimmed).len();
    let threshold = match_threshold(token_count);

    let best = KNOWLEDGE_BASE
        .iter()
        .map(|entry| ScoredEntry {
            entry,
            score: score_question(text, entry),
        })
        .max_by(|a, b| a.score.total_cmp(&b.score))?;

    if best.score >= threshold {
        debug!(faq = best.entry.id, score = best.score, threshold, "scored match");
        Some(best.entry)
    } else {
        debug!(score = best.score, threshold, "no entry cleared threshold");
        None
    }
}

/// Rank knowledge-base entries for a query (search / related-articles
/// surface). Filters by the loose threshold `max(1.5, tokens * 0.5)`,
/// sorts descending by score, and truncates to `limit`.
#[must_use]
pub fn match_question_multiple(text: &str, limit: usize) -> Vec<ScoredEntry> {
    let trimmed = text.trim().to_lowercase();
    if trimmed.len() < 2 {
        return Vec::new();
    }

    let token_count = extract_keywords(&trimmed).len();
    let min_score = multi_threshold(token_count);

    let mut results: Vec<ScoredEntry> = KNOWLEDGE_BASE
        .iter()
        .map(|entry| ScoredEntry {
            entry,
            score: score_question(text, entry),
        })
        .filter(|r| r.score >= min_score)
        .collect();

    results.sort_by(|a, b| b.score.total_cmp(&a.score));
    results.truncate(limit);
    results
}

/// The `search` operation: ranked entries mapped to the wire shape.
#[must_use]
pub fn search(query: &str, limit: usize) -> Vec<SearchResult> {
    match_question_multiple(query, limit)
        .into_iter()
        .map(|r| SearchResult {
            id: r.entry.id.to_string(),
            category: r.entry.category.to_string(),
            question: r.entry.question.to_string(),
            answer: r.entry.answer.to_string(),
            relevance: r.score,
        })
        .collect()
}
