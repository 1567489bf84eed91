//! The `ask` operation: an explicit ladder of resolvers.
//!
//! Order is a first-class, tested artifact: guard, intent with a
//! generated-only answer, direct knowledge-base match, ranked
//! knowledge-base match above the loose threshold, generated contextual
//! answer. Every rung returns `Option<AskResponse>`; the first `Some`
//! wins, and the final rung always produces something, so the answer
//! field is never empty.

use hustle_types::{AnswerSource, AskResponse, Confidence, RelatedFaq};
use tracing::debug;

use crate::generate::{generate_answer, intent_answer, is_fallback};
use crate::intent::detect_intent;
use crate::kb::KnowledgeBaseEntry;
use crate::matcher::{DEFAULT_MULTI_LIMIT, ScoredEntry, match_question, match_question_multiple};
use crate::score::multi_threshold;
use crate::text::extract_keywords;

/// Ranked matches at or above this multiple of the loose threshold
/// report high confidence; below it, medium.
const RANKED_HIGH_CONFIDENCE_FACTOR: f64 = 1.5;

/// How many related FAQ suggestions ride along with an answer.
const RELATED_LIMIT: usize = 3;

/// Friendly reply for degenerate queries. A normal answer, not an error.
const SHORT_QUERY_PROMPT: &str =
    "Please ask a question and I'll do my best to help - for example \"What is the service \
     fee?\" or \"How do I get paid?\".";

fn related_from(ranked: &[ScoredEntry], exclude_id: Option<&str>) -> Vec<RelatedFaq> {
    ranked
        .iter()
        .filter(|r| exclude_id != Some(r.entry.id))
        .take(RELATED_LIMIT)
        .map(|r| RelatedFaq {
            id: r.entry.id.to_string(),
            question: r.entry.question.to_string(),
            category: r.entry.category.to_string(),
        })
        .collect()
}

fn kb_response(entry: &KnowledgeBaseEntry, confidence: Confidence, related: Vec<RelatedFaq>) -> AskResponse {
    AskResponse {
        answer: entry.answer.to_string(),
        matched_question: Some(entry.question.to_string()),
        category: Some(entry.category.to_string()),
        source: AnswerSource::KnowledgeBase,
        confidence,
        related_faqs: related,
    }
}

/// Rung 0: degenerate input guard.
fn resolve_guard(query: &str) -> Option<AskResponse> {
    if query.trim().len() >= 2 {
        return None;
    }
    Some(AskResponse {
        answer: SHORT_QUERY_PROMPT.to_string(),
        matched_question: None,
        category: None,
        source: AnswerSource::System,
        confidence: Confidence::Low,
        related_faqs: Vec::new(),
    })
}

/// Rung 1: intent whose answer is generated-only (no KB mapping).
fn resolve_intent_generated(query: &str) -> Option<AskResponse> {
    let intent = detect_intent(query)?;
    if !intent.faq_ids.is_empty() {
        return None;
    }
    let answer = intent_answer(intent.intent)?;
    debug!(intent = intent.intent, "generated-only intent answer");
    Some(AskResponse {
        answer: answer.to_string(),
        matched_question: None,
        category: None,
        source: AnswerSource::AiGenerated,
        confidence: Confidence::High,
        related_faqs: Vec::new(),
    })
}

/// Rung 2: confident single knowledge-base match (intent mapping or
/// scored above the strict threshold).
fn resolve_direct_match(query: &str) -> Option<AskResponse> {
    let entry = match_question(query)?;
    let ranked = match_question_multiple(query, DEFAULT_MULTI_LIMIT);
    Some(kb_response(
        entry,
        Confidence::High,
        related_from(&ranked, Some(entry.id)),
    ))
}

/// Rung 3: second chance through the ranked list with its looser
/// threshold. High confidence only well clear of the minimum.
fn resolve_ranked_match(query: &str) -> Option<AskResponse> {
    let ranked = match_question_multiple(query, DEFAULT_MULTI_LIMIT);
    let best = ranked.first()?;

    let token_count = extract_keywords(&query.to_lowercase()).len();
    let min_score = multi_threshold(token_count);
    let confidence = if best.score >= min_score * RANKED_HIGH_CONFIDENCE_FACTOR {
        Confidence::High
    } else {
        Confidence::Medium
    };
    debug!(faq = best.entry.id, score = best.score, "ranked match");

    Some(kb_response(
        best.entry,
        confidence,
        related_from(&ranked[1..], None),
    ))
}

/// Rung 4: generated contextual answer. Always produces something.
fn resolve_generated(query: &str) -> AskResponse {
    let answer = generate_answer(query);
    let (source, confidence) = if is_fallback(&answer) {
        (AnswerSource::System, Confidence::Low)
    } else {
        (AnswerSource::AiGenerated, Confidence::Medium)
    };
    AskResponse {
        answer,
        matched_question: None,
        category: None,
        source,
        confidence,
        related_faqs: Vec::new(),
    }
}

/// Answer a free-text question. Never returns an empty answer.
#[must_use]
pub fn ask(query: &str) -> AskResponse {
    resolve_guard(query)
        .or_else(|| resolve_intent_generated(query))
        .or_else(|| resolve_direct_match(query))
        .or_else(|| resolve_ranked_match(query))
        .unwrap_or_else(|| resolve_generated(query))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn guard_fires_for_short_queries() {
        let resp = ask("f");
        assert_eq!(resp.source, AnswerSource::System);
        assert_eq!(resp.confidence, Confidence::Low);
        assert!(resp.answer.contains("ask a question"));
    }

    #[test]
    fn direct_match_reports_high_confidence() {
        let resp = ask("What is the service fee?");
        assert_eq!(resp.source, AnswerSource::KnowledgeBase);
        assert_eq!(resp.confidence, Confidence::High);
        assert_eq!(resp.matched_question.as_deref(), Some("What is the service fee?"));
        assert_eq!(resp.category.as_deref(), Some("fees"));
    }

    #[test]
    fn greeting_takes_the_generated_intent_rung() {
        let resp = ask("hello");
        assert_eq!(resp.source, AnswerSource::AiGenerated);
        assert_eq!(resp.confidence, Confidence::High);
    }

    #[test]
    fn fallback_is_low_confidence_and_echoes() {
        let resp = ask("xyzxyz qqqq");
        assert_eq!(resp.confidence, Confidence::Low);
        assert!(resp.answer.contains("xyzxyz qqqq"));
        assert!(!resp.answer.is_empty());
    }

    #[test]
    fn related_faqs_exclude_the_match_itself() {
        let resp = ask("What is the service fee?");
        assert!(resp.related_faqs.iter().all(|r| r.id != "fee-1"));
    }
}
