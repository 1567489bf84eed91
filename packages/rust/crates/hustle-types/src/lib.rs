//! hustle-types - Common type definitions for the HustleKE FAQ engine
//!
//! This crate provides the shared data structures used across the FAQ
//! crates: the response payloads of the four boundary operations and the
//! unified error type for the gateway.
//!
//! # Schema Singularity
//! Types derive `schemars::JsonSchema` to enable automatic JSON Schema
//! generation, so API consumers can retrieve authoritative schemas
//! instead of re-declaring the shapes by hand.

#![allow(clippy::doc_markdown)]

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Result type with FAQ-specific error
pub type FaqResult<T> = Result<T, FaqError>;

/// Unified error type for the FAQ boundary operations.
///
/// The matching core itself is total and never errors; these variants
/// cover the gateway surface and external collaborators.
#[derive(Debug, Error, Serialize, Deserialize)]
pub enum FaqError {
    /// Request body or query parameters failed validation
    #[error("Invalid request: {0}")]
    InvalidRequest(String),

    /// Message-history collaborator failed (trending degrades instead)
    #[error("Message history error: {0}")]
    History(String),

    /// Unclassified failures
    #[error("Unknown error: {0}")]
    Unknown(String),
}

/// Which rung of the resolution ladder produced an answer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum AnswerSource {
    /// Canonical answer from the knowledge base (intent or scored match)
    KnowledgeBase,
    /// Synthesized answer (intent canned text or topic response)
    AiGenerated,
    /// Guard replies and the generic fallback template
    System,
}

/// Confidence label reflecting which rung produced the answer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "lowercase")]
pub enum Confidence {
    /// Direct knowledge-base or intent match
    High,
    /// Ranked match below 1.5x the minimum acceptable score, or a topic response
    Medium,
    /// Guard reply or generic fallback only
    Low,
}

/// One ranked result from the `search` operation.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct SearchResult {
    /// Knowledge-base entry id
    pub id: String,
    /// Topic tag of the entry
    pub category: String,
    /// Canonical question text
    pub question: String,
    /// Canonical answer text
    pub answer: String,
    /// Relevance score from the scorer (higher is better)
    pub relevance: f64,
}

/// A related FAQ suggestion attached to an `ask` response.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct RelatedFaq {
    /// Knowledge-base entry id
    pub id: String,
    /// Canonical question text
    pub question: String,
    /// Topic tag of the entry
    pub category: String,
}

/// Response of the `ask` operation. The `answer` field is never empty.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct AskResponse {
    /// The answer text (canonical, generated, or fallback)
    pub answer: String,
    /// Canonical question of the matched entry, when one matched
    #[serde(skip_serializing_if = "Option::is_none")]
    pub matched_question: Option<String>,
    /// Category of the matched entry, when one matched
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    /// Which rung of the ladder produced the answer
    pub source: AnswerSource,
    /// Derived confidence label (never accepted as input)
    pub confidence: Confidence,
    /// Up to a handful of related FAQ suggestions
    #[serde(default)]
    pub related_faqs: Vec<RelatedFaq>,
}

/// One trending question/answer pair from the `trending` operation.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct TrendingFaq {
    /// Knowledge-base entry id backing the pair
    pub id: String,
    /// Question text (user phrasing when detected, canonical when padded)
    pub question: String,
    /// Canonical answer text
    pub answer: String,
    /// Topic tag of the entry
    pub category: String,
}

/// Response of the `rewrite` operation.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct RewriteResponse {
    /// The answer text as submitted
    pub original: String,
    /// The substituted or cleaned-up answer text
    pub rewritten: String,
    /// The question the answer belongs to (echo of request)
    pub question: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn answer_source_serializes_snake_case() {
        let json = serde_json::to_string(&AnswerSource::KnowledgeBase).unwrap();
        assert_eq!(json, "\"knowledge_base\"");
        let json = serde_json::to_string(&AnswerSource::AiGenerated).unwrap();
        assert_eq!(json, "\"ai_generated\"");
    }

    #[test]
    fn confidence_serializes_lowercase() {
        let json = serde_json::to_string(&Confidence::High).unwrap();
        assert_eq!(json, "\"high\"");
    }

    #[test]
    fn ask_response_omits_empty_match_fields() {
        let resp = AskResponse {
            answer: "hello".to_string(),
            matched_question: None,
            category: None,
            source: AnswerSource::System,
            confidence: Confidence::Low,
            related_faqs: Vec::new(),
        };
        let json = serde_json::to_value(&resp).unwrap();
        assert!(json.get("matched_question").is_none());
        assert!(json.get("category").is_none());
    }
}
