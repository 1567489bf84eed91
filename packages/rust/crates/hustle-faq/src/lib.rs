//! hustle-faq - rule-based FAQ matching and intent resolution.
//!
//! A deterministic text-matching engine: tokenization, stop-word
//! filtering, typo-tolerant fuzzy matching, synonym expansion, weighted
//! scoring and layered fallback resolution - no external NLP or ML
//! service. The knowledge base, intent registry and synonym table are
//! compiled constants, so every operation is a pure, synchronous
//! function of (static tables, query string) and requests can run in
//! parallel with no coordination.
//!
//! The four boundary operations:
//! - [`search`] - ranked knowledge-base results for a free-text query
//! - [`ask`] - layered resolution to a single answer, never empty
//! - [`trending_from_messages`] - question mining over recent messages
//! - [`rewrite_answer`] - substitute or clean a human-written answer

#![allow(clippy::doc_markdown)]

pub mod ask;
pub mod generate;
pub mod intent;
pub mod kb;
pub mod matcher;
pub mod rewrite;
pub mod score;
pub mod similarity;
pub mod synonyms;
pub mod text;
pub mod trending;

pub use ask::ask;
pub use generate::{FALLBACK_PREFIX, generate_answer, is_fallback};
pub use intent::{INTENT_DEFS, IntentDefinition, IntentMatch, detect_intent};
pub use kb::{KNOWLEDGE_BASE, KnowledgeBaseEntry, POPULAR_FAQ_IDS};
pub use matcher::{ScoredEntry, match_question, match_question_multiple, search};
pub use rewrite::rewrite_answer;
pub use score::score_question;
pub use similarity::{fuzzy_match, levenshtein, words_match};
pub use synonyms::{SYNONYM_GROUPS, expand_with_synonyms};
pub use text::extract_keywords;
pub use trending::{MIN_TRENDING_COUNT, trending_from_messages};
