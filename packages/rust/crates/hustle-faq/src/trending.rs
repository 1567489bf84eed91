//! Trending questions: mine recent message texts for question-like
//! strings that resolve to knowledge-base answers, padding with popular
//! FAQs when the mined set is thin.
//!
//! The message source is an external collaborator; this module only
//! takes the already-fetched candidate strings. A failed history read
//! upstream simply means an empty candidate list, which degrades to
//! popular FAQs alone.

use hustle_types::TrendingFaq;
use tracing::debug;

use crate::kb::{self, POPULAR_FAQ_IDS};
use crate::matcher::match_question;
use crate::text::looks_like_question;

/// Minimum number of trending pairs returned when padding is possible.
pub const MIN_TRENDING_COUNT: usize = 5;

/// Build the trending list from candidate message texts.
///
/// Candidates are scanned in the given order (callers pass newest
/// first); question-like texts that resolve to a knowledge-base entry
/// are kept, deduplicated by entry id, with the user's own phrasing as
/// the displayed question. Entries from `POPULAR_FAQ_IDS` fill the list
/// up to `min_count`.
#[must_use]
pub fn trending_from_messages(messages: &[String], min_count: usize) -> Vec<TrendingFaq> {
    let mut result: Vec<TrendingFaq> = Vec::new();

    for text in messages {
        if result.len() >= min_count {
            break;
        }
        if !looks_like_question(text) {
            continue;
        }
        let Some(entry) = match_question(text) else {
            continue;
        };
        if result.iter().any(|t| t.id == entry.id) {
            continue;
        }
        debug!(faq = entry.id, "trending hit from message history");
        result.push(TrendingFaq {
            id: entry.id.to_string(),
            question: text.trim().to_string(),
            answer: entry.answer.to_string(),
            category: entry.category.to_string(),
        });
    }

    // Pad with popular FAQs, skipping anything already present.
    for id in POPULAR_FAQ_IDS {
        if result.len() >= min_count {
            break;
        }
        if result.iter().any(|t| t.id == *id) {
            continue;
        }
        if let Some(entry) = kb::entry(id) {
            result.push(TrendingFaq {
                id: entry.id.to_string(),
                question: entry.question.to_string(),
                answer: entry.answer.to_string(),
                category: entry.category.to_string(),
            });
        }
    }

    result
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_history_degrades_to_popular() {
        let trending = trending_from_messages(&[], MIN_TRENDING_COUNT);
        assert_eq!(trending.len(), MIN_TRENDING_COUNT);
        assert_eq!(trending[0].id, POPULAR_FAQ_IDS[0]);
    }

    #[test]
    fn detected_questions_keep_user_phrasing() {
        let messages = vec!["What is the service fee?".to_string()];
        let trending = trending_from_messages(&messages, MIN_TRENDING_COUNT);
        assert_eq!(trending[0].id, "fee-1");
        assert_eq!(trending[0].question, "What is the service fee?");
    }

    #[test]
    fn duplicates_are_collapsed() {
        let messages = vec![
            "What is the service fee?".to_string(),
            "what is the service fee??".to_string(),
        ];
        let trending = trending_from_messages(&messages, MIN_TRENDING_COUNT);
        let fee_hits = trending.iter().filter(|t| t.id == "fee-1").count();
        assert_eq!(fee_hits, 1);
    }

    #[test]
    fn non_questions_are_ignored() {
        let messages = vec!["thanks for the great work yesterday".to_string()];
        let trending = trending_from_messages(&messages, MIN_TRENDING_COUNT);
        assert!(trending.iter().all(|t| t.question != messages[0]));
    }
}
