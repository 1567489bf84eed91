//! Contextual answer generation for questions with no confident
//! knowledge-base match.
//!
//! Three rungs, first success wins: a canned paragraph for a detected
//! intent, the best-scoring topic response, and finally a generic
//! fallback that echoes the question. The result is never empty.

use crate::intent::detect_intent;
use crate::synonyms::expand_with_synonyms;
use crate::text::extract_keywords;

/// Fixed opening of the generic fallback. The rewriter checks for this
/// prefix to recognize a fallback answer, so it must stay stable.
pub const FALLBACK_PREFIX: &str = "Thanks for your question!";

/// Points per literal phrase found in the question.
const TOPIC_PHRASE_WEIGHT: u32 = 10;
/// Points per single-word pattern found as a substring.
const TOPIC_PATTERN_WEIGHT: u32 = 2;
/// Points per pattern equal to a synonym expansion of a query token.
const TOPIC_SYNONYM_WEIGHT: u32 = 1;
/// Minimum topic score before its response is used.
const TOPIC_MIN_SCORE: u32 = 2;

/// Canned paragraphs for generated-only intents, keyed by intent name.
const INTENT_ANSWERS: &[(&str, &str)] = &[
    (
        "greeting",
        "Hello! Welcome to HustleKE. I can answer questions about fees, payments, bidding, \
         plans, account settings and staying safe on the platform. What would you like to \
         know?",
    ),
    (
        "thanks",
        "You're welcome! If anything else comes up about jobs, payments or your account, \
         just ask. Happy hustling!",
    ),
    (
        "goodbye",
        "Goodbye, and good luck with your hustle! Come back any time you have a question \
         about the platform.",
    ),
    (
        "capabilities",
        "I answer questions about how HustleKE works: service fees, getting paid through \
         M-Pesa, posting jobs, bidding, Pro plans, account verification and avoiding scams. \
         Ask me anything in those areas and I'll point you to the right answer.",
    ),
    (
        "getting_started",
        "Getting started is quick: create your profile, verify your account with your \
         national ID, then browse open jobs and place your first bid. The free plan gives \
         you five bids a month, so pick jobs that match your skills closely.",
    ),
];

/// One fallback-tier topic rule: literal phrases, single-word patterns,
/// and the canned response used when the topic wins.
struct TopicResponse {
    phrases: &'static [&'static str],
    patterns: &'static [&'static str],
    response: &'static str,
}

/// Topic rules, consulted only when no intent or KB match succeeded.
const TOPIC_RESPONSES: &[TopicResponse] = &[
    TopicResponse {
        phrases: &["receive money", "send money", "get my earnings"],
        patterns: &["payment", "pay", "money", "mpesa", "wallet", "withdraw", "cash"],
        response: "Payments on HustleKE run through escrow: the client funds the job up \
                   front, and once the work is approved the money lands in your wallet. \
                   From there you can withdraw to M-Pesa instantly. Check the Payments \
                   section of your dashboard for your balance and history.",
    },
    TopicResponse {
        phrases: &["how much does it cost", "what does it cost"],
        patterns: &["fee", "fees", "cost", "charge", "commission", "price", "pricing"],
        response: "HustleKE keeps pricing simple: a 10% service fee on completed jobs, \
                   deducted automatically when payment is released. Withdrawals to M-Pesa \
                   are free on Pro and KES 25 on the free plan. There are no hidden \
                   charges beyond that.",
    },
    TopicResponse {
        phrases: &["find work", "get clients", "win jobs", "win more jobs"],
        patterns: &["job", "jobs", "work", "gig", "bid", "client", "project"],
        response: "Work on HustleKE flows through bidding: browse open jobs, submit a bid \
                   with your price and pitch, and the client picks a freelancer. A \
                   complete, verified profile with portfolio samples wins noticeably more \
                   bids.",
    },
    TopicResponse {
        phrases: &["my account", "my profile"],
        patterns: &["account", "profile", "password", "login", "settings", "verification"],
        response: "Everything about your account lives under Settings: profile details, \
                   verification, password resets and billing. If you're locked out, use \
                   the Forgot password link on the sign-in page and we'll send a reset \
                   code.",
    },
    TopicResponse {
        phrases: &["is it safe", "being cheated"],
        patterns: &["scam", "fraud", "safe", "safety", "security", "trust", "report"],
        response: "Stay safe by keeping all communication and payments inside HustleKE. \
                   Escrow protects both sides, and our resolution team handles disputes. \
                   Report any user who asks you to pay or chat off the platform.",
    },
    TopicResponse {
        phrases: &["which plan", "worth upgrading"],
        patterns: &["plan", "subscription", "pro", "premium", "upgrade", "membership"],
        response: "HustleKE has a free plan (five bids a month) and Pro at KES 499/month \
                   with unlimited bids, a verified badge, priority search placement and \
                   free withdrawals. You can upgrade, downgrade or cancel from Settings \
                   at any time.",
    },
];

/// Canned paragraph for a generated-only intent, if one exists.
#[must_use]
pub fn intent_answer(intent: &str) -> Option<&'static str> {
    INTENT_ANSWERS
        .iter()
        .find(|(name, _)| *name == intent)
        .map(|(_, answer)| *answer)
}

/// Score one topic rule against the question.
fn topic_score(topic: &TopicResponse, question_lower: &str, tokens: &[String]) -> u32 {
    let mut score = 0;

    for phrase in topic.phrases {
        if question_lower.contains(phrase) {
            score += TOPIC_PHRASE_WEIGHT;
        }
    }

    for pattern in topic.patterns {
        if question_lower.contains(pattern) {
            score += TOPIC_PATTERN_WEIGHT;
        }
        if tokens
            .iter()
            .any(|t| expand_with_synonyms(t).iter().any(|form| form == pattern))
        {
            score += TOPIC_SYNONYM_WEIGHT;
        }
    }

    score
}

/// Generate a contextual answer for a question that found no confident
/// knowledge-base match. Never returns an empty string.
#[must_use]
pub fn generate_answer(question: &str) -> String {
    // Rung 1: canned paragraph for a detected intent.
    if let Some(intent) = detect_intent(question)
        && let Some((_, answer)) = INTENT_ANSWERS.iter().find(|(name, _)| *name == intent.intent)
    {
        return (*answer).to_string();
    }

    // Rung 2: best-scoring topic response.
    let question_lower = question.to_lowercase();
    let tokens = extract_keywords(&question_lower);

    let best = TOPIC_RESPONSES
        .iter()
        .map(|t| (topic_score(t, &question_lower, &tokens), t))
        .max_by_key(|(score, _)| *score);

    if let Some((score, topic)) = best
        && score >= TOPIC_MIN_SCORE
    {
        return topic.response.to_string();
    }

    // Rung 3: generic fallback. The only generic branch, and it always
    // embeds the literal question text.
    format!(
        "{FALLBACK_PREFIX} I don't have a ready answer for \"{question}\" yet, but our team \
         does. Reach out through the live chat on your dashboard, email \
         support@hustleke.com, or browse the FAQ section for related topics."
    )
}

/// Whether a generated answer is the generic fallback rather than an
/// intent or topic answer.
#[must_use]
pub fn is_fallback(answer: &str) -> bool {
    answer.starts_with(FALLBACK_PREFIX)
}
