//! Rule-based intent registry and detection.
//!
//! Intents are checked in registry order and the first match wins. A
//! query may loosely satisfy several definitions; only the earliest one
//! is ever returned, which makes the ordering below a behavioral
//! contract - reordering entries changes which intent wins on ambiguous
//! queries and requires test updates. Specific intents (for example
//! `bidding_budget`) sit above the broader ones they would otherwise
//! lose to (`bidding`).

use crate::similarity::words_match;
use crate::text::extract_keywords;

/// One named intent: literal trigger phrases plus conjunctive keyword
/// groups, mapped to zero or more knowledge-base entry ids.
#[derive(Debug, Clone, Copy)]
pub struct IntentDefinition {
    /// Unique intent name
    pub intent: &'static str,
    /// Knowledge-base ids this intent resolves to; empty when the intent
    /// only has a generated answer
    pub faq_ids: &'static [&'static str],
    /// Literal substrings that fire the intent immediately
    pub phrases: &'static [&'static str],
    /// AND-groups: every keyword in a group must be present to fire
    pub keyword_sets: &'static [&'static [&'static str]],
}

/// Result of intent detection.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IntentMatch {
    /// Name of the matched intent
    pub intent: &'static str,
    /// Knowledge-base ids the intent maps to (possibly empty)
    pub faq_ids: &'static [&'static str],
}

/// The ordered intent registry. First match wins.
pub const INTENT_DEFS: &[IntentDefinition] = &[
    IntentDefinition {
        intent: "bidding_budget",
        faq_ids: &["job-3"],
        phrases: &[
            "bid more than the budget",
            "bid above the budget",
            "bid higher than the budget",
            "exceed the budget",
            "over the budget",
        ],
        keyword_sets: &[&["bid", "budget"]],
    },
    IntentDefinition {
        intent: "getting_paid",
        faq_ids: &["pay-2"],
        phrases: &[
            "when do i get paid",
            "how do i get paid",
            "how fast do i get paid",
            "when will i be paid",
            "receive my payment",
            "get my money",
        ],
        keyword_sets: &[&["paid", "approve"], &["paid", "client"], &["payout", "when"]],
    },
    IntentDefinition {
        intent: "withdrawal_fee",
        faq_ids: &["fee-2"],
        phrases: &["withdrawal fee", "fee to withdraw", "charged to withdraw"],
        keyword_sets: &[&["withdraw", "fee"]],
    },
    IntentDefinition {
        intent: "service_fee",
        faq_ids: &["fee-1"],
        phrases: &["service fee", "platform fee", "how much commission", "what commission"],
        keyword_sets: &[&["fee", "charge"], &["commission", "hustleke"]],
    },
    IntentDefinition {
        intent: "payment_methods",
        faq_ids: &["pay-3"],
        phrases: &[
            "payment methods",
            "ways to pay",
            "how can i pay",
            "pay with mpesa",
            "pay with airtel",
        ],
        keyword_sets: &[&["airtel", "money"], &["mpesa", "supported"]],
    },
    IntentDefinition {
        intent: "escrow",
        faq_ids: &["pay-1"],
        phrases: &["what is escrow", "how does escrow work", "how do payments work"],
        keyword_sets: &[&["escrow"]],
    },
    IntentDefinition {
        intent: "refund",
        faq_ids: &["pay-4"],
        phrases: &["money back", "get a refund", "refund me"],
        keyword_sets: &[&["refund"], &["work", "not", "delivered"]],
    },
    IntentDefinition {
        intent: "cancel_subscription",
        faq_ids: &["plan-2"],
        phrases: &[
            "cancel my subscription",
            "cancel my plan",
            "stop my subscription",
            "cancel pro",
        ],
        keyword_sets: &[&["cancel", "subscription"], &["downgrade"]],
    },
    IntentDefinition {
        intent: "pro_plan",
        faq_ids: &["plan-1"],
        phrases: &["pro plan", "what does pro include", "upgrade to pro"],
        keyword_sets: &[&["premium", "plan"]],
    },
    IntentDefinition {
        intent: "free_plan",
        faq_ids: &["plan-3"],
        phrases: &["free plan", "is it free", "use for free"],
        keyword_sets: &[&["free", "account"]],
    },
    IntentDefinition {
        intent: "verify_account",
        faq_ids: &["acc-1"],
        phrases: &[
            "verify my account",
            "get verified",
            "verification badge",
            "verified badge",
        ],
        keyword_sets: &[&["verify", "account"], &["verification"]],
    },
    IntentDefinition {
        intent: "reset_password",
        faq_ids: &["acc-2"],
        phrases: &[
            "reset my password",
            "forgot my password",
            "forgot password",
            "cannot log in",
            "can't log in",
            "locked out",
        ],
        keyword_sets: &[&["reset", "password"], &["forgot", "password"]],
    },
    IntentDefinition {
        intent: "delete_account",
        faq_ids: &["acc-3"],
        phrases: &["delete my account", "close my account", "remove my account"],
        keyword_sets: &[&["delete", "account"], &["close", "account"]],
    },
    IntentDefinition {
        intent: "post_job",
        faq_ids: &["job-1"],
        phrases: &["post a job", "post job", "hire a freelancer", "hire someone"],
        keyword_sets: &[&["post", "job"], &["hire", "freelancer"]],
    },
    IntentDefinition {
        intent: "bidding",
        faq_ids: &["job-2"],
        phrases: &[
            "how does bidding work",
            "how do i bid",
            "place a bid",
            "submit a bid",
        ],
        keyword_sets: &[&["bid", "job"], &["proposal", "job"]],
    },
    IntentDefinition {
        intent: "cancel_job",
        faq_ids: &["job-4"],
        phrases: &[
            "cancel a job",
            "cancel the job",
            "cancel an order",
            "cancel my order",
        ],
        keyword_sets: &[&["cancel", "job"], &["cancel", "order"]],
    },
    IntentDefinition {
        intent: "scam",
        faq_ids: &["safe-1"],
        phrases: &[
            "is this a scam",
            "avoid scams",
            "being scammed",
            "report a user",
            "report someone",
        ],
        keyword_sets: &[&["scam"], &["fraud"], &["suspicious", "user"]],
    },
    IntentDefinition {
        intent: "dispute",
        faq_ids: &["safe-2"],
        phrases: &["open a dispute", "raise a dispute", "file a complaint"],
        keyword_sets: &[&["dispute"], &["complaint", "client"]],
    },
    IntentDefinition {
        intent: "contact_support",
        faq_ids: &["sup-1"],
        phrases: &[
            "contact support",
            "talk to support",
            "speak to a human",
            "customer care",
            "talk to someone",
        ],
        keyword_sets: &[&["support", "email"], &["customer", "care"]],
    },
    IntentDefinition {
        intent: "profile_tips",
        faq_ids: &["prof-1"],
        phrases: &["improve my profile", "profile stand out", "better profile"],
        keyword_sets: &[&["profile", "improve"], &["profile", "portfolio"]],
    },
    // Generated-only intents: no KB mapping, answered from the canned
    // paragraphs in the generator. Kept below the domain intents so a
    // greeting inside a real question never swallows it.
    IntentDefinition {
        intent: "getting_started",
        faq_ids: &[],
        phrases: &["how do i start", "getting started", "how to begin", "new here"],
        keyword_sets: &[&["start", "freelancing"]],
    },
    IntentDefinition {
        intent: "greeting",
        faq_ids: &[],
        phrases: &[
            "hello",
            "hey there",
            "good morning",
            "good afternoon",
            "good evening",
            "habari",
            "jambo",
        ],
        keyword_sets: &[],
    },
    IntentDefinition {
        intent: "thanks",
        faq_ids: &[],
        phrases: &["thank you", "thanks", "asante"],
        keyword_sets: &[],
    },
    IntentDefinition {
        intent: "goodbye",
        faq_ids: &[],
        phrases: &["goodbye", "bye bye", "see you later", "kwaheri"],
        keyword_sets: &[],
    },
    IntentDefinition {
        intent: "capabilities",
        faq_ids: &[],
        phrases: &["what can you do", "how can you help", "what do you know"],
        keyword_sets: &[],
    },
];

/// Whether a single keyword counts as present in the query.
///
/// Short keywords (3 chars or fewer) only use substring matching; longer
/// ones also match any query token via `words_match` (stemming + fuzzy),
/// with a raw substring check as the catch-all.
fn keyword_present(keyword: &str, query_lower: &str, tokens: &[String]) -> bool {
    if keyword.len() <= 3 {
        return query_lower.contains(keyword);
    }
    if tokens.iter().any(|t| words_match(t, keyword)) {
        return true;
    }
    query_lower.contains(keyword)
}

/// Detect the first intent (in registry order) that the query fires.
///
/// A definition fires when any literal phrase occurs case-insensitively
/// in the trimmed query, or when every keyword of any of its AND-groups
/// is present. Returns `None` when nothing fires.
#[must_use]
pub fn detect_intent(text: &str) -> Option<IntentMatch> {
    let query_lower = text.trim().to_lowercase();
    if query_lower.is_empty() {
        return None;
    }
    let tokens = extract_keywords(&query_lower);

    for def in INTENT_DEFS {
        if def.phrases.iter().any(|p| query_lower.contains(p)) {
            return Some(IntentMatch {
                intent: def.intent,
                faq_ids: def.faq_ids,
            });
        }
        for group in def.keyword_sets {
            if group
                .iter()
                .all(|kw| keyword_present(kw, &query_lower, &tokens))
            {
                return Some(IntentMatch {
                    intent: def.intent,
                    faq_ids: def.faq_ids,
                });
            }
        }
    }

    None
}
