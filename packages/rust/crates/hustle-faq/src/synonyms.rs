//! Synonym dictionary for the marketplace domain.
//!
//! Words in the same group are treated as interchangeable when scoring a
//! query against knowledge-base text. Lookup is exact-match only - never
//! substring - so expansion stays bounded.

/// Synonym groups. Membership is symmetric: expanding any member yields
/// the whole group.
pub const SYNONYM_GROUPS: &[&[&str]] = &[
    // Money movement
    &["pay", "paid", "pays", "paying", "payment", "payments", "payout"],
    &["money", "cash", "funds", "earnings", "balance"],
    &["withdraw", "withdrawal", "withdrawals", "cashout"],
    &["mpesa", "m-pesa", "mobile money"],
    &["refund", "reimbursement", "chargeback", "money back"],
    // Platform economics
    &["fee", "fees", "charge", "charges", "commission", "cost", "pricing"],
    &["escrow", "deposit", "funded"],
    &["plan", "subscription", "package", "tier", "membership"],
    &["upgrade", "premium", "pro"],
    // Work
    &["job", "jobs", "gig", "gigs", "project", "task", "order", "work"],
    &["bid", "bids", "bidding", "proposal", "offer", "application"],
    &["client", "employer", "buyer", "customer"],
    &["freelancer", "worker", "contractor", "hustler", "seller"],
    &["budget", "price", "rate", "quote"],
    // Account
    &["account", "profile"],
    &["verify", "verified", "verification", "kyc"],
    &["password", "login", "signin", "credentials"],
    &["delete", "remove", "close", "deactivate"],
    &["cancel", "stop", "end", "terminate"],
    // Trust
    &["scam", "fraud", "fake", "cheat", "con"],
    &["dispute", "complaint", "disagreement", "conflict"],
    &["support", "help", "assistance", "customer care"],
    &["safe", "safety", "secure", "security", "trust"],
];

/// Expand a word to itself plus every member of any group containing it.
///
/// Membership is checked by exact equality; a word in no group expands
/// to just itself. Duplicates are not emitted.
#[must_use]
pub fn expand_with_synonyms(word: &str) -> Vec<String> {
    let mut expanded = vec![word.to_string()];

    for group in SYNONYM_GROUPS {
        if group.contains(&word) {
            for syn in *group {
                if !expanded.iter().any(|w| w == syn) {
                    expanded.push((*syn).to_string());
                }
            }
        }
    }

    expanded
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn expansion_is_symmetric() {
        let expanded = expand_with_synonyms("paid");
        assert!(expanded.iter().any(|w| w == "payment"));
        let expanded = expand_with_synonyms("payment");
        assert!(expanded.iter().any(|w| w == "paid"));
    }

    #[test]
    fn unknown_word_expands_to_itself() {
        let expanded = expand_with_synonyms("umbrella");
        assert_eq!(expanded, vec!["umbrella"]);
    }

    #[test]
    fn lookup_is_exact_not_substring() {
        // "payments" is a member; "payme" is not and must not expand
        let expanded = expand_with_synonyms("payme");
        assert_eq!(expanded, vec!["payme"]);
    }
}
