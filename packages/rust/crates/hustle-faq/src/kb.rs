//! The static knowledge base: canonical question/answer entries.
//!
//! Entries are compiled constants - immutable for the life of the
//! process, with globally unique ids. Every request is a pure function
//! over this table plus the incoming query string, so no locking or
//! per-request state is ever needed.

/// One canonical Q&A record.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KnowledgeBaseEntry {
    /// Stable unique identifier (e.g. "fee-1")
    pub id: &'static str,
    /// Topic tag: fees, payments, plans, account, jobs, safety, support
    pub category: &'static str,
    /// Canonical question text (display + word-overlap scoring)
    pub question: &'static str,
    /// Canonical answer text, returned verbatim on a match
    pub answer: &'static str,
    /// Single words or short phrases used for direct substring matching
    pub keywords: &'static [&'static str],
}

/// The knowledge base. Read-only after process start.
pub const KNOWLEDGE_BASE: &[KnowledgeBaseEntry] = &[
    KnowledgeBaseEntry {
        id: "fee-1",
        category: "fees",
        question: "What is the service fee?",
        answer: "HustleKE charges a 10% service fee on every completed job. The fee is \
                 deducted automatically when the client's payment is released, so the amount \
                 you see in your wallet is yours to keep.",
        keywords: &["service fee", "fee", "commission", "charges", "percentage"],
    },
    KnowledgeBaseEntry {
        id: "fee-2",
        category: "fees",
        question: "Are there fees for withdrawing money?",
        answer: "Withdrawals to M-Pesa are free for Pro members. Free-plan accounts pay a \
                 flat KES 25 withdrawal fee regardless of the amount.",
        keywords: &["withdrawal fee", "withdraw", "withdrawing", "mpesa fee"],
    },
    KnowledgeBaseEntry {
        id: "pay-1",
        category: "payments",
        question: "How do payments work on HustleKE?",
        answer: "Clients fund an escrow before work begins. The money stays locked until the \
                 job is approved, then it is released to the freelancer's wallet.",
        keywords: &["escrow", "payment", "payments work", "funded", "release"],
    },
    KnowledgeBaseEntry {
        id: "pay-2",
        category: "payments",
        question: "How quickly do I get paid after a job is approved?",
        answer: "As soon as the client approves your work the escrow is released to your \
                 wallet, and you can withdraw to M-Pesa instantly - most transfers land in \
                 seconds.",
        keywords: &["get paid", "paid", "payout", "mpesa", "instant", "approved", "quickly"],
    },
    KnowledgeBaseEntry {
        id: "pay-3",
        category: "payments",
        question: "What payment methods are supported?",
        answer: "We support M-Pesa, Airtel Money and bank transfer. M-Pesa is the fastest \
                 option and works for both deposits and withdrawals.",
        keywords: &["payment methods", "mpesa", "airtel", "bank transfer"],
    },
    KnowledgeBaseEntry {
        id: "pay-4",
        category: "payments",
        question: "Can I get a refund if the work is not delivered?",
        answer: "Yes. If a freelancer fails to deliver, open a dispute from the job page and \
                 the escrowed amount is returned to you in full.",
        keywords: &["refund", "money back", "not delivered", "never delivered"],
    },
    KnowledgeBaseEntry {
        id: "plan-1",
        category: "plans",
        question: "What does the Pro plan include?",
        answer: "Pro gives you unlimited bids, a verified badge, priority placement in search \
                 results and free M-Pesa withdrawals for KES 499 per month.",
        keywords: &["pro plan", "premium", "upgrade", "subscription"],
    },
    KnowledgeBaseEntry {
        id: "plan-2",
        category: "plans",
        question: "How do I cancel my subscription?",
        answer: "Go to Settings, then Billing, and tap Cancel subscription. Your Pro benefits \
                 stay active until the end of the period you already paid for.",
        keywords: &["cancel subscription", "cancel plan", "downgrade", "stop billing"],
    },
    KnowledgeBaseEntry {
        id: "plan-3",
        category: "plans",
        question: "Is there a free plan?",
        answer: "Yes. The free plan lets you create a profile and place up to five bids per \
                 month. Upgrade to Pro any time for unlimited bidding.",
        keywords: &["free plan", "free account", "basic plan"],
    },
    KnowledgeBaseEntry {
        id: "acc-1",
        category: "account",
        question: "How do I verify my account?",
        answer: "Upload your national ID and take a selfie from the verification page. Most \
                 accounts are reviewed within 24 hours and get the verified badge once \
                 approved.",
        keywords: &["verify", "verification", "national id", "verified badge"],
    },
    KnowledgeBaseEntry {
        id: "acc-2",
        category: "account",
        question: "How do I reset my password?",
        answer: "Use the Forgot password link on the sign-in page. We will send a reset code \
                 to the phone number or email on your account.",
        keywords: &["reset password", "forgot password", "locked out", "sign in"],
    },
    KnowledgeBaseEntry {
        id: "acc-3",
        category: "account",
        question: "How do I delete my account?",
        answer: "Open Settings, then Account, and choose Delete account. Pending jobs must be \
                 completed or cancelled first, and any wallet balance should be withdrawn.",
        keywords: &["delete account", "close account", "remove account"],
    },
    KnowledgeBaseEntry {
        id: "job-1",
        category: "jobs",
        question: "How do I post a job?",
        answer: "Click Post a job from your dashboard, describe the work, set a budget and a \
                 deadline. Freelancers start bidding within minutes.",
        keywords: &["post a job", "post job", "hire", "create job"],
    },
    KnowledgeBaseEntry {
        id: "job-2",
        category: "jobs",
        question: "How does bidding work?",
        answer: "Open a job you like and submit a bid with your price and a short pitch. The \
                 client compares bids and awards the job to one freelancer.",
        keywords: &["bidding", "bid", "proposal", "apply for"],
    },
    KnowledgeBaseEntry {
        id: "job-3",
        category: "jobs",
        question: "Can I bid more than the client's budget?",
        answer: "Yes. The budget is a guideline, not a cap. You can bid above it if you \
                 explain the value you bring, though bids far over budget are less likely to \
                 win.",
        keywords: &["over budget", "above budget", "bid higher", "more than the budget"],
    },
    KnowledgeBaseEntry {
        id: "job-4",
        category: "jobs",
        question: "Can I cancel a job after awarding it?",
        answer: "Yes, a job can be cancelled by mutual agreement before delivery. The escrow \
                 is refunded to the client and the job is closed without penalty.",
        keywords: &["cancel job", "cancel order", "mutual agreement"],
    },
    KnowledgeBaseEntry {
        id: "safe-1",
        category: "safety",
        question: "How do I avoid scams?",
        answer: "Keep all communication and payments on HustleKE. Never pay or accept payment \
                 outside escrow, and report any user who asks you to move off the platform.",
        keywords: &["scam", "fraud", "fake", "suspicious", "report user"],
    },
    KnowledgeBaseEntry {
        id: "safe-2",
        category: "safety",
        question: "What happens if I have a dispute with a client?",
        answer: "Open a dispute from the job page within 7 days of delivery. Our resolution \
                 team reviews the chat history and deliverables and decides within 3 business \
                 days.",
        keywords: &["dispute", "complaint", "resolution", "disagreement"],
    },
    KnowledgeBaseEntry {
        id: "sup-1",
        category: "support",
        question: "How do I contact support?",
        answer: "Email support@hustleke.com or use the live chat in your dashboard. We \
                 respond within a few hours on business days.",
        keywords: &["contact support", "customer care", "support email", "live chat"],
    },
    KnowledgeBaseEntry {
        id: "prof-1",
        category: "account",
        question: "How do I make my profile stand out?",
        answer: "Add a clear photo, list your skills, link past work samples and keep your \
                 bio specific. Verified profiles with portfolios win twice as many jobs.",
        keywords: &["profile", "portfolio", "skills", "stand out"],
    },
];

/// Entry ids surfaced when trending data is thin. Order matters: the
/// first ids are padded in first.
pub const POPULAR_FAQ_IDS: &[&str] = &["fee-1", "pay-2", "job-2", "acc-1", "plan-1", "safe-1"];

/// Look up an entry by id. Linear scan; the table stays small.
#[must_use]
pub fn entry(id: &str) -> Option<&'static KnowledgeBaseEntry> {
    KNOWLEDGE_BASE.iter().find(|e| e.id == id)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn ids_are_unique() {
        let ids: HashSet<&str> = KNOWLEDGE_BASE.iter().map(|e| e.id).collect();
        assert_eq!(ids.len(), KNOWLEDGE_BASE.len());
    }

    #[test]
    fn popular_ids_all_resolve() {
        for id in POPULAR_FAQ_IDS {
            assert!(entry(id).is_some(), "popular id {id} missing from KB");
        }
    }

    #[test]
    fn entries_are_complete() {
        for e in KNOWLEDGE_BASE {
            assert!(!e.question.is_empty());
            assert!(!e.answer.is_empty());
            assert!(!e.keywords.is_empty(), "{} has no keywords", e.id);
        }
    }
}
