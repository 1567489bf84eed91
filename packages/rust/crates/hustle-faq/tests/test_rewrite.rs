//! Tests for the answer rewriter.

use hustle_faq::rewrite_answer;

#[test]
fn test_clean_input_is_idempotent() {
    let rewritten = rewrite_answer("This is already clean.", "some unmapped question");
    assert_eq!(rewritten, "This is already clean.");
}

#[test]
fn test_kb_match_overrides_original() {
    let rewritten = rewrite_answer("we charge something, I think", "What is the service fee?");
    assert!(rewritten.contains("10% service fee"));
    assert!(!rewritten.contains("I think"));
}

#[test]
fn test_generated_answer_overrides_when_topical() {
    // No KB match, but the wallet topic produces a non-fallback answer
    let rewritten = rewrite_answer("original text", "tell me about my wallet balance");
    assert_ne!(rewritten, "original text.");
    assert!(rewritten.contains("wallet") || rewritten.contains("M-Pesa"));
}

#[test]
fn test_salutations_and_signoffs_stripped() {
    let rewritten = rewrite_answer(
        "Dear Sir/Madam, the job was relisted as requested. Kind regards, The HustleKE Team",
        "zzqq unmapped zzqq",
    );
    assert_eq!(rewritten, "the job was relisted as requested.");
}

#[test]
fn test_punctuation_appended_when_missing() {
    let rewritten = rewrite_answer("Hi there, all sorted now", "zzqq unmapped zzqq");
    assert_eq!(rewritten, "all sorted now.");
}

#[test]
fn test_original_returned_when_cleaning_empties() {
    let original = "Hello, Sincerely";
    assert_eq!(rewrite_answer(original, "zzqq unmapped zzqq"), original);
}
