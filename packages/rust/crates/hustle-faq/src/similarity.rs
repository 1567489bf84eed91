//! String similarity primitives: edit distance, typo-tolerant fuzzy
//! equality, and the word-level match predicate used by the scorer.
//!
//! Callers lowercase their inputs first; nothing here normalizes case.

/// Minimum word length before fuzzy or prefix matching applies. Shorter
/// words are compared exactly to avoid false positives like "is" ~ "it".
const FUZZY_MIN_LEN: usize = 4;

/// Fraction of the longer word's length allowed as edit operations.
const FUZZY_EDIT_RATIO: f64 = 0.25;

/// Classic Levenshtein distance (insert/delete/substitute, cost 1 each).
///
/// Two-row dynamic programming over `char`s, case-sensitive.
#[must_use]
pub fn levenshtein(a: &str, b: &str) -> usize {
    let a_chars: Vec<char> = a.chars().collect();
    let b_chars: Vec<char> = b.chars().collect();

    let (m, n) = (a_chars.len(), b_chars.len());

    if m == 0 {
        return n;
    }
    if n == 0 {
        return m;
    }

    let mut prev = (0..=n).collect::<Vec<_>>();
    let mut curr = vec![0; n + 1];

    for i in 1..=m {
        curr[0] = i;
        for j in 1..=n {
            let cost = usize::from(a_chars[i - 1] != b_chars[j - 1]);
            let deletion = prev[j] + 1;
            let insertion = curr[j - 1] + 1;
            let substitution = prev[j - 1] + cost;
            curr[j] = deletion.min(insertion).min(substitution);
        }
        std::mem::swap(&mut prev, &mut curr);
    }

    prev[n]
}

/// Edit distance where an adjacent transposition counts as one edit
/// (optimal string alignment). Only `fuzzy_match` uses this: a swapped
/// pair like "recieve" is a single typo, not two.
fn typo_distance(a: &str, b: &str) -> usize {
    let a_chars: Vec<char> = a.chars().collect();
    let b_chars: Vec<char> = b.chars().collect();

    let (m, n) = (a_chars.len(), b_chars.len());

    if m == 0 {
        return n;
    }
    if n == 0 {
        return m;
    }

    let mut d = vec![vec![0usize; n + 1]; m + 1];
    for (i, row) in d.iter_mut().enumerate() {
        row[0] = i;
    }
    for j in 0..=n {
        d[0][j] = j;
    }

    for i in 1..=m {
        for j in 1..=n {
            let cost = usize::from(a_chars[i - 1] != b_chars[j - 1]);
            let mut best = (d[i - 1][j] + 1)
                .min(d[i][j - 1] + 1)
                .min(d[i - 1][j - 1] + cost);
            if i > 1 && j > 1 && a_chars[i - 1] == b_chars[j - 2] && a_chars[i - 2] == b_chars[j - 1]
            {
                best = best.min(d[i - 2][j - 2] + 1);
            }
            d[i][j] = best;
        }
    }

    d[m][n]
}

/// Typo-tolerant equality check.
///
/// Exact equality passes. Words shorter than 4 characters never fuzzy
/// match. Otherwise the typo distance must stay within 25% of the longer
/// word's length, floored: 4-letter words allow 1 edit, 8-letter words 2.
#[must_use]
pub fn fuzzy_match(w1: &str, w2: &str) -> bool {
    if w1 == w2 {
        return true;
    }
    let len1 = w1.chars().count();
    let len2 = w2.chars().count();
    if len1 < FUZZY_MIN_LEN || len2 < FUZZY_MIN_LEN {
        return false;
    }
    #[allow(clippy::cast_precision_loss, clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    let allowed = (len1.max(len2) as f64 * FUZZY_EDIT_RATIO).floor() as usize;
    typo_distance(w1, w2) <= allowed
}

/// Word-level match: equal, fuzzy-equal, or a shared prefix between two
/// words of at least 4 characters (lightweight stemming, so "bidding"
/// matches "bid" via keyword sets and "payment" matches "payments").
///
/// Known heuristic limitation: unrelated words sharing a long prefix
/// ("report" vs "reporter") also match. Kept as-is.
#[must_use]
pub fn words_match(query_word: &str, target_word: &str) -> bool {
    if query_word == target_word {
        return true;
    }
    if fuzzy_match(query_word, target_word) {
        return true;
    }
    query_word.len() >= FUZZY_MIN_LEN
        && target_word.len() >= FUZZY_MIN_LEN
        && (query_word.starts_with(target_word) || target_word.starts_with(query_word))
}
