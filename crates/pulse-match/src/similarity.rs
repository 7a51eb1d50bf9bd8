//! String similarity for fuzzy title matching.
//!
//! The score is the larger of two measures over normalized keys:
//! - Sørensen-Dice overlap of the word sets (robust to extra or reordered words)
//! - `1 - levenshtein / max_len` over the words sorted alphabetically
//!   (robust to typos)
//!
//! Identical strings score 1.0, near-identical ones (one typo, one extra
//! word) land at or above 0.8, and titles sharing no words fall well below 0.5.

use std::collections::BTreeSet;

/// Similarity of two normalized titles in [0, 1].
#[must_use]
pub fn similarity(a: &str, b: &str) -> f64 {
    if a == b {
        return if a.is_empty() { 0.0 } else { 1.0 };
    }
    if a.is_empty() || b.is_empty() {
        return 0.0;
    }
    token_dice(a, b).max(edit_ratio(&sorted_tokens(a), &sorted_tokens(b)))
}

/// Sørensen-Dice coefficient over whitespace-separated word sets.
#[must_use]
#[allow(clippy::cast_precision_loss)]
pub fn token_dice(a: &str, b: &str) -> f64 {
    let left: BTreeSet<&str> = a.split_whitespace().collect();
    let right: BTreeSet<&str> = b.split_whitespace().collect();
    let total = left.len() + right.len();
    if total == 0 {
        return 0.0;
    }
    let shared = left.intersection(&right).count();
    (2 * shared) as f64 / total as f64
}

/// `1 - distance / longest`, measured in chars.
#[must_use]
#[allow(clippy::cast_precision_loss)]
pub fn edit_ratio(a: &str, b: &str) -> f64 {
    let longest = a.chars().count().max(b.chars().count());
    if longest == 0 {
        return 0.0;
    }
    1.0 - levenshtein(a, b) as f64 / longest as f64
}

/// Levenshtein distance in chars, two-row dynamic programming.
#[must_use]
pub fn levenshtein(a: &str, b: &str) -> usize {
    let a: Vec<char> = a.chars().collect();
    let b: Vec<char> = b.chars().collect();
    if a.is_empty() {
        return b.len();
    }
    if b.is_empty() {
        return a.len();
    }

    let mut previous: Vec<usize> = (0..=b.len()).collect();
    let mut current = vec![0; b.len() + 1];

    for (i, ca) in a.iter().enumerate() {
        current[0] = i + 1;
        for (j, cb) in b.iter().enumerate() {
            let substitution = previous[j] + usize::from(ca != cb);
            current[j + 1] = substitution.min(previous[j + 1] + 1).min(current[j] + 1);
        }
        std::mem::swap(&mut previous, &mut current);
    }
    previous[b.len()]
}

fn sorted_tokens(s: &str) -> String {
    let mut tokens: Vec<&str> = s.split_whitespace().collect();
    tokens.sort_unstable();
    tokens.join(" ")
}
