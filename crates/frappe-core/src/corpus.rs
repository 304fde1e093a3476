use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// An n-gram and how often it occurs in one extraction pass.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NGramFrequency {
    pub ngram: String,
    pub frequency: u64,
}

/// Counts overlapping n-grams of char-length `n` in `text`.
///
/// All whitespace is stripped before the sliding window runs, so n-grams
/// never contain whitespace but do bridge what used to be word boundaries.
/// Degenerate input (`n == 0`, empty text, text shorter than `n`) yields an
/// empty map, never an error.
pub fn ngram_counts(text: &str, n: usize) -> HashMap<String, u64> {
    let mut counts = HashMap::new();
    if n == 0 {
        return counts;
    }

    let stripped: Vec<char> = text.chars().filter(|c| !c.is_whitespace()).collect();
    for window in stripped.windows(n) {
        let ngram: String = window.iter().collect();
        *counts.entry(ngram).or_insert(0) += 1;
    }
    counts
}

/// Same counts as [`ngram_counts`], frozen into value records. Order of the
/// returned collection is not part of the contract.
pub fn ngram_list(text: &str, n: usize) -> Vec<NGramFrequency> {
    ngram_counts(text, n)
        .into_iter()
        .map(|(ngram, frequency)| NGramFrequency { ngram, frequency })
        .collect()
}
