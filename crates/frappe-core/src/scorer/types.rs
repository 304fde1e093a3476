use serde::{Deserialize, Serialize};

/// Full breakdown of one evaluation. `score` is the normalized figure
/// (higher is better, only comparable across runs sharing corpus and
/// weights); everything else explains where it came from.
#[derive(Debug, Default, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScoreDetails {
    /// Sum of all terms divided by `total_occurrences` (or the raw sum when
    /// there are no occurrences at all).
    pub score: f64,
    /// Sum of all terms before normalization.
    pub raw_total: f64,
    /// Every n-gram occurrence fed in, resolvable or not.
    pub total_occurrences: u64,

    pub hand_balance_penalty: f64,
    pub finger_distribution_penalty: f64,
    /// Share of resolvable unigram strokes typed by the left hand.
    pub left_hand_share: f64,

    // Weighted contribution per movement category.
    pub sfb: f64,
    pub ciseau: f64,
    pub lsb: f64,
    pub roulement: f64,
    pub alternance: f64,
    pub redirection: f64,
    pub mauvaise_redirection: f64,
    pub skipgram: f64,

    // Raw occurrence counters per movement category.
    pub stat_sfb: u64,
    pub stat_ciseau: u64,
    pub stat_lsb: u64,
    pub stat_roulement: u64,
    pub stat_alternance: u64,
    pub stat_redirection: u64,
    pub stat_mauvaise_redirection: u64,
    pub stat_skipgram: u64,
    pub stat_unknown: u64,
    /// Occurrences excluded from the weighted terms (unmapped characters or
    /// resolved sequences that are neither 2 nor 3 keys long). These still
    /// count in `total_occurrences`.
    pub stat_skipped: u64,
}
