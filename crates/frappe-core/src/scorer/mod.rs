mod engine;
mod types;

pub use types::ScoreDetails;

use crate::config::{KeyboardsFile, WeightConfig};
use crate::corpus::NGramFrequency;
use crate::error::FrResult;
use crate::key::Finger;
use crate::layout::{ExtendedKeyboardLayout, KeyboardLayout, KeymapTable};
use rayon::prelude::*;
use tracing::debug;

/// Ideal share of total keystrokes per finger, mirrored for both hands.
/// Kept as a pure function so scoring stays a function of its explicit
/// inputs.
pub fn ideal_finger_share(finger: Finger) -> f64 {
    match finger {
        Finger::Pinky => 0.10,
        Finger::Ring => 0.15,
        Finger::Middle => 0.20,
        Finger::Index => 0.45,
        Finger::Thumb => 0.10,
    }
}

/// Ergonomics scorer: weighted aggregation of movement classifications over
/// n-gram frequencies. Pure and stateless beyond its weight configuration,
/// so one instance can be shared across concurrent evaluations.
#[derive(Debug, Clone, Default)]
pub struct Scorer {
    weights: WeightConfig,
}

impl Scorer {
    pub fn new(weights: WeightConfig) -> Self {
        Self { weights }
    }

    pub fn weights(&self) -> &WeightConfig {
        &self.weights
    }

    /// Evaluates a simple (character -> key) layout.
    pub fn score_layout(
        &self,
        unigrams: &[NGramFrequency],
        bigrams: &[NGramFrequency],
        trigrams: &[NGramFrequency],
        layout: &KeyboardLayout,
    ) -> ScoreDetails {
        let d = engine::score_layout(&self.weights, unigrams, bigrams, trigrams, layout);
        debug!(
            score = d.score,
            occurrences = d.total_occurrences,
            skipped = d.stat_skipped,
            "simple layout scored"
        );
        d
    }

    /// Evaluates an extended layout, resolving every character through the
    /// keymap so one character may cost several keystrokes.
    pub fn score_extended(
        &self,
        unigrams: &[NGramFrequency],
        bigrams: &[NGramFrequency],
        trigrams: &[NGramFrequency],
        layout: &ExtendedKeyboardLayout,
        keymap: &KeymapTable,
    ) -> ScoreDetails {
        let d = engine::score_extended(&self.weights, unigrams, bigrams, trigrams, layout, keymap);
        debug!(
            score = d.score,
            occurrences = d.total_occurrences,
            skipped = d.stat_skipped,
            "extended layout scored"
        );
        d
    }

    /// Scores every layout in `keyboards` against the same frequencies,
    /// in parallel, and returns them best first.
    pub fn score_all(
        &self,
        keyboards: &KeyboardsFile,
        unigrams: &[NGramFrequency],
        bigrams: &[NGramFrequency],
        trigrams: &[NGramFrequency],
    ) -> FrResult<Vec<(String, ScoreDetails)>> {
        let names = keyboards.layout_names();
        let mut results: Vec<(String, ScoreDetails)> = names
            .par_iter()
            .map(|name| {
                let layout = keyboards.build_layout(name)?;
                Ok((
                    name.to_string(),
                    self.score_layout(unigrams, bigrams, trigrams, &layout),
                ))
            })
            .collect::<FrResult<_>>()?;

        results.sort_by(|a, b| {
            b.1.score
                .partial_cmp(&a.1.score)
                .unwrap_or(std::cmp::Ordering::Equal)
        });
        Ok(results)
    }
}
