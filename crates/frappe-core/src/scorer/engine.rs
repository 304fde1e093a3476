use super::ideal_finger_share;
use super::types::ScoreDetails;
use crate::config::WeightConfig;
use crate::corpus::NGramFrequency;
use crate::key::{Finger, Hand, Key};
use crate::layout::{ExtendedKeyboardLayout, KeyboardLayout, KeymapTable};
use crate::movement::{classify_bigram, classify_trigram, MovementType};
use crate::resolver::{resolve_char, resolve_ngram};
use std::collections::HashMap;
use strum::IntoEnumIterator;

const HAND_BALANCE_SCALE: f64 = 1000.0;
const FINGER_DISTRIBUTION_SCALE: f64 = 500.0;

pub(super) fn score_layout(
    weights: &WeightConfig,
    unigrams: &[NGramFrequency],
    bigrams: &[NGramFrequency],
    trigrams: &[NGramFrequency],
    layout: &KeyboardLayout,
) -> ScoreDetails {
    let mut d = ScoreDetails {
        total_occurrences: total_occurrences(unigrams, bigrams, trigrams),
        ..ScoreDetails::default()
    };

    hand_balance(&mut d, unigrams, |c| layout.key_for(c).copied());
    finger_distribution(&mut d, weights, unigrams, layout);

    for f in bigrams {
        let mut chars = f.ngram.chars();
        let (Some(c1), Some(c2), None) = (chars.next(), chars.next(), chars.next()) else {
            continue;
        };
        let (Some(&k1), Some(&k2)) = (layout.key_for(c1), layout.key_for(c2)) else {
            d.stat_skipped += f.frequency;
            continue;
        };
        apply_bigram(&mut d, weights, classify_bigram(&k1, &k2), f.frequency);
    }

    for f in trigrams {
        let mut chars = f.ngram.chars();
        let (Some(c1), Some(c2), Some(c3), None) =
            (chars.next(), chars.next(), chars.next(), chars.next())
        else {
            continue;
        };
        let (Some(&k1), Some(&k2), Some(&k3)) =
            (layout.key_for(c1), layout.key_for(c2), layout.key_for(c3))
        else {
            d.stat_skipped += f.frequency;
            continue;
        };
        apply_trigram(&mut d, weights, classify_trigram(&k1, &k2, &k3), f.frequency);
    }

    finalize(&mut d);
    d
}

pub(super) fn score_extended(
    weights: &WeightConfig,
    unigrams: &[NGramFrequency],
    bigrams: &[NGramFrequency],
    trigrams: &[NGramFrequency],
    layout: &ExtendedKeyboardLayout,
    keymap: &KeymapTable,
) -> ScoreDetails {
    let mut d = ScoreDetails {
        total_occurrences: total_occurrences(unigrams, bigrams, trigrams),
        ..ScoreDetails::default()
    };

    // A unigram contributes to hand balance only when it is typed with a
    // single keystroke; multi-key sequences have no one hand to credit.
    hand_balance(&mut d, unigrams, |c| {
        let seq = resolve_char(c, layout, keymap);
        match seq.as_slice() {
            [key] => Some(*key),
            _ => None,
        }
    });

    for f in bigrams {
        if f.ngram.chars().count() != 2 {
            continue;
        }
        // A two-character n-gram can need three keystrokes (dead key or
        // modifier); it is then judged with the trigram rules.
        let keys = resolve_ngram(&f.ngram, layout, keymap);
        match keys.as_slice() {
            [k1, k2] => apply_bigram(&mut d, weights, classify_bigram(k1, k2), f.frequency),
            [k1, k2, k3] => {
                apply_trigram(&mut d, weights, classify_trigram(k1, k2, k3), f.frequency)
            }
            _ => d.stat_skipped += f.frequency,
        }
    }

    for f in trigrams {
        if f.ngram.chars().count() != 3 {
            continue;
        }
        let keys = resolve_ngram(&f.ngram, layout, keymap);
        match keys.as_slice() {
            [k1, k2, k3] => {
                apply_trigram(&mut d, weights, classify_trigram(k1, k2, k3), f.frequency)
            }
            _ => d.stat_skipped += f.frequency,
        }
    }

    finalize(&mut d);
    d
}

fn total_occurrences(
    unigrams: &[NGramFrequency],
    bigrams: &[NGramFrequency],
    trigrams: &[NGramFrequency],
) -> u64 {
    unigrams
        .iter()
        .chain(bigrams)
        .chain(trigrams)
        .map(|f| f.frequency)
        .sum()
}

fn single_char(ngram: &str) -> Option<char> {
    let mut chars = ngram.chars();
    match (chars.next(), chars.next()) {
        (Some(c), None) => Some(c),
        _ => None,
    }
}

fn hand_balance<F>(d: &mut ScoreDetails, unigrams: &[NGramFrequency], resolve: F)
where
    F: Fn(char) -> Option<Key>,
{
    let mut left: u64 = 0;
    let mut right: u64 = 0;
    for f in unigrams {
        let Some(c) = single_char(&f.ngram) else {
            continue;
        };
        match resolve(c).map(|k| k.hand) {
            Some(Hand::Left) => left += f.frequency,
            Some(Hand::Right) => right += f.frequency,
            None => {}
        }
    }

    let total = left + right;
    if total == 0 {
        return;
    }
    let ratio = left as f64 / total as f64;
    d.left_hand_share = ratio;
    d.hand_balance_penalty = -((ratio - 0.5).abs() * HAND_BALANCE_SCALE);
}

fn finger_distribution(
    d: &mut ScoreDetails,
    weights: &WeightConfig,
    unigrams: &[NGramFrequency],
    layout: &KeyboardLayout,
) {
    let mut by_finger: HashMap<Finger, u64> = HashMap::new();
    let mut total: u64 = 0;
    for f in unigrams {
        let Some(c) = single_char(&f.ngram) else {
            continue;
        };
        if let Some(k) = layout.key_for(c) {
            *by_finger.entry(k.finger).or_insert(0) += f.frequency;
            total += f.frequency;
        }
    }

    if total == 0 {
        return;
    }

    let mut malus = 0.0;
    for finger in Finger::iter() {
        let observed = *by_finger.get(&finger).unwrap_or(&0) as f64 / total as f64;
        malus += -FINGER_DISTRIBUTION_SCALE
            * (observed - ideal_finger_share(finger)).abs()
            * weights.weight_finger_distribution;
    }
    d.finger_distribution_penalty = malus;
}

fn apply_bigram(d: &mut ScoreDetails, w: &WeightConfig, mt: MovementType, freq: u64) {
    let f = freq as f64;
    match mt {
        MovementType::Sfb => {
            d.sfb -= w.weight_sfb * f;
            d.stat_sfb += freq;
        }
        MovementType::Ciseau => {
            d.ciseau -= w.weight_ciseau * f;
            d.stat_ciseau += freq;
        }
        MovementType::Lsb => {
            d.lsb -= w.weight_lsb * f;
            d.stat_lsb += freq;
        }
        MovementType::Roulement => {
            d.roulement += w.weight_roulement * f;
            d.stat_roulement += freq;
        }
        MovementType::Alternance => {
            d.alternance += w.weight_alternance * f;
            d.stat_alternance += freq;
        }
        _ => d.stat_unknown += freq,
    }
}

fn apply_trigram(d: &mut ScoreDetails, w: &WeightConfig, mt: MovementType, freq: u64) {
    let f = freq as f64;
    match mt {
        MovementType::Redirection => {
            d.redirection -= w.weight_redirection * f;
            d.stat_redirection += freq;
        }
        MovementType::MauvaiseRedirection => {
            d.mauvaise_redirection -= w.weight_mauvaise_redirection * f;
            d.stat_mauvaise_redirection += freq;
        }
        MovementType::Skipgram => {
            d.skipgram -= w.weight_skipgram * f;
            d.stat_skipgram += freq;
        }
        _ => d.stat_unknown += freq,
    }
}

fn finalize(d: &mut ScoreDetails) {
    d.raw_total = d.hand_balance_penalty
        + d.finger_distribution_penalty
        + d.sfb
        + d.ciseau
        + d.lsb
        + d.roulement
        + d.alternance
        + d.redirection
        + d.mauvaise_redirection
        + d.skipgram;
    d.score = if d.total_occurrences == 0 {
        d.raw_total
    } else {
        d.raw_total / d.total_occurrences as f64
    };
}
