use frappe_core::config::WeightConfig;
use frappe_core::corpus::ngram_list;
use frappe_core::key::{Finger, Hand, Key};
use frappe_core::layout::{ExtendedKeyboardLayout, KeymapTable};
use frappe_core::scorer::Scorer;

mod common;
use common::{freqs, key, layout_of};

fn sfb_only_weights() -> WeightConfig {
    WeightConfig {
        weight_sfb: 1.0,
        weight_ciseau: 0.0,
        weight_lsb: 0.0,
        weight_roulement: 0.0,
        weight_alternance: 0.0,
        weight_redirection: 0.0,
        weight_mauvaise_redirection: 0.0,
        weight_skipgram: 0.0,
        weight_finger_distribution: 0.0,
    }
}

#[test]
fn aabb_scenario_scores_minus_one() {
    // "aabb" with n=2 gives {"aa":1, "ab":1, "bb":1}; with 'a' and 'b' on
    // one finger every bigram is an SFB, so at weight 1.0 the normalized
    // score is (-1 -1 -1) / 3.
    let layout = layout_of(&[
        key(1, 3, Finger::Index, Hand::Left, 'a'),
        key(2, 3, Finger::Index, Hand::Left, 'b'),
    ]);
    let bigrams = ngram_list("aabb", 2);
    assert_eq!(bigrams.len(), 3);

    let scorer = Scorer::new(sfb_only_weights());
    let details = scorer.score_layout(&[], &bigrams, &[], &layout);

    assert_eq!(details.total_occurrences, 3);
    assert_eq!(details.stat_sfb, 3);
    assert!((details.score - (-1.0)).abs() < 1e-9);
}

#[test]
fn score_is_order_independent() {
    let layout = layout_of(&[
        key(1, 0, Finger::Pinky, Hand::Left, 'a'),
        key(1, 1, Finger::Ring, Hand::Left, 'b'),
        key(1, 8, Finger::Ring, Hand::Right, 'o'),
    ]);
    let unigrams = freqs(&[("a", 10), ("b", 4), ("o", 6)]);
    let bigrams = freqs(&[("ab", 3), ("ao", 5), ("bo", 2)]);
    let trigrams = freqs(&[("aba", 2), ("abo", 1)]);

    let scorer = Scorer::new(WeightConfig::default());
    let forward = scorer.score_layout(&unigrams, &bigrams, &trigrams, &layout);

    let mut ru = unigrams.clone();
    let mut rb = bigrams.clone();
    let mut rt = trigrams.clone();
    ru.reverse();
    rb.reverse();
    rt.reverse();
    let backward = scorer.score_layout(&ru, &rb, &rt, &layout);

    assert!((forward.score - backward.score).abs() < 1e-9);
    assert!((forward.raw_total - backward.raw_total).abs() < 1e-9);
}

#[test]
fn doubling_frequencies_keeps_normalized_score() {
    // Holds for the movement terms; unigram balance terms are ratio-based,
    // so this scenario feeds bigrams and trigrams only.
    let layout = layout_of(&[
        key(1, 0, Finger::Pinky, Hand::Left, 'a'),
        key(1, 1, Finger::Ring, Hand::Left, 'b'),
        key(1, 2, Finger::Middle, Hand::Left, 'c'),
    ]);
    let bigrams = freqs(&[("ab", 3), ("bc", 7), ("aa", 2)]);
    let trigrams = freqs(&[("abc", 4), ("aba", 1)]);

    let scorer = Scorer::new(WeightConfig::default());
    let base = scorer.score_layout(&[], &bigrams, &trigrams, &layout);

    let doubled_b = freqs(&[("ab", 6), ("bc", 14), ("aa", 4)]);
    let doubled_t = freqs(&[("abc", 8), ("aba", 2)]);
    let doubled = scorer.score_layout(&[], &doubled_b, &doubled_t, &layout);

    assert!((base.score - doubled.score).abs() < 1e-9);
    assert!((doubled.raw_total - 2.0 * base.raw_total).abs() < 1e-9);
}

#[test]
fn unmapped_bigram_still_inflates_the_denominator() {
    let layout = layout_of(&[
        key(1, 3, Finger::Index, Hand::Left, 'a'),
        key(2, 3, Finger::Index, Hand::Left, 'b'),
    ]);
    let bigrams = freqs(&[("ab", 1), ("xy", 1)]);

    let scorer = Scorer::new(sfb_only_weights());
    let details = scorer.score_layout(&[], &bigrams, &[], &layout);

    assert_eq!(details.total_occurrences, 2);
    assert_eq!(details.stat_skipped, 1);
    assert!((details.score - (-0.5)).abs() < 1e-9);
}

#[test]
fn empty_inputs_give_neutral_score() {
    let layout = layout_of(&[]);
    let scorer = Scorer::new(WeightConfig::default());
    let details = scorer.score_layout(&[], &[], &[], &layout);

    assert_eq!(details.total_occurrences, 0);
    assert_eq!(details.score, 0.0);
    assert_eq!(details.raw_total, 0.0);
}

#[test]
fn hand_imbalance_is_penalized() {
    let layout = layout_of(&[
        key(1, 0, Finger::Pinky, Hand::Left, 'a'),
        key(1, 9, Finger::Pinky, Hand::Right, 'o'),
    ]);
    // 75% of strokes on the left: |0.75 - 0.5| * 1000 = 250.
    let unigrams = freqs(&[("a", 3), ("o", 1)]);

    let mut weights = sfb_only_weights();
    weights.weight_finger_distribution = 0.0;
    let details = Scorer::new(weights).score_layout(&unigrams, &[], &[], &layout);

    assert!((details.hand_balance_penalty - (-250.0)).abs() < 1e-9);
    assert!((details.left_hand_share - 0.75).abs() < 1e-9);
}

fn extended_fixture() -> (ExtendedKeyboardLayout, KeymapTable) {
    let mut layout = ExtendedKeyboardLayout::new();
    layout.add_key("^", key(0, 1, Finger::Ring, Hand::Left, '\0'));
    layout.add_key("i", key(0, 3, Finger::Index, Hand::Left, 'i'));
    layout.add_key("l", key(0, 2, Finger::Middle, Hand::Left, 'l'));
    layout.add_key("a", key(1, 0, Finger::Pinky, Hand::Left, 'a'));
    layout.add_key("Shift", key(3, 0, Finger::Pinky, Hand::Left, '\0'));

    let mut keymap = KeymapTable::new();
    keymap.insert('î', vec!["^".into(), "i".into()]);
    keymap.insert('A', vec!["Shift".into(), "a".into()]);
    (layout, keymap)
}

#[test]
fn bigram_needing_three_keys_uses_trigram_rules() {
    // "îl" resolves to ^ i l (columns 1 -> 3 -> 2): a direction reversal
    // with the index finger involved, i.e. a redirection.
    let (layout, keymap) = extended_fixture();
    let mut weights = sfb_only_weights();
    weights.weight_sfb = 0.0;
    weights.weight_redirection = 1.0;

    let bigrams = freqs(&[("îl", 1)]);
    let details = Scorer::new(weights).score_extended(&[], &bigrams, &[], &layout, &keymap);

    assert_eq!(details.stat_redirection, 1);
    assert!((details.score - (-1.0)).abs() < 1e-9);
}

#[test]
fn trigram_resolving_to_four_keys_is_skipped() {
    // "îla" needs four keystrokes, so it is excluded from the weighted
    // terms while its frequency still counts in the denominator.
    let (layout, keymap) = extended_fixture();
    let trigrams = freqs(&[("îla", 5)]);

    let details =
        Scorer::new(WeightConfig::default()).score_extended(&[], &[], &trigrams, &layout, &keymap);

    assert_eq!(details.total_occurrences, 5);
    assert_eq!(details.stat_skipped, 5);
    assert_eq!(details.raw_total, 0.0);
    assert_eq!(details.score, 0.0);
}

#[test]
fn multi_key_unigrams_are_ignored_by_hand_balance() {
    // 'A' needs Shift+a, so only 'i' and 'a' feed the balance term:
    // both left-handed, giving the full 500 penalty.
    let (layout, keymap) = extended_fixture();
    let unigrams = freqs(&[("A", 100), ("i", 3), ("a", 1)]);

    let details =
        Scorer::new(sfb_only_weights()).score_extended(&unigrams, &[], &[], &layout, &keymap);

    assert!((details.left_hand_share - 1.0).abs() < 1e-9);
    assert!((details.hand_balance_penalty - (-500.0)).abs() < 1e-9);
}
