use crate::key::{Finger, Key};
use serde::{Deserialize, Serialize};
use strum_macros::Display;

/// Movement category for a pair or triple of consecutive keystrokes.
///
/// Bigram family: Sfb, Lsb, Ciseau, Roulement, Alternance.
/// Trigram family: Redirection, MauvaiseRedirection, Skipgram.
/// Unknown is the catch-all for both families.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, Serialize, Deserialize)]
pub enum MovementType {
    Sfb,
    Lsb,
    Ciseau,
    Roulement,
    Alternance,
    Redirection,
    MauvaiseRedirection,
    Skipgram,
    Unknown,
}

/// Classifies two keys struck in order. First matching rule wins:
/// same hand and finger -> Sfb; different hands -> Alternance; then on one
/// hand: row gap >= 2 -> Ciseau, adjacent columns with different fingers ->
/// Roulement, column gap >= 2 -> Lsb, otherwise Unknown.
pub fn classify_bigram(k1: &Key, k2: &Key) -> MovementType {
    if k1.hand == k2.hand && k1.finger == k2.finger {
        return MovementType::Sfb;
    }
    if k1.hand != k2.hand {
        return MovementType::Alternance;
    }
    if (k1.row - k2.row).abs() >= 2 {
        return MovementType::Ciseau;
    }
    if (k1.column - k2.column).abs() == 1 && k1.finger != k2.finger {
        return MovementType::Roulement;
    }
    if (k1.column - k2.column).abs() >= 2 {
        return MovementType::Lsb;
    }
    MovementType::Unknown
}

/// Classifies three keys struck in order. Trigrams spanning both hands are
/// Unknown. A column-direction reversal is a Redirection, downgraded to
/// MauvaiseRedirection when no key in the triple is struck by an index
/// finger. Without a reversal, matching first and third fingers make a
/// Skipgram.
pub fn classify_trigram(k1: &Key, k2: &Key, k3: &Key) -> MovementType {
    if k1.hand != k2.hand || k2.hand != k3.hand {
        return MovementType::Unknown;
    }

    let d12 = k2.column - k1.column;
    let d23 = k3.column - k2.column;
    if d12 * d23 < 0 {
        let uses_index =
            [k1, k2, k3].iter().any(|k| k.finger == Finger::Index);
        return if uses_index {
            MovementType::Redirection
        } else {
            MovementType::MauvaiseRedirection
        };
    }

    if k1.finger == k3.finger {
        return MovementType::Skipgram;
    }
    MovementType::Unknown
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::key::Hand;

    fn make_key(row: i32, column: i32, finger: Finger, hand: Hand) -> Key {
        Key::new(row, column, finger, hand, '\0')
    }

    #[test]
    fn same_finger_wins_over_everything() {
        // Same hand, same finger: SFB even with a huge row gap.
        let k1 = make_key(0, 3, Finger::Index, Hand::Left);
        let k2 = make_key(4, 3, Finger::Index, Hand::Left);
        assert_eq!(classify_bigram(&k1, &k2), MovementType::Sfb);
    }

    #[test]
    fn identical_key_is_sfb() {
        let k = make_key(1, 1, Finger::Middle, Hand::Right);
        assert_eq!(classify_bigram(&k, &k), MovementType::Sfb);
    }

    #[test]
    fn different_hands_alternate() {
        let k1 = make_key(1, 1, Finger::Middle, Hand::Left);
        let k2 = make_key(1, 8, Finger::Middle, Hand::Right);
        assert_eq!(classify_bigram(&k1, &k2), MovementType::Alternance);
    }

    #[test]
    fn row_gap_is_ciseau() {
        let k1 = make_key(0, 1, Finger::Ring, Hand::Left);
        let k2 = make_key(2, 2, Finger::Middle, Hand::Left);
        assert_eq!(classify_bigram(&k1, &k2), MovementType::Ciseau);
    }

    #[test]
    fn adjacent_columns_roll() {
        let k1 = make_key(1, 2, Finger::Middle, Hand::Left);
        let k2 = make_key(1, 3, Finger::Index, Hand::Left);
        assert_eq!(classify_bigram(&k1, &k2), MovementType::Roulement);
    }

    #[test]
    fn wide_column_gap_is_lateral_stretch() {
        let k1 = make_key(1, 1, Finger::Ring, Hand::Left);
        let k2 = make_key(1, 4, Finger::Index, Hand::Left);
        assert_eq!(classify_bigram(&k1, &k2), MovementType::Lsb);
    }

    #[test]
    fn same_column_different_finger_is_unknown() {
        // No row gap, no column gap, fingers differ: nothing matches.
        let k1 = make_key(1, 2, Finger::Middle, Hand::Left);
        let k2 = make_key(2, 2, Finger::Ring, Hand::Left);
        assert_eq!(classify_bigram(&k1, &k2), MovementType::Unknown);
    }

    #[test]
    fn cross_hand_trigram_is_unknown() {
        let k1 = make_key(1, 1, Finger::Ring, Hand::Left);
        let k2 = make_key(1, 8, Finger::Middle, Hand::Right);
        let k3 = make_key(1, 2, Finger::Middle, Hand::Left);
        assert_eq!(classify_trigram(&k1, &k2, &k3), MovementType::Unknown);
    }

    #[test]
    fn direction_reversal_with_index_is_redirection() {
        // Columns 1 -> 3 -> 2: direction flips, index finger involved.
        let k1 = make_key(1, 1, Finger::Ring, Hand::Left);
        let k2 = make_key(1, 3, Finger::Index, Hand::Left);
        let k3 = make_key(1, 2, Finger::Middle, Hand::Left);
        assert_eq!(classify_trigram(&k1, &k2, &k3), MovementType::Redirection);
    }

    #[test]
    fn direction_reversal_without_index_is_mauvaise() {
        let k1 = make_key(1, 0, Finger::Pinky, Hand::Left);
        let k2 = make_key(1, 2, Finger::Middle, Hand::Left);
        let k3 = make_key(1, 1, Finger::Ring, Hand::Left);
        assert_eq!(
            classify_trigram(&k1, &k2, &k3),
            MovementType::MauvaiseRedirection
        );
    }

    #[test]
    fn outer_fingers_matching_is_skipgram() {
        // Columns monotonically increasing, first and third finger equal.
        let k1 = make_key(1, 1, Finger::Ring, Hand::Left);
        let k2 = make_key(0, 2, Finger::Middle, Hand::Left);
        let k3 = make_key(2, 3, Finger::Ring, Hand::Left);
        assert_eq!(classify_trigram(&k1, &k2, &k3), MovementType::Skipgram);
    }

    #[test]
    fn monotone_run_with_distinct_fingers_is_unknown() {
        let k1 = make_key(1, 1, Finger::Ring, Hand::Left);
        let k2 = make_key(1, 2, Finger::Middle, Hand::Left);
        let k3 = make_key(1, 3, Finger::Index, Hand::Left);
        assert_eq!(classify_trigram(&k1, &k2, &k3), MovementType::Unknown);
    }
}
