use serde::{Deserialize, Serialize};
use strum_macros::{Display, EnumIter, EnumString};

/// Finger assigned to a physical key. String forms ("PINKY", "INDEX", ...)
/// match the layout definition files.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumString, EnumIter, Serialize, Deserialize,
)]
#[strum(serialize_all = "UPPERCASE")]
#[serde(rename_all = "UPPERCASE")]
pub enum Finger {
    Thumb,
    Index,
    Middle,
    Ring,
    Pinky,
}

#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumString, Serialize, Deserialize,
)]
#[strum(serialize_all = "UPPERCASE")]
#[serde(rename_all = "UPPERCASE")]
pub enum Hand {
    Left,
    Right,
}

/// A physical key: position on the board, the finger and hand that strike it,
/// and the character it produces. `character` is only meaningful on simple
/// (non-extended) layouts; label-only keys such as modifiers carry `'\0'`.
///
/// Keys are plain values. They are built once from a layout definition and
/// never mutated afterwards.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Key {
    pub row: i32,
    pub column: i32,
    pub finger: Finger,
    pub hand: Hand,
    pub character: char,
}

impl Key {
    pub fn new(row: i32, column: i32, finger: Finger, hand: Hand, character: char) -> Self {
        Self {
            row,
            column,
            finger,
            hand,
            character,
        }
    }
}
