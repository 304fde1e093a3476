use crate::key::Key;
use std::collections::HashMap;

/// Simple layout: one key per character. Lookup of an unmapped character
/// yields `None`; that is a modeling choice, not a failure.
#[derive(Debug, Default, Clone)]
pub struct KeyboardLayout {
    keys_by_char: HashMap<char, Key>,
}

impl KeyboardLayout {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers a key under the character it types. A later key for the
    /// same character replaces the earlier one.
    pub fn add_key(&mut self, key: Key) {
        self.keys_by_char.insert(key.character, key);
    }

    pub fn key_for(&self, c: char) -> Option<&Key> {
        self.keys_by_char.get(&c)
    }

    pub fn len(&self) -> usize {
        self.keys_by_char.len()
    }

    pub fn is_empty(&self) -> bool {
        self.keys_by_char.is_empty()
    }
}

/// Extended layout: keys are addressed by a logical label ("a", "Shift",
/// "AltGr") so keys without a printable character can exist.
#[derive(Debug, Default, Clone)]
pub struct ExtendedKeyboardLayout {
    keys_by_label: HashMap<String, Key>,
}

impl ExtendedKeyboardLayout {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_key(&mut self, label: impl Into<String>, key: Key) {
        self.keys_by_label.insert(label.into(), key);
    }

    pub fn key(&self, label: &str) -> Option<&Key> {
        self.keys_by_label.get(label)
    }

    pub fn len(&self) -> usize {
        self.keys_by_label.len()
    }

    pub fn is_empty(&self) -> bool {
        self.keys_by_label.is_empty()
    }
}

/// Character -> ordered label sequence, for characters that need more than
/// one keystroke (e.g. 'Â' -> ["AltGr", "a"]). A character with no entry is
/// typed with a single key whose label is the character itself.
#[derive(Debug, Default, Clone)]
pub struct KeymapTable {
    sequences: HashMap<char, Vec<String>>,
}

impl KeymapTable {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, c: char, labels: Vec<String>) {
        self.sequences.insert(c, labels);
    }

    pub fn sequence_for(&self, c: char) -> Option<&[String]> {
        self.sequences.get(&c).map(Vec::as_slice)
    }

    pub fn len(&self) -> usize {
        self.sequences.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sequences.is_empty()
    }
}
