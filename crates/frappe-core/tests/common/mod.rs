use frappe_core::corpus::NGramFrequency;
use frappe_core::key::{Finger, Hand, Key};
use frappe_core::layout::KeyboardLayout;

pub fn key(row: i32, column: i32, finger: Finger, hand: Hand, character: char) -> Key {
    Key::new(row, column, finger, hand, character)
}

pub fn layout_of(keys: &[Key]) -> KeyboardLayout {
    let mut layout = KeyboardLayout::new();
    for k in keys {
        layout.add_key(*k);
    }
    layout
}

pub fn freqs(entries: &[(&str, u64)]) -> Vec<NGramFrequency> {
    entries
        .iter()
        .map(|(ngram, frequency)| NGramFrequency {
            ngram: (*ngram).to_string(),
            frequency: *frequency,
        })
        .collect()
}
