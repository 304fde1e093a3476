use crate::key::Key;
use crate::layout::{ExtendedKeyboardLayout, KeymapTable};

/// Resolves one character to the ordered physical keystrokes that type it.
///
/// With a keymap entry, every label is looked up in the layout and labels
/// with no key are silently dropped, so the result can be shorter than the
/// label sequence. Without an entry the character itself is tried as a
/// label. An unresolvable character yields an empty sequence.
pub fn resolve_char(c: char, layout: &ExtendedKeyboardLayout, keymap: &KeymapTable) -> Vec<Key> {
    if let Some(labels) = keymap.sequence_for(c) {
        return labels
            .iter()
            .filter_map(|label| layout.key(label).copied())
            .collect();
    }

    let mut buf = [0u8; 4];
    match layout.key(c.encode_utf8(&mut buf)) {
        Some(key) => vec![*key],
        None => Vec::new(),
    }
}

/// Concatenation of [`resolve_char`] over every character of `text`, in
/// order. The caller decides what a given total length means (2 keys score
/// as a bigram, 3 as a trigram, anything else is skipped).
pub fn resolve_ngram(text: &str, layout: &ExtendedKeyboardLayout, keymap: &KeymapTable) -> Vec<Key> {
    text.chars()
        .flat_map(|c| resolve_char(c, layout, keymap))
        .collect()
}
