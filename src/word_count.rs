//! Word-frequency counting over free-form text, backed by [`ChainTable`].

use crate::chained_table::ChainTable;

/// Characters collapsed to a single space before tokenizing.
const WHITESPACE: [char; 4] = ['\n', ' ', '\t', '\r'];

/// Characters stripped from the text entirely.
const IGNORED: [char; 21] = [
    '"', '\'', ':', ';', ',', '.', '-', '+', '=', '/', '\\', '|', '[', ']', '{', '}', '(', ')',
    '*', '^', '&',
];

/// Counts how often each token occurs in `text`.
///
/// The text is lower-cased, whitespace characters are collapsed to single
/// spaces, a fixed punctuation set is stripped, and the remainder is split on
/// spaces; empty tokens are discarded.
///
/// ```rust
/// let counts = chaintable::word_count("Hello");
/// assert_eq!(counts.get("hello"), Some(&1));
/// assert_eq!(counts.len(), 1);
/// ```
#[must_use]
pub fn word_count(text: &str) -> ChainTable<usize> {
    let mut normalized = String::with_capacity(text.len());
    for ch in text.to_lowercase().chars() {
        if WHITESPACE.contains(&ch) {
            normalized.push(' ');
        } else if !IGNORED.contains(&ch) {
            normalized.push(ch);
        }
    }

    let mut counts: ChainTable<usize> = ChainTable::new();
    for token in normalized.split(' ') {
        if token.is_empty() {
            continue;
        }
        if let Some(count) = counts.get_mut(token) {
            *count = count.saturating_add(1);
        } else {
            counts.insert(token.to_owned(), 1);
        }
    }
    counts
}
