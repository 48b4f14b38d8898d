//! Text normalization shared by the extractors.

use regex::Regex;
use std::sync::LazyLock;

static NON_WORD: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[^\w\s]").expect("Invalid regex: non-word pattern"));

/// Lowercases `text`, replaces punctuation with spaces and splits it into
/// word tokens. Empty tokens are never returned.
pub fn tokenize(text: &str) -> Vec<String> {
    let lower = text.to_lowercase();
    NON_WORD
        .replace_all(&lower, " ")
        .split_whitespace()
        .map(str::to_string)
        .collect()
}

/// Strips punctuation and collapses whitespace, keeping the original case.
pub fn clean_text(text: &str) -> String {
    NON_WORD
        .replace_all(text, " ")
        .split_whitespace()
        .collect::<Vec<_>>()
        .join(" ")
}

/// Number of characters in a token, as opposed to its byte length
pub(crate) fn char_len(word: &str) -> usize {
    word.chars().count()
}
