//! Keyword extraction by term frequency.
//!
//! Tokens are ranked by how often they occur. Ties keep the order in which
//! each token was first seen, so the ranking is fully deterministic.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::sync::LazyLock;

use super::normalizer::{char_len, tokenize};

/// Common English words that never count as keywords
const STOPWORDS_EN: &[&str] = &[
    "the", "a", "an", "and", "or", "but", "in", "on", "at", "to", "for", "of", "with", "by", "is",
    "are", "was", "were", "be", "been", "being", "have", "has", "had", "do", "does", "did", "will",
    "would", "could", "should", "may", "might", "must", "can", "this", "that", "these", "those",
    "i", "you", "he", "she", "it", "we", "they", "me", "him", "her", "us", "them", "my", "your",
    "his", "its", "our", "their", "mine", "yours", "hers", "ours", "theirs",
];

static STOPWORDS: LazyLock<HashSet<&'static str>> =
    LazyLock::new(|| STOPWORDS_EN.iter().copied().collect());

/// Returns true if `word` (already lowercased) is a stop word.
pub fn is_stopword(word: &str) -> bool {
    STOPWORDS.contains(word)
}

/// Default minimum keyword length, in characters
pub const DEFAULT_MIN_WORD_LENGTH: usize = 3;
/// Default number of keywords returned
pub const DEFAULT_MAX_KEYWORDS: usize = 10;

/// One ranked keyword
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct KeywordResult {
    /// The keyword
    pub keyword: String,
    /// Number of occurrences in the text
    pub frequency: usize,
}

/// Keyword extractor using term frequency
#[derive(Debug, Clone)]
pub struct KeywordExtractor {
    min_word_length: usize,
    max_keywords: usize,
}

impl Default for KeywordExtractor {
    fn default() -> Self {
        Self::new()
    }
}

impl KeywordExtractor {
    /// Create a new keyword extractor with default settings
    pub fn new() -> Self {
        Self::with_config(DEFAULT_MIN_WORD_LENGTH, DEFAULT_MAX_KEYWORDS)
    }

    /// Create a keyword extractor with custom configuration
    pub fn with_config(min_word_length: usize, max_keywords: usize) -> Self {
        Self {
            min_word_length,
            max_keywords,
        }
    }

    pub fn max_keywords(&self) -> usize {
        self.max_keywords
    }

    fn keep(&self, word: &str) -> bool {
        char_len(word) >= self.min_word_length && !is_stopword(word)
    }

    /// Counts surviving tokens, preserving first-seen order
    fn count(&self, tokens: &[String]) -> IndexMap<String, usize> {
        let mut freq: IndexMap<String, usize> = IndexMap::new();
        for word in tokens.iter().filter(|w| self.keep(w)) {
            *freq.entry(word.clone()).or_insert(0) += 1;
        }
        freq
    }

    /// Ranks already-normalized tokens.
    pub fn rank_tokens(&self, tokens: &[String]) -> Vec<KeywordResult> {
        let mut ranked: Vec<KeywordResult> = self
            .count(tokens)
            .into_iter()
            .map(|(keyword, frequency)| KeywordResult { keyword, frequency })
            .collect();

        // Stable sort keeps first-seen order among equal counts
        ranked.sort_by(|a, b| b.frequency.cmp(&a.frequency));
        ranked.truncate(self.max_keywords);
        ranked
    }

    /// Extract the top keywords from raw text
    pub fn extract(&self, text: &str) -> Vec<KeywordResult> {
        self.rank_tokens(&tokenize(text))
    }

    /// Extract keywords and return just the strings
    pub fn extract_keywords(&self, text: &str) -> Vec<String> {
        self.extract(text).into_iter().map(|k| k.keyword).collect()
    }
}

/// Top ten keywords of `text` with the default settings.
pub fn extract_keywords(text: &str) -> Vec<String> {
    KeywordExtractor::new().extract_keywords(text)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_frequency_then_first_seen_order() {
        let keywords = extract_keywords("budget budget expense budget tracking");
        assert_eq!(keywords, vec!["budget", "expense", "tracking"]);
    }

    #[test]
    fn test_stopword_filtering() {
        assert!(extract_keywords("the a an of").is_empty());
        assert!(extract_keywords("these those would should theirs").is_empty());
    }

    #[test]
    fn test_empty_text() {
        assert!(extract_keywords("").is_empty());
        assert!(extract_keywords("   ").is_empty());
    }

    #[test]
    fn test_short_words_filtered() {
        assert!(extract_keywords("a b c de fg hi jk").is_empty());
    }

    #[test]
    fn test_truncated_to_ten() {
        let text = "alpha bravo charlie delta echo foxtrot golf hotel india juliet kilo lima";
        let keywords = extract_keywords(text);
        assert_eq!(keywords.len(), 10);
        assert_eq!(keywords[0], "alpha");
        assert_eq!(keywords[9], "juliet");
    }

    #[test]
    fn test_frequencies_reported() {
        let extractor = KeywordExtractor::new();
        let results = extractor.extract("Invoice, invoice; INVOICE and receipts");
        assert_eq!(
            results,
            vec![
                KeywordResult { keyword: "invoice".into(), frequency: 3 },
                KeywordResult { keyword: "receipts".into(), frequency: 1 },
            ]
        );
    }

    #[test]
    fn test_custom_config() {
        let extractor = KeywordExtractor::with_config(5, 2);
        let keywords = extractor.extract_keywords("tiny words matter little sometimes sometimes");
        assert_eq!(keywords, vec!["sometimes", "words"]);
    }
}
