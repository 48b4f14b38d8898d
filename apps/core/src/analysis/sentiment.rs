//! Word-list sentiment score.

const POSITIVE_WORDS: &[&str] = &[
    "good", "great", "excellent", "amazing", "wonderful", "fantastic", "love", "like", "enjoy",
    "happy", "satisfied",
];

const NEGATIVE_WORDS: &[&str] = &[
    "bad", "terrible", "awful", "hate", "dislike", "angry", "frustrated", "sad", "disappointed",
    "upset",
];

/// +1 for every positive word, -1 for every negative word.
///
/// Words are whitespace-separated and compared whole, punctuation included,
/// so "great!" does not count.
pub fn sentiment_score(text: &str) -> i32 {
    text.to_lowercase()
        .split_whitespace()
        .map(|word| {
            let mut score = 0;
            if POSITIVE_WORDS.contains(&word) {
                score += 1;
            }
            if NEGATIVE_WORDS.contains(&word) {
                score -= 1;
            }
            score
        })
        .sum()
}
