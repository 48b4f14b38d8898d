//! Pain-point classification.
//!
//! Decides whether a piece of text describes a problem worth turning into an
//! app idea. Three independent signals are checked and ORed:
//! problem vocabulary, question form and negation vocabulary.
//!
//! Matching is plain substring containment on the lowercased text, so short
//! terms also fire inside longer words ("no" in "know", "can" in "cannot").

use serde::{Deserialize, Serialize};

/// Words and phrases that express a problem or a negative emotion
const PROBLEM_INDICATORS: &[&str] = &[
    "struggling",
    "problem",
    "issue",
    "difficulty",
    "challenge",
    "trouble",
    "help",
    "need",
    "want",
    "looking",
    "trying",
    "failing",
    "broken",
    "not working",
    "error",
    "bug",
    "confused",
    "lost",
    "stuck",
    "frustrated",
    "annoying",
    "terrible",
    "awful",
    "worst",
    "hate",
    "dislike",
    "sucks",
    "pain",
    "headache",
    "nightmare",
    "disaster",
];

/// Interrogative and modal words that open a request for help
const QUESTION_WORDS: &[&str] = &[
    "what", "how", "why", "when", "where", "who", "which", "can", "should", "would", "could",
];

/// Negation vocabulary
const NEGATION_WORDS: &[&str] = &[
    "not", "no", "never", "nothing", "nobody", "nowhere", "neither", "nor",
];

/// Which signals fired for a piece of text.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PainPointVerdict {
    /// Problem or negative-emotion vocabulary present
    pub problem_vocabulary: bool,
    /// Text opens with, or contains after a space, a question or modal word
    pub question_form: bool,
    /// Negation vocabulary present
    pub negation: bool,
    /// Terms that matched, in signal order
    pub matched_terms: Vec<String>,
}

impl PainPointVerdict {
    /// True if any signal fired
    pub fn is_pain_point(&self) -> bool {
        self.problem_vocabulary || self.question_form || self.negation
    }
}

/// Heuristic pain-point classifier
#[derive(Debug, Clone, Copy, Default)]
pub struct PainPointClassifier;

impl PainPointClassifier {
    pub fn new() -> Self {
        Self
    }

    /// Classify a piece of text
    pub fn classify(&self, text: &str) -> PainPointVerdict {
        let lower = text.to_lowercase();
        let mut matched_terms = Vec::new();

        let problems: Vec<&str> = PROBLEM_INDICATORS
            .iter()
            .copied()
            .filter(|term| lower.contains(term))
            .collect();

        let questions: Vec<&str> = QUESTION_WORDS
            .iter()
            .copied()
            .filter(|word| lower.starts_with(word) || lower.contains(&format!(" {}", word)))
            .collect();

        let negations: Vec<&str> = NEGATION_WORDS
            .iter()
            .copied()
            .filter(|word| lower.contains(word))
            .collect();

        let problem_vocabulary = !problems.is_empty();
        let question_form = !questions.is_empty();
        let negation = !negations.is_empty();

        matched_terms.extend(problems.into_iter().map(str::to_string));
        matched_terms.extend(questions.into_iter().map(str::to_string));
        matched_terms.extend(negations.into_iter().map(str::to_string));

        PainPointVerdict {
            problem_vocabulary,
            question_form,
            negation,
            matched_terms,
        }
    }

    pub fn is_pain_point(&self, text: &str) -> bool {
        self.classify(text).is_pain_point()
    }
}

/// True if `text` reads like a problem statement.
pub fn is_pain_point(text: &str) -> bool {
    PainPointClassifier.is_pain_point(text)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_problem_vocabulary() {
        let verdict = PainPointClassifier::new().classify("I'm struggling with expense tracking");
        assert!(verdict.problem_vocabulary);
        assert!(verdict.matched_terms.contains(&"struggling".to_string()));
        assert!(verdict.is_pain_point());
    }

    #[test]
    fn test_question_form() {
        let verdict = PainPointClassifier::new().classify("How do I track expenses?");
        assert!(verdict.question_form);
        assert!(!verdict.problem_vocabulary);
        assert!(verdict.is_pain_point());
    }

    #[test]
    fn test_no_signal() {
        assert!(!is_pain_point("This app works great every day"));
    }

    #[test]
    fn test_empty_text() {
        let verdict = PainPointClassifier::new().classify("");
        assert_eq!(verdict, PainPointVerdict::default());
        assert!(!verdict.is_pain_point());
    }

    #[test]
    fn test_substring_over_match_is_preserved() {
        // "know" contains "no"
        let verdict = PainPointClassifier::new().classify("I know this");
        assert!(verdict.negation);
        // " cannot" contains " can"
        let verdict = PainPointClassifier::new().classify("Users cannot export");
        assert!(verdict.question_form);
        assert!(verdict.negation);
    }

    #[test]
    fn test_question_word_mid_sentence_needs_leading_space() {
        let verdict = PainPointClassifier::new().classify("somehow fine");
        assert!(!verdict.question_form);
    }
}
