//! # Analysis Module
//!
//! Fast, rule-based analysis of free-form prompts. Nothing here blocks or
//! keeps mutable state; the only shared data are read-only word lists.
//!
//! ## Components
//! - `normalizer`: Punctuation stripping and tokenization
//! - `keywords`: Term-frequency keyword extraction
//! - `pain_point`: Three-signal pain-point classifier
//! - `sentiment`: Word-list sentiment score
//! - `idea_card`: Output data structure
//! - `analyzer`: Main orchestrator

pub mod analyzer;
pub mod idea_card;
pub mod keywords;
pub mod normalizer;
pub mod pain_point;
pub mod sentiment;

pub use analyzer::IdeaAnalyzer;
pub use idea_card::IdeaCard;
pub use keywords::{extract_keywords, is_stopword, KeywordExtractor, KeywordResult};
pub use normalizer::{clean_text, tokenize};
pub use pain_point::{is_pain_point, PainPointClassifier, PainPointVerdict};
pub use sentiment::sentiment_score;
