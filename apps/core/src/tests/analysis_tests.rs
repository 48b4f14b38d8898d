//! Analysis Module Tests
//!
//! Keyword extraction, pain-point classification and the analyzer
//! orchestrator working together.

use crate::analysis::{
    extract_keywords, is_pain_point, is_stopword, tokenize, IdeaAnalyzer, KeywordExtractor,
    PainPointClassifier,
};
use crate::generation::Sector;
use crate::resources::MatchedResources;

#[cfg(test)]
mod keyword_tests {
    use super::*;

    #[test]
    fn test_empty_and_stopword_only_input() {
        assert!(extract_keywords("").is_empty());
        assert!(extract_keywords("the a an of").is_empty());
        assert!(extract_keywords("   ...   !!!").is_empty());
    }

    #[test]
    fn test_frequency_ranking() {
        assert_eq!(
            extract_keywords("budget budget expense budget tracking"),
            vec!["budget", "expense", "tracking"]
        );
    }

    #[test]
    fn test_ties_keep_first_seen_order() {
        assert_eq!(
            extract_keywords("zebra apple mango apple zebra mango"),
            vec!["zebra", "apple", "mango"]
        );
    }

    #[test]
    fn test_output_invariants() {
        let text = "Our inventory system keeps losing stock counts, the supplier portal \
                    is slow, shipments arrive late, warehouse staff re-enter orders by hand, \
                    forecasting spreadsheets break, invoices mismatch, returns pile up, \
                    barcode scanners fail and dashboards lag behind reality";
        let keywords = extract_keywords(text);

        assert!(keywords.len() <= 10);
        for keyword in &keywords {
            assert!(keyword.chars().count() > 2, "too short: {}", keyword);
            assert!(!is_stopword(keyword), "stop word leaked: {}", keyword);
            assert_eq!(keyword, &keyword.to_lowercase());
        }
    }

    #[test]
    fn test_punctuation_splits_tokens() {
        assert_eq!(tokenize("real-time, e-mail!"), vec!["real", "time", "e", "mail"]);
        assert_eq!(extract_keywords("real-time updates"), vec!["real", "time", "updates"]);
    }

    #[test]
    fn test_configured_limits() {
        let extractor = KeywordExtractor::with_config(5, 2);
        let ranked = extractor.extract("alpha beta gamma alpha delta gamma alpha");
        assert_eq!(ranked.len(), 2);
        assert_eq!(ranked[0].keyword, "alpha");
        assert_eq!(ranked[0].frequency, 3);
        assert_eq!(ranked[1].keyword, "gamma");
    }
}

#[cfg(test)]
mod pain_point_tests {
    use super::*;

    #[test]
    fn test_problem_vocabulary() {
        assert!(is_pain_point("Struggling with expense tracking"));
        assert!(is_pain_point("The export is BROKEN again"));
    }

    #[test]
    fn test_question_form() {
        assert!(is_pain_point("How do I reconcile two ledgers?"));
        assert!(is_pain_point("tell me which one is faster"));
    }

    #[test]
    fn test_non_pain_points() {
        assert!(!is_pain_point("This app works great every day"));
        assert!(!is_pain_point(""));
    }

    #[test]
    fn test_substring_overmatching_is_kept() {
        // "know" contains "no"; " cannot" starts with " can"
        let verdict = PainPointClassifier.classify("I know everything");
        assert!(verdict.negation);
        assert!(PainPointClassifier.classify("we cannot ship").question_form);
    }
}

#[cfg(test)]
mod analyzer_tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_card_matches_individual_components() {
        let prompt = "Inventory counts are always wrong and reorders are a nightmare";
        let card = IdeaAnalyzer::new().analyze_with_rng(
            prompt,
            "Supply Chain",
            MatchedResources::none(),
            &mut StdRng::seed_from_u64(9),
        );

        assert_eq!(card.sector, Sector::SupplyChain);
        let ranked: Vec<String> = card.keywords.iter().map(|k| k.keyword.clone()).collect();
        assert_eq!(ranked, extract_keywords(prompt));
        assert_eq!(card.is_pain_point(), is_pain_point(prompt));
        assert_eq!(card.app_name, "Supply inventory App");
        assert_eq!(card.bundle.sector, Sector::SupplyChain);
    }

    #[test]
    fn test_cards_get_distinct_ids() {
        let analyzer = IdeaAnalyzer::new();
        let a = analyzer.analyze("same text", "finance", MatchedResources::none());
        let b = analyzer.analyze("same text", "finance", MatchedResources::none());
        assert_ne!(a.id, b.id);
    }
}
