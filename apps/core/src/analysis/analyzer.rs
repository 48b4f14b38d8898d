//! Idea Analyzer - Main orchestrator for the analysis module.
//!
//! Runs keyword extraction, pain-point classification and sentiment scoring
//! on a prompt, then asks the generation module for an idea sentence, an app
//! name and the sector bundle.

use chrono::Utc;
use rand::Rng;
use std::time::Instant;
use tracing::{debug, info, instrument};
use uuid::Uuid;

use super::idea_card::IdeaCard;
use super::keywords::KeywordExtractor;
use super::pain_point::PainPointClassifier;
use super::sentiment::sentiment_score;
use crate::config::AppConfig;
use crate::generation::{app_name, bundle_for, IdeaSynthesizer, Sector};
use crate::resources::MatchedResources;

/// Main analyzer that orchestrates all analysis components
#[derive(Debug, Clone, Default)]
pub struct IdeaAnalyzer {
    keyword_extractor: KeywordExtractor,
    classifier: PainPointClassifier,
    synthesizer: IdeaSynthesizer,
}

impl IdeaAnalyzer {
    /// Create a new analyzer with default settings
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an analyzer honoring the configured keyword limits
    pub fn from_config(config: &AppConfig) -> Self {
        Self {
            keyword_extractor: KeywordExtractor::with_config(
                config.min_word_length,
                config.max_keywords,
            ),
            ..Self::default()
        }
    }

    pub fn keyword_extractor(&self) -> &KeywordExtractor {
        &self.keyword_extractor
    }

    /// Analyze a prompt, drawing the template pick from `rng`
    #[instrument(skip(self, resources, rng), fields(prompt_len = prompt.len()))]
    pub fn analyze_with_rng<R: Rng + ?Sized>(
        &self,
        prompt: &str,
        sector_tag: &str,
        resources: MatchedResources,
        rng: &mut R,
    ) -> IdeaCard {
        let start = Instant::now();
        let sector = Sector::resolve(sector_tag);
        if Sector::from_tag(sector_tag).is_none() {
            debug!(sector_tag, "Unknown sector tag, using technology");
        }

        // 1. Extract keywords
        let keywords = self.keyword_extractor.extract(prompt);

        // 2. Classify
        let verdict = self.classifier.classify(prompt);

        // 3. Sentiment
        let sentiment = sentiment_score(prompt);

        // 4. Generate idea and name
        let idea = self
            .synthesizer
            .generate_with_rng(sector_tag, prompt, &resources, rng);
        let name = app_name(prompt, sector);

        let card = IdeaCard {
            id: Uuid::new_v4(),
            prompt: prompt.to_string(),
            sector,
            keywords,
            verdict,
            sentiment,
            idea,
            app_name: name,
            resources,
            bundle: bundle_for(sector),
            processing_time_ms: start.elapsed().as_millis() as u64,
            created_at: Utc::now(),
        };

        info!("Analyzed prompt: {}", card.summary());
        card
    }

    /// Analyze a prompt with the thread-local random generator
    pub fn analyze(&self, prompt: &str, sector_tag: &str, resources: MatchedResources) -> IdeaCard {
        self.analyze_with_rng(prompt, sector_tag, resources, &mut rand::thread_rng())
    }
}
