//! Idea Card - Output structure for an analyzed prompt.
//!
//! Combines keyword ranking, pain-point verdict, generated idea and the
//! sector bundle into the record the CLI prints and the library stores.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::keywords::KeywordResult;
use super::pain_point::PainPointVerdict;
use crate::generation::{Sector, SectorContentBundle};
use crate::resources::MatchedResources;

/// Complete result of analyzing one prompt
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IdeaCard {
    /// Unique identifier, used by the saved idea library
    pub id: Uuid,

    /// Original user prompt
    pub prompt: String,

    /// Resolved sector
    pub sector: Sector,

    /// Ranked keywords
    pub keywords: Vec<KeywordResult>,

    /// Pain-point signals
    pub verdict: PainPointVerdict,

    /// Word-list sentiment score
    pub sentiment: i32,

    /// Generated app-idea sentence
    pub idea: String,

    /// Generated app name
    pub app_name: String,

    /// Resources used to decorate the idea
    #[serde(default)]
    pub resources: MatchedResources,

    /// Sector form bundle
    pub bundle: SectorContentBundle,

    /// Processing time in milliseconds
    pub processing_time_ms: u64,

    /// Timestamp of analysis
    pub created_at: DateTime<Utc>,
}

impl IdeaCard {
    pub fn is_pain_point(&self) -> bool {
        self.verdict.is_pain_point()
    }

    /// Highest-ranked keyword, if any
    pub fn primary_keyword(&self) -> Option<&str> {
        self.keywords.first().map(|k| k.keyword.as_str())
    }

    /// Get a summary for logging
    pub fn summary(&self) -> String {
        format!(
            "Sector: {}, Keywords: {}, Pain point: {}, Sentiment: {}, App: {}",
            self.sector,
            self.keywords.len(),
            if self.is_pain_point() { "yes" } else { "no" },
            self.sentiment,
            self.app_name
        )
    }
}
