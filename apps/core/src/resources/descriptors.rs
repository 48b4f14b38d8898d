//! Descriptors for external artifacts (code repositories, ML models,
//! datasets) and the community posts that seed app ideas.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::generation::Sector;

/// A code repository matched to a pain point.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RepoDescriptor {
    pub name: String,
    pub description: String,
    pub url: String,
    pub stars: u32,
    /// Primary language, used in the "Built with" suffix
    pub language: String,
    pub full_name: String,
    pub topics: Vec<String>,
    pub updated_at: DateTime<Utc>,
}

impl RepoDescriptor {
    /// Minimal descriptor carrying only a language.
    pub fn with_language(language: impl Into<String>) -> Self {
        Self {
            language: language.into(),
            ..Default::default()
        }
    }
}

/// A machine learning model matched to a pain point.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ModelDescriptor {
    pub model_id: String,
    /// Display name, used in the "Powered by" suffix
    pub name: String,
    pub description: String,
    pub downloads: u64,
    pub tags: Vec<String>,
    pub url: String,
    pub author: String,
    pub likes: u32,
    pub pipeline_tag: String,
}

impl ModelDescriptor {
    /// Minimal descriptor carrying only a name.
    pub fn named(name: impl Into<String>) -> Self {
        let name = name.into();
        Self {
            model_id: name.clone(),
            name,
            ..Default::default()
        }
    }
}

/// A dataset matched to a pain point.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DatasetDescriptor {
    #[serde(rename = "ref")]
    pub reference: String,
    /// Title, used in the "Data from" suffix
    pub title: String,
    pub description: String,
    pub url: String,
    pub download_count: u64,
    /// Size in megabytes
    pub size: u64,
    pub tags: Vec<String>,
    pub owner: String,
}

impl DatasetDescriptor {
    /// Minimal descriptor carrying only a title.
    pub fn titled(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            ..Default::default()
        }
    }
}

/// The optional resources found for one pain point.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct MatchedResources {
    pub repo: Option<RepoDescriptor>,
    pub model: Option<ModelDescriptor>,
    pub dataset: Option<DatasetDescriptor>,
}

impl MatchedResources {
    pub fn none() -> Self {
        Self::default()
    }

    pub fn with_repo(mut self, repo: RepoDescriptor) -> Self {
        self.repo = Some(repo);
        self
    }

    pub fn with_model(mut self, model: ModelDescriptor) -> Self {
        self.model = Some(model);
        self
    }

    pub fn with_dataset(mut self, dataset: DatasetDescriptor) -> Self {
        self.dataset = Some(dataset);
        self
    }

    pub fn is_empty(&self) -> bool {
        self.repo.is_none() && self.model.is_none() && self.dataset.is_none()
    }
}

/// A community post describing a problem.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PainPoint {
    pub id: String,
    pub title: String,
    pub description: String,
    pub community: String,
    pub score: i64,
    pub keywords: Vec<String>,
    pub sector: Sector,
    pub url: String,
    pub author: String,
    pub created: DateTime<Utc>,
}

/// A pain point together with its matched resources and generated idea.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TechNeed {
    pub pain_point: PainPoint,
    pub resources: MatchedResources,
    pub app_idea: String,
    /// In `[0.6, 1.0)`
    pub confidence: f64,
}
