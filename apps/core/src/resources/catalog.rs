//! Static resource catalog and sample community posts.
//!
//! Stands in for the repository, model and dataset search services. Repos
//! and models come from fixed per-sector tables; datasets are synthesized
//! from the sector's dataset tags and the first keyword.

use async_trait::async_trait;
use chrono::{Duration, Utc};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::sync::Mutex;
use tracing::debug;

use super::descriptors::{DatasetDescriptor, ModelDescriptor, PainPoint, RepoDescriptor};
use super::traits::ResourceMatcher;
use crate::error::AppError;
use crate::generation::Sector;

const DAY_SECS: i64 = 86_400;

fn strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

/// Canned community posts describing problems in a sector.
pub fn sample_pain_points(sector: Sector, limit: usize) -> Vec<PainPoint> {
    let now = Utc::now();
    let post = |id: &str,
                title: &str,
                description: &str,
                community: &str,
                score: i64,
                keywords: &[&str],
                author: &str,
                age_days: i64| PainPoint {
        id: id.to_string(),
        title: title.to_string(),
        description: description.to_string(),
        community: community.to_string(),
        score,
        keywords: strings(keywords),
        sector,
        url: format!("https://reddit.com/r/{}/{}", community, id),
        author: author.to_string(),
        created: now - Duration::seconds(age_days * DAY_SECS),
    };

    let posts = match sector {
        Sector::Finance => vec![
            post(
                "mock1",
                "Struggling with expense tracking - need a better solution",
                "I'm having trouble keeping track of my daily expenses. Looking for an app that can categorize automatically.",
                "personalfinance",
                45,
                &["expense", "tracking", "categorize", "budget"],
                "user123",
                1,
            ),
            post(
                "mock2",
                "Investment portfolio management is overwhelming",
                "I have multiple investment accounts and it's hard to track performance across all of them.",
                "investing",
                32,
                &["investment", "portfolio", "tracking", "performance"],
                "investor456",
                2,
            ),
        ],
        Sector::SupplyChain => vec![post(
            "mock3",
            "Inventory management system is outdated",
            "Our current system doesn't provide real-time updates and we're losing track of stock levels.",
            "supplychain",
            28,
            &["inventory", "management", "real-time", "tracking"],
            "logistics_pro",
            3,
        )],
        Sector::Healthcare => vec![post(
            "mock4",
            "Patient scheduling system needs improvement",
            "Our clinic is struggling with appointment scheduling and patient communication.",
            "healthcare",
            41,
            &["patient", "scheduling", "communication", "appointment"],
            "healthcare_worker",
            4,
        )],
        Sector::Technology => vec![post(
            "mock5",
            "Need better project management for development teams",
            "Our current tools don't integrate well with our development workflow.",
            "programming",
            67,
            &["project", "management", "development", "workflow"],
            "dev_lead",
            5,
        )],
    };

    posts.into_iter().take(limit).collect()
}

struct RepoRow {
    name: &'static str,
    description: &'static str,
    stars: u32,
    language: &'static str,
    topics: &'static [&'static str],
}

struct ModelRow {
    name: &'static str,
    description: &'static str,
    downloads: u64,
    tags: &'static [&'static str],
    author: &'static str,
    likes: u32,
    pipeline_tag: &'static str,
}

fn repo_row(sector: Sector) -> RepoRow {
    match sector {
        Sector::Finance => RepoRow {
            name: "expense-tracker",
            description: "A modern expense tracking application with AI-powered categorization",
            stars: 1234,
            language: "TypeScript",
            topics: &["finance", "expense", "tracking", "ai"],
        },
        Sector::SupplyChain => RepoRow {
            name: "inventory-manager",
            description: "Real-time inventory management system with supply chain optimization",
            stars: 856,
            language: "Python",
            topics: &["supply-chain", "inventory", "logistics"],
        },
        Sector::Healthcare => RepoRow {
            name: "patient-scheduler",
            description: "Healthcare appointment scheduling system with patient communication",
            stars: 2341,
            language: "React",
            topics: &["healthcare", "scheduling", "patient"],
        },
        Sector::Technology => RepoRow {
            name: "project-manager",
            description: "Advanced project management tool for development teams",
            stars: 3456,
            language: "JavaScript",
            topics: &["project-management", "development", "team"],
        },
    }
}

fn model_row(sector: Sector) -> ModelRow {
    match sector {
        Sector::Finance => ModelRow {
            name: "finance-analyzer",
            description: "Financial data analysis and prediction model",
            downloads: 15_420,
            tags: &["finance", "analysis", "prediction"],
            author: "finance-ai",
            likes: 234,
            pipeline_tag: "text-classification",
        },
        Sector::SupplyChain => ModelRow {
            name: "supply-chain-optimizer",
            description: "Supply chain optimization and demand forecasting model",
            downloads: 8_932,
            tags: &["supply-chain", "optimization", "forecasting"],
            author: "logistics-ai",
            likes: 156,
            pipeline_tag: "text-generation",
        },
        Sector::Healthcare => ModelRow {
            name: "healthcare-assistant",
            description: "Medical text analysis and patient care assistance model",
            downloads: 23_456,
            tags: &["healthcare", "medical", "nlp"],
            author: "medical-ai",
            likes: 445,
            pipeline_tag: "question-answering",
        },
        Sector::Technology => ModelRow {
            name: "code-assistant",
            description: "AI-powered code generation and analysis model",
            downloads: 45_678,
            tags: &["code", "generation", "programming"],
            author: "tech-ai",
            likes: 789,
            pipeline_tag: "text-generation",
        },
    }
}

fn catalog_repo(sector: Sector) -> RepoDescriptor {
    let row = repo_row(sector);
    RepoDescriptor {
        name: row.name.to_string(),
        description: row.description.to_string(),
        url: format!("https://github.com/mock/{}", row.name),
        stars: row.stars,
        language: row.language.to_string(),
        full_name: format!("mock/{}", row.name),
        topics: strings(row.topics),
        updated_at: Utc::now(),
    }
}

fn catalog_model(sector: Sector) -> ModelDescriptor {
    let row = model_row(sector);
    ModelDescriptor {
        model_id: row.name.to_string(),
        name: row.name.to_string(),
        description: row.description.to_string(),
        downloads: row.downloads,
        tags: strings(row.tags),
        url: format!("https://huggingface.co/{}", row.name),
        author: row.author.to_string(),
        likes: row.likes,
        pipeline_tag: row.pipeline_tag.to_string(),
    }
}

/// In-memory [`ResourceMatcher`] backed by fixed per-sector tables.
///
/// Dataset download counts and sizes are random; seed the catalog to make
/// them reproducible.
pub struct MockCatalog {
    rng: Mutex<StdRng>,
}

impl Default for MockCatalog {
    fn default() -> Self {
        Self::new()
    }
}

impl MockCatalog {
    pub fn new() -> Self {
        Self {
            rng: Mutex::new(StdRng::from_entropy()),
        }
    }

    pub fn seeded(seed: u64) -> Self {
        Self {
            rng: Mutex::new(StdRng::seed_from_u64(seed)),
        }
    }

    fn datasets(&self, keywords: &[String], sector: Sector) -> Vec<DatasetDescriptor> {
        let profile = sector.profile();
        let tag = profile.dataset_tags.first().copied().unwrap_or("general");
        let keyword = keywords.first().map(String::as_str).unwrap_or("general");
        let tags = strings(profile.dataset_tags);
        let sector_tag = sector.tag();

        // Poisoning only means another caller panicked mid-draw; the RNG is still usable
        let mut rng = self.rng.lock().unwrap_or_else(|e| e.into_inner());

        vec![
            DatasetDescriptor {
                reference: format!("{}-dataset-1", tag),
                title: format!("{} Dataset - {} Analysis", sector_tag, keyword),
                description: format!(
                    "Comprehensive dataset for {} analysis with {} insights",
                    sector_tag, keyword
                ),
                url: format!("https://kaggle.com/datasets/{}-dataset-1", tag),
                download_count: rng.gen_range(1_000..11_000),
                size: rng.gen_range(10..110),
                tags: tags.clone(),
                owner: "kaggle-user".to_string(),
            },
            DatasetDescriptor {
                reference: format!("{}-dataset-2", tag),
                title: format!("{} Trends Dataset", sector_tag),
                description: format!("Historical trends and patterns in {} industry", sector_tag),
                url: format!("https://kaggle.com/datasets/{}-dataset-2", tag),
                download_count: rng.gen_range(500..5_500),
                size: rng.gen_range(5..55),
                tags,
                owner: "kaggle-user".to_string(),
            },
        ]
    }
}

#[async_trait]
impl ResourceMatcher for MockCatalog {
    async fn find_repos(
        &self,
        _keywords: &[String],
        sector: Sector,
        limit: usize,
    ) -> Result<Vec<RepoDescriptor>, AppError> {
        debug!(%sector, "Using catalog repositories");
        Ok(std::iter::once(catalog_repo(sector)).take(limit).collect())
    }

    async fn find_models(
        &self,
        _keywords: &[String],
        sector: Sector,
        limit: usize,
    ) -> Result<Vec<ModelDescriptor>, AppError> {
        debug!(%sector, "Using catalog models");
        Ok(std::iter::once(catalog_model(sector)).take(limit).collect())
    }

    async fn find_datasets(
        &self,
        keywords: &[String],
        sector: Sector,
        limit: usize,
    ) -> Result<Vec<DatasetDescriptor>, AppError> {
        let mut datasets = self.datasets(keywords, sector);
        datasets.truncate(limit);
        Ok(datasets)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sample_pain_points_respect_limit() {
        assert_eq!(sample_pain_points(Sector::Finance, 5).len(), 2);
        assert_eq!(sample_pain_points(Sector::Finance, 1).len(), 1);
        assert!(sample_pain_points(Sector::Healthcare, 0).is_empty());
    }

    #[test]
    fn test_sample_pain_points_carry_sector() {
        for sector in Sector::ALL {
            for post in sample_pain_points(sector, 10) {
                assert_eq!(post.sector, sector);
                assert!(post.url.ends_with(&post.id));
            }
        }
    }

    #[test]
    fn test_seeded_catalog_is_reproducible() {
        let keywords = vec!["inventory".to_string()];
        let a = MockCatalog::seeded(42).datasets(&keywords, Sector::SupplyChain);
        let b = MockCatalog::seeded(42).datasets(&keywords, Sector::SupplyChain);
        assert_eq!(a, b);
        assert_eq!(a[0].title, "supply chain Dataset - inventory Analysis");
        assert_eq!(a[0].reference, "logistics-dataset-1");
        assert!((1_000..11_000).contains(&a[0].download_count));
    }

    #[test]
    fn test_dataset_title_without_keywords() {
        let datasets = MockCatalog::seeded(1).datasets(&[], Sector::Finance);
        assert_eq!(datasets[0].title, "finance Dataset - general Analysis");
        assert_eq!(datasets[1].title, "finance Trends Dataset");
    }
}
