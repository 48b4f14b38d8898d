//! Resources Module Tests
//!
//! Catalog lookups through the `ResourceMatcher` trait and end-to-end
//! tech-need discovery.

use crate::error::AppError;
use crate::generation::{generate_prototype, Sector};
use crate::resources::{
    discover_tech_needs, sample_pain_points, DatasetDescriptor, MockCatalog, ModelDescriptor,
    RepoDescriptor, ResourceMatcher,
};
use async_trait::async_trait;
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

// ============================================================================
// Mock Matchers for Testing
// ============================================================================

/// Matcher that finds nothing and counts how often it was asked
#[derive(Default)]
pub struct EmptyMatcher {
    pub calls: AtomicUsize,
}

#[async_trait]
impl ResourceMatcher for EmptyMatcher {
    async fn find_repos(
        &self,
        _keywords: &[String],
        _sector: Sector,
        _limit: usize,
    ) -> Result<Vec<RepoDescriptor>, AppError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        Ok(Vec::new())
    }

    async fn find_models(
        &self,
        _keywords: &[String],
        _sector: Sector,
        _limit: usize,
    ) -> Result<Vec<ModelDescriptor>, AppError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        Ok(Vec::new())
    }

    async fn find_datasets(
        &self,
        _keywords: &[String],
        _sector: Sector,
        _limit: usize,
    ) -> Result<Vec<DatasetDescriptor>, AppError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        Ok(Vec::new())
    }
}

#[cfg(test)]
mod catalog_tests {
    use super::*;

    #[tokio::test]
    async fn test_catalog_answers_per_sector() {
        let catalog = MockCatalog::seeded(1);
        let keywords = vec!["patient".to_string()];

        let repos = catalog.find_repos(&keywords, Sector::Healthcare, 5).await.unwrap();
        let models = catalog.find_models(&keywords, Sector::Healthcare, 5).await.unwrap();
        let datasets = catalog.find_datasets(&keywords, Sector::Healthcare, 5).await.unwrap();

        assert_eq!(repos.len(), 1);
        assert_eq!(repos[0].name, "patient-scheduler");
        assert_eq!(models[0].name, "healthcare-assistant");
        assert_eq!(datasets.len(), 2);
        assert_eq!(datasets[0].title, "healthcare Dataset - patient Analysis");
    }

    #[tokio::test]
    async fn test_limit_is_respected() {
        let catalog = MockCatalog::seeded(1);
        let datasets = catalog.find_datasets(&[], Sector::Finance, 1).await.unwrap();
        assert_eq!(datasets.len(), 1);
        assert!(catalog.find_repos(&[], Sector::Finance, 0).await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_catalog_as_trait_object() {
        let matcher: Arc<dyn ResourceMatcher> = Arc::new(MockCatalog::seeded(4));
        let models = matcher.find_models(&[], Sector::SupplyChain, 1).await.unwrap();
        assert_eq!(models[0].name, "supply-chain-optimizer");
    }
}

#[cfg(test)]
mod discovery_tests {
    use super::*;

    #[tokio::test]
    async fn test_one_need_per_sample_post() {
        for sector in Sector::ALL {
            let mut rng = StdRng::seed_from_u64(10);
            let needs = discover_tech_needs(&MockCatalog::seeded(10), sector, &mut rng).await;
            assert_eq!(needs.len(), sample_pain_points(sector, 5).len());
            assert!(needs.iter().all(|n| n.pain_point.sector == sector));
        }
    }

    #[tokio::test]
    async fn test_empty_matcher_gives_undecorated_ideas() {
        let matcher = EmptyMatcher::default();
        let mut rng = StdRng::seed_from_u64(8);

        let needs = discover_tech_needs(&matcher, Sector::Finance, &mut rng).await;

        assert_eq!(needs.len(), 2);
        assert_eq!(matcher.calls.load(Ordering::SeqCst), 6);
        for need in &needs {
            assert!(need.resources.is_empty());
            assert!(!need.app_idea.contains(" ("));
            assert!((0.6..1.0).contains(&need.confidence));
        }
    }

    #[tokio::test]
    async fn test_dyn_matcher_discovery() {
        let matcher: Arc<dyn ResourceMatcher> = Arc::new(MockCatalog::seeded(5));
        let mut rng = StdRng::seed_from_u64(5);

        let needs = discover_tech_needs(matcher.as_ref(), Sector::Technology, &mut rng).await;

        assert_eq!(needs.len(), 1);
        let prototype = generate_prototype(&needs[0]);
        assert_eq!(prototype.processing_logic.model, "code-assistant");
        assert_eq!(prototype.processing_logic.parameters["language"], "JavaScript");
        assert_eq!(prototype.name, "Tech need App");
    }
}
