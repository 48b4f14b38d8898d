use async_trait::async_trait;

use super::descriptors::{DatasetDescriptor, ModelDescriptor, RepoDescriptor};
use crate::error::AppError;
use crate::generation::Sector;

/// Defines the interface of a service that finds external resources for a
/// pain point.
///
/// The bundled [`MockCatalog`](super::MockCatalog) answers from static
/// tables; a real implementation could query repository, model and dataset
/// search APIs.
#[async_trait]
pub trait ResourceMatcher: Send + Sync {
    /// Finds code repositories matching the keywords, best match first.
    async fn find_repos(
        &self,
        keywords: &[String],
        sector: Sector,
        limit: usize,
    ) -> Result<Vec<RepoDescriptor>, AppError>;

    /// Finds machine learning models matching the keywords, best match first.
    async fn find_models(
        &self,
        keywords: &[String],
        sector: Sector,
        limit: usize,
    ) -> Result<Vec<ModelDescriptor>, AppError>;

    /// Finds datasets matching the keywords, best match first.
    async fn find_datasets(
        &self,
        keywords: &[String],
        sector: Sector,
        limit: usize,
    ) -> Result<Vec<DatasetDescriptor>, AppError>;
}
