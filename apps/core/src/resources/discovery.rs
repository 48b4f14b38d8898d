//! Turns sample pain points into tech needs by matching each one with a
//! repository, a model and a dataset.

use rand::Rng;
use tracing::{info, instrument, warn};

use super::catalog::sample_pain_points;
use super::descriptors::{MatchedResources, PainPoint, TechNeed};
use super::traits::ResourceMatcher;
use crate::generation::{IdeaSynthesizer, Sector};

/// Maximum number of pain points examined per discovery run.
pub const DISCOVERY_LIMIT: usize = 5;

/// Discovers tech needs for a sector.
///
/// The three lookups for a pain point run concurrently. A failed lookup is
/// logged and treated as "nothing found"; it never aborts the run.
#[instrument(skip(matcher, rng))]
pub async fn discover_tech_needs<M, R>(matcher: &M, sector: Sector, rng: &mut R) -> Vec<TechNeed>
where
    M: ResourceMatcher + ?Sized,
    R: Rng + ?Sized,
{
    let pain_points = sample_pain_points(sector, DISCOVERY_LIMIT);
    let mut needs = Vec::with_capacity(pain_points.len());

    for pain_point in pain_points {
        let resources = match_resources(matcher, &pain_point).await;
        let app_idea = IdeaSynthesizer.generate_with_rng(
            sector.tag(),
            &pain_point.title,
            &resources,
            rng,
        );
        needs.push(TechNeed {
            pain_point,
            resources,
            app_idea,
            confidence: rng.gen_range(0.6..1.0),
        });
    }

    info!(count = needs.len(), "Discovered tech needs");
    needs
}

async fn match_resources<M>(matcher: &M, pain_point: &PainPoint) -> MatchedResources
where
    M: ResourceMatcher + ?Sized,
{
    let keywords = &pain_point.keywords;
    let sector = pain_point.sector;

    let (repos, models, datasets) = futures::join!(
        matcher.find_repos(keywords, sector, 1),
        matcher.find_models(keywords, sector, 1),
        matcher.find_datasets(keywords, sector, 1),
    );

    let repo = repos
        .map_err(|e| warn!(pain_point = %pain_point.id, "Repository lookup failed: {}", e))
        .ok()
        .and_then(|found| found.into_iter().next());
    let model = models
        .map_err(|e| warn!(pain_point = %pain_point.id, "Model lookup failed: {}", e))
        .ok()
        .and_then(|found| found.into_iter().next());
    let dataset = datasets
        .map_err(|e| warn!(pain_point = %pain_point.id, "Dataset lookup failed: {}", e))
        .ok()
        .and_then(|found| found.into_iter().next());

    MatchedResources {
        repo,
        model,
        dataset,
    }
}
