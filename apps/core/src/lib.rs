//! Inspire core
//!
//! Turns free-form problem descriptions into app ideas: keyword ranking,
//! pain-point detection, template-based idea synthesis and sector-specific
//! prototype scaffolding.

pub mod analysis;
pub mod config;
pub mod error;
pub mod generation;
pub mod library;
pub mod logging;
pub mod resources;
pub mod simulation;

pub use analysis::{extract_keywords, is_pain_point, IdeaAnalyzer, IdeaCard, KeywordResult};
pub use config::{AppConfig, LogFormat};
pub use error::{AppError, Result};
pub use generation::{
    generate_app_idea, generate_prototype, generate_prototype_bundle, Sector, SectorContentBundle,
};
pub use library::IdeaLibrary;
pub use resources::{discover_tech_needs, MockCatalog, ResourceMatcher, TechNeed};
pub use simulation::{
    simulate_dataset_integration, simulate_inference, simulate_processing, simulate_repo_integration,
    SimulationResult,
};

#[cfg(test)]
mod tests;
