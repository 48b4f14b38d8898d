//! # Simulation Module
//!
//! Canned results for exercising a generated prototype offline. No model,
//! repository host or dataset registry is contacted; payloads are fixed per
//! sector or drawn from a caller-supplied generator.
//!
//! ## Components
//! - `processing`: Sector analysis of a prototype's input
//! - `inference`: Fixed model-inference payloads
//! - `integration`: Setup reports for a matched repository or dataset

pub mod inference;
pub mod integration;
pub mod processing;

pub use inference::{simulate_inference, InferenceResult};
pub use integration::{
    integration_endpoints, simulate_dataset_integration, simulate_repo_integration,
    DatasetIntegration, DatasetIntegrationPlan, DatasetSnapshot, RepoIntegration,
    RepoIntegrationPlan, RepositorySnapshot,
};
pub use processing::{
    extract_amount, extract_symptoms, simulate_processing, SimulationResult, SimulationStatus,
};
