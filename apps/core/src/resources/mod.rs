//! # Resources Module
//!
//! External artifacts that decorate generated ideas.
//!
//! ## Components
//! - `descriptors`: Repository, model, dataset and pain-point records
//! - `traits`: The `ResourceMatcher` seam for resource lookups
//! - `catalog`: Static catalog and sample community posts
//! - `discovery`: Pain point to tech need pipeline

pub mod catalog;
pub mod descriptors;
pub mod discovery;
pub mod traits;

pub use catalog::{sample_pain_points, MockCatalog};
pub use descriptors::{
    DatasetDescriptor, MatchedResources, ModelDescriptor, PainPoint, RepoDescriptor, TechNeed,
};
pub use discovery::{discover_tech_needs, DISCOVERY_LIMIT};
pub use traits::ResourceMatcher;
