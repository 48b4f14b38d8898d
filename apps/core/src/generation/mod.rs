//! # Generation Module
//!
//! Deterministic, sector-driven content generation.
//!
//! ## Components
//! - `sector`: Closed sector enumeration and per-sector profiles
//! - `idea`: App-idea sentence synthesis (the only randomized step)
//! - `bundle`: Sector content bundles (input fields, features, output format)
//! - `prototype`: Processing logic and API surface for a full prototype

pub mod bundle;
pub mod idea;
pub mod prototype;
pub mod sector;

pub use bundle::{
    bundle_for, generate_prototype_bundle, FieldKind, InputFieldDescriptor, OutputFormatDescriptor,
    OutputKind, SectorContentBundle,
};
pub use idea::{generate_app_idea, IdeaSynthesizer, TEMPLATES_PER_SECTOR};
pub use prototype::{app_name, generate_prototype, ApiEndpoint, HttpMethod, ProcessingLogic, Prototype};
pub use sector::{Sector, SectorProfile};
