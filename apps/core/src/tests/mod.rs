//! Test Module
//!
//! Cross-module test suite for the inspire core.
//!
//! ## Test Categories
//! - `analysis_tests`: Tokenizing, keyword ranking, pain-point detection, analyzer
//! - `generation_tests`: Idea sentences, sector bundles, prototypes
//! - `resources_tests`: Catalog lookups and tech-need discovery
//! - `library_tests`: Saved idea persistence
//! - `config_tests`: Environment-driven configuration
//! - `simulation_tests`: Canned sector analysis

pub mod analysis_tests;
pub mod resources_tests;
