//! Full prototype description: the sector bundle plus the processing logic
//! and API surface a generated app would expose.

use serde::{Deserialize, Serialize};
use serde_json::{json, Value};
use uuid::Uuid;

use super::bundle::{bundle_for, SectorContentBundle};
use super::sector::Sector;
use crate::resources::{ModelDescriptor, RepoDescriptor, TechNeed};

const DEFAULT_MODEL: &str = "default-model";
const DEFAULT_LANGUAGE: &str = "JavaScript";

/// Model and algorithm a prototype runs its input through.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProcessingLogic {
    pub model: String,
    pub algorithm: String,
    pub parameters: Value,
    pub expected_output: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum HttpMethod {
    Get,
    Post,
    Put,
    Delete,
}

/// An endpoint the prototype's backend would offer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ApiEndpoint {
    pub name: String,
    pub method: HttpMethod,
    pub url: String,
    pub description: String,
    /// Parameter name to type name, in declaration order
    pub parameters: Vec<(String, String)>,
}

impl ApiEndpoint {
    fn new(
        name: &str,
        method: HttpMethod,
        url: &str,
        description: &str,
        parameters: &[(&str, &str)],
    ) -> Self {
        Self {
            name: name.to_string(),
            method,
            url: url.to_string(),
            description: description.to_string(),
            parameters: parameters
                .iter()
                .map(|(k, v)| (k.to_string(), v.to_string()))
                .collect(),
        }
    }
}

/// A complete generated app prototype.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Prototype {
    pub id: Uuid,
    pub name: String,
    pub description: String,
    pub sector: Sector,
    pub bundle: SectorContentBundle,
    pub processing_logic: ProcessingLogic,
    pub api_endpoints: Vec<ApiEndpoint>,
}

/// "<Sector short name> <first word longer than 3 chars> App".
///
/// Punctuation is removed outright here (not replaced by spaces), so
/// "don't" becomes "dont".
pub fn app_name(title: &str, sector: Sector) -> String {
    let stripped: String = title
        .to_lowercase()
        .chars()
        .filter(|c| c.is_alphanumeric() || *c == '_' || c.is_whitespace())
        .collect();

    let primary = stripped
        .split_whitespace()
        .find(|word| word.chars().count() > 3)
        .unwrap_or("Solution");

    format!("{} {} App", sector.short_name(), primary)
}

pub fn processing_logic(
    sector: Sector,
    model: Option<&ModelDescriptor>,
    repo: Option<&RepoDescriptor>,
) -> ProcessingLogic {
    let model = model
        .map(|m| m.name.clone())
        .unwrap_or_else(|| DEFAULT_MODEL.to_string());

    let (algorithm, parameters, expected_output) = match sector {
        Sector::Finance => (
            "expense-categorization",
            json!({
                "confidence_threshold": 0.8,
                "categories": ["food", "transport", "entertainment", "utilities"],
                "currency": "USD"
            }),
            "Categorized expenses with spending insights",
        ),
        Sector::Healthcare => (
            "symptom-analysis",
            json!({
                "confidence_threshold": 0.7,
                "medical_categories": ["respiratory", "cardiovascular", "neurological"],
                "urgency_levels": ["low", "medium", "high"]
            }),
            "Health insights with recommended actions",
        ),
        Sector::SupplyChain => (
            "inventory-optimization",
            json!({
                "confidence_threshold": 0.75,
                "optimization_goals": ["cost", "efficiency", "availability"],
                "time_horizon": "30_days"
            }),
            "Optimized inventory recommendations",
        ),
        Sector::Technology => {
            let language = repo
                .map(|r| r.language.as_str())
                .filter(|l| !l.is_empty())
                .unwrap_or(DEFAULT_LANGUAGE);
            (
                "code-analysis",
                json!({
                    "confidence_threshold": 0.8,
                    "analysis_types": ["complexity", "performance", "security"],
                    "language": language
                }),
                "Code analysis with improvement suggestions",
            )
        }
    };

    ProcessingLogic {
        model,
        algorithm: algorithm.to_string(),
        parameters,
        expected_output: expected_output.to_string(),
    }
}

/// Two shared endpoints followed by the sector's own endpoint.
pub fn api_endpoints(sector: Sector) -> Vec<ApiEndpoint> {
    let mut endpoints = vec![
        ApiEndpoint::new(
            "Process Data",
            HttpMethod::Post,
            "/api/process",
            "Process input data using AI model",
            &[("data", "string"), ("model", "string"), ("format", "string")],
        ),
        ApiEndpoint::new(
            "Get Results",
            HttpMethod::Get,
            "/api/results",
            "Retrieve processed results",
            &[("id", "string"), ("format", "string")],
        ),
    ];

    endpoints.push(match sector {
        Sector::Finance => ApiEndpoint::new(
            "Categorize Expenses",
            HttpMethod::Post,
            "/api/categorize",
            "Categorize expenses using AI",
            &[("description", "string"), ("amount", "number"), ("date", "string")],
        ),
        Sector::Healthcare => ApiEndpoint::new(
            "Analyze Symptoms",
            HttpMethod::Post,
            "/api/analyze",
            "Analyze patient symptoms",
            &[("symptoms", "string"), ("age", "number"), ("history", "string")],
        ),
        Sector::SupplyChain => ApiEndpoint::new(
            "Optimize Inventory",
            HttpMethod::Post,
            "/api/optimize",
            "Optimize inventory levels",
            &[("items", "array"), ("demand", "number"), ("lead_time", "number")],
        ),
        Sector::Technology => ApiEndpoint::new(
            "Analyze Code",
            HttpMethod::Post,
            "/api/analyze",
            "Analyze code quality and performance",
            &[("code", "string"), ("language", "string"), ("framework", "string")],
        ),
    });

    endpoints
}

/// Builds the full prototype for a discovered tech need.
pub fn generate_prototype(need: &TechNeed) -> Prototype {
    let sector = need.pain_point.sector;
    let resources = &need.resources;

    Prototype {
        id: Uuid::new_v4(),
        name: app_name(&need.pain_point.title, sector),
        description: need.app_idea.clone(),
        sector,
        bundle: bundle_for(sector),
        processing_logic: processing_logic(sector, resources.model.as_ref(), resources.repo.as_ref()),
        api_endpoints: api_endpoints(sector),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_app_name_uses_first_long_word() {
        assert_eq!(
            app_name("Struggling with expense tracking - need a better solution", Sector::Finance),
            "Finance struggling App"
        );
        assert_eq!(app_name("Don't go", Sector::Healthcare), "Health dont App");
    }

    #[test]
    fn test_app_name_default_keyword() {
        assert_eq!(app_name("a to do", Sector::SupplyChain), "Supply Solution App");
        assert_eq!(app_name("", Sector::Technology), "Tech Solution App");
    }

    #[test]
    fn test_processing_logic_defaults() {
        let logic = processing_logic(Sector::Technology, None, None);
        assert_eq!(logic.model, "default-model");
        assert_eq!(logic.algorithm, "code-analysis");
        assert_eq!(logic.parameters["language"], "JavaScript");
    }

    #[test]
    fn test_processing_logic_uses_resources() {
        let model = ModelDescriptor::named("code-assistant");
        let repo = RepoDescriptor::with_language("Rust");
        let logic = processing_logic(Sector::Technology, Some(&model), Some(&repo));
        assert_eq!(logic.model, "code-assistant");
        assert_eq!(logic.parameters["language"], "Rust");
    }

    #[test]
    fn test_api_endpoints_base_first() {
        let endpoints = api_endpoints(Sector::SupplyChain);
        assert_eq!(endpoints.len(), 3);
        assert_eq!(endpoints[0].url, "/api/process");
        assert_eq!(endpoints[1].method, HttpMethod::Get);
        assert_eq!(endpoints[2].name, "Optimize Inventory");
        assert_eq!(endpoints[2].parameters[0], ("items".to_string(), "array".to_string()));
    }
}
