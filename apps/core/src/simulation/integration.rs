//! Setup reports for wiring a matched repository or dataset into a
//! prototype. Repository activity counters come from `rng`; everything else
//! is copied from the descriptor or fixed per sector.

use chrono::{DateTime, Utc};
use rand::Rng;
use serde::{Deserialize, Serialize};
use serde_json::{json, Value};
use tracing::{debug, instrument};

use crate::generation::Sector;
use crate::resources::{DatasetDescriptor, RepoDescriptor};

const DATA_FORMAT: &str = "CSV";

/// Repository state at integration time.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RepositorySnapshot {
    pub name: String,
    pub stars: u32,
    pub language: String,
    pub last_commit: DateTime<Utc>,
    /// In `[5, 25)`
    pub contributors: u32,
    /// In `[10, 60)`
    pub issues: u32,
    /// In `[5, 35)`
    pub pull_requests: u32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RepoIntegrationPlan {
    pub compatible: bool,
    pub setup_required: bool,
    pub documentation_url: String,
    pub api_endpoints: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RepoIntegration {
    pub repository: RepositorySnapshot,
    pub integration: RepoIntegrationPlan,
}

/// Dataset state at integration time, with the sector's expected schema.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DatasetSnapshot {
    pub title: String,
    pub size: u64,
    pub download_count: u64,
    pub last_updated: DateTime<Utc>,
    pub columns: Vec<String>,
    /// Example rows, one JSON object each
    pub sample_data: Vec<Value>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DatasetIntegrationPlan {
    pub data_format: String,
    pub preprocessing_required: bool,
    pub feature_engineering: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DatasetIntegration {
    pub dataset: DatasetSnapshot,
    pub integration: DatasetIntegrationPlan,
}

fn owned(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

/// Endpoint paths an integrated repository is expected to serve.
pub fn integration_endpoints(sector: Sector) -> Vec<String> {
    owned(match sector {
        Sector::Finance => &[
            "/api/expenses/categorize",
            "/api/budget/analyze",
            "/api/trends/spending",
            "/api/reports/generate",
        ],
        Sector::Healthcare => &[
            "/api/symptoms/analyze",
            "/api/patients/assess",
            "/api/treatment/suggest",
            "/api/records/update",
        ],
        Sector::SupplyChain => &[
            "/api/inventory/optimize",
            "/api/demand/forecast",
            "/api/suppliers/assess",
            "/api/logistics/plan",
        ],
        Sector::Technology => &[
            "/api/code/analyze",
            "/api/performance/measure",
            "/api/security/scan",
            "/api/quality/assess",
        ],
    })
}

fn dataset_columns(sector: Sector) -> Vec<String> {
    owned(match sector {
        Sector::Finance => &["date", "amount", "category", "merchant", "description"],
        Sector::Healthcare => &["patient_id", "symptoms", "diagnosis", "treatment", "outcome"],
        Sector::SupplyChain => &["item_id", "quantity", "supplier", "location", "status"],
        Sector::Technology => &[
            "project_id",
            "code_complexity",
            "performance",
            "security_score",
            "maintainability",
        ],
    })
}

fn sample_rows(sector: Sector) -> Vec<Value> {
    match sector {
        Sector::Finance => vec![
            json!({ "date": "2024-01-15", "amount": 45.20, "category": "Food", "merchant": "Starbucks" }),
            json!({ "date": "2024-01-15", "amount": 23.50, "category": "Transport", "merchant": "Uber" }),
            json!({ "date": "2024-01-14", "amount": 67.80, "category": "Entertainment", "merchant": "Netflix" }),
        ],
        Sector::Healthcare => vec![
            json!({ "patient_id": "P001", "symptoms": "headache,fatigue", "diagnosis": "viral infection", "treatment": "rest" }),
            json!({ "patient_id": "P002", "symptoms": "cough,fever", "diagnosis": "flu", "treatment": "medication" }),
        ],
        Sector::SupplyChain => vec![
            json!({ "item_id": "I001", "quantity": 150, "supplier": "Supplier A", "location": "Warehouse 1", "status": "in_stock" }),
            json!({ "item_id": "I002", "quantity": 75, "supplier": "Supplier B", "location": "Warehouse 2", "status": "low_stock" }),
        ],
        Sector::Technology => vec![
            json!({ "project_id": "PRJ001", "complexity": 7.2, "performance": 6.8, "security": 8.1, "maintainability": 7.5 }),
            json!({ "project_id": "PRJ002", "complexity": 5.1, "performance": 8.2, "security": 7.9, "maintainability": 8.0 }),
        ],
    }
}

fn feature_engineering(sector: Sector) -> Vec<String> {
    owned(match sector {
        Sector::Finance => &[
            "Extract merchant names from descriptions",
            "Calculate spending velocity",
            "Identify seasonal patterns",
            "Create budget categories",
        ],
        Sector::Healthcare => &[
            "Extract symptom keywords",
            "Calculate severity scores",
            "Identify risk factors",
            "Create treatment pathways",
        ],
        Sector::SupplyChain => &[
            "Calculate demand patterns",
            "Identify seasonal trends",
            "Assess supplier reliability",
            "Optimize reorder points",
        ],
        Sector::Technology => &[
            "Measure code complexity",
            "Calculate performance metrics",
            "Assess security vulnerabilities",
            "Evaluate maintainability",
        ],
    })
}

/// Builds the integration report for a repository.
#[instrument(skip(repo, rng), fields(repo = %repo.name))]
pub fn simulate_repo_integration<R: Rng + ?Sized>(
    repo: &RepoDescriptor,
    sector: Sector,
    rng: &mut R,
) -> RepoIntegration {
    let repository = RepositorySnapshot {
        name: repo.name.clone(),
        stars: repo.stars,
        language: repo.language.clone(),
        last_commit: Utc::now(),
        contributors: rng.gen_range(5..25),
        issues: rng.gen_range(10..60),
        pull_requests: rng.gen_range(5..35),
    };
    debug!(contributors = repository.contributors, "Simulated repository integration");

    RepoIntegration {
        repository,
        integration: RepoIntegrationPlan {
            compatible: true,
            setup_required: true,
            documentation_url: format!("{}/README.md", repo.url),
            api_endpoints: integration_endpoints(sector),
        },
    }
}

/// Builds the integration report for a dataset.
#[instrument(skip(dataset), fields(dataset = %dataset.title))]
pub fn simulate_dataset_integration(dataset: &DatasetDescriptor, sector: Sector) -> DatasetIntegration {
    debug!("Simulated dataset integration");
    DatasetIntegration {
        dataset: DatasetSnapshot {
            title: dataset.title.clone(),
            size: dataset.size,
            download_count: dataset.download_count,
            last_updated: Utc::now(),
            columns: dataset_columns(sector),
            sample_data: sample_rows(sector),
        },
        integration: DatasetIntegrationPlan {
            data_format: DATA_FORMAT.to_string(),
            preprocessing_required: true,
            feature_engineering: feature_engineering(sector),
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn repo() -> RepoDescriptor {
        RepoDescriptor {
            name: "expense-tracker".to_string(),
            url: "https://github.com/mock/expense-tracker".to_string(),
            stars: 420,
            ..RepoDescriptor::with_language("TypeScript")
        }
    }

    #[test]
    fn test_repo_report_copies_descriptor() {
        let report = simulate_repo_integration(&repo(), Sector::Finance, &mut StdRng::seed_from_u64(2));

        assert_eq!(report.repository.name, "expense-tracker");
        assert_eq!(report.repository.stars, 420);
        assert_eq!(report.repository.language, "TypeScript");
        assert_eq!(
            report.integration.documentation_url,
            "https://github.com/mock/expense-tracker/README.md"
        );
        assert_eq!(report.integration.api_endpoints[0], "/api/expenses/categorize");
        assert!(report.integration.compatible && report.integration.setup_required);
    }

    #[test]
    fn test_repo_counters_in_range() {
        let mut rng = StdRng::seed_from_u64(17);
        for _ in 0..50 {
            let snapshot = simulate_repo_integration(&repo(), Sector::Technology, &mut rng).repository;
            assert!((5..25).contains(&snapshot.contributors));
            assert!((10..60).contains(&snapshot.issues));
            assert!((5..35).contains(&snapshot.pull_requests));
        }
    }

    #[test]
    fn test_dataset_report_per_sector() {
        let dataset = DatasetDescriptor {
            size: 2048,
            download_count: 310,
            ..DatasetDescriptor::titled("Patient Visits")
        };
        let report = simulate_dataset_integration(&dataset, Sector::Healthcare);

        assert_eq!(report.dataset.title, "Patient Visits");
        assert_eq!(report.dataset.size, 2048);
        assert_eq!(report.dataset.download_count, 310);
        assert_eq!(report.dataset.columns[0], "patient_id");
        assert_eq!(report.dataset.sample_data.len(), 2);
        assert_eq!(report.dataset.sample_data[1]["diagnosis"], "flu");
        assert_eq!(report.integration.data_format, "CSV");
        assert_eq!(report.integration.feature_engineering[3], "Create treatment pathways");
    }

    #[test]
    fn test_every_sector_has_four_endpoints() {
        for sector in Sector::ALL {
            assert_eq!(integration_endpoints(sector).len(), 4);
            assert_eq!(dataset_columns(sector).len(), 5);
            assert_eq!(feature_engineering(sector).len(), 4);
        }
    }
}
