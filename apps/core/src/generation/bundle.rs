//! Sector Content Generator.
//!
//! Maps a sector to the fixed bundle of input fields, features and output
//! format used to render that sector's prototype form. Bundles are assembled
//! fresh on every call from read-only tables, so two calls with the same tag
//! always compare equal.

use serde::{Deserialize, Serialize};

use super::sector::Sector;

/// Kind of form control an input field renders as.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FieldKind {
    Text,
    Textarea,
    File,
    Number,
    Select,
    Date,
}

/// Kind of result display.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputKind {
    Chart,
    Table,
    Text,
    Json,
    List,
}

/// One input control of a sector form.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InputFieldDescriptor {
    pub id: String,
    pub label: String,
    pub kind: FieldKind,
    pub placeholder: String,
    pub required: bool,
    /// Validation rule such as `min:10` or `min:0,max:120`
    #[serde(skip_serializing_if = "Option::is_none")]
    pub validation: Option<String>,
    /// Choices for select fields, in display order
    #[serde(skip_serializing_if = "Option::is_none")]
    pub options: Option<Vec<String>>,
}

/// How results are displayed. `data_fields` only labels columns.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OutputFormatDescriptor {
    pub kind: OutputKind,
    pub visualization: String,
    pub data_fields: Vec<String>,
}

/// Everything needed to render a sector-specific prototype form.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SectorContentBundle {
    pub sector: Sector,
    pub input_fields: Vec<InputFieldDescriptor>,
    pub features: Vec<String>,
    pub output_format: OutputFormatDescriptor,
}

struct FieldSpec {
    id: &'static str,
    label: &'static str,
    kind: FieldKind,
    placeholder: &'static str,
    required: bool,
    validation: Option<&'static str>,
    options: Option<&'static [&'static str]>,
}

impl FieldSpec {
    fn build(&self) -> InputFieldDescriptor {
        InputFieldDescriptor {
            id: self.id.to_string(),
            label: self.label.to_string(),
            kind: self.kind,
            placeholder: self.placeholder.to_string(),
            required: self.required,
            validation: self.validation.map(str::to_string),
            options: self
                .options
                .map(|opts| opts.iter().map(|o| o.to_string()).collect()),
        }
    }
}

struct SectorTable {
    sector: Sector,
    fields: &'static [FieldSpec],
    features: &'static [&'static str],
    output_kind: OutputKind,
    visualization: &'static str,
    data_fields: &'static [&'static str],
}

/// Shared features listed ahead of every sector's own features
pub const BASELINE_FEATURES: [&str; 4] = [
    "Real-time Processing",
    "AI Analysis",
    "Data Visualization",
    "Export Results",
];

static SECTOR_TABLES: [SectorTable; 4] = [
    SectorTable {
        sector: Sector::Finance,
        fields: &[
            FieldSpec {
                id: "expense_description",
                label: "Expense Description",
                kind: FieldKind::Textarea,
                placeholder: "Enter expense details (e.g., \"Coffee at Starbucks - $4.50\")",
                required: true,
                validation: Some("min:10"),
                options: None,
            },
            FieldSpec {
                id: "amount",
                label: "Amount",
                kind: FieldKind::Number,
                placeholder: "Enter amount",
                required: true,
                validation: Some("min:0"),
                options: None,
            },
            FieldSpec {
                id: "category",
                label: "Category",
                kind: FieldKind::Select,
                placeholder: "Select category",
                required: false,
                validation: None,
                options: Some(&["Food", "Transport", "Entertainment", "Utilities", "Healthcare", "Other"]),
            },
        ],
        features: &[
            "Expense Tracking",
            "Budget Analysis",
            "Spending Insights",
            "Financial Reports",
            "AI Categorization",
        ],
        output_kind: OutputKind::Chart,
        visualization: "pie_chart",
        data_fields: &["amount", "category", "date", "insights"],
    },
    SectorTable {
        sector: Sector::Healthcare,
        fields: &[
            FieldSpec {
                id: "patient_info",
                label: "Patient Information",
                kind: FieldKind::Textarea,
                placeholder: "Enter patient details or symptoms",
                required: true,
                validation: Some("min:20"),
                options: None,
            },
            FieldSpec {
                id: "age",
                label: "Age",
                kind: FieldKind::Number,
                placeholder: "Enter age",
                required: false,
                validation: Some("min:0,max:120"),
                options: None,
            },
            FieldSpec {
                id: "symptoms",
                label: "Symptoms",
                kind: FieldKind::Textarea,
                placeholder: "Describe symptoms in detail",
                required: false,
                validation: None,
                options: None,
            },
        ],
        features: &[
            "Patient Management",
            "Health Monitoring",
            "Appointment Scheduling",
            "Medical Records",
            "Symptom Analysis",
        ],
        output_kind: OutputKind::Table,
        visualization: "data_table",
        data_fields: &["symptoms", "analysis", "recommendations", "urgency"],
    },
    SectorTable {
        sector: Sector::SupplyChain,
        fields: &[
            FieldSpec {
                id: "inventory_data",
                label: "Inventory Data",
                kind: FieldKind::Textarea,
                placeholder: "Enter inventory items and quantities",
                required: true,
                validation: Some("min:10"),
                options: None,
            },
            FieldSpec {
                id: "supplier",
                label: "Supplier",
                kind: FieldKind::Text,
                placeholder: "Enter supplier name",
                required: false,
                validation: None,
                options: None,
            },
            FieldSpec {
                id: "location",
                label: "Location",
                kind: FieldKind::Text,
                placeholder: "Enter warehouse location",
                required: false,
                validation: None,
                options: None,
            },
        ],
        features: &[
            "Inventory Tracking",
            "Demand Forecasting",
            "Supplier Management",
            "Logistics Optimization",
            "Real-time Updates",
        ],
        output_kind: OutputKind::Table,
        visualization: "inventory_table",
        data_fields: &["item", "quantity", "status", "recommendations"],
    },
    SectorTable {
        sector: Sector::Technology,
        fields: &[
            FieldSpec {
                id: "project_details",
                label: "Project Details",
                kind: FieldKind::Textarea,
                placeholder: "Enter project requirements or code snippets",
                required: true,
                validation: Some("min:20"),
                options: None,
            },
            FieldSpec {
                id: "technology_stack",
                label: "Technology Stack",
                kind: FieldKind::Text,
                placeholder: "Enter tech stack (e.g., React, Node.js)",
                required: false,
                validation: None,
                options: None,
            },
            FieldSpec {
                id: "priority",
                label: "Priority",
                kind: FieldKind::Select,
                placeholder: "Select priority",
                required: false,
                validation: None,
                options: Some(&["Low", "Medium", "High", "Critical"]),
            },
        ],
        features: &[
            "Project Management",
            "Code Analysis",
            "Performance Monitoring",
            "Team Collaboration",
            "Automated Testing",
        ],
        output_kind: OutputKind::Json,
        visualization: "code_analysis",
        data_fields: &["complexity", "performance", "security", "suggestions"],
    },
];

fn table_for(sector: Sector) -> &'static SectorTable {
    // Every sector has a row; the technology row is the documented default.
    SECTOR_TABLES
        .iter()
        .find(|t| t.sector == sector)
        .unwrap_or(&SECTOR_TABLES[3])
}

/// Builds the content bundle for an already-resolved sector.
pub fn bundle_for(sector: Sector) -> SectorContentBundle {
    let table = table_for(sector);

    let features = BASELINE_FEATURES
        .iter()
        .chain(table.features.iter())
        .map(|f| f.to_string())
        .collect();

    SectorContentBundle {
        sector: table.sector,
        input_fields: table.fields.iter().map(FieldSpec::build).collect(),
        features,
        output_format: OutputFormatDescriptor {
            kind: table.output_kind,
            visualization: table.visualization.to_string(),
            data_fields: table.data_fields.iter().map(|f| f.to_string()).collect(),
        },
    }
}

/// Returns the bundle for a sector tag; unknown tags get the technology bundle.
pub fn generate_prototype_bundle(sector: &str) -> SectorContentBundle {
    bundle_for(Sector::resolve(sector))
}
