//! Sector tags and per-sector profiles.
//!
//! A sector drives which templates, fields, features and mock resources are
//! used. The set is closed; every unrecognized tag resolves to
//! [`Sector::Technology`] in exactly one place, [`Sector::resolve`].

use serde::{Deserialize, Serialize};
use std::fmt;

/// Application domain used to specialize generated content.
///
/// Serialized with the same string as [`Sector::tag`], so a sector printed
/// by the CLI can be passed back as a `--sector` argument.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Sector {
    Finance,
    Healthcare,
    #[serde(rename = "supply chain")]
    SupplyChain,
    Technology,
}

impl fmt::Display for Sector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.tag())
    }
}

impl Sector {
    /// All known sectors, in display order.
    pub const ALL: [Sector; 4] = [
        Sector::Finance,
        Sector::SupplyChain,
        Sector::Healthcare,
        Sector::Technology,
    ];

    /// Parses a sector tag, case-insensitively. Returns `None` for unknown
    /// tags; surrounding whitespace is not stripped, so `" finance "` is
    /// unknown.
    pub fn from_tag(tag: &str) -> Option<Self> {
        match tag.to_lowercase().as_str() {
            "finance" => Some(Sector::Finance),
            "healthcare" => Some(Sector::Healthcare),
            "supply chain" => Some(Sector::SupplyChain),
            "technology" => Some(Sector::Technology),
            _ => None,
        }
    }

    /// Resolves any tag to a sector, falling back to technology.
    pub fn resolve(tag: &str) -> Self {
        Self::from_tag(tag).unwrap_or(Sector::Technology)
    }

    /// Canonical lowercase tag.
    pub fn tag(&self) -> &'static str {
        match self {
            Sector::Finance => "finance",
            Sector::Healthcare => "healthcare",
            Sector::SupplyChain => "supply chain",
            Sector::Technology => "technology",
        }
    }

    /// Short name used when naming generated apps.
    pub fn short_name(&self) -> &'static str {
        match self {
            Sector::Finance => "Finance",
            Sector::Healthcare => "Health",
            Sector::SupplyChain => "Supply",
            Sector::Technology => "Tech",
        }
    }

    /// Static profile describing where ideas for this sector come from.
    pub fn profile(&self) -> &'static SectorProfile {
        match self {
            Sector::Finance => &FINANCE_PROFILE,
            Sector::Healthcare => &HEALTHCARE_PROFILE,
            Sector::SupplyChain => &SUPPLY_CHAIN_PROFILE,
            Sector::Technology => &TECHNOLOGY_PROFILE,
        }
    }
}

/// Descriptive metadata for a sector: display name, source communities and
/// the tags used when matching external resources.
#[derive(Debug, Clone, Serialize)]
pub struct SectorProfile {
    pub name: &'static str,
    pub icon: &'static str,
    pub communities: &'static [&'static str],
    pub keywords: &'static [&'static str],
    pub repo_topics: &'static [&'static str],
    pub model_tags: &'static [&'static str],
    pub dataset_tags: &'static [&'static str],
}

static FINANCE_PROFILE: SectorProfile = SectorProfile {
    name: "Finance",
    icon: "💰",
    communities: &["personalfinance", "investing", "financialindependence", "stocks", "cryptocurrency"],
    keywords: &["money", "budget", "investment", "trading", "expense", "savings", "debt", "credit"],
    repo_topics: &["finance", "trading", "investment", "budget", "fintech"],
    model_tags: &["finance", "financial", "trading", "economics"],
    dataset_tags: &["finance", "financial", "trading", "investment"],
};

static SUPPLY_CHAIN_PROFILE: SectorProfile = SectorProfile {
    name: "Supply Chain",
    icon: "🚚",
    communities: &["supplychain", "logistics", "shipping", "procurement", "operations"],
    keywords: &["logistics", "shipping", "inventory", "procurement", "warehouse", "distribution"],
    repo_topics: &["logistics", "supply-chain", "shipping", "inventory"],
    model_tags: &["logistics", "supply-chain", "operations"],
    dataset_tags: &["logistics", "supply-chain", "shipping"],
};

static HEALTHCARE_PROFILE: SectorProfile = SectorProfile {
    name: "Healthcare",
    icon: "🏥",
    communities: &["healthcare", "medicine", "nursing", "pharmacy", "medical"],
    keywords: &["health", "medical", "patient", "treatment", "diagnosis", "hospital", "clinic"],
    repo_topics: &["healthcare", "medical", "health", "hospital"],
    model_tags: &["medical", "healthcare", "clinical", "health"],
    dataset_tags: &["healthcare", "medical", "health"],
};

static TECHNOLOGY_PROFILE: SectorProfile = SectorProfile {
    name: "Technology",
    icon: "💻",
    communities: &["technology", "programming", "webdev", "MachineLearning", "artificial"],
    keywords: &["software", "development", "programming", "ai", "machine learning", "data", "algorithm"],
    repo_topics: &["software", "development", "ai", "machine-learning", "data-science"],
    model_tags: &["nlp", "computer-vision", "machine-learning", "ai"],
    dataset_tags: &["technology", "software", "ai", "data-science"],
};
