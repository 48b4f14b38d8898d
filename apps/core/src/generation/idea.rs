//! Idea Synthesizer.
//!
//! Composes an app-idea sentence from a pain point and a sector: one of three
//! sector templates, picked uniformly at random, followed by optional
//! resource annotations in a fixed order.

use rand::Rng;
use tracing::debug;

use super::sector::Sector;
use crate::resources::{DatasetDescriptor, MatchedResources, ModelDescriptor, RepoDescriptor};

/// Renders a template from the lowercased sector tag and pain-point text
type Template = fn(&str, &str) -> String;

/// Number of templates available per sector
pub const TEMPLATES_PER_SECTOR: usize = 3;

static FINANCE_TEMPLATES: [Template; TEMPLATES_PER_SECTOR] = [
    |sector, pain| format!("Build a {sector} app that helps users {pain} with smart analytics"),
    |_, pain| format!("Create a financial tool that solves {pain} using AI insights"),
    |sector, pain| format!("Develop a {sector} dashboard for {pain} management"),
];

static SUPPLY_CHAIN_TEMPLATES: [Template; TEMPLATES_PER_SECTOR] = [
    |sector, pain| format!("Build a {sector} optimization app that addresses {pain}"),
    |_, pain| format!("Create a logistics tool that solves {pain} with real-time tracking"),
    |_, pain| format!("Develop a supply chain analytics platform for {pain} insights"),
];

static HEALTHCARE_TEMPLATES: [Template; TEMPLATES_PER_SECTOR] = [
    |sector, pain| format!("Build a {sector} app that helps with {pain} using patient data"),
    |_, pain| format!("Create a medical tool that addresses {pain} with AI assistance"),
    |_, pain| format!("Develop a healthcare platform for {pain} management"),
];

static TECHNOLOGY_TEMPLATES: [Template; TEMPLATES_PER_SECTOR] = [
    |sector, pain| format!("Build a {sector} app that solves {pain} with automation"),
    |_, pain| format!("Create a tech tool that addresses {pain} using modern frameworks"),
    |_, pain| format!("Develop a software solution for {pain} optimization"),
];

fn templates_for(sector: Sector) -> &'static [Template; TEMPLATES_PER_SECTOR] {
    match sector {
        Sector::Finance => &FINANCE_TEMPLATES,
        Sector::SupplyChain => &SUPPLY_CHAIN_TEMPLATES,
        Sector::Healthcare => &HEALTHCARE_TEMPLATES,
        Sector::Technology => &TECHNOLOGY_TEMPLATES,
    }
}

/// Builds app-idea sentences.
///
/// The only nondeterminism is the template pick, which draws from the
/// caller's random source; [`IdeaSynthesizer::render`] is the deterministic
/// core used once an index is chosen.
#[derive(Debug, Clone, Copy, Default)]
pub struct IdeaSynthesizer;

impl IdeaSynthesizer {
    pub fn new() -> Self {
        Self
    }

    /// All template renderings for a sector tag, without suffixes.
    pub fn candidates(&self, sector_tag: &str, pain_point: &str) -> Vec<String> {
        (0..TEMPLATES_PER_SECTOR)
            .map(|index| self.render_base(sector_tag, pain_point, index))
            .collect()
    }

    fn render_base(&self, sector_tag: &str, pain_point: &str, index: usize) -> String {
        let templates = templates_for(Sector::resolve(sector_tag));
        let template = templates[index % TEMPLATES_PER_SECTOR];
        template(&sector_tag.to_lowercase(), &pain_point.to_lowercase())
    }

    /// Renders template `index` (taken modulo the template count) and
    /// appends the resource suffixes.
    pub fn render(
        &self,
        sector_tag: &str,
        pain_point: &str,
        index: usize,
        resources: &MatchedResources,
    ) -> String {
        let base = self.render_base(sector_tag, pain_point, index);
        append_suffixes(
            base,
            resources.repo.as_ref(),
            resources.model.as_ref(),
            resources.dataset.as_ref(),
        )
    }

    /// Picks a template uniformly from `rng` and renders it.
    pub fn generate_with_rng<R: Rng + ?Sized>(
        &self,
        sector_tag: &str,
        pain_point: &str,
        resources: &MatchedResources,
        rng: &mut R,
    ) -> String {
        let index = rng.gen_range(0..TEMPLATES_PER_SECTOR);
        debug!(sector = sector_tag, index, "Selected idea template");
        self.render(sector_tag, pain_point, index, resources)
    }

    /// Picks a template with the thread-local generator.
    pub fn generate(&self, sector_tag: &str, pain_point: &str, resources: &MatchedResources) -> String {
        self.generate_with_rng(sector_tag, pain_point, resources, &mut rand::thread_rng())
    }
}

fn append_suffixes(
    mut idea: String,
    repo: Option<&RepoDescriptor>,
    model: Option<&ModelDescriptor>,
    dataset: Option<&DatasetDescriptor>,
) -> String {
    if let Some(repo) = repo {
        idea.push_str(&format!(" (Built with {})", repo.language));
    }
    if let Some(model) = model {
        idea.push_str(&format!(" (Powered by {})", model.name));
    }
    if let Some(dataset) = dataset {
        idea.push_str(&format!(" (Data from {})", dataset.title));
    }
    idea
}

/// Generates an app idea for a pain point in a sector, decorated with
/// whichever resources are present.
pub fn generate_app_idea(
    pain_point: &str,
    sector: &str,
    repo: Option<&RepoDescriptor>,
    model: Option<&ModelDescriptor>,
    dataset: Option<&DatasetDescriptor>,
) -> String {
    let resources = MatchedResources {
        repo: repo.cloned(),
        model: model.cloned(),
        dataset: dataset.cloned(),
    };
    IdeaSynthesizer.generate(sector, pain_point, &resources)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_render_is_deterministic_for_an_index() {
        let synth = IdeaSynthesizer::new();
        let idea = synth.render("finance", "Expense Tracking", 0, &MatchedResources::none());
        assert_eq!(
            idea,
            "Build a finance app that helps users expense tracking with smart analytics"
        );
    }

    #[test]
    fn test_suffix_order_is_fixed() {
        let synth = IdeaSynthesizer::new();
        let resources = MatchedResources::none()
            .with_dataset(DatasetDescriptor::titled("Spending 2024"))
            .with_repo(RepoDescriptor::with_language("Rust"))
            .with_model(ModelDescriptor::named("finance-analyzer"));

        let idea = synth.render("finance", "budgeting", 2, &resources);
        assert_eq!(
            idea,
            "Develop a finance dashboard for budgeting management \
             (Built with Rust) (Powered by finance-analyzer) (Data from Spending 2024)"
        );
    }

    #[test]
    fn test_partial_resources() {
        let synth = IdeaSynthesizer::new();
        let resources = MatchedResources::none().with_dataset(DatasetDescriptor::titled("Ops Data"));
        let idea = synth.render("technology", "slow builds", 1, &resources);
        assert_eq!(
            idea,
            "Create a tech tool that addresses slow builds using modern frameworks (Data from Ops Data)"
        );
    }

    #[test]
    fn test_generate_with_seeded_rng_is_a_candidate() {
        let synth = IdeaSynthesizer::new();
        let candidates = synth.candidates("healthcare", "missed appointments");
        let mut rng = StdRng::seed_from_u64(7);
        for _ in 0..20 {
            let idea = synth.generate_with_rng(
                "healthcare",
                "missed appointments",
                &MatchedResources::none(),
                &mut rng,
            );
            assert!(candidates.contains(&idea), "unexpected idea: {}", idea);
        }
    }

    #[test]
    fn test_unknown_sector_uses_technology_templates_with_raw_tag() {
        let synth = IdeaSynthesizer::new();
        let candidates = synth.candidates("Unknown_Sector", "Slow Builds");
        assert_eq!(
            candidates[0],
            "Build a unknown_sector app that solves slow builds with automation"
        );
        assert_eq!(candidates[2], "Develop a software solution for slow builds optimization");
    }

    #[test]
    fn test_free_function_appends_repo_language() {
        let repo = RepoDescriptor::with_language("Python");
        let idea = generate_app_idea("expense tracking", "finance", Some(&repo), None, None);
        assert!(idea.ends_with("(Built with Python)"));
    }

    #[test]
    fn test_free_function_matches_a_rendering() {
        let resources = MatchedResources::none()
            .with_repo(RepoDescriptor::with_language("Go"))
            .with_model(ModelDescriptor::named("supply-chain-optimizer"))
            .with_dataset(DatasetDescriptor::titled("Freight Lanes"));
        let renderings: Vec<String> = (0..TEMPLATES_PER_SECTOR)
            .map(|i| IdeaSynthesizer.render("supply chain", "late deliveries", i, &resources))
            .collect();

        for _ in 0..10 {
            let idea = generate_app_idea(
                "late deliveries",
                "supply chain",
                resources.repo.as_ref(),
                resources.model.as_ref(),
                resources.dataset.as_ref(),
            );
            assert!(renderings.contains(&idea), "unexpected idea: {}", idea);
        }
    }

    #[test]
    fn test_padded_tag_uses_technology_templates() {
        let candidates = IdeaSynthesizer.candidates(" finance ", "x");
        assert_eq!(candidates[0], "Build a  finance  app that solves x with automation");
        assert_eq!(candidates[1], "Create a tech tool that addresses x using modern frameworks");
        assert!(candidates.iter().all(|c| !c.contains("financial")));
    }
}
