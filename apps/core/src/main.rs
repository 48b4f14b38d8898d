// Inspire CLI entry point

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use rand::rngs::StdRng;
use rand::SeedableRng;
use serde::Serialize;
use serde_json::json;
use tracing::{debug, info};

use inspire_core::analysis::{IdeaAnalyzer, PainPointClassifier};
use inspire_core::config::{AppConfig, LogFormat};
use inspire_core::generation::{generate_prototype, generate_prototype_bundle, IdeaSynthesizer, Sector};
use inspire_core::library::IdeaLibrary;
use inspire_core::logging::init_logging;
use inspire_core::resources::{
    discover_tech_needs, DatasetDescriptor, MatchedResources, MockCatalog, ModelDescriptor,
    RepoDescriptor, ResourceMatcher,
};
use inspire_core::simulation::{
    simulate_dataset_integration, simulate_inference, simulate_processing,
    simulate_repo_integration,
};

#[derive(Parser)]
#[command(name = "inspire")]
#[command(about = "Turn problem descriptions into sector-specific app ideas")]
#[command(version)]
struct Cli {
    /// Log output format (pretty, json, bunyan); overrides INSPIRE_LOG_FORMAT
    #[arg(long, global = true)]
    log_format: Option<LogFormat>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Rank the keywords of a text
    Keywords {
        text: String,
    },
    /// Check whether a text describes a pain point
    Classify {
        text: String,
    },
    /// Generate an app idea for a pain point
    Idea {
        text: String,
        /// Sector tag (finance, healthcare, supply chain, technology)
        #[arg(long)]
        sector: String,
        /// Language of a matched repository
        #[arg(long)]
        repo_language: Option<String>,
        /// Name of a matched model
        #[arg(long)]
        model: Option<String>,
        /// Title of a matched dataset
        #[arg(long)]
        dataset: Option<String>,
        /// Seed for the template pick
        #[arg(long)]
        seed: Option<u64>,
    },
    /// Print the form bundle for a sector
    Bundle {
        #[arg(long)]
        sector: String,
    },
    /// Run the full analysis on a prompt
    Analyze {
        text: String,
        #[arg(long)]
        sector: String,
        /// Store the result in the idea library
        #[arg(long)]
        save: bool,
        #[arg(long)]
        seed: Option<u64>,
    },
    /// Discover tech needs and prototypes from sample community posts
    Discover {
        #[arg(long)]
        sector: String,
        #[arg(long)]
        seed: Option<u64>,
    },
    /// Run canned prototype simulations
    Simulate {
        #[command(subcommand)]
        simulate_command: SimulateCommands,
    },
    /// Manage saved ideas
    Library {
        #[command(subcommand)]
        library_command: LibraryCommands,
    },
}

#[derive(Subcommand)]
enum LibraryCommands {
    /// List saved ideas, oldest first
    List,
    /// Remove a saved idea by id
    Remove {
        id: String,
    },
    /// Remove every saved idea
    Clear,
}

#[derive(Subcommand)]
enum SimulateCommands {
    /// Run the canned sector analysis on an input
    Process {
        input: String,
        #[arg(long)]
        sector: String,
        /// Model name reported in the result
        #[arg(long, default_value = "default-model")]
        model: String,
        #[arg(long)]
        seed: Option<u64>,
    },
    /// Print the fixed inference payload for a sector
    Inference {
        #[arg(long)]
        sector: String,
        #[arg(long, default_value = "default-model")]
        model: String,
    },
    /// Report how the catalog repository for a sector would be integrated
    Repo {
        #[arg(long)]
        sector: String,
        /// Keywords passed to the catalog lookup
        #[arg(long = "keyword")]
        keywords: Vec<String>,
        #[arg(long)]
        seed: Option<u64>,
    },
    /// Report how the first catalog dataset for a sector would be integrated
    Dataset {
        #[arg(long)]
        sector: String,
        #[arg(long = "keyword")]
        keywords: Vec<String>,
        #[arg(long)]
        seed: Option<u64>,
    },
}

fn catalog_for(seed: Option<u64>) -> MockCatalog {
    match seed {
        Some(seed) => MockCatalog::seeded(seed),
        None => MockCatalog::new(),
    }
}

fn rng_for(seed: Option<u64>) -> StdRng {
    match seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    }
}

fn emit<T: Serialize + ?Sized>(value: &T) -> Result<()> {
    let out = serde_json::to_string_pretty(value).context("Failed to serialize output")?;
    println!("{}", out);
    Ok(())
}

fn open_library(config: &AppConfig) -> Result<IdeaLibrary> {
    IdeaLibrary::open_in(&config.data_dir, config.library_capacity)
        .with_context(|| format!("Failed to open idea library in {}", config.data_dir.display()))
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let mut config = AppConfig::from_env().context("Invalid configuration")?;
    if let Some(format) = cli.log_format {
        config.log_format = format;
    }
    init_logging(config.log_format)?;
    debug!(?config, "Loaded configuration");

    let analyzer = IdeaAnalyzer::from_config(&config);

    match cli.command {
        Commands::Keywords { text } => {
            emit(&analyzer.keyword_extractor().extract(&text))?;
        }
        Commands::Classify { text } => {
            let verdict = PainPointClassifier.classify(&text);
            emit(&json!({
                "is_pain_point": verdict.is_pain_point(),
                "verdict": verdict,
            }))?;
        }
        Commands::Idea {
            text,
            sector,
            repo_language,
            model,
            dataset,
            seed,
        } => {
            let resources = MatchedResources {
                repo: repo_language.map(RepoDescriptor::with_language),
                model: model.map(ModelDescriptor::named),
                dataset: dataset.map(DatasetDescriptor::titled),
            };
            let idea =
                IdeaSynthesizer.generate_with_rng(&sector, &text, &resources, &mut rng_for(seed));
            emit(&json!({ "sector": sector, "idea": idea }))?;
        }
        Commands::Bundle { sector } => {
            emit(&generate_prototype_bundle(&sector))?;
        }
        Commands::Analyze {
            text,
            sector,
            save,
            seed,
        } => {
            let card = analyzer.analyze_with_rng(
                &text,
                &sector,
                MatchedResources::none(),
                &mut rng_for(seed),
            );
            if save {
                let mut library = open_library(&config)?;
                library.save(card.clone())?;
                info!(id = %card.id, path = %library.path().display(), "Saved idea");
            }
            emit(&card)?;
        }
        Commands::Discover { sector, seed } => {
            let sector = Sector::resolve(&sector);
            let catalog = catalog_for(seed);
            let needs = discover_tech_needs(&catalog, sector, &mut rng_for(seed)).await;
            let report: Vec<_> = needs
                .iter()
                .map(|need| json!({ "tech_need": need, "prototype": generate_prototype(need) }))
                .collect();
            emit(&report)?;
        }
        Commands::Simulate { simulate_command } => match simulate_command {
            SimulateCommands::Process {
                input,
                sector,
                model,
                seed,
            } => {
                let result = simulate_processing(
                    &input,
                    Sector::resolve(&sector),
                    &model,
                    &mut rng_for(seed),
                );
                emit(&result)?;
            }
            SimulateCommands::Inference { sector, model } => {
                emit(&simulate_inference(&model, Sector::resolve(&sector)))?;
            }
            SimulateCommands::Repo {
                sector,
                keywords,
                seed,
            } => {
                let sector = Sector::resolve(&sector);
                let repos = catalog_for(seed).find_repos(&keywords, sector, 1).await?;
                let repo = repos
                    .first()
                    .with_context(|| format!("No catalog repository for {}", sector))?;
                emit(&simulate_repo_integration(repo, sector, &mut rng_for(seed)))?;
            }
            SimulateCommands::Dataset {
                sector,
                keywords,
                seed,
            } => {
                let sector = Sector::resolve(&sector);
                let datasets = catalog_for(seed).find_datasets(&keywords, sector, 1).await?;
                let dataset = datasets
                    .first()
                    .with_context(|| format!("No catalog dataset for {}", sector))?;
                emit(&simulate_dataset_integration(dataset, sector))?;
            }
        },
        Commands::Library { library_command } => {
            let mut library = open_library(&config)?;
            match library_command {
                LibraryCommands::List => emit(library.list())?,
                LibraryCommands::Remove { id } => {
                    let removed = library.remove(&id)?;
                    emit(&removed)?;
                }
                LibraryCommands::Clear => {
                    let count = library.clear()?;
                    emit(&json!({ "removed": count }))?;
                }
            }
        }
    }

    Ok(())
}
