#![deny(
    clippy::all,
    clippy::nursery,
    clippy::pedantic,
    clippy::style,
    clippy::complexity,
    clippy::perf,
    clippy::correctness,
    clippy::suspicious,
    clippy::unwrap_used,
    clippy::expect_used
)]
#![allow(
    clippy::similar_names,
    clippy::missing_safety_doc,
    clippy::missing_panics_doc,
    clippy::missing_errors_doc
)]

mod command;

use clap::{Parser, Subcommand};
use command::{
    CatalogInput, CatalogStrategy, CommandStrategy, ConceptsInput, ConceptsStrategy, InfoStrategy,
    InitStrategy, MatchInput, MatchStrategy, RemixInput, RemixStrategy, SuggestInput,
    SuggestStrategy, VersionStrategy,
};
use gamematch_config::Config;
use std::path::PathBuf;
use tracing_subscriber::{EnvFilter, FmtSubscriber};

#[derive(Parser)]
#[command(name = "gamematch")]
#[command(about = "Match game ideas to playable templates", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Find the best game template for a prompt
    Match {
        prompt: String,

        /// Resolve the match through the advisor
        #[arg(long)]
        advisor: bool,

        #[arg(long)]
        json: bool,
    },
    /// List the top-scoring games for a prompt
    Suggest {
        prompt: String,

        /// Maximum number of suggestions (defaults to matcher.suggestion_limit)
        #[arg(short = 'n', long)]
        limit: Option<usize>,

        #[arg(long)]
        json: bool,
    },
    /// Extract gameplay concepts from a prompt
    Concepts {
        prompt: String,

        #[arg(long)]
        json: bool,
    },
    /// Browse the built-in game catalog
    Catalog {
        /// Exact category name, e.g. Puzzle
        #[arg(short = 'c', long)]
        category: Option<String>,

        /// easy, medium or hard
        #[arg(short = 'd', long)]
        difficulty: Option<String>,

        /// Case-insensitive search over name, description and tags
        #[arg(short = 's', long)]
        search: Option<String>,

        #[arg(long)]
        json: bool,
    },
    /// Package a game source file as a remix
    Remix {
        /// Game source file
        file: PathBuf,

        #[arg(long)]
        name: Option<String>,

        #[arg(long)]
        description: Option<String>,

        #[arg(long)]
        json: bool,
    },
    /// Show configuration
    Info,
    /// Initialize configuration
    Init,
    /// Show version
    Version,
}

fn init_tracing() -> anyhow::Result<()> {
    let level = Config::load_or_default()
        .map(|config| config.logging.level)
        .unwrap_or_else(|_| "info".to_string());
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));

    let subscriber = FmtSubscriber::builder()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .finish();

    tracing::subscriber::set_global_default(subscriber)?;
    Ok(())
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    init_tracing()?;

    let cli = Cli::parse();

    match cli.command {
        Commands::Match {
            prompt,
            advisor,
            json,
        } => {
            MatchStrategy
                .execute(MatchInput {
                    prompt,
                    advisor,
                    json,
                })
                .await?;
        }
        Commands::Suggest {
            prompt,
            limit,
            json,
        } => {
            SuggestStrategy
                .execute(SuggestInput {
                    prompt,
                    limit,
                    json,
                })
                .await?;
        }
        Commands::Concepts { prompt, json } => {
            ConceptsStrategy
                .execute(ConceptsInput { prompt, json })
                .await?;
        }
        Commands::Catalog {
            category,
            difficulty,
            search,
            json,
        } => {
            CatalogStrategy
                .execute(CatalogInput {
                    category,
                    difficulty,
                    search,
                    json,
                })
                .await?;
        }
        Commands::Remix {
            file,
            name,
            description,
            json,
        } => {
            RemixStrategy
                .execute(RemixInput {
                    file,
                    name,
                    description,
                    json,
                })
                .await?;
        }
        Commands::Info => InfoStrategy.execute(()).await?,
        Commands::Init => InitStrategy.execute(()).await?,
        Commands::Version => VersionStrategy.execute(()).await?,
    }

    Ok(())
}
