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
    CommandStrategy, ExpandInput, ExpandStrategy, ExtractInput, ExtractStrategy, GrepInput,
    GrepStrategy, InfoStrategy, InitStrategy, ParseStrategy, VersionStrategy,
};
use newsfacts_config::Config;
use std::path::PathBuf;
use tracing_subscriber::{EnvFilter, FmtSubscriber};

#[derive(Parser)]
#[command(name = "newsfacts")]
#[command(about = "Birth facts and semantic search over Russian news", long_about = None)]
struct Cli {
    /// Config file (default: ~/newsfacts/config.json)
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Extract birth facts from a corpus
    Extract {
        /// Corpus file (default: corpus.path from config)
        path: Option<PathBuf>,

        /// Print one JSON object per fact
        #[arg(long)]
        json: bool,
    },
    /// Extract birth facts from a single text
    Parse {
        /// Text to parse
        text: String,
    },
    /// Search the corpus for lines related to query words
    Grep {
        /// Corpus file (default: corpus.path from config)
        #[arg(short = 'C', long)]
        corpus: Option<PathBuf>,

        /// Query words, searched one after another
        #[arg(required = true)]
        queries: Vec<String>,
    },
    /// Show the semantic expansion of a query word
    Expand {
        /// Corpus file (default: corpus.path from config)
        #[arg(short = 'C', long)]
        corpus: Option<PathBuf>,

        /// Query word
        query: String,
    },
    /// Initialize configuration
    Init,
    /// Show effective configuration
    Info,
    /// Show version
    Version,
}

fn main() -> anyhow::Result<()> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let subscriber = FmtSubscriber::builder()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .finish();

    tracing::subscriber::set_global_default(subscriber)?;

    let cli = Cli::parse();
    let config_path = cli.config.as_deref();

    match cli.command {
        Commands::Extract { path, json } => {
            let config = Config::load(config_path)?;
            ExtractStrategy.execute(ExtractInput { config, path, json })
        }
        Commands::Parse { text } => {
            let config = Config::load(config_path)?;
            ParseStrategy.execute((config, text))
        }
        Commands::Grep { corpus, queries } => {
            let config = Config::load(config_path)?;
            GrepStrategy.execute(GrepInput {
                config,
                corpus,
                queries,
            })
        }
        Commands::Expand { corpus, query } => {
            let config = Config::load(config_path)?;
            ExpandStrategy.execute(ExpandInput {
                config,
                corpus,
                query,
            })
        }
        Commands::Init => InitStrategy.execute(()),
        Commands::Info => InfoStrategy.execute(config_path.map(PathBuf::from)),
        Commands::Version => VersionStrategy.execute(()),
    }
}
