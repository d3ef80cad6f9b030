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

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use tracing::Level;
use tracing_subscriber::FmtSubscriber;

use crate::command::{
    CommandStrategy, GetInput, GetStrategy, ImportInput, ImportStrategy, InfoStrategy,
    InitStrategy, LookupInput, LookupStrategy, StatsInput, StatsStrategy, VersionStrategy,
};

mod command;

#[derive(Parser)]
#[command(name = "seqstat")]
#[command(
    about = "Number extraction, descriptive statistics and sequence catalog lookup",
    long_about = None
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Extract numbers from text and print descriptive statistics
    Stats {
        /// Text to analyze (reads stdin when omitted)
        #[arg(short, long)]
        text: Option<String>,

        /// Analyze line by line as a grid
        #[arg(short, long)]
        grid: bool,
    },
    /// Find catalog sequences starting with the numbers in a query
    Lookup {
        /// Free-form query text containing the prefix terms
        query: String,

        /// Maximum number of matches
        #[arg(short, long)]
        limit: Option<u64>,
    },
    /// Fetch a single catalog sequence by its external id
    Get {
        /// External identifier, e.g. A000045
        a_id: String,
    },
    /// Load a stripped-format sequence file into the catalog
    Import {
        /// Path to the stripped-format file
        path: PathBuf,
    },
    /// Show configuration and catalog connectivity
    Info,
    /// Initialize configuration
    Init,
    /// Show version
    Version,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let subscriber = FmtSubscriber::builder()
        .with_max_level(Level::INFO)
        .finish();

    tracing::subscriber::set_global_default(subscriber)?;

    let cli = Cli::parse();

    match cli.command {
        Commands::Stats { text, grid } => StatsStrategy.execute(StatsInput { text, grid }).await,
        Commands::Lookup { query, limit } => {
            LookupStrategy.execute(LookupInput { query, limit }).await
        }
        Commands::Get { a_id } => GetStrategy.execute(GetInput { a_id }).await,
        Commands::Import { path } => ImportStrategy.execute(ImportInput { path }).await,
        Commands::Info => InfoStrategy.execute(()).await,
        Commands::Init => InitStrategy.execute(()).await,
        Commands::Version => VersionStrategy.execute(()).await,
    }
}
