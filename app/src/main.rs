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

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use command::{
    CommandStrategy, InfoStrategy, IngestInput, IngestStrategy, InitStrategy, ParseInput,
    ParseStrategy, VersionStrategy,
};
use tracing_subscriber::{EnvFilter, FmtSubscriber};

#[derive(Parser)]
#[command(name = "networker")]
#[command(about = "Turn free-text networking notes into contact records", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Parse a single note and print the extracted fields as JSON
    Parse {
        /// Note text; read from stdin when omitted
        text: Option<String>,

        /// Reference moment for relative dates (RFC 3339)
        #[arg(long)]
        now: Option<String>,

        /// Keep repeated tags
        #[arg(long)]
        legacy_tags: bool,
    },
    /// Ingest a file of notes, one per line, into an in-memory contact book
    Ingest {
        /// File with one note per line
        file: PathBuf,

        /// Owner of the created contacts
        #[arg(short, long)]
        user: Option<String>,
    },
    /// Initialize configuration
    Init,
    /// Show configuration
    Info,
    /// Show version
    Version,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let subscriber = FmtSubscriber::builder()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .finish();

    tracing::subscriber::set_global_default(subscriber)?;

    let cli = Cli::parse();

    match cli.command {
        Commands::Parse {
            text,
            now,
            legacy_tags,
        } => {
            ParseStrategy
                .execute(ParseInput {
                    text,
                    now,
                    legacy_tags,
                })
                .await
        }
        Commands::Ingest { file, user } => {
            IngestStrategy.execute(IngestInput { file, user }).await
        }
        Commands::Init => InitStrategy.execute(()).await,
        Commands::Info => InfoStrategy.execute(()).await,
        Commands::Version => VersionStrategy.execute(()).await,
    }
}
