//! Static strategy pattern for CLI commands.
//!
//! Each command is a separate strategy type with its own input, so dispatch
//! in `main` is resolved at compile time.

use chrono::{DateTime, FixedOffset, Utc};
use networker_config::Config;
use networker_parser::NoteParser;

mod info;
mod ingest;
mod init;
mod parse;
mod version;

pub use info::InfoStrategy;
pub use ingest::{IngestInput, IngestStrategy};
pub use init::InitStrategy;
pub use parse::{ParseInput, ParseStrategy};
pub use version::VersionStrategy;

/// Contract shared by all command strategies.
pub trait CommandStrategy: Send + Sync + 'static {
    /// The input type this strategy accepts.
    type Input;

    /// Execute the command with the given input.
    ///
    /// # Errors
    /// Returns an error if command execution fails.
    async fn execute(&self, input: Self::Input) -> anyhow::Result<()>;
}

/// Current moment in the configured local offset.
fn local_now(config: &Config) -> anyhow::Result<DateTime<FixedOffset>> {
    let offset = config.parser.offset()?;
    Ok(Utc::now().with_timezone(&offset))
}

fn parser_from(config: &Config) -> NoteParser {
    NoteParser::new(config.parser.options())
}
