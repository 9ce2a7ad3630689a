use std::io::Read;

use chrono::DateTime;
use networker_config::Config;
use networker_parser::ParserOptions;
use tracing::debug;

/// Input parameters for the Parse command strategy.
#[derive(Debug, Clone)]
pub struct ParseInput {
    /// Note text; stdin is read when absent.
    pub text: Option<String>,
    /// RFC 3339 reference moment overriding the current time.
    pub now: Option<String>,
    pub legacy_tags: bool,
}

/// Strategy for parsing one note and printing the record as JSON.
#[derive(Debug, Clone, Copy)]
pub struct ParseStrategy;

impl super::CommandStrategy for ParseStrategy {
    type Input = ParseInput;

    async fn execute(&self, input: Self::Input) -> anyhow::Result<()> {
        let config = Config::load_or_default()?;

        let text = match input.text {
            Some(text) => text,
            None => {
                let mut buf = String::new();
                std::io::stdin().read_to_string(&mut buf)?;
                buf
            }
        };

        let now = match input.now.as_deref() {
            Some(raw) => DateTime::parse_from_rfc3339(raw)
                .map_err(|e| anyhow::anyhow!("Invalid --now value {raw:?}: {e}"))?,
            None => super::local_now(&config)?,
        };
        debug!(%now, "Parsing note");

        let parser = if input.legacy_tags {
            networker_parser::NoteParser::new(ParserOptions::legacy())
        } else {
            super::parser_from(&config)
        };

        let note = parser.parse(text.trim_end_matches(['\r', '\n']), &now);
        println!("{}", serde_json::to_string_pretty(&note)?);
        Ok(())
    }
}
