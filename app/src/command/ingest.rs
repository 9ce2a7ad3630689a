use std::path::PathBuf;
use std::sync::Arc;

use networker_config::Config;
use networker_contacts::{Confirmation, MemoryContactStore, NoteIngestor, NoteOutcome};
use networker_core::{ContactRepo, Edge};
use tracing::{info, warn};

/// Input parameters for the Ingest command strategy.
#[derive(Debug, Clone)]
pub struct IngestInput {
    /// File with one note per line.
    pub file: PathBuf,
    /// Owner of the contacts; falls back to `user.default_user_id`.
    pub user: Option<String>,
}

/// Strategy for feeding a file of notes through the ingestion flow.
///
/// Runs against an in-memory store. Notes naming an existing contact are
/// merged into the first match, standing in for the interactive
/// confirmation step.
#[derive(Debug, Clone, Copy)]
pub struct IngestStrategy;

impl super::CommandStrategy for IngestStrategy {
    type Input = IngestInput;

    async fn execute(&self, input: Self::Input) -> anyhow::Result<()> {
        let config = Config::load_or_default()?;
        let user_id = input
            .user
            .unwrap_or_else(|| config.user.default_user_id.clone());

        let content = tokio::fs::read_to_string(&input.file).await?;
        info!("Ingesting notes from {}", input.file.display());

        let store = Arc::new(MemoryContactStore::new());
        let ingestor =
            NoteIngestor::new(store.clone()).with_parser(super::parser_from(&config));
        let now = super::local_now(&config)?;

        for (index, line) in content.lines().enumerate() {
            let body = line.trim();
            if body.is_empty() {
                continue;
            }

            match ingestor.submit(&user_id, body, &now).await? {
                NoteOutcome::NeedsConfirmation { parsed, duplicates } => {
                    let Some(target) = duplicates.first() else {
                        warn!(line = index + 1, "Duplicate check returned no contacts");
                        continue;
                    };
                    ingestor
                        .confirm(
                            &user_id,
                            Confirmation::Merge {
                                contact_id: target.id,
                            },
                            &parsed,
                            body,
                        )
                        .await?;
                }
                NoteOutcome::Created { .. } | NoteOutcome::Merged { .. } => {}
            }
        }

        let contacts = store
            .list_contacts(&user_id, config.contacts.list_limit, 0)
            .await?;
        let mut edges: Vec<Edge> = Vec::new();
        for contact in &contacts {
            for edge in store.edges_for_contact(&contact.id).await? {
                if !edges.iter().any(|e| e.id == edge.id) {
                    edges.push(edge);
                }
            }
        }
        let stats = ingestor.stats(&user_id).await?;

        let report = serde_json::json!({
            "contacts": contacts,
            "edges": edges,
            "stats": stats,
        });
        println!("{}", serde_json::to_string_pretty(&report)?);
        Ok(())
    }
}
