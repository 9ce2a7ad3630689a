//! Note submission flow: parse, check for duplicates, then persist.

use std::sync::Arc;

use chrono::{DateTime, TimeZone};
use networker_core::{
    Contact, ContactRepo, Edge, Interaction, NewContact, NewEdge, NewInteraction, ParsedNote,
    RelationType,
};
use networker_parser::NoteParser;
use serde::{Deserialize, Serialize};
use tracing::{debug, info};
use uuid::Uuid;

use crate::error::{IngestError, Result};

/// Result of submitting a note.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum NoteOutcome {
    /// Existing contacts share the parsed name; nothing was written.
    NeedsConfirmation {
        parsed: ParsedNote,
        duplicates: Vec<Contact>,
    },
    /// A new contact was created with its first interaction.
    Created {
        contact: Contact,
        interaction: Interaction,
        edge: Option<Edge>,
    },
    /// The note was appended to an existing contact.
    Merged {
        contact: Contact,
        interaction: Interaction,
    },
}

impl NoteOutcome {
    #[must_use]
    pub const fn contact(&self) -> Option<&Contact> {
        match self {
            Self::NeedsConfirmation { .. } => None,
            Self::Created { contact, .. } | Self::Merged { contact, .. } => Some(contact),
        }
    }
}

/// The human decision taken after a duplicate warning.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "action", rename_all = "snake_case")]
pub enum Confirmation {
    /// Attach the note to this existing contact.
    Merge { contact_id: Uuid },
    /// Create a separate contact anyway.
    CreateNew,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct NetworkStats {
    pub total_contacts: usize,
    pub total_interactions: usize,
}

/// Drives note submission against a [`ContactRepo`].
pub struct NoteIngestor {
    repo: Arc<dyn ContactRepo>,
    parser: NoteParser,
}

impl NoteIngestor {
    #[must_use]
    pub fn new(repo: Arc<dyn ContactRepo>) -> Self {
        Self {
            repo,
            parser: NoteParser::default(),
        }
    }

    #[must_use]
    pub fn with_parser(mut self, parser: NoteParser) -> Self {
        self.parser = parser;
        self
    }

    /// Parse `body` and either create a contact or ask for confirmation.
    pub async fn submit<Tz: TimeZone>(
        &self,
        user_id: &str,
        body: &str,
        now: &DateTime<Tz>,
    ) -> Result<NoteOutcome> {
        let parsed = self.parser.parse(body, now);
        self.submit_parsed(user_id, body, parsed).await
    }

    /// Same as [`submit`](Self::submit) for a record produced elsewhere,
    /// such as a model-based extractor.
    pub async fn submit_parsed(
        &self,
        user_id: &str,
        body: &str,
        parsed: ParsedNote,
    ) -> Result<NoteOutcome> {
        if body.trim().is_empty() {
            return Err(IngestError::EmptyNote);
        }

        if let Some(name) = parsed.display_name() {
            let duplicates = self.repo.find_contacts_by_name(user_id, name).await?;
            if !duplicates.is_empty() {
                info!(
                    user_id,
                    name,
                    count = duplicates.len(),
                    "Possible duplicate contact, confirmation required"
                );
                return Ok(NoteOutcome::NeedsConfirmation { parsed, duplicates });
            }
        }

        self.create_from_parsed(user_id, body, &parsed).await
    }

    /// Apply the user's decision for a note that matched existing contacts.
    pub async fn confirm(
        &self,
        user_id: &str,
        confirmation: Confirmation,
        parsed: &ParsedNote,
        body: &str,
    ) -> Result<NoteOutcome> {
        match confirmation {
            Confirmation::Merge { contact_id } => {
                let contact = self
                    .repo
                    .get_contact(&contact_id, user_id)
                    .await?
                    .ok_or(IngestError::ContactNotFound(contact_id))?;
                let interaction = self.add_interaction(contact.id, parsed, body).await?;
                info!(user_id, %contact_id, "Merged note into existing contact");
                Ok(NoteOutcome::Merged {
                    contact,
                    interaction,
                })
            }
            Confirmation::CreateNew => self.create_from_parsed(user_id, body, parsed).await,
        }
    }

    pub async fn stats(&self, user_id: &str) -> Result<NetworkStats> {
        Ok(NetworkStats {
            total_contacts: self.repo.contact_count(user_id).await?,
            total_interactions: self.repo.interaction_count(user_id).await?,
        })
    }

    async fn create_from_parsed(
        &self,
        user_id: &str,
        body: &str,
        parsed: &ParsedNote,
    ) -> Result<NoteOutcome> {
        let contact = self
            .repo
            .create_contact(NewContact::from_parsed(user_id, parsed))
            .await?;
        let interaction = self.add_interaction(contact.id, parsed, body).await?;
        let edge = self.link_introducer(user_id, &contact, parsed).await?;

        info!(
            user_id,
            contact_id = %contact.id,
            introduced = edge.is_some(),
            "Created contact from note"
        );
        Ok(NoteOutcome::Created {
            contact,
            interaction,
            edge,
        })
    }

    async fn add_interaction(
        &self,
        contact_id: Uuid,
        parsed: &ParsedNote,
        body: &str,
    ) -> Result<Interaction> {
        let text = if parsed.remaining_text.is_empty() {
            body
        } else {
            parsed.remaining_text.as_str()
        };
        let interaction = self
            .repo
            .create_interaction(NewInteraction {
                contact_id,
                body: text.to_string(),
                occurred_at: None,
            })
            .await?;
        Ok(interaction)
    }

    /// Edge from the first existing contact matching the introducer's name.
    async fn link_introducer(
        &self,
        user_id: &str,
        contact: &Contact,
        parsed: &ParsedNote,
    ) -> Result<Option<Edge>> {
        let Some(introducer) = parsed.introduced_by.as_deref() else {
            return Ok(None);
        };

        let candidates = self
            .repo
            .find_contacts_by_name(user_id, introducer)
            .await?;
        let Some(source) = candidates.iter().find(|c| c.id != contact.id) else {
            debug!(introducer, "Introducer is not a known contact");
            return Ok(None);
        };

        let edge = self
            .repo
            .create_edge(NewEdge {
                source_contact_id: source.id,
                target_contact_id: contact.id,
                relation_type: RelationType::IntroducedBy,
            })
            .await?;
        Ok(Some(edge))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::MemoryContactStore;
    use chrono::Utc;

    fn ingestor() -> NoteIngestor {
        NoteIngestor::new(Arc::new(MemoryContactStore::new()))
    }

    #[tokio::test]
    async fn blank_note_is_rejected() {
        let result = ingestor().submit("u1", "   ", &Utc::now()).await;
        assert!(matches!(result, Err(IngestError::EmptyNote)));
    }

    #[tokio::test]
    async fn interaction_falls_back_to_body_when_everything_was_consumed() -> anyhow::Result<()> {
        let ingestor = ingestor();
        let outcome = ingestor.submit("u1", "Dana Levi", &Utc::now()).await?;
        let NoteOutcome::Created { interaction, .. } = outcome else {
            panic!("expected a created contact");
        };
        assert_eq!(interaction.body, "Dana Levi");
        Ok(())
    }

    #[tokio::test]
    async fn merge_into_foreign_contact_is_not_found() -> anyhow::Result<()> {
        let ingestor = ingestor();
        let outcome = ingestor.submit("owner", "Dana Levi, CTO", &Utc::now()).await?;
        let contact_id = outcome.contact().map(|c| c.id).unwrap_or_default();

        let result = ingestor
            .confirm(
                "intruder",
                Confirmation::Merge { contact_id },
                &ParsedNote::default(),
                "hello",
            )
            .await;
        assert!(matches!(result, Err(IngestError::ContactNotFound(id)) if id == contact_id));
        Ok(())
    }

    #[test]
    #[expect(clippy::expect_used, reason = "Test failure should panic with context")]
    fn confirmation_uses_tagged_json() {
        let json = r#"{"action":"merge","contact_id":"0190a5b4-1c2d-7000-8000-000000000000"}"#;
        let merge: Confirmation = serde_json::from_str(json).expect("merge should parse");
        assert!(matches!(merge, Confirmation::Merge { .. }));

        let json = r#"{"action":"create_new"}"#;
        let create: Confirmation = serde_json::from_str(json).expect("create should parse");
        assert_eq!(create, Confirmation::CreateNew);
    }
}
