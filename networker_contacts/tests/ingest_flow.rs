//! Integration tests for the note ingestion flow.
//!
//! These tests verify that:
//! - A fresh note creates a contact, an interaction and no edge
//! - A known introducer produces an `introduced_by` edge
//! - A name collision defers to human confirmation without writing
//! - Both confirmation paths persist what they promise
//! - Records from an alternative extractor go through the same flow

use std::sync::Arc;

use chrono::{DateTime, TimeZone, Utc};
use networker_contacts::{Confirmation, MemoryContactStore, NoteIngestor, NoteOutcome};
use networker_core::{ContactRepo, ParsedNote, RelationType};

const ROI_NOTE: &str = "Roi Shikler רועי שיקלר is working at Mobileye as a product manager of parking products. I met him in XMafat conference and we scheduled a followup meeting for next Tuesday at 17:00";

fn sunday() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2024, 1, 7, 10, 0, 0)
        .single()
        .expect("valid test timestamp")
}

fn setup() -> (Arc<MemoryContactStore>, NoteIngestor) {
    let store = Arc::new(MemoryContactStore::new());
    let ingestor = NoteIngestor::new(store.clone());
    (store, ingestor)
}

#[tokio::test]
async fn test_new_note_creates_contact_and_interaction() {
    let (store, ingestor) = setup();

    let outcome = ingestor
        .submit("u1", ROI_NOTE, &sunday())
        .await
        .expect("submit should succeed");

    let NoteOutcome::Created {
        contact,
        interaction,
        edge,
    } = outcome
    else {
        panic!("expected a created contact");
    };

    assert_eq!(contact.english_name.as_deref(), Some("Roi Shikler"));
    assert_eq!(contact.hebrew_name.as_deref(), Some("רועי שיקלר"));
    assert_eq!(contact.company.as_deref(), Some("Mobileye"));
    assert_eq!(contact.how_met.as_deref(), Some("XMafat Conference"));
    assert_eq!(contact.tags, ["mobileye", "conference", "parking"]);
    assert_eq!(interaction.contact_id, contact.id);
    assert_eq!(interaction.body, "is as a . I and we scheduled a followup");
    assert!(edge.is_none());

    let stats = ingestor.stats("u1").await.expect("stats should load");
    assert_eq!(stats.total_contacts, 1);
    assert_eq!(stats.total_interactions, 1);
    assert_eq!(store.contact_count("u2").await.expect("count"), 0);
}

#[tokio::test]
async fn test_known_introducer_creates_edge() {
    let (store, ingestor) = setup();

    let gil = ingestor
        .submit("u1", "Gil Simsolo, CEO of a robotics startup", &sunday())
        .await
        .expect("submit should succeed");
    let gil = gil.contact().cloned().expect("gil should be created");

    let outcome = ingestor
        .submit(
            "u1",
            "Dana Levi, introduced by Gil Simsolo. Works on payments",
            &sunday(),
        )
        .await
        .expect("submit should succeed");

    let NoteOutcome::Created { contact, edge, .. } = outcome else {
        panic!("expected a created contact");
    };
    assert_eq!(contact.how_met.as_deref(), Some("Introduced by Gil Simsolo"));

    let edge = edge.expect("introducer edge should exist");
    assert_eq!(edge.source_contact_id, gil.id);
    assert_eq!(edge.target_contact_id, contact.id);
    assert_eq!(edge.relation_type, RelationType::IntroducedBy);
    assert_eq!(store.edges_for_contact(&gil.id).await.expect("edges").len(), 1);
}

#[tokio::test]
async fn test_unknown_introducer_creates_no_edge() {
    let (_store, ingestor) = setup();

    let outcome = ingestor
        .submit("u1", "Dana Levi, intro'd by Noa", &sunday())
        .await
        .expect("submit should succeed");

    let NoteOutcome::Created { contact, edge, .. } = outcome else {
        panic!("expected a created contact");
    };
    assert_eq!(contact.how_met.as_deref(), Some("Introduced by Noa"));
    assert!(edge.is_none());
}

#[tokio::test]
async fn test_duplicate_name_requires_confirmation() {
    let (store, ingestor) = setup();

    ingestor
        .submit("u1", ROI_NOTE, &sunday())
        .await
        .expect("first submit should succeed");

    let outcome = ingestor
        .submit("u1", "Roi Shikler now leads the parking team", &sunday())
        .await
        .expect("second submit should succeed");

    let NoteOutcome::NeedsConfirmation { parsed, duplicates } = outcome else {
        panic!("expected a confirmation request");
    };
    assert_eq!(parsed.english_name.as_deref(), Some("Roi Shikler"));
    assert_eq!(duplicates.len(), 1);
    assert_eq!(store.contact_count("u1").await.expect("count"), 1);
    assert_eq!(store.interaction_count("u1").await.expect("count"), 1);
}

#[tokio::test]
async fn test_duplicates_are_scoped_to_user() {
    let (_store, ingestor) = setup();

    ingestor
        .submit("u1", ROI_NOTE, &sunday())
        .await
        .expect("first submit should succeed");
    let outcome = ingestor
        .submit("u2", ROI_NOTE, &sunday())
        .await
        .expect("other user's submit should succeed");

    assert!(matches!(outcome, NoteOutcome::Created { .. }));
}

#[tokio::test]
async fn test_confirm_merge_appends_interaction() {
    let (store, ingestor) = setup();

    let existing = ingestor
        .submit("u1", ROI_NOTE, &sunday())
        .await
        .expect("first submit should succeed");
    let existing = existing.contact().cloned().expect("contact should exist");

    let body = "Roi Shikler sent the deck";
    let outcome = ingestor
        .submit("u1", body, &sunday())
        .await
        .expect("second submit should succeed");
    let NoteOutcome::NeedsConfirmation { parsed, .. } = outcome else {
        panic!("expected a confirmation request");
    };

    let merged = ingestor
        .confirm(
            "u1",
            Confirmation::Merge {
                contact_id: existing.id,
            },
            &parsed,
            body,
        )
        .await
        .expect("merge should succeed");

    let NoteOutcome::Merged {
        contact,
        interaction,
    } = merged
    else {
        panic!("expected a merge");
    };
    assert_eq!(contact.id, existing.id);
    assert_eq!(interaction.body, "sent the deck");

    let history = store
        .interactions_for_contact(&existing.id)
        .await
        .expect("interactions");
    assert_eq!(history.len(), 2);
    assert_eq!(store.contact_count("u1").await.expect("count"), 1);
}

#[tokio::test]
async fn test_confirm_create_new_skips_duplicate_check() {
    let (store, ingestor) = setup();

    ingestor
        .submit("u1", ROI_NOTE, &sunday())
        .await
        .expect("first submit should succeed");

    let body = "Roi Shikler from Waze, a different Roi";
    let NoteOutcome::NeedsConfirmation { parsed, .. } = ingestor
        .submit("u1", body, &sunday())
        .await
        .expect("second submit should succeed")
    else {
        panic!("expected a confirmation request");
    };

    let created = ingestor
        .confirm("u1", Confirmation::CreateNew, &parsed, body)
        .await
        .expect("create should succeed");

    let contact = created.contact().expect("contact should exist");
    assert_eq!(contact.company.as_deref(), Some("Waze"));
    assert_eq!(store.contact_count("u1").await.expect("count"), 2);
}

#[tokio::test]
async fn test_alternative_extractor_record_is_ingested() {
    let (_store, ingestor) = setup();

    let parsed = ParsedNote {
        english_name: Some("Maya Cohen".to_string()),
        company: Some("Lightricks".to_string()),
        tags: vec!["lightricks".to_string()],
        remaining_text: "talked about video tooling".to_string(),
        ..ParsedNote::default()
    };

    let outcome = ingestor
        .submit_parsed("u1", "raw note text", parsed)
        .await
        .expect("submit should succeed");

    let NoteOutcome::Created {
        contact,
        interaction,
        ..
    } = outcome
    else {
        panic!("expected a created contact");
    };
    assert_eq!(contact.company.as_deref(), Some("Lightricks"));
    assert_eq!(interaction.body, "talked about video tooling");
}
