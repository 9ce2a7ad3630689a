//! Turning parsed notes into contacts, interactions and introduction edges.

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

mod error;
mod ingest;
mod store;

pub use error::{IngestError, Result};
pub use ingest::{Confirmation, NetworkStats, NoteIngestor, NoteOutcome};
pub use store::MemoryContactStore;
