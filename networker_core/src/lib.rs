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

pub mod contact;
pub mod note;
pub mod repository;

pub use contact::{
    Contact, ContactUpdate, Edge, Interaction, NewContact, NewEdge, NewInteraction, RelationType,
};
pub use note::ParsedNote;
pub use repository::ContactRepo;
