//! Rule-based extraction of contact fields from free-text notes.
//!
//! A note such as `"Dana Levi from Acme Labs, CTO. Intro'd by Gil Simsolo"`
//! becomes a [`ParsedNote`] with names, company, title, introducer, meeting
//! context, a resolved follow-up date and topical tags. Everything that was
//! not consumed by a field is kept as `remaining_text`.
//!
//! The parser is pure: no I/O, no shared state, and the only input besides
//! the text is the reference moment used to resolve `next <weekday>`.

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

pub mod date;
mod parser;
pub mod patterns;
mod spans;

pub use date::{WEEKDAYS, resolve_relative_date};
pub use networker_core::ParsedNote;
pub use parser::{NoteParser, ParserOptions, parse_note};
