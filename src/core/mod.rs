//! Core business logic
//!
//! The anonymization engine, the player roster, document I/O, and the run
//! summary.

pub mod anonymize;
pub mod document;

pub use anonymize::{anonymize_document, anonymize_file, AnonymizeSummary, PlayerRoster};
