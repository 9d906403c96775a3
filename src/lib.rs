// Veil - Game Log Anonymizer
// Copyright (c) 2025 Veil Contributors
// Licensed under the MIT License

//! # Veil - Game Log Anonymizer
//!
//! Veil strips personally identifying player names from quiz-game session
//! logs, replacing them with stable numeric identifiers and dropping the
//! per-round score tables. One document in, one document out; everything not
//! explicitly sensitive passes through untouched.
//!
//! ## Architecture
//!
//! Veil follows a layered architecture:
//!
//! - [`cli`] - Command-line interface and argument parsing
//! - [`core`] - Business logic (roster, engine, document I/O, summary)
//! - [`domain`] - Core domain types and errors
//! - [`logging`] - Structured logging
//!
//! ## Quick Start
//!
//! ```rust
//! use veil::core::anonymize::anonymize_document;
//! use serde_json::json;
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let mut doc = json!({
//!     "playerData": {"alice": 1, "bob": 2},
//!     "roundData": [{"scores": [10, 20], "playerNames": ["alice", "bob"]}, null]
//! });
//!
//! let summary = anonymize_document(&mut doc)?;
//! assert_eq!(summary.players_mapped, 2);
//! assert_eq!(doc, json!({"roundData": [{"playerNames": ["0", "1"]}, null]}));
//! # Ok(())
//! # }
//! ```
//!
//! ## Error Handling
//!
//! Veil uses the [`domain::VeilError`] type for all errors; every failure is
//! fatal to the single operation and nothing is written to the output path on
//! failure:
//!
//! ```rust
//! use veil::domain::VeilError;
//! use veil::core::anonymize::anonymize_document;
//!
//! let mut doc = serde_json::json!({"roundData": []});
//! let err = anonymize_document(&mut doc).unwrap_err();
//! assert!(matches!(err, VeilError::Schema(_)));
//! ```
//!
//! ## Logging
//!
//! Veil uses structured logging with the `tracing` crate:
//!
//! ```rust,no_run
//! use tracing::{info, warn};
//!
//! info!("Starting anonymization");
//! warn!(round = 3, "Round entry skipped");
//! ```

pub mod cli;
pub mod core;
pub mod domain;
pub mod logging;
