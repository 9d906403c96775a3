//! Anonymization engine
//!
//! Single-pass transform over one in-memory game-log document:
//!
//! 1. Build the [`PlayerRoster`] from `playerData`'s keys in document order.
//! 2. Remove `playerData` entirely (the raw roster is the sensitive artifact
//!    being destroyed).
//! 3. For each live `roundData` entry, delete its `scores` table and replace
//!    each entry of `playerNames` with the player's anonymous id. Falsy
//!    entries pass through untouched.
//!
//! Everything else in the document survives byte-identical.
//!
//! # Examples
//!
//! ```
//! use veil::core::anonymize::anonymize_document;
//! use serde_json::json;
//!
//! let mut doc = json!({
//!     "playerData": {"alice": 1, "bob": 2},
//!     "roundData": [{"scores": [10, 20], "playerNames": ["alice", "bob"]}, null]
//! });
//!
//! let summary = anonymize_document(&mut doc).unwrap();
//! assert_eq!(summary.players_mapped, 2);
//! assert_eq!(doc, json!({"roundData": [{"playerNames": ["0", "1"]}, null]}));
//! ```

pub mod report;
pub mod roster;

pub use report::AnonymizeSummary;
pub use roster::PlayerRoster;

use crate::core::document;
use crate::domain::{Result, VeilError};
use serde_json::Value;
use std::path::Path;

/// Anonymize a game log file
///
/// Reads `infile`, applies [`anonymize_document`], and writes the result to
/// `outfile` atomically (temp file + rename), so no truncated or invalid
/// file is ever left at the output path on failure.
///
/// # Errors
///
/// Returns [`VeilError::Io`] if either file cannot be read or written,
/// [`VeilError::Parse`] if the input is not valid JSON, and
/// [`VeilError::Schema`] for documents that don't have the expected shape.
pub fn anonymize_file(infile: &Path, outfile: &Path) -> Result<AnonymizeSummary> {
    tracing::debug!(path = %infile.display(), "Reading game log");
    let mut doc = document::read_document(infile)?;

    let summary = anonymize_document(&mut doc)?;

    tracing::debug!(path = %outfile.display(), "Writing anonymized log");
    document::write_document(outfile, &doc)?;

    tracing::info!(
        players = summary.players_mapped,
        rounds_rewritten = summary.rounds_rewritten,
        rounds_skipped = summary.rounds_skipped,
        "Anonymization complete"
    );

    Ok(summary)
}

/// Anonymize a game-log document in place
///
/// # Errors
///
/// Returns [`VeilError::Schema`] if `playerData` or `roundData` is absent or
/// mis-shaped, if a live round lacks `scores` or `playerNames`, or if a
/// round references a player name not present in `playerData`.
pub fn anonymize_document(doc: &mut Value) -> Result<AnonymizeSummary> {
    let roster = PlayerRoster::from_document(doc)?;

    let root = doc
        .as_object_mut()
        .ok_or_else(|| VeilError::Schema("document root is not a JSON object".to_string()))?;

    // Presence was verified while building the roster.
    root.remove("playerData");

    let rounds = root
        .get_mut("roundData")
        .ok_or_else(|| VeilError::Schema("missing required field `roundData`".to_string()))?
        .as_array_mut()
        .ok_or_else(|| VeilError::Schema("`roundData` is not a JSON array".to_string()))?;

    let mut summary = AnonymizeSummary::new(roster.len());
    for (index, entry) in rounds.iter_mut().enumerate() {
        if is_falsy(entry) {
            summary.add_skipped();
            continue;
        }
        anonymize_round(index, entry, &roster)?;
        summary.add_rewritten();
    }

    Ok(summary)
}

/// Rewrite one live round record in place
fn anonymize_round(index: usize, entry: &mut Value, roster: &PlayerRoster) -> Result<()> {
    let round = entry
        .as_object_mut()
        .ok_or_else(|| VeilError::Schema(format!("round {index} is not a JSON object")))?;

    round
        .remove("scores")
        .ok_or_else(|| VeilError::Schema(format!("round {index} has no `scores` field")))?;

    let names = round
        .get_mut("playerNames")
        .ok_or_else(|| VeilError::Schema(format!("round {index} has no `playerNames` field")))?
        .as_array_mut()
        .ok_or_else(|| {
            VeilError::Schema(format!("round {index} `playerNames` is not a JSON array"))
        })?;

    for name in names.iter_mut() {
        let raw = name.as_str().ok_or_else(|| {
            VeilError::Schema(format!("round {index} `playerNames` entry is not a string"))
        })?;
        let id = roster.id_for(raw).ok_or_else(|| {
            VeilError::Schema(format!("round {index} references unknown player `{raw}`"))
        })?;
        *name = Value::String(id.as_str().to_string());
    }

    Ok(())
}

/// Truthiness test for round entries
///
/// The tracker that produces these logs indexes rounds from 1, leaving a null
/// in slot 0, and may leave other empty slots. A falsy entry is null, false,
/// numeric zero, an empty string, an empty array, or an empty object.
fn is_falsy(value: &Value) -> bool {
    match value {
        Value::Null => true,
        Value::Bool(b) => !b,
        Value::Number(n) => n.as_f64() == Some(0.0),
        Value::String(s) => s.is_empty(),
        Value::Array(a) => a.is_empty(),
        Value::Object(o) => o.is_empty(),
    }
}
