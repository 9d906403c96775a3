//! Game-log document I/O
//!
//! Reading parses the whole file into a dynamic [`serde_json::Value`];
//! writing serializes compactly and goes through a temp file in the
//! destination directory, renamed into place only after the full payload is
//! on disk. A failed run never leaves a truncated or invalid file at the
//! output path.

use crate::domain::{Result, VeilError};
use serde_json::Value;
use std::fs;
use std::io::Write;
use std::path::Path;
use tempfile::NamedTempFile;

/// Read and parse a game-log document
///
/// # Errors
///
/// Returns [`VeilError::Io`] if the file cannot be read and
/// [`VeilError::Parse`] if its contents are not valid JSON. Both carry the
/// offending path.
pub fn read_document(path: &Path) -> Result<Value> {
    let raw = fs::read_to_string(path).map_err(|e| VeilError::io(path.display().to_string(), &e))?;
    serde_json::from_str(&raw).map_err(|e| VeilError::parse(path.display().to_string(), &e))
}

/// Serialize a document and write it to `path` atomically
///
/// Output is compact JSON (no pretty-printing, no trailing newline).
///
/// # Errors
///
/// Returns [`VeilError::Serialization`] if the document cannot be encoded and
/// [`VeilError::Io`] if the temp file cannot be created, written, or renamed
/// over the output path.
pub fn write_document(path: &Path, doc: &Value) -> Result<()> {
    let payload = serde_json::to_string(doc)?;

    // The temp file must live on the same filesystem as the destination for
    // the rename to be atomic.
    let dir = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };

    let mut tmp =
        NamedTempFile::new_in(dir).map_err(|e| VeilError::io(path.display().to_string(), &e))?;
    tmp.write_all(payload.as_bytes())
        .map_err(|e| VeilError::io(path.display().to_string(), &e))?;
    tmp.persist(path)
        .map_err(|e| VeilError::io(path.display().to_string(), &e.error))?;

    Ok(())
}
