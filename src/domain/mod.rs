//! Domain models and types for Veil.
//!
//! The domain layer provides:
//! - **Strongly-typed identifiers** ([`PlayerId`])
//! - **Error types** ([`VeilError`])
//! - **Result type alias** ([`Result`])
//!
//! # Type Safety
//!
//! Veil uses the newtype pattern so anonymous ids cannot be confused with raw
//! player names:
//!
//! ```rust
//! use veil::domain::PlayerId;
//!
//! let id = PlayerId::from_sequence(0);
//! assert_eq!(id.as_str(), "0");
//! ```
//!
//! # Error Handling
//!
//! All fallible operations return [`Result<T, VeilError>`]:
//!
//! ```rust
//! use veil::domain::{Result, VeilError};
//!
//! fn example(doc: &serde_json::Value) -> Result<()> {
//!     doc.get("playerData")
//!         .ok_or_else(|| VeilError::Schema("missing required field `playerData`".to_string()))?;
//!     Ok(())
//! }
//! ```

pub mod errors;
pub mod ids;
pub mod result;

// Re-export commonly used types for convenience
pub use errors::VeilError;
pub use ids::PlayerId;
pub use result::Result;
