//! Domain identifier types with validation
//!
//! Newtype wrapper for the anonymous player identifier. The wrapper keeps
//! raw player names and their replacement ids from being mixed up at compile
//! time.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Anonymous player identifier newtype wrapper
///
/// A string-encoded sequential integer ("0", "1", "2", …) assigned to each
/// player in roster order. The string form is what lands in the output
/// document, matching the id format game-log consumers expect.
///
/// # Examples
///
/// ```
/// use veil::domain::ids::PlayerId;
///
/// let id = PlayerId::from_sequence(3);
/// assert_eq!(id.as_str(), "3");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PlayerId(String);

impl PlayerId {
    /// Creates a new PlayerId from a string
    ///
    /// # Arguments
    ///
    /// * `id` - The id string; must be a non-empty run of ASCII digits
    ///
    /// # Returns
    ///
    /// Returns `Ok(PlayerId)` if the id is valid, `Err` otherwise
    pub fn new(id: impl Into<String>) -> Result<Self, String> {
        let id = id.into();
        if id.is_empty() {
            return Err("Player ID cannot be empty".to_string());
        }
        if !id.bytes().all(|b| b.is_ascii_digit()) {
            return Err(format!("Player ID must be numeric, got: {id}"));
        }
        Ok(Self(id))
    }

    /// Creates the PlayerId for a roster position
    pub fn from_sequence(seq: usize) -> Self {
        Self(seq.to_string())
    }

    /// Returns the id as a string slice
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Consumes self and returns the inner String
    pub fn into_inner(self) -> String {
        self.0
    }
}

impl fmt::Display for PlayerId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for PlayerId {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

impl AsRef<str> for PlayerId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}
