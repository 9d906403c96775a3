//! Player roster: the name → id anonymization mapping
//!
//! The roster is built once from the document's `playerData` section and is
//! immutable afterwards. Id assignment depends on `playerData`'s key order,
//! which serde_json preserves as insertion order (`preserve_order` feature).

use crate::domain::{PlayerId, Result, VeilError};
use serde_json::Value;
use std::collections::HashMap;

/// Immutable mapping from raw player name to anonymous [`PlayerId`]
///
/// Each distinct `playerData` key receives the next sequential id starting at
/// "0", in document order. Names that never appear in any round still get an
/// id; the unused entry is harmless.
///
/// # Examples
///
/// ```
/// use veil::core::anonymize::PlayerRoster;
/// use serde_json::json;
///
/// let doc = json!({"playerData": {"alice": 1, "bob": 2}});
/// let roster = PlayerRoster::from_document(&doc).unwrap();
/// assert_eq!(roster.id_for("bob").unwrap().as_str(), "1");
/// ```
#[derive(Debug, Clone)]
pub struct PlayerRoster {
    ids: HashMap<String, PlayerId>,
    names: Vec<String>,
}

impl PlayerRoster {
    /// Build the roster from a document's `playerData` section
    ///
    /// # Errors
    ///
    /// Returns [`VeilError::Schema`] if `playerData` is absent or is not a
    /// JSON object.
    pub fn from_document(doc: &Value) -> Result<Self> {
        let players = doc
            .get("playerData")
            .ok_or_else(|| VeilError::Schema("missing required field `playerData`".to_string()))?
            .as_object()
            .ok_or_else(|| VeilError::Schema("`playerData` is not a JSON object".to_string()))?;

        let mut ids = HashMap::with_capacity(players.len());
        let mut names = Vec::with_capacity(players.len());
        for (seq, name) in players.keys().enumerate() {
            ids.insert(name.clone(), PlayerId::from_sequence(seq));
            names.push(name.clone());
        }

        Ok(Self { ids, names })
    }

    /// Look up the id assigned to a player name
    pub fn id_for(&self, name: &str) -> Option<&PlayerId> {
        self.ids.get(name)
    }

    /// Number of players in the roster
    pub fn len(&self) -> usize {
        self.names.len()
    }

    /// Whether the roster is empty
    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }

    /// Player names in id-assignment order
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.names.iter().map(String::as_str)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_ids_follow_key_order() {
        let doc = json!({"playerData": {"carol": {}, "alice": {}, "bob": {}}});
        let roster = PlayerRoster::from_document(&doc).unwrap();

        assert_eq!(roster.id_for("carol").unwrap().as_str(), "0");
        assert_eq!(roster.id_for("alice").unwrap().as_str(), "1");
        assert_eq!(roster.id_for("bob").unwrap().as_str(), "2");
    }

    #[test]
    fn test_names_in_assignment_order() {
        let doc = json!({"playerData": {"zed": 0, "amy": 0}});
        let roster = PlayerRoster::from_document(&doc).unwrap();

        let names: Vec<&str> = roster.names().collect();
        assert_eq!(names, vec!["zed", "amy"]);
    }

    #[test]
    fn test_unknown_name_is_none() {
        let doc = json!({"playerData": {"alice": 1}});
        let roster = PlayerRoster::from_document(&doc).unwrap();

        assert!(roster.id_for("mallory").is_none());
    }

    #[test]
    fn test_empty_player_data() {
        let doc = json!({"playerData": {}});
        let roster = PlayerRoster::from_document(&doc).unwrap();

        assert!(roster.is_empty());
        assert_eq!(roster.len(), 0);
    }

    #[test]
    fn test_missing_player_data_fails() {
        let doc = json!({"roundData": []});
        let err = PlayerRoster::from_document(&doc).unwrap_err();

        assert!(matches!(err, VeilError::Schema(_)));
        assert!(err.to_string().contains("playerData"));
    }

    #[test]
    fn test_player_data_wrong_shape_fails() {
        let doc = json!({"playerData": ["alice", "bob"]});
        let err = PlayerRoster::from_document(&doc).unwrap_err();

        assert!(matches!(err, VeilError::Schema(_)));
    }
}
