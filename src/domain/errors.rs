//! Domain error types
//!
//! This module defines the error hierarchy for Veil. All errors are
//! domain-specific and don't expose third-party types.

use thiserror::Error;

/// Main Veil error type
///
/// This is the primary error type used throughout the application.
/// Every failure is fatal to the single anonymization operation; there are
/// no retries and no partial success.
#[derive(Debug, Error)]
pub enum VeilError {
    /// I/O errors, with the path that failed
    #[error("I/O error for {path}: {message}")]
    Io { path: String, message: String },

    /// Input is not valid JSON
    #[error("Invalid JSON in {path}: {message}")]
    Parse { path: String, message: String },

    /// Document is missing an expected field or has the wrong shape
    #[error("Schema error: {0}")]
    Schema(String),

    /// Serialization errors
    #[error("Serialization error: {0}")]
    Serialization(String),

    /// Configuration errors (log level and friends)
    #[error("Configuration error: {0}")]
    Configuration(String),
}

impl VeilError {
    /// Build an I/O error carrying the offending path
    pub fn io(path: impl Into<String>, err: &std::io::Error) -> Self {
        VeilError::Io {
            path: path.into(),
            message: err.to_string(),
        }
    }

    /// Build a parse error carrying the offending path
    pub fn parse(path: impl Into<String>, err: &serde_json::Error) -> Self {
        VeilError::Parse {
            path: path.into(),
            message: err.to_string(),
        }
    }
}

// Conversion from serde_json::Error for failures with no path context
impl From<serde_json::Error> for VeilError {
    fn from(err: serde_json::Error) -> Self {
        VeilError::Serialization(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_io_error_display() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "no such file");
        let err = VeilError::io("games/session.json", &io_err);
        assert_eq!(
            err.to_string(),
            "I/O error for games/session.json: no such file"
        );
    }

    #[test]
    fn test_parse_error_display() {
        let json_err = serde_json::from_str::<serde_json::Value>("not json").unwrap_err();
        let err = VeilError::parse("session.json", &json_err);
        assert!(err.to_string().starts_with("Invalid JSON in session.json:"));
    }

    #[test]
    fn test_schema_error_display() {
        let err = VeilError::Schema("missing required field `playerData`".to_string());
        assert_eq!(
            err.to_string(),
            "Schema error: missing required field `playerData`"
        );
    }

    #[test]
    fn test_serde_json_error_conversion() {
        let json_err = serde_json::from_str::<serde_json::Value>("invalid json").unwrap_err();
        let err: VeilError = json_err.into();
        assert!(matches!(err, VeilError::Serialization(_)));
    }

    #[test]
    fn test_veil_error_implements_std_error() {
        let err = VeilError::Schema("test".to_string());
        let _: &dyn std::error::Error = &err;
    }
}
