//! Logging and observability
//!
//! Structured console logging with configurable log levels via the `tracing`
//! stack. There is no file sink; veil is a one-shot CLI, not a service.
//!
//! # Example
//!
//! ```no_run
//! use veil::logging::init_logging;
//!
//! init_logging("info").expect("Failed to initialize logging");
//! tracing::info!("Application started");
//! ```

use crate::domain::{Result, VeilError};
use tracing::Level;
use tracing_subscriber::EnvFilter;

/// Initialize the logging system
///
/// Sets up a console subscriber filtered by `RUST_LOG` when set, falling back
/// to `veil=<level>`.
///
/// # Arguments
///
/// * `log_level_str` - Log level as a string (trace, debug, info, warn, error)
///
/// # Errors
///
/// Returns [`VeilError::Configuration`] if the level string is not one of the
/// known levels.
pub fn init_logging(log_level_str: &str) -> Result<()> {
    let log_level = parse_log_level(log_level_str)?;

    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("veil={log_level}")));

    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_target(true)
        .with_writer(std::io::stderr)
        .init();

    Ok(())
}

/// Parse log level from string
fn parse_log_level(level_str: &str) -> Result<Level> {
    match level_str.to_lowercase().as_str() {
        "trace" => Ok(Level::TRACE),
        "debug" => Ok(Level::DEBUG),
        "info" => Ok(Level::INFO),
        "warn" => Ok(Level::WARN),
        "error" => Ok(Level::ERROR),
        _ => Err(VeilError::Configuration(format!(
            "Invalid log level: {}. Must be one of: trace, debug, info, warn, error",
            level_str
        ))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_log_level_valid() {
        assert_eq!(parse_log_level("trace").unwrap(), Level::TRACE);
        assert_eq!(parse_log_level("debug").unwrap(), Level::DEBUG);
        assert_eq!(parse_log_level("info").unwrap(), Level::INFO);
        assert_eq!(parse_log_level("warn").unwrap(), Level::WARN);
        assert_eq!(parse_log_level("error").unwrap(), Level::ERROR);
    }

    #[test]
    fn test_parse_log_level_case_insensitive() {
        assert_eq!(parse_log_level("TRACE").unwrap(), Level::TRACE);
        assert_eq!(parse_log_level("Debug").unwrap(), Level::DEBUG);
        assert_eq!(parse_log_level("INFO").unwrap(), Level::INFO);
    }

    #[test]
    fn test_parse_log_level_invalid() {
        assert!(parse_log_level("invalid").is_err());
        assert!(parse_log_level("").is_err());
    }
}
