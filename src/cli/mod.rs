//! CLI interface and argument parsing
//!
//! This module provides the command-line interface for Veil using clap.
//! The surface is a single operation with two required positional paths:
//! `veil <INFILE> <OUTFILE>`. Wrong argument counts are rejected by clap
//! with the usage line and a non-zero exit before any domain code runs.

use crate::core::anonymize;
use clap::Parser;
use std::path::PathBuf;

/// Veil - game log anonymizer
#[derive(Parser, Debug)]
#[command(name = "veil")]
#[command(version, about, long_about = None)]
#[command(override_usage = "veil <INFILE> <OUTFILE>")]
pub struct Cli {
    /// Path to the game log to anonymize
    pub infile: PathBuf,

    /// Path to write the anonymized log
    pub outfile: PathBuf,

    /// Log level (trace, debug, info, warn, error)
    #[arg(short, long, env = "VEIL_LOG_LEVEL")]
    pub log_level: Option<String>,
}

impl Cli {
    /// Execute the anonymize operation and return the process exit code
    pub fn execute(&self) -> anyhow::Result<i32> {
        tracing::info!(
            infile = %self.infile.display(),
            outfile = %self.outfile.display(),
            "Anonymizing game log"
        );

        let summary = anonymize::anonymize_file(&self.infile, &self.outfile)?;

        println!("✅ Anonymized {}", self.infile.display());
        println!("   Players mapped:   {}", summary.players_mapped);
        println!("   Rounds rewritten: {}", summary.rounds_rewritten);
        println!("   Rounds skipped:   {}", summary.rounds_skipped);
        println!("   Output: {}", self.outfile.display());

        Ok(0)
    }
}
