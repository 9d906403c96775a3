// Veil - Game Log Anonymizer
// Copyright (c) 2025 Veil Contributors
// Licensed under the MIT License

use clap::Parser;
use std::process;
use veil::cli::Cli;
use veil::logging::init_logging;

fn main() {
    // Load environment variables from .env file if present
    // This is optional - if .env doesn't exist, it's silently ignored
    let _ = dotenvy::dotenv();

    // Parse CLI arguments; clap rejects wrong argument counts here with the
    // usage line and exit code 2
    let cli = Cli::parse();

    let log_level = cli.log_level.as_deref().unwrap_or("info");
    if let Err(e) = init_logging(log_level) {
        eprintln!("Failed to initialize logging: {e}");
        process::exit(5);
    }

    tracing::info!(
        version = env!("CARGO_PKG_VERSION"),
        "Veil - Game Log Anonymizer"
    );

    let exit_code = match cli.execute() {
        Ok(code) => code,
        Err(e) => {
            tracing::error!(error = %e, "Anonymization failed");
            eprintln!("Error: {e}");
            1
        }
    };

    process::exit(exit_code);
}
