//! Integration tests for the CLI layer

use clap::Parser;
use serde_json::{json, Value};
use std::fs;
use tempfile::TempDir;
use veil::cli::Cli;

#[test]
fn test_execute_returns_success_code() {
    let dir = TempDir::new().unwrap();
    let infile = dir.path().join("in.json");
    let outfile = dir.path().join("out.json");
    fs::write(
        &infile,
        r#"{"playerData":{"alice":1},"roundData":[{"scores":{},"playerNames":["alice"]}]}"#,
    )
    .unwrap();

    let cli = Cli::parse_from([
        "veil",
        infile.to_str().unwrap(),
        outfile.to_str().unwrap(),
    ]);
    let code = cli.execute().expect("Execution failed");

    assert_eq!(code, 0);
    let doc: Value = serde_json::from_str(&fs::read_to_string(&outfile).unwrap()).unwrap();
    assert_eq!(doc, json!({"roundData": [{"playerNames": ["0"]}]}));
}

#[test]
fn test_execute_propagates_transform_errors() {
    let dir = TempDir::new().unwrap();
    let infile = dir.path().join("in.json");
    let outfile = dir.path().join("out.json");
    fs::write(&infile, r#"{"roundData":[]}"#).unwrap();

    let cli = Cli::parse_from([
        "veil",
        infile.to_str().unwrap(),
        outfile.to_str().unwrap(),
    ]);
    let err = cli.execute().unwrap_err();

    assert!(err.to_string().contains("playerData"));
    assert!(!outfile.exists());
}
