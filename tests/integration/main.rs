//! Integration tests for Tally
//!
//! These tests run the built binary end to end.

use std::io::Write;
use std::process::{Command, Output};

fn tally(args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_tally"))
        .args(args)
        .output()
        .expect("Failed to execute tally")
}

fn stdout(output: &Output) -> String {
    String::from_utf8_lossy(&output.stdout).trim_end().to_string()
}

/// Test that the CLI can be invoked
#[test]
fn test_cli_invocation() {
    let output = tally(&["--help"]);
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(output.status.success());
    assert!(stdout.contains("Group synonymous names and total their frequencies"));
}

#[test]
fn test_default_run_prints_sample_mapping() {
    let output = tally(&["run"]);
    assert!(output.status.success());
    assert_eq!(stdout(&output), "{John: 12, Chris: 4, Brian: 6, Carleton: 4}");
}

#[test]
fn test_run_from_toml_file() {
    let path = concat!(env!("CARGO_MANIFEST_DIR"), "/demos/sample.toml");
    let output = tally(&["run", "--input", path, "--format", "json"]);
    assert!(output.status.success());
    assert_eq!(stdout(&output), r#"{"John":12,"Chris":4,"Brian":6,"Carleton":4}"#);
}

#[test]
fn test_smallest_name_key() {
    let output = tally(&["run", "--key", "smallest-name"]);
    assert!(output.status.success());
    assert_eq!(stdout(&output), "{John: 12, Chris: 4, Brian: 6, Carleton: 4}");
}

#[test]
fn test_unknown_synonym_fails_without_output() {
    let mut file = tempfile::Builder::new().suffix(".json").tempfile().unwrap();
    file.write_all(br#"{"names": {"John": 3}, "synonyms": [["John", "Jon"]]}"#)
        .unwrap();
    let path = file.path().to_str().unwrap();

    let output = tally(&["run", "--input", path]);
    assert!(!output.status.success());
    assert!(output.stdout.is_empty());
    assert!(String::from_utf8_lossy(&output.stderr).contains("unknown name"));

    let output = tally(&["run", "--input", path, "--create-missing"]);
    assert!(output.status.success());
    assert_eq!(stdout(&output), "{John: 3}");
}

#[test]
fn test_unsupported_input_format() {
    let file = tempfile::Builder::new().suffix(".csv").tempfile().unwrap();
    let output = tally(&["run", "--input", file.path().to_str().unwrap()]);
    assert!(!output.status.success());
    assert!(output.stdout.is_empty());
}

#[test]
fn test_version() {
    let output = tally(&["version"]);
    assert!(output.status.success());
    assert!(stdout(&output).starts_with("Tally v"));
}
