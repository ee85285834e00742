//! Integration tests for the `tiny-scanner` binary.
//!
//! These tests run the CLI end to end: reading a TINY source file, writing
//! the token listing and reporting illegal input.

use assert_cmd::Command;
use predicates::prelude::*;
use std::{fs, path::PathBuf};
use tempfile::TempDir;

const SAMPLE: &str = "read x; /* input */\nif 0 < x then\n  fact := 1;\n  repeat\n    fact := fact * x;\n    x := x - 1\n  until x = 0;\n  write fact\nend\n";

fn scanner_bin() -> PathBuf {
    PathBuf::from(env!("CARGO_BIN_EXE_tiny-scanner"))
}

fn write_source(dir: &TempDir, name: &str, contents: &str) -> PathBuf {
    let path = dir.path().join(name);
    fs::write(&path, contents).expect("Failed to write source file");
    path
}

#[test]
fn test_cli_help() {
    let mut cmd = Command::new(scanner_bin());
    cmd.arg("--help");

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("Usage"));
}

#[test]
fn test_cli_missing_input() {
    let mut cmd = Command::new(scanner_bin());

    cmd.assert().failure();
}

#[test]
fn test_cli_scans_file() {
    let temp_dir = TempDir::new().expect("Failed to create temp directory");
    let input = write_source(&temp_dir, "sample.tiny", SAMPLE);
    let output = temp_dir.path().join("tokens.txt");

    let mut cmd = Command::new(scanner_bin());
    cmd.arg(&input).arg(&output);

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("TINY Scanner Project"))
        .stdout(predicate::str::contains("Successfully scanned 33 tokens."))
        .stdout(predicate::str::contains("Output written to:"));

    let listing = fs::read_to_string(&output).expect("Output file should exist");
    let lines: Vec<&str> = listing.lines().collect();

    assert_eq!(lines.len(), 32);
    assert_eq!(lines[0], "read, READ");
    assert_eq!(lines[1], "x, IDENTIFIER");
    assert_eq!(lines[2], ";, SEMICOLON");
    assert_eq!(lines[3], "if, IF");
    assert!(lines.contains(&":=, ASSIGN"));
    assert!(lines.contains(&"*, MULT"));
    assert_eq!(lines[lines.len() - 1], "end, END");
    assert!(!listing.contains("EOF"));
}

#[test]
fn test_cli_default_output_path() {
    let temp_dir = TempDir::new().expect("Failed to create temp directory");
    let input = write_source(&temp_dir, "prog.tiny", "x := 1;");

    let mut cmd = Command::new(scanner_bin());
    cmd.current_dir(temp_dir.path()).arg(&input);

    cmd.assert().success();

    let listing = fs::read_to_string(temp_dir.path().join("output.txt"))
        .expect("Default output file should exist");
    assert_eq!(listing, "x, IDENTIFIER\n:=, ASSIGN\n1, NUMBER\n;, SEMICOLON\n");
}

#[test]
fn test_cli_unreadable_input() {
    let temp_dir = TempDir::new().expect("Failed to create temp directory");

    let mut cmd = Command::new(scanner_bin());
    cmd.current_dir(temp_dir.path()).arg("does_not_exist.tiny");

    cmd.assert()
        .failure()
        .stderr(predicate::str::contains("Error reading file").count(1));
}

#[test]
fn test_cli_illegal_tokens_are_listed() {
    let temp_dir = TempDir::new().expect("Failed to create temp directory");
    let input = write_source(&temp_dir, "bad.tiny", "x : 1 @");
    let output = temp_dir.path().join("tokens.txt");

    let mut cmd = Command::new(scanner_bin());
    cmd.arg(&input).arg(&output);

    cmd.assert().success();

    let listing = fs::read_to_string(&output).expect("Output file should exist");
    assert_eq!(listing, "x, IDENTIFIER\n:, ILLEGAL\n1, NUMBER\n@, ILLEGAL\n");
}

#[test]
fn test_cli_strict_fails_on_illegal_tokens() {
    let temp_dir = TempDir::new().expect("Failed to create temp directory");
    let input = write_source(&temp_dir, "bad.tiny", "read x;\nx := @;\n");
    let output = temp_dir.path().join("tokens.txt");

    let mut cmd = Command::new(scanner_bin());
    cmd.arg(&input).arg(&output).arg("--strict").arg("--no-color");

    cmd.assert()
        .failure()
        .stderr(predicate::str::contains("Error: IllegalCharacter"))
        .stderr(predicate::str::contains("2 | x := @;"));

    assert!(output.exists(), "Listing is written before failing");
}

#[test]
fn test_cli_strict_passes_clean_source() {
    let temp_dir = TempDir::new().expect("Failed to create temp directory");
    let input = write_source(&temp_dir, "ok.tiny", SAMPLE);
    let output = temp_dir.path().join("tokens.txt");

    let mut cmd = Command::new(scanner_bin());
    cmd.arg(&input).arg(&output).arg("--strict");

    cmd.assert().success();
}
