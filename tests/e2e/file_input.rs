//! E2E tests for file-driven workflows
//! Tests reading values from a file through the CLI

use std::fs;
use std::process::Command;
use tempfile::NamedTempFile;

const CLI_BINARY: &str = "target/debug/decfmt-cli";

fn run_command(args: &[&str]) -> std::process::Output {
    Command::new(CLI_BINARY)
        .args(args)
        .output()
        .unwrap_or_else(|_| panic!("Failed to execute {}", CLI_BINARY))
}

#[test]
fn test_format_values_from_file() {
    let temp_file = NamedTempFile::new().unwrap();
    fs::write(&temp_file, "1234.5\n0.125\n").unwrap();

    let output = run_command(&[
        "-p",
        "#,##0.00",
        "--file",
        temp_file.path().to_str().unwrap(),
    ]);

    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    let lines: Vec<&str> = stdout.lines().collect();
    assert_eq!(lines, ["1,234.50", "0.12"]);
}

#[test]
fn test_blank_lines_are_skipped() {
    let temp_file = NamedTempFile::new().unwrap();
    fs::write(&temp_file, "\n1.5\n\n  \n2.5\n").unwrap();

    let output = run_command(&["-p", "0.0", "--file", temp_file.path().to_str().unwrap()]);

    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert_eq!(stdout.lines().count(), 2);
}

#[test]
fn test_parse_mode_from_file() {
    let temp_file = NamedTempFile::new().unwrap();
    fs::write(&temp_file, "1,234.5\n-0.25\n").unwrap();

    let output = run_command(&["--parse", "--file", temp_file.path().to_str().unwrap()]);

    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    let lines: Vec<&str> = stdout.lines().collect();
    assert_eq!(lines, ["1234.5", "-0.25"]);
}

#[test]
fn test_empty_file_reports_error() {
    let temp_file = NamedTempFile::new().unwrap();
    fs::write(&temp_file, "").unwrap();

    let output = run_command(&["--file", temp_file.path().to_str().unwrap()]);

    assert!(!output.status.success());
}

#[test]
fn test_missing_file_reports_error() {
    let output = run_command(&["--file", "nonexistent_values.txt"]);

    assert!(!output.status.success());
}
