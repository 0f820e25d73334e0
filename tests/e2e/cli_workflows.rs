//! E2E tests for complete CLI workflows
//! Tests the entire application through the command-line interface

use std::process::Command;

const CLI_BINARY: &str = "target/debug/decfmt-cli";

fn run_command(args: &[&str]) -> std::process::Output {
    Command::new(CLI_BINARY)
        .args(args)
        .output()
        .unwrap_or_else(|_| panic!("Failed to execute {}", CLI_BINARY))
}

#[test]
fn test_default_pattern_formatting() {
    let output = run_command(&["1234.5"]);

    assert!(output.status.success());
    assert_eq!(String::from_utf8_lossy(&output.stdout).trim(), "1,234.5");
}

#[test]
fn test_explicit_pattern() {
    let output = run_command(&["-p", "0.00", "2.5"]);

    assert!(output.status.success());
    assert_eq!(String::from_utf8_lossy(&output.stdout).trim(), "2.50");
}

#[test]
fn test_locale_symbols() {
    let output = run_command(&["-p", "#,##0.00", "-l", "de", "1234.5"]);

    assert!(output.status.success());
    assert_eq!(String::from_utf8_lossy(&output.stdout).trim(), "1.234,50");
}

#[test]
fn test_rounding_mode_flag() {
    let output = run_command(&["-p", "0.0", "-r", "floor", "1.99"]);

    assert!(output.status.success());
    assert_eq!(String::from_utf8_lossy(&output.stdout).trim(), "1.9");
}

#[test]
fn test_multiple_values_one_per_line() {
    let output = run_command(&["-p", "0.0", "1.25", "-2.5"]);

    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    let lines: Vec<&str> = stdout.lines().collect();
    assert_eq!(lines, ["1.2", "-2.5"]);
}

#[test]
fn test_parse_mode() {
    let output = run_command(&["--parse", "1,234.5"]);

    assert!(output.status.success());
    assert_eq!(String::from_utf8_lossy(&output.stdout).trim(), "1234.5");
}

#[test]
fn test_negative_value_arguments() {
    let output = run_command(&["-12"]);

    assert!(output.status.success());
    assert_eq!(String::from_utf8_lossy(&output.stdout).trim(), "-12");
}

#[test]
fn test_parse_mode_negative_text() {
    let output = run_command(&["--parse", "-12"]);

    assert!(output.status.success());
    assert_eq!(String::from_utf8_lossy(&output.stdout).trim(), "-12");
}

#[test]
fn test_parse_mode_with_pattern() {
    let output = run_command(&["-p", "0.00;(0.00)", "--parse", "(12.50)"]);

    assert!(output.status.success());
    assert_eq!(String::from_utf8_lossy(&output.stdout).trim(), "-12.5");
}

#[test]
fn test_bad_pattern_reports_error() {
    let output = run_command(&["-p", "0.0.0", "1"]);

    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("ERR_PATTERN_SYNTAX"));
}

#[test]
fn test_unknown_locale_reports_error() {
    let output = run_command(&["-l", "tlh", "1"]);

    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("ERR_UNKNOWN_LOCALE"));
    assert!(stderr.contains("tlh"));
}

#[test]
fn test_unknown_rounding_mode_reports_error() {
    let output = run_command(&["-r", "nearest", "1"]);

    assert!(!output.status.success());
    assert!(String::from_utf8_lossy(&output.stderr).contains("nearest"));
}

#[test]
fn test_invalid_value_reports_error() {
    let output = run_command(&["not-a-number"]);

    assert!(!output.status.success());
}

#[test]
fn test_no_values_reports_error() {
    let output = run_command(&[]);

    assert!(!output.status.success());
    assert!(String::from_utf8_lossy(&output.stderr).contains("no values"));
}

#[test]
fn test_unparseable_text_reports_error() {
    let output = run_command(&["--parse", "12abc"]);

    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("ERR_PARSE_NUMBER"));
}
