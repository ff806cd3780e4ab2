//! Integration tests for the weathercast binaries
//!
//! Every scenario here must be rejected during input validation, before any
//! network request is made, so the tests run offline. The binaries always
//! exit with status 0; failures are reported as printed messages.

use std::io::Write;
use std::process::{Command, Stdio};

fn run_binary(exe: &str, stdin_data: &str) -> (String, bool) {
    let mut child = Command::new(exe)
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .spawn()
        .expect("Failed to spawn binary");

    child
        .stdin
        .as_mut()
        .expect("Failed to open stdin")
        .write_all(stdin_data.as_bytes())
        .expect("Failed to write stdin");

    let output = child.wait_with_output().expect("Failed to wait for binary");
    let stdout = String::from_utf8_lossy(&output.stdout).to_string();
    (stdout, output.status.success())
}

fn run_openweather(stdin_data: &str) -> (String, bool) {
    run_binary(env!("CARGO_BIN_EXE_openweather"), stdin_data)
}

fn run_nws(stdin_data: &str) -> (String, bool) {
    run_binary(env!("CARGO_BIN_EXE_nws"), stdin_data)
}

#[test]
fn test_openweather_rejects_bad_location_format() {
    let (stdout, success) = run_openweather("Tokyo\n");
    assert!(success, "binaries must exit normally on failure");
    assert!(stdout.contains("Invalid location format"));
    assert!(stdout.contains("100-0001"), "help text should show an example");
}

#[test]
fn test_openweather_rejects_bad_date_format() {
    let (stdout, success) = run_openweather("Tokyo, 100-0001\n09/01/2026\n");
    assert!(success);
    assert!(stdout.contains("Invalid date format"));
    assert!(stdout.contains("YYYY-MM-DD"));
}

#[test]
fn test_openweather_rejects_reversed_range() {
    let (stdout, success) = run_openweather("Tokyo, 100-0001\n2026-09-10\n2026-09-01\n");
    assert!(success);
    assert!(stdout.contains("before the start date"));
}

#[test]
fn test_openweather_rejects_range_over_seven_days() {
    let (stdout, success) = run_openweather("Tokyo, 100-0001\n2026-09-01\n2026-09-30\n");
    assert!(success);
    assert!(stdout.contains("cannot exceed 7 days"));
}

#[test]
fn test_nws_rejects_bad_location_format() {
    let (stdout, success) = run_nws("Portland Oregon\n");
    assert!(success);
    assert!(stdout.contains("Invalid location format"));
    assert!(stdout.contains("Portland, OR"));
}

#[test]
fn test_nws_rejects_reversed_range() {
    let (stdout, success) = run_nws("Portland, OR\n2026-09-10\n2026-09-01\n");
    assert!(success);
    assert!(stdout.contains("before the start date"));
}

#[test]
fn test_nws_rejects_range_over_seven_days() {
    let (stdout, success) = run_nws("Portland, OR\n2026-09-01\n2026-09-09\n");
    assert!(success);
    assert!(stdout.contains("cannot exceed 7 days"));
}
