//! End-to-end CLI tests for chatlens.
//!
//! These tests run the actual binary against transcript fixtures and check
//! the JSON it prints.
//!
//! # Test Categories
//!
//! - **Basic functionality**: Each line grammar works via CLI
//! - **Selection**: `--user`, `--after`, `--before`
//! - **Flags**: output file, compact JSON, parser options, stop words
//! - **Error handling**: Error bodies and exit codes for bad input
//!
//! # Running Tests
//!
//! ```bash
//! cargo test --test cli_e2e
//! ```

use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use std::path::PathBuf;
use tempfile::{TempDir, tempdir};

// ============================================================================
// Test Fixtures
// ============================================================================

/// Creates a temporary directory with one transcript per line grammar.
fn setup_fixtures() -> TempDir {
    let dir = tempdir().expect("Failed to create temp dir");

    let bracketed = "\
[01/02/24, 09:00:00] Alice: Hi Bob
[01/02/24, 09:05:00] Bob: <Media omitted>
";
    fs::write(dir.path().join("ios.txt"), bracketed).unwrap();

    let meridiem = "\
15/01/24, 9:15 AM - Alice: pizza tonight?
15/01/24, 9:16 AM - Bob: yes pizza 🍕
15/01/24, 9:17 AM - Bob joined using this group's invite link
20/03/24, 10:00 PM - Alice: that was great
multi-line tail
";
    fs::write(dir.path().join("android.txt"), meridiem).unwrap();

    let dashed = "\
25/12/2023, 23:59 - Alice: almost christmas
26/12/2023, 00:01 - Bob: merry christmas!
";
    fs::write(dir.path().join("dashed.txt"), dashed).unwrap();

    fs::write(dir.path().join("notes.txt"), "shopping list\nmilk\n").unwrap();
    fs::write(dir.path().join("binary.txt"), [0xffu8, 0xfe, 0x00]).unwrap();
    fs::write(dir.path().join("stop.txt"), "pizza yes").unwrap();

    dir
}

fn fixture(dir: &TempDir, name: &str) -> PathBuf {
    dir.path().join(name)
}

fn chatlens() -> Command {
    Command::cargo_bin("chatlens").unwrap()
}

fn run_json(args: &[&str]) -> serde_json::Value {
    let output = chatlens().args(args).output().unwrap();
    assert!(output.status.success(), "command failed: {output:?}");
    serde_json::from_slice(&output.stdout).unwrap()
}

// ============================================================================
// Basic functionality
// ============================================================================

#[test]
fn test_help() {
    chatlens()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("--user"))
        .stdout(predicate::str::contains("--merge-continuations"));
}

#[test]
fn test_bracketed_transcript() {
    let dir = setup_fixtures();
    let json = run_json(&[fixture(&dir, "ios.txt").to_str().unwrap()]);

    assert_eq!(json["stats"]["total_messages"], 2);
    assert_eq!(json["stats"]["media_shared"], 1);
    assert_eq!(json["stats"]["total_words"], 2);
    assert_eq!(json["user_list"], serde_json::json!(["Overall", "Alice", "Bob"]));
}

#[test]
fn test_meridiem_transcript() {
    let dir = setup_fixtures();
    let json = run_json(&[fixture(&dir, "android.txt").to_str().unwrap()]);

    assert_eq!(json["stats"]["total_messages"], 3);
    assert_eq!(json["common_words"][0]["word"], "pizza");
    assert_eq!(json["emoji_stats"][0]["emoji"], "🍕");
    assert_eq!(json["monthly_timeline"][0]["time"], "January-2024");
    assert_eq!(json["monthly_timeline"][1]["time"], "March-2024");
    assert_eq!(json["most_active_time"], "9-10");
}

#[test]
fn test_dashed_transcript() {
    let dir = setup_fixtures();
    let json = run_json(&[fixture(&dir, "dashed.txt").to_str().unwrap()]);

    assert_eq!(json["stats"]["total_messages"], 2);
    assert_eq!(json["daily_timeline"][0]["only_date"], "2023-12-25");
}

// ============================================================================
// Selection
// ============================================================================

#[test]
fn test_user_selection() {
    let dir = setup_fixtures();
    let json = run_json(&[
        fixture(&dir, "android.txt").to_str().unwrap(),
        "--user",
        "Alice",
    ]);

    assert_eq!(json["stats"]["total_messages"], 2);
    // Most-active table ignores the sender selection
    assert_eq!(json["most_active_users_percent"].as_array().unwrap().len(), 2);
    assert_eq!(json["avg_message_length"][0]["user"], "Alice");
}

#[test]
fn test_date_range() {
    let dir = setup_fixtures();
    let json = run_json(&[
        fixture(&dir, "android.txt").to_str().unwrap(),
        "--after",
        "2024-03-01",
        "--before",
        "2024-03-31",
    ]);

    assert_eq!(json["stats"]["total_messages"], 1);
    assert_eq!(json["most_active_time"], "22-23");
}

// ============================================================================
// Flags
// ============================================================================

#[test]
fn test_output_file_and_compact() {
    let dir = setup_fixtures();
    let out = dir.path().join("report.json");

    chatlens()
        .arg(fixture(&dir, "ios.txt"))
        .arg("-o")
        .arg(&out)
        .arg("--compact")
        .assert()
        .success()
        .stdout(predicate::str::is_empty());

    let written = fs::read_to_string(&out).unwrap();
    assert_eq!(written.lines().count(), 1);
    let json: serde_json::Value = serde_json::from_str(&written).unwrap();
    assert_eq!(json["stats"]["total_messages"], 2);
}

#[test]
fn test_parser_flags() {
    let dir = setup_fixtures();
    let json = run_json(&[
        fixture(&dir, "android.txt").to_str().unwrap(),
        "--notifications",
        "--merge-continuations",
    ]);

    assert_eq!(json["stats"]["total_messages"], 4);
    // The system sender never appears in the user list
    assert_eq!(
        json["user_list"],
        serde_json::json!(["Overall", "Alice", "Bob"])
    );
    assert_eq!(json["most_active_users_percent"].as_array().unwrap().len(), 3);
}

#[test]
fn test_stop_words_file() {
    let dir = setup_fixtures();
    let stop = fixture(&dir, "stop.txt");
    let json = run_json(&[
        fixture(&dir, "android.txt").to_str().unwrap(),
        "--stop-words",
        stop.to_str().unwrap(),
    ]);

    let words: Vec<&str> = json["common_words"]
        .as_array()
        .unwrap()
        .iter()
        .map(|w| w["word"].as_str().unwrap())
        .collect();
    assert!(!words.contains(&"pizza"));
    assert!(words.contains(&"tonight?"));
}

#[test]
fn test_missing_stop_words_file_degrades() {
    let dir = setup_fixtures();
    chatlens()
        .arg(fixture(&dir, "ios.txt"))
        .arg("--stop-words")
        .arg(dir.path().join("nope.txt"))
        .assert()
        .success()
        .stderr(predicate::str::contains("stop words unavailable"));
}

// ============================================================================
// Error handling
// ============================================================================

#[test]
fn test_unrecognised_transcript() {
    let dir = setup_fixtures();
    chatlens()
        .arg(fixture(&dir, "notes.txt"))
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("Could not process the chat file"));
}

#[test]
fn test_binary_transcript() {
    let dir = setup_fixtures();
    chatlens()
        .arg(fixture(&dir, "binary.txt"))
        .assert()
        .failure()
        .stderr(predicate::str::contains("valid WhatsApp export"));
}

#[test]
fn test_invalid_date() {
    let dir = setup_fixtures();
    chatlens()
        .arg(fixture(&dir, "ios.txt"))
        .args(["--after", "yesterday"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid date 'yesterday'"));
}

#[test]
fn test_missing_input_is_opaque() {
    chatlens()
        .arg("/definitely/not/here/chat.txt")
        .assert()
        .failure()
        .stderr(predicate::str::contains("An internal server error occurred"));
}
