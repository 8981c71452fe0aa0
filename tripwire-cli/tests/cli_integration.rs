//! Integration tests for the tripwire CLI

use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use tempfile::TempDir;

const MARKER: &str = "<|done|>";

/// Helper to get the path to a test fixture
fn fixture_path(name: &str) -> String {
    format!("tests/fixtures/{}", name)
}

#[test]
fn scan_reports_hits_with_start_offsets() {
    let mut cmd = Command::cargo_bin("tripwire").unwrap();
    cmd.arg("scan")
        .arg("-i")
        .arg(fixture_path("session-sample.txt"))
        .arg("-m")
        .arg(MARKER)
        .arg("-q");

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("session-sample.txt:19"))
        .stdout(predicate::str::contains("session-sample.txt:48"))
        .stdout(predicate::str::contains("2 occurrences"));
}

#[test]
fn clean_file_reports_zero_occurrences() {
    let mut cmd = Command::cargo_bin("tripwire").unwrap();
    cmd.arg("scan")
        .arg("-i")
        .arg(fixture_path("clean-sample.txt"))
        .arg("-m")
        .arg(MARKER)
        .arg("-q");

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("0 occurrences"));
}

#[test]
fn json_output_carries_hits_and_metadata() {
    let mut cmd = Command::cargo_bin("tripwire").unwrap();
    cmd.arg("scan")
        .arg("-i")
        .arg(fixture_path("session-sample.txt"))
        .arg("-m")
        .arg(MARKER)
        .arg("-f")
        .arg("json")
        .arg("-q");

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("\"source\""))
        .stdout(predicate::str::contains("\"byte_offset\""))
        .stdout(predicate::str::contains("\"bytes_processed\""));
}

#[test]
fn stdin_scan_via_dash() {
    let mut cmd = Command::cargo_bin("tripwire").unwrap();
    cmd.arg("scan")
        .arg("-i")
        .arg("-")
        .arg("-m")
        .arg(MARKER)
        .arg("-q")
        .write_stdin(format!("hello {MARKER} bye"));

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("<stdin>: 1 occurrences"));
}

#[test]
fn glob_pattern_scans_every_match() {
    let mut cmd = Command::cargo_bin("tripwire").unwrap();
    cmd.arg("scan")
        .arg("-i")
        .arg(fixture_path("*.txt"))
        .arg("-m")
        .arg(MARKER)
        .arg("-q");

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("session-sample.txt: 2 occurrences"))
        .stdout(predicate::str::contains("clean-sample.txt: 0 occurrences"));
}

#[test]
fn output_flag_writes_to_file() {
    let temp_dir = TempDir::new().unwrap();
    let output_file = temp_dir.path().join("hits.txt");

    let mut cmd = Command::cargo_bin("tripwire").unwrap();
    cmd.arg("scan")
        .arg("-i")
        .arg(fixture_path("session-sample.txt"))
        .arg("-m")
        .arg(MARKER)
        .arg("-o")
        .arg(&output_file)
        .arg("-q");

    cmd.assert().success();

    let content = fs::read_to_string(&output_file).unwrap();
    assert!(content.contains("2 occurrences"));
}

#[test]
fn marker_can_come_from_config_file() {
    let temp_dir = TempDir::new().unwrap();
    let config_file = temp_dir.path().join("tripwire.toml");
    fs::write(&config_file, format!("[scan]\nmarker = \"{MARKER}\"\n")).unwrap();

    let mut cmd = Command::cargo_bin("tripwire").unwrap();
    cmd.arg("scan")
        .arg("-i")
        .arg(fixture_path("session-sample.txt"))
        .arg("-c")
        .arg(&config_file)
        .arg("-q");

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("2 occurrences"));
}

#[test]
fn missing_marker_is_an_error() {
    let mut cmd = Command::cargo_bin("tripwire").unwrap();
    cmd.arg("scan")
        .arg("-i")
        .arg(fixture_path("clean-sample.txt"))
        .arg("-q");

    cmd.assert()
        .failure()
        .stderr(predicate::str::contains("No marker specified"));
}

#[test]
fn unmatched_pattern_is_an_error() {
    let mut cmd = Command::cargo_bin("tripwire").unwrap();
    cmd.arg("scan")
        .arg("-i")
        .arg("definitely-not-here.txt")
        .arg("-m")
        .arg(MARKER)
        .arg("-q");

    cmd.assert()
        .failure()
        .stderr(predicate::str::contains("No files found"));
}

#[test]
fn generated_config_drives_a_scan() {
    let temp_dir = TempDir::new().unwrap();
    let config_file = temp_dir.path().join("generated.toml");
    let input_file = temp_dir.path().join("input.txt");
    fs::write(&input_file, "before STOP after").unwrap();

    let mut generate = Command::cargo_bin("tripwire").unwrap();
    generate
        .arg("generate-config")
        .arg("-m")
        .arg("STOP")
        .arg("-o")
        .arg(&config_file);
    generate.assert().success();
    assert!(config_file.exists());

    let mut scan = Command::cargo_bin("tripwire").unwrap();
    scan.arg("scan")
        .arg("-i")
        .arg(input_file.display().to_string())
        .arg("-c")
        .arg(&config_file)
        .arg("-q");

    scan.assert()
        .success()
        .stdout(predicate::str::contains("1 occurrences"));
}

#[test]
fn parallel_scan_covers_all_files() {
    let temp_dir = TempDir::new().unwrap();
    for i in 0..4 {
        let path = temp_dir.path().join(format!("part-{i}.txt"));
        fs::write(&path, format!("chunk {i} {MARKER}")).unwrap();
    }

    let mut cmd = Command::cargo_bin("tripwire").unwrap();
    cmd.arg("scan")
        .arg("-i")
        .arg(format!("{}/part-*.txt", temp_dir.path().display()))
        .arg("-m")
        .arg(MARKER)
        .arg("--parallel")
        .arg("-t")
        .arg("2")
        .arg("-q");

    let assert = cmd.assert().success();
    let stdout = String::from_utf8(assert.get_output().stdout.clone()).unwrap();
    for i in 0..4 {
        assert!(stdout.contains(&format!("part-{i}.txt: 1 occurrences")));
    }
}
