use assert_cmd::Command;
use predicates::str::contains;
use std::fs;
use std::path::PathBuf;

/// Helper to get a temporary home directory
fn temp_home_dir() -> tempfile::TempDir {
    tempfile::tempdir().expect("create temp dir")
}

/// Helper to get config file path in the temp dir
fn config_file_path(dir: &tempfile::TempDir) -> PathBuf {
    dir.path().join(".nexero").join("config.json")
}

const BINARY_NAME: &str = "nexero-dashboard";

#[test]
/// Help command should display usage information.
fn cli_help_displays_usage() {
    let mut cmd = Command::cargo_bin(BINARY_NAME).unwrap();
    cmd.arg("--help");
    cmd.assert()
        .success()
        .stdout(contains("Analytics dashboard for VR property tours"))
        .stdout(contains("snapshot"));
}

#[test]
/// Setting the theme writes the lowercase value under the `theme` key.
fn theme_command_persists_choice() {
    let tmp = temp_home_dir();
    let config_path = config_file_path(&tmp);
    assert!(!config_path.exists());

    Command::cargo_bin(BINARY_NAME)
        .unwrap()
        .args(["theme", "dark"])
        .env("HOME", tmp.path())
        .assert()
        .success()
        .stdout(contains("Theme set to dark"));

    let saved = fs::read_to_string(&config_path).unwrap();
    assert!(saved.contains("\"theme\": \"dark\""));

    Command::cargo_bin(BINARY_NAME)
        .unwrap()
        .arg("theme")
        .env("HOME", tmp.path())
        .assert()
        .success()
        .stdout(contains("Current theme: dark"));
}

#[test]
/// Without a saved preference the theme is light.
fn theme_defaults_to_light() {
    let tmp = temp_home_dir();
    Command::cargo_bin(BINARY_NAME)
        .unwrap()
        .arg("theme")
        .env("HOME", tmp.path())
        .assert()
        .success()
        .stdout(contains("Current theme: light"));
}

#[test]
fn theme_command_rejects_unknown_mode() {
    let tmp = temp_home_dir();
    Command::cargo_bin(BINARY_NAME)
        .unwrap()
        .args(["theme", "solarized"])
        .env("HOME", tmp.path())
        .assert()
        .failure();
}

#[test]
/// A mock snapshot prints the fixed demo KPIs and ten sessions.
fn snapshot_with_mock_data() {
    let tmp = temp_home_dir();
    Command::cargo_bin(BINARY_NAME)
        .unwrap()
        .args(["snapshot", "--mock", "--days", "7"])
        .env("HOME", tmp.path())
        .assert()
        .success()
        .stdout(contains("DEMO DATA"))
        .stdout(contains("1,247"))
        .stdout(contains("8m 32s"))
        .stdout(contains("87.3%"))
        .stdout(contains("SES00010"));
}

#[test]
/// An unreachable backend falls back to demo data instead of failing.
fn snapshot_falls_back_when_backend_unreachable() {
    let tmp = temp_home_dir();
    Command::cargo_bin(BINARY_NAME)
        .unwrap()
        .args(["snapshot", "--api-url", "http://127.0.0.1:9/api/v1"])
        .env("HOME", tmp.path())
        .assert()
        .success()
        .stdout(contains("Backend unavailable"))
        .stdout(contains("1,247"));
}

#[test]
fn snapshot_rejects_unsupported_window() {
    let tmp = temp_home_dir();
    Command::cargo_bin(BINARY_NAME)
        .unwrap()
        .args(["snapshot", "--mock", "--days", "14"])
        .env("HOME", tmp.path())
        .assert()
        .failure()
        .stderr(contains("expected 7, 30, 90 or 365"));
}
