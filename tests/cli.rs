use assert_cmd::Command;
use predicates::prelude::PredicateBooleanExt;
use predicates::str::contains;
use std::fs;
use std::path::PathBuf;

/// Helper to get a temporary config directory
fn temp_config_dir() -> tempfile::TempDir {
    tempfile::tempdir().expect("create temp dir")
}

/// Helper to get config file path in the temp dir
fn config_file_path(dir: &tempfile::TempDir) -> PathBuf {
    dir.path().join(".napfi").join("config.json")
}

const BINARY_NAME: &str = "napfi-dashboard";
const ACCOUNT: &str = "0x52908400098527886E0F7030069857D2E4169EE7";

#[test]
/// Help command should display usage information.
fn cli_help_displays_usage() {
    let mut cmd = Command::cargo_bin(BINARY_NAME).unwrap();
    cmd.arg("--help");
    cmd.assert()
        .success()
        .stdout(contains("Command-line arguments"));
}

#[test]
/// A disconnected headless run shows the portfolio and the static decision panel.
fn headless_disconnected_run_shows_static_panel() {
    let tmp = temp_config_dir();
    let mut cmd = Command::cargo_bin(BINARY_NAME).unwrap();
    cmd.args(["start", "--headless", "--once", "--latency-ms", "0"])
        .env("HOME", tmp.path())
        .assert()
        .success()
        .stdout(contains("Loading dashboard data..."))
        .stdout(contains("Total Value: $10245.67"))
        .stdout(contains("  Balancer LP: 10%"))
        .stdout(contains("Connect your wallet to interact"))
        .stdout(contains("Decision module:").not());
}

#[test]
/// A connected headless run populates the decision module inputs.
fn headless_connected_run_populates_bridge() {
    let tmp = temp_config_dir();
    let mut cmd = Command::cargo_bin(BINARY_NAME).unwrap();
    cmd.args(["start", "--headless", "--once", "--latency-ms", "0"])
        .args(["--account", ACCOUNT])
        .env("HOME", tmp.path())
        .assert()
        .success()
        .stdout(contains("Connected: 0x5290...9EE7"))
        .stdout(contains(
            "Decision module: controller 100.00 / strategy 50.00 @ 5.2% APY",
        ));
}

#[test]
/// A simulated outage surfaces the generic failure message.
fn headless_failure_shows_error() {
    let tmp = temp_config_dir();
    let mut cmd = Command::cargo_bin(BINARY_NAME).unwrap();
    cmd.args(["start", "--headless", "--once", "--latency-ms", "0"])
        .args(["--simulate-failures", "1"])
        .env("HOME", tmp.path())
        .assert()
        .success()
        .stdout(contains(
            "Error: Failed to load dashboard data. Please try again.",
        ));
}

#[test]
/// Invalid accounts are rejected before anything starts.
fn start_rejects_invalid_account() {
    let tmp = temp_config_dir();
    let mut cmd = Command::cargo_bin(BINARY_NAME).unwrap();
    cmd.args(["start", "--headless", "--once", "--account", "0x1234"])
        .env("HOME", tmp.path())
        .assert()
        .failure()
        .stderr(contains("Invalid Ethereum wallet address"));
}

#[test]
/// init-config writes a configuration that start then picks up.
fn init_config_is_used_by_start() {
    let tmp = temp_config_dir();
    let config_path = config_file_path(&tmp);
    assert!(!config_path.exists());

    let mut cmd = Command::cargo_bin(BINARY_NAME).unwrap();
    cmd.args(["init-config", "--account", ACCOUNT])
        .env("HOME", tmp.path())
        .assert()
        .success()
        .stdout(contains("Writing configuration"));
    assert!(config_path.exists());

    let saved = fs::read_to_string(&config_path).unwrap();
    assert!(saved.contains(ACCOUNT));

    let mut cmd = Command::cargo_bin(BINARY_NAME).unwrap();
    cmd.args(["start", "--headless", "--once", "--latency-ms", "0"])
        .env("HOME", tmp.path())
        .assert()
        .success()
        .stdout(contains("Decision module:"));
}
