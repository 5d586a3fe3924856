//! Configuration integration tests.
//!
//! These tests verify config discovery, format parsing, and precedence
//! from an end-to-end perspective using the compiled binary. Tests use
//! `info --json` to assert actual config values, not just process success.

use assert_cmd::Command;
use serde_json::Value;
use std::fs;
use tempfile::TempDir;

/// Returns a Command configured to run our binary.
#[allow(deprecated)]
fn cmd() -> Command {
    Command::cargo_bin(env!("CARGO_PKG_NAME")).unwrap()
}

/// Run `info --json` from a directory and parse the JSON output.
fn info_json(dir: &std::path::Path) -> Value {
    let output = cmd()
        .args(["-C", dir.to_str().unwrap(), "info", "--json"])
        .output()
        .expect("failed to run command");
    assert!(
        output.status.success(),
        "command failed: {}",
        String::from_utf8_lossy(&output.stderr)
    );
    serde_json::from_slice(&output.stdout).expect("invalid JSON output")
}

// =============================================================================
// Config File Discovery
// =============================================================================

#[test]
fn runs_without_config_file() {
    let tmp = TempDir::new().unwrap();
    let json = info_json(tmp.path());

    assert_eq!(
        json["config"]["log_level"], "info",
        "should use default log level"
    );
    assert_eq!(json["config"]["window_size"], 5);
    assert!(
        json["config"]["config_file"].is_null(),
        "no config file should be reported"
    );
}

#[test]
fn discovers_dotfile_config_in_current_dir() {
    let tmp = TempDir::new().unwrap();
    let config_path = tmp.path().join(".prosestat.toml");
    fs::write(&config_path, r#"log_level = "debug""#).unwrap();

    let json = info_json(tmp.path());

    assert_eq!(json["config"]["log_level"], "debug");
    let reported = json["config"]["config_file"].as_str().unwrap();
    assert!(
        reported.ends_with(".prosestat.toml"),
        "should report dotfile: {reported}"
    );
}

#[test]
fn discovers_regular_config_in_current_dir() {
    let tmp = TempDir::new().unwrap();
    fs::write(tmp.path().join("prosestat.toml"), "window_size = 15").unwrap();

    let json = info_json(tmp.path());

    assert_eq!(json["config"]["window_size"], 15);
}

#[test]
fn discovers_yaml_config() {
    let tmp = TempDir::new().unwrap();
    fs::write(
        tmp.path().join("prosestat.yaml"),
        "exclude_spaces: true\nchar_limit: 280\n",
    )
    .unwrap();

    let json = info_json(tmp.path());

    assert_eq!(json["config"]["exclude_spaces"], true);
    assert_eq!(json["config"]["char_limit"], 280);
}

#[test]
fn discovers_json_config() {
    let tmp = TempDir::new().unwrap();
    fs::write(
        tmp.path().join("prosestat.json"),
        r#"{"log_level": "warn"}"#,
    )
    .unwrap();

    let json = info_json(tmp.path());

    assert_eq!(json["config"]["log_level"], "warn");
}

// =============================================================================
// Precedence
// =============================================================================

#[test]
fn regular_file_overrides_dotfile() {
    let tmp = TempDir::new().unwrap();
    fs::write(tmp.path().join(".prosestat.toml"), "window_size = 10").unwrap();
    fs::write(tmp.path().join("prosestat.toml"), "window_size = 20").unwrap();

    let json = info_json(tmp.path());

    assert_eq!(json["config"]["window_size"], 20);
}

#[test]
fn explicit_config_flag_wins() {
    let tmp = TempDir::new().unwrap();
    fs::write(tmp.path().join(".prosestat.toml"), "window_size = 10").unwrap();
    let explicit = tmp.path().join("override.toml");
    fs::write(&explicit, "window_size = 30").unwrap();

    let output = cmd()
        .args([
            "-C",
            tmp.path().to_str().unwrap(),
            "--config",
            explicit.to_str().unwrap(),
            "info",
            "--json",
        ])
        .output()
        .unwrap();
    assert!(output.status.success());
    let json: Value = serde_json::from_slice(&output.stdout).unwrap();

    assert_eq!(json["config"]["window_size"], 30);
    let reported = json["config"]["config_file"].as_str().unwrap();
    assert!(reported.ends_with("override.toml"));
}

#[test]
fn env_var_overrides_discovered_config() {
    let tmp = TempDir::new().unwrap();
    fs::write(tmp.path().join(".prosestat.toml"), "window_size = 10").unwrap();

    let output = cmd()
        .args(["-C", tmp.path().to_str().unwrap(), "info", "--json"])
        .env("PROSESTAT_WINDOW_SIZE", "40")
        .output()
        .unwrap();
    assert!(output.status.success());
    let json: Value = serde_json::from_slice(&output.stdout).unwrap();

    assert_eq!(json["config"]["window_size"], 40);
}

// =============================================================================
// Config Values Drive Commands
// =============================================================================

#[test]
fn config_char_limit_applies_to_analyze() {
    let tmp = TempDir::new().unwrap();
    fs::write(tmp.path().join(".prosestat.toml"), "char_limit = 5").unwrap();
    let input = tmp.path().join("input.txt");
    fs::write(&input, "more than five characters").unwrap();

    cmd()
        .args([
            "-C",
            tmp.path().to_str().unwrap(),
            "analyze",
            "input.txt",
        ])
        .assert()
        .failure();
}

#[test]
fn cli_flag_overrides_config_char_limit() {
    let tmp = TempDir::new().unwrap();
    fs::write(tmp.path().join(".prosestat.toml"), "char_limit = 5").unwrap();
    let input = tmp.path().join("input.txt");
    fs::write(&input, "more than five characters").unwrap();

    cmd()
        .args([
            "-C",
            tmp.path().to_str().unwrap(),
            "analyze",
            "input.txt",
            "--char-limit",
            "1000",
        ])
        .assert()
        .success();
}

#[test]
fn config_window_size_applies_to_frequency() {
    let tmp = TempDir::new().unwrap();
    fs::write(tmp.path().join(".prosestat.toml"), "window_size = 7").unwrap();
    let input = tmp.path().join("input.txt");
    fs::write(&input, "abcdefghij").unwrap();

    let output = cmd()
        .args([
            "-C",
            tmp.path().to_str().unwrap(),
            "--json",
            "frequency",
            "input.txt",
        ])
        .output()
        .unwrap();
    assert!(output.status.success());
    let json: Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(json.as_array().unwrap().len(), 7);
}

#[test]
fn max_input_bytes_rejects_oversized_file() {
    let tmp = TempDir::new().unwrap();
    fs::write(tmp.path().join(".prosestat.toml"), "max_input_bytes = 10").unwrap();
    let input = tmp.path().join("input.txt");
    fs::write(&input, "definitely more than ten bytes of text").unwrap();

    let output = cmd()
        .args(["-C", tmp.path().to_str().unwrap(), "metrics", "input.txt"])
        .output()
        .unwrap();
    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("input too large"), "stderr: {stderr}");
}

#[test]
fn disable_input_limit_allows_oversized_file() {
    let tmp = TempDir::new().unwrap();
    fs::write(
        tmp.path().join(".prosestat.toml"),
        "max_input_bytes = 10\ndisable_input_limit = true\n",
    )
    .unwrap();
    let input = tmp.path().join("input.txt");
    fs::write(&input, "definitely more than ten bytes of text").unwrap();

    cmd()
        .args(["-C", tmp.path().to_str().unwrap(), "metrics", "input.txt"])
        .assert()
        .success();
}
