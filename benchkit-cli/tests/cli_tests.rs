//! CLI integration tests

use assert_cmd::cargo::cargo_bin_cmd;
use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use tempfile::TempDir;

/// Build command for the benchkit-cli binary (finds it in target/debug when run via cargo test).
fn benchkit_cli() -> Command {
    let mut cmd = cargo_bin_cmd!("benchkit-cli");
    cmd.env_remove("BENCHKIT_GEMINI_API_KEY")
        .env_remove("GEMINI_API_KEY");
    cmd
}

#[test]
fn test_cli_help() {
    let mut cmd = benchkit_cli();

    cmd.arg("--help");
    cmd.assert()
        .success()
        .stdout(predicate::str::contains("resistor"));
}

#[test]
fn test_cli_version() {
    let mut cmd = benchkit_cli();

    cmd.arg("--version");
    cmd.assert()
        .success()
        .stdout(predicate::str::contains(env!("CARGO_PKG_VERSION")));
}

#[test]
fn test_cli_resistor_decode() {
    let mut cmd = benchkit_cli();

    cmd.args(["resistor", "decode", "brown", "black", "red", "gold"]);
    cmd.assert()
        .success()
        .stdout(predicate::str::contains("1kΩ ±5%"));
}

#[test]
fn test_cli_resistor_decode_rejects_unknown_color() {
    let mut cmd = benchkit_cli();

    cmd.args(["resistor", "decode", "gray", "black", "red", "gold"]);
    cmd.assert().failure();
}

#[test]
fn test_cli_resistor_decode_rejects_non_digit_band() {
    let mut cmd = benchkit_cli();

    cmd.args(["resistor", "decode", "gold", "black", "red", "gold"]);
    cmd.assert()
        .failure()
        .stderr(predicate::str::contains("Error:"));
}

#[test]
fn test_cli_resistor_encode() {
    let mut cmd = benchkit_cli();

    cmd.args(["resistor", "encode", "4k7"]);
    cmd.assert()
        .success()
        .stdout(predicate::str::contains("yellow violet red gold"));
}

#[test]
fn test_cli_ohms_law() {
    let mut cmd = benchkit_cli();

    cmd.args(["ohms", "--solve", "resistance", "--voltage", "12", "--power", "6"]);
    cmd.assert()
        .success()
        .stdout(predicate::str::contains("24.00"))
        .stdout(predicate::str::contains("0.50"));
}

#[test]
fn test_cli_ohms_law_incomplete_is_not_an_error() {
    let mut cmd = benchkit_cli();

    cmd.args(["ohms", "--solve", "power", "--voltage", "12"]);
    cmd.assert()
        .success()
        .stdout(predicate::str::contains("Not enough known values"));
}

#[test]
fn test_cli_ohms_law_domain_error() {
    let mut cmd = benchkit_cli();

    cmd.args(["ohms", "--solve", "current", "--voltage", "5", "--resistance", "0"]);
    cmd.assert()
        .failure()
        .stderr(predicate::str::contains("undefined"));
}

#[test]
fn test_cli_series() {
    let mut cmd = benchkit_cli();

    cmd.args(["series", "1k", "4k7"]);
    cmd.assert()
        .success()
        .stdout(predicate::str::contains("5700.00"));
}

#[test]
fn test_cli_parallel_without_valid_values() {
    let mut cmd = benchkit_cli();

    cmd.args(["parallel", "abc"]);
    cmd.assert()
        .failure()
        .stderr(predicate::str::contains("Please enter valid resistor values"));
}

#[test]
fn test_cli_led_defaults() {
    let mut cmd = benchkit_cli();

    cmd.arg("led");
    cmd.assert()
        .success()
        .stdout(predicate::str::contains("150.00"));
}

#[test]
fn test_cli_json_output_is_valid() {
    let mut cmd = benchkit_cli();

    cmd.args(["--format", "json", "resistor", "decode", "yellow", "violet", "red", "gold"]);
    let output = cmd.output().unwrap();
    assert!(output.status.success());

    let value: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(value["ohms"], 4700.0);
}

#[test]
fn test_cli_ic_pinout() {
    let mut cmd = benchkit_cli();

    cmd.args(["ic", "555"]);
    cmd.assert()
        .success()
        .stdout(predicate::str::contains("TRIG"));
}

#[test]
fn test_cli_ic_no_match() {
    let mut cmd = benchkit_cli();

    cmd.args(["ic", "zz9000"]);
    cmd.assert()
        .success()
        .stdout(predicate::str::contains("No ICs found"));
}

#[test]
fn test_cli_route() {
    let mut cmd = benchkit_cli();

    cmd.args(["route", "NE555"]);
    cmd.assert()
        .success()
        .stdout(predicate::str::contains("IC finder"));
}

#[test]
fn test_cli_identify_without_api_key() {
    let temp = TempDir::new().unwrap();
    let image = temp.path().join("part.jpg");
    fs::write(&image, b"not really a jpeg").unwrap();

    let mut cmd = benchkit_cli();
    cmd.arg("identify").arg(&image);
    cmd.assert()
        .failure()
        .stderr(predicate::str::contains("Missing API key"));
}

#[test]
fn test_cli_identify_missing_image() {
    let mut cmd = benchkit_cli();

    cmd.args(["identify", "/nonexistent/part.jpg"]);
    cmd.assert()
        .failure()
        .stderr(predicate::str::contains("reading"));
}
