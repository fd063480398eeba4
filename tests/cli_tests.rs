//! Integration tests for the `eoq` binary.
//!
//! Every test points the binary at an isolated config directory so a
//! developer's own `~/.config/eoq/config.toml` cannot change the results.

use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use tempfile::TempDir;

/// Helper to create an isolated config home
fn setup_test_dir() -> TempDir {
    tempfile::tempdir().expect("Failed to create temp dir")
}

/// Helper to get the CLI with a clean environment
fn cli(home: &TempDir) -> Command {
    let mut cmd = Command::new(assert_cmd::cargo::cargo_bin!("eoq"));
    cmd.env("XDG_CONFIG_HOME", home.path()).env_remove("RUST_LOG");
    cmd
}

#[test]
fn test_cli_help() {
    let home = setup_test_dir();
    cli(&home)
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("Economic Order Quantity calculator"));
}

#[test]
fn test_default_command_uses_classic_defaults() {
    let home = setup_test_dir();
    cli(&home)
        .assert()
        .success()
        .stdout(predicate::str::contains("316.23 unit"))
        .stdout(predicate::str::contains("Total cost: Rp 316,228"));
}

#[test]
fn test_compute_high_volume() {
    let home = setup_test_dir();
    cli(&home)
        .args([
            "compute",
            "--demand",
            "12000",
            "--ordering-cost",
            "100000",
            "--holding-cost",
            "2000",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("1,095.45 unit"))
        .stdout(predicate::str::contains("Orders per year: 10.95"))
        .stdout(predicate::str::contains("Total cost: Rp 2,190,890"));
}

#[test]
fn test_zero_holding_cost_fails_without_output() {
    let home = setup_test_dir();
    cli(&home)
        .args(["compute", "--holding-cost", "0"])
        .assert()
        .failure()
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::contains("holding cost"));
}

#[test]
fn test_negative_demand_fails() {
    let home = setup_test_dir();
    cli(&home)
        .args(["compute", "--demand", "-10"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("greater than zero"));
}

#[test]
fn test_json_output() {
    let home = setup_test_dir();
    let output = cli(&home)
        .args(["compute", "--format", "json"])
        .output()
        .expect("Failed to run eoq");
    assert!(output.status.success());

    let value: serde_json::Value =
        serde_json::from_slice(&output.stdout).expect("Output is not JSON");
    let eoq = value["result"]["eoq"].as_f64().unwrap();
    assert!((eoq - 316.227_766).abs() < 1e-5);
}

#[test]
fn test_curve_to_stdout() {
    let home = setup_test_dir();
    let output = cli(&home)
        .args(["curve", "--samples", "25", "--domain", "eoq-bracket"])
        .output()
        .expect("Failed to run eoq");
    assert!(output.status.success());

    let text = String::from_utf8(output.stdout).unwrap();
    let mut lines = text.lines();
    assert_eq!(
        lines.next(),
        Some("quantity,ordering_cost,holding_cost,total_cost")
    );
    assert_eq!(lines.count(), 25);
}

#[test]
fn test_curve_to_file() {
    let home = setup_test_dir();
    let path = home.path().join("curve.csv");

    cli(&home)
        .args(["curve", "--output"])
        .arg(&path)
        .assert()
        .success()
        .stderr(predicate::str::contains("Wrote 200 samples"));

    let contents = fs::read_to_string(&path).expect("Failed to read CSV");
    assert_eq!(contents.lines().count(), 201);
    // demand-span default starts at Q = 1
    assert!(contents.lines().nth(1).unwrap().starts_with("1.0,"));
}

#[test]
fn test_curve_rejects_single_sample() {
    let home = setup_test_dir();
    cli(&home)
        .args(["curve", "--samples", "1"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("sample count"));
}

#[test]
fn test_curve_rejects_overflowing_totals() {
    let home = setup_test_dir();
    cli(&home)
        .args([
            "curve",
            "--demand",
            "1e200",
            "--ordering-cost",
            "1",
            "--holding-cost",
            "1e200",
        ])
        .assert()
        .failure()
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::contains("outside the representable range"));
}

#[test]
fn test_config_file_supplies_defaults() {
    let home = setup_test_dir();
    let config_path = home.path().join("custom.toml");
    fs::write(
        &config_path,
        r#"
[inputs]
annual_demand = 12000.0
ordering_cost = 100000.0
holding_cost = 2000.0

[report]
currency_symbol = "IDR"
"#,
    )
    .unwrap();

    cli(&home)
        .arg("--config")
        .arg(&config_path)
        .arg("compute")
        .assert()
        .success()
        .stdout(predicate::str::contains("Total cost: IDR 2,190,890"));
}

#[test]
fn test_config_in_xdg_dir_is_picked_up() {
    let home = setup_test_dir();
    let dir = home.path().join("eoq");
    fs::create_dir_all(&dir).unwrap();
    fs::write(dir.join("config.toml"), "[report]\nunit_label = \"pcs\"\n").unwrap();

    cli(&home)
        .assert()
        .success()
        .stdout(predicate::str::contains("316.23 pcs"));
}

#[test]
fn test_invalid_config_reported() {
    let home = setup_test_dir();
    let config_path = home.path().join("bad.toml");
    fs::write(&config_path, "[curve]\nsample_count = 1\n").unwrap();

    cli(&home)
        .arg("--config")
        .arg(&config_path)
        .assert()
        .failure()
        .stderr(predicate::str::contains("sample_count"));
}

#[test]
fn test_scenarios_lists_presets() {
    let home = setup_test_dir();
    cli(&home)
        .arg("scenarios")
        .assert()
        .success()
        .stdout(predicate::str::contains("classic"))
        .stdout(predicate::str::contains("high-volume"))
        .stdout(predicate::str::contains("Rp 2,190,890"));
}

#[test]
fn test_unknown_scenario_fails() {
    let home = setup_test_dir();
    cli(&home)
        .args(["scenarios", "nope"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("unknown scenario"));
}
