//! Integration tests for the CLI

use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use tempfile::TempDir;

/// A command with a hermetic home directory, so runs never pick up the
/// developer's own `~/.autopack` overrides.
fn autopack(home: &TempDir) -> Command {
    let mut cmd = Command::new(assert_cmd::cargo::cargo_bin!("autopack"));
    cmd.env("HOME", home.path());
    cmd
}

#[test]
fn test_cli_version() {
    let home = TempDir::new().expect("temp home");
    let mut cmd = autopack(&home);
    cmd.arg("--version");
    cmd.assert().success().stdout(predicate::str::contains("autopack"));
}

#[test]
fn test_cli_help_exits_zero() {
    let home = TempDir::new().expect("temp home");
    let mut cmd = autopack(&home);
    cmd.arg("--help");
    cmd.assert()
        .success()
        .stdout(predicate::str::contains("Content root directory"))
        .stdout(predicate::str::contains("--package-name"))
        .stdout(predicate::str::contains("--output-location"));
}

#[test]
fn test_unknown_flag_exits_one_with_usage() {
    let home = TempDir::new().expect("temp home");
    let mut cmd = autopack(&home);
    cmd.args([".", "--no-such-flag"]);
    cmd.assert().code(1).stderr(predicate::str::contains("Usage"));
}

#[test]
fn test_missing_content_root_fails() {
    let home = TempDir::new().expect("temp home");
    let mut cmd = autopack(&home);
    cmd.args(["-n", "demo"]);
    cmd.assert()
        .code(1)
        .stderr(predicate::str::contains("Configuration error"))
        .stderr(predicate::str::contains("content"));
}

#[test]
fn test_full_run_reports_the_stub_handoff() {
    let home = TempDir::new().expect("temp home");
    let content = TempDir::new().expect("temp content dir");
    let out = TempDir::new().expect("temp out dir");
    fs::write(content.path().join("data.txt"), "payload").expect("write content file");

    let mut cmd = autopack(&home);
    cmd.args([
        content.path().to_str().expect("utf8 content path"),
        "-n",
        "demo",
        "-o",
        out.path().to_str().expect("utf8 out path"),
    ]);
    cmd.assert()
        .success()
        .stdout(predicate::str::contains("generation parameters for package 'demo'"))
        .stdout(predicate::str::contains("no package was written"));
}

#[test]
fn test_empty_package_name_fails_validation() {
    let home = TempDir::new().expect("temp home");
    let content = TempDir::new().expect("temp content dir");
    let out = TempDir::new().expect("temp out dir");

    let mut cmd = autopack(&home);
    cmd.args([
        content.path().to_str().expect("utf8 content path"),
        "-n",
        "",
        "-o",
        out.path().to_str().expect("utf8 out path"),
    ]);
    cmd.assert()
        .code(1)
        .stderr(predicate::str::contains("package-name"));
}

#[test]
fn test_nonexistent_output_location_fails() {
    let home = TempDir::new().expect("temp home");
    let content = TempDir::new().expect("temp content dir");

    let mut cmd = autopack(&home);
    cmd.args([
        content.path().to_str().expect("utf8 content path"),
        "-n",
        "demo",
        "-o",
        "/nonexistent_output_12345",
    ]);
    cmd.assert()
        .code(1)
        .stderr(predicate::str::contains("does not exist or is not a directory"));
}

#[test]
fn test_missing_generation_params_file_fails() {
    let home = TempDir::new().expect("temp home");
    let content = TempDir::new().expect("temp content dir");
    let out = TempDir::new().expect("temp out dir");

    let mut cmd = autopack(&home);
    cmd.args([
        content.path().to_str().expect("utf8 content path"),
        "-n",
        "demo",
        "-o",
        out.path().to_str().expect("utf8 out path"),
        "-g",
        "nonexistent_params_12345.toml",
    ]);
    cmd.assert()
        .code(1)
        .stderr(predicate::str::contains("does not exist or is not a file"));
}

#[test]
fn test_info_prints_resolved_parameters() {
    let home = TempDir::new().expect("temp home");
    let content = TempDir::new().expect("temp content dir");
    let out = TempDir::new().expect("temp out dir");

    let mut cmd = autopack(&home);
    cmd.args([
        content.path().to_str().expect("utf8 content path"),
        "-n",
        "demo",
        "-o",
        out.path().to_str().expect("utf8 out path"),
        "-a",
        "zip",
        "--info",
    ]);
    cmd.assert()
        .success()
        .stdout(predicate::str::contains("package-name = demo"))
        .stdout(predicate::str::contains("archiving-format = zip"))
        .stdout(predicate::str::contains("compression-format = none"));
}

#[test]
fn test_user_params_file_is_consulted() {
    let home = TempDir::new().expect("temp home");
    let content = TempDir::new().expect("temp content dir");
    let out = TempDir::new().expect("temp out dir");
    fs::create_dir_all(home.path().join(".autopack")).expect("mkdir user config dir");
    fs::write(
        home.path().join(".autopack/params.toml"),
        "[archive]\nserialization = \"XML\"\n",
    )
    .expect("write user params");

    let mut cmd = autopack(&home);
    cmd.args([
        content.path().to_str().expect("utf8 content path"),
        "-n",
        "demo",
        "-o",
        out.path().to_str().expect("utf8 out path"),
        "--info",
    ]);
    cmd.assert()
        .success()
        .stdout(predicate::str::contains("serialization-format = XML"));
}

#[test]
fn test_init_writes_a_parameter_template() {
    let home = TempDir::new().expect("temp home");
    let dir = TempDir::new().expect("temp dir");
    let output = dir.path().join("autopack.toml");

    let mut cmd = autopack(&home);
    cmd.args(["init", "--output", output.to_str().expect("utf8 output path")]);
    cmd.assert()
        .success()
        .stdout(predicate::str::contains("Parameter file template written to"));

    let written = fs::read_to_string(&output).expect("read template");
    assert!(written.contains("[package]"));
    assert!(written.contains("[archive]"));
}
