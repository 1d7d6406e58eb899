//! End-to-end tests for the nwpack binary.
//!
//! Failure-path tests run against real temp directories; the success paths
//! substitute a stub packaging tool via the `NWPACK_TOOL` environment
//! variable so both exit-status branches are exercised without a
//! Web2Executable install.

use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

fn nwpack() -> Command {
    Command::cargo_bin("nwpack").unwrap()
}

fn write_manifest(dir: &Path, json: &serde_json::Value) {
    fs::write(dir.join("package.json"), json.to_string()).unwrap();
}

#[cfg(unix)]
fn write_tool_script(dir: &Path, body: &str) -> PathBuf {
    use std::os::unix::fs::PermissionsExt;

    let path = dir.join("fake_tool.sh");
    fs::write(&path, format!("#!/bin/sh\n{body}\n")).unwrap();
    fs::set_permissions(&path, fs::Permissions::from_mode(0o755)).unwrap();
    path
}

#[test]
fn test_help_output() {
    nwpack()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("NW.js packaging wrapper"))
        .stdout(predicate::str::contains(
            "Path to where the code to be packaged lives",
        ))
        .stdout(predicate::str::contains("where build products are written"));
}

#[test]
fn test_version_output() {
    nwpack()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains(format!(
            "nwpack {}",
            env!("CARGO_PKG_VERSION")
        )));
}

#[test]
fn test_missing_arguments_rejected() {
    nwpack().assert().failure();
    nwpack().arg("/tmp").assert().failure();
}

#[test]
fn test_nonexistent_package_directory() {
    let dir = TempDir::new().unwrap();
    let missing = dir.path().join("no_such_package");

    nwpack()
        .arg(&missing)
        .arg("out")
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("Not a directory"));
}

#[test]
fn test_missing_manifest() {
    let dir = TempDir::new().unwrap();

    nwpack()
        .arg(dir.path())
        .arg("out")
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("Unable to find"))
        .stderr(predicate::str::contains("package.json"));
}

#[test]
fn test_manifest_missing_main() {
    let dir = TempDir::new().unwrap();
    write_manifest(
        dir.path(),
        &serde_json::json!({"dependencies": {"nw": "^1.2.3"}}),
    );

    nwpack()
        .arg(dir.path())
        .arg("out")
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("Can't find \"main\""));
}

#[test]
fn test_manifest_missing_nw_dependency() {
    let dir = TempDir::new().unwrap();
    write_manifest(dir.path(), &serde_json::json!({"main": "app.js"}));

    nwpack()
        .arg(dir.path())
        .arg("out")
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("Can't find \"dependencies/nw\""));
}

#[test]
fn test_manifest_invalid_json() {
    let dir = TempDir::new().unwrap();
    fs::write(dir.path().join("package.json"), "{ not json").unwrap();

    nwpack()
        .arg(dir.path())
        .arg("out")
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("Failed to parse"));
}

#[cfg(unix)]
#[test]
fn test_successful_build() {
    let dir = TempDir::new().unwrap();
    write_manifest(
        dir.path(),
        &serde_json::json!({"main": "app.js", "dependencies": {"nw": "^1.2.3"}}),
    );
    let tool = write_tool_script(dir.path(), "exit 0");

    nwpack()
        .env("NWPACK_TOOL", &tool)
        .arg(dir.path())
        .arg("out")
        .assert()
        .success();
}

#[cfg(unix)]
#[test]
fn test_tool_failure_propagates() {
    let dir = TempDir::new().unwrap();
    write_manifest(
        dir.path(),
        &serde_json::json!({"main": "app.js", "dependencies": {"nw": "^1.2.3"}}),
    );
    let tool = write_tool_script(dir.path(), "exit 3");

    nwpack()
        .env("NWPACK_TOOL", &tool)
        .arg(dir.path())
        .arg("out")
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains(
            "Something went wrong in running the command",
        ));
}

#[cfg(unix)]
#[test]
fn test_tool_receives_expected_arguments() {
    let dir = TempDir::new().unwrap();
    write_manifest(
        dir.path(),
        &serde_json::json!({"main": "index.html", "dependencies": {"nw": "0.12.3"}}),
    );
    let record = dir.path().join("args.txt");
    let tool = write_tool_script(
        dir.path(),
        &format!("printf '%s\\n' \"$@\" > {}", record.display()),
    );

    nwpack()
        .env("NWPACK_TOOL", &tool)
        .arg(dir.path())
        .arg("dist")
        .assert()
        .success();

    let recorded = fs::read_to_string(&record).unwrap();
    let args: Vec<&str> = recorded.lines().collect();
    let pkg = dir.path().display().to_string();
    let expected = vec![
        pkg.clone(),
        "--export-to".to_string(),
        "linux-x32".to_string(),
        "--nw-version".to_string(),
        "0.12.3".to_string(),
        "--nw-compression-level".to_string(),
        "9".to_string(),
        "--output-dir".to_string(),
        format!("{pkg}/dist"),
        "--package-json".to_string(),
        format!("{pkg}/package.json"),
        "--main".to_string(),
        "index.html".to_string(),
    ];
    assert_eq!(args, expected);
}

#[cfg(unix)]
#[test]
fn test_caret_version_stripped_before_tool() {
    let dir = TempDir::new().unwrap();
    write_manifest(
        dir.path(),
        &serde_json::json!({"main": "app.js", "dependencies": {"nw": "^1.2.3"}}),
    );
    let record = dir.path().join("args.txt");
    let tool = write_tool_script(
        dir.path(),
        &format!("printf '%s\\n' \"$@\" > {}", record.display()),
    );

    nwpack()
        .env("NWPACK_TOOL", &tool)
        .arg(dir.path())
        .arg("out")
        .assert()
        .success();

    let recorded = fs::read_to_string(&record).unwrap();
    assert!(recorded.lines().any(|line| line == "1.2.3"));
    assert!(!recorded.contains('^'));
}

#[test]
fn test_json_log_format_accepted() {
    let dir = TempDir::new().unwrap();

    nwpack()
        .arg("--log-format")
        .arg("json")
        .arg(dir.path())
        .arg("out")
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("Unable to find"));
}
