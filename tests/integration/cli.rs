//! CLI behaviour of the slngen binary

use super::test_utils::{named_root, write_file};
use assert_cmd::prelude::*;
use predicates::prelude::*;
use std::fs;
use std::process::Command;
use tempfile::TempDir;

fn get_slngen_cmd() -> Command {
    Command::cargo_bin("slngen").unwrap()
}

#[test]
fn test_missing_argument_is_usage_error() {
    get_slngen_cmd()
        .assert()
        .code(1)
        .stderr(predicate::str::contains(
            "Please provide the directory to generate the sln file for.",
        ));
}

#[test]
fn test_non_directory_argument() {
    let temp_dir = TempDir::new().unwrap();
    let file = temp_dir.path().join("file.txt");
    fs::write(&file, "content").unwrap();

    get_slngen_cmd()
        .arg(&file)
        .assert()
        .code(1)
        .stderr(predicate::str::contains(format!(
            "{} is not a directory.",
            file.display()
        )));

    assert!(!temp_dir.path().join("file.txt.sln").exists());
}

#[test]
fn test_missing_directory_argument_writes_nothing() {
    let temp_dir = TempDir::new().unwrap();

    get_slngen_cmd()
        .arg(temp_dir.path().join("nowhere"))
        .assert()
        .code(1)
        .stderr(predicate::str::contains("is not a directory."));

    assert_eq!(fs::read_dir(temp_dir.path()).unwrap().count(), 0);
}

#[test]
fn test_generates_solution() {
    let temp_dir = TempDir::new().unwrap();
    let root = named_root(&temp_dir, "Demo");
    write_file(&root, "src/Demo.csproj", "<Project />");

    get_slngen_cmd()
        .arg(&root)
        .assert()
        .success()
        .stdout(predicate::str::contains("Writing "))
        .stdout(predicate::str::contains("Demo.sln..."));

    let document = fs::read_to_string(root.join("Demo.sln")).unwrap();
    assert!(document.contains("\"Demo.csproj\""));
}

#[test]
fn test_trailing_separator_is_stripped() {
    let temp_dir = TempDir::new().unwrap();
    let root = named_root(&temp_dir, "Slash");

    let arg = format!("{}{}", root.display(), std::path::MAIN_SEPARATOR);
    get_slngen_cmd().arg(arg).assert().success();

    assert!(root.join("Slash.sln").is_file());
}

#[test]
fn test_existing_output_is_overwritten() {
    let temp_dir = TempDir::new().unwrap();
    let root = named_root(&temp_dir, "Again");
    write_file(&root, "Again.sln", "stale content");

    get_slngen_cmd().arg(&root).assert().success();

    let document = fs::read_to_string(root.join("Again.sln")).unwrap();
    assert!(!document.contains("stale content"));
    assert!(document.starts_with("Microsoft Visual Studio Solution File"));
    assert!(!document.contains("Again.sln = Again.sln"));
}

#[test]
fn test_quiet_run_keeps_stderr_empty() {
    let temp_dir = TempDir::new().unwrap();
    let root = named_root(&temp_dir, "Quiet");
    write_file(&root, "a.txt", "a");

    get_slngen_cmd()
        .arg("--quiet")
        .arg(&root)
        .env_remove("SLNGEN_LOG")
        .assert()
        .success()
        .stderr(predicate::str::is_empty());
}

#[test]
fn test_invalid_logging_config_does_not_block_generation() {
    let temp_dir = TempDir::new().unwrap();
    let root = named_root(&temp_dir, "Demo");
    write_file(&root, "src/Demo.csproj", "<Project />");

    let config = temp_dir.path().join("cfg.toml");
    fs::write(&config, "[logging]\nformat = \"yaml\"\n").unwrap();

    get_slngen_cmd()
        .arg("--config")
        .arg(&config)
        .arg(&root)
        .env_remove("SLNGEN_LOG_FORMAT")
        .assert()
        .success()
        .stderr(predicate::str::contains("Ignoring logging configuration"));

    assert!(root.join("Demo.sln").is_file());
}

#[test]
fn test_write_failure_exits_non_zero() {
    let temp_dir = TempDir::new().unwrap();
    let root = named_root(&temp_dir, "W");
    // A directory at the output path makes the write fail
    fs::create_dir(root.join("W.sln")).unwrap();

    get_slngen_cmd()
        .arg(&root)
        .assert()
        .failure()
        .stderr(predicate::str::contains("Failed to write solution file"));
}
