//! Integration tests for the `reqsort` binary.

use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use std::path::PathBuf;

fn fixture(name: &str) -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("specs").join(name)
}

fn reqsort() -> Command {
    let mut cmd = Command::cargo_bin("reqsort").unwrap();
    cmd.env_remove("RUST_LOG");
    cmd
}

#[test]
fn test_writes_sorted_document() {
    let dir = tempfile::tempdir().unwrap();
    let output = dir.path().join("out").join("REQUIREMENTS_SORTED.md");

    reqsort()
        .arg(fixture("requirements_specification.csv"))
        .arg("-o")
        .arg(&output)
        .assert()
        .success()
        .stderr(predicate::str::contains("Sorted 6 requirements."))
        .stderr(predicate::str::contains(
            "Example Order: BRD - USC 1 -> GRM - USC 1 ...",
        ));

    let doc = fs::read_to_string(&output).unwrap();
    assert!(doc.starts_with("# Paws & Claws - Requirements Specification\n\n"));
    assert!(doc.contains("> **Total User Stories:** 6\n"));

    let first_row = doc.lines().nth(7).unwrap();
    assert!(first_row.starts_with("| BRD - USC 1 "));
}

#[test]
fn test_stdout_output() {
    reqsort()
        .arg(fixture("requirements_specification.csv"))
        .args(["-o", "-"])
        .assert()
        .success()
        .stdout(predicate::str::starts_with("# Paws & Claws"))
        .stdout(predicate::str::contains("| GRM - USC 10 "));
}

#[test]
fn test_identical_runs_identical_output() {
    let run = || {
        reqsort()
            .arg(fixture("requirements_specification.csv"))
            .args(["-o", "-"])
            .output()
            .unwrap()
            .stdout
    };
    assert_eq!(run(), run());
}

#[test]
fn test_config_file() {
    let dir = tempfile::tempdir().unwrap();
    let config = dir.path().join("reqsort.toml");
    fs::write(&config, "title = \"Pet Hotel Backlog\"\n").unwrap();

    reqsort()
        .arg(fixture("requirements_specification.csv"))
        .args(["-o", "-"])
        .arg("-c")
        .arg(&config)
        .assert()
        .success()
        .stdout(predicate::str::starts_with("# Pet Hotel Backlog\n"));
}

#[test]
fn test_example_config_parses() {
    reqsort()
        .arg(fixture("requirements_specification.csv"))
        .args(["-o", "-"])
        .arg("-c")
        .arg(fixture("reqsort.toml"))
        .assert()
        .success();
}

#[test]
fn test_missing_input_fails_without_output() {
    let dir = tempfile::tempdir().unwrap();
    let output = dir.path().join("REQUIREMENTS_SORTED.md");

    reqsort()
        .arg(dir.path().join("missing.csv"))
        .arg("-o")
        .arg(&output)
        .assert()
        .failure()
        .stderr(predicate::str::contains("failed to read input"));

    assert!(!output.exists());
}

#[test]
fn test_bad_config_fails() {
    let dir = tempfile::tempdir().unwrap();
    let config = dir.path().join("bad.toml");
    fs::write(&config, "skip_lines = \"two\"\n").unwrap();

    reqsort()
        .arg(fixture("requirements_specification.csv"))
        .args(["-o", "-"])
        .arg("-c")
        .arg(&config)
        .assert()
        .failure()
        .stderr(predicate::str::contains("invalid config"));
}

#[test]
fn test_flags_override_config() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("export.csv");
    fs::write(
        &input,
        "GRM-USC 1-A,BRD: As a sitter I want a roster.,Feature\n",
    )
    .unwrap();

    reqsort()
        .arg(&input)
        .args(["-o", "-", "--title", "Sitter Backlog", "--skip-lines", "0"])
        .args(["--strip", "BRD:"])
        .assert()
        .success()
        .stdout(predicate::str::starts_with("# Sitter Backlog\n"))
        .stdout(predicate::str::contains("| As a sitter I want a roster. |"))
        .stderr(predicate::str::contains("Sorted 1 requirements."));
}

#[test]
fn test_cr_only_export() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("export.csv");
    fs::write(
        &input,
        "meta one\rmeta two\rGRM-USC 1-A,Long enough story,F\rBRD-USC 2-B,Another story here,F\r",
    )
    .unwrap();

    reqsort()
        .arg(&input)
        .args(["-o", "-"])
        .assert()
        .success()
        .stderr(predicate::str::contains("Example Order: BRD - USC 2 -> GRM - USC 1 ..."));
}
