use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use tempfile::TempDir;

#[allow(deprecated)]
fn reqgate_cmd() -> Command {
    Command::cargo_bin("reqgate").unwrap()
}

#[test]
fn test_fmt_normalizes_comment_spacing() {
    let tmp = TempDir::new().unwrap();
    let path = tmp.path().join("reqs.txt");
    fs::write(&path, "coverage!=4.4,>=4.0    #   Apache-2.0\n").unwrap();

    reqgate_cmd()
        .args(["fmt", path.to_str().unwrap()])
        .assert()
        .success()
        .stderr(predicate::str::contains("Formatted"));

    let formatted = fs::read_to_string(&path).unwrap();
    assert_eq!(formatted, "coverage!=4.4,>=4.0 # Apache-2.0\n");
}

#[test]
fn test_fmt_preserves_line_order_and_comments() {
    let tmp = TempDir::new().unwrap();
    let path = tmp.path().join("reqs.txt");
    fs::write(
        &path,
        "# header comment\n\nb>=1.0   # MIT\na>=2.0 # BSD\n",
    )
    .unwrap();

    reqgate_cmd()
        .args(["fmt", path.to_str().unwrap()])
        .assert()
        .success();

    let formatted = fs::read_to_string(&path).unwrap();
    assert_eq!(formatted, "# header comment\n\nb>=1.0 # MIT\na>=2.0 # BSD\n");
}

#[test]
fn test_fmt_idempotent() {
    let tmp = TempDir::new().unwrap();
    let path = tmp.path().join("reqs.txt");
    let canonical = "hacking>=6.1.0,<6.2.0 # Apache-2.0\n";
    fs::write(&path, canonical).unwrap();

    reqgate_cmd()
        .args(["fmt", path.to_str().unwrap()])
        .assert()
        .success()
        .stderr(predicate::str::contains("Unchanged"));

    assert_eq!(fs::read_to_string(&path).unwrap(), canonical);
}

#[test]
fn test_fmt_check_fails_on_noncanonical() {
    let tmp = TempDir::new().unwrap();
    let path = tmp.path().join("reqs.txt");
    fs::write(&path, "coverage!=4.4,>=4.0    #   Apache-2.0\n").unwrap();

    reqgate_cmd()
        .args(["fmt", path.to_str().unwrap(), "--check"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("not canonically formatted"));

    // --check never rewrites
    let content = fs::read_to_string(&path).unwrap();
    assert!(content.contains("    #   "));
}

#[test]
fn test_fmt_check_passes_on_canonical() {
    let tmp = TempDir::new().unwrap();
    let path = tmp.path().join("reqs.txt");
    fs::write(&path, "testtools>=2.2.0 # MIT\n").unwrap();

    reqgate_cmd()
        .args(["fmt", path.to_str().unwrap(), "--check"])
        .assert()
        .success();
}
