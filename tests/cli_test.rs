//! Binary-level CLI tests for tagmend-rs.

#![allow(clippy::expect_used)]

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

fn bin() -> Command {
    Command::cargo_bin("tagmend-rs").expect("binary exists")
}

#[test]
fn test_trim_from_stdin() {
    bin()
        .arg("trim")
        .write_stdin("<div>hello<!-- ITEM_END:1 --> world<table><tr><td>x")
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "<div>hello<!-- ITEM_END:1 --></div>",
        ));
}

#[test]
fn test_trim_json_format() {
    bin()
        .args(["trim", "--format", "json"])
        .write_stdin("<div>hello<!-- ITEM_END:1 --> world")
        .assert()
        .success()
        .stdout(predicate::str::contains("\"item-marker\""));
}

#[test]
fn test_normalize_from_stdin() {
    bin()
        .arg("normalize")
        .write_stdin("a<br><br><br>b")
        .assert()
        .success()
        .stdout(predicate::str::contains("a<br>b"));
}

#[test]
fn test_check_reports_open_table() {
    bin()
        .arg("check")
        .write_stdin("<table><tr><td>x")
        .assert()
        .success()
        .stdout(predicate::str::contains("Inside open table: yes"));
}

#[test]
fn test_missing_file_fails() {
    bin()
        .args(["trim", "/nonexistent/capture.html"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("file not found"));
}

#[test]
fn test_merge_files() {
    let temp = TempDir::new().expect("temp dir");
    let first = temp.path().join("phase1.html");
    std::fs::write(&first, "<div>A</div>").expect("write first");

    bin()
        .arg("merge")
        .arg(&first)
        .write_stdin("<html><body><style>.x{}</style><p>B</p></body></html>")
        .assert()
        .success()
        .stdout(predicate::str::contains("<div>A</div><p>B</p>"));
}
