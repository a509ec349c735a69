// Integration tests for the contrib-board CLI surface.
//
// These tests use assert_cmd to invoke the binary and verify
// argument handling, exit codes, and stdout/stderr output.

use assert_cmd::Command;
use predicates::prelude::*;

/// Helper to build a Command for the contrib-board binary.
fn board() -> Command {
    Command::cargo_bin("contrib-board").expect("binary should exist")
}

#[test]
fn cli_version_flag() {
    board()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("contrib-board"));
}

#[test]
fn cli_help_flag() {
    board()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("contributor leaderboard"));
}

#[test]
fn score_requires_dump_path() {
    board()
        .arg("score")
        .assert()
        .failure()
        .stderr(predicate::str::contains("required"));
}

#[test]
fn quiet_and_verbose_conflict() {
    board()
        .args(["-q", "-v", "events"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("cannot be used with"));
}

#[test]
fn rank_rejects_unknown_format() {
    board()
        .args(["rank", ".", "--format", "csv"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("invalid value"));
}

#[test]
fn rank_rejects_missing_path() {
    board()
        .args(["rank", "/definitely/not/a/real/dir"])
        .assert()
        .code(3)
        .stderr(predicate::str::contains("path does not exist"));
}
