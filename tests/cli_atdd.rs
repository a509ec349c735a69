#![allow(deprecated)]

use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use std::path::Path;
use tempfile::TempDir;

const NOW: &str = "2026-10-19T12:00:00Z";

/// Runs the binary with an isolated HOME so no global config leaks in.
fn board_in(home: &Path) -> Command {
    let mut cmd = Command::cargo_bin("contrib-board").expect("binary should compile");
    cmd.env("HOME", home)
        .env_remove("RUST_LOG")
        .env_remove("GITHUB_TOKEN");
    cmd
}

fn write_unreachable_config(root: &Path) {
    fs::write(
        root.join("board.toml"),
        r#"
[repository]
owner = "sayeeg-11"
name = "Pixel_Phantoms"
api_base = "http://127.0.0.1:9"
"#,
    )
    .expect("repo config should write");
}

fn write_pulls(root: &Path) -> std::path::PathBuf {
    let path = root.join("pulls.json");
    fs::write(
        &path,
        r#"[
  { "user": { "login": "alice" }, "merged_at": "2026-10-19T12:00:00Z",
    "labels": [{ "name": "level 2" }] },
  { "user": { "login": "Bob" }, "merged_at": "2026-10-10T08:00:00Z",
    "labels": [{ "name": "Level-3" }] },
  { "user": { "login": "carol" }, "merged_at": null, "labels": [] },
  { "user": null, "merged_at": "2026-10-01T08:00:00Z", "labels": [] }
]"#,
    )
    .expect("pull dump should write");
    path
}

#[test]
fn score_ranks_dump_and_excludes_owner() {
    let home = TempDir::new().expect("home dir should be created");
    let repo = TempDir::new().expect("temp dir should be created");
    let pulls = write_pulls(repo.path());

    board_in(home.path())
        .arg("score")
        .arg(&pulls)
        .arg("--path")
        .arg(repo.path())
        .args(["--owner", "bob", "--now", NOW, "--format", "json"])
        .assert()
        .code(0)
        .stdout(predicate::str::contains("\"login\": \"alice\""))
        .stdout(predicate::str::contains("\"massScore\": 15"))
        .stdout(predicate::str::contains("\"velocityScore\": 10"))
        .stdout(predicate::str::contains("\"rank\": 1"))
        .stdout(predicate::str::contains("Bob").not())
        .stdout(predicate::str::contains("carol").not());
}

#[test]
fn score_orders_by_experience() {
    let home = TempDir::new().expect("home dir should be created");
    let repo = TempDir::new().expect("temp dir should be created");
    let pulls = write_pulls(repo.path());

    board_in(home.path())
        .arg("score")
        .arg(&pulls)
        .arg("--path")
        .arg(repo.path())
        .args(["--owner", "someone-else", "--now", NOW])
        .assert()
        .code(0)
        .stdout(predicate::str::contains("| #01 | Bob | 1100 |"))
        .stdout(predicate::str::contains("| #02 | alice | 500 |"));
}

#[test]
fn score_rejects_non_array_dump() {
    let home = TempDir::new().expect("home dir should be created");
    let repo = TempDir::new().expect("temp dir should be created");
    let dump = repo.path().join("pulls.json");
    fs::write(&dump, r#"{ "message": "Bad credentials" }"#).expect("dump should write");

    board_in(home.path())
        .arg("score")
        .arg(&dump)
        .arg("--path")
        .arg(repo.path())
        .assert()
        .code(3)
        .stderr(predicate::str::contains("not a JSON array"));
}

#[test]
fn rank_requires_repository() {
    let home = TempDir::new().expect("home dir should be created");
    let repo = TempDir::new().expect("temp dir should be created");

    board_in(home.path())
        .arg("rank")
        .arg(repo.path())
        .assert()
        .code(3)
        .stderr(predicate::str::contains("repository not configured"));
}

#[test]
fn rank_reports_unavailable_without_cache() {
    let home = TempDir::new().expect("home dir should be created");
    let repo = TempDir::new().expect("temp dir should be created");
    write_unreachable_config(repo.path());

    board_in(home.path())
        .arg("rank")
        .arg(repo.path())
        .assert()
        .code(2)
        .stderr(predicate::str::contains("leaderboard data unavailable"));
}

#[test]
fn rank_serves_cache_when_live_fetch_fails() {
    let home = TempDir::new().expect("home dir should be created");
    let repo = TempDir::new().expect("temp dir should be created");
    write_unreachable_config(repo.path());
    fs::create_dir_all(repo.path().join(".contrib-board")).expect("cache dir should create");
    fs::write(
        repo.path().join(".contrib-board/cache.json"),
        r#"{
  "version": "0.1.0",
  "savedAt": "2026-10-18T09:00:00Z",
  "leaderboard": {
    "generatedAt": "2026-10-18T09:00:00Z",
    "contributors": [{
      "login": "neo-one",
      "experiencePoints": 15000,
      "massScore": 120,
      "velocityScore": 90,
      "pullRequestCount": 15,
      "eventCount": 5,
      "rank": 1,
      "tier": "TITAN",
      "status": "OVERDRIVE",
      "league": "gold",
      "achievements": ["first_pr", "ten_prs"]
    }]
  }
}"#,
    )
    .expect("cache should write");

    board_in(home.path())
        .arg("rank")
        .arg(repo.path())
        .assert()
        .code(1)
        .stdout(predicate::str::contains("| #01 | neo-one | 15000 | TITAN | OVERDRIVE |"))
        .stderr(predicate::str::contains("showing cached data"));
}

#[test]
fn events_lists_upcoming_and_past() {
    let home = TempDir::new().expect("home dir should be created");
    let repo = TempDir::new().expect("temp dir should be created");
    fs::create_dir_all(repo.path().join("data")).expect("data dir should create");
    fs::write(
        repo.path().join("data/events.json"),
        r#"[
  { "title": "Kickoff", "date": "2026-01-10", "location": "Online",
    "registrationOpen": true, "registrationLink": "https://example.com/kickoff" },
  { "title": "AI Masterclass", "date": "2026-07-09", "registrationOpen": false }
]"#,
    )
    .expect("events should write");

    board_in(home.path())
        .arg("events")
        .arg(repo.path())
        .args(["--today", "2026-02-01"])
        .assert()
        .code(0)
        .stdout(predicate::str::contains("## Upcoming"))
        .stdout(predicate::str::contains("2026-07-09 AI Masterclass (registration closed)"))
        .stdout(predicate::str::contains("2026-01-10 Kickoff @ Online"));
}

#[test]
fn cache_show_and_clear_on_empty_slot() {
    let home = TempDir::new().expect("home dir should be created");
    let repo = TempDir::new().expect("temp dir should be created");

    board_in(home.path())
        .args(["cache", "show"])
        .arg(repo.path())
        .assert()
        .code(0)
        .stdout(predicate::str::contains("cache: empty"));

    board_in(home.path())
        .args(["cache", "clear"])
        .arg(repo.path())
        .assert()
        .code(0)
        .stdout(predicate::str::contains("cache: empty"));
}

#[test]
fn invalid_config_is_a_runtime_failure() {
    let home = TempDir::new().expect("home dir should be created");
    let repo = TempDir::new().expect("temp dir should be created");
    fs::write(
        repo.path().join("board.toml"),
        r#"
[fetch]
per_page = 500
"#,
    )
    .expect("config should write");

    board_in(home.path())
        .arg("events")
        .arg(repo.path())
        .assert()
        .code(3)
        .stderr(predicate::str::contains("fetch.per_page"));
}

#[test]
fn rank_uses_global_config_without_repo_file() {
    let home = TempDir::new().expect("home dir should be created");
    let repo = TempDir::new().expect("temp dir should be created");
    let global_dir = home.path().join(".config/contrib-board");
    fs::create_dir_all(&global_dir).expect("global config dir should create");
    fs::write(
        global_dir.join("config.toml"),
        r#"
[repository]
owner = "sayeeg-11"
name = "Pixel_Phantoms"
api_base = "http://127.0.0.1:9"
"#,
    )
    .expect("global config should write");

    board_in(home.path())
        .arg("rank")
        .arg(repo.path())
        .assert()
        .code(2)
        .stderr(predicate::str::contains("leaderboard data unavailable"));
}
