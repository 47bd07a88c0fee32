//! Integration tests for the tether CLI.
//!
//! These tests verify the CLI commands work correctly end-to-end, using
//! local directories as git remotes where a remote is needed.

#![allow(clippy::expect_used, clippy::unwrap_used)]

use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use std::path::Path;
use std::process::Command as StdCommand;
use tempfile::TempDir;

/// Helper to get the tether command.
fn tether() -> Command {
    Command::new(env!("CARGO_BIN_EXE_tether"))
}

/// Write a tether.toml pointing at `url`.
fn write_config(dir: &Path, url: &str) {
    fs::write(
        dir.join("tether.toml"),
        format!(
            r#"
[workspace]
sync_tag = "deps"
repository_url = "{url}"
"#
        ),
    )
    .expect("Failed to write tether.toml");
}

/// Helper to create a source repository with one commit on `master`,
/// usable as a local remote.
fn setup_source_repo() -> TempDir {
    let temp = TempDir::new().expect("Failed to create temp dir");

    let run = |args: &[&str]| {
        let output = StdCommand::new("git")
            .args(args)
            .current_dir(&temp)
            .env("GIT_AUTHOR_NAME", "Test User")
            .env("GIT_AUTHOR_EMAIL", "test@example.com")
            .env("GIT_COMMITTER_NAME", "Test User")
            .env("GIT_COMMITTER_EMAIL", "test@example.com")
            .output()
            .expect("Failed to run git");
        assert!(output.status.success(), "git {args:?} failed: {output:?}");
    };

    run(&["init"]);
    fs::write(temp.path().join("README.md"), "# Source Repo\n").expect("Failed to write README");
    run(&["add", "."]);
    run(&["commit", "-m", "Initial commit"]);
    run(&["branch", "-M", "master"]);

    temp
}

// ============================================================================
// Basic CLI tests
// ============================================================================

#[test]
fn test_version_flag() {
    tether()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("tether"));
}

#[test]
fn test_help_flag() {
    tether()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("bootstrap"))
        .stdout(predicate::str::contains("sync-local"))
        .stdout(predicate::str::contains("sync-remote"))
        .stdout(predicate::str::contains("status"));
}

#[test]
fn test_no_subcommand_shows_help() {
    tether()
        .assert()
        .failure()
        .stderr(predicate::str::contains("Usage"));
}

#[test]
fn test_missing_config_fails() {
    let temp = TempDir::new().unwrap();

    tether()
        .arg("bootstrap")
        .current_dir(&temp)
        .assert()
        .failure()
        .stderr(predicate::str::contains("tether.toml"));
}

// ============================================================================
// Bootstrap and status
// ============================================================================

#[test]
fn test_bootstrap_creates_workspace() {
    let temp = TempDir::new().unwrap();
    write_config(temp.path(), "https://example.test/repo.git");

    tether()
        .arg("bootstrap")
        .current_dir(&temp)
        .assert()
        .success()
        .stdout(predicate::str::contains("workspace ready"));

    assert!(temp.path().join(".tether/mirror").is_dir());

    let ignore = fs::read_to_string(temp.path().join(".gitignore")).unwrap();
    assert_eq!(ignore.lines().count(), 2);
    assert!(ignore.contains(".tether/mirror/"));
    assert!(ignore.contains(".tether/deps-sync-history.json"));

    let history = fs::read_to_string(temp.path().join(".tether/deps-sync-history.json")).unwrap();
    assert!(history.contains("\"createTime\""));
}

#[test]
fn test_bootstrap_twice_changes_nothing() {
    let temp = TempDir::new().unwrap();
    write_config(temp.path(), "https://example.test/repo.git");

    tether().arg("bootstrap").current_dir(&temp).assert().success();
    let ignore_first = fs::read_to_string(temp.path().join(".gitignore")).unwrap();
    let history_first =
        fs::read_to_string(temp.path().join(".tether/deps-sync-history.json")).unwrap();

    tether().arg("bootstrap").current_dir(&temp).assert().success();
    let ignore_second = fs::read_to_string(temp.path().join(".gitignore")).unwrap();
    let history_second =
        fs::read_to_string(temp.path().join(".tether/deps-sync-history.json")).unwrap();

    assert_eq!(ignore_first, ignore_second);
    assert_eq!(history_first, history_second);
}

#[test]
fn test_status_reports_state() {
    let temp = TempDir::new().unwrap();
    write_config(temp.path(), "https://example.test/repo.git");

    tether()
        .arg("status")
        .current_dir(&temp)
        .assert()
        .success()
        .stdout(predicate::str::contains("bootstrapped: false"))
        .stdout(predicate::str::contains("working copy: false"));

    tether().arg("bootstrap").current_dir(&temp).assert().success();

    tether()
        .arg("status")
        .current_dir(&temp)
        .assert()
        .success()
        .stdout(predicate::str::contains("bootstrapped: true"))
        .stdout(predicate::str::contains("working copy: false"));
}

#[test]
fn test_reset_clears_workspace() {
    let temp = TempDir::new().unwrap();
    write_config(temp.path(), "https://example.test/repo.git");

    tether().arg("bootstrap").current_dir(&temp).assert().success();
    tether()
        .arg("reset")
        .current_dir(&temp)
        .assert()
        .success()
        .stdout(predicate::str::contains("workspace removed"));

    tether()
        .arg("status")
        .current_dir(&temp)
        .assert()
        .success()
        .stdout(predicate::str::contains("bootstrapped: false"))
        .stdout(predicate::str::contains("working copy: false"));
}

#[test]
fn test_reset_on_fresh_project_succeeds() {
    let temp = TempDir::new().unwrap();
    write_config(temp.path(), "https://example.test/repo.git");

    tether().arg("reset").current_dir(&temp).assert().success();
}

// ============================================================================
// Sync commands
// ============================================================================

#[test]
fn test_sync_remote_without_clone_fails() {
    let temp = TempDir::new().unwrap();
    write_config(temp.path(), "https://example.test/repo.git");

    tether()
        .arg("sync-remote")
        .current_dir(&temp)
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("no git repo in workspace"));
}

#[test]
fn test_sync_local_clones_fresh_workspace() {
    let source = setup_source_repo();
    let temp = TempDir::new().unwrap();
    write_config(temp.path(), &source.path().display().to_string());

    tether().arg("bootstrap").current_dir(&temp).assert().success();

    tether()
        .arg("sync-local")
        .current_dir(&temp)
        .assert()
        .success()
        .stdout(predicate::str::contains("git init"))
        .stdout(predicate::str::contains("local sync complete"));

    let mirror = temp.path().join(".tether/mirror");
    assert!(mirror.join(".git").exists());
    assert!(mirror.join("README.md").exists());

    tether()
        .arg("status")
        .current_dir(&temp)
        .assert()
        .success()
        .stdout(predicate::str::contains("working copy: true"));
}

#[test]
fn test_sync_local_refreshes_existing_clone() {
    let source = setup_source_repo();
    let temp = TempDir::new().unwrap();
    write_config(temp.path(), &source.path().display().to_string());

    tether().arg("bootstrap").current_dir(&temp).assert().success();
    tether().arg("sync-local").current_dir(&temp).assert().success();

    // Second run takes the refresh path instead of re-initializing.
    tether()
        .arg("sync-local")
        .current_dir(&temp)
        .assert()
        .success()
        .stdout(predicate::str::contains("git fetch all"))
        .stdout(predicate::str::contains("git reset to master"));
}

#[test]
fn test_quiet_suppresses_step_progress() {
    let source = setup_source_repo();
    let temp = TempDir::new().unwrap();
    write_config(temp.path(), &source.path().display().to_string());

    tether().arg("bootstrap").current_dir(&temp).assert().success();

    tether()
        .args(["sync-local", "--quiet"])
        .current_dir(&temp)
        .assert()
        .success()
        .stdout(predicate::str::contains("git init").not())
        .stdout(predicate::str::contains("local sync complete"));
}

#[test]
fn test_sync_remote_with_no_changes_warns_and_exits_zero() {
    let source = setup_source_repo();
    let temp = TempDir::new().unwrap();
    write_config(temp.path(), &source.path().display().to_string());

    tether().arg("bootstrap").current_dir(&temp).assert().success();
    tether().arg("sync-local").current_dir(&temp).assert().success();

    tether()
        .arg("sync-remote")
        .current_dir(&temp)
        .assert()
        .success()
        .stderr(predicate::str::contains("no change"));
}
