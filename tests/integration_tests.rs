//! Integration tests for the gitcc CLI

use assert_cmd::Command;
use git2::{Repository, Signature};
use predicates::prelude::*;
use std::fs;
use std::path::Path;
use tempfile::TempDir;

/// Command isolated from the user's config and environment
fn gitcc(home: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("gitcc").unwrap();
    cmd.current_dir(home.path())
        .env("HOME", home.path())
        .env_remove("GITCC_VALIDATION__VALIDATOR")
        .env_remove("GITCC_VALIDATION__FILE")
        .env_remove("GITCC_HOOKS__STRICT_REMOVE")
        .env_remove("GITCC_VALIDATION__REGEX__SUMMARY")
        .env_remove("GITCC_VALIDATION__REGEX__DESCRIPTION")
        .env_remove("GIT_DIR")
        .env_remove("RUST_LOG");
    cmd
}

fn repo_with_commits(dir: &Path, messages: &[&str]) -> Repository {
    let repo = Repository::init(dir).unwrap();
    {
        let sig = Signature::now("Test", "test@example.com").unwrap();
        let tree_id = repo.index().unwrap().write_tree().unwrap();
        let tree = repo.find_tree(tree_id).unwrap();
        let mut parent: Option<git2::Oid> = None;
        for message in messages {
            let parents: Vec<git2::Commit> = parent
                .iter()
                .map(|oid| repo.find_commit(*oid).unwrap())
                .collect();
            let parent_refs: Vec<&git2::Commit> = parents.iter().collect();
            parent = Some(
                repo.commit(Some("HEAD"), &sig, &sig, message, &tree, &parent_refs)
                    .unwrap(),
            );
        }
    }
    repo
}

#[test]
fn test_cli_help() {
    let home = TempDir::new().unwrap();
    gitcc(&home)
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("git-hook"))
        .stdout(predicate::str::contains("history"));
}

#[test]
fn test_cli_version() {
    let home = TempDir::new().unwrap();
    gitcc(&home)
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("gitcc"));
}

#[test]
fn test_invalid_subcommand() {
    let home = TempDir::new().unwrap();
    gitcc(&home)
        .arg("invalid-command")
        .assert()
        .failure()
        .stderr(predicate::str::contains("error"));
}

#[test]
fn test_message_valid() {
    let home = TempDir::new().unwrap();
    gitcc(&home)
        .args(["--validator", "simple-tag", "message", "[ab] Valid Description"])
        .assert()
        .code(0)
        .stdout(predicate::str::contains("Correct"));
}

#[test]
fn test_message_invalid() {
    let home = TempDir::new().unwrap();
    gitcc(&home)
        .args(["--validator", "simple-tag", "message", "no tag here"])
        .assert()
        .code(1)
        .stdout(predicate::str::contains("Failure |"))
        .stdout(predicate::str::contains("Summary has invalid format"));
}

#[test]
fn test_message_default_validator_accepts() {
    let home = TempDir::new().unwrap();
    gitcc(&home)
        .args(["message", "anything at all"])
        .assert()
        .code(0)
        .stdout(predicate::str::contains("Correct"));
}

#[test]
fn test_message_unconfigured_warns() {
    let home = TempDir::new().unwrap();
    gitcc(&home)
        .args(["--validator", "unconfigured", "message", "anything"])
        .assert()
        .code(1)
        .stdout(predicate::str::contains("Warning"));
}

#[test]
fn test_message_from_file_strips_comments() {
    let home = TempDir::new().unwrap();
    let file = home.path().join("COMMIT_EDITMSG");
    fs::write(
        &file,
        "[ab] Valid Description\n\n# Please enter the commit message\n#\n# On branch main\n",
    )
    .unwrap();

    gitcc(&home)
        .args(["--validator", "simple-tag", "message", "--file"])
        .arg(&file)
        .assert()
        .code(0);
}

#[test]
fn test_message_file_keeps_hash_summary() {
    let home = TempDir::new().unwrap();
    let file = home.path().join("COMMIT_EDITMSG");
    fs::write(&file, "#123 Fix the parser\n").unwrap();

    gitcc(&home)
        .env("GITCC_VALIDATION__REGEX__SUMMARY", "#[0-9]+ .+")
        .args(["--validator", "regex", "message", "--file"])
        .arg(&file)
        .assert()
        .code(0)
        .stdout(predicate::str::contains("Correct"));
}

#[test]
fn test_message_missing_file_is_setup_error() {
    let home = TempDir::new().unwrap();
    gitcc(&home)
        .args(["message", "--file", "does-not-exist"])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("does-not-exist"));
}

#[test]
fn test_unknown_validator_is_setup_error() {
    let home = TempDir::new().unwrap();
    gitcc(&home)
        .args(["--validator", "nope", "message", "x"])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("nope"));
}

#[test]
fn test_validator_from_repository_config() {
    let home = TempDir::new().unwrap();
    fs::write(
        home.path().join("gitcc.toml"),
        "[validation]\nvalidator = \"simple-tag\"\n",
    )
    .unwrap();

    gitcc(&home).args(["message", "no tag here"]).assert().code(1);
}

#[test]
fn test_validator_from_environment() {
    let home = TempDir::new().unwrap();
    gitcc(&home)
        .env("GITCC_VALIDATION__VALIDATOR", "simple-tag")
        .args(["message", "no tag here"])
        .assert()
        .code(1);
}

#[test]
fn test_validator_file() {
    let home = TempDir::new().unwrap();
    let file = home.path().join("validator.toml");
    fs::write(&file, "kind = \"regex\"\nsummary = 'JIRA-[0-9]+: .+'\n").unwrap();

    gitcc(&home)
        .arg("--validator-file")
        .arg(&file)
        .args(["message", "JIRA-12: Fix it"])
        .assert()
        .code(0);

    gitcc(&home)
        .arg("--validator-file")
        .arg(&file)
        .args(["message", "Fix it"])
        .assert()
        .code(1)
        .stdout(predicate::str::contains("Summary does not match the pattern"));
}

#[test]
fn test_regex_without_patterns_is_setup_error() {
    let home = TempDir::new().unwrap();
    gitcc(&home)
        .args(["--validator", "regex", "message", "x"])
        .assert()
        .code(2);
}

#[test]
fn test_invalid_repository() {
    let home = TempDir::new().unwrap();
    let plain = home.path().join("plain");
    fs::create_dir(&plain).unwrap();

    gitcc(&home)
        .arg("history")
        .arg(&plain)
        .assert()
        .code(2)
        .stderr(predicate::str::contains("Given path is not a repository"));
}

#[test]
fn test_validators_lists_builtins() {
    let home = TempDir::new().unwrap();
    gitcc(&home)
        .arg("validators")
        .assert()
        .success()
        .stdout(predicate::str::contains("default"))
        .stdout(predicate::str::contains("simple-tag"))
        .stdout(predicate::str::contains("regex"))
        .stdout(predicate::str::contains("unconfigured"));
}

#[test]
fn test_config_show_and_validate() {
    let home = TempDir::new().unwrap();
    gitcc(&home)
        .args(["config", "show"])
        .assert()
        .success()
        .stdout(predicate::str::contains("[validation]"))
        .stdout(predicate::str::contains("validator = \"default\""));

    gitcc(&home).args(["config", "validate"]).assert().success();

    gitcc(&home)
        .args(["--validator", "regex", "config", "validate"])
        .assert()
        .code(2);
}

#[test]
fn test_missing_config_file_is_setup_error() {
    let home = TempDir::new().unwrap();
    gitcc(&home)
        .args(["--config", "missing.toml", "message", "x"])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("missing.toml"));
}

#[test]
fn test_commit_checks_head() {
    let home = TempDir::new().unwrap();
    let repo_dir = home.path().join("repo");
    repo_with_commits(&repo_dir, &["[ab] First commit here", "bad last commit"]);

    gitcc(&home)
        .args(["--validator", "simple-tag", "commit"])
        .arg(&repo_dir)
        .assert()
        .code(1)
        .stdout(predicate::str::contains("bad last commit"));
}

#[test]
fn test_history_all_correct() {
    let home = TempDir::new().unwrap();
    let repo_dir = home.path().join("repo");
    repo_with_commits(&repo_dir, &["[ab] First commit here", "[ab] Second commit here"]);

    gitcc(&home)
        .args(["--validator", "simple-tag", "history"])
        .arg(&repo_dir)
        .assert()
        .code(0)
        .stdout(predicate::str::contains("All commits have the correct format!"))
        .stdout(predicate::str::contains("Correct |").not());

    gitcc(&home)
        .args(["--validator", "simple-tag", "history", "--verbose"])
        .arg(&repo_dir)
        .assert()
        .code(0)
        .stdout(predicate::str::contains("Correct |"));
}

#[test]
fn test_history_reports_failures_until_sha() {
    let home = TempDir::new().unwrap();
    let repo_dir = home.path().join("repo");
    let repo = repo_with_commits(
        &repo_dir,
        &["bad first commit", "[ab] Second commit here", "[ab] Third commit here"],
    );

    gitcc(&home)
        .args(["--validator", "simple-tag", "history"])
        .arg(&repo_dir)
        .assert()
        .code(1)
        .stdout(predicate::str::contains("bad first commit"));

    // Stop before the bad root commit
    let head = repo.head().unwrap().peel_to_commit().unwrap();
    let second = head.parent(0).unwrap().id().to_string();
    gitcc(&home)
        .args(["--validator", "simple-tag", "history", "--sha", &second])
        .arg(&repo_dir)
        .assert()
        .code(0);
}

#[test]
fn test_repository_validator_file_from_another_directory() {
    let home = TempDir::new().unwrap();
    let repo_dir = home.path().join("repo");
    repo_with_commits(&repo_dir, &["[ab] First commit here", "no tag here"]);
    fs::write(repo_dir.join("rules.toml"), "kind = \"simple-tag\"\n").unwrap();
    fs::write(
        repo_dir.join("gitcc.toml"),
        "[validation]\nfile = \"rules.toml\"\n",
    )
    .unwrap();
    let elsewhere = home.path().join("elsewhere");
    fs::create_dir(&elsewhere).unwrap();

    gitcc(&home)
        .current_dir(&elsewhere)
        .arg("history")
        .arg(&repo_dir)
        .assert()
        .code(1)
        .stdout(predicate::str::contains("Summary has invalid format"));
}

#[test]
fn test_branch_without_common_ancestor() {
    let home = TempDir::new().unwrap();
    let repo_dir = home.path().join("repo");
    let repo = repo_with_commits(&repo_dir, &["[ab] Main line commit"]);
    {
        let sig = Signature::now("Test", "test@example.com").unwrap();
        let tree_id = repo.index().unwrap().write_tree().unwrap();
        let tree = repo.find_tree(tree_id).unwrap();
        repo.commit(Some("refs/heads/orphan"), &sig, &sig, "[ab] Orphan", &tree, &[])
            .unwrap();
    }

    gitcc(&home)
        .args(["--validator", "simple-tag", "branch", "orphan"])
        .arg(&repo_dir)
        .assert()
        .code(1)
        .stdout(predicate::str::contains("ERROR: No common ancestor found"));
}

#[test]
fn test_git_hook_install_and_remove() {
    let home = TempDir::new().unwrap();
    let repo_dir = home.path().join("repo");
    Repository::init(&repo_dir).unwrap();
    let hook = repo_dir.join(".git").join("hooks").join("commit-msg");

    gitcc(&home)
        .args(["--validator", "simple-tag", "git-hook", "install", "message"])
        .arg(&repo_dir)
        .assert()
        .code(0)
        .stdout(predicate::str::contains("Installed hook"));
    let script = fs::read_to_string(&hook).unwrap();
    assert!(script.starts_with("#!/usr/bin/env sh\n"));
    assert!(script.contains("--validator simple-tag message --file \"$1\""));

    #[cfg(unix)]
    {
        use std::os::unix::fs::PermissionsExt;
        let mode = fs::metadata(&hook).unwrap().permissions().mode();
        assert_eq!(mode & 0o777, 0o755);
    }

    // A second install refuses to overwrite
    gitcc(&home)
        .args(["git-hook", "install", "message"])
        .arg(&repo_dir)
        .assert()
        .code(1)
        .stderr(predicate::str::contains("already exists"));

    gitcc(&home)
        .args(["git-hook", "install", "message", "--force"])
        .arg(&repo_dir)
        .assert()
        .code(0);
    assert!(!fs::read_to_string(&hook).unwrap().contains("--validator"));

    gitcc(&home)
        .args(["git-hook", "remove", "message"])
        .arg(&repo_dir)
        .assert()
        .code(0)
        .stdout(predicate::str::contains("Removed hook"));
    assert!(!hook.exists());
}

#[test]
fn test_git_hook_strict_remove_keeps_custom_hook() {
    let home = TempDir::new().unwrap();
    let repo_dir = home.path().join("repo");
    Repository::init(&repo_dir).unwrap();
    let hooks_dir = repo_dir.join(".git").join("hooks");
    fs::create_dir_all(&hooks_dir).unwrap();
    let hook = hooks_dir.join("commit-msg");
    fs::write(&hook, "#!/bin/sh\necho custom\n").unwrap();

    gitcc(&home)
        .args(["git-hook", "remove", "message", "--strict"])
        .arg(&repo_dir)
        .assert()
        .code(1);
    assert!(hook.exists());

    gitcc(&home)
        .args(["git-hook", "remove", "message", "--strict", "--force"])
        .arg(&repo_dir)
        .assert()
        .code(0);
    assert!(!hook.exists());
}
