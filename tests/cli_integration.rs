//! End-to-end tests for the chatterbot binary.
//!
//! These exercise argument parsing, configuration loading, and the
//! failure paths that should surface before any network request.

use assert_cmd::Command;
use predicates::prelude::*;

mod common;

/// --help lists both subcommands
#[test]
fn test_help_lists_commands() {
    let mut cmd = Command::cargo_bin("chatterbot").unwrap();
    cmd.arg("--help");

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("chat"))
        .stdout(predicate::str::contains("ask"));
}

/// --version prints the binary name
#[test]
fn test_version_prints_name() {
    let mut cmd = Command::cargo_bin("chatterbot").unwrap();
    cmd.arg("--version");

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("chatterbot"));
}

/// Unknown subcommands are rejected
#[test]
fn test_unknown_subcommand_fails() {
    let mut cmd = Command::cargo_bin("chatterbot").unwrap();
    cmd.arg("definitely-not-a-command");

    cmd.assert().failure();
}

/// Running without a subcommand prints usage and fails
#[test]
fn test_missing_subcommand_fails() {
    let mut cmd = Command::cargo_bin("chatterbot").unwrap();

    cmd.assert()
        .failure()
        .stderr(predicate::str::contains("Usage"));
}

/// ask without any credential fails with a clear message
#[test]
fn test_ask_without_credential_fails() {
    let config = r#"
api:
  api_base: http://localhost:9
  model: gpt-4.1-nano
"#;

    let (_temp_dir, config_path) = common::temp_config_file(config);

    let mut cmd = Command::cargo_bin("chatterbot").unwrap();
    cmd.env_remove("CHATTERBOT_API_KEY")
        .arg("--config")
        .arg(config_path)
        .arg("ask")
        .arg("hello");

    cmd.assert()
        .failure()
        .stderr(predicate::str::contains("Missing credential"));
}

/// An api_base without a scheme is rejected by config validation
#[test]
fn test_invalid_api_base_fails_validation() {
    let config = r#"
api:
  api_base: not-a-url
  credential: test-key
"#;

    let (_temp_dir, config_path) = common::temp_config_file(config);

    let mut cmd = Command::cargo_bin("chatterbot").unwrap();
    cmd.arg("--config").arg(config_path).arg("ask").arg("hello");

    cmd.assert()
        .failure()
        .stderr(predicate::str::contains("api.api_base"));
}

/// A whitespace prompt exits successfully without contacting any server
#[test]
fn test_ask_whitespace_prompt_is_noop() {
    let config = r#"
api:
  api_base: http://localhost:9
  credential: test-key
"#;

    let (_temp_dir, config_path) = common::temp_config_file(config);

    let mut cmd = Command::cargo_bin("chatterbot").unwrap();
    cmd.arg("--config").arg(config_path).arg("ask").arg("   ");

    cmd.assert().success();
}
