//! Integration tests for the folio CLI commands.
//!
//! Everything here runs against temporary settings files and never touches
//! the network: the import tests only exercise paths that abort before any
//! fetch.

use std::path::PathBuf;

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::tempdir;

/// Helper function to create a clean command instance
fn folio() -> Command { Command::cargo_bin("folio").unwrap() }

/// Helper to get a temporary settings path
fn temp_config() -> (tempfile::TempDir, PathBuf) {
  let dir = tempdir().unwrap();
  let config_path = dir.path().join("config.toml");
  (dir, config_path)
}

#[test]
fn help_lists_subcommands() {
  folio()
    .arg("--help")
    .assert()
    .success()
    .stdout(predicate::str::contains("init"))
    .stdout(predicate::str::contains("import"));
}

#[test]
fn init_writes_settings_and_creates_folders() {
  let (dir, config_path) = temp_config();
  let note_dir = dir.path().join("notes");

  folio()
    .arg("--config")
    .arg(&config_path)
    .arg("init")
    .arg("--note-dir")
    .arg(&note_dir)
    .assert()
    .success()
    .stdout(predicate::str::contains("Settings written to"));

  assert!(config_path.exists());
  assert!(note_dir.exists());
  assert!(note_dir.join("pdfs").exists());
  dir.close().unwrap();
}

#[test]
fn verbose_flags_enable_debug_logging() {
  let (dir, config_path) = temp_config();

  folio()
    .env_remove("RUST_LOG")
    .arg("-vvv")
    .arg("--config")
    .arg(&config_path)
    .arg("import")
    .arg("https://arxiv.org/abs/2301.07041")
    .assert()
    .failure()
    .stdout(predicate::str::contains("logging configured at verbosity 3"));
  dir.close().unwrap();
}

#[test]
fn import_without_settings_points_at_init() {
  let (dir, config_path) = temp_config();

  folio()
    .arg("--config")
    .arg(&config_path)
    .arg("import")
    .arg("https://arxiv.org/abs/2301.07041")
    .assert()
    .failure()
    .stderr(predicate::str::contains("run `folio init` first"));
  dir.close().unwrap();
}

#[test]
fn corrupt_settings_surface_the_parse_error() {
  let (dir, config_path) = temp_config();
  std::fs::write(&config_path, "note_dir = [unclosed").unwrap();

  folio()
    .arg("--config")
    .arg(&config_path)
    .arg("import")
    .arg("https://arxiv.org/abs/2301.07041")
    .assert()
    .failure()
    .stderr(predicate::str::contains("TOML parse error"))
    .stderr(predicate::str::contains("run `folio init` first").not());
  dir.close().unwrap();
}

#[test]
fn unsupported_url_aborts_with_a_message() {
  let (dir, config_path) = temp_config();
  let note_dir = dir.path().join("notes");

  folio()
    .arg("--config")
    .arg(&config_path)
    .arg("init")
    .arg("--note-dir")
    .arg(&note_dir)
    .assert()
    .success();

  folio()
    .arg("--config")
    .arg(&config_path)
    .arg("import")
    .arg("https://example.com/definitely/not/a/paper")
    .assert()
    .failure()
    .stderr(predicate::str::contains("does not match any supported paper source"));
  dir.close().unwrap();
}
