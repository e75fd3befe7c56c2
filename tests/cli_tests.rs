//! Integration tests for the docsize CLI
//!
//! These tests run the docsize binary against schema files in temporary
//! directories.

mod cli;

use cli::support::docsize;
use predicates::prelude::*;

// ============================================================================
// Help, version and exit code tests
// ============================================================================

#[test]
fn test_help_flag() {
    docsize()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("Usage: docsize"))
        .stdout(predicate::str::contains("estimate"))
        .stdout(predicate::str::contains("format-bytes"));
}

#[test]
fn test_version_flag() {
    docsize()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("docsize"));
}

#[test]
fn test_no_command_prints_intro() {
    docsize()
        .assert()
        .success()
        .stdout(predicate::str::contains("docsize init"));
}

#[test]
fn test_unknown_format_exit_code_2() {
    docsize()
        .args(["--format", "xml", "format-bytes", "10"])
        .assert()
        .code(2);
}

#[test]
fn test_unknown_subcommand_exit_code_2() {
    docsize().arg("frobnicate").assert().code(2);
}

#[test]
fn test_missing_config_file_is_failure() {
    docsize()
        .args(["--config", "/nonexistent/docsize/config.toml", "format-bytes", "10"])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("read config"));
}
