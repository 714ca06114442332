//! # LoadRS CLI Main Integration Tests
//!
//! File: cli/tests/main_tests.rs
//! Author: Christi Mahu
//! Repository: https://github.com/christimahu/loadrs
//!
//! ## Overview
//!
//! This integration test file focuses on verifying the top-level behavior
//! of the `loadrs` command-line interface, such as handling standard flags
//! like `--version` and `--help`, and the `help` subcommand itself.
//!

// Declare and use the common module for helpers like `loadrs_cmd()`
mod common;
use common::*;
use predicates::prelude::*;

/// Verifies the `help` subcommand lists every top-level command.
#[test]
fn test_help_subcommand_lists_commands() {
    loadrs_cmd()
        .arg("help")
        .assert()
        .success()
        .stdout(
            predicate::str::contains("archive")
                .and(predicate::str::contains("publish"))
                .and(predicate::str::contains("retract")),
        );
}

/// Verifies an unknown subcommand fails with a usage error.
#[test]
fn test_unknown_subcommand_fails() {
    loadrs_cmd()
        .arg("frobnicate")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Usage"));
}
