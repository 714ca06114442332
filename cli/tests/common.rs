//! # LoadRS CLI Integration Test Common Helpers
//!
//! File: cli/tests/common.rs
//! Author: Christi Mahu
//! Repository: https://github.com/christimahu/loadrs
//!
//! ## Overview
//!
//! This module provides shared utility functions and re-exports common crates
//! used across multiple integration test files (`archive.rs`, `publish.rs`,
//! `retract.rs`). This avoids code duplication in the test suite.
//!
//! Integration tests are located in the `cli/tests/` directory and each `.rs` file
//! in that directory (that isn't a module like this one) is compiled as a separate
//! test crate linked against the main `loadrs` binary crate.
//!

// Allow potentially unused code in this common module, as different test files might use different helpers.
#![allow(dead_code)]

// Re-export common crates/modules needed by multiple test files
pub use assert_cmd::Command;
// Note: predicates and tempfile are not re-exported from here.
// Individual test files should import them directly if needed using:
// use predicates::prelude::*;
// use tempfile::tempdir; // or other tempfile items

/// # Get LoadRS Command (`loadrs_cmd`)
///
/// Helper function to create an `assert_cmd::Command` instance pointing to the
/// compiled `loadrs` binary target for the current test run.
///
/// This ensures tests execute the correct binary being built.
///
/// ## Panics
/// Panics if the `loadrs` binary cannot be found via `Command::cargo_bin`.
///
/// ## Returns
/// * `Command` - An `assert_cmd::Command` ready to have arguments added and assertions run.
pub fn loadrs_cmd() -> Command {
    Command::cargo_bin("loadrs").expect("Failed to find loadrs binary for testing")
}

/// # Write Sample Script (`write_sample_script`)
///
/// Creates a minimal k6 script file inside `dir` and returns its path.
/// Enough for CLI precondition tests; archiving it for real requires an
/// installed k6 binary (those tests are `#[ignore]`d).
pub fn write_sample_script(dir: &std::path::Path, name: &str) -> std::path::PathBuf {
    let path = dir.join(name);
    std::fs::write(
        &path,
        "export default function () {\n  // noop iteration\n}\n",
    )
    .expect("Failed to write sample script");
    path
}
