//! # LoadRS CLI Publish Integration Tests
//!
//! File: cli/tests/publish.rs
//! Author: Christi Mahu
//! Repository: https://github.com/christimahu/loadrs
//!
//! ## Overview
//!
//! Integration tests for the `loadrs publish` command. The archive-stage
//! precondition failures run everywhere; the full pipeline needs both an
//! installed k6 binary and a reachable cluster, and is gated behind
//! `#[ignore]`.
//!

// Declare and use the common module
mod common;
use common::*;
// Import necessary items directly
use predicates::prelude::*;
use tempfile::tempdir;

/// # Test Publish Missing Script (`test_publish_missing_script`)
///
/// Verifies that `loadrs publish <missing>` fails during the archive stage
/// with the script-not-found message, before any cluster connection is
/// attempted.
#[test]
fn test_publish_missing_script() {
    let temp_dir = tempdir().expect("Failed to create temp dir");

    loadrs_cmd()
        .current_dir(temp_dir.path())
        .args(["publish", "no_such_script.js", "--namespace", "default"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Script not found"));
}

/// # Test Publish Round Trip (`test_publish_round_trip`)
///
/// Verifies the full pipeline against a live cluster: publish
/// `k6_script_sample_2.js`, assert the reported ConfigMap name matches
/// `archive-k6-script-sample-2-<millis>`, then retract it. Requires an
/// installed k6 binary and ambient cluster credentials, so it is ignored by
/// default. Run locally with `cargo test -- --ignored`.
#[test]
#[ignore] // Requires an installed k6 binary and a reachable cluster.
fn test_publish_round_trip() {
    let temp_dir = tempdir().expect("Failed to create temp dir");
    write_sample_script(temp_dir.path(), "k6_script_sample_2.js");

    let assert = loadrs_cmd()
        .current_dir(temp_dir.path())
        .args(["publish", "k6_script_sample_2.js", "--namespace", "default"])
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "Published ConfigMap: archive-k6-script-sample-2-",
        ));

    // Extract the reported name and retract it so the cluster stays clean.
    let stdout = String::from_utf8_lossy(&assert.get_output().stdout).into_owned();
    let name = stdout
        .lines()
        .find_map(|line| line.split("Published ConfigMap: ").nth(1))
        .and_then(|rest| rest.split_whitespace().next())
        .expect("published name in output")
        .to_string();

    loadrs_cmd()
        .current_dir(temp_dir.path())
        .args(["retract", &name, "--namespace", "default"])
        .assert()
        .success();
}
