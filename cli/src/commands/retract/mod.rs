//! # LoadRS Retract Command
//!
//! File: cli/src/commands/retract/mod.rs
//! Author: Christi Mahu
//! Repository: https://github.com/christimahu/loadrs
//!
//! ## Overview
//!
//! This module implements the `loadrs retract` command, the teardown half of
//! the pipeline: delete the published ConfigMap from the cluster and, when
//! asked, delete the local archive file that backed it.
//!
//! ## Architecture
//!
//! The command flow follows these steps:
//! 1. Parse command arguments (ConfigMap name, optional namespace, optional
//!    local archive path).
//! 2. Load global LoadRS configuration; resolve the target namespace
//!    (`--namespace` flag > configured `cluster.namespace`).
//! 3. Connect to the cluster and delete the ConfigMap via
//!    `common::bundle::retract_config_map`. A single attempt; failures
//!    surface verbatim, and retry policy belongs to the operator.
//! 4. If `--archive` was given, remove the local archive file. This happens
//!    after the remote delete, so a failed retraction leaves the archive
//!    available for a retry.
//!
//! ## Examples
//!
//! Usage examples:
//!
//! ```bash
//! # Delete a published ConfigMap from the configured namespace
//! loadrs retract archive-checkout-flow-1700000000000
//!
//! # Delete from an explicit namespace and clean up the local archive too
//! loadrs retract archive-checkout-flow-1700000000000 \
//!     --namespace load-tests \
//!     --archive ./bundles/archive-checkout-flow-1700000000000.tar
//! ```
//!
use crate::common::bundle;
use crate::common::fs;
use crate::common::kube::{self, KubeConfigMapStore};
use crate::core::config;
use crate::core::error::Result;
use anyhow::Context;
use clap::Parser;
use std::path::PathBuf;
use tracing::{debug, info};

/// # Retract Arguments (`RetractArgs`)
///
/// Defines the command-line arguments accepted by the `loadrs retract`
/// subcommand. Uses the `clap` crate for parsing and validation.
#[derive(Parser, Debug)]
pub struct RetractArgs {
    /// Name of the published ConfigMap to delete (as reported by `loadrs publish`).
    pub name: String,

    /// Optional: Namespace the ConfigMap lives in.
    /// Falls back to the configured `cluster.namespace` ("default").
    #[arg(short, long)] // Define as `--namespace` or `-n`
    pub namespace: Option<String>,

    /// Optional: Path of the local archive file to delete after the
    /// ConfigMap is gone.
    #[arg(long)] // Define as `--archive`
    pub archive: Option<PathBuf>,
}

/// # Handle Retract Command (`handle_retract`)
///
/// The main asynchronous handler function for the `loadrs retract` command.
/// Deletes the named ConfigMap, then optionally the local archive file.
///
/// ## Arguments
///
/// * `args`: The parsed `RetractArgs` struct containing command-line options.
///
/// ## Returns
///
/// * `Result<()>`: Returns `Ok(())` on success, or an `Err` if configuration
///   loading, cluster connection, the delete request, or the local file
///   removal fails.
pub async fn handle_retract(args: RetractArgs) -> Result<()> {
    info!("Handling retract command...");
    debug!("Retract args: {:?}", args);

    // 1. Load configuration; resolve the namespace.
    let cfg = config::load_config().context("Failed to load LoadRS configuration")?;
    let namespace = args
        .namespace
        .unwrap_or_else(|| cfg.cluster.namespace.clone());
    info!("Target namespace: {}", namespace);

    // 2. Delete the ConfigMap.
    let client = kube::connect_client().await?;
    let store = KubeConfigMapStore::new(client);
    bundle::retract_config_map(&store, &args.name, &namespace).await?;
    println!(
        "✅ Retracted ConfigMap: {} (namespace: {})",
        args.name, namespace
    );

    // 3. Remove the local archive only once the remote resource is gone.
    if let Some(archive_path) = &args.archive {
        fs::io::remove_file(archive_path).with_context(|| {
            format!(
                "ConfigMap retracted, but removing local archive '{}' failed",
                archive_path.display()
            )
        })?;
        println!("✅ Removed local archive: {}", archive_path.display());
    }

    Ok(())
}

// --- Unit Tests ---
// Tests focus on argument parsing; deletion behavior is covered by the unit
// tests in `common::bundle::publisher`.
#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_name_only() {
        let args = RetractArgs::parse_from(["retract", "archive-sample-1700000000000"]);
        assert_eq!(args.name, "archive-sample-1700000000000");
        assert!(args.namespace.is_none());
        assert!(args.archive.is_none());
    }

    #[test]
    fn test_parse_with_namespace_and_archive() {
        let args = RetractArgs::parse_from([
            "retract",
            "archive-sample-1700000000000",
            "-n",
            "load-tests",
            "--archive",
            "./archive-sample-1700000000000.tar",
        ]);
        assert_eq!(args.namespace.as_deref(), Some("load-tests"));
        assert_eq!(
            args.archive,
            Some(PathBuf::from("./archive-sample-1700000000000.tar"))
        );
    }
}
