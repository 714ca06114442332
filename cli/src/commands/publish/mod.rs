//! # LoadRS Publish Command
//!
//! File: cli/src/commands/publish/mod.rs
//! Author: Christi Mahu
//! Repository: https://github.com/christimahu/loadrs
//!
//! ## Overview
//!
//! This module implements the `loadrs publish` command: the full pipeline
//! from a user-authored script to a cluster-resident ConfigMap that the
//! in-cluster execution controller can consume. It composes the two core
//! components in order: archive, then publish.
//!
//! ## Architecture
//!
//! The command flow follows these steps:
//! 1. Parse command arguments (script path, optional output directory,
//!    optional namespace).
//! 2. Load global LoadRS configuration; resolve the target namespace
//!    (`--namespace` flag > configured `cluster.namespace`).
//! 3. Archive the script via `common::bundle::create_archive` with the real
//!    k6 binding.
//! 4. Connect to the cluster with ambient credentials and bind the ConfigMap
//!    store.
//! 5. Publish the archive via `common::bundle::publish_archive` (size
//!    ceiling enforced there).
//! 6. Report the `(namespace, name)` pair the caller must keep to retract
//!    the resource later.
//!
//! The archive file is left on disk; `loadrs retract --archive` removes it
//! during teardown.
//!
//! ## Examples
//!
//! Usage examples:
//!
//! ```bash
//! # Publish into the configured namespace
//! loadrs publish scripts/checkout_flow.js
//!
//! # Publish into an explicit namespace, archiving into ./bundles
//! loadrs publish scripts/checkout_flow.js -o ./bundles --namespace load-tests
//! ```
//!
use crate::common::bundle;
use crate::common::k6::K6Cli;
use crate::common::kube::{self, KubeConfigMapStore};
use crate::core::config;
use crate::core::error::Result;
use anyhow::Context;
use clap::Parser;
use std::path::PathBuf;
use tracing::{debug, info};

/// # Publish Arguments (`PublishArgs`)
///
/// Defines the command-line arguments accepted by the `loadrs publish`
/// subcommand. Uses the `clap` crate for parsing and validation.
#[derive(Parser, Debug)]
pub struct PublishArgs {
    /// Path to the load-test script to package and publish.
    pub script: PathBuf,

    /// Optional: Directory the intermediate archive is written into.
    /// Must already exist. Falls back to the configured `archive.output_dir`,
    /// then to the current working directory.
    #[arg(short, long)] // Define as `--output-dir` or `-o`
    pub output_dir: Option<PathBuf>,

    /// Optional: Namespace to publish the ConfigMap into.
    /// Falls back to the configured `cluster.namespace` ("default").
    #[arg(short, long)] // Define as `--namespace` or `-n`
    pub namespace: Option<String>,
}

/// # Handle Publish Command (`handle_publish`)
///
/// The main asynchronous handler function for the `loadrs publish` command.
/// Runs the archive step, then the publish step, against the real k6 binary
/// and the real cluster.
///
/// ## Arguments
///
/// * `args`: The parsed `PublishArgs` struct containing command-line options.
///
/// ## Returns
///
/// * `Result<()>`: Returns `Ok(())` on success, or an `Err` if configuration
///   loading, archiving, cluster connection, or the create request fails.
pub async fn handle_publish(args: PublishArgs) -> Result<()> {
    info!("Handling publish command...");
    debug!("Publish args: {:?}", args);

    // 1. Load configuration; resolve namespace and output directory.
    let cfg = config::load_config().context("Failed to load LoadRS configuration")?;
    let namespace = args
        .namespace
        .unwrap_or_else(|| cfg.cluster.namespace.clone());
    let output_dir = args
        .output_dir
        .or_else(|| cfg.archive.output_dir.as_ref().map(PathBuf::from));
    info!("Target namespace: {}", namespace);

    // 2. Archive the script.
    let tool = K6Cli::new(&cfg.k6.binary);
    let archive = bundle::create_archive(&tool, &args.script, output_dir.as_deref())
        .await
        .with_context(|| format!("Failed to archive script '{}'", args.script.display()))?;
    println!("✅ Created archive: {}", archive.archive_path.display());

    // 3. Publish the archive as a ConfigMap.
    let client = kube::connect_client().await?;
    let store = KubeConfigMapStore::new(client);
    let result = bundle::publish_archive(&store, &archive, &namespace)
        .await
        .with_context(|| {
            format!(
                "Failed to publish archive '{}' to namespace '{}'",
                archive.archive_filename, namespace
            )
        })?;

    // 4. Report the handle the caller needs for later retraction.
    info!(
        "Successfully published ConfigMap '{}' in namespace '{}'",
        result.config_map_name, result.namespace
    );
    println!(
        "✅ Published ConfigMap: {} (namespace: {})",
        result.config_map_name, result.namespace
    );

    Ok(())
}
