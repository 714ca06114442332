//! # LoadRS Archive Command
//!
//! File: cli/src/commands/archive/mod.rs
//! Author: Christi Mahu
//! Repository: https://github.com/christimahu/loadrs
//!
//! ## Overview
//!
//! This module implements the `loadrs archive` command, which packages a
//! user-authored k6 load-test script into a single portable archive file
//! containing the script and all of its resolved dependencies.
//!
//! ## Architecture
//!
//! The command flow follows these steps:
//! 1. Parse command arguments (script path, optional output directory).
//! 2. Load global LoadRS configuration for the k6 binary name and the
//!    default output directory.
//! 3. Resolve the effective output directory: `--output-dir` if provided,
//!    else the configured `archive.output_dir`, else the current working
//!    directory.
//! 4. Invoke the shared archiver (`common::bundle::create_archive`) with the
//!    real k6 tool binding.
//! 5. Report the produced archive path.
//!
//! ## Examples
//!
//! Usage examples:
//!
//! ```bash
//! # Archive a script into the current directory
//! loadrs archive scripts/checkout_flow.js
//!
//! # Archive into a specific directory
//! loadrs archive scripts/checkout_flow.js --output-dir ./bundles
//! ```
//!
use crate::common::bundle;
use crate::common::k6::K6Cli;
use crate::core::config;
use crate::core::error::Result;
use anyhow::Context;
use clap::Parser;
use std::path::PathBuf;
use tracing::{debug, info};

/// # Archive Arguments (`ArchiveArgs`)
///
/// Defines the command-line arguments accepted by the `loadrs archive`
/// subcommand. Uses the `clap` crate for parsing and validation.
#[derive(Parser, Debug)]
pub struct ArchiveArgs {
    /// Path to the load-test script to package.
    pub script: PathBuf,

    /// Optional: Directory the archive is written into. Must already exist.
    /// Falls back to the configured `archive.output_dir`, then to the current
    /// working directory.
    #[arg(short, long)] // Define as `--output-dir` or `-o`
    pub output_dir: Option<PathBuf>,
}

/// # Handle Archive Command (`handle_archive`)
///
/// The main asynchronous handler function for the `loadrs archive` command.
/// It resolves the k6 binary and output directory from configuration, then
/// delegates to the shared archiver in `common::bundle`.
///
/// ## Arguments
///
/// * `args`: The parsed `ArchiveArgs` struct containing command-line options.
///
/// ## Returns
///
/// * `Result<()>`: Returns `Ok(())` on success, or an `Err` if configuration
///   loading or archive creation fails.
pub async fn handle_archive(args: ArchiveArgs) -> Result<()> {
    info!("Handling archive command...");
    debug!("Archive args: {:?}", args);

    // 1. Load configuration for the k6 binary and default output directory.
    let cfg = config::load_config().context("Failed to load LoadRS configuration")?;

    // 2. Resolve the effective output directory (flag > config > CWD).
    let output_dir = args
        .output_dir
        .or_else(|| cfg.archive.output_dir.as_ref().map(PathBuf::from));
    if let Some(dir) = &output_dir {
        info!("Using output directory: {}", dir.display());
    }

    // 3. Delegate to the shared archiver with the real k6 binding.
    let tool = K6Cli::new(&cfg.k6.binary);
    let result = bundle::create_archive(&tool, &args.script, output_dir.as_deref())
        .await
        .with_context(|| format!("Failed to archive script '{}'", args.script.display()))?;

    // 4. Report success.
    info!(
        "Successfully archived '{}' as '{}'",
        result.script_filename, result.archive_filename
    );
    println!("✅ Created archive: {}", result.archive_path.display());

    Ok(())
}

// --- Unit Tests ---
// Tests focus on argument parsing; archiver behavior is covered by the
// unit tests in `common::bundle::archiver`.
#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_script_only() {
        let args = ArchiveArgs::parse_from(["archive", "scripts/sample.js"]);
        assert_eq!(args.script, PathBuf::from("scripts/sample.js"));
        assert!(args.output_dir.is_none());
    }

    #[test]
    fn test_parse_with_output_dir() {
        let args =
            ArchiveArgs::parse_from(["archive", "scripts/sample.js", "--output-dir", "./bundles"]);
        assert_eq!(args.output_dir, Some(PathBuf::from("./bundles")));
    }

    #[test]
    fn test_parse_short_output_dir_flag() {
        let args = ArchiveArgs::parse_from(["archive", "sample.js", "-o", "/tmp"]);
        assert_eq!(args.output_dir, Some(PathBuf::from("/tmp")));
    }
}
