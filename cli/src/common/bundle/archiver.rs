//! # LoadRS Script Archiver (`common::bundle::archiver`)
//!
//! File: cli/src/common/bundle/archiver.rs
//! Author: Christi Mahu
//! Repository: https://github.com/christimahu/loadrs
//!
//! ## Overview
//!
//! This module turns a user-authored k6 script into a single-file, relocatable
//! archive containing the script and all of its resolved dependencies (remote
//! imports, auxiliary data files). The heavy lifting is done by the external
//! k6 tool; this module owns input validation, archive naming, and verifying
//! that the promised file actually landed on disk.
//!
//! ## Architecture
//!
//! `create_archive` runs a strict precondition ladder before anything
//! expensive happens, each rung producing a distinct error:
//!
//! 1. The script path must resolve to an existing file (`ScriptNotFound`).
//! 2. A supplied output directory must exist (`OutputDirectoryNotFound`).
//! 3. The tool must answer its version probe (`ToolNotInstalled`).
//!
//! Only then is the archive filename composed
//! (`archive-<sanitized-script-name>-<epoch-millis>.tar`) and the tool
//! invoked. The epoch-millis suffix keeps repeated archives of the same
//! script within one process run distinct; it is not a cross-machine
//! uniqueness guarantee. After the tool returns, the archiver verifies the
//! file exists: a tool that exits zero but produces nothing still fails with
//! `ArchiveCreationFailed`, carrying the captured stderr for diagnostics.
//!
//! The returned [`ArchiveResult`] is an immutable value; the archive file it
//! points to is owned by the caller from this moment on (nothing here ever
//! deletes it).
//!
use crate::common::k6::ArchiveTool;
use crate::common::naming;
use crate::core::error::{LoadrsError, Result};
use std::path::{Path, PathBuf};
use tracing::{debug, info};

/// Outcome of one successful archive operation.
///
/// Invariant: `archive_path` exists on disk at the moment this value is
/// returned. The script fields are provenance, retained for logging and for
/// symmetry with later cleanup.
#[derive(Debug, Clone)]
pub struct ArchiveResult {
    /// Path to the produced archive file.
    pub archive_path: PathBuf,
    /// Base name of the archive file (derived, not independently settable).
    pub archive_filename: String,
    /// The originating script path.
    pub script_path: PathBuf,
    /// Base name of the originating script.
    pub script_filename: String,
}

/// Packages `script_path` into a portable archive under `output_dir`
/// (current working directory when `None`).
///
/// # Arguments
///
/// * `tool` - The external packaging tool seam (production: `K6Cli`).
/// * `script_path` - Path to the load-test script to bundle.
/// * `output_dir` - Optional directory the archive is written into. Must
///   already exist when supplied; the archiver never creates directories.
///
/// # Returns
///
/// * `Result<ArchiveResult>` - The produced archive's location and provenance.
///
/// # Errors
///
/// * `ScriptNotFound` - `script_path` does not resolve to an existing file.
/// * `OutputDirectoryNotFound` - `output_dir` was supplied but does not exist.
/// * `ToolNotInstalled` - the tool's version probe failed.
/// * `ArchiveCreationFailed` - the tool exited non-zero, or exited zero
///   without producing the archive file; carries the tool's stderr.
pub async fn create_archive(
    tool: &dyn ArchiveTool,
    script_path: &Path,
    output_dir: Option<&Path>,
) -> Result<ArchiveResult> {
    // Precondition 1: the script must exist before anything else is attempted.
    if !script_path.is_file() {
        return Err(LoadrsError::ScriptNotFound {
            path: script_path.display().to_string(),
        })?;
    }

    // Precondition 2: a supplied output directory must already exist.
    if let Some(dir) = output_dir {
        if !dir.is_dir() {
            return Err(LoadrsError::OutputDirectoryNotFound {
                path: dir.display().to_string(),
            })?;
        }
    }

    // Precondition 3: probe the tool before composing any filesystem state.
    if !tool.probe().await? {
        return Err(LoadrsError::ToolNotInstalled {
            binary: tool.name().to_string(),
        })?;
    }

    let script_filename = script_path
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_default();
    let script_stem = script_path
        .file_stem()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_default();

    // archive-<sanitized-name>-<epoch-millis>.tar; the millis suffix keeps
    // repeated archives of one script distinct within a process run.
    let sanitized = naming::sanitize_name(&script_stem);
    let millis = chrono::Utc::now().timestamp_millis();
    let archive_filename = format!("archive-{}-{}.tar", sanitized, millis);
    let archive_path = match output_dir {
        Some(dir) => dir.join(&archive_filename),
        None => PathBuf::from(&archive_filename),
    };
    debug!(
        "Archiving '{}' into '{}'",
        script_path.display(),
        archive_path.display()
    );

    let output = tool.archive(script_path, &archive_path).await?;
    if !output.stdout.is_empty() {
        debug!("Tool stdout:\n{}", output.stdout);
    }

    // A tool that exits zero but writes nothing is still a failure.
    if !output.success || !archive_path.is_file() {
        return Err(LoadrsError::ArchiveCreationFailed {
            path: archive_path.display().to_string(),
            stderr: output.stderr,
        })?;
    }

    info!(
        "Created archive '{}' from script '{}'",
        archive_path.display(),
        script_path.display()
    );
    Ok(ArchiveResult {
        archive_path,
        archive_filename,
        script_path: script_path.to_path_buf(),
        script_filename,
    })
}
