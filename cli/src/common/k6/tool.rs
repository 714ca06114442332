//! # LoadRS k6 Tool Invocation (`common::k6::tool`)
//!
//! File: cli/src/common/k6/tool.rs
//! Author: Christi Mahu
//! Repository: https://github.com/christimahu/loadrs
//!
//! ## Overview
//!
//! This module wraps the external `k6` binary behind a narrow capability
//! interface. Two operations exist:
//!
//! - **probe**: `k6 version`, a lightweight install check run before any
//!   archive attempt, so a missing binary fails fast with a clear message
//!   instead of a confusing spawn error mid-pipeline.
//! - **archive**: `k6 archive <script> -O <output>`, which produces the
//!   single-file bundle. Argument order and flag names match what a real k6 release
//!   expects; the tool's stdout/stderr are captured for diagnostics rather
//!   than streamed.
//!
//! ## Architecture
//!
//! The `ArchiveTool` trait is the seam between the archiver logic and the real
//! subprocess. Production code binds it to `K6Cli` (which spawns via
//! `tokio::process::Command`); unit tests bind it to in-crate fakes that write
//! or skip files deliberately. The trait is object-safe (`&dyn ArchiveTool`)
//! via `async_trait`.
//!
//! Spawn failures with `ErrorKind::NotFound` are reported as `Ok(false)` from
//! `probe` rather than an error: "k6 is not installed" is an expected state
//! the caller maps to its own error kind, not an I/O fault.
//!
use crate::core::error::Result;
use anyhow::Context;
use async_trait::async_trait;
use std::path::Path;
use tokio::process::Command;
use tracing::{debug, instrument};

/// Captured stdout/stderr and exit outcome of a finished subprocess run.
///
/// Held for diagnostics: when archive creation fails, the captured stderr is
/// embedded verbatim in the returned error so the user sees what k6 printed.
#[derive(Debug, Clone)]
pub struct CapturedOutput {
    /// True when the process exited with a zero status code.
    pub success: bool,
    /// Everything the process wrote to stdout, lossily decoded.
    pub stdout: String,
    /// Everything the process wrote to stderr, lossily decoded.
    pub stderr: String,
}

/// Capability interface for the external packaging tool.
///
/// Production code uses [`K6Cli`]; tests substitute fakes so no process is
/// ever spawned in unit tests.
#[async_trait]
pub trait ArchiveTool: Send + Sync {
    /// The tool's binary name, for user-facing error messages.
    fn name(&self) -> &str;

    /// Checks whether the tool is installed and invocable.
    ///
    /// Returns `Ok(false)` when the binary cannot be found, `Ok(true)` when
    /// the version probe exits successfully.
    async fn probe(&self) -> Result<bool>;

    /// Bundles `script` and its resolved dependencies into `archive`.
    ///
    /// Captures the tool's output; does not itself verify that the archive
    /// file was produced (the caller owns that check).
    async fn archive(&self, script: &Path, archive: &Path) -> Result<CapturedOutput>;
}

/// Production `ArchiveTool` implementation invoking the k6 CLI binary.
#[derive(Debug, Clone)]
pub struct K6Cli {
    /// Name or path of the binary to spawn (from configuration, default "k6").
    binary: String,
}

impl K6Cli {
    /// Creates a new CLI binding for the given binary name or path.
    pub fn new(binary: impl Into<String>) -> Self {
        Self {
            binary: binary.into(),
        }
    }
}

#[async_trait]
impl ArchiveTool for K6Cli {
    fn name(&self) -> &str {
        &self.binary
    }

    #[instrument(skip(self))]
    async fn probe(&self) -> Result<bool> {
        debug!("Probing for k6 with '{} version'", self.binary);
        match Command::new(&self.binary).arg("version").output().await {
            Ok(output) => Ok(output.status.success()),
            // A missing binary is an expected state, not an I/O fault.
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(false),
            Err(e) => Err(e).with_context(|| {
                format!("Failed to run version probe for '{}'", self.binary)
            }),
        }
    }

    #[instrument(skip(self))]
    async fn archive(&self, script: &Path, archive: &Path) -> Result<CapturedOutput> {
        debug!(
            "Running '{} archive {} -O {}'",
            self.binary,
            script.display(),
            archive.display()
        );
        let output = Command::new(&self.binary)
            .arg("archive")
            .arg(script)
            .arg("-O")
            .arg(archive)
            .output()
            .await
            .with_context(|| {
                format!(
                    "Failed to spawn '{} archive {}'",
                    self.binary,
                    script.display()
                )
            })?;

        Ok(CapturedOutput {
            success: output.status.success(),
            stdout: String::from_utf8_lossy(&output.stdout).into_owned(),
            stderr: String::from_utf8_lossy(&output.stderr).into_owned(),
        })
    }
}
