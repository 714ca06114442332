//! # LoadRS k6 Module Interface
//!
//! File: cli/src/common/k6/mod.rs
//! Author: Christi Mahu
//! Repository: https://github.com/christimahu/loadrs
//!
//! ## Overview
//!
//! This module serves as the central public interface for interacting with the
//! external `k6` packaging tool within the LoadRS CLI. The tool is treated as
//! an opaque binary contract: a no-argument version probe that succeeds when
//! installed, and an archive subcommand that bundles a script plus all of its
//! resolved dependencies (remote imports, auxiliary data files) into a single
//! portable `.tar` file.
//!
//! ## Architecture
//!
//! - **`tool`**: Defines the `ArchiveTool` capability trait (`probe`,
//!   `archive`), the `CapturedOutput` value returned from subprocess runs, and
//!   the production `K6Cli` implementation backed by `tokio::process::Command`.
//!
//! Abstracting the subprocess behind `ArchiveTool` lets the archiver logic be
//! unit-tested with fake implementations that never spawn a process.
//!
//! ## Usage
//!
//! ```rust
//! use crate::common::k6::{ArchiveTool, K6Cli};
//! use crate::core::error::Result;
//! use std::path::Path;
//!
//! # async fn run_example() -> Result<()> {
//! let tool = K6Cli::new("k6");
//! if tool.probe().await? {
//!     let output = tool
//!         .archive(Path::new("script.js"), Path::new("archive-script-1.tar"))
//!         .await?;
//!     println!("k6 exited successfully: {}", output.success);
//! }
//! # Ok(())
//! # }
//! ```
//!

/// Defines the `ArchiveTool` trait and the production k6 CLI binding.
pub mod tool;

// --- Re-exports for easier access from other parts of the application ---
pub use tool::{ArchiveTool, CapturedOutput, K6Cli};
