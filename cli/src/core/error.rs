//! # LoadRS Error Types
//!
//! File: cli/src/core/error.rs
//! Author: Christi Mahu
//! Repository: https://github.com/christimahu/loadrs
//!
//! ## Overview
//!
//! This module defines the error types and error handling mechanisms used throughout
//! the LoadRS application. It provides a consistent approach to error management
//! with detailed error information and context.
//!
//! ## Architecture
//!
//! The error system consists of two main components:
//! - `LoadrsError`: A custom error enum using `thiserror` for specific error types
//! - `Result<T>`: A type alias for `anyhow::Result<T>` for flexible error handling
//!
//! The error types cover various domains:
//! - Configuration errors
//! - Filesystem errors
//! - Archive creation errors (missing script, missing output directory, k6 failures)
//! - ConfigMap publish/retract errors and Kubernetes API interaction errors
//!
//! Every operation-level failure is terminal: nothing in this crate retries
//! internally. Each message carries the offending path or resource name and,
//! where applicable, the underlying tool or transport error text verbatim, so
//! callers can surface actionable diagnostics without re-deriving context.
//!
//! ## Examples
//!
//! Using the error system:
//!
//! ```rust
//! // Return a specific error type
//! if !script_path.is_file() {
//!     return Err(LoadrsError::ScriptNotFound { path: script_path.display().to_string() })?;
//! }
//!
//! // Add context to errors using anyhow
//! let bytes = fs::read(&path)
//!     .with_context(|| format!("Failed to read archive: {}", path.display()))?;
//!
//! // Pattern matching on error types
//! match result {
//!     Ok(value) => println!("Success: {:?}", value),
//!     Err(e) if e.downcast_ref::<LoadrsError>().map_or(false, |le| matches!(le, LoadrsError::ArchiveTooLarge { .. })) => {
//!         println!("Archive over the ConfigMap ceiling, split the script's data files");
//!     },
//!     Err(e) => return Err(e),
//! }
//! ```
//!
use thiserror::Error;

/// Custom error type for the LoadRS application.
// Removed PartialEq derive because source fields don't implement it.
#[derive(Error, Debug)]
pub enum LoadrsError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Filesystem error: {0}")]
    FileSystem(String),

    #[error("Script not found: {path}")]
    ScriptNotFound { path: String },

    #[error("Output directory not found: {path}")]
    OutputDirectoryNotFound { path: String },

    #[error("'{binary}' is not installed or not on PATH. Install k6 to package load-test scripts.")]
    ToolNotInstalled { binary: String },

    #[error("Failed to create archive '{path}':\n{stderr}")]
    ArchiveCreationFailed { path: String, stderr: String },

    #[error("Archive not found: {path}")]
    ArchiveNotFound { path: String },

    #[error("Archive '{path}' is {size} bytes, exceeding the {limit}-byte ConfigMap payload ceiling.")]
    ArchiveTooLarge { path: String, size: u64, limit: u64 },

    #[error("Kubernetes API interaction failed: {source}")]
    KubeApi {
        #[from]
        source: kube::Error,
    },

    #[error("Failed to publish ConfigMap '{name}' in namespace '{namespace}': {reason}")]
    PublishFailed {
        name: String,
        namespace: String,
        reason: String,
    },

    #[error("Failed to retract ConfigMap '{name}' in namespace '{namespace}': {reason}")]
    RetractFailed {
        name: String,
        namespace: String,
        reason: String,
    },
}

/// Type alias for Result using anyhow::Error for broad compatibility.
/// Anyhow allows for easy context addition and flexible error handling.
pub type Result<T> = anyhow::Result<T>;
