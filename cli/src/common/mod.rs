//! # LoadRS Common Utilities (`common`)
//!
//! File: cli/src/common/mod.rs
//! Author: Christi Mahu
//! Repository: https://github.com/christimahu/loadrs
//!
//! ## Overview
//!
//! This module aggregates the shared utility modules used across the LoadRS
//! application. Command handlers stay thin by delegating real work to the
//! components collected here.
//!
//! ## Architecture
//!
//! The `common` module is organized by concern:
//!
//! - **`bundle`**: The core pipeline: script archiving and ConfigMap
//!   publishing/retraction.
//! - **`fs`**: Filesystem helpers (file sizing, file removal).
//! - **`k6`**: The external k6 packaging tool behind the `ArchiveTool` seam.
//! - **`kube`**: The Kubernetes cluster behind the `ConfigMapStore` seam.
//! - **`naming`**: The shared name-sanitization transform.
//!
//! ## Usage
//!
//! ```rust
//! // Example importing from different common submodules
//! use crate::common::{bundle, k6, kube, naming};
//! use crate::core::error::Result;
//! use std::path::Path;
//!
//! # async fn run_example() -> Result<()> {
//! let tool = k6::K6Cli::new("k6");
//! let result = bundle::create_archive(&tool, Path::new("script.js"), None).await?;
//! println!("ConfigMap name will be: {}", naming::sanitize_name("K6_Script"));
//! # Ok(())
//! # }
//! ```
//!
//! This modular approach keeps the utility codebase organized and maintainable.
//!

/// Core pipeline: archive creation and ConfigMap publish/retract.
pub mod bundle;
/// Utilities for filesystem operations (sizing, removal).
pub mod fs;
/// Wrapper around the external k6 packaging tool.
pub mod k6;
/// Core utilities for interacting with the Kubernetes cluster.
pub mod kube;
/// Shared name-sanitization transform for archives and resources.
pub mod naming;
