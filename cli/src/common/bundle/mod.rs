//! # LoadRS Bundle Module Interface
//!
//! File: cli/src/common/bundle/mod.rs
//! Author: Christi Mahu
//! Repository: https://github.com/christimahu/loadrs
//!
//! ## Overview
//!
//! This module is the core of LoadRS: it packages a load-test script into a
//! portable archive and publishes that archive into the cluster as a
//! ConfigMap. The two halves compose into the pipeline
//! **archive -> validate size -> encode -> publish**, with the reverse
//! teardown flow (**delete ConfigMap -> delete local archive**) driven by the
//! caller.
//!
//! ## Architecture
//!
//! - **`archiver`**: The Script Archiver. Validates inputs, names the archive
//!   (`archive-<sanitized-name>-<epoch-millis>.tar`), invokes the external k6
//!   tool through the `ArchiveTool` seam, and verifies the file exists before
//!   returning an `ArchiveResult`. Leaf component; no cluster dependency.
//! - **`publisher`**: The Resource Publisher. Validates the archive against
//!   the 1 MiB ConfigMap payload ceiling and creates (or deletes) the named
//!   resource through the `ConfigMapStore` seam, returning a
//!   `ConfigMapResult`.
//!
//! The two components share no mutable state; each call is pure given its
//! explicit inputs and collaborator, so concurrent calls for distinct scripts
//! or namespaces are independent by construction.
//!
//! ## Usage
//!
//! ```rust
//! use crate::common::bundle;
//! use crate::common::k6::K6Cli;
//! use crate::common::kube::{self, KubeConfigMapStore};
//! use crate::core::error::Result;
//! use std::path::Path;
//!
//! # async fn run_example() -> Result<()> {
//! let tool = K6Cli::new("k6");
//! let result = bundle::create_archive(&tool, Path::new("script.js"), None).await?;
//!
//! let store = KubeConfigMapStore::new(kube::connect_client().await?);
//! let published = bundle::publish_archive(&store, &result, "default").await?;
//! bundle::retract_config_map(&store, &published.config_map_name, &published.namespace).await?;
//! # Ok(())
//! # }
//! ```
//!

/// Packages scripts into portable archives via the external k6 tool.
pub mod archiver;
/// Publishes archives as namespaced ConfigMaps and retracts them.
pub mod publisher;

// --- Re-exports for easier access from other parts of the application ---
pub use archiver::{create_archive, ArchiveResult};
pub use publisher::{publish_archive, retract_config_map, ConfigMapResult, MAX_ARCHIVE_BYTES};
