//! # LoadRS Kubernetes Module Interface
//!
//! File: cli/src/common/kube/mod.rs
//! Author: Christi Mahu
//! Repository: https://github.com/christimahu/loadrs
//!
//! ## Overview
//!
//! This module serves as the central public interface for interacting with the
//! Kubernetes cluster within the LoadRS CLI. It organizes cluster-related
//! functionality into logical submodules and re-exports commonly used items
//! for convenience, abstracting the underlying `kube` crate interactions.
//!
//! ## Architecture
//!
//! The `common::kube` module delegates tasks to the following submodules:
//!
//! - **`connect`**: Handles constructing an authenticated `kube::Client` from
//!   ambient credentials (kubeconfig or in-cluster service account).
//! - **`configmaps`**: Defines the `ConfigMapStore` capability trait for
//!   creating and deleting namespaced ConfigMaps, plus the production
//!   `KubeConfigMapStore` implementation bound to a real cluster.
//!
//! By keeping the store behind a trait, the publisher logic never touches the
//! `kube` crate directly and unit tests run against an in-memory fake with no
//! live-cluster dependency.
//!
//! ## Usage
//!
//! Command handlers interact with the cluster primarily through this module's
//! re-exported items:
//!
//! ```rust
//! use crate::common::kube; // Import the main kube module interface
//! use crate::core::error::Result;
//!
//! # async fn run_example() -> Result<()> {
//! // Connect using ambient credentials (kubeconfig / in-cluster).
//! let client = kube::connect_client().await?;
//! // Bind the ConfigMap store to the live cluster.
//! let store = kube::KubeConfigMapStore::new(client);
//! # Ok(())
//! # }
//! ```
//!

/// Handles establishing a connection to the Kubernetes cluster.
pub mod connect;
/// Provides the ConfigMap store trait and its cluster-backed implementation.
pub mod configmaps;

// --- Re-exports for easier access from other parts of the application ---
pub use configmaps::{ConfigMapStore, KubeConfigMapStore};
pub use connect::connect_client;
