//! # LoadRS Kubernetes Connection Helper
//!
//! File: cli/src/common/kube/connect.rs
//! Author: Christi Mahu
//! Repository: https://github.com/christimahu/loadrs
//!
//! ## Overview
//!
//! This internal utility module provides a single, standardized function,
//! `connect_client`, responsible for constructing an authenticated Kubernetes
//! client using the default credential resolution provided by the `kube`
//! crate. It centralizes connection logic and error handling for use by the
//! command handlers.
//!
//! ## Architecture
//!
//! - Defines the asynchronous function `connect_client`.
//! - Calls `kube::Client::try_default()`, which resolves `$KUBECONFIG`, then
//!   `~/.kube/config`, then in-cluster service-account credentials.
//! - Wraps connection errors into the application's standard `Result` type,
//!   mapping them to `LoadrsError::KubeApi` and adding user-friendly context.
//!
//! No transport timeouts are configured here; those belong to the kubeconfig
//! (or the surrounding environment), matching the single-attempt model of the
//! publish and retract operations.
//!
//! ## Usage
//!
//! ```rust
//! use crate::common::kube::connect::connect_client;
//! use crate::core::error::Result;
//!
//! async fn perform_cluster_operation() -> Result<()> {
//!     // Get an authenticated client for the cluster.
//!     let client = connect_client().await?;
//!     // Use the client instance...
//!     Ok(())
//! }
//! ```
//!
use crate::core::error::{LoadrsError, Result}; // Use Result from core::error
use anyhow::{anyhow, Context}; // For error context
use kube::Client; // Kubernetes client struct
use tracing::instrument; // For tracing function calls

/// Constructs a Kubernetes client from ambient credentials.
///
/// Credential resolution follows `kube::Client::try_default()`:
/// `$KUBECONFIG`, then `~/.kube/config`, then the in-cluster service account.
///
/// # Returns
///
/// * `Result<Client>` - An authenticated `kube::Client` instance wrapped in a
///   `Result` on successful construction.
///
/// # Errors
///
/// Returns an `Err` wrapping `LoadrsError::KubeApi` if no usable credentials
/// can be resolved or the initial connection setup fails. The error includes
/// context suggesting the kubeconfig as the likely culprit.
#[instrument] // Automatically adds tracing spans for function entry/exit.
pub async fn connect_client() -> Result<Client> {
    Client::try_default()
        .await
        // Map the kube::Error into our application's error handling structure.
        .map_err(|e| anyhow!(LoadrsError::KubeApi { source: e }))
        // Add user-friendly context to the error if connection fails.
        .context("Failed to connect to Kubernetes cluster. Is a kubeconfig available?")
}

// --- Unit Tests ---
#[cfg(test)]
mod tests {
    use super::*;

    /// Test successful client construction against a reachable cluster.
    /// This test is marked `#[ignore]` because it requires an external
    /// dependency (a kubeconfig pointing at a live cluster) which may not be
    /// present in all testing environments (like CI). Run locally with
    /// `cargo test -- --ignored`.
    #[tokio::test]
    #[ignore] // Ignored because it requires a reachable cluster.
    async fn test_connect_client_success() {
        let result = connect_client().await;
        assert!(
            result.is_ok(),
            "Should connect successfully if a kubeconfig is available"
        );
    }
}
