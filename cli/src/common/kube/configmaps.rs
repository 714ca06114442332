//! # LoadRS ConfigMap Store (`common::kube::configmaps`)
//!
//! File: cli/src/common/kube/configmaps.rs
//! Author: Christi Mahu
//! Repository: https://github.com/christimahu/loadrs
//!
//! ## Overview
//!
//! This module defines the minimal capability interface the publisher needs
//! from the cluster (create a namespaced ConfigMap carrying one binary
//! payload, and delete one by name), plus the production implementation bound
//! to a real `kube::Client`.
//!
//! ## Architecture
//!
//! The `ConfigMapStore` trait is keyed by `(namespace, name)`; it accepts the
//! payload as raw bytes. The production `KubeConfigMapStore` places the bytes
//! into the ConfigMap's `binaryData` map via `k8s_openapi::ByteString`, which
//! serializes as base64 on the wire, the encoded form required by the
//! resource contract:
//!
//! ```json
//! {
//!   "apiVersion": "v1",
//!   "kind": "ConfigMap",
//!   "metadata": { "name": "...", "namespace": "..." },
//!   "binaryData": { "<archive filename>": "<base64>" }
//! }
//! ```
//!
//! Errors are returned unmapped (as `anyhow` errors around `kube::Error`);
//! the publisher owns translating them into `PublishFailed`/`RetractFailed`
//! so the transport text survives verbatim in user-facing messages.
//!
//! Both operations are single-attempt. There is no retry, no watch, and no
//! caching; each call is one API round trip.
//!
use crate::core::error::Result;
use async_trait::async_trait;
use k8s_openapi::api::core::v1::ConfigMap;
use k8s_openapi::apimachinery::pkg::apis::meta::v1::ObjectMeta;
use k8s_openapi::ByteString;
use kube::api::{Api, DeleteParams, PostParams};
use kube::Client;
use std::collections::BTreeMap;
use tracing::{debug, instrument};

/// Capability interface for the namespaced ConfigMap resource API.
///
/// Production code uses [`KubeConfigMapStore`]; tests substitute an in-memory
/// fake so no live cluster is involved in unit tests.
#[async_trait]
pub trait ConfigMapStore: Send + Sync {
    /// Creates a ConfigMap named `name` in `namespace` whose `binaryData`
    /// map has exactly one entry keyed by `filename`.
    ///
    /// Fails if the resource already exists or the API rejects the request;
    /// on failure the resource must be treated as not created.
    async fn create(
        &self,
        namespace: &str,
        name: &str,
        filename: &str,
        payload: Vec<u8>,
    ) -> Result<()>;

    /// Deletes the ConfigMap named `name` in `namespace`. Single attempt;
    /// the transport error surfaces verbatim on failure.
    async fn delete(&self, namespace: &str, name: &str) -> Result<()>;
}

/// Production `ConfigMapStore` bound to a live cluster via `kube::Client`.
#[derive(Clone)]
pub struct KubeConfigMapStore {
    client: Client,
}

impl KubeConfigMapStore {
    /// Wraps an authenticated client (see `connect::connect_client`).
    pub fn new(client: Client) -> Self {
        Self { client }
    }

    fn api(&self, namespace: &str) -> Api<ConfigMap> {
        Api::namespaced(self.client.clone(), namespace)
    }
}

#[async_trait]
impl ConfigMapStore for KubeConfigMapStore {
    #[instrument(skip(self, payload), fields(payload_bytes = payload.len()))]
    async fn create(
        &self,
        namespace: &str,
        name: &str,
        filename: &str,
        payload: Vec<u8>,
    ) -> Result<()> {
        debug!("Creating ConfigMap '{}/{}'", namespace, name);
        let mut binary_data = BTreeMap::new();
        // ByteString base64-encodes the payload during serialization.
        binary_data.insert(filename.to_string(), ByteString(payload));

        let config_map = ConfigMap {
            metadata: ObjectMeta {
                name: Some(name.to_string()),
                namespace: Some(namespace.to_string()),
                ..Default::default()
            },
            binary_data: Some(binary_data),
            ..Default::default()
        };

        self.api(namespace)
            .create(&PostParams::default(), &config_map)
            .await?;
        debug!("ConfigMap '{}/{}' created", namespace, name);
        Ok(())
    }

    #[instrument(skip(self))]
    async fn delete(&self, namespace: &str, name: &str) -> Result<()> {
        debug!("Deleting ConfigMap '{}/{}'", namespace, name);
        // The API may answer with the deleted object or a deletion status;
        // either way the resource is gone, so the distinction is dropped.
        self.api(namespace)
            .delete(name, &DeleteParams::default())
            .await?;
        debug!("ConfigMap '{}/{}' deleted", namespace, name);
        Ok(())
    }
}
