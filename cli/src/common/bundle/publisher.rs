//! # LoadRS Resource Publisher (`common::bundle::publisher`)
//!
//! File: cli/src/common/bundle/publisher.rs
//! Author: Christi Mahu
//! Repository: https://github.com/christimahu/loadrs
//!
//! ## Overview
//!
//! This module stores a produced archive inside the cluster as a named,
//! namespaced ConfigMap so the in-cluster execution controller can mount and
//! run it, and retracts that ConfigMap during teardown. The ConfigMap's
//! `binaryData` map holds exactly one entry: the archive filename mapped to
//! the archive bytes (base64-encoded on the wire by the client).
//!
//! ## Architecture
//!
//! `publish_archive` validates before it transmits:
//!
//! 1. The archive file must still exist (`ArchiveNotFound`), since the caller
//!    may have cleaned it up between archiving and publishing.
//! 2. Its size must not exceed [`MAX_ARCHIVE_BYTES`] (`ArchiveTooLarge`).
//!    ConfigMaps store payload inline and are capped by etcd's object-size
//!    limit; the ceiling is a design constant, not user-configurable. No API
//!    call is made for an oversized archive.
//!
//! The ConfigMap name is derived by sanitizing the archive filename without
//! its extension (the same transform the archiver applied), so the two names
//! stay mutually consistent. API failures (authorization, already-exists,
//! network) surface as `PublishFailed` wrapping the transport error text; if
//! the remote call does not acknowledge success, the resource is treated as
//! not created.
//!
//! `retract_config_map` is a single delete attempt; retry/backoff policy
//! belongs to the caller. Per published resource the state machine is
//! `absent -> published -> absent`. There is no update state, and republishing
//! under an existing name surfaces the remote already-exists error rather
//! than being special-cased.
//!
use crate::common::bundle::ArchiveResult;
use crate::common::fs;
use crate::common::kube::ConfigMapStore;
use crate::common::naming;
use crate::core::error::{LoadrsError, Result};
use anyhow::Context;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

/// Maximum archive size accepted for inline ConfigMap storage: 1 MiB.
///
/// ConfigMap payloads live in etcd, which caps object sizes; anything larger
/// must ship its data files out-of-band rather than inline.
pub const MAX_ARCHIVE_BYTES: u64 = 1024 * 1024;

/// Outcome of one successful publish operation.
///
/// Invariant: `config_map_name` is a valid cluster resource name (lowercase
/// alphanumeric, `-`, `.`; no leading/trailing separators; no `--`/`..`
/// runs). The archive fields are carried through from the [`ArchiveResult`]
/// for symmetry with deletion and cleanup.
#[derive(Debug, Clone)]
pub struct ConfigMapResult {
    /// Namespace the ConfigMap was created in.
    pub namespace: String,
    /// Name of the created ConfigMap, derived from the archive filename.
    pub config_map_name: String,
    /// Path of the published archive file.
    pub archive_path: PathBuf,
    /// Base name of the published archive file (the `binaryData` key).
    pub archive_filename: String,
}

/// Publishes `archive` into `namespace` as a ConfigMap.
///
/// # Arguments
///
/// * `store` - The ConfigMap store seam (production: `KubeConfigMapStore`).
/// * `archive` - Result of a prior [`create_archive`](super::create_archive) call.
/// * `namespace` - Target namespace for the resource.
///
/// # Returns
///
/// * `Result<ConfigMapResult>` - The `(namespace, name)` pair identifying the
///   created resource, which the caller must track to retract it later.
///
/// # Errors
///
/// * `ArchiveNotFound` - the archive file no longer exists on disk.
/// * `ArchiveTooLarge` - the archive exceeds [`MAX_ARCHIVE_BYTES`]; no API
///   call is attempted.
/// * `PublishFailed` - the create request failed; wraps the transport error
///   text verbatim (including already-exists rejections).
pub async fn publish_archive(
    store: &dyn ConfigMapStore,
    archive: &ArchiveResult,
    namespace: &str,
) -> Result<ConfigMapResult> {
    // Precondition 1: the archive must still be on disk.
    if !archive.archive_path.is_file() {
        return Err(LoadrsError::ArchiveNotFound {
            path: archive.archive_path.display().to_string(),
        })?;
    }

    // Precondition 2: enforce the inline-payload ceiling before any API call.
    let size = fs::io::file_size(&archive.archive_path)?;
    if size > MAX_ARCHIVE_BYTES {
        return Err(LoadrsError::ArchiveTooLarge {
            path: archive.archive_path.display().to_string(),
            size,
            limit: MAX_ARCHIVE_BYTES,
        })?;
    }

    let payload = std::fs::read(&archive.archive_path).with_context(|| {
        format!(
            "Failed to read archive contents: {}",
            archive.archive_path.display()
        )
    })?;

    // Same transform the archiver used on the script name, applied to the
    // archive filename without its extension, so both names stay consistent.
    let stem = Path::new(&archive.archive_filename)
        .file_stem()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_default();
    let config_map_name = naming::sanitize_name(&stem);
    debug!(
        "Publishing '{}' ({} bytes) as ConfigMap '{}/{}'",
        archive.archive_filename, size, namespace, config_map_name
    );

    store
        .create(
            namespace,
            &config_map_name,
            &archive.archive_filename,
            payload,
        )
        .await
        .map_err(|e| LoadrsError::PublishFailed {
            name: config_map_name.clone(),
            namespace: namespace.to_string(),
            reason: format!("{:#}", e),
        })?;

    info!(
        "Published ConfigMap '{}' in namespace '{}'",
        config_map_name, namespace
    );
    Ok(ConfigMapResult {
        namespace: namespace.to_string(),
        config_map_name,
        archive_path: archive.archive_path.clone(),
        archive_filename: archive.archive_filename.clone(),
    })
}

/// Deletes the named ConfigMap in `namespace`.
///
/// Single attempt; the caller owns any retry/backoff policy.
///
/// # Errors
///
/// * `RetractFailed` - the delete request failed; wraps the transport error
///   text verbatim (including not-found rejections).
pub async fn retract_config_map(
    store: &dyn ConfigMapStore,
    config_map_name: &str,
    namespace: &str,
) -> Result<()> {
    debug!(
        "Retracting ConfigMap '{}/{}'",
        namespace, config_map_name
    );
    store
        .delete(namespace, config_map_name)
        .await
        .map_err(|e| LoadrsError::RetractFailed {
            name: config_map_name.to_string(),
            namespace: namespace.to_string(),
            reason: format!("{:#}", e),
        })?;

    info!(
        "Retracted ConfigMap '{}' from namespace '{}'",
        config_map_name, namespace
    );
    Ok(())
}

// --- Unit Tests ---
#[cfg(test)]
mod tests {
    use super::*;
    use anyhow::bail;
    use async_trait::async_trait;
    use std::collections::HashMap;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Mutex;
    use tempfile::tempdir;

    /// In-memory ConfigMap store keyed by `(namespace, name)`. Records call
    /// counts so tests can assert that precondition failures never reach the
    /// API layer.
    #[derive(Default)]
    struct InMemoryStore {
        maps: Mutex<HashMap<(String, String), (String, Vec<u8>)>>,
        create_calls: AtomicUsize,
        delete_calls: AtomicUsize,
        fail_delete: bool,
    }

    impl InMemoryStore {
        fn contains(&self, namespace: &str, name: &str) -> bool {
            self.maps
                .lock()
                .unwrap()
                .contains_key(&(namespace.to_string(), name.to_string()))
        }

        fn entry(&self, namespace: &str, name: &str) -> Option<(String, Vec<u8>)> {
            self.maps
                .lock()
                .unwrap()
                .get(&(namespace.to_string(), name.to_string()))
                .cloned()
        }
    }

    #[async_trait]
    impl ConfigMapStore for InMemoryStore {
        async fn create(
            &self,
            namespace: &str,
            name: &str,
            filename: &str,
            payload: Vec<u8>,
        ) -> Result<()> {
            self.create_calls.fetch_add(1, Ordering::SeqCst);
            let mut maps = self.maps.lock().unwrap();
            let key = (namespace.to_string(), name.to_string());
            if maps.contains_key(&key) {
                bail!("configmaps \"{}\" already exists", name);
            }
            maps.insert(key, (filename.to_string(), payload));
            Ok(())
        }

        async fn delete(&self, namespace: &str, name: &str) -> Result<()> {
            self.delete_calls.fetch_add(1, Ordering::SeqCst);
            if self.fail_delete {
                bail!("connection refused");
            }
            let mut maps = self.maps.lock().unwrap();
            let key = (namespace.to_string(), name.to_string());
            if maps.remove(&key).is_none() {
                bail!("configmaps \"{}\" not found", name);
            }
            Ok(())
        }
    }

    fn archive_on_disk(dir: &Path, filename: &str, bytes: &[u8]) -> ArchiveResult {
        let archive_path = dir.join(filename);
        std::fs::write(&archive_path, bytes).unwrap();
        ArchiveResult {
            archive_path,
            archive_filename: filename.to_string(),
            script_path: dir.join("sample.js"),
            script_filename: "sample.js".to_string(),
        }
    }

    #[tokio::test]
    async fn test_missing_archive_fails_without_api_call() {
        let dir = tempdir().unwrap();
        let store = InMemoryStore::default();
        let mut archive = archive_on_disk(dir.path(), "archive-sample-1.tar", b"bytes");
        archive.archive_path = dir.path().join("gone.tar");

        let err = publish_archive(&store, &archive, "default")
            .await
            .unwrap_err()
            .to_string();
        assert!(err.contains("Archive not found"), "got: {}", err);
        assert_eq!(store.create_calls.load(Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn test_oversized_archive_fails_without_api_call() {
        let dir = tempdir().unwrap();
        let store = InMemoryStore::default();
        let big = vec![0u8; (MAX_ARCHIVE_BYTES + 1) as usize];
        let archive = archive_on_disk(dir.path(), "archive-sample-1.tar", &big);

        let err = publish_archive(&store, &archive, "default")
            .await
            .unwrap_err()
            .to_string();
        assert!(err.contains("exceeding"), "got: {}", err);
        assert_eq!(store.create_calls.load(Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn test_archive_exactly_at_ceiling_publishes() {
        let dir = tempdir().unwrap();
        let store = InMemoryStore::default();
        let exact = vec![0u8; MAX_ARCHIVE_BYTES as usize];
        let archive = archive_on_disk(dir.path(), "archive-sample-1.tar", &exact);

        let result = publish_archive(&store, &archive, "default").await;
        assert!(result.is_ok());
    }

    #[tokio::test]
    async fn test_publish_derives_name_and_stores_payload() {
        let dir = tempdir().unwrap();
        let store = InMemoryStore::default();
        let archive = archive_on_disk(
            dir.path(),
            "archive-k6-script-sample-2-1700000000000.tar",
            b"tar contents",
        );

        let result = publish_archive(&store, &archive, "default")
            .await
            .expect("publish should succeed");

        assert_eq!(
            result.config_map_name,
            "archive-k6-script-sample-2-1700000000000"
        );
        assert_eq!(result.namespace, "default");
        assert_eq!(result.archive_filename, archive.archive_filename);

        let (filename, payload) = store
            .entry("default", &result.config_map_name)
            .expect("entry should exist");
        assert_eq!(filename, "archive-k6-script-sample-2-1700000000000.tar");
        assert_eq!(payload, b"tar contents");
    }

    #[tokio::test]
    async fn test_duplicate_publish_surfaces_already_exists() {
        let dir = tempdir().unwrap();
        let store = InMemoryStore::default();
        let archive = archive_on_disk(dir.path(), "archive-sample-1.tar", b"bytes");

        publish_archive(&store, &archive, "default").await.unwrap();
        let err = publish_archive(&store, &archive, "default")
            .await
            .unwrap_err()
            .to_string();

        assert!(err.contains("Failed to publish"), "got: {}", err);
        assert!(err.contains("already exists"), "got: {}", err);
    }

    #[tokio::test]
    async fn test_publish_then_retract_round_trip() {
        let dir = tempdir().unwrap();
        let store = InMemoryStore::default();
        let archive = archive_on_disk(dir.path(), "archive-sample-1.tar", b"bytes");

        let result = publish_archive(&store, &archive, "load-tests")
            .await
            .expect("publish should succeed");
        assert!(store.contains("load-tests", &result.config_map_name));

        retract_config_map(&store, &result.config_map_name, &result.namespace)
            .await
            .expect("retract should succeed");
        assert!(!store.contains("load-tests", &result.config_map_name));
    }

    #[tokio::test]
    async fn test_retract_missing_resource_fails() {
        let store = InMemoryStore::default();
        let err = retract_config_map(&store, "archive-sample-1", "default")
            .await
            .unwrap_err()
            .to_string();
        assert!(err.contains("Failed to retract"), "got: {}", err);
        assert!(err.contains("not found"), "got: {}", err);
    }

    #[tokio::test]
    async fn test_retract_transport_failure_wraps_reason() {
        let store = InMemoryStore {
            fail_delete: true,
            ..Default::default()
        };
        let err = retract_config_map(&store, "archive-sample-1", "default")
            .await
            .unwrap_err()
            .to_string();
        assert!(err.contains("connection refused"), "got: {}", err);
        assert_eq!(store.delete_calls.load(Ordering::SeqCst), 1);
    }
}
