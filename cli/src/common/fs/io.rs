//! # LoadRS Filesystem I/O Operations
//!
//! File: cli/src/common/fs/io.rs
//! Author: Christi Mahu
//! Repository: https://github.com/christimahu/loadrs
//!
//! ## Overview
//!
//! This module centralizes the fundamental filesystem operations required by
//! LoadRS: measuring a file's size (the publisher's payload-ceiling check)
//! and deleting a file (the teardown flow's local-archive cleanup). Both are
//! wrappers around standard library `std::fs` functions that add consistent
//! error context via `anyhow::Context` and map missing-path cases onto the
//! application's `LoadrsError::FileSystem` kind.
//!
use crate::core::error::{LoadrsError, Result}; // Use standard Result and custom Error types
use anyhow::Context; // For adding context to errors
use std::fs; // Standard filesystem module
use std::path::Path; // Filesystem path type
use tracing::info; // Logging utilities

/// Returns the size of the file at `path` in bytes.
///
/// # Arguments
///
/// * `path` - A `&Path` reference to the file to measure.
///
/// # Returns
///
/// * `Result<u64>` - The file size in bytes.
///
/// # Errors
///
/// Returns an `Err` if the path does not exist, is not a regular file, or its
/// metadata cannot be read, with context naming the offending path.
pub fn file_size(path: &Path) -> Result<u64> {
    let metadata = fs::metadata(path)
        .with_context(|| format!("Failed to read metadata for {:?}", path))?;
    if !metadata.is_file() {
        anyhow::bail!(LoadrsError::FileSystem(format!(
            "Path exists but is not a regular file: {:?}",
            path
        )));
    }
    Ok(metadata.len())
}

/// Removes the file at `path`.
///
/// # Arguments
///
/// * `path` - A `&Path` reference to the file to delete.
///
/// # Returns
///
/// * `Result<()>` - Returns `Ok(())` if the file was deleted.
///
/// # Errors
///
/// Returns an `Err` if the file does not exist or cannot be removed (e.g.
/// permissions), with context naming the offending path.
pub fn remove_file(path: &Path) -> Result<()> {
    fs::remove_file(path).with_context(|| format!("Failed to remove file {:?}", path))?;
    info!("Removed file: {:?}", path);
    Ok(())
}

// --- Unit Tests ---
// Tests for the filesystem I/O utilities.
#[cfg(test)]
mod tests {
    use super::*; // Import items from the parent module (io.rs).
    use tempfile::tempdir; // Create temporary directories for isolated testing.

    /// Test `file_size` on a regular file.
    #[test]
    fn test_file_size_regular_file() -> Result<()> {
        let base_dir = tempdir()?;
        let file_path = base_dir.path().join("archive.tar");
        fs::write(&file_path, vec![0u8; 1234])?;
        assert_eq!(file_size(&file_path)?, 1234);
        Ok(())
    }

    /// Test `file_size` when the target does not exist.
    #[test]
    fn test_file_size_missing_path() {
        let base_dir = tempdir().unwrap();
        let result = file_size(&base_dir.path().join("nonexistent.tar"));
        assert!(result.is_err());
    }

    /// Test `file_size` when the target is a directory.
    #[test]
    fn test_file_size_path_is_directory() -> Result<()> {
        let base_dir = tempdir()?;
        let result = file_size(base_dir.path());
        assert!(result.is_err());
        assert!(result
            .unwrap_err()
            .to_string()
            .contains("not a regular file"));
        Ok(())
    }

    /// Test `remove_file` deletes an existing file.
    #[test]
    fn test_remove_file_existing() -> Result<()> {
        let base_dir = tempdir()?;
        let file_path = base_dir.path().join("archive.tar");
        fs::write(&file_path, "bytes")?;
        remove_file(&file_path)?;
        assert!(!file_path.exists());
        Ok(())
    }

    /// Test `remove_file` when the target does not exist.
    #[test]
    fn test_remove_file_missing() {
        let base_dir = tempdir().unwrap();
        let result = remove_file(&base_dir.path().join("nonexistent.tar"));
        assert!(result.is_err());
    }
}
