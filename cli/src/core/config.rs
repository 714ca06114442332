//! # LoadRS Configuration System
//!
//! File: cli/src/core/config.rs
//! Author: Christi Mahu
//! Repository: https://github.com/christimahu/loadrs
//!
//! ## Overview
//!
//! This module implements the configuration system for LoadRS, handling loading,
//! merging, validation, and access to configuration data. It supports a multi-level
//! configuration approach that combines defaults, user settings, and project-specific
//! overrides.
//!
//! ## Architecture
//!
//! The configuration system follows these principles:
//! - Configuration is loaded from multiple sources in order of precedence
//! - Paths are validated and expanded (e.g., `~` to home directory)
//! - Configuration is validated for correctness before use
//! - Structured data models ensure type safety
//!
//! Configuration sources (in order of precedence):
//! 1. Project-specific `.loadrs.toml` in current directory or ancestors
//! 2. User-specific `~/.config/loadrs/config.toml`
//! 3. Default values defined in the code
//!
//! ## Examples
//!
//! Loading and using configuration:
//!
//! ```rust
//! let cfg = config::load_config()?;
//!
//! // Access cluster settings
//! let namespace = &cfg.cluster.namespace;
//!
//! // Access the configured k6 binary
//! let binary = &cfg.k6.binary;
//! ```
//!
//! The configuration is loaded once per command execution and passed
//! to the modules that need it.
//!
use crate::core::error::{LoadrsError, Result}; // Use error from the same core module
use anyhow::{anyhow, Context};
use directories::ProjectDirs;
use serde::Deserialize;
use std::{
    fs,
    path::{Path, PathBuf},
};
use tracing::{debug, info, warn};

/// Represents the main configuration structure, loaded from TOML files.
#[derive(Deserialize, Debug, Default, Clone)]
#[serde(deny_unknown_fields)] // Error if unknown fields are in TOML
pub struct Config {
    #[serde(default)]
    pub cluster: ClusterConfig,
    #[serde(default)]
    pub k6: K6Config,
    #[serde(default)]
    pub archive: ArchiveConfig,
    #[serde(default)]
    pub load_test: LoadTestDefaults,
    // Add other top-level configuration sections here
}

/// Configuration for the target Kubernetes cluster (`loadrs publish` / `loadrs retract`).
#[derive(Deserialize, Debug, Clone)]
#[serde(deny_unknown_fields)]
pub struct ClusterConfig {
    /// Namespace that ConfigMaps are published into when `--namespace` is not given.
    #[serde(default = "default_namespace")]
    pub namespace: String,
}

impl Default for ClusterConfig {
    fn default() -> Self {
        Self {
            namespace: default_namespace(),
        }
    }
}

/// Configuration for the external k6 packaging tool.
#[derive(Deserialize, Debug, Clone)]
#[serde(deny_unknown_fields)]
pub struct K6Config {
    /// Name or path of the k6 binary to invoke (resolved via PATH when bare).
    #[serde(default = "default_k6_binary")]
    pub binary: String,
}

impl Default for K6Config {
    fn default() -> Self {
        Self {
            binary: default_k6_binary(),
        }
    }
}

/// Configuration related to archive creation (`loadrs archive ...`).
#[derive(Deserialize, Debug, Default, Clone)]
#[serde(deny_unknown_fields)]
pub struct ArchiveConfig {
    /// Directory where archives are written when `--output-dir` is not given (can use ~).
    /// Will be expanded. The current working directory is used when unset.
    pub output_dir: Option<String>,
}

/// Default settings recorded for the in-cluster execution controller.
/// LoadRS threads these through without interpreting them.
#[derive(Deserialize, Debug, Clone)]
#[serde(deny_unknown_fields)]
pub struct LoadTestDefaults {
    /// Number of parallel runner pods the execution controller should start.
    #[serde(default = "default_parallelism")]
    pub parallelism: u32,
}

impl Default for LoadTestDefaults {
    fn default() -> Self {
        Self {
            parallelism: default_parallelism(),
        }
    }
}

fn default_namespace() -> String {
    "default".to_string()
}
fn default_k6_binary() -> String {
    "k6".to_string()
}
fn default_parallelism() -> u32 {
    1
}

const PROJECT_CONFIG_FILENAME: &str = ".loadrs.toml";

pub fn load_config() -> Result<Config> {
    let user_config = load_user_config()?;
    let project_config = load_project_config()?;
    let mut merged_config = merge_configs(user_config.unwrap_or_default(), project_config);
    expand_config_paths(&mut merged_config).context("Failed to expand paths in configuration")?;
    validate_config(&merged_config).context("Configuration validation failed")?;
    debug!("Final loaded configuration: {:?}", merged_config);
    Ok(merged_config)
}

fn load_user_config() -> Result<Option<Config>> {
    if let Some(proj_dirs) = ProjectDirs::from("com", "LoadRS", "loadrs") {
        let config_dir = proj_dirs.config_dir();
        let config_path = config_dir.join("config.toml");
        if config_path.exists() {
            info!("Loading user configuration from: {}", config_path.display());
            load_config_from_path(&config_path).map(Some)
        } else {
            debug!(
                "User configuration file not found at {}",
                config_path.display()
            );
            Ok(None)
        }
    } else {
        warn!("Could not determine user config directory.");
        Ok(None)
    }
}

fn load_project_config() -> Result<Option<Config>> {
    if let Some(project_config_path) = find_project_config_path()? {
        info!(
            "Loading project configuration from: {}",
            project_config_path.display()
        );
        load_config_from_path(&project_config_path).map(Some)
    } else {
        debug!(
            "No project configuration file (.loadrs.toml) found in current directory or ancestors."
        );
        Ok(None)
    }
}

fn find_project_config_path() -> Result<Option<PathBuf>> {
    let current_dir = std::env::current_dir().context("Failed to get current directory")?;
    let mut path: &Path = &current_dir;
    loop {
        let project_config = path.join(PROJECT_CONFIG_FILENAME);
        let git_dir = path.join(".git");
        if project_config.exists() && project_config.is_file() {
            return Ok(Some(project_config));
        }
        if git_dir.exists() && git_dir.is_dir() {
            debug!(
                "Found .git directory at {}, stopping project config search.",
                path.display()
            );
            return Ok(None);
        }
        match path.parent() {
            Some(parent) => path = parent,
            None => break,
        }
    }
    Ok(None)
}

fn load_config_from_path(path: &Path) -> Result<Config> {
    let content = fs::read_to_string(path)
        .with_context(|| format!("Failed to read configuration file: {}", path.display()))?;
    toml::from_str(&content)
        .with_context(|| format!("Failed to parse TOML from file: {}", path.display()))
}

fn merge_configs(user: Config, project: Option<Config>) -> Config {
    let project_cfg = match project {
        Some(p) => p,
        None => return user,
    };
    let mut merged = Config::default();
    merged.cluster.namespace = if project_cfg.cluster.namespace != default_namespace() {
        project_cfg.cluster.namespace
    } else {
        user.cluster.namespace
    };
    merged.k6.binary = if project_cfg.k6.binary != default_k6_binary() {
        project_cfg.k6.binary
    } else {
        user.k6.binary
    };
    merged.archive.output_dir = project_cfg.archive.output_dir.or(user.archive.output_dir);
    merged.load_test.parallelism = if project_cfg.load_test.parallelism != default_parallelism() {
        project_cfg.load_test.parallelism
    } else {
        user.load_test.parallelism
    };
    merged
}

fn expand_config_paths(config: &mut Config) -> Result<()> {
    debug!("Expanding paths in configuration...");
    if let Some(dir) = &config.archive.output_dir {
        let expanded = shellexpand::tilde(dir).into_owned();
        debug!("Expanded archive output directory: {}", expanded);
        config.archive.output_dir = Some(expanded);
    }
    Ok(())
}

fn validate_config(config: &Config) -> Result<()> {
    info!("Validating final configuration...");
    if config.cluster.namespace.is_empty() {
        return Err(anyhow!(LoadrsError::Config(
            "Cluster namespace cannot be empty.".to_string()
        )));
    }
    // Namespaces are DNS-1123 labels: lowercase alphanumeric and '-', with
    // alphanumeric first and last characters.
    let ns = &config.cluster.namespace;
    let valid_chars = ns
        .chars()
        .all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c == '-');
    let valid_ends = !ns.starts_with('-') && !ns.ends_with('-');
    if !valid_chars || !valid_ends {
        return Err(anyhow!(LoadrsError::Config(format!(
            "Invalid namespace '{}'. Expected a lowercase DNS label (a-z, 0-9, '-').",
            ns
        ))));
    }
    if config.k6.binary.is_empty() {
        return Err(anyhow!(LoadrsError::Config(
            "k6 binary name cannot be empty.".to_string()
        )));
    }
    if config.load_test.parallelism == 0 {
        return Err(anyhow!(LoadrsError::Config(
            "load_test.parallelism must be at least 1.".to_string()
        )));
    }
    if let Some(dir) = &config.archive.output_dir {
        let dir_path = PathBuf::from(dir);
        if !dir_path.exists() {
            warn!(
                "Configured archive output directory '{}' does not exist.",
                dir_path.display()
            );
        } else if !dir_path.is_dir() {
            return Err(anyhow!(LoadrsError::Config(format!(
                "Configured archive output path '{}' exists but is not a directory.",
                dir_path.display()
            ))));
        }
    }
    info!("Configuration validation successful.");
    Ok(())
}
