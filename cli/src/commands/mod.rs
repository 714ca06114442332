//! # LoadRS Command Modules
//!
//! File: cli/src/commands/mod.rs
//! Author: Christi Mahu
//! Repository: https://github.com/christimahu/loadrs
//!
//! ## Overview
//!
//! This module aggregates all top-level commands that comprise the LoadRS CLI.
//! It serves as the central point for importing and re-exporting command
//! modules to make them accessible to the main application entry point
//! (`main.rs`).
//!
//! ## Architecture
//!
//! Each command lives in its own module directory with its argument struct
//! and handler function; all modules are made public for access from
//! `main.rs`.
//!
//! ## Commands
//!
//! - `archive`: Package a load-test script into a portable archive
//! - `publish`: Archive a script and publish it as a namespaced ConfigMap
//! - `retract`: Delete a published ConfigMap (and optionally the local archive)
//!
//! Each command defines its own arguments structure and handler function
//! to process those arguments and implement the command's functionality.
//!

/// Command for packaging a load-test script into a portable archive.
pub mod archive;
/// Command for publishing an archived script as a namespaced ConfigMap.
pub mod publish;
/// Command for deleting a published ConfigMap and cleaning up its archive.
pub mod retract;
