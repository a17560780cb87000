// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Target expansion into per-command file lists.

use crate::exclude::ExcludeMatcher;
use std::collections::HashSet;
use std::path::{Path, PathBuf};

#[cfg(test)]
#[path = "collect_tests.rs"]
mod tests;

/// Recursively collect files under `targets` that match one of `globs`.
///
/// Empty `targets` means the current working directory. Excluded paths are
/// pruned before descending, so excluded subtrees are never read from
/// storage. I/O errors are logged as warnings and the offending path
/// skipped; the rest of the traversal continues. Output preserves target
/// order and, within each target, recursive-descent order.
pub fn collect_files(
    targets: &[PathBuf],
    globs: &[String],
    matcher: &ExcludeMatcher,
) -> Vec<PathBuf> {
    let include: Vec<glob::Pattern> = globs
        .iter()
        .filter_map(|pattern| match glob::Pattern::new(pattern) {
            Ok(compiled) => Some(compiled),
            Err(err) => {
                tracing::warn!("bad include glob {pattern}: {err}");
                None
            }
        })
        .collect();

    let cwd = [PathBuf::from(".")];
    let targets = if targets.is_empty() { &cwd[..] } else { targets };

    let mut collected = Vec::new();
    // Canonical identities of directories already entered; breaks symlink
    // cycles and drops duplicates from overlapping targets.
    let mut visited = HashSet::new();
    for target in targets {
        match std::path::absolute(target) {
            Ok(target) => walk(&target, &include, matcher, &mut visited, &mut collected),
            Err(err) => tracing::warn!("I/O error: {}: {err}", target.display()),
        }
    }
    collected
}

fn walk(
    path: &Path,
    include: &[glob::Pattern],
    matcher: &ExcludeMatcher,
    visited: &mut HashSet<PathBuf>,
    out: &mut Vec<PathBuf>,
) {
    if matcher.is_excluded(path) {
        return;
    }
    if path.is_dir() {
        let canonical = match path.canonicalize() {
            Ok(canonical) => canonical,
            Err(err) => {
                tracing::warn!("I/O error: {}: {err}", path.display());
                return;
            }
        };
        if !visited.insert(canonical) {
            tracing::debug!("already visited {}, skipping", path.display());
            return;
        }
        let entries = match std::fs::read_dir(path) {
            Ok(entries) => entries,
            Err(err) => {
                tracing::warn!("I/O error: {}: {err}", path.display());
                return;
            }
        };
        for entry in entries {
            match entry {
                Ok(entry) => walk(&entry.path(), include, matcher, visited, out),
                Err(err) => tracing::warn!("I/O error: {}: {err}", path.display()),
            }
        }
    } else if matches_include(path, include) {
        out.push(path.to_path_buf());
    }
}

/// Final-component match against the include globs.
fn matches_include(path: &Path, include: &[glob::Pattern]) -> bool {
    let Some(name) = path.file_name() else {
        return false;
    };
    let name = name.to_string_lossy();
    include.iter().any(|pattern| pattern.matches(&name))
}
