// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Exclude pattern matching.

use std::path::{Component, Path};

#[cfg(test)]
#[path = "exclude_tests.rs"]
mod tests;

/// Compiled exclude patterns.
///
/// Patterns use shell-glob semantics (`*`, `?`, `[...]`) and match trailing
/// path components: `build` matches any path whose final component is
/// `build`, `docs/_build` the final two components. A path is excluded when
/// it matches, or when any ancestor directory up to (but not including) the
/// filesystem root matches, so a single directory pattern prunes everything
/// beneath that directory however traversal reaches it.
#[derive(Debug, Clone, Default)]
pub struct ExcludeMatcher {
    rules: Vec<Vec<glob::Pattern>>,
}

impl ExcludeMatcher {
    /// Compile a pattern list. Fails on the first malformed pattern.
    pub fn new<S: AsRef<str>>(
        patterns: impl IntoIterator<Item = S>,
    ) -> Result<ExcludeMatcher, glob::PatternError> {
        let mut rules = Vec::new();
        for pattern in patterns {
            let segments = pattern
                .as_ref()
                .split('/')
                .filter(|segment| !segment.is_empty())
                .map(glob::Pattern::new)
                .collect::<Result<Vec<_>, _>>()?;
            if !segments.is_empty() {
                rules.push(segments);
            }
        }
        Ok(ExcludeMatcher { rules })
    }

    /// True when `path` or any of its ancestor directories matches a rule.
    pub fn is_excluded(&self, path: &Path) -> bool {
        path.ancestors()
            .take_while(|ancestor| ancestor.file_name().is_some())
            .any(|ancestor| self.matches(ancestor))
    }

    /// Match the trailing components of one path against every rule.
    fn matches(&self, path: &Path) -> bool {
        let components: Vec<String> = path
            .components()
            .filter_map(|component| match component {
                Component::Normal(part) => Some(part.to_string_lossy().into_owned()),
                _ => None,
            })
            .collect();
        self.rules.iter().any(|segments| {
            segments.len() <= components.len()
                && segments
                    .iter()
                    .rev()
                    .zip(components.iter().rev())
                    .all(|(pattern, component)| pattern.matches(component))
        })
    }
}
