// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Configuration loading from `pyproject.toml`.
//!
//! Recognized keys live under `[tool.fltr]` and mirror the engine's
//! configuration: one enable flag, executable path, and argument list per
//! builtin command, plus the exclude pattern lists. Hyphen and underscore
//! spellings are equivalent. Unknown keys and type-mismatched values are
//! fatal before any command runs.

use crate::command::BUILTIN_COMMANDS;
use std::fmt::Write as _;
use std::path::{Path, PathBuf};
use thiserror::Error;

#[cfg(test)]
#[path = "config_tests.rs"]
mod tests;

/// Manifest file consulted in the working directory.
pub const MANIFEST_FILE: &str = "pyproject.toml";

/// Section of the manifest owned by fltr.
const TOOL_SECTION: &str = "fltr";

/// Path components excluded from traversal by default.
///
/// Loosely follows the defaults of flake8, black and friends.
pub const DEFAULT_EXCLUDE: &[&str] = &[
    "*.egg",
    ".bzr",
    ".direnv",
    ".eggs",
    ".git",
    ".hg",
    ".mypy_cache",
    ".nox",
    ".pytest_cache",
    ".svn",
    ".tox",
    ".venv",
    "CVS",
    "__pycache__",
    "_build",
    "buck-out",
    "build",
    "dist",
    "venv",
];

/// Errors raised while loading or validating the manifest.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read {}: {source}", path.display())]
    Read { path: PathBuf, source: std::io::Error },
    #[error("failed to parse {}: {source}", path.display())]
    Parse { path: PathBuf, source: toml::de::Error },
    #[error("invalid config key: {0}")]
    UnknownKey(String),
    #[error("invalid config value for {key}: expected {expected}, found {found}")]
    Type { key: String, expected: &'static str, found: &'static str },
}

/// Per-command configuration record.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandConfig {
    pub enabled: bool,
    pub path: String,
    pub args: Vec<String>,
}

impl CommandConfig {
    fn new(name: &str) -> CommandConfig {
        CommandConfig { enabled: true, path: name.to_string(), args: Vec::new() }
    }
}

/// Immutable tool configuration, built once at startup and passed into the
/// engine explicitly.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub pyupgrade: CommandConfig,
    pub isort: CommandConfig,
    pub black: CommandConfig,
    pub pflake8: CommandConfig,
    pub mypy: CommandConfig,
    pub pylint: CommandConfig,
    pub pytest: CommandConfig,
    /// Base exclude patterns. Overridden wholesale by the `exclude` key.
    pub exclude: Vec<String>,
    /// Patterns unioned with the base list via `extend-exclude`.
    pub extend_exclude: Vec<String>,
}

impl Default for Config {
    fn default() -> Config {
        Config {
            pyupgrade: CommandConfig::new("pyupgrade"),
            isort: CommandConfig::new("isort"),
            black: CommandConfig::new("black"),
            pflake8: CommandConfig::new("pflake8"),
            mypy: CommandConfig::new("mypy"),
            pylint: CommandConfig::new("pylint"),
            pytest: CommandConfig::new("pytest"),
            exclude: DEFAULT_EXCLUDE.iter().map(|s| s.to_string()).collect(),
            extend_exclude: Vec::new(),
        }
    }
}

impl Config {
    /// Per-command record for a builtin command name.
    pub fn command(&self, name: &str) -> Option<&CommandConfig> {
        match name {
            "pyupgrade" => Some(&self.pyupgrade),
            "isort" => Some(&self.isort),
            "black" => Some(&self.black),
            "pflake8" => Some(&self.pflake8),
            "mypy" => Some(&self.mypy),
            "pylint" => Some(&self.pylint),
            "pytest" => Some(&self.pytest),
            _ => None,
        }
    }

    fn command_mut(&mut self, name: &str) -> Option<&mut CommandConfig> {
        match name {
            "pyupgrade" => Some(&mut self.pyupgrade),
            "isort" => Some(&mut self.isort),
            "black" => Some(&mut self.black),
            "pflake8" => Some(&mut self.pflake8),
            "mypy" => Some(&mut self.mypy),
            "pylint" => Some(&mut self.pylint),
            "pytest" => Some(&mut self.pytest),
            _ => None,
        }
    }

    /// Combined exclude patterns: the base list unioned with `extend-exclude`.
    pub fn exclude_patterns(&self) -> Vec<String> {
        self.exclude.iter().chain(self.extend_exclude.iter()).cloned().collect()
    }

    /// Load configuration from `dir/pyproject.toml`.
    ///
    /// A missing manifest, or one without a `[tool.fltr]` section, yields
    /// the defaults.
    pub fn load(dir: &Path) -> Result<Config, ConfigError> {
        let path = dir.join(MANIFEST_FILE);
        let text = match std::fs::read_to_string(&path) {
            Ok(text) => text,
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => {
                return Ok(Config::default());
            }
            Err(source) => return Err(ConfigError::Read { path, source }),
        };
        tracing::debug!("config: {}", path.display());
        let manifest: toml::Table =
            text.parse().map_err(|source| ConfigError::Parse { path, source })?;
        Config::from_manifest(&manifest)
    }

    /// Apply a parsed manifest's `[tool.fltr]` section on top of defaults.
    pub fn from_manifest(manifest: &toml::Table) -> Result<Config, ConfigError> {
        let mut config = Config::default();
        let section = manifest
            .get("tool")
            .and_then(|tool| tool.get(TOOL_SECTION))
            .and_then(|value| value.as_table());
        let Some(section) = section else {
            return Ok(config);
        };
        for (key, value) in section {
            config.apply(key, value)?;
        }
        Ok(config)
    }

    /// Apply one `[tool.fltr]` key.
    fn apply(&mut self, key: &str, value: &toml::Value) -> Result<(), ConfigError> {
        let key = key.replace('_', "-");
        tracing::debug!("config: {key} = {value}");
        if key == "exclude" {
            self.exclude = string_array(&key, value)?;
            return Ok(());
        }
        if key == "extend-exclude" {
            self.extend_exclude = string_array(&key, value)?;
            return Ok(());
        }
        if let Some(command) = self.command_mut(&key) {
            command.enabled =
                value.as_bool().ok_or_else(|| type_mismatch(&key, "boolean", value))?;
            return Ok(());
        }
        if let Some(name) = key.strip_suffix("-path") {
            if let Some(command) = self.command_mut(name) {
                command.path = value
                    .as_str()
                    .map(str::to_string)
                    .ok_or_else(|| type_mismatch(&key, "string", value))?;
                return Ok(());
            }
        }
        if let Some(name) = key.strip_suffix("-args") {
            if let Some(command) = self.command_mut(name) {
                command.args = string_array(&key, value)?;
                return Ok(());
            }
        }
        Err(ConfigError::UnknownKey(key))
    }
}

fn string_array(key: &str, value: &toml::Value) -> Result<Vec<String>, ConfigError> {
    let items =
        value.as_array().ok_or_else(|| type_mismatch(key, "array of strings", value))?;
    items
        .iter()
        .map(|item| {
            item.as_str()
                .map(str::to_string)
                .ok_or_else(|| type_mismatch(key, "array of strings", item))
        })
        .collect()
}

fn type_mismatch(key: &str, expected: &'static str, value: &toml::Value) -> ConfigError {
    ConfigError::Type { key: key.to_string(), expected, found: value.type_str() }
}

/// Render a sample `[tool.fltr]` block from the defaults, for
/// `--generate-config`.
pub fn sample_config() -> String {
    let mut out = String::from("[tool.fltr]\n");
    for (name, _) in BUILTIN_COMMANDS {
        let defaults = CommandConfig::new(name);
        let _ = writeln!(out, "{name} = true");
        let _ = writeln!(out, "{name}-path = \"{}\"", defaults.path);
        let _ = writeln!(out, "{name}-args = []");
    }
    let quoted: Vec<String> = DEFAULT_EXCLUDE.iter().map(|p| format!("\"{p}\"")).collect();
    let _ = writeln!(out, "exclude = [{}]", quoted.join(", "));
    let _ = writeln!(out, "extend-exclude = []");
    out
}
