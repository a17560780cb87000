// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Builtin command table and resolved command specs.

use crate::config::Config;

#[cfg(test)]
#[path = "command_tests.rs"]
mod tests;

/// Category of an external tool, which decides its scheduling phase.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CommandKind {
    /// May rewrite source files in place; runs serially.
    Formatter,
    /// Analyzes and reports without touching files; runs concurrently.
    Linter,
    /// Runs the test suite; scheduled with the linters.
    Tester,
}

impl std::fmt::Display for CommandKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(match self {
            CommandKind::Formatter => "formatter",
            CommandKind::Linter => "linter",
            CommandKind::Tester => "tester",
        })
    }
}

/// The builtin commands in execution order.
///
/// The order here is the default `--commands` order and the order used by
/// the sample config.
pub const BUILTIN_COMMANDS: &[(&str, CommandKind)] = &[
    ("pyupgrade", CommandKind::Formatter),
    ("isort", CommandKind::Formatter),
    ("black", CommandKind::Formatter),
    ("pflake8", CommandKind::Linter),
    ("mypy", CommandKind::Linter),
    ("pylint", CommandKind::Linter),
    ("pytest", CommandKind::Tester),
];

/// Names of all builtin commands, in table order.
pub fn command_names() -> Vec<&'static str> {
    BUILTIN_COMMANDS.iter().map(|(name, _)| *name).collect()
}

/// Look up the kind of a builtin command.
pub fn command_kind(name: &str) -> Option<CommandKind> {
    BUILTIN_COMMANDS.iter().find(|(n, _)| *n == name).map(|(_, kind)| *kind)
}

/// One external tool, fully resolved from the builtin table and the loaded
/// configuration. Immutable once built.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandSpec {
    pub name: String,
    pub kind: CommandKind,
    /// Executable to invoke: a bare name resolved via PATH, or an explicit path.
    pub path: String,
    /// Extra arguments inserted between the executable and the file list.
    pub args: Vec<String>,
    /// Include globs matched against file names during collection.
    pub globs: Vec<String>,
    /// True for idempotent formatters that support a `--check` dry run.
    pub check_mode: bool,
}

/// Resolve the selected command names into executable specs.
///
/// Selection order is preserved. Commands disabled in the configuration are
/// dropped entirely rather than carried as skipped. Names are expected to
/// come from the builtin table; anything else is silently ignored (the CLI
/// validates names before calling).
pub fn resolve_commands(selected: &[String], config: &Config) -> Vec<CommandSpec> {
    selected
        .iter()
        .filter_map(|name| {
            let kind = command_kind(name)?;
            let command = config.command(name)?;
            command.enabled.then(|| CommandSpec {
                name: name.clone(),
                kind,
                path: command.path.clone(),
                args: command.args.clone(),
                globs: include_globs(name),
                check_mode: supports_check_mode(name),
            })
        })
        .collect()
}

/// Include globs for a command. pytest only sees test modules.
fn include_globs(name: &str) -> Vec<String> {
    if name == "pytest" {
        vec!["*_test.py".to_string()]
    } else {
        vec!["*.py".to_string()]
    }
}

/// Formatters whose `--check` invocation reports pending changes without
/// writing them.
fn supports_check_mode(name: &str) -> bool {
    matches!(name, "isort" | "black")
}
