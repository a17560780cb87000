// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Manifest loading and validation specs.

use crate::prelude::*;

#[test]
fn unknown_key_fails_before_any_command_runs() {
    let temp = Project::empty();
    temp.file("src/a.py", "x = 1\n");
    temp.file("pyproject.toml", "[tool.fltr]\nruff = true\n");

    temp.fltr()
        .args(&["--commands", "pflake8"])
        .exits(1)
        .stderr_has("invalid config key: ruff");
}

#[test]
fn type_mismatched_value_fails() {
    let temp = Project::empty();
    temp.file("pyproject.toml", "[tool.fltr]\nblack = \"yes\"\n");

    temp.fltr()
        .args(&["--commands", "black"])
        .exits(1)
        .stderr_has("invalid config value for black");
}

#[test]
fn malformed_manifest_fails() {
    let temp = Project::empty();
    temp.file("pyproject.toml", "not toml ==\n");

    temp.fltr().args(&["--commands", "pflake8"]).exits(1).stderr_has("failed to parse");
}

#[test]
fn missing_manifest_uses_defaults() {
    let temp = Project::empty();
    // Default config, no matching files: everything skips, exit 0.
    temp.fltr().args(&["--commands", "mypy"]).passes().stdout_has("skipped");
}

#[test]
fn underscore_key_spellings_are_accepted() {
    let temp = Project::empty();
    let tool = temp.fake_tool("bin/fake-lint", r#"echo "saw: $@""#);
    temp.file("src/a.py", "x = 1\n");
    temp.file("gen/b.py", "y = 2\n");
    temp.file(
        "pyproject.toml",
        &format!(
            "[tool.fltr]\npflake8_path = \"{}\"\nextend_exclude = [\"gen\"]\n",
            tool.display()
        ),
    );

    temp.fltr()
        .args(&["--commands", "pflake8"])
        .passes()
        .stdout_has("a.py")
        .stdout_lacks("b.py");
}

#[test]
fn disabled_command_is_omitted_entirely() {
    let temp = Project::empty();
    temp.file("src/a.py", "x = 1\n");
    temp.file("pyproject.toml", "[tool.fltr]\npflake8 = false\n");

    // Not even a skipped line: the command is dropped from the run.
    temp.fltr().args(&["--commands", "pflake8"]).passes().stdout_lacks("pflake8");
}
