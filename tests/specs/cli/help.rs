// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! CLI surface specs.

use crate::prelude::*;

#[test]
fn help_shows_usage_and_flags() {
    cli()
        .args(&["--help"])
        .passes()
        .stdout_has("Usage:")
        .stdout_has("--verbose")
        .stdout_has("--commands")
        .stdout_has("--generate-config");
}

#[test]
fn version_shows_version() {
    cli().args(&["--version"]).passes().stdout_has("0.1");
}

#[test]
fn unknown_command_is_a_startup_error() {
    cli()
        .args(&["--commands", "ruff"])
        .exits(1)
        .stderr_has("command not found: ruff");
}

#[test]
fn one_bad_name_in_a_list_fails_the_whole_selection() {
    cli()
        .args(&["--commands", "black,ruff,mypy"])
        .exits(1)
        .stderr_has("command not found: ruff");
}

#[test]
fn generate_config_prints_a_sample_block_and_exits_zero() {
    cli()
        .args(&["--generate-config"])
        .passes()
        .stdout_has("[tool.fltr]")
        .stdout_has("black = true")
        .stdout_has("black-path = \"black\"")
        .stdout_has("black-args = []")
        .stdout_has("exclude = [")
        .stdout_has("extend-exclude = []");
}

/// The generated sample must itself survive config validation.
#[test]
fn generated_sample_is_a_loadable_manifest() {
    let sample = cli().args(&["--generate-config"]).passes().stdout();

    let temp = Project::empty();
    temp.file("pyproject.toml", &sample);
    // No matching files anywhere, so every command skips and the run exits 0
    // only if the manifest parsed cleanly.
    temp.fltr().args(&["--commands", "pflake8"]).passes().stdout_has("skipped");
}
