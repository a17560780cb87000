// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Check/fix protocol specs for idempotent formatters.

use crate::prelude::*;
use std::path::Path;

/// Fake check-capable formatter that appends one line to `counter` per
/// invocation and exits `check_code` when called with `--check`.
fn checking_formatter(temp: &Project, counter: &Path, check_code: i32) -> String {
    let body = format!(
        "echo run >> {counter}\n\
         case \"$*\" in *--check) echo check-run-output; exit {check_code};; esac\n\
         echo fix-run-output\nexit 0",
        counter = counter.display()
    );
    temp.fake_tool("bin/fake-black", &body).display().to_string()
}

fn invocations(counter: &Path) -> usize {
    std::fs::read_to_string(counter).unwrap_or_default().lines().count()
}

#[test]
fn clean_check_runs_once_and_succeeds() {
    let temp = Project::empty();
    let counter = temp.path().join("count");
    let tool = checking_formatter(&temp, &counter, 0);
    temp.file("src/a.py", "x = 1\n");
    temp.file("pyproject.toml", &format!("[tool.fltr]\nblack-path = \"{tool}\"\n"));

    temp.fltr()
        .args(&["--commands", "black"])
        .passes()
        .stdout_has("check-run-output")
        .stdout_lacks("fix-run-output")
        .stdout_has("returncode: 0")
        .stdout_has("succeeded (1 files in");
    assert_eq!(invocations(&counter), 1);
}

#[test]
fn dirty_check_reruns_and_reports_formatted() {
    let temp = Project::empty();
    let counter = temp.path().join("count");
    let tool = checking_formatter(&temp, &counter, 1);
    temp.file("src/a.py", "x=1\n");
    temp.file("pyproject.toml", &format!("[tool.fltr]\nblack-path = \"{tool}\"\n"));

    // The mutating run's output is shown; the check run's exit code decides
    // the status, so the run alerts with `formatted`.
    temp.fltr()
        .args(&["--commands", "black"])
        .exits(1)
        .stdout_has("fix-run-output")
        .stdout_lacks("check-run-output")
        .stdout_has("returncode: 1")
        .stdout_has("formatted (1 files in");
    assert_eq!(invocations(&counter), 2);
}

#[test]
fn non_check_formatter_runs_once_even_when_it_alerts() {
    let temp = Project::empty();
    let counter = temp.path().join("count");
    let body = format!("echo run >> {}\necho upgraded\nexit 1", counter.display());
    let tool = temp.fake_tool("bin/fake-pyupgrade", &body);
    temp.file("src/a.py", "x = 1\n");
    temp.file(
        "pyproject.toml",
        &format!("[tool.fltr]\npyupgrade-path = \"{}\"\n", tool.display()),
    );

    temp.fltr()
        .args(&["--commands", "pyupgrade"])
        .exits(1)
        .stdout_has("upgraded")
        .stdout_has("formatted (1 files in");
    assert_eq!(invocations(&counter), 1);
}

#[test]
fn formatters_run_in_configured_sequence() {
    let temp = Project::empty();
    let log = temp.path().join("order.log");
    let isort = temp.fake_tool(
        "bin/fake-isort",
        &format!("echo isort >> {}\nexit 0", log.display()),
    );
    let black = temp.fake_tool(
        "bin/fake-black",
        &format!("echo black >> {}\nexit 0", log.display()),
    );
    temp.file("src/a.py", "x = 1\n");
    temp.file(
        "pyproject.toml",
        &format!(
            "[tool.fltr]\nisort-path = \"{}\"\nblack-path = \"{}\"\n",
            isort.display(),
            black.display()
        ),
    );

    temp.fltr().args(&["--commands", "isort,black"]).passes();
    let order = std::fs::read_to_string(&log).expect("order log");
    assert_eq!(order.lines().collect::<Vec<_>>(), vec!["isort", "black"]);
}
