// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! External tool invocation.

use fltr_core::{CommandResult, CommandSpec};
use std::path::PathBuf;
use std::time::Instant;
use thiserror::Error;
use tokio::process::Command;

#[cfg(test)]
#[path = "process_tests.rs"]
mod tests;

/// Flag appended for the non-mutating dry run of check-capable formatters.
const CHECK_FLAG: &str = "--check";

/// Failure to launch an external tool. Aborts the run (see DESIGN.md).
#[derive(Debug, Error)]
pub enum ProcessError {
    #[error("failed to launch {command}: {source}")]
    Spawn { command: String, source: std::io::Error },
}

/// Everything one command execution produced: the immutable result plus the
/// raw output and command line for reporting.
#[derive(Debug)]
pub struct RunOutcome {
    pub result: CommandResult,
    /// Merged stdout/stderr text, lossily decoded.
    pub output: String,
    /// The argv of the base invocation, for verbose reporting.
    pub commandline: Vec<String>,
}

/// Run one command over the collected files.
///
/// With no files the tool is never spawned and the result is skipped.
/// Check-capable formatters run first with `--check` appended; that exit
/// code is authoritative. A non-zero check triggers a second, mutating run
/// whose output replaces the check run's output in the report.
pub async fn run_command(
    spec: &CommandSpec,
    files: &[PathBuf],
) -> Result<RunOutcome, ProcessError> {
    if files.is_empty() {
        return Ok(RunOutcome {
            result: CommandResult::skipped(&spec.name, spec.kind),
            output: String::new(),
            commandline: Vec::new(),
        });
    }

    let mut args = spec.args.clone();
    args.extend(files.iter().map(|file| file.display().to_string()));

    let start = Instant::now();
    let first = if spec.check_mode {
        let mut check_args = args.clone();
        check_args.push(CHECK_FLAG.to_string());
        invoke(spec, &check_args).await?
    } else {
        invoke(spec, &args).await?
    };

    let returncode = first.code;
    let output = if spec.check_mode && returncode != 0 {
        // The check run said files would change: run again without the flag
        // so the tool rewrites them. The check exit code stays authoritative.
        invoke(spec, &args).await?.output
    } else {
        first.output
    };

    let mut commandline = vec![spec.path.clone()];
    commandline.extend(args);

    Ok(RunOutcome {
        result: CommandResult {
            command: spec.name.clone(),
            kind: spec.kind,
            returncode: Some(returncode),
            files: files.len(),
            elapsed: start.elapsed(),
        },
        output: output.trim().to_string(),
        commandline,
    })
}

struct Invocation {
    code: i32,
    output: String,
}

/// Spawn one invocation and capture its merged output.
async fn invoke(spec: &CommandSpec, args: &[String]) -> Result<Invocation, ProcessError> {
    let output = Command::new(&spec.path)
        .args(args)
        // Python tools decode stdio with this encoding regardless of locale.
        .env("PYTHONIOENCODING", "utf-8")
        .output()
        .await
        .map_err(|source| ProcessError::Spawn { command: spec.name.clone(), source })?;

    // Exit by signal surfaces as a non-zero placeholder code.
    let code = output.status.code().unwrap_or(-1);
    let mut text = String::from_utf8_lossy(&output.stdout).into_owned();
    text.push_str(&String::from_utf8_lossy(&output.stderr));
    Ok(Invocation { code, output: text })
}
