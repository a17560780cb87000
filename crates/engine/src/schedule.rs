// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Phased command scheduling.
//!
//! Formatters run strictly serially in input order, since an earlier
//! formatter's rewrite can change what a later one sees. Everything else
//! runs concurrently, one task per command, and the results are joined back
//! in input order so concurrency never reorders the reported sequence.

use crate::collect::collect_files;
use crate::exclude::ExcludeMatcher;
use crate::process::{run_command, ProcessError};
use crate::report::{Report, Reporter};
use fltr_core::{CommandKind, CommandResult, CommandSpec};
use std::path::PathBuf;
use thiserror::Error;

#[cfg(test)]
#[path = "schedule_tests.rs"]
mod tests;

/// Errors that abort a run.
#[derive(Debug, Error)]
pub enum EngineError {
    #[error(transparent)]
    Process(#[from] ProcessError),
    #[error("worker panicked: {0}")]
    Worker(#[from] tokio::task::JoinError),
}

/// Run every spec over `targets`.
///
/// Returns results in phase order: formatter results in input order, then
/// linter/tester results in input order. On a launch failure the remaining
/// concurrent workers are still awaited before the error surfaces, so
/// already-queued report blocks stay intact.
pub async fn run_all(
    specs: &[CommandSpec],
    matcher: &ExcludeMatcher,
    targets: &[PathBuf],
    reporter: &Reporter,
) -> Result<Vec<CommandResult>, EngineError> {
    let mut results = Vec::with_capacity(specs.len());

    for spec in specs.iter().filter(|spec| spec.kind == CommandKind::Formatter) {
        results.push(
            run_one(spec.clone(), matcher.clone(), targets.to_vec(), reporter.clone())
                .await?,
        );
    }

    let workers: Vec<_> = specs
        .iter()
        .filter(|spec| spec.kind != CommandKind::Formatter)
        .map(|spec| {
            tokio::spawn(run_one(
                spec.clone(),
                matcher.clone(),
                targets.to_vec(),
                reporter.clone(),
            ))
        })
        .collect();
    let mut joined = Vec::with_capacity(workers.len());
    for worker in workers {
        joined.push(worker.await?);
    }
    for outcome in joined {
        results.push(outcome?);
    }

    Ok(results)
}

/// Collect, execute, and report one command.
async fn run_one(
    spec: CommandSpec,
    matcher: ExcludeMatcher,
    targets: Vec<PathBuf>,
    reporter: Reporter,
) -> Result<CommandResult, ProcessError> {
    let files = collect_files(&targets, &spec.globs, &matcher);
    tracing::debug!("{}: {} files", spec.name, files.len());
    let outcome = run_command(&spec, &files).await?;
    if let Some(returncode) = outcome.result.returncode {
        reporter.send(Report {
            command: spec.name.clone(),
            returncode,
            output: outcome.output,
            commandline: outcome.commandline,
        });
    }
    Ok(outcome.result)
}
