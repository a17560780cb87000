// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Aggregation of command results into the final summary.

use fltr_core::CommandResult;

#[cfg(test)]
#[path = "summary_tests.rs"]
mod tests;

/// Width of the summary frame.
const WIDTH: usize = 72;

/// Reduce results to printable summary lines plus the process exit code:
/// 1 when any command alerted, else 0.
pub fn summarize(results: &[CommandResult]) -> (Vec<String>, i32) {
    let mut lines = Vec::with_capacity(results.len() + 2);
    lines.push(format!("{} summary {}", "-".repeat(10), "-".repeat(WIDTH - 10 - 9)));
    for result in results {
        lines.push(format!("    {:<16} {}", result.command, result.status_text()));
    }
    lines.push("-".repeat(WIDTH));
    let exit_code = i32::from(results.iter().any(CommandResult::alerted));
    (lines, exit_code)
}
