// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Serialized report output for concurrently running commands.
//!
//! Workers send one [`Report`] per executed command; a single consumer task
//! prints each block whole, so parallel commands never interleave lines.

use tokio::sync::mpsc;
use tokio::task::JoinHandle;

#[cfg(test)]
#[path = "report_tests.rs"]
mod tests;

/// Width of the frame lines around each block.
const NCOLS: usize = 128;

/// One command's report block.
#[derive(Debug)]
pub struct Report {
    pub command: String,
    pub returncode: i32,
    /// Raw merged tool output.
    pub output: String,
    /// The argv that was executed; quoted on display.
    pub commandline: Vec<String>,
}

/// Cloneable sending half handed to every worker.
#[derive(Debug, Clone)]
pub struct Reporter {
    tx: mpsc::UnboundedSender<Report>,
}

impl Reporter {
    /// Create a reporter and the receiving end of its channel.
    pub fn channel() -> (Reporter, mpsc::UnboundedReceiver<Report>) {
        let (tx, rx) = mpsc::unbounded_channel();
        (Reporter { tx }, rx)
    }

    /// Queue a report block. Dropped silently when the consumer is gone.
    pub fn send(&self, report: Report) {
        let _ = self.tx.send(report);
    }
}

/// Start the printing consumer task.
///
/// Drop every [`Reporter`] clone, then await the handle to flush remaining
/// blocks before printing anything that must come after them.
pub fn spawn_reporter(verbose: bool) -> (Reporter, JoinHandle<()>) {
    let (reporter, mut rx) = Reporter::channel();
    let handle = tokio::spawn(async move {
        while let Some(report) = rx.recv().await {
            print!("{}", format_report(&report, verbose));
        }
    });
    (reporter, handle)
}

/// Render one block. Pure, so tests can assert on the text.
pub fn format_report(report: &Report, verbose: bool) -> String {
    let mark = if report.returncode == 0 { "*" } else { "@" };
    let tail = NCOLS.saturating_sub(34 + report.command.len());
    let mut block =
        format!("{} {} {}\n", mark.repeat(32), report.command, mark.repeat(tail));
    if verbose {
        let quoted: Vec<String> =
            report.commandline.iter().map(|word| quote(word)).collect();
        block.push_str(&format!("{mark} commandline: {}\n", quoted.join(" ")));
    }
    block.push_str(&format!("{mark}\n"));
    block.push_str(&report.output);
    block.push('\n');
    block.push_str(&format!("{mark}\n"));
    block.push_str(&format!("{mark} returncode: {}\n", report.returncode));
    block.push_str(&mark.repeat(NCOLS));
    block.push('\n');
    block
}

/// Quote one argv word for display, POSIX-shell style.
///
/// Words made only of safe characters pass through; everything else is
/// single-quoted with embedded single quotes rewritten.
pub fn quote(word: &str) -> String {
    if !word.is_empty() && word.chars().all(is_safe) {
        word.to_string()
    } else {
        format!("'{}'", word.replace('\'', r#"'"'"'"#))
    }
}

fn is_safe(c: char) -> bool {
    c.is_ascii_alphanumeric()
        || matches!(c, '@' | '%' | '+' | '=' | ':' | ',' | '.' | '/' | '-' | '_')
}
