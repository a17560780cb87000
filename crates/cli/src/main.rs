// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

// Allow panic!/unwrap/expect in test code
#![cfg_attr(test, allow(clippy::panic))]
#![cfg_attr(test, allow(clippy::unwrap_used))]
#![cfg_attr(test, allow(clippy::expect_used))]

//! fltr: run formatters, linters, and testers over Python sources.

mod color;
mod exit_error;

use clap::Parser;
use exit_error::ExitError;
use fltr_core::{command_names, resolve_commands, sample_config, Config};
use fltr_engine::{run_all, spawn_reporter, summarize, ExcludeMatcher};
use std::path::PathBuf;

/// Quality gate for Python projects: formatters first, then linters and
/// testers in parallel, one exit code out.
#[derive(Debug, Parser)]
#[command(name = "fltr", version, styles = color::styles())]
struct Cli {
    /// Show verbose output
    #[arg(long)]
    verbose: bool,

    /// Comma separated list of commands to run (default: all)
    #[arg(long, value_delimiter = ',', value_name = "NAMES")]
    commands: Option<Vec<String>>,

    /// Print a sample [tool.fltr] block for pyproject.toml and exit
    #[arg(long)]
    generate_config: bool,

    /// Target files and/or directories (default: current directory)
    targets: Vec<PathBuf>,
}

#[tokio::main]
async fn main() {
    let cli = Cli::parse();
    init_tracing(cli.verbose);
    match run(cli).await {
        Ok(code) => std::process::exit(code),
        Err(err) => {
            eprintln!("fltr: {err}");
            std::process::exit(err.code);
        }
    }
}

fn init_tracing(verbose: bool) {
    let default = if verbose { "debug" } else { "warn" };
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(default));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .without_time()
        .init();
}

async fn run(cli: Cli) -> Result<i32, ExitError> {
    if cli.generate_config {
        print!("{}", sample_config());
        return Ok(0);
    }

    let known = command_names();
    let selected: Vec<String> = match cli.commands {
        Some(commands) => commands,
        None => known.iter().map(|name| name.to_string()).collect(),
    };
    for name in &selected {
        if !known.contains(&name.as_str()) {
            return Err(ExitError::new(1, format!("command not found: {name}")));
        }
    }

    tracing::debug!("commands: {selected:?}, targets: {:?}", cli.targets);

    let cwd = std::env::current_dir()
        .map_err(|err| ExitError::new(1, format!("cannot resolve working directory: {err}")))?;
    let config = Config::load(&cwd)?;
    let matcher = ExcludeMatcher::new(config.exclude_patterns())
        .map_err(|err| ExitError::new(1, format!("invalid exclude pattern: {err}")))?;
    let specs = resolve_commands(&selected, &config);

    let (reporter, printer) = spawn_reporter(cli.verbose);
    let results = run_all(&specs, &matcher, &cli.targets, &reporter).await;
    // Close the channel and let the printer drain before anything else is
    // written to stdout.
    drop(reporter);
    let _ = printer.await;
    let results = results?;

    let (lines, exit_code) = summarize(&results);
    for line in &lines {
        println!("{line}");
    }
    tracing::debug!("exit code: {exit_code}");
    Ok(exit_code)
}
