// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

// Allow panic!/unwrap/expect in test code
#![cfg_attr(test, allow(clippy::panic))]
#![cfg_attr(test, allow(clippy::unwrap_used))]
#![cfg_attr(test, allow(clippy::expect_used))]

//! fltr-engine: exclusion-aware file discovery, phased command execution,
//! and result aggregation.

pub mod collect;
pub mod exclude;
pub mod process;
pub mod report;
pub mod schedule;
pub mod summary;

pub use collect::collect_files;
pub use exclude::ExcludeMatcher;
pub use process::{run_command, ProcessError, RunOutcome};
pub use report::{format_report, spawn_reporter, Report, Reporter};
pub use schedule::{run_all, EngineError};
pub use summary::summarize;
