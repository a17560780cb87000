// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Custom error type that carries a process exit code.
//!
//! `run()` returns `ExitError` instead of calling `std::process::exit()`
//! mid-flight, allowing `main()` to handle process termination.

use fltr_core::ConfigError;
use fltr_engine::EngineError;
use std::fmt;

#[derive(Debug)]
pub struct ExitError {
    pub code: i32,
    pub message: String,
}

impl ExitError {
    pub fn new(code: i32, message: impl Into<String>) -> Self {
        Self { code, message: message.into() }
    }
}

impl fmt::Display for ExitError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.message)
    }
}

impl std::error::Error for ExitError {}

/// Manifest problems are fatal before any command runs.
impl From<ConfigError> for ExitError {
    fn from(err: ConfigError) -> Self {
        ExitError::new(1, err.to_string())
    }
}

/// An aborted run (launch failure, worker panic) exits like an alert.
impl From<EngineError> for ExitError {
    fn from(err: EngineError) -> Self {
        ExitError::new(1, err.to_string())
    }
}
