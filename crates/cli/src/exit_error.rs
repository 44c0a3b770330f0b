// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Error carrying the process exit code.
//!
//! Command handlers return `ExitError` instead of calling
//! `std::process::exit()` so `main()` owns process termination. gsc-run
//! mirrors the child's exit status this way.

use std::fmt;

use gsc_cmdex::RunReport;

/// Exit code when the child could not be started or its status is unknown.
pub const START_FAILURE: i32 = 1;

#[derive(Debug)]
pub struct ExitError {
    pub code: i32,
    /// Printed to stderr by `main()` unless empty.
    pub message: String,
}

impl ExitError {
    pub fn new(code: i32, message: impl Into<String>) -> Self {
        Self { code, message: message.into() }
    }

    /// Exit silently with `code`; the report has already been printed.
    pub fn silent(code: i32) -> Self {
        Self::new(code, String::new())
    }
}

/// Shell-style exit code for a finished run.
pub fn report_exit_code(report: &RunReport) -> i32 {
    report.outcome.map_or(START_FAILURE, |o| o.shell_code())
}

impl fmt::Display for ExitError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.message)
    }
}

impl std::error::Error for ExitError {}
