// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Normalized child process termination status.

use std::fmt;
use std::os::unix::process::ExitStatusExt;
use std::process::ExitStatus;

use nix::sys::signal::Signal;
use serde::{Deserialize, Serialize};

/// Stands in for the code of a wait status that is neither an exit nor a
/// termination signal.
pub const UNKNOWN_EXIT_CODE: i32 = -1;

/// How a reaped child process terminated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ExitOutcome {
    /// Normal exit with the given status code.
    Exited(i32),
    /// Terminated by the given signal number.
    Signaled(i32),
}

impl ExitOutcome {
    /// True only for a normal exit with status 0.
    pub fn success(&self) -> bool {
        matches!(self, ExitOutcome::Exited(0))
    }

    pub fn code(&self) -> Option<i32> {
        match self {
            ExitOutcome::Exited(code) => Some(*code),
            ExitOutcome::Signaled(_) => None,
        }
    }

    pub fn signal(&self) -> Option<i32> {
        match self {
            ExitOutcome::Signaled(sig) => Some(*sig),
            ExitOutcome::Exited(_) => None,
        }
    }

    /// Exit code a POSIX shell would report for this outcome (`128 + N` for signals).
    pub fn shell_code(&self) -> i32 {
        match self {
            ExitOutcome::Exited(code) => *code,
            ExitOutcome::Signaled(sig) => 128 + sig,
        }
    }
}

impl From<ExitStatus> for ExitOutcome {
    fn from(status: ExitStatus) -> Self {
        match (status.code(), status.signal()) {
            (Some(code), _) => ExitOutcome::Exited(code),
            (None, Some(sig)) => ExitOutcome::Signaled(sig),
            // Stopped/continued statuses are never reported by a plain wait.
            (None, None) => ExitOutcome::Exited(UNKNOWN_EXIT_CODE),
        }
    }
}

impl fmt::Display for ExitOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ExitOutcome::Exited(code) => write!(f, "exited with code {code}"),
            ExitOutcome::Signaled(sig) => write!(f, "terminated by signal {}", signal_name(*sig)),
        }
    }
}

/// Symbolic name for a signal number (`SIGTERM`), or the number itself if unknown.
pub fn signal_name(sig: i32) -> String {
    match Signal::try_from(sig) {
        Ok(signal) => signal.as_str().to_string(),
        Err(_) => format!("signal {sig}"),
    }
}

#[cfg(test)]
#[path = "outcome_tests.rs"]
mod tests;
