// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Severity-tagged error records accumulated during a command execution.
//!
//! Execution callbacks run on reactor tasks where returning an error to the
//! owner is impossible, so failures are appended to a per-execution list and
//! the owner decides later what to surface.

use std::fmt;

use nix::errno::Errno;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::outcome::signal_name;

/// How serious a recorded condition is.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Severity {
    Info,
    /// Expected condition (nonzero exit code, exit through a signal we sent).
    Warning,
    /// Anything unexpected.
    Error,
}

crate::simple_display! {
    Severity {
        Info => "info",
        Warning => "warning",
        Error => "error",
    }
}

/// Captured output stream of a child process.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Stream {
    Stdout,
    Stderr,
}

crate::simple_display! {
    Stream {
        Stdout => "stdout",
        Stderr => "stderr",
    }
}

/// Conditions recorded while starting, stopping, or reaping a child process.
#[derive(Debug, Clone, PartialEq, Eq, Error, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ExecutionError {
    /// The command line could not be split into arguments.
    #[error("cannot parse command line: {message}")]
    Shell { message: String },

    /// The child process could not be created.
    #[error("failed to spawn `{program}`: {message}")]
    Spawn { program: String, message: String },

    /// `kill(2)` failed.
    #[error("failed to send {} to child: {}", signal_name(*signal), Errno::from_raw(*errno))]
    SignalDelivery { signal: i32, errno: i32 },

    /// Reading a pipe failed.
    #[error("{stream} channel error: {message}")]
    Channel { stream: Stream, message: String },

    /// Waiting for the child's exit status failed.
    #[error("cannot collect child exit status: {message}")]
    Wait { message: String },

    /// Normal exit with a nonzero status.
    #[error("{message}")]
    ExitCode { code: i32, message: String },

    /// Termination by a signal.
    #[error("{}", signaled_message(*signal, *expected))]
    Signaled { signal: i32, expected: bool },
}

fn signaled_message(signal: i32, expected: bool) -> String {
    if expected {
        format!("child stopped by {}", signal_name(signal))
    } else {
        format!("child terminated by unexpected signal {}", signal_name(signal))
    }
}

impl ExecutionError {
    /// Short tag naming where the record came from.
    pub fn source_tag(&self) -> &'static str {
        match self {
            ExecutionError::Shell { .. } => "shell",
            ExecutionError::Spawn { .. } => "spawn",
            ExecutionError::SignalDelivery { .. } => "errno",
            ExecutionError::Channel { .. } => "channel",
            ExecutionError::Wait { .. } => "wait",
            ExecutionError::ExitCode { .. } => "exit",
            ExecutionError::Signaled { .. } => "signal",
        }
    }
}

/// One entry in an execution's error list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorRecord {
    pub severity: Severity,
    pub error: ExecutionError,
}

impl ErrorRecord {
    pub fn new(severity: Severity, error: ExecutionError) -> Self {
        Self { severity, error }
    }

    pub fn warning(error: ExecutionError) -> Self {
        Self::new(Severity::Warning, error)
    }

    pub fn error(error: ExecutionError) -> Self {
        Self::new(Severity::Error, error)
    }

    pub fn source_tag(&self) -> &'static str {
        self.error.source_tag()
    }
}

impl fmt::Display for ErrorRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.severity, self.error)
    }
}

#[cfg(test)]
#[path = "record_tests.rs"]
mod tests;
