// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Errors returned synchronously to the executor's owner.
//!
//! These describe why a call was refused. Conditions that arise in the
//! background are appended to the execution's [`gsc_core::ErrorRecord`] list
//! instead.

use std::io;
use std::time::Duration;

use gsc_shell::LexerError;
use nix::errno::Errno;
use nix::sys::signal::Signal;
use thiserror::Error;

use crate::executor::Phase;

/// Why [`crate::CommandExecutor::execute`] did not start a child.
#[derive(Debug, Error)]
pub enum ExecuteError {
    #[error("a command is already running")]
    AlreadyRunning,

    /// The previous child exited but `stopped_cleanup()` was not called yet.
    #[error("previous command has exited but was not cleaned up")]
    CleanupPending,

    #[error("cannot parse command line: {0}")]
    Parse(#[from] LexerError),

    #[error("failed to spawn `{program}`: {source}")]
    Spawn {
        program: String,
        #[source]
        source: io::Error,
    },
}

/// Why a stop request was refused.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum StopError {
    #[error("no command is running")]
    NotRunning,

    #[error("kill timeout ({kill:?}) must exceed terminate timeout ({terminate:?})")]
    InvalidTimeouts { terminate: Duration, kill: Duration },

    #[error("failed to send {signal} to child: {errno}")]
    Delivery { signal: Signal, errno: Errno },
}

/// Why [`crate::CommandExecutor::stopped_cleanup`] could not complete.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum CleanupError {
    #[error("nothing to clean up: executor is {phase}")]
    NotExited { phase: Phase },

    /// The child was released but its exit status could not be collected.
    #[error("exit status of the child is unavailable")]
    StatusUnavailable,
}

/// Why [`crate::SyncRunner::run`] produced no report.
#[derive(Debug, Error)]
pub enum RunError {
    #[error(transparent)]
    Execute(#[from] ExecuteError),

    #[error(transparent)]
    Stop(#[from] StopError),
}
