// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

// Allow panic!/unwrap/expect in test code
#![cfg_attr(test, allow(clippy::panic))]
#![cfg_attr(test, allow(clippy::unwrap_used))]
#![cfg_attr(test, allow(clippy::expect_used))]

//! gsc-cmdex: asynchronous execution of one external command at a time.
//!
//! [`CommandExecutor`] spawns a child (typically `smartctl`), captures its
//! stdout and stderr while it runs, can stop it with an escalating
//! SIGTERM/SIGKILL timeout pair, and reports failures as severity-tagged
//! [`ErrorRecord`]s rather than errors thrown from background tasks.
//! [`SyncRunner`] wraps it for callers that just want the finished result.

pub mod config;
pub mod error;
pub mod executor;
pub mod reactor;
pub mod runner;
pub mod smartctl;

pub use config::ExecutorConfig;
pub use error::{CleanupError, ExecuteError, RunError, StopError};
pub use executor::{validate_stop_timeouts, CommandExecutor, Phase};
pub use reactor::{Reactor, Task, TokioReactor};
pub use runner::{RunReport, SyncRunner, Tick};
pub use smartctl::SmartctlRunner;

pub use gsc_core::{Clock, ErrorRecord, ExecutionError, ExitOutcome, Severity, Stream, SystemClock};
pub use nix::sys::signal::Signal;
