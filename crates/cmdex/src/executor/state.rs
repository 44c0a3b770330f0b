// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Mutable per-execution state, guarded by the executor's single mutex.

use std::sync::Arc;
use std::time::Instant;

use gsc_core::{ErrorRecord, ExitOutcome, Stream};
use nix::sys::signal::Signal;
use nix::unistd::Pid;
use tokio_util::sync::CancellationToken;

/// Caller-supplied interpretation of a nonzero exit code.
pub(crate) type ExitTranslator = Arc<dyn Fn(i32) -> Option<String> + Send + Sync>;

/// Invoked on the reactor after each child exit.
pub(crate) type ExitCallback = Arc<dyn Fn() + Send + Sync>;

/// Where the executor is in its run/cleanup cycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    /// Ready for `execute()`.
    Idle,
    /// A child is running.
    Running,
    /// The child exited and its output is complete; `stopped_cleanup()` is due.
    Exited,
}

gsc_core::simple_display! {
    Phase {
        Idle => "idle",
        Running => "running",
        Exited => "exited",
    }
}

pub(crate) struct State {
    pub(crate) phase: Phase,
    pub(crate) command_line: String,
    pub(crate) pid: Option<Pid>,
    /// `wait()` has returned; the pid may already belong to someone else.
    pub(crate) reaped: bool,
    pub(crate) stdout: Vec<u8>,
    pub(crate) stderr: Vec<u8>,
    pub(crate) started_at: Option<Instant>,
    pub(crate) finished_at: Option<Instant>,
    /// Most recent signal delivered through `try_stop`.
    pub(crate) last_signal: Option<Signal>,
    pub(crate) outcome: Option<ExitOutcome>,
    pub(crate) errors: Vec<ErrorRecord>,
    /// Cancels the pending terminate/kill timers.
    pub(crate) stop_timers: Option<CancellationToken>,
    pub(crate) translator: Option<ExitTranslator>,
    pub(crate) exit_callback: Option<ExitCallback>,
}

impl State {
    pub(crate) fn new() -> Self {
        Self {
            phase: Phase::Idle,
            command_line: String::new(),
            pid: None,
            reaped: false,
            stdout: Vec::new(),
            stderr: Vec::new(),
            started_at: None,
            finished_at: None,
            last_signal: None,
            outcome: None,
            errors: Vec::new(),
            stop_timers: None,
            translator: None,
            exit_callback: None,
        }
    }

    /// Forget everything about the previous execution. Translator and exit
    /// callback belong to the owner and survive.
    pub(crate) fn reset(&mut self) {
        self.command_line.clear();
        self.pid = None;
        self.reaped = false;
        self.stdout.clear();
        self.stderr.clear();
        self.started_at = None;
        self.finished_at = None;
        self.last_signal = None;
        self.outcome = None;
        self.errors.clear();
        self.cancel_stop_timers();
    }

    pub(crate) fn buffer_mut(&mut self, stream: Stream) -> &mut Vec<u8> {
        match stream {
            Stream::Stdout => &mut self.stdout,
            Stream::Stderr => &mut self.stderr,
        }
    }

    /// Whether a signal may still be sent to the child's pid.
    pub(crate) fn signalable(&self) -> bool {
        self.phase == Phase::Running && !self.reaped
    }

    pub(crate) fn cancel_stop_timers(&mut self) {
        if let Some(timers) = self.stop_timers.take() {
            timers.cancel();
        }
    }
}
