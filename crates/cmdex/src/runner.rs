// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Run-to-completion wrapper around [`CommandExecutor`].

use std::time::Duration;

use gsc_core::{Clock, ErrorRecord, ExitOutcome, SystemClock};
use nix::sys::signal::Signal;
use serde::Serialize;
use tokio::time::MissedTickBehavior;

use crate::error::{RunError, StopError};
use crate::executor::{validate_stop_timeouts, CommandExecutor};

/// Default delay between an abort's SIGTERM and the follow-up SIGKILL.
pub const DEFAULT_ABORT_KILL_AFTER: Duration = Duration::from_secs(3);

const DEFAULT_TICK_INTERVAL: Duration = Duration::from_millis(100);

/// Answer from a tick callback.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tick {
    Continue,
    /// Stop the child: SIGTERM now, SIGKILL after the abort delay.
    Abort,
}

type TickFn = Box<dyn FnMut(Duration) -> Tick + Send>;

/// Everything a finished execution produced.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RunReport {
    pub command_line: String,
    pub stdout: String,
    pub stderr: String,
    /// `None` when the exit status could not be collected.
    pub outcome: Option<ExitOutcome>,
    pub elapsed_ms: u64,
    /// The tick callback asked for the child to be stopped.
    pub aborted: bool,
    pub errors: Vec<ErrorRecord>,
}

impl RunReport {
    pub fn success(&self) -> bool {
        self.outcome.is_some_and(|o| o.success())
    }
}

/// Drives one execution at a time to completion.
pub struct SyncRunner<C: Clock = SystemClock> {
    executor: CommandExecutor<C>,
    terminate_timeout: Duration,
    kill_timeout: Duration,
    tick_interval: Duration,
    abort_kill_after: Duration,
    on_tick: Option<TickFn>,
}

impl<C: Clock> SyncRunner<C> {
    pub fn new(executor: CommandExecutor<C>) -> Self {
        Self {
            executor,
            terminate_timeout: Duration::ZERO,
            kill_timeout: Duration::ZERO,
            tick_interval: DEFAULT_TICK_INTERVAL,
            abort_kill_after: DEFAULT_ABORT_KILL_AFTER,
            on_tick: None,
        }
    }

    pub fn executor(&self) -> &CommandExecutor<C> {
        &self.executor
    }

    /// Stop timeouts armed after every successful `execute`. Zero disables.
    pub fn stop_timeouts(mut self, terminate: Duration, kill: Duration) -> Result<Self, StopError> {
        validate_stop_timeouts(terminate, kill)?;
        self.terminate_timeout = terminate;
        self.kill_timeout = kill;
        Ok(self)
    }

    /// Call `on_tick` with the elapsed time every `interval` while the child runs.
    pub fn on_tick(
        mut self,
        interval: Duration,
        on_tick: impl FnMut(Duration) -> Tick + Send + 'static,
    ) -> Self {
        self.tick_interval = interval.max(Duration::from_millis(1));
        self.on_tick = Some(Box::new(on_tick));
        self
    }

    pub fn abort_kill_after(mut self, delay: Duration) -> Self {
        self.abort_kill_after = delay;
        self
    }

    /// Execute `command` and wait until it has exited and been cleaned up.
    pub async fn run(&mut self, command: &str, arguments: &str) -> Result<RunReport, RunError> {
        let exec = &self.executor;
        exec.execute(command, arguments)?;
        exec.set_stop_timeouts(self.terminate_timeout, self.kill_timeout)?;

        let mut aborted = false;
        if let Some(on_tick) = self.on_tick.as_mut() {
            let mut ticks = tokio::time::interval(self.tick_interval);
            ticks.set_missed_tick_behavior(MissedTickBehavior::Delay);
            // The first tick completes immediately.
            ticks.tick().await;
            loop {
                tokio::select! {
                    _ = exec.wait_exited() => break,
                    _ = ticks.tick() => {
                        if aborted || on_tick(exec.elapsed()) == Tick::Continue {
                            continue;
                        }
                        aborted = true;
                        tracing::info!(command_line = %exec.command_line(), "run aborted");
                        // Delivery failures are recorded; NotRunning means it just exited.
                        let _ = exec.try_stop(Signal::SIGTERM);
                        exec.set_stop_timeouts(Duration::ZERO, self.abort_kill_after)?;
                    }
                }
            }
        } else {
            exec.wait_exited().await;
        }

        let outcome = exec.stopped_cleanup().ok();
        Ok(RunReport {
            command_line: exec.command_line(),
            stdout: exec.stdout(),
            stderr: exec.stderr(),
            outcome,
            elapsed_ms: exec.elapsed().as_millis() as u64,
            aborted,
            errors: exec.errors(),
        })
    }
}

#[cfg(test)]
#[path = "runner_tests.rs"]
mod tests;
