// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! The command executor.
//!
//! One [`CommandExecutor`] runs at most one child at a time. `execute()`
//! spawns it and returns immediately; a background task on the
//! [`Reactor`] pumps both output pipes and reaps the child. Once it has
//! exited the executor sits in [`Phase::Exited`] until the owner calls
//! [`CommandExecutor::stopped_cleanup`], which interprets the exit status
//! into error records and makes the executor reusable.

mod pump;
mod state;
mod stop;

use std::process::Stdio;
use std::sync::Arc;
use std::time::{Duration, Instant};

use gsc_core::{Clock, ErrorRecord, ExecutionError, ExitOutcome, SystemClock};
use nix::sys::signal::Signal;
use nix::unistd::Pid;
use parking_lot::Mutex;
use tokio::process::Command;
use tokio::sync::watch;
use tracing::Instrument;

use crate::config::ExecutorConfig;
use crate::error::{CleanupError, ExecuteError};
use crate::reactor::Reactor;

use state::State;
pub use state::Phase;
pub use stop::validate_stop_timeouts;

/// Asynchronous executor for one external command at a time.
///
/// Cloning yields another handle to the same executor.
pub struct CommandExecutor<C: Clock = SystemClock> {
    inner: Arc<Inner<C>>,
}

impl<C: Clock> Clone for CommandExecutor<C> {
    fn clone(&self) -> Self {
        Self { inner: Arc::clone(&self.inner) }
    }
}

pub(crate) struct Inner<C: Clock> {
    state: Mutex<State>,
    phase_tx: watch::Sender<Phase>,
    reactor: Arc<dyn Reactor>,
    clock: C,
    config: ExecutorConfig,
}

impl CommandExecutor<SystemClock> {
    pub fn new(reactor: Arc<dyn Reactor>) -> Self {
        Self::with_config(reactor, ExecutorConfig::default())
    }

    pub fn with_config(reactor: Arc<dyn Reactor>, config: ExecutorConfig) -> Self {
        Self::with_clock(reactor, config, SystemClock)
    }
}

impl<C: Clock> CommandExecutor<C> {
    pub fn with_clock(reactor: Arc<dyn Reactor>, config: ExecutorConfig, clock: C) -> Self {
        let (phase_tx, _) = watch::channel(Phase::Idle);
        Self {
            inner: Arc::new(Inner {
                state: Mutex::new(State::new()),
                phase_tx,
                reactor,
                clock,
                config,
            }),
        }
    }

    /// Start `command` with `arguments` (a shell-quoted argument string).
    ///
    /// Returns once the child is spawned. A refusal because a child is
    /// running or awaiting cleanup leaves the current execution untouched;
    /// any other failure is also appended to the error list.
    pub fn execute(&self, command: &str, arguments: &str) -> Result<(), ExecuteError> {
        let mut state = self.inner.state.lock();
        match state.phase {
            Phase::Running => return Err(ExecuteError::AlreadyRunning),
            Phase::Exited => return Err(ExecuteError::CleanupPending),
            Phase::Idle => {}
        }
        state.reset();
        state.command_line = if arguments.is_empty() {
            command.to_string()
        } else {
            format!("{command} {arguments}")
        };

        let argv = match gsc_shell::split(&state.command_line) {
            Ok(argv) => argv,
            Err(e) => {
                tracing::debug!(command_line = %state.command_line, error = %e, "command line rejected");
                state.errors.push(ErrorRecord::error(ExecutionError::Shell {
                    message: e.to_string(),
                }));
                return Err(ExecuteError::Parse(e));
            }
        };
        let Some((program, args)) = argv.split_first() else {
            // split() reports an empty command line as an error.
            let span = gsc_shell::Span::new(0, state.command_line.len());
            return Err(ExecuteError::Parse(gsc_shell::LexerError::Empty { span }));
        };

        let mut process = Command::new(program);
        process
            .args(args)
            .stdin(Stdio::null())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped());
        if self.inner.config.force_c_locale {
            process.env("LANG", "C");
        }

        let mut child = match self.inner.reactor.spawn_process(&mut process) {
            Ok(child) => child,
            Err(source) => {
                tracing::debug!(%program, error = %source, "spawn failed");
                state.errors.push(ErrorRecord::error(ExecutionError::Spawn {
                    program: program.clone(),
                    message: source.to_string(),
                }));
                return Err(ExecuteError::Spawn { program: program.clone(), source });
            }
        };

        let pid = child.id().and_then(|id| i32::try_from(id).ok()).map(Pid::from_raw);
        let stdout = child.stdout.take();
        let stderr = child.stderr.take();
        state.pid = pid;
        state.started_at = Some(self.inner.clock.now());
        state.phase = Phase::Running;
        drop(state);
        self.inner.phase_tx.send_replace(Phase::Running);

        let span = tracing::info_span!(
            "cmdex",
            %program,
            pid = pid.map(|p| p.as_raw()),
            exit = tracing::field::Empty,
        );
        span.in_scope(|| tracing::info!(args = ?args, "spawned"));

        let inner = Arc::clone(&self.inner);
        self.inner
            .reactor
            .spawn(Box::pin(pump::supervise(inner, child, stdout, stderr).instrument(span)));
        Ok(())
    }

    /// Interpret the finished child's exit status and return to `Idle`.
    ///
    /// Output, error records and the outcome stay readable until the next
    /// `execute()`.
    pub fn stopped_cleanup(&self) -> Result<ExitOutcome, CleanupError> {
        let (outcome, last_signal, translator) = {
            let state = self.inner.state.lock();
            if state.phase != Phase::Exited {
                return Err(CleanupError::NotExited { phase: state.phase });
            }
            (state.outcome, state.last_signal, state.translator.clone())
        };

        // The translator is user code and runs without the lock held.
        let record = match outcome {
            None | Some(ExitOutcome::Exited(0)) => None,
            Some(ExitOutcome::Exited(code)) => {
                let message = match translator.and_then(|t| t(code)) {
                    Some(text) => format!("exited with code {code}: {text}"),
                    None => format!("exited with code {code}"),
                };
                Some(ErrorRecord::warning(ExecutionError::ExitCode { code, message }))
            }
            Some(ExitOutcome::Signaled(signal)) => {
                let expected = last_signal.map(|s| s as i32) == Some(signal);
                let error = ExecutionError::Signaled { signal, expected };
                if expected {
                    Some(ErrorRecord::warning(error))
                } else {
                    tracing::warn!(signal = %gsc_core::signal_name(signal), "child killed by foreign signal");
                    Some(ErrorRecord::error(error))
                }
            }
        };

        {
            let mut state = self.inner.state.lock();
            if state.phase != Phase::Exited {
                // Another handle cleaned up first.
                return Err(CleanupError::NotExited { phase: state.phase });
            }
            state.errors.extend(record);
            state.pid = None;
            state.phase = Phase::Idle;
        }
        self.inner.phase_tx.send_replace(Phase::Idle);
        tracing::debug!(?outcome, "cleaned up");

        outcome.ok_or(CleanupError::StatusUnavailable)
    }

    /// Resolves once the current child (if any) has exited and its output is
    /// complete. Returns immediately when nothing is running.
    pub async fn wait_exited(&self) {
        let mut rx = self.inner.phase_tx.subscribe();
        // The sender lives as long as `self`, so this cannot fail.
        let _ = rx.wait_for(|phase| *phase != Phase::Running).await;
    }

    /// Called on the reactor after every child exit, once output is complete.
    pub fn set_exit_callback(&self, callback: impl Fn() + Send + Sync + 'static) {
        self.inner.state.lock().exit_callback = Some(Arc::new(callback));
    }

    /// Caller-supplied meaning of nonzero exit codes, used by
    /// [`Self::stopped_cleanup`].
    pub fn set_exit_status_translator(
        &self,
        translator: impl Fn(i32) -> Option<String> + Send + Sync + 'static,
    ) {
        self.inner.state.lock().translator = Some(Arc::new(translator));
    }

    pub fn phase(&self) -> Phase {
        self.inner.state.lock().phase
    }

    pub fn is_running(&self) -> bool {
        self.phase() == Phase::Running
    }

    /// The child has exited but `stopped_cleanup()` has not been called.
    pub fn is_cleanup_pending(&self) -> bool {
        self.phase() == Phase::Exited
    }

    pub fn pid(&self) -> Option<Pid> {
        self.inner.state.lock().pid
    }

    /// Full command line of the current or last execution.
    pub fn command_line(&self) -> String {
        self.inner.state.lock().command_line.clone()
    }

    /// Captured stdout, decoded lossily as UTF-8.
    pub fn stdout(&self) -> String {
        String::from_utf8_lossy(&self.inner.state.lock().stdout).into_owned()
    }

    pub fn stdout_bytes(&self) -> Vec<u8> {
        self.inner.state.lock().stdout.clone()
    }

    /// Captured stderr, decoded lossily as UTF-8.
    pub fn stderr(&self) -> String {
        String::from_utf8_lossy(&self.inner.state.lock().stderr).into_owned()
    }

    pub fn stderr_bytes(&self) -> Vec<u8> {
        self.inner.state.lock().stderr.clone()
    }

    /// Time since the child started; frozen once it exits.
    pub fn elapsed(&self) -> Duration {
        let state = self.inner.state.lock();
        let Some(started) = state.started_at else {
            return Duration::ZERO;
        };
        let end: Instant = state.finished_at.unwrap_or_else(|| self.inner.clock.now());
        end.saturating_duration_since(started)
    }

    pub fn elapsed_seconds(&self) -> f64 {
        self.elapsed().as_secs_f64()
    }

    pub fn errors(&self) -> Vec<ErrorRecord> {
        self.inner.state.lock().errors.clone()
    }

    pub fn take_errors(&self) -> Vec<ErrorRecord> {
        std::mem::take(&mut self.inner.state.lock().errors)
    }

    pub fn clear_errors(&self) {
        self.inner.state.lock().errors.clear();
    }

    /// Last signal successfully delivered through [`Self::try_stop`].
    pub fn last_signal(&self) -> Option<Signal> {
        self.inner.state.lock().last_signal
    }

    /// Exit status of the last reaped child.
    pub fn exit_outcome(&self) -> Option<ExitOutcome> {
        self.inner.state.lock().outcome
    }
}

impl<C: Clock> Inner<C> {
    fn record(&self, record: ErrorRecord) {
        self.state.lock().errors.push(record);
    }
}

#[cfg(test)]
#[path = "../executor_tests/mod.rs"]
mod tests;
