// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Event-loop seam for the executor.
//!
//! The executor never touches a runtime directly: stream pumps and the exit
//! watcher are handed to [`Reactor::spawn`], stop timeouts go through
//! [`Reactor::schedule`], and the child is created by
//! [`Reactor::spawn_process`] so its pipes register with the right I/O driver.
//! This lets a GUI thread that is not itself inside a runtime own an executor.

use std::future::Future;
use std::io;
use std::pin::Pin;
use std::time::Duration;

use tokio::process::{Child, Command};
use tokio::runtime::{Handle, TryCurrentError};
use tokio_util::sync::CancellationToken;

/// A detached unit of background work.
pub type Task = Pin<Box<dyn Future<Output = ()> + Send + 'static>>;

/// Async I/O reactor the executor runs its background work on.
pub trait Reactor: Send + Sync + 'static {
    /// Run a readiness-driven task in the background.
    fn spawn(&self, task: Task);

    /// A future that completes after `delay`.
    fn sleep(&self, delay: Duration) -> Task;

    /// Spawn a child process whose pipes are driven by this reactor.
    fn spawn_process(&self, command: &mut Command) -> io::Result<Child>;

    /// One-shot timer: run `task` after `delay` unless `cancel` fires first.
    fn schedule(&self, delay: Duration, cancel: CancellationToken, task: Task) {
        let sleep = self.sleep(delay);
        self.spawn(Box::pin(async move {
            tokio::select! {
                biased;
                _ = cancel.cancelled() => {}
                _ = sleep => task.await,
            }
        }));
    }
}

/// [`Reactor`] backed by a tokio runtime handle.
#[derive(Clone, Debug)]
pub struct TokioReactor {
    handle: Handle,
}

impl TokioReactor {
    pub fn new(handle: Handle) -> Self {
        Self { handle }
    }

    /// Use the runtime the caller is currently running on.
    pub fn try_current() -> Result<Self, TryCurrentError> {
        Handle::try_current().map(Self::new)
    }
}

impl Reactor for TokioReactor {
    fn spawn(&self, task: Task) {
        // Detached; the task owns everything it needs.
        drop(self.handle.spawn(task));
    }

    fn sleep(&self, delay: Duration) -> Task {
        // Timers bind to the runtime that is current when they are created.
        let _guard = self.handle.enter();
        Box::pin(tokio::time::sleep(delay))
    }

    fn spawn_process(&self, command: &mut Command) -> io::Result<Child> {
        let _guard = self.handle.enter();
        command.spawn()
    }
}

#[cfg(test)]
#[path = "reactor_tests.rs"]
mod tests;
