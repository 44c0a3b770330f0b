// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Signal delivery and escalating stop timeouts.

use std::sync::{Arc, Weak};
use std::time::Duration;

use gsc_core::{Clock, ErrorRecord, ExecutionError};
use nix::errno::Errno;
use nix::sys::signal::{self, Signal};
use tokio_util::sync::CancellationToken;

use super::{CommandExecutor, Inner};
use crate::error::StopError;

/// Check a terminate/kill timeout pair. Zero disables a timeout; when both
/// are set the kill timeout must come strictly later.
pub fn validate_stop_timeouts(terminate: Duration, kill: Duration) -> Result<(), StopError> {
    if !terminate.is_zero() && !kill.is_zero() && kill <= terminate {
        return Err(StopError::InvalidTimeouts { terminate, kill });
    }
    Ok(())
}

impl<C: Clock> CommandExecutor<C> {
    /// Send `signal` to the running child.
    pub fn try_stop(&self, signal: Signal) -> Result<(), StopError> {
        self.inner.try_stop(signal)
    }

    /// Arm the escalation timers for the running child: `SIGTERM` after
    /// `terminate`, `SIGKILL` after `kill`, both measured from now. Zero
    /// leaves that step out. Replaces previously armed timers and does
    /// nothing when no child is running.
    pub fn set_stop_timeouts(&self, terminate: Duration, kill: Duration) -> Result<(), StopError> {
        validate_stop_timeouts(terminate, kill)?;

        let mut state = self.inner.state.lock();
        if !state.signalable() {
            return Ok(());
        }
        state.cancel_stop_timers();
        if terminate.is_zero() && kill.is_zero() {
            return Ok(());
        }

        let timers = CancellationToken::new();
        state.stop_timers = Some(timers.clone());
        drop(state);

        tracing::debug!(?terminate, ?kill, "stop timeouts armed");
        for (delay, sig) in [(terminate, Signal::SIGTERM), (kill, Signal::SIGKILL)] {
            if delay.is_zero() {
                continue;
            }
            let weak = Arc::downgrade(&self.inner);
            self.inner
                .reactor
                .schedule(delay, timers.clone(), Box::pin(async move { fire(weak, sig) }));
        }
        Ok(())
    }

    /// Cancel pending stop timers, if any.
    pub fn unset_stop_timeouts(&self) {
        self.inner.state.lock().cancel_stop_timers();
    }
}

fn fire<C: Clock>(inner: Weak<Inner<C>>, sig: Signal) {
    let Some(inner) = inner.upgrade() else {
        return;
    };
    if !inner.state.lock().signalable() {
        return;
    }
    tracing::warn!(signal = %sig, "stop timeout expired, signalling child");
    // Failures are already recorded.
    let _ = inner.try_stop(sig);
}

impl<C: Clock> Inner<C> {
    pub(super) fn try_stop(&self, sig: Signal) -> Result<(), StopError> {
        let mut state = self.state.lock();
        let pid = match state.pid {
            Some(pid) if state.signalable() => pid,
            _ => return Err(StopError::NotRunning),
        };

        match signal::kill(pid, sig) {
            Ok(()) => {
                tracing::debug!(%pid, signal = %sig, "signal sent");
                state.last_signal = Some(sig);
                Ok(())
            }
            Err(errno) => {
                tracing::warn!(%pid, signal = %sig, %errno, "signal delivery failed");
                state.errors.push(delivery_record(sig, errno));
                Err(StopError::Delivery { signal: sig, errno })
            }
        }
    }
}

/// `ESRCH` means the child is already gone, which is only a warning.
pub(super) fn delivery_record(sig: Signal, errno: Errno) -> ErrorRecord {
    let error = ExecutionError::SignalDelivery { signal: sig as i32, errno: errno as i32 };
    if errno == Errno::ESRCH {
        ErrorRecord::warning(error)
    } else {
        ErrorRecord::error(error)
    }
}
