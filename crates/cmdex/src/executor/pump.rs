// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Background half of an execution: stream pumps and the exit watcher.

use std::io;
use std::sync::Arc;

use gsc_core::{Clock, ErrorRecord, ExecutionError, ExitOutcome, Stream};
use tokio::io::{AsyncRead, AsyncReadExt};
use tokio::process::{Child, ChildStderr, ChildStdout};
use tokio_util::sync::CancellationToken;

use super::{Inner, Phase};

/// Drive both pumps and reap the child, then publish the exit.
///
/// The phase flips to `Exited` only after both pumps have finished, so
/// captured output is complete by the time anyone observes the exit.
pub(super) async fn supervise<C: Clock>(
    inner: Arc<Inner<C>>,
    mut child: Child,
    stdout: Option<ChildStdout>,
    stderr: Option<ChildStderr>,
) {
    let drain = CancellationToken::new();
    let pumps_done = CancellationToken::new();

    let pumps = {
        let inner = Arc::clone(&inner);
        let drain = drain.clone();
        let pumps_done = pumps_done.clone();
        async move {
            tokio::join!(
                pump(&inner, Stream::Stdout, stdout, &drain),
                pump(&inner, Stream::Stderr, stderr, &drain),
            );
            pumps_done.cancel();
        }
    };

    let reap = async {
        let status = child.wait().await;
        {
            let mut state = inner.state.lock();
            state.reaped = true;
            state.cancel_stop_timers();
        }
        // A grandchild may keep the pipes open after the child is gone.
        let grace = inner.reactor.sleep(inner.config.drain_grace);
        tokio::select! {
            _ = pumps_done.cancelled() => {}
            _ = grace => {
                tracing::debug!("pipes still open after exit, draining buffered output");
                drain.cancel();
            }
        }
        status
    };

    let ((), status) = tokio::join!(pumps, reap);

    let callback = {
        let mut state = inner.state.lock();
        match status {
            Ok(status) => state.outcome = Some(ExitOutcome::from(status)),
            Err(e) => state.errors.push(ErrorRecord::error(ExecutionError::Wait {
                message: e.to_string(),
            })),
        }
        state.phase = Phase::Exited;
        state.finished_at = Some(inner.clock.now());
        state.cancel_stop_timers();
        if let Some(outcome) = state.outcome {
            tracing::Span::current().record("exit", tracing::field::display(outcome));
        }
        tracing::info!(
            stdout_bytes = state.stdout.len(),
            stderr_bytes = state.stderr.len(),
            "child exited"
        );
        state.exit_callback.clone()
    };
    inner.phase_tx.send_replace(Phase::Exited);

    if let Some(callback) = callback {
        callback();
    }
}

/// Copy one pipe into the shared buffer until EOF or a read error.
///
/// Once `drain` fires the pump stops waiting for new data and only takes
/// what is immediately readable.
pub(super) async fn pump<C: Clock, R: AsyncRead + Unpin>(
    inner: &Inner<C>,
    stream: Stream,
    reader: Option<R>,
    drain: &CancellationToken,
) {
    let Some(mut reader) = reader else {
        return;
    };
    let mut scratch = vec![0u8; inner.config.read_chunk_size.max(1)];

    loop {
        let read = if drain.is_cancelled() {
            tokio::select! {
                biased;
                read = reader.read(&mut scratch) => read,
                _ = std::future::ready(()) => break,
            }
        } else {
            tokio::select! {
                biased;
                read = reader.read(&mut scratch) => read,
                _ = drain.cancelled() => continue,
            }
        };

        match read {
            Ok(0) => break,
            Ok(n) => inner.state.lock().buffer_mut(stream).extend_from_slice(&scratch[..n]),
            Err(e) if e.kind() == io::ErrorKind::Interrupted => continue,
            Err(e) => {
                tracing::warn!(%stream, error = %e, "read failed");
                inner.record(ErrorRecord::error(ExecutionError::Channel {
                    stream,
                    message: e.to_string(),
                }));
                break;
            }
        }
    }
}
