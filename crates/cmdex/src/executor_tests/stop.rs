// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

use super::*;
use crate::error::StopError;
use std::time::Instant;

const TERM_IGNORING: &str = r#"-c 'trap "" TERM; while :; do sleep 0.05; done'"#;

fn ms(n: u64) -> Duration {
    Duration::from_millis(n)
}

#[yare::parameterized(
    both_unset     = { 0, 0, true },
    terminate_only = { 100, 0, true },
    kill_only      = { 0, 100, true },
    kill_later     = { 100, 500, true },
    kill_equal     = { 100, 100, false },
    kill_earlier   = { 500, 100, false },
)]
fn stop_timeout_pairs(terminate: u64, kill: u64, valid: bool) {
    let result = validate_stop_timeouts(ms(terminate), ms(kill));
    assert_eq!(result.is_ok(), valid, "{result:?}");
    if !valid {
        assert_eq!(
            result.unwrap_err(),
            StopError::InvalidTimeouts { terminate: ms(terminate), kill: ms(kill) }
        );
    }
}

#[tokio::test]
async fn invalid_timeouts_rejected_even_when_idle() {
    let exec = executor();
    assert!(matches!(
        exec.set_stop_timeouts(ms(200), ms(100)),
        Err(StopError::InvalidTimeouts { .. })
    ));
    assert!(exec.set_stop_timeouts(ms(100), ms(200)).is_ok());
}

#[tokio::test]
async fn try_stop_requires_a_running_child() {
    let exec = executor();
    assert_eq!(exec.try_stop(Signal::SIGTERM), Err(StopError::NotRunning));

    run(&exec, "true", "").await;
    assert_eq!(exec.try_stop(Signal::SIGTERM), Err(StopError::NotRunning));
    assert!(exec.errors().is_empty());
}

#[tokio::test]
async fn own_signal_is_a_warning() {
    let exec = executor();
    exec.execute("sleep", "10").unwrap();
    exec.try_stop(Signal::SIGTERM).unwrap();
    assert_eq!(exec.last_signal(), Some(Signal::SIGTERM));

    wait_exit(&exec).await;
    let outcome = exec.stopped_cleanup().unwrap();

    assert_eq!(outcome, ExitOutcome::Signaled(Signal::SIGTERM as i32));
    let errors = exec.errors();
    assert_eq!(severities(&errors), [(Severity::Warning, "signal")]);
    assert_eq!(errors[0].error.to_string(), "child stopped by SIGTERM");
}

#[tokio::test]
async fn foreign_signal_is_an_error() {
    let exec = executor();
    let outcome = run(&exec, "sh", "-c 'kill -TERM $$'").await;

    assert_eq!(outcome, ExitOutcome::Signaled(Signal::SIGTERM as i32));
    assert_eq!(exec.last_signal(), None);
    let errors = exec.errors();
    assert_eq!(severities(&errors), [(Severity::Error, "signal")]);
    assert_eq!(
        errors[0].error,
        ExecutionError::Signaled { signal: Signal::SIGTERM as i32, expected: false }
    );
}

#[tokio::test]
async fn terminate_timeout_stops_child_without_kill() {
    let exec = executor();
    exec.execute("sleep", "10").unwrap();
    exec.set_stop_timeouts(ms(100), ms(500)).unwrap();
    let start = Instant::now();

    wait_exit(&exec).await;
    let waited = start.elapsed();
    let outcome = exec.stopped_cleanup().unwrap();

    assert_eq!(outcome, ExitOutcome::Signaled(Signal::SIGTERM as i32));
    assert_eq!(exec.last_signal(), Some(Signal::SIGTERM));
    assert!(waited >= ms(90), "stopped too early: {waited:?}");
    assert!(waited < ms(2000), "stopped too late: {waited:?}");
    assert_eq!(severities(&exec.errors()), [(Severity::Warning, "signal")]);
}

#[tokio::test]
async fn kill_timeout_escalates_when_terminate_is_ignored() {
    let exec = executor();
    exec.execute("sh", TERM_IGNORING).unwrap();
    // Give the shell time to install its trap.
    tokio::time::sleep(ms(50)).await;
    exec.set_stop_timeouts(ms(100), ms(500)).unwrap();
    let start = Instant::now();

    wait_exit(&exec).await;
    let waited = start.elapsed();
    let outcome = exec.stopped_cleanup().unwrap();

    assert_eq!(outcome, ExitOutcome::Signaled(Signal::SIGKILL as i32));
    assert_eq!(exec.last_signal(), Some(Signal::SIGKILL));
    assert!(waited >= ms(450), "killed too early: {waited:?}");
    assert_eq!(severities(&exec.errors()), [(Severity::Warning, "signal")]);
}

#[tokio::test]
async fn unset_stop_timeouts_cancels_pending_timers() {
    let exec = executor();
    exec.execute("sleep", "0.5").unwrap();
    exec.set_stop_timeouts(ms(100), ms(200)).unwrap();
    exec.unset_stop_timeouts();
    exec.unset_stop_timeouts();

    wait_exit(&exec).await;
    assert_eq!(exec.stopped_cleanup().unwrap(), ExitOutcome::Exited(0));
    assert_eq!(exec.last_signal(), None);
}

#[tokio::test]
async fn set_stop_timeouts_replaces_previous_pair() {
    let exec = executor();
    exec.execute("sleep", "0.5").unwrap();
    exec.set_stop_timeouts(ms(50), ms(100)).unwrap();
    exec.set_stop_timeouts(ms(5000), ms(6000)).unwrap();

    wait_exit(&exec).await;
    assert_eq!(exec.stopped_cleanup().unwrap(), ExitOutcome::Exited(0));
}

#[tokio::test]
async fn timers_do_not_outlive_their_execution() {
    let exec = executor();
    exec.execute("sleep", "0.1").unwrap();
    exec.set_stop_timeouts(ms(400), ms(600)).unwrap();
    wait_exit(&exec).await;
    exec.stopped_cleanup().unwrap();

    exec.execute("sleep", "10").unwrap();
    tokio::time::sleep(ms(800)).await;
    assert!(exec.is_running(), "stale timer stopped the next child");
    assert_eq!(exec.last_signal(), None);

    kill(&exec).await;
}

#[tokio::test]
async fn set_stop_timeouts_is_a_noop_when_idle() {
    let exec = executor();
    exec.set_stop_timeouts(ms(10), ms(20)).unwrap();
    run(&exec, "sleep", "0.2").await;
    assert_eq!(exec.exit_outcome(), Some(ExitOutcome::Exited(0)));
}

#[tokio::test]
async fn reaped_child_is_not_signalled_while_output_drains() {
    let exec = executor_with(ExecutorConfig::default().drain_grace(ms(2000)));
    exec.execute("sh", "-c 'sleep 5 & exit 0'").unwrap();
    exec.set_stop_timeouts(ms(600), ms(800)).unwrap();
    tokio::time::sleep(ms(400)).await;

    // The grandchild keeps the pipes open, so the exit is not published yet.
    assert!(exec.is_running());
    assert_eq!(exec.try_stop(Signal::SIGTERM), Err(StopError::NotRunning));
    assert_eq!(exec.set_stop_timeouts(ms(10), ms(20)), Ok(()));

    wait_exit(&exec).await;
    assert_eq!(exec.stopped_cleanup().unwrap(), ExitOutcome::Exited(0));
    assert_eq!(exec.last_signal(), None);
    assert!(exec.errors().is_empty(), "{:?}", exec.errors());
}

#[tokio::test]
async fn vanished_pid_records_delivery_warning() {
    let exec = executor();
    exec.execute("sleep", "10").unwrap();
    let child = exec.pid();

    let mut gone = std::process::Command::new("true").spawn().unwrap();
    gone.wait().unwrap();
    let gone = Pid::from_raw(i32::try_from(gone.id()).unwrap());
    exec.inner.state.lock().pid = Some(gone);

    assert_eq!(
        exec.try_stop(Signal::SIGTERM),
        Err(StopError::Delivery { signal: Signal::SIGTERM, errno: nix::errno::Errno::ESRCH })
    );
    assert_eq!(exec.last_signal(), None);
    let errors = exec.errors();
    assert_eq!(severities(&errors), [(Severity::Warning, "errno")]);
    assert_eq!(
        errors[0].error,
        ExecutionError::SignalDelivery {
            signal: Signal::SIGTERM as i32,
            errno: nix::errno::Errno::ESRCH as i32
        }
    );

    exec.inner.state.lock().pid = child;
    kill(&exec).await;
}

#[yare::parameterized(
    gone      = { nix::errno::Errno::ESRCH, Severity::Warning },
    forbidden = { nix::errno::Errno::EPERM, Severity::Error },
    invalid   = { nix::errno::Errno::EINVAL, Severity::Error },
)]
fn delivery_failure_severity(errno: nix::errno::Errno, severity: Severity) {
    let record = crate::executor::stop::delivery_record(Signal::SIGKILL, errno);
    assert_eq!(record.severity, severity);
    assert_eq!(record.source_tag(), "errno");
}
