// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

use super::*;
use crate::error::ExecuteError;
use crate::reactor::TokioReactor;
use gsc_core::Severity;
use std::sync::Arc;

fn runner() -> SyncRunner {
    let reactor = Arc::new(TokioReactor::try_current().unwrap());
    SyncRunner::new(CommandExecutor::new(reactor))
}

fn ms(n: u64) -> Duration {
    Duration::from_millis(n)
}

#[tokio::test]
async fn run_reports_finished_command() {
    let report = runner().run("sh", "-c 'echo out; echo err >&2'").await.unwrap();

    assert_eq!(report.command_line, "sh -c 'echo out; echo err >&2'");
    assert_eq!(report.stdout, "out\n");
    assert_eq!(report.stderr, "err\n");
    assert_eq!(report.outcome, Some(ExitOutcome::Exited(0)));
    assert!(report.success());
    assert!(!report.aborted);
    assert!(report.errors.is_empty());
}

#[tokio::test]
async fn runner_leaves_executor_idle_and_reusable() {
    let mut runner = runner();
    runner.run("false", "").await.unwrap();
    assert!(!runner.executor().is_running());
    assert!(!runner.executor().is_cleanup_pending());

    let report = runner.run("echo", "again").await.unwrap();
    assert_eq!(report.stdout, "again\n");
    assert!(report.errors.is_empty());
}

#[tokio::test]
async fn nonzero_exit_is_not_success() {
    let report = runner().run("sh", "-c 'exit 5'").await.unwrap();
    assert!(!report.success());
    assert_eq!(report.outcome, Some(ExitOutcome::Exited(5)));
    assert_eq!(report.errors.len(), 1);
    assert_eq!(report.errors[0].severity, Severity::Warning);
}

#[tokio::test]
async fn default_timeouts_apply_to_every_run() {
    let mut runner = runner().stop_timeouts(ms(100), ms(500)).unwrap();
    for _ in 0..2 {
        let report = runner.run("sleep", "10").await.unwrap();
        assert_eq!(report.outcome, Some(ExitOutcome::Signaled(Signal::SIGTERM as i32)));
        assert!(!report.aborted);
    }
}

#[yare::parameterized(
    equal   = { 100, 100 },
    earlier = { 300, 200 },
)]
fn invalid_default_timeouts_rejected(terminate: u64, kill: u64) {
    let runtime = tokio::runtime::Runtime::new().unwrap();
    let _guard = runtime.enter();
    assert!(matches!(
        runner().stop_timeouts(ms(terminate), ms(kill)),
        Err(StopError::InvalidTimeouts { .. })
    ));
}

#[tokio::test]
async fn tick_abort_stops_child_with_sigterm() {
    let mut runner = runner().on_tick(ms(20), |elapsed| {
        if elapsed >= Duration::from_millis(100) {
            Tick::Abort
        } else {
            Tick::Continue
        }
    });
    let report = runner.run("sleep", "10").await.unwrap();

    assert!(report.aborted);
    assert_eq!(report.outcome, Some(ExitOutcome::Signaled(Signal::SIGTERM as i32)));
    assert_eq!(report.errors.len(), 1);
    assert_eq!(report.errors[0].severity, Severity::Warning);
}

#[tokio::test]
async fn tick_abort_escalates_to_kill() {
    let mut runner = runner()
        .abort_kill_after(ms(300))
        .on_tick(ms(20), |elapsed| if elapsed >= ms(100) { Tick::Abort } else { Tick::Continue });
    let report = runner
        .run("sh", r#"-c 'trap "" TERM; while :; do sleep 0.05; done'"#)
        .await
        .unwrap();

    assert!(report.aborted);
    assert_eq!(report.outcome, Some(ExitOutcome::Signaled(Signal::SIGKILL as i32)));
    assert!(report.elapsed_ms >= 350, "elapsed {}ms", report.elapsed_ms);
}

#[tokio::test]
async fn tick_sees_growing_elapsed_time() {
    let seen = Arc::new(parking_lot::Mutex::new(Vec::new()));
    let mut runner = {
        let seen = Arc::clone(&seen);
        runner().on_tick(ms(20), move |elapsed| {
            seen.lock().push(elapsed);
            Tick::Continue
        })
    };
    let report = runner.run("sleep", "0.2").await.unwrap();

    assert!(report.success());
    let seen = seen.lock();
    assert!(seen.len() >= 3, "ticks: {seen:?}");
    assert!(seen.windows(2).all(|w| w[0] <= w[1]));
}

#[tokio::test]
async fn start_failure_is_a_run_error() {
    let err = runner().run("/nonexistent/gsc-no-such-binary", "").await.unwrap_err();
    assert!(matches!(err, RunError::Execute(ExecuteError::Spawn { .. })), "got: {err:?}");
}

#[tokio::test]
async fn report_serializes_to_json() {
    let report = runner().run("sh", "-c 'exit 2'").await.unwrap();
    let value = serde_json::to_value(&report).unwrap();

    assert_eq!(value["command_line"], "sh -c 'exit 2'");
    assert_eq!(value["outcome"]["exited"], 2);
    assert_eq!(value["aborted"], false);
    assert_eq!(value["errors"][0]["severity"], "warning");
    assert_eq!(value["errors"][0]["error"]["kind"], "exit_code");
}
