// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

use super::*;
use gsc_core::FakeClock;
use std::sync::atomic::{AtomicUsize, Ordering};

#[tokio::test]
async fn echo_captures_stdout_without_records() {
    let exec = executor();
    let outcome = run(&exec, "echo", "hello").await;

    assert_eq!(outcome, ExitOutcome::Exited(0));
    assert_eq!(exec.stdout(), "hello\n");
    assert_eq!(exec.stderr(), "");
    assert!(exec.errors().is_empty());
    assert_eq!(exec.phase(), Phase::Idle);
    assert_eq!(exec.exit_outcome(), Some(ExitOutcome::Exited(0)));
}

#[tokio::test]
async fn running_right_after_execute() {
    let exec = executor();
    exec.execute("sleep", "10").unwrap();

    assert!(exec.is_running());
    assert!(!exec.is_cleanup_pending());
    assert!(exec.pid().is_some());
    assert_eq!(exec.command_line(), "sleep 10");

    kill(&exec).await;
    assert!(!exec.is_running());
    assert_eq!(exec.pid(), None);
}

#[tokio::test]
async fn execute_while_running_is_refused_and_changes_nothing() {
    let exec = executor();
    exec.execute("sleep", "10").unwrap();
    let pid = exec.pid();

    let err = exec.execute("echo", "other").unwrap_err();
    assert!(matches!(err, ExecuteError::AlreadyRunning), "got: {err:?}");
    assert!(exec.is_running());
    assert_eq!(exec.pid(), pid);
    assert_eq!(exec.command_line(), "sleep 10");
    assert!(exec.errors().is_empty());

    kill(&exec).await;
}

#[tokio::test]
async fn execute_while_cleanup_pending_is_refused() {
    let exec = executor();
    exec.execute("echo", "first").unwrap();
    wait_exit(&exec).await;
    assert!(exec.is_cleanup_pending());

    let err = exec.execute("echo", "second").unwrap_err();
    assert!(matches!(err, ExecuteError::CleanupPending), "got: {err:?}");
    assert_eq!(exec.stdout(), "first\n");

    exec.stopped_cleanup().unwrap();
    assert_eq!(run(&exec, "echo", "second").await, ExitOutcome::Exited(0));
    assert_eq!(exec.stdout(), "second\n");
}

#[tokio::test]
async fn stopped_cleanup_requires_an_exited_child() {
    let exec = executor();
    assert_eq!(
        exec.stopped_cleanup().unwrap_err(),
        CleanupError::NotExited { phase: Phase::Idle }
    );

    exec.execute("sleep", "10").unwrap();
    assert_eq!(
        exec.stopped_cleanup().unwrap_err(),
        CleanupError::NotExited { phase: Phase::Running }
    );
    kill(&exec).await;
}

#[tokio::test]
async fn next_execute_resets_previous_results() {
    let exec = executor();
    run(&exec, "sh", "-c 'echo one; exit 4'").await;
    assert_eq!(exec.errors().len(), 1);

    run(&exec, "echo", "two").await;
    assert_eq!(exec.stdout(), "two\n");
    assert!(exec.errors().is_empty());
    assert_eq!(exec.last_signal(), None);
}

#[tokio::test]
async fn arguments_are_split_with_shell_quoting() {
    let exec = executor();
    run(&exec, "printf", r#"'%s|' a 'b c' "d\"e""#).await;
    assert_eq!(exec.stdout(), "a|b c|d\"e|");
}

#[tokio::test]
async fn empty_arguments_run_the_bare_command() {
    let exec = executor();
    run(&exec, "true", "").await;
    assert_eq!(exec.command_line(), "true");
}

#[tokio::test]
async fn child_gets_c_locale_without_touching_parent() {
    let before = std::env::var_os("LANG");
    let exec = executor();
    run(&exec, "sh", "-c 'echo $LANG'").await;

    assert_eq!(exec.stdout(), "C\n");
    assert_eq!(std::env::var_os("LANG"), before);
}

#[tokio::test]
async fn elapsed_freezes_at_exit() {
    let clock = FakeClock::new();
    let exec = CommandExecutor::with_clock(reactor(), ExecutorConfig::default(), clock.clone());
    assert_eq!(exec.elapsed(), Duration::ZERO);

    exec.execute("sleep", "0.3").unwrap();
    clock.advance(Duration::from_secs(5));
    assert_eq!(exec.elapsed(), Duration::from_secs(5));

    wait_exit(&exec).await;
    clock.advance(Duration::from_secs(10));
    assert_eq!(exec.elapsed(), Duration::from_secs(5));
    assert_eq!(exec.elapsed_seconds(), 5.0);

    exec.stopped_cleanup().unwrap();
    assert_eq!(exec.elapsed(), Duration::from_secs(5));
}

#[tokio::test]
async fn exit_callback_fires_on_every_exit() {
    let exec = executor();
    let calls = Arc::new(AtomicUsize::new(0));
    {
        let calls = Arc::clone(&calls);
        exec.set_exit_callback(move || {
            calls.fetch_add(1, Ordering::SeqCst);
        });
    }

    run(&exec, "true", "").await;
    run(&exec, "false", "").await;
    assert_eq!(calls.load(Ordering::SeqCst), 2);
}

#[tokio::test]
async fn exit_callback_runs_once_output_is_final() {
    let exec = executor();
    let seen = Arc::new(Mutex::new(None));
    {
        let seen = Arc::clone(&seen);
        let observer = exec.clone();
        exec.set_exit_callback(move || {
            *seen.lock() = Some((observer.phase(), observer.stdout()));
        });
    }

    run(&exec, "sh", "-c 'printf done'").await;
    assert_eq!(*seen.lock(), Some((Phase::Exited, "done".to_string())));
}

#[tokio::test]
async fn wait_exited_returns_immediately_when_idle() {
    let exec = executor();
    wait_exit(&exec).await;
    assert_eq!(exec.phase(), Phase::Idle);
}
