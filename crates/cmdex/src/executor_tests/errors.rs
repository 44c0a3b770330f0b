// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

use super::*;
use gsc_core::Stream;
use gsc_shell::LexerError;
use std::io;
use std::pin::Pin;
use std::task::{Context, Poll};
use tokio::io::{AsyncRead, AsyncReadExt, ReadBuf};
use tokio_util::sync::CancellationToken;

/// A pipe whose every read fails.
struct BrokenPipe;

impl AsyncRead for BrokenPipe {
    fn poll_read(
        self: Pin<&mut Self>,
        _cx: &mut Context<'_>,
        _buf: &mut ReadBuf<'_>,
    ) -> Poll<io::Result<()>> {
        Poll::Ready(Err(io::Error::new(io::ErrorKind::BrokenPipe, "pipe broke")))
    }
}

#[tokio::test]
async fn unbalanced_quote_spawns_nothing() {
    let exec = executor();
    let err = exec.execute("echo", "'oops").unwrap_err();

    assert!(
        matches!(err, ExecuteError::Parse(LexerError::UnterminatedSingleQuote { .. })),
        "got: {err:?}"
    );
    assert!(!exec.is_running());
    assert_eq!(exec.pid(), None);
    assert_eq!(severities(&exec.errors()), [(Severity::Error, "shell")]);

    // The executor is still usable.
    assert_eq!(run(&exec, "echo", "fine").await, ExitOutcome::Exited(0));
}

#[tokio::test]
async fn empty_command_is_a_parse_error() {
    let exec = executor();
    let err = exec.execute("", "").unwrap_err();
    assert!(matches!(err, ExecuteError::Parse(LexerError::Empty { .. })), "got: {err:?}");
    assert_eq!(exec.phase(), Phase::Idle);
}

#[tokio::test]
async fn nonexistent_binary_records_spawn_error() {
    let exec = executor();
    let err = exec.execute("/nonexistent/gsc-no-such-binary", "-a").unwrap_err();

    match &err {
        ExecuteError::Spawn { program, .. } => assert_eq!(program, "/nonexistent/gsc-no-such-binary"),
        other => panic!("expected spawn error, got {other:?}"),
    }
    assert!(!exec.is_running());
    assert_eq!(exec.phase(), Phase::Idle);
    assert_eq!(severities(&exec.errors()), [(Severity::Error, "spawn")]);
}

#[yare::parameterized(
    translated   = { 2, "exited with code 2: two" },
    untranslated = { 3, "exited with code 3" },
)]
fn translator_message(code: i32, expected: &str) {
    let runtime = tokio::runtime::Runtime::new().unwrap();
    runtime.block_on(async {
        let exec = executor();
        exec.set_exit_status_translator(|code| (code == 2).then(|| "two".to_string()));

        let outcome = run(&exec, "sh", &format!("-c 'exit {code}'")).await;
        assert_eq!(outcome, ExitOutcome::Exited(code));

        let errors = exec.errors();
        assert_eq!(severities(&errors), [(Severity::Warning, "exit")]);
        assert_eq!(errors[0].error, ExecutionError::ExitCode { code, message: expected.to_string() });
    });
}

#[tokio::test]
async fn nonzero_exit_without_translator_is_generic() {
    let exec = executor();
    run(&exec, "false", "").await;
    let errors = exec.errors();
    assert_eq!(errors.len(), 1);
    assert_eq!(errors[0].to_string(), "warning: exited with code 1");
}

#[tokio::test]
async fn take_and_clear_errors() {
    let exec = executor();
    run(&exec, "false", "").await;

    let taken = exec.take_errors();
    assert_eq!(taken.len(), 1);
    assert!(exec.errors().is_empty());

    run(&exec, "false", "").await;
    exec.clear_errors();
    assert!(exec.errors().is_empty());
    assert_eq!(exec.exit_outcome(), Some(ExitOutcome::Exited(1)));
}

#[tokio::test]
async fn read_failure_records_channel_error_and_keeps_earlier_bytes() {
    let exec = executor();
    let reader = (&b"partial"[..]).chain(BrokenPipe);
    let drain = CancellationToken::new();
    crate::executor::pump::pump(&exec.inner, Stream::Stderr, Some(reader), &drain).await;

    assert_eq!(exec.stderr(), "partial");
    assert_eq!(exec.stdout(), "");
    let errors = exec.errors();
    assert_eq!(severities(&errors), [(Severity::Error, "channel")]);
    assert_eq!(
        errors[0].error,
        ExecutionError::Channel { stream: Stream::Stderr, message: "pipe broke".to_string() }
    );
}
