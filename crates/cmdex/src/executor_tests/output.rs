// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

use super::*;
use std::time::Instant;

#[tokio::test]
async fn output_written_right_before_exit_is_complete() {
    let exec = executor();
    let outcome = run(&exec, "sh", "-c 'printf partial; printf oops >&2; exit 3'").await;

    assert_eq!(outcome, ExitOutcome::Exited(3));
    assert_eq!(exec.stdout(), "partial");
    assert_eq!(exec.stderr(), "oops");
}

#[tokio::test]
async fn streams_are_captured_separately() {
    let exec = executor();
    run(&exec, "sh", "-c 'echo out; echo err >&2; echo more'").await;

    assert_eq!(exec.stdout(), "out\nmore\n");
    assert_eq!(exec.stderr(), "err\n");
}

#[tokio::test]
async fn large_output_is_complete_for_any_chunk_size() {
    for chunk in [1, 7, 4096] {
        let exec = executor_with(ExecutorConfig::default().read_chunk_size(chunk));
        run(&exec, "sh", "-c 'head -c 65536 /dev/zero; head -c 1000 /dev/zero >&2'").await;

        assert_eq!(exec.stdout_bytes().len(), 65536, "chunk size {chunk}");
        assert_eq!(exec.stderr_bytes().len(), 1000, "chunk size {chunk}");
    }
}

#[tokio::test]
async fn binary_output_keeps_raw_bytes() {
    let exec = executor();
    run(&exec, "printf", r"'\377\000\001'").await;

    assert_eq!(exec.stdout_bytes(), vec![0xff, 0x00, 0x01]);
    assert_eq!(exec.stdout(), "\u{fffd}\u{0}\u{1}");
}

#[tokio::test]
async fn grandchild_holding_pipes_does_not_block_exit() {
    let exec = executor_with(ExecutorConfig::default().drain_grace(Duration::from_millis(100)));
    let start = Instant::now();
    run(&exec, "sh", "-c 'sleep 5 & echo parent'").await;

    assert!(start.elapsed() < Duration::from_secs(3), "took {:?}", start.elapsed());
    assert_eq!(exec.stdout(), "parent\n");
    assert!(exec.errors().is_empty());
}

#[tokio::test]
async fn zero_chunk_size_still_reads() {
    let exec = executor_with(ExecutorConfig::default().read_chunk_size(0));
    run(&exec, "echo", "ok").await;
    assert_eq!(exec.stdout(), "ok\n");
}
