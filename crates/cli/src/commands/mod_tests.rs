// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

use super::*;
use gsc_shell::{LexerError, Span};

#[test]
fn parse_failure_points_at_the_quote() {
    let err = RunError::Execute(ExecuteError::Parse(LexerError::UnterminatedSingleQuote {
        span: Span::new(5, 10),
    }));
    let message = start_failure(&err, "echo 'oops");

    assert!(message.starts_with("gsc-run: error: unterminated single quote at position 5\n"), "{message}");
    assert!(message.contains("  --> line 1, column 6"), "{message}");
    assert!(message.ends_with("  1 | echo 'oops\n   |      ^^^^^"), "{message}");
}

#[test]
fn other_failures_are_one_line() {
    let err = RunError::Execute(ExecuteError::AlreadyRunning);
    let message = start_failure(&err, "echo hi");
    assert!(!message.contains('\n'), "{message}");
    assert!(message.starts_with("gsc-run: "), "{message}");
}
