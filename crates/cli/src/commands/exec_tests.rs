// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

use super::*;

fn args(literal: bool, words: &[&str]) -> ExecArgs {
    ExecArgs { literal, command: words.iter().map(|w| w.to_string()).collect() }
}

#[yare::parameterized(
    bare          = { false, &["true"], "true", "" },
    joined        = { false, &["sh", "-c", "'echo hi'"], "sh", "-c 'echo hi'" },
    literal       = { true, &["printf", "%s|", "a b"], "printf", "'%s|' 'a b'" },
    literal_quote = { true, &["echo", "it's"], "echo", r"'it'\''s'" },
)]
fn command_line(literal: bool, words: &[&str], program: &str, arguments: &str) {
    let (p, a) = args(literal, words).command_line();
    assert_eq!(p, program);
    assert_eq!(a, arguments);
}

#[test]
fn literal_arguments_split_back_unchanged() {
    let (_, arguments) = args(true, &["x", "a b", "'q'", "$HOME"]).command_line();
    assert_eq!(gsc_shell::split(&arguments).unwrap(), ["a b", "'q'", "$HOME"]);
}
