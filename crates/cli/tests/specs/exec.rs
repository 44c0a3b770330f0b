// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! `gsc-run exec` specs

use crate::prelude::*;

#[test]
fn echo_prints_child_stdout() {
    cli().args(&["exec", "echo", "hello"]).passes().stdout_eq("hello\n").stderr_lacks("gsc-run:");
}

#[test]
fn child_stderr_goes_to_stderr() {
    cli()
        .args(&["exec", "sh", "-c", "'echo out; echo err >&2'"])
        .passes()
        .stdout_eq("out\n")
        .stderr_has("err\n");
}

#[test]
fn arguments_are_split_with_shell_quoting() {
    cli().args(&["exec", "printf", "'%s|'", "a", "'b c'"]).passes().stdout_eq("a|b c|");
}

#[test]
fn literal_keeps_each_argument_whole() {
    cli().args(&["exec", "--literal", "printf", "%s|", "a b", "it's"]).passes().stdout_eq("a b|it's|");
}

#[test]
fn exit_code_mirrors_child_with_warning() {
    cli()
        .args(&["exec", "sh", "-c", "'exit 3'"])
        .exits_with(3)
        .stderr_has("gsc-run: warning: exited with code 3");
}

#[test]
fn foreign_signal_is_reported_as_error() {
    cli()
        .args(&["exec", "sh", "-c", "'kill -TERM $$'"])
        .exits_with(143)
        .stderr_has("gsc-run: error: child terminated by unexpected signal SIGTERM");
}

#[test]
fn nonexistent_program_fails_to_start() {
    cli()
        .args(&["exec", "/nonexistent/gsc-no-such-binary"])
        .exits_with(1)
        .stderr_has("failed to spawn `/nonexistent/gsc-no-such-binary`");
}

#[test]
fn unbalanced_quote_fails_to_start() {
    cli().args(&["exec", "echo", "'oops"]).exits_with(1).stderr_has("unterminated single quote");
}

#[test]
fn json_format_prints_report() {
    let out = cli().args(&["--format", "json", "exec", "sh", "-c", "'echo hi; exit 2'"]).exits_with(2);
    let report = out.json();

    assert_eq!(report["command_line"], "sh -c 'echo hi; exit 2'");
    assert_eq!(report["stdout"], "hi\n");
    assert_eq!(report["outcome"]["exited"], 2);
    assert_eq!(report["errors"][0]["severity"], "warning");
    assert_eq!(report["errors"][0]["error"]["kind"], "exit_code");
}

#[test]
fn child_runs_in_c_locale() {
    cli()
        .env("LANG", "de_DE.UTF-8")
        .args(&["exec", "sh", "-c", "'echo $LANG'"])
        .passes()
        .stdout_eq("C\n");
}

#[test]
fn unbalanced_quote_is_pointed_at() {
    cli()
        .args(&["exec", "echo", "ok", "'oops"])
        .exits_with(1)
        .stderr_has("gsc-run: error: unterminated single quote at position 8\n")
        .stderr_has("  --> line 1, column 9\n")
        .stderr_has("  1 | echo ok 'oops\n   |         ^^^^^\n");
}
