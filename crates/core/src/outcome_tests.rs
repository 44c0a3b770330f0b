// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

use super::*;

#[yare::parameterized(
    clean_exit   = { ExitOutcome::Exited(0),    true,  Some(0), None,     0 },
    failed_exit  = { ExitOutcome::Exited(4),    false, Some(4), None,     4 },
    sigterm      = { ExitOutcome::Signaled(15), false, None,    Some(15), 143 },
    sigkill      = { ExitOutcome::Signaled(9),  false, None,    Some(9),  137 },
)]
fn accessors(outcome: ExitOutcome, success: bool, code: Option<i32>, signal: Option<i32>, shell: i32) {
    assert_eq!(outcome.success(), success);
    assert_eq!(outcome.code(), code);
    assert_eq!(outcome.signal(), signal);
    assert_eq!(outcome.shell_code(), shell);
}

#[test]
fn from_raw_wait_status() {
    // Raw wait status layout: exit code in bits 8..16, signal in the low 7 bits.
    assert_eq!(ExitOutcome::from(ExitStatus::from_raw(3 << 8)), ExitOutcome::Exited(3));
    assert_eq!(ExitOutcome::from(ExitStatus::from_raw(9)), ExitOutcome::Signaled(9));
}

#[test]
fn stopped_wait_status_has_no_real_code() {
    // WIFSTOPPED with SIGSTOP: 0x7f in the low byte, signal in bits 8..16.
    let stopped = ExitStatus::from_raw((19 << 8) | 0x7f);
    assert_eq!(ExitOutcome::from(stopped), ExitOutcome::Exited(UNKNOWN_EXIT_CODE));
}

#[test]
fn display_uses_signal_names() {
    assert_eq!(ExitOutcome::Exited(2).to_string(), "exited with code 2");
    assert_eq!(ExitOutcome::Signaled(15).to_string(), "terminated by signal SIGTERM");
}

#[test]
fn unknown_signal_falls_back_to_number() {
    assert_eq!(signal_name(200), "signal 200");
    assert_eq!(signal_name(9), "SIGKILL");
}

#[test]
fn serializes_as_tagged_value() {
    let json = serde_json::to_string(&ExitOutcome::Signaled(15)).unwrap();
    assert_eq!(json, r#"{"signaled":15}"#);
}
