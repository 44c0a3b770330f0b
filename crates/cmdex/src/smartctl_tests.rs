// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

use super::*;
use crate::executor::CommandExecutor;
use crate::reactor::TokioReactor;
use gsc_core::{ExecutionError, ExitOutcome, Severity};
use std::sync::Arc;

/// Stand-in for smartctl: prints its arguments one per line, exits with `code`.
fn fake_smartctl(code: i32) -> SmartctlRunner {
    let reactor = Arc::new(TokioReactor::try_current().unwrap());
    let runner = SyncRunner::new(CommandExecutor::new(reactor));
    SmartctlRunner::new("sh", runner)
        .options(format!(r#"-c 'printf "%s\n" "$@"; exit {code}' smartctl"#))
}

#[yare::parameterized(
    zero       = { 0, None },
    parse      = { 1, Some("command line did not parse") },
    open       = { 2, Some("device open failed, or device did not return an IDENTIFY DEVICE structure") },
    failing    = { 8, Some("SMART status check returned \"DISK FAILING\"") },
    two_bits   = { 0xc0, Some("the device error log contains records of errors; the device self-test log contains records of errors") },
    high_only  = { 0x100, None },
)]
fn exit_bits(code: i32, expected: Option<&str>) {
    assert_eq!(exit_status_message(code).as_deref(), expected);
}

#[test]
fn every_bit_has_a_description() {
    for bit in 0..8 {
        let message = exit_status_message(1 << bit).unwrap();
        assert!(!message.contains(';'), "bit {bit}: {message}");
    }
    assert_eq!(exit_status_message(0xff).unwrap().matches("; ").count(), 7);
}

#[tokio::test]
async fn arguments_quote_the_device() {
    let smartctl = fake_smartctl(0).options("-d sat");
    assert_eq!(smartctl.arguments("/dev/sda", "-i"), "-d sat -i /dev/sda");
    assert_eq!(smartctl.arguments("/dev/my disk", ""), "-d sat '/dev/my disk'");
    assert_eq!(smartctl.binary(), "sh");
}

#[tokio::test]
async fn arguments_without_options() {
    let reactor = Arc::new(TokioReactor::try_current().unwrap());
    let smartctl = SmartctlRunner::new("smartctl", SyncRunner::new(CommandExecutor::new(reactor)));
    assert_eq!(smartctl.arguments("/dev/sda", "  -H "), "-H /dev/sda");
    assert_eq!(smartctl.arguments("/dev/sda", ""), "/dev/sda");
}

#[tokio::test]
async fn run_passes_device_as_single_argument() {
    let mut smartctl = fake_smartctl(0);
    let report = smartctl.run("/dev/my disk", "-i -H").await.unwrap();

    assert_eq!(report.stdout, "-i\n-H\n/dev/my disk\n");
    assert!(report.success());
    assert!(report.errors.is_empty());
}

#[tokio::test]
async fn nonzero_exit_is_described_by_bitmask() {
    let mut smartctl = fake_smartctl(4);
    let report = smartctl.run("/dev/sda", "-a").await.unwrap();

    assert_eq!(report.outcome, Some(ExitOutcome::Exited(4)));
    assert_eq!(report.errors.len(), 1);
    assert_eq!(report.errors[0].severity, Severity::Warning);
    assert_eq!(
        report.errors[0].error,
        ExecutionError::ExitCode {
            code: 4,
            message: "exited with code 4: some SMART or ATA command to the disk failed, \
                      or a SMART data structure checksum was wrong"
                .to_string(),
        }
    );
}

#[tokio::test]
async fn runner_exposes_the_executor() {
    let mut smartctl = fake_smartctl(0);
    smartctl.run("/dev/sda", "").await.unwrap();
    assert_eq!(smartctl.runner().executor().stdout(), "/dev/sda\n");
}
