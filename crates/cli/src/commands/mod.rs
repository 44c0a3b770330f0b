// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Subcommand handlers.

pub mod exec;
pub mod smartctl;

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::time::Duration;

use anyhow::Context;
use gsc_cmdex::{CommandExecutor, ExecuteError, RunError, RunReport, SyncRunner, Tick, TokioReactor};

use crate::config::Config;
use crate::exit_error::{report_exit_code, ExitError, START_FAILURE};
use crate::output::{print_report, OutputFormat};

/// How often the runner checks whether Ctrl-C was pressed.
const INTERRUPT_POLL: Duration = Duration::from_millis(100);

/// A runner with the configured stop timeouts that aborts the child on Ctrl-C.
fn runner(config: &Config) -> anyhow::Result<SyncRunner> {
    let reactor = TokioReactor::try_current().context("no async runtime")?;
    let executor = CommandExecutor::new(Arc::new(reactor));

    let interrupted = Arc::new(AtomicBool::new(false));
    {
        let interrupted = Arc::clone(&interrupted);
        tokio::spawn(async move {
            if tokio::signal::ctrl_c().await.is_ok() {
                tracing::info!("interrupted");
                interrupted.store(true, Ordering::SeqCst);
            }
        });
    }

    let runner = SyncRunner::new(executor)
        .stop_timeouts(config.terminate_timeout(), config.kill_timeout())?
        .on_tick(INTERRUPT_POLL, move |_| {
            if interrupted.load(Ordering::SeqCst) {
                Tick::Abort
            } else {
                Tick::Continue
            }
        });
    Ok(runner)
}

/// Print the report and turn the child's status into our exit code.
///
/// `command_line` is what the executor tried to split, for pointing at
/// parse errors.
fn finish(
    result: Result<RunReport, RunError>,
    command_line: &str,
    format: OutputFormat,
) -> anyhow::Result<()> {
    let report = match result {
        Ok(report) => report,
        Err(err) => {
            let message = start_failure(&err, command_line);
            return Err(ExitError::new(START_FAILURE, message).into());
        }
    };
    print_report(&report, format)?;

    match report_exit_code(&report) {
        0 => Ok(()),
        code => Err(ExitError::silent(code).into()),
    }
}

fn start_failure(err: &RunError, command_line: &str) -> String {
    match err {
        RunError::Execute(ExecuteError::Parse(e)) => {
            format!("gsc-run: {}", e.diagnostic(command_line))
        }
        other => format!("gsc-run: {other}"),
    }
}

#[cfg(test)]
#[path = "mod_tests.rs"]
mod tests;
