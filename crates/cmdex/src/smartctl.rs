// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Running `smartctl` through the executor.
//!
//! smartctl's exit status is a bitmask (see smartctl(8), "RETURN VALUES"):
//! several bits can be set at once, and most of them describe the drive
//! rather than a failure to run the tool.

use gsc_core::{Clock, SystemClock};

use crate::error::RunError;
use crate::runner::{RunReport, SyncRunner};

const EXIT_BITS: [&str; 8] = [
    "command line did not parse",
    "device open failed, or device did not return an IDENTIFY DEVICE structure",
    "some SMART or ATA command to the disk failed, or a SMART data structure checksum was wrong",
    "SMART status check returned \"DISK FAILING\"",
    "prefail attributes are at or below threshold",
    "some attributes have been at or below threshold in the past",
    "the device error log contains records of errors",
    "the device self-test log contains records of errors",
];

/// Describe every bit set in a smartctl exit code. `None` when no known bit is set.
pub fn exit_status_message(code: i32) -> Option<String> {
    let parts: Vec<&str> = EXIT_BITS
        .iter()
        .enumerate()
        .filter(|(bit, _)| code & (1 << bit) != 0)
        .map(|(_, text)| *text)
        .collect();
    if parts.is_empty() {
        None
    } else {
        Some(parts.join("; "))
    }
}

/// Runs a smartctl binary against one device at a time.
pub struct SmartctlRunner<C: Clock = SystemClock> {
    binary: String,
    options: String,
    runner: SyncRunner<C>,
}

impl<C: Clock> SmartctlRunner<C> {
    /// Wraps `runner`, installing the exit bitmask translator on its executor.
    pub fn new(binary: impl Into<String>, runner: SyncRunner<C>) -> Self {
        runner.executor().set_exit_status_translator(exit_status_message);
        Self { binary: binary.into(), options: String::new(), runner }
    }

    /// Options passed before the per-call arguments (shell-quoted string).
    pub fn options(mut self, options: impl Into<String>) -> Self {
        self.options = options.into();
        self
    }

    pub fn binary(&self) -> &str {
        &self.binary
    }

    pub fn runner(&self) -> &SyncRunner<C> {
        &self.runner
    }

    /// Argument string for one call: options, extra arguments, then the
    /// quoted device path.
    pub fn arguments(&self, device: &str, extra: &str) -> String {
        let quoted = gsc_shell::quote(device);
        [self.options.trim(), extra.trim(), quoted.as_str()]
            .into_iter()
            .filter(|part| !part.is_empty())
            .collect::<Vec<_>>()
            .join(" ")
    }

    pub async fn run(&mut self, device: &str, extra: &str) -> Result<RunReport, RunError> {
        let arguments = self.arguments(device, extra);
        tracing::debug!(binary = %self.binary, %arguments, "running smartctl");
        self.runner.run(&self.binary, &arguments).await
    }
}

#[cfg(test)]
#[path = "smartctl_tests.rs"]
mod tests;
