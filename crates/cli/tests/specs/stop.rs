// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Stop timeout specs

use crate::prelude::*;

#[test]
fn terminate_timeout_stops_child() {
    cli()
        .args(&["--terminate-ms", "100", "--kill-ms", "500", "exec", "sleep", "10"])
        .exits_with(143)
        .stderr_has("gsc-run: warning: child stopped by SIGTERM");
}

#[test]
fn kill_timeout_escalates() {
    cli()
        .args(&[
            "--terminate-ms",
            "100",
            "--kill-ms",
            "500",
            "exec",
            "sh",
            "-c",
            r#"'trap "" TERM; while :; do sleep 0.05; done'"#,
        ])
        .exits_with(137)
        .stderr_has("gsc-run: warning: child stopped by SIGKILL");
}

#[test]
fn kill_before_terminate_is_rejected() {
    cli()
        .args(&["--terminate-ms", "500", "--kill-ms", "100", "exec", "true"])
        .exits_with(1)
        .stderr_has("must exceed terminate timeout");
}

#[test]
fn timeouts_from_env() {
    cli()
        .env("GSC_TERMINATE_TIMEOUT_MS", "100")
        .args(&["exec", "sleep", "10"])
        .exits_with(143);
}
