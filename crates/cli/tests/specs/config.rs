// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Config file specs

use crate::prelude::*;

#[test]
fn config_file_sets_timeouts() {
    let dir = TempDir::new().unwrap();
    let path = write_file(dir.path(), "gsc.toml", "terminate_timeout_ms = 100\nkill_timeout_ms = 1000\n");

    cli()
        .args(&["--config", path.to_str().unwrap(), "exec", "sleep", "10"])
        .exits_with(143);
}

#[test]
fn flags_override_config_file() {
    let dir = TempDir::new().unwrap();
    let path = write_file(dir.path(), "gsc.toml", "terminate_timeout_ms = 100\n");

    cli()
        .args(&["--config", path.to_str().unwrap(), "--terminate-ms", "0", "exec", "sleep", "0.3"])
        .passes();
}

#[test]
fn unknown_config_key_is_rejected() {
    let dir = TempDir::new().unwrap();
    let path = write_file(dir.path(), "gsc.toml", "smartctl = \"x\"\n");

    cli()
        .args(&["--config", path.to_str().unwrap(), "exec", "true"])
        .exits_with(1)
        .stderr_has("invalid config file");
}

#[test]
fn missing_config_file_is_rejected() {
    cli()
        .args(&["--config", "/nonexistent/gsc-run.toml", "exec", "true"])
        .exits_with(1)
        .stderr_has("cannot read config file");
}

#[test]
fn gsc_config_env_names_the_file() {
    let dir = TempDir::new().unwrap();
    let path = write_file(dir.path(), "gsc.toml", "terminate_timeout_ms = 100\n");

    cli().env("GSC_CONFIG", &path).args(&["exec", "sleep", "10"]).exits_with(143);
}
