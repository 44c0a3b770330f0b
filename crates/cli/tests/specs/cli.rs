// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Help and argument handling specs

use crate::prelude::*;

#[test]
fn help_shows_usage() {
    cli().args(&["--help"]).passes().stdout_has("Usage:").stdout_has("exec").stdout_has("smartctl");
}

#[test]
fn exec_help_shows_literal_flag() {
    cli().args(&["exec", "--help"]).passes().stdout_has("--literal");
}

#[test]
fn version_shows_version() {
    cli().args(&["--version"]).passes().stdout_has("0.2");
}

#[test]
fn missing_subcommand_is_a_usage_error() {
    cli().exits_with(2).stderr_has("Usage:");
}

#[test]
fn exec_requires_a_command() {
    cli().args(&["exec"]).exits_with(2);
}
