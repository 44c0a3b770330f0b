// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! `gsc-run smartctl` specs, with `sh` standing in for smartctl

use crate::prelude::*;

#[test]
fn device_is_passed_as_one_argument() {
    cli()
        .env("GSC_SMARTCTL_BINARY", "sh")
        .args(&["smartctl", "/dev/my disk", "--options", &fake_smartctl_options(0)])
        .passes()
        .stdout_eq("/dev/my disk\n");
}

#[test]
fn extra_arguments_follow_options() {
    cli()
        .env("GSC_SMARTCTL_BINARY", "sh")
        .args(&["smartctl", "/dev/sda", "--options", &fake_smartctl_options(0), "--", "-i", "-H"])
        .passes()
        .stdout_eq("-i\n-H\n/dev/sda\n");
}

#[test]
fn exit_bitmask_is_explained() {
    cli()
        .env("GSC_SMARTCTL_BINARY", "sh")
        .args(&["smartctl", "/dev/sda", "--options", &fake_smartctl_options(0x48)])
        .exits_with(0x48)
        .stderr_has("SMART status check returned \"DISK FAILING\"; the device error log contains records of errors");
}

#[test]
fn binary_and_options_from_config_file() {
    let dir = TempDir::new().unwrap();
    let options = fake_smartctl_options(2).replace('\\', "\\\\").replace('"', "\\\"");
    let path = write_file(
        dir.path(),
        "gsc.toml",
        &format!("smartctl_binary = \"sh\"\nsmartctl_options = \"{options}\"\n"),
    );

    cli()
        .args(&["--config", path.to_str().unwrap(), "smartctl", "/dev/sdb"])
        .exits_with(2)
        .stdout_eq("/dev/sdb\n")
        .stderr_has("device open failed");
}

#[test]
fn missing_smartctl_binary_fails_to_start() {
    cli()
        .env("GSC_SMARTCTL_BINARY", "/nonexistent/smartctl")
        .args(&["smartctl", "/dev/sda"])
        .exits_with(1)
        .stderr_has("failed to spawn");
}
