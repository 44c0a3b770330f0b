// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Fluent helpers for driving the built `gsc-run` binary.

use std::path::{Path, PathBuf};
use std::process::Output;

pub use tempfile::TempDir;

const SCRUBBED_VARS: [&str; 7] = [
    "GSC_CONFIG",
    "GSC_SMARTCTL_BINARY",
    "GSC_TERMINATE_TIMEOUT_MS",
    "GSC_KILL_TIMEOUT_MS",
    "GSC_LOG",
    "COLOR",
    "XDG_CONFIG_HOME",
];

/// A `gsc-run` invocation isolated from the caller's config and environment.
pub struct CliBuilder {
    cmd: assert_cmd::Command,
    _home: TempDir,
}

pub fn cli() -> CliBuilder {
    let home = TempDir::new().unwrap();
    let mut cmd = assert_cmd::Command::cargo_bin("gsc-run").unwrap();
    for var in SCRUBBED_VARS {
        cmd.env_remove(var);
    }
    cmd.env("XDG_CONFIG_HOME", home.path()).env("NO_COLOR", "1");
    CliBuilder { cmd, _home: home }
}

impl CliBuilder {
    pub fn args(mut self, args: &[&str]) -> Self {
        self.cmd.args(args);
        self
    }

    pub fn env(mut self, key: &str, value: impl AsRef<std::ffi::OsStr>) -> Self {
        self.cmd.env(key, value);
        self
    }

    /// Run and expect exit code 0.
    pub fn passes(self) -> RunOutput {
        self.exits_with(0)
    }

    /// Run and expect exactly `code`.
    pub fn exits_with(mut self, code: i32) -> RunOutput {
        let output = self.cmd.output().unwrap();
        let out = RunOutput::from(output);
        assert_eq!(
            out.code,
            Some(code),
            "unexpected exit status\nstdout:\n{}\nstderr:\n{}",
            out.stdout,
            out.stderr
        );
        out
    }
}

pub struct RunOutput {
    pub code: Option<i32>,
    pub stdout: String,
    pub stderr: String,
}

impl From<Output> for RunOutput {
    fn from(output: Output) -> Self {
        Self {
            code: output.status.code(),
            stdout: String::from_utf8_lossy(&output.stdout).into_owned(),
            stderr: String::from_utf8_lossy(&output.stderr).into_owned(),
        }
    }
}

impl RunOutput {
    pub fn stdout_eq(self, expected: &str) -> Self {
        assert_eq!(self.stdout, expected, "stderr:\n{}", self.stderr);
        self
    }

    pub fn stdout_has(self, needle: &str) -> Self {
        assert!(self.stdout.contains(needle), "stdout lacks {needle:?}:\n{}", self.stdout);
        self
    }

    pub fn stderr_has(self, needle: &str) -> Self {
        assert!(self.stderr.contains(needle), "stderr lacks {needle:?}:\n{}", self.stderr);
        self
    }

    pub fn stderr_lacks(self, needle: &str) -> Self {
        assert!(!self.stderr.contains(needle), "stderr has {needle:?}:\n{}", self.stderr);
        self
    }

    pub fn json(&self) -> serde_json::Value {
        serde_json::from_str(&self.stdout).unwrap()
    }
}

/// Write a file under `dir`, creating parents.
pub fn write_file(dir: &Path, name: &str, text: &str) -> PathBuf {
    let path = dir.join(name);
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent).unwrap();
    }
    std::fs::write(&path, text).unwrap();
    path
}

/// Options that turn `sh` into a smartctl stand-in: prints its arguments one
/// per line and exits with `code`.
pub fn fake_smartctl_options(code: i32) -> String {
    format!(r#"-c 'printf "%s\n" "$@"; exit {code}' smartctl"#)
}
