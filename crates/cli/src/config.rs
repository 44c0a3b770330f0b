// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Layered gsc-run configuration.
//!
//! Built-in defaults, then a TOML file, then `GSC_*` environment variables,
//! then command-line flags. Later layers override earlier ones field by field.

use std::io;
use std::path::{Path, PathBuf};
use std::time::Duration;

use gsc_cmdex::{validate_stop_timeouts, StopError};
use serde::Deserialize;
use thiserror::Error;

use crate::env;

pub const DEFAULT_SMARTCTL_BINARY: &str = "smartctl";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("cannot read config file {}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("invalid config file {}", path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    #[error("invalid stop timeouts")]
    Timeouts(#[from] StopError),
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    /// Program run by `gsc-run smartctl`.
    pub smartctl_binary: String,
    /// Shell-quoted options placed before every smartctl call.
    pub smartctl_options: String,
    /// SIGTERM after this many milliseconds; 0 disables.
    pub terminate_timeout_ms: u64,
    /// SIGKILL after this many milliseconds; 0 disables.
    pub kill_timeout_ms: u64,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            smartctl_binary: DEFAULT_SMARTCTL_BINARY.to_string(),
            smartctl_options: String::new(),
            terminate_timeout_ms: 0,
            kill_timeout_ms: 0,
        }
    }
}

impl Config {
    /// Defaults, the config file (if any), then the environment.
    ///
    /// `explicit` (from `--config`) must exist; `GSC_CONFIG` must exist; the
    /// per-user file is used only when present.
    pub fn load(explicit: Option<&Path>) -> Result<Self, ConfigError> {
        let mut config = match config_path(explicit) {
            Some(path) => Self::from_file(&path)?,
            None => Self::default(),
        };
        config.apply_env();
        config.validate()?;
        Ok(config)
    }

    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let text = std::fs::read_to_string(path)
            .map_err(|source| ConfigError::Read { path: path.to_path_buf(), source })?;
        let config = toml::from_str(&text)
            .map_err(|source| ConfigError::Parse { path: path.to_path_buf(), source })?;
        tracing::debug!(path = %path.display(), "loaded config file");
        Ok(config)
    }

    pub fn apply_env(&mut self) {
        if let Some(binary) = env::smartctl_binary() {
            self.smartctl_binary = binary;
        }
        if let Some(ms) = env::terminate_timeout_ms() {
            self.terminate_timeout_ms = ms;
        }
        if let Some(ms) = env::kill_timeout_ms() {
            self.kill_timeout_ms = ms;
        }
    }

    /// Apply command-line timeout flags and re-validate.
    pub fn with_overrides(
        mut self,
        terminate_ms: Option<u64>,
        kill_ms: Option<u64>,
    ) -> Result<Self, ConfigError> {
        if let Some(ms) = terminate_ms {
            self.terminate_timeout_ms = ms;
        }
        if let Some(ms) = kill_ms {
            self.kill_timeout_ms = ms;
        }
        self.validate()?;
        Ok(self)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        validate_stop_timeouts(self.terminate_timeout(), self.kill_timeout())?;
        Ok(())
    }

    pub fn terminate_timeout(&self) -> Duration {
        Duration::from_millis(self.terminate_timeout_ms)
    }

    pub fn kill_timeout(&self) -> Duration {
        Duration::from_millis(self.kill_timeout_ms)
    }
}

fn config_path(explicit: Option<&Path>) -> Option<PathBuf> {
    if let Some(path) = explicit {
        return Some(path.to_path_buf());
    }
    if let Some(path) = env::config_file() {
        return Some(path);
    }
    env::user_config_file().filter(|path| path.is_file())
}

#[cfg(test)]
#[path = "config_tests.rs"]
mod tests;
