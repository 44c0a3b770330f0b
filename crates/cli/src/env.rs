// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Centralized environment variable access for gsc-run.
//!
//! Unparseable values are ignored, as if the variable were unset.

use std::path::PathBuf;

/// Default tracing filter when `GSC_LOG` is unset.
pub const DEFAULT_LOG_FILTER: &str = "warn";

/// Tracing filter directives: `GSC_LOG` > `warn`
pub fn log_filter() -> String {
    std::env::var("GSC_LOG").ok().filter(|s| !s.is_empty()).unwrap_or_else(|| DEFAULT_LOG_FILTER.to_string())
}

/// Config file named by `GSC_CONFIG`
pub fn config_file() -> Option<PathBuf> {
    std::env::var_os("GSC_CONFIG").filter(|s| !s.is_empty()).map(PathBuf::from)
}

/// Per-user config file: XDG_CONFIG_HOME/gsmartcontrol/gsc-run.toml > ~/.config/gsmartcontrol/gsc-run.toml
pub fn user_config_file() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join("gsmartcontrol").join("gsc-run.toml"))
}

pub fn smartctl_binary() -> Option<String> {
    std::env::var("GSC_SMARTCTL_BINARY").ok().filter(|s| !s.is_empty())
}

pub fn terminate_timeout_ms() -> Option<u64> {
    std::env::var("GSC_TERMINATE_TIMEOUT_MS").ok().and_then(|s| s.parse::<u64>().ok())
}

pub fn kill_timeout_ms() -> Option<u64> {
    std::env::var("GSC_KILL_TIMEOUT_MS").ok().and_then(|s| s.parse::<u64>().ok())
}
