// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Executor tuning knobs.

use std::time::Duration;

/// Default bytes requested per pipe read. One byte at a time trades
/// throughput for the guarantee that nothing is left behind in a read buffer
/// when the child exits.
pub const DEFAULT_READ_CHUNK_SIZE: usize = 1;

/// Default time the pipes may stay open after the child has been reaped.
pub const DEFAULT_DRAIN_GRACE: Duration = Duration::from_millis(200);

/// Configuration for a [`crate::CommandExecutor`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExecutorConfig {
    /// Run the child with `LANG=C` so locale-sensitive tools (smartctl)
    /// produce parseable output. The parent environment is left untouched.
    pub force_c_locale: bool,
    /// Bytes requested per pipe read (minimum 1).
    pub read_chunk_size: usize,
    /// After the child exits, how long to wait for EOF on its pipes before
    /// taking only what is already buffered. Matters when a grandchild
    /// inherited the pipes and outlives the child.
    pub drain_grace: Duration,
}

impl Default for ExecutorConfig {
    fn default() -> Self {
        Self {
            force_c_locale: true,
            read_chunk_size: DEFAULT_READ_CHUNK_SIZE,
            drain_grace: DEFAULT_DRAIN_GRACE,
        }
    }
}

impl ExecutorConfig {
    gsc_core::setters! {
        set {
            force_c_locale: bool,
            read_chunk_size: usize,
            drain_grace: Duration,
        }
    }
}
