// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

// Allow panic!/unwrap/expect in test code
#![cfg_attr(test, allow(clippy::panic))]
#![cfg_attr(test, allow(clippy::unwrap_used))]
#![cfg_attr(test, allow(clippy::expect_used))]

//! gsc-shell: POSIX-shell-style argument splitting and quoting.
//!
//! Splits a command line into an argument vector the way `/bin/sh` would,
//! minus every kind of expansion: quotes and backslashes are honoured, `$VAR`
//! and globs stay literal.
//!
//! ```
//! let argv = gsc_shell::split("smartctl -i '/dev/disk/by-id/my disk'").unwrap();
//! assert_eq!(argv, ["smartctl", "-i", "/dev/disk/by-id/my disk"]);
//! ```

mod error;
mod lexer;
mod quote;
mod span;

pub use error::LexerError;
pub use lexer::Lexer;
pub use quote::{join, quote};
pub use span::{diagnostic_context, locate_span, Span};

/// Split a command line into words. Fails on unbalanced quoting or when the
/// input contains no words at all.
pub fn split(input: &str) -> Result<Vec<String>, LexerError> {
    Lexer::split(input)
}
