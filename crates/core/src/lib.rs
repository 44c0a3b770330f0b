// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

// Allow panic!/unwrap/expect in test code
#![cfg_attr(test, allow(clippy::panic))]
#![cfg_attr(test, allow(clippy::unwrap_used))]
#![cfg_attr(test, allow(clippy::expect_used))]

//! gsc-core: shared types for the GSmartControl command execution layer

pub mod macros;

pub mod clock;
pub mod outcome;
pub mod record;

pub use clock::{Clock, FakeClock, SystemClock};
pub use outcome::{signal_name, ExitOutcome, UNKNOWN_EXIT_CODE};
pub use record::{ErrorRecord, ExecutionError, Severity, Stream};
