// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Error types for command line splitting.

use crate::{diagnostic_context, Span};
use thiserror::Error;

/// Errors that can occur while splitting a command line.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum LexerError {
    /// Unterminated single quote.
    #[error("unterminated single quote at position {}", span.start)]
    UnterminatedSingleQuote {
        /// From the opening quote to the end of input.
        span: Span,
    },

    /// Unterminated double quote.
    #[error("unterminated double quote at position {}", span.start)]
    UnterminatedDoubleQuote {
        /// From the opening quote to the end of input.
        span: Span,
    },

    /// Backslash with nothing left to escape.
    #[error("trailing backslash at position {}", span.start)]
    TrailingBackslash {
        /// The backslash itself.
        span: Span,
    },

    /// The command line holds no words (only blanks or comments).
    #[error("command line is empty")]
    Empty {
        /// The whole input.
        span: Span,
    },
}

impl LexerError {
    /// Get the span associated with this error.
    pub fn span(&self) -> Span {
        match self {
            Self::UnterminatedSingleQuote { span }
            | Self::UnterminatedDoubleQuote { span }
            | Self::TrailingBackslash { span }
            | Self::Empty { span } => *span,
        }
    }

    /// Rich diagnostic message with line/column info and a caret.
    pub fn diagnostic(&self, input: &str) -> String {
        diagnostic_context(input, self.span(), &self.to_string())
    }
}

#[cfg(test)]
#[path = "error_tests.rs"]
mod tests;
