// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Error cases and their spans.

use crate::lexer::{Lexer, LexerError};
use crate::span::Span;

split_error_tests! {
    unterminated_single_quote: "echo 'abc" => LexerError::UnterminatedSingleQuote { .. },
    unterminated_single_lone: "'" => LexerError::UnterminatedSingleQuote { .. },
    unterminated_double_quote: "echo \"abc" => LexerError::UnterminatedDoubleQuote { .. },
    unterminated_double_escaped_close: r#""abc\""# => LexerError::UnterminatedDoubleQuote { .. },
    unterminated_double_after_single: "'a'\"b" => LexerError::UnterminatedDoubleQuote { .. },
    trailing_backslash: "echo \\" => LexerError::TrailingBackslash { .. },
    empty: "" => LexerError::Empty { .. },
    only_blanks: "   \t" => LexerError::Empty { .. },
    only_comment: "# comment" => LexerError::Empty { .. },
}

#[test]
fn unterminated_single_quote_span_runs_to_end() {
    let err = Lexer::split("smartctl -i 'abc").unwrap_err();
    assert_eq!(err.span(), Span::new(12, 16));
}

#[test]
fn unterminated_double_quote_span_starts_at_quote() {
    let err = Lexer::split("a \"b c").unwrap_err();
    assert_eq!(err.span(), Span::new(2, 6));
}

#[test]
fn trailing_backslash_span_covers_backslash() {
    let err = Lexer::split("ab\\").unwrap_err();
    assert_eq!(err.span(), Span::new(2, 3));
}

#[test]
fn empty_span_covers_input() {
    let err = Lexer::split("  ").unwrap_err();
    assert_eq!(err, LexerError::Empty { span: Span::new(0, 2) });
}

#[test]
fn quote_inside_other_quote_is_not_an_error() {
    assert_eq!(Lexer::split("\"'\" '\"'").unwrap(), ["'", "\""]);
}
