// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Quote handling (single and double quoted segments).

use super::{Lexer, LexerError};
use crate::span::Span;

impl Lexer<'_> {
    /// Everything up to the closing `'` is literal.
    pub(super) fn lex_single_quote(
        &mut self,
        start: usize,
        word: &mut String,
    ) -> Result<(), LexerError> {
        self.chars.next();
        for (_, ch) in self.chars.by_ref() {
            if ch == '\'' {
                return Ok(());
            }
            word.push(ch);
        }
        Err(LexerError::UnterminatedSingleQuote { span: Span::new(start, self.input.len()) })
    }

    /// Backslash only escapes `"`, `\`, `$`, `` ` `` and newline inside double
    /// quotes; before any other character it stays in the word.
    pub(super) fn lex_double_quote(
        &mut self,
        start: usize,
        word: &mut String,
    ) -> Result<(), LexerError> {
        self.chars.next();
        while let Some((_, ch)) = self.chars.next() {
            match ch {
                '"' => return Ok(()),
                '\\' => match self.peek_char() {
                    Some(esc @ ('"' | '\\' | '$' | '`')) => {
                        word.push(esc);
                        self.chars.next();
                    }
                    Some('\n') => {
                        self.chars.next();
                    }
                    _ => word.push('\\'),
                },
                _ => word.push(ch),
            }
        }
        Err(LexerError::UnterminatedDoubleQuote { span: Span::new(start, self.input.len()) })
    }
}
