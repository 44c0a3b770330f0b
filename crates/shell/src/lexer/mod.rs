// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Word splitter for command lines.

mod quotes;

use crate::error::LexerError;
use crate::span::Span;

/// Splits a command line into words following `/bin/sh` quoting rules.
///
/// Blanks separate words, quoted and unquoted segments that touch are
/// concatenated, and an unquoted `#` at the start of a word comments out the
/// rest of the line. Nothing is expanded.
pub struct Lexer<'a> {
    /// The input string being split.
    input: &'a str,
    /// Peekable iterator over character indices.
    chars: std::iter::Peekable<std::str::CharIndices<'a>>,
}

impl<'a> Lexer<'a> {
    /// Create a new lexer for the given input.
    pub fn new(input: &'a str) -> Self {
        Self { input, chars: input.char_indices().peekable() }
    }

    /// Split the entire input, rejecting input without any words.
    pub fn split(input: &str) -> Result<Vec<String>, LexerError> {
        let words = Lexer::new(input).words()?;
        if words.is_empty() {
            return Err(LexerError::Empty { span: Span::new(0, input.len()) });
        }
        Ok(words)
    }

    /// Consume the lexer and return every word. Empty input yields no words.
    pub fn words(mut self) -> Result<Vec<String>, LexerError> {
        let mut words = Vec::new();
        while let Some(word) = self.next_word()? {
            words.push(word);
        }
        Ok(words)
    }

    /// Peek at the next character without consuming it.
    #[inline]
    fn peek_char(&mut self) -> Option<char> {
        self.chars.peek().map(|(_, c)| *c)
    }

    /// Try to consume a line continuation (backslash followed by a newline).
    fn consume_line_continuation(&mut self) -> bool {
        let Some('\\') = self.peek_char() else {
            return false;
        };

        let mut lookahead = self.chars.clone();
        lookahead.next(); // skip backslash

        if lookahead.peek().map(|(_, c)| *c) != Some('\n') {
            return false;
        }
        self.chars.next();
        self.chars.next();
        true
    }

    /// Skip blanks, line continuations, and comments.
    fn skip_separators(&mut self) {
        loop {
            match self.peek_char() {
                Some(ch) if Self::is_blank(ch) => {
                    self.chars.next();
                }
                Some('\\') if self.consume_line_continuation() => {}
                Some('#') => {
                    while let Some(ch) = self.peek_char() {
                        if ch == '\n' {
                            break;
                        }
                        self.chars.next();
                    }
                }
                _ => break,
            }
        }
    }

    /// Read the next word, or None at end of input.
    fn next_word(&mut self) -> Result<Option<String>, LexerError> {
        self.skip_separators();
        if self.chars.peek().is_none() {
            return Ok(None);
        }

        let mut word = String::new();
        while let Some(&(pos, ch)) = self.chars.peek() {
            match ch {
                _ if Self::is_blank(ch) => break,
                '\'' => self.lex_single_quote(pos, &mut word)?,
                '"' => self.lex_double_quote(pos, &mut word)?,
                '\\' => self.lex_escape(pos, &mut word)?,
                _ => {
                    word.push(ch);
                    self.chars.next();
                }
            }
        }
        Ok(Some(word))
    }

    /// Unquoted backslash: the next character is literal, backslash-newline
    /// disappears.
    fn lex_escape(&mut self, pos: usize, word: &mut String) -> Result<(), LexerError> {
        if self.consume_line_continuation() {
            return Ok(());
        }
        self.chars.next(); // consume backslash
        match self.chars.next() {
            Some((_, escaped)) => {
                word.push(escaped);
                Ok(())
            }
            None => Err(LexerError::TrailingBackslash { span: Span::new(pos, pos + 1) }),
        }
    }

    #[inline]
    fn is_blank(ch: char) -> bool {
        matches!(ch, ' ' | '\t' | '\n')
    }
}

#[cfg(test)]
#[path = "../lexer_tests/mod.rs"]
mod tests;
