// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Test macros for word splitter tests.

/// Generate splitting success tests.
///
/// ```ignore
/// split_tests! {
///     two_words: "echo hello" => ["echo", "hello"],
/// }
/// ```
macro_rules! split_tests {
    ($($name:ident: $input:expr => [$($word:expr),* $(,)?]),* $(,)?) => {
        $(
            #[test]
            fn $name() {
                let words = Lexer::new($input).words().expect(concat!("failed to split: ", $input));
                let expected: Vec<String> = vec![$(String::from($word)),*];
                assert_eq!(words, expected, "input: {:?}", $input);
            }
        )*
    };
}

/// Generate splitting error tests.
///
/// ```ignore
/// split_error_tests! {
///     unterminated: "'" => LexerError::UnterminatedSingleQuote { .. },
/// }
/// ```
macro_rules! split_error_tests {
    ($($name:ident: $input:expr => $error:pat),* $(,)?) => {
        $(
            #[test]
            fn $name() {
                let result = Lexer::split($input);
                assert!(
                    matches!(result, Err($error)),
                    "expected error {:?} for input {:?}, got {:?}",
                    stringify!($error), $input, result
                );
            }
        )*
    };
}

// Macros are exported via #[macro_use] in mod.rs
