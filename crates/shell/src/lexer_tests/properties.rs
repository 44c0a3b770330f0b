// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Property-based tests for splitter invariants.

use crate::lexer::Lexer;
use proptest::prelude::*;

/// Strategy for words that need no quoting.
fn plain_word() -> impl Strategy<Value = String> {
    "[a-zA-Z0-9_./=-]{1,12}".prop_map(String::from)
}

proptest! {
    /// Invariant: arbitrary input never panics; it either splits or errors.
    #[test]
    fn never_panics(input in any::<String>()) {
        let _ = Lexer::new(&input).words();
    }

    /// Invariant: blank-joined plain words split back into the same words.
    #[test]
    fn plain_words_round_trip(
        words in prop::collection::vec(plain_word(), 1..8),
        sep in "[ \t]{1,3}",
    ) {
        let input = words.join(&sep);
        prop_assert_eq!(Lexer::split(&input).unwrap(), words);
    }

    /// Invariant: surrounding blanks never change the result.
    #[test]
    fn surrounding_blanks_ignored(word in plain_word(), pad in "[ \t\n]{0,4}") {
        let padded = format!("{pad}{word}{pad}");
        prop_assert_eq!(Lexer::split(&padded).unwrap(), vec![word]);
    }
}
