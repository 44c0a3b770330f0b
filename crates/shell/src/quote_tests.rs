// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Quoting tests, including the split/quote inverse property.

use super::*;
use crate::split;
use proptest::prelude::*;

#[yare::parameterized(
    plain        = { "/dev/sda",       "/dev/sda" },
    option       = { "--json=o",       "--json=o" },
    empty        = { "",               "''" },
    blank        = { "my disk",        "'my disk'" },
    apostrophe   = { "it's",           "'it'\\''s'" },
    dollar       = { "$HOME",          "'$HOME'" },
    hash         = { "#1",             "'#1'" },
)]
fn quoting(word: &str, expected: &str) {
    assert_eq!(quote(word), expected);
}

#[test]
fn join_quotes_every_word() {
    assert_eq!(join(["smartctl", "-i", "/dev/my disk"]), "smartctl -i '/dev/my disk'");
}

proptest! {
    /// Invariant: splitting a quoted word gives back exactly that word.
    #[test]
    fn split_inverts_quote(word in any::<String>()) {
        prop_assert_eq!(split(&quote(&word)).unwrap(), vec![word]);
    }

    /// Invariant: splitting a joined argument vector gives back the vector.
    #[test]
    fn split_inverts_join(words in prop::collection::vec(any::<String>(), 1..6)) {
        prop_assert_eq!(split(&join(&words)).unwrap(), words);
    }
}
