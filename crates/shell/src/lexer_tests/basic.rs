// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Blank separation, escapes, line continuations, and comments.

use crate::lexer::Lexer;

split_tests! {
    empty_input: "" => [],
    only_blanks: " \t \n " => [],
    single_word: "smartctl" => ["smartctl"],
    two_words: "smartctl -a" => ["smartctl", "-a"],
    collapses_blank_runs: "smartctl   -i\t\t/dev/sda" => ["smartctl", "-i", "/dev/sda"],
    leading_and_trailing_blanks: "  smartctl -H  " => ["smartctl", "-H"],
    newline_separates: "smartctl\n-x" => ["smartctl", "-x"],
    carriage_return_is_not_blank: "a\r\nb" => ["a\r", "b"],
    lone_carriage_return_joins: "a\rb" => ["a\rb"],

    // No expansion of any kind
    dollar_is_literal: "echo $HOME ${PATH}" => ["echo", "$HOME", "${PATH}"],
    glob_is_literal: "ls *.log" => ["ls", "*.log"],
    operators_are_literal: "a|b;c&&d" => ["a|b;c&&d"],
    tilde_is_literal: "ls ~" => ["ls", "~"],

    // Backslash escapes
    escaped_space_joins: r"my\ disk" => ["my disk"],
    escaped_quote: r#"say \"hi\""# => ["say", "\"hi\""],
    escaped_backslash: r"a\\b" => [r"a\b"],
    escaped_ordinary_char: r"\a" => ["a"],

    // Line continuation
    continuation_between_words: "smartctl \\\n-a" => ["smartctl", "-a"],
    continuation_inside_word: "sm\\\nartctl" => ["smartctl"],
    backslash_cr_is_an_escape: "a \\\r\nb" => ["a", "\r", "b"],
    trailing_continuation: "a \\\n" => ["a"],

    // Comments
    comment_line: "# nothing here" => [],
    trailing_comment: "smartctl -a # all info" => ["smartctl", "-a"],
    comment_then_next_line: "# c\nsmartctl" => ["smartctl"],
    hash_inside_word: "a#b" => ["a#b"],
    hash_after_quote: "'a'#b" => ["a#b"],
}

#[test]
fn split_returns_words() {
    assert_eq!(Lexer::split("echo hello").unwrap(), ["echo", "hello"]);
}
