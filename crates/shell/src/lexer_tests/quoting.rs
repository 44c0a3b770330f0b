// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Single and double quote handling.

use crate::lexer::Lexer;

// =============================================================================
// Single Quotes
// =============================================================================

split_tests! {
    single_quote_basic: "'hello'" => ["hello"],
    single_quote_with_spaces: "'hello world'" => ["hello world"],
    single_quote_empty: "''" => [""],
    single_quote_empty_between_words: "a '' b" => ["a", "", "b"],
    single_quote_preserves_dollar: "'$VAR'" => ["$VAR"],
    single_quote_preserves_backslash: r"'back\slash'" => [r"back\slash"],
    single_quote_preserves_double_quote: r#"'say "hi"'"# => [r#"say "hi""#],
    single_quote_preserves_newline: "'a\nb'" => ["a\nb"],
    single_quote_preserves_hash: "'# not a comment'" => ["# not a comment"],
    single_quote_concatenates: "cmd'arg'" => ["cmdarg"],
    single_quote_escape_idiom: r"'it'\''s'" => ["it's"],
}

// =============================================================================
// Double Quotes
// =============================================================================

split_tests! {
    double_quote_basic: "\"hello\"" => ["hello"],
    double_quote_with_spaces: "\"/dev/disk/by-id/ata disk\"" => ["/dev/disk/by-id/ata disk"],
    double_quote_empty: "\"\"" => [""],
    double_quote_keeps_dollar_literal: "\"$HOME\"" => ["$HOME"],
    double_quote_escaped_quote: r#""say \"hi\"""# => [r#"say "hi""#],
    double_quote_escaped_backslash: r#""a\\b""# => [r"a\b"],
    double_quote_escaped_dollar: r#""\$x""# => ["$x"],
    double_quote_escaped_backtick: r#""\`x""# => ["`x"],
    double_quote_other_backslash_kept: r#""a\nb""# => [r"a\nb"],
    double_quote_continuation: "\"a\\\nb\"" => ["ab"],
    double_quote_preserves_single_quote: "\"it's\"" => ["it's"],
    double_quote_concatenates: "-d\"sat,12\"" => ["-dsat,12"],
}

// =============================================================================
// Mixed
// =============================================================================

split_tests! {
    mixed_segments_one_word: r#"a'b'"c"\ d"# => ["abc d"],
    typical_smartctl_line: "smartctl -d 'sat,auto' -x --json=o \"/dev/sda\"" => [
        "smartctl", "-d", "sat,auto", "-x", "--json=o", "/dev/sda",
    ],
}
