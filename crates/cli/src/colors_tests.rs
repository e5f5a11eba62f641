// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

use super::*;
use yare::parameterized;

#[parameterized(
    command_and_description = { "ghseed list  List issues", Some(11) },
    wide_gap = { "ghseed create --dry-run     Preview", Some(23) },
    single_spaces = { "ghseed show M0-1", None },
    trailing_spaces = { "ghseed list   ", None },
    empty = { "", None },
)]
fn test_find_description_start(line: &str, expected: Option<usize>) {
    assert_eq!(find_description_start(line), expected);
}
