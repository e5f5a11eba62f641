// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

#![allow(clippy::unwrap_used)]

use super::*;
use clap::Parser;
use yare::parameterized;

#[parameterized(
    separate = { &["ghseed", "-C", "/tmp", "list"] },
    equals = { &["ghseed", "-C=/tmp", "list"] },
    attached = { &["ghseed", "-C/tmp", "list"] },
    long = { &["ghseed", "--directory", "/tmp", "list"] },
    long_equals = { &["ghseed", "--directory=/tmp", "list"] },
    after_subcommand = { &["ghseed", "list", "-C", "/tmp"] },
)]
fn parse_directory(args: &[&str]) {
    let cli = Cli::try_parse_from(args).unwrap();
    assert_eq!(cli.directory, Some("/tmp".to_string()));
}

#[test]
fn parse_no_directory() {
    let cli = Cli::try_parse_from(["ghseed", "list"]).unwrap();
    assert_eq!(cli.directory, None);
}
