// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

#![allow(clippy::unwrap_used)]
#![allow(clippy::panic)]

use super::*;
use clap::Parser;
use yare::parameterized;

#[parameterized(
    default = { &["ghseed", "list"], OutputFormat::Text },
    text = { &["ghseed", "list", "-o", "text"], OutputFormat::Text },
    json = { &["ghseed", "list", "--output", "json"], OutputFormat::Json },
)]
fn list_output_format(args: &[&str], expected: OutputFormat) {
    match Cli::try_parse_from(args).unwrap().command {
        Command::List { output, .. } => assert_eq!(output, expected),
        _ => panic!("expected list"),
    }
}

#[test]
fn list_rejects_unknown_format() {
    assert!(Cli::try_parse_from(["ghseed", "list", "-o", "yaml"]).is_err());
}

#[test]
fn list_phase_dir() {
    match Cli::try_parse_from(["ghseed", "list", "--phase-dir", "plans"])
        .unwrap()
        .command
    {
        Command::List { source, .. } => {
            assert_eq!(source.phase_dir.unwrap().to_str(), Some("plans"));
        }
        _ => panic!("expected list"),
    }
}
