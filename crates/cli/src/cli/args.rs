// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Shared argument structs for CLI commands.
//!
//! These structs are used with `#[command(flatten)]` to reduce duplication
//! across commands that read phase files.

use clap::Args;
use std::path::PathBuf;

/// Where to read phase files from.
#[derive(Args, Clone, Debug, Default)]
pub struct SourceArgs {
    /// Directory containing phase-*.md files (overrides phase_dir in ghseed.toml)
    #[arg(long, value_name = "DIR")]
    pub phase_dir: Option<PathBuf>,
}

/// Settings that shape the gh calls made by `create`.
#[derive(Args, Clone, Debug, Default)]
pub struct RunArgs {
    /// Mapping file to write (overrides mapping_file in ghseed.toml)
    #[arg(long, value_name = "FILE")]
    pub mapping: Option<PathBuf>,

    /// Milliseconds to wait between issues
    #[arg(long, value_name = "MS")]
    pub delay_ms: Option<u64>,

    /// Seconds before a gh invocation is abandoned
    #[arg(long, value_name = "SECS", value_parser = clap::value_parser!(u64).range(1..))]
    pub timeout_secs: Option<u64>,

    /// Repository to create issues in (owner/name)
    #[arg(long, short = 'R', value_name = "OWNER/REPO")]
    pub repo: Option<String>,
}
