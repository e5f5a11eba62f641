// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! ghseed - create GitHub issues from markdown phase plans.
//!
//! This crate provides the `ghseed` CLI: it parses `### M#-#: Title` blocks
//! out of `phase-*.md` files (via [`gs_core`]), opens one GitHub issue per
//! block through the `gh` CLI, and writes a JSON file mapping each reference
//! to the issue number GitHub assigned.
//!
//! # Main Components
//!
//! - [`Config`] - Optional `ghseed.toml` settings (paths, delay, labels, milestones)
//! - [`gh`] - The [`IssueTracker`](gh::IssueTracker) seam and its `gh` implementation
//! - [`Error`] - Error types for all operations
//!
//! Commands can be run without spawning a process:
//!
//! ```rust,ignore
//! use clap::Parser;
//! use ghseed::{run, Cli};
//!
//! let cli = Cli::parse_from(["ghseed", "-C", "repo", "create", "--dry-run"]);
//! run(cli)?;
//! ```

mod cli;
pub mod colors;
mod commands;
pub mod help;
pub mod logging;
pub mod timings;

pub mod config;
pub mod env;
pub mod error;
pub mod gh;

pub use cli::{Cli, Command, OutputFormat, RunArgs, SourceArgs};
pub use config::{find_config, init_config, Config, Project};
pub use error::{Error, Result};

use clap::CommandFactory;
use clap_complete::generate;

use commands::Context;

/// Execute a parsed command line. This is the main entry point for library
/// users and provides a testable way to run commands without process execution.
pub fn run(cli: Cli) -> Result<()> {
    let directory = cli.directory.as_deref();
    match cli.command {
        Command::Create {
            source,
            run,
            dry_run,
            skip_existing,
            only,
        } => {
            let ctx = Context::open(directory)?;
            commands::create::run(&ctx, source, run, dry_run, skip_existing, only)
        }
        Command::List { source, output } => {
            let ctx = Context::open(directory)?;
            commands::list::run(&ctx, source, output)
        }
        Command::Show { issue_ref, source } => {
            let ctx = Context::open(directory)?;
            commands::show::run(&ctx, &issue_ref, source)
        }
        Command::Init { path } => commands::init::run(directory, path),
        Command::Completion { shell } => {
            let mut cmd = Cli::command();
            generate(shell, &mut cmd, "ghseed", &mut std::io::stdout());
            Ok(())
        }
    }
}

#[cfg(test)]
#[path = "lib_tests.rs"]
mod tests;
