// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

mod args;

use crate::colors;
use crate::help;
use clap::{Parser, Subcommand, ValueEnum};
use clap_complete::Shell;

pub use args::{RunArgs, SourceArgs};

/// Output format for commands supporting structured output.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

#[derive(Parser)]
#[command(name = "ghseed")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(disable_version_flag = true)]
#[command(about = "Create GitHub issues from markdown phase plans")]
#[command(
    long_about = "Create GitHub issues from markdown phase plans.\n\n\
    Parses `### M#-#: Title` blocks from phase-*.md files, opens one GitHub issue per block \
    through the gh CLI, and records which issue number each reference received."
)]
#[command(help_template = help::template())]
#[command(before_help = help::commands())]
#[command(after_help = help::quickstart())]
#[command(styles = help::styles())]
// Unit field required by ArgAction::Version
#[allow(clippy::manual_non_exhaustive)]
pub struct Cli {
    /// Run as if ghseed was started in <path>
    #[arg(short = 'C', long = "directory", global = true, value_name = "path")]
    pub directory: Option<String>,

    /// Print version
    #[arg(short = 'v', short_alias = 'V', long = "version", action = clap::ArgAction::Version)]
    version: (),

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand)]
pub enum Command {
    /// Create GitHub issues for every block in the phase files
    #[command(after_help = colors::examples("\
Examples:
  ghseed create                         Create all issues, 1s apart
  ghseed create --dry-run               Show what would be created
  ghseed create --skip-existing         Resume, skipping refs already mapped
  ghseed create --only M0-1 --only M0-2 Create just these refs
  ghseed create -R acme/app             Target another repository"))]
    Create {
        #[command(flatten)]
        source: SourceArgs,

        #[command(flatten)]
        run: RunArgs,

        /// Print the issues that would be created without calling gh
        #[arg(long)]
        dry_run: bool,

        /// Skip refs already present in the mapping file and keep its entries
        #[arg(long)]
        skip_existing: bool,

        /// Only create these refs (repeat or comma-separate)
        #[arg(long, value_name = "REF", value_delimiter = ',')]
        only: Vec<String>,
    },

    /// List issues parsed from the phase files
    #[command(after_help = colors::examples("\
Examples:
  ghseed list                 Table of refs, labels and titles
  ghseed list -o json         Full records as JSON"))]
    List {
        #[command(flatten)]
        source: SourceArgs,

        /// Output format (text, json)
        #[arg(long = "output", short = 'o', value_enum, default_value = "text")]
        output: OutputFormat,
    },

    /// Show the title, labels, milestone and body that would be sent for a ref
    #[command(arg_required_else_help = true)]
    Show {
        /// Issue reference, e.g. M0-1
        issue_ref: String,

        #[command(flatten)]
        source: SourceArgs,
    },

    /// Write a default ghseed.toml
    Init {
        /// Directory to write ghseed.toml into (defaults to current directory)
        path: Option<String>,
    },

    /// Generate shell completion script
    #[command(after_help = colors::examples("\
Examples:
  ghseed completion bash > ~/.local/share/bash-completion/completions/ghseed
  ghseed completion zsh > ~/.zfunc/_ghseed"))]
    Completion {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: Shell,
    },
}

#[cfg(test)]
#[path = "../cli_tests/mod.rs"]
mod tests;
