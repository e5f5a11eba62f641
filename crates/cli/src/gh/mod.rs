// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Issue tracker access.
//!
//! Commands talk to GitHub through the [`IssueTracker`] trait; [`GhCli`] is
//! the implementation that shells out to the GitHub CLI.

mod cli;
mod process;

pub use cli::GhCli;
pub use process::{run_with_timeout, ProcessOutput};

use regex::Regex;
use std::sync::LazyLock;

use gs_core::{render_body, IssueRecord, LabelPolicy};

use crate::error::Result;

static ISSUE_URL_RE: LazyLock<Regex> = LazyLock::new(|| match Regex::new(r"/issues/(\d+)") {
    Ok(re) => re,
    Err(_) => unreachable!("static regex pattern"),
});
static ISSUE_HASH_RE: LazyLock<Regex> = LazyLock::new(|| match Regex::new(r"#(\d+)") {
    Ok(re) => re,
    Err(_) => unreachable!("static regex pattern"),
});

/// Everything needed to open one issue.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewIssue {
    pub title: String,
    pub body: String,
    pub labels: Vec<String>,
}

impl NewIssue {
    /// Build the issue for a parsed record.
    pub fn from_record(issue: &IssueRecord, labels: &LabelPolicy) -> Self {
        NewIssue {
            title: issue.github_title(),
            body: render_body(issue),
            labels: labels.labels(issue),
        }
    }
}

/// Creates issues and assigns milestones.
pub trait IssueTracker {
    /// Open an issue, returning the number the tracker assigned.
    fn create_issue(&self, issue: &NewIssue) -> Result<u64>;

    /// Put an existing issue into a milestone.
    fn set_milestone(&self, number: u64, milestone: &str) -> Result<()>;
}

/// Issue number from `gh issue create` output.
///
/// Accepts the issue URL gh prints (`https://github.com/o/r/issues/42`)
/// or a `#42` token.
pub fn parse_issue_number(output: &str) -> Option<u64> {
    ISSUE_URL_RE
        .captures(output)
        .or_else(|| ISSUE_HASH_RE.captures(output))
        .and_then(|caps| caps[1].parse().ok())
}

#[cfg(test)]
#[path = "mod_tests.rs"]
mod tests;
