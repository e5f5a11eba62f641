// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

use std::io::{self, Write};

use gs_core::{IssueRecord, IssueRef};

use crate::cli::SourceArgs;
use crate::colors;
use crate::config::Config;
use crate::error::{Error, Result};
use crate::gh::NewIssue;

use super::{load_issues, Context};

pub fn run(ctx: &Context, issue_ref: &str, source: SourceArgs) -> Result<()> {
    let issue_ref: IssueRef = issue_ref.trim().parse()?;
    let issues = load_issues(&ctx.phase_dir(&source))?;
    let stdout = io::stdout();
    let mut out = stdout.lock();
    run_impl(&ctx.project.config, &issues, &issue_ref, &mut out)
}

/// Print the issue exactly as `create` would send it.
pub(crate) fn run_impl(
    config: &Config,
    issues: &[IssueRecord],
    issue_ref: &IssueRef,
    out: &mut impl Write,
) -> Result<()> {
    let issue = issues
        .iter()
        .find(|i| &i.issue_ref == issue_ref)
        .ok_or_else(|| Error::IssueNotFound(issue_ref.to_string()))?;
    let new_issue = NewIssue::from_record(issue, &config.label_policy());

    writeln!(out, "{} {}", colors::header("Title:"), new_issue.title)?;
    writeln!(
        out,
        "{} {}",
        colors::header("Labels:"),
        new_issue.labels.join(", ")
    )?;
    writeln!(
        out,
        "{} {}",
        colors::header("Milestone:"),
        config.milestone_for(&issue.phase_name)
    )?;
    writeln!(out, "{} {}", colors::header("Phase:"), issue.phase_name)?;
    writeln!(out)?;
    write!(out, "{}", new_issue.body)?;
    Ok(())
}

#[cfg(test)]
#[path = "show_tests.rs"]
mod tests;
