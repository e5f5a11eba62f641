// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

use std::io::{self, Write};

use gs_core::{IssueRecord, IssueRef};
use serde::Serialize;

use crate::cli::{OutputFormat, SourceArgs};
use crate::colors;
use crate::config::Config;
use crate::error::Result;

use super::{load_issues, Context};

/// JSON shape of one listed issue.
#[derive(Serialize)]
struct ListedIssue<'a> {
    #[serde(flatten)]
    issue: &'a IssueRecord,
    labels: Vec<String>,
    milestone: String,
    depends_on_refs: Vec<IssueRef>,
    blocks_refs: Vec<IssueRef>,
}

pub fn run(ctx: &Context, source: SourceArgs, output: OutputFormat) -> Result<()> {
    let issues = load_issues(&ctx.phase_dir(&source))?;
    let stdout = io::stdout();
    let mut out = stdout.lock();
    run_impl(&ctx.project.config, &issues, output, &mut out)
}

/// Internal implementation that accepts parsed issues for testing.
pub(crate) fn run_impl(
    config: &Config,
    issues: &[IssueRecord],
    output: OutputFormat,
    out: &mut impl Write,
) -> Result<()> {
    match output {
        OutputFormat::Text => {
            for issue in issues {
                writeln!(out, "{}", format_line(issue))?;
            }
            writeln!(out, "\n{} issues", issues.len())?;
        }
        OutputFormat::Json => {
            let policy = config.label_policy();
            let listed: Vec<ListedIssue> = issues
                .iter()
                .map(|issue| ListedIssue {
                    issue,
                    labels: policy.labels(issue),
                    milestone: config.milestone_for(&issue.phase_name),
                    depends_on_refs: issue.dependency_refs(),
                    blocks_refs: issue.blocked_refs(),
                })
                .collect();
            writeln!(out, "{}", serde_json::to_string_pretty(&listed)?)?;
        }
    }
    Ok(())
}

/// One text row: `- M0-1 [P1 type:feature effort:small] Title (after M0-0)`.
pub(crate) fn format_line(issue: &IssueRecord) -> String {
    let mut line = format!(
        "- {} {} {}",
        colors::literal(issue.issue_ref.as_str()),
        colors::context(&format!(
            "[{} {} {}]",
            issue.priority, issue.issue_type, issue.effort
        )),
        issue.title
    );
    let deps = issue.dependency_refs();
    if !deps.is_empty() {
        let deps: Vec<&str> = deps.iter().map(IssueRef::as_str).collect();
        line.push_str(&format!(" (after {})", deps.join(", ")));
    }
    line
}

#[cfg(test)]
#[path = "list_tests.rs"]
mod tests;
