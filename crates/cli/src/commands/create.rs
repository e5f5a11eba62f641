// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

use std::fmt;
use std::io::{self, Write};
use std::path::Path;

use gs_core::{IssueMapping, IssueRecord, IssueRef};

use crate::cli::{RunArgs, SourceArgs};
use crate::colors;
use crate::config::Config;
use crate::error::{Error, Result};
use crate::gh::{GhCli, IssueTracker, NewIssue};

use super::{collect_issues, load_phases, read_mapping, write_mapping, Context};

/// Switches that change what a create run does.
#[derive(Debug, Clone, Default)]
pub struct CreateOptions {
    pub dry_run: bool,
    pub skip_existing: bool,
    pub only: Vec<IssueRef>,
}

/// Tally of one run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Summary {
    pub created: usize,
    pub existing: usize,
    pub failed: usize,
}

pub fn run(
    ctx: &Context,
    source: SourceArgs,
    run: RunArgs,
    dry_run: bool,
    skip_existing: bool,
    only: Vec<String>,
) -> Result<()> {
    let config = apply_overrides(ctx.project.config.clone(), &run);
    let phase_dir = ctx.phase_dir(&source);
    let mapping_path = ctx.mapping_file(run.mapping.as_deref());
    let only = only
        .iter()
        .map(|r| r.trim().parse::<IssueRef>())
        .collect::<std::result::Result<Vec<_>, _>>()?;
    let options = CreateOptions {
        dry_run,
        skip_existing,
        only,
    };

    let stdout = io::stdout();
    let mut out = stdout.lock();

    let phases = load_phases(&phase_dir)?;
    for phase in &phases {
        writeln!(out, "Parsed {}: {} issues", phase.file_name, phase.issues.len())?;
    }
    let issues = collect_issues(phases);
    writeln!(out, "\nTotal issues parsed: {}", issues.len())?;

    let tracker = GhCli::from_config(&config);
    run_impl(&tracker, &config, issues, &mapping_path, &options, &mut out)
}

/// Flags take precedence over `ghseed.toml`.
pub(crate) fn apply_overrides(mut config: Config, run: &RunArgs) -> Config {
    if let Some(delay_ms) = run.delay_ms {
        config.delay_ms = delay_ms;
    }
    if let Some(timeout_secs) = run.timeout_secs {
        config.timeout_secs = timeout_secs;
    }
    if let Some(repo) = &run.repo {
        config.repo = Some(repo.clone());
    }
    config
}

/// Internal implementation that accepts the tracker for testing.
pub(crate) fn run_impl(
    tracker: &dyn IssueTracker,
    config: &Config,
    issues: Vec<IssueRecord>,
    mapping_path: &Path,
    options: &CreateOptions,
    out: &mut impl Write,
) -> Result<()> {
    let issues = select(issues, &options.only)?;
    let existing = if options.skip_existing {
        read_mapping(mapping_path)?
    } else {
        IssueMapping::new()
    };

    if options.dry_run {
        return preview(config, &issues, &existing, out);
    }

    let mut progress = Progress::new(out);
    progress.print(format_args!(
        "Creating GitHub issues ({}ms apart)...\n\n",
        config.delay_ms
    ));
    let mut mapping = existing.clone();
    let summary = create_all(tracker, config, &issues, &existing, &mut mapping, &mut progress);

    progress.print(format_args!(
        "\nCreated {}/{} issues\n",
        summary.created,
        issues.len()
    ));
    write_mapping(&mapping, mapping_path)?;
    progress.print(format_args!(
        "Issue mapping saved to {}\n",
        mapping_path.display()
    ));
    tracing::info!(
        created = summary.created,
        existing = summary.existing,
        failed = summary.failed,
        "run finished"
    );

    if summary.failed > 0 {
        return Err(Error::PartialFailure {
            created: summary.created,
            failed: summary.failed,
        });
    }
    Ok(())
}

/// Progress lines for a run that is creating issues.
///
/// Once issues exist on GitHub the mapping must still be written, so a failed
/// write (a closed pipe or terminal) is logged once and later output dropped.
pub(crate) struct Progress<'a, W: Write> {
    out: &'a mut W,
    broken: bool,
}

impl<'a, W: Write> Progress<'a, W> {
    pub(crate) fn new(out: &'a mut W) -> Self {
        Progress { out, broken: false }
    }

    pub(crate) fn print(&mut self, args: fmt::Arguments<'_>) {
        if self.broken {
            return;
        }
        if let Err(e) = self.out.write_fmt(args).and_then(|()| self.out.flush()) {
            tracing::warn!(error = %e, "progress output failed; continuing without it");
            self.broken = true;
        }
    }
}

/// Restrict `issues` to the requested refs, keeping file order.
pub(crate) fn select(issues: Vec<IssueRecord>, only: &[IssueRef]) -> Result<Vec<IssueRecord>> {
    if only.is_empty() {
        return Ok(issues);
    }
    if let Some(missing) = only
        .iter()
        .find(|r| !issues.iter().any(|i| &i.issue_ref == *r))
    {
        return Err(Error::IssueNotFound(missing.to_string()));
    }
    Ok(issues
        .into_iter()
        .filter(|i| only.contains(&i.issue_ref))
        .collect())
}

/// Create issues one at a time, recording each number in `mapping`.
///
/// A failure is logged and counted; the remaining issues are still attempted.
/// Refs in `existing` (loaded from an earlier run) are reported and skipped.
/// A ref defined twice in the plan is created twice and the mapping keeps the
/// later number. The configured delay separates consecutive gh calls.
pub(crate) fn create_all<W: Write>(
    tracker: &dyn IssueTracker,
    config: &Config,
    issues: &[IssueRecord],
    existing: &IssueMapping,
    mapping: &mut IssueMapping,
    progress: &mut Progress<'_, W>,
) -> Summary {
    let labels = config.label_policy();
    let total = issues.len();
    let mut summary = Summary::default();
    let mut called = false;

    for (i, issue) in issues.iter().enumerate() {
        progress.print(format_args!(
            "[{:3}/{}] {:8} -> ",
            i + 1,
            total,
            issue.issue_ref.as_str()
        ));

        if let Some(number) = existing.get(&issue.issue_ref) {
            progress.print(format_args!(
                "#{} {}\n",
                number,
                colors::context("(existing)")
            ));
            summary.existing += 1;
            continue;
        }

        if called && !config.delay().is_zero() {
            std::thread::sleep(config.delay());
        }
        called = true;

        let new_issue = NewIssue::from_record(issue, &labels);
        match tracker.create_issue(&new_issue) {
            Ok(number) => {
                progress.print(format_args!(
                    "{}\n",
                    colors::success(&format!("#{}", number))
                ));
                if let Some(previous) = mapping.insert(&issue.issue_ref, number) {
                    tracing::warn!(
                        issue_ref = %issue.issue_ref,
                        previous,
                        number,
                        "reference created again; mapping keeps the newer number"
                    );
                }
                summary.created += 1;

                let milestone = config.milestone_for(&issue.phase_name);
                if let Err(e) = tracker.set_milestone(number, &milestone) {
                    tracing::warn!(
                        issue_ref = %issue.issue_ref,
                        number,
                        milestone = %milestone,
                        error = %e,
                        "failed to set milestone"
                    );
                }
            }
            Err(e) => {
                progress.print(format_args!("{}\n", colors::failure("FAILED")));
                tracing::warn!(issue_ref = %issue.issue_ref, error = %e, "failed to create issue");
                summary.failed += 1;
            }
        }
    }

    summary
}

/// Print what a run would send without calling gh.
fn preview(
    config: &Config,
    issues: &[IssueRecord],
    mapping: &IssueMapping,
    out: &mut impl Write,
) -> Result<()> {
    let labels = config.label_policy();
    let total = issues.len();
    let mut pending = 0;

    for (i, issue) in issues.iter().enumerate() {
        let new_issue = NewIssue::from_record(issue, &labels);
        write!(out, "[{:3}/{}] {}", i + 1, total, new_issue.title)?;
        match mapping.get(&issue.issue_ref) {
            Some(number) => {
                writeln!(out, " {}", colors::context(&format!("(existing #{})", number)))?;
                continue;
            }
            None => writeln!(out)?,
        }
        pending += 1;
        writeln!(out, "          labels: {}", new_issue.labels.join(", "))?;
        writeln!(
            out,
            "          milestone: {}",
            config.milestone_for(&issue.phase_name)
        )?;
    }

    writeln!(out, "\nDry run: {} of {} issues would be created", pending, total)?;
    Ok(())
}

#[cfg(test)]
#[path = "create_tests.rs"]
mod tests;
