// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! [`IssueTracker`] over the GitHub CLI (`gh`).

use std::process::Command;
use std::time::Duration;

use crate::config::Config;
use crate::error::{Error, Result};

use super::process::{run_with_timeout, ProcessOutput};
use super::{parse_issue_number, IssueTracker, NewIssue};

/// Longest stderr/stdout excerpt kept in error messages.
const EXCERPT_CHARS: usize = 100;

/// Runs `gh issue create` / `gh issue edit` as subprocesses.
#[derive(Debug, Clone)]
pub struct GhCli {
    program: String,
    repo: Option<String>,
    timeout: Duration,
}

impl GhCli {
    pub fn new(program: impl Into<String>, repo: Option<String>, timeout: Duration) -> Self {
        GhCli {
            program: program.into(),
            repo,
            timeout,
        }
    }

    /// Build from configuration; `GHSEED_GH` overrides the configured binary.
    pub fn from_config(config: &Config) -> Self {
        let program = crate::env::gh_binary().unwrap_or_else(|| config.gh.clone());
        Self::new(program, config.repo.clone(), config.timeout())
    }

    /// Arguments for `gh issue create`.
    pub fn create_args(&self, issue: &NewIssue) -> Vec<String> {
        let mut args: Vec<String> = vec![
            "issue".into(),
            "create".into(),
            "--title".into(),
            issue.title.clone(),
            "--body".into(),
            issue.body.clone(),
        ];
        for label in &issue.labels {
            args.push("--label".into());
            args.push(label.clone());
        }
        self.push_repo(&mut args);
        args
    }

    /// Arguments for `gh issue edit N --milestone M`.
    pub fn milestone_args(&self, number: u64, milestone: &str) -> Vec<String> {
        let mut args: Vec<String> = vec![
            "issue".into(),
            "edit".into(),
            number.to_string(),
            "--milestone".into(),
            milestone.to_string(),
        ];
        self.push_repo(&mut args);
        args
    }

    fn push_repo(&self, args: &mut Vec<String>) {
        if let Some(repo) = &self.repo {
            args.push("--repo".into());
            args.push(repo.clone());
        }
    }

    fn run(&self, args: Vec<String>) -> Result<ProcessOutput> {
        tracing::debug!(program = %self.program, subcommand = ?args.get(..2), "running gh");
        let mut command = Command::new(&self.program);
        command.args(args);
        let output = run_with_timeout(command, self.timeout)?;
        if !output.status.success() {
            return Err(Error::GhFailed {
                status: output.status.to_string(),
                stderr: excerpt(&output.stderr),
            });
        }
        Ok(output)
    }
}

impl IssueTracker for GhCli {
    fn create_issue(&self, issue: &NewIssue) -> Result<u64> {
        let output = crate::time_phase!("gh::create", self.run(self.create_args(issue)))?;
        parse_issue_number(&output.stdout).ok_or_else(|| Error::GhNoIssueNumber {
            output: excerpt(&output.stdout),
        })
    }

    fn set_milestone(&self, number: u64, milestone: &str) -> Result<()> {
        crate::time_phase!(
            "gh::milestone",
            self.run(self.milestone_args(number, milestone))
        )?;
        Ok(())
    }
}

fn excerpt(text: &str) -> String {
    text.trim().chars().take(EXCERPT_CHARS).collect()
}

#[cfg(test)]
#[path = "cli_tests.rs"]
mod tests;
