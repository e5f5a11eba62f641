// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

use thiserror::Error;

/// All possible errors that can occur in the ghseed library.
///
/// Errors provide user-friendly messages with hints for common issues.
#[derive(Debug, Error)]
pub enum Error {
    #[error("phase directory not found: {0}\n  hint: set phase_dir in ghseed.toml or pass --phase-dir")]
    PhaseDirNotFound(String),

    #[error("issue not found: {0}")]
    IssueNotFound(String),

    #[error("invalid issue reference: '{0}'\n  hint: references look like M0-1 (milestone, dash, item)")]
    InvalidIssueRef(String),

    #[error("invalid issue number for {issue_ref}: '{value}'")]
    InvalidIssueNumber { issue_ref: String, value: String },

    #[error("already initialized at {0}")]
    AlreadyInitialized(String),

    #[error("failed to run {program}: {reason}\n  hint: install the GitHub CLI or set GHSEED_GH / gh in ghseed.toml")]
    GhSpawn { program: String, reason: String },

    #[error("gh exited with {status}: {stderr}")]
    GhFailed { status: String, stderr: String },

    #[error("gh timed out after {secs}s")]
    GhTimeout { secs: u64 },

    #[error("gh output did not contain an issue number: {output}")]
    GhNoIssueNumber { output: String },

    #[error("config error: {0}")]
    Config(String),

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("some issues failed: {created} created, {failed} failed")]
    PartialFailure { created: usize, failed: usize },
}

/// A specialized Result type for ghseed operations.
pub type Result<T> = std::result::Result<T, Error>;

impl From<gs_core::Error> for Error {
    fn from(e: gs_core::Error) -> Self {
        match e {
            gs_core::Error::InvalidIssueRef(s) => Error::InvalidIssueRef(s),
            gs_core::Error::InvalidIssueNumber { issue_ref, value } => {
                Error::InvalidIssueNumber { issue_ref, value }
            }
            gs_core::Error::Io(e) => Error::Io(e),
            gs_core::Error::Json(e) => Error::Json(e),
        }
    }
}

#[cfg(test)]
#[path = "error_tests.rs"]
mod tests;
