// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Error types for gs-core operations.

use thiserror::Error;

/// All possible errors that can occur in gs-core operations.
#[derive(Debug, Error)]
pub enum Error {
    #[error("invalid issue reference: '{0}'\n  hint: references look like M0-1 (milestone, dash, item)")]
    InvalidIssueRef(String),

    #[error("invalid issue number for {issue_ref}: '{value}'")]
    InvalidIssueNumber { issue_ref: String, value: String },

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),
}

/// A specialized Result type for gs-core operations.
pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
#[path = "error_tests.rs"]
mod tests;
