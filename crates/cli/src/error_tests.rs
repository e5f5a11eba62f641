// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

#![allow(clippy::unwrap_used)]
#![allow(clippy::expect_used)]

use super::*;
use yare::parameterized;

#[parameterized(
    phase_dir = { Error::PhaseDirNotFound("docs/plan".into()), "docs/plan" },
    issue_not_found = { Error::IssueNotFound("M0-9".into()), "M0-9" },
    gh_spawn_hint = { Error::GhSpawn { program: "gh".into(), reason: "not found".into() }, "GHSEED_GH" },
    gh_failed = { Error::GhFailed { status: "exit status: 1".into(), stderr: "label not found".into() }, "label not found" },
    gh_timeout = { Error::GhTimeout { secs: 10 }, "10s" },
    no_number = { Error::GhNoIssueNumber { output: "ok".into() }, "issue number" },
    partial = { Error::PartialFailure { created: 3, failed: 2 }, "3 created, 2 failed" },
)]
fn test_error_display(err: Error, expected: &str) {
    assert!(err.to_string().contains(expected), "{err}");
}

#[test]
fn test_error_from_core_invalid_ref() {
    let err: Error = gs_core::Error::InvalidIssueRef("X".into()).into();
    assert!(matches!(err, Error::InvalidIssueRef(s) if s == "X"));
}

#[test]
fn test_error_from_core_invalid_number() {
    let err: Error = gs_core::Error::InvalidIssueNumber {
        issue_ref: "M0-1".into(),
        value: "x".into(),
    }
    .into();
    assert!(matches!(err, Error::InvalidIssueNumber { .. }));
}

#[test]
fn test_error_from_core_io() {
    let io = std::io::Error::new(std::io::ErrorKind::NotFound, "gone");
    let err: Error = gs_core::Error::Io(io).into();
    assert!(matches!(err, Error::Io(_)));
}

#[test]
fn test_error_from_io() {
    let io = std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied");
    let err: Error = io.into();
    assert!(err.to_string().contains("denied"));
}
