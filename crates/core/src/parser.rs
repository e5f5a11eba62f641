// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Phase file parsing.
//!
//! A phase file is markdown with one `### M#-#: Title` heading per issue,
//! followed by bold-labelled fields:
//!
//! ```text
//! ### M0-1: Install toolchain
//!
//! **Type**: `type:chore`
//! **Priority**: `P1`
//! **Effort**: `effort:medium`
//! **Depends On**: None
//! **Blocks**: M0-2
//!
//! **Description**:
//! Install the pinned toolchain.
//!
//! **Acceptance Criteria**:
//! - [ ] `rustc --version` prints the pinned version
//! ```
//!
//! A block runs until the next line starting with `###` or the end of the file.
//! Fields that are missing (or empty) keep the defaults from [`IssueRecord::new`].

use regex::Regex;
use std::collections::HashSet;
use std::sync::LazyLock;

use crate::issue::{IssueRecord, IssueRef};

macro_rules! static_regex {
    ($name:ident, $pattern:expr) => {
        static $name: LazyLock<Regex> = LazyLock::new(|| match Regex::new($pattern) {
            Ok(re) => re,
            Err(_) => unreachable!("static regex pattern"),
        });
    };
}

static_regex!(HEADER_RE, r"(?m)^###\s+(M\d+-\d+):\s*(.+?)$");
static_regex!(NEXT_HEADING_RE, r"(?m)^###");

static_regex!(TYPE_RE, r"\*\*Type\*\*:\s*`([^`]+)`");
static_regex!(PRIORITY_RE, r"\*\*Priority\*\*:\s*`([^`]+)`");
static_regex!(EFFORT_RE, r"\*\*Effort\*\*:\s*`([^`]+)`");
static_regex!(DEPENDS_RE, r"(?s)\*\*Depends On\*\*:\s*(.+?)(?:\n\*\*|$)");
static_regex!(BLOCKS_RE, r"(?s)\*\*Blocks\*\*:\s*(.+?)(?:\n\*\*|$)");
static_regex!(
    DESCRIPTION_RE,
    r"(?s)\*\*Description\*\*:\s*\n(.+?)(?:\n\*\*Acceptance|\z)"
);
static_regex!(
    ACCEPTANCE_RE,
    r"(?s)\*\*Acceptance Criteria\*\*:\s*\n(.+?)(?:\n\*\*Files|\z)"
);
static_regex!(
    FILES_RE,
    r"(?s)\*\*Files to Create[^:]*\*\*:\s*\n(.+?)(?:\n\n|\n\*\*|$)"
);
static_regex!(TESTING_RE, r"(?s)\*\*Testing\*\*:\s*\n(.+?)(?:\n\*\*|$)");
static_regex!(STORY_RE, r"(?s)\*\*Story\*\*:\s*\n```\n(.+?)\n```");

/// Parse every issue block in a phase file, in file order.
pub fn parse_phase(phase_name: &str, content: &str) -> Vec<IssueRecord> {
    let mut issues = Vec::new();

    for caps in HEADER_RE.captures_iter(content) {
        let (Some(header), Some(issue_ref), Some(title)) = (caps.get(0), caps.get(1), caps.get(2))
        else {
            continue;
        };

        // Skip the newline that ends the heading; a heading on the last line has no body.
        let body_start = (header.end() + 1).min(content.len());
        let body_end = NEXT_HEADING_RE
            .find_at(content, body_start)
            .map_or(content.len(), |m| m.start());
        let body = &content[body_start..body_end];

        // The heading pattern is the ref pattern, so this only guards the invariant.
        let Ok(issue_ref) = issue_ref.as_str().parse::<IssueRef>() else {
            continue;
        };
        issues.push(parse_block(issue_ref, title.as_str().trim(), body, phase_name));
    }

    issues
}

fn parse_block(issue_ref: IssueRef, title: &str, block: &str, phase_name: &str) -> IssueRecord {
    let mut issue = IssueRecord::new(issue_ref, title, phase_name);

    let fields: [(&Regex, &mut String); 10] = [
        (&*TYPE_RE, &mut issue.issue_type),
        (&*PRIORITY_RE, &mut issue.priority),
        (&*EFFORT_RE, &mut issue.effort),
        (&*DEPENDS_RE, &mut issue.depends_on),
        (&*BLOCKS_RE, &mut issue.blocks),
        (&*DESCRIPTION_RE, &mut issue.description),
        (&*ACCEPTANCE_RE, &mut issue.acceptance),
        (&*FILES_RE, &mut issue.files),
        (&*TESTING_RE, &mut issue.testing),
        (&*STORY_RE, &mut issue.story),
    ];
    for (re, slot) in fields {
        if let Some(value) = extract_field(re, block) {
            *slot = value;
        }
    }

    issue
}

/// First capture group of `re` in `block`, trimmed; `None` when absent or blank.
fn extract_field(re: &Regex, block: &str) -> Option<String> {
    re.captures(block)
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str().trim())
        .filter(|s| !s.is_empty())
        .map(str::to_string)
}

/// References that appear on more than one issue heading.
pub fn find_duplicate_refs(issues: &[IssueRecord]) -> Vec<IssueRef> {
    let mut seen = HashSet::new();
    let mut duplicates = Vec::new();
    for issue in issues {
        if !seen.insert(&issue.issue_ref) && !duplicates.contains(&issue.issue_ref) {
            duplicates.push(issue.issue_ref.clone());
        }
    }
    duplicates
}

/// `(issue, reference)` pairs where a `Depends On` or `Blocks` field names a
/// reference that no parsed issue defines.
pub fn unknown_references(issues: &[IssueRecord]) -> Vec<(IssueRef, IssueRef)> {
    let known: HashSet<&IssueRef> = issues.iter().map(|i| &i.issue_ref).collect();
    let mut unknown = Vec::new();
    for issue in issues {
        let mentioned = issue.dependency_refs().into_iter().chain(issue.blocked_refs());
        for r in mentioned {
            if !known.contains(&r) {
                unknown.push((issue.issue_ref.clone(), r));
            }
        }
    }
    unknown
}

#[cfg(test)]
#[path = "parser_tests.rs"]
mod tests;
