// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Rendering of GitHub issue bodies and labels from parsed records.

use std::collections::BTreeMap;
use std::fmt::Write;

use crate::issue::IssueRecord;
use crate::phase::phase_number;

const STORY_FALLBACK: &str = "As a developer...";
const SECTION_FALLBACK: &str = "See phase file for details";

/// Sections appended to every issue for later planning passes.
const TRAILING_SECTIONS: &[(&str, &str)] = &[
    ("Clarifications", "*To be filled by clarify-ticket prompt*"),
    (
        "Implementation Plan",
        "*To be filled by plan-ticket prompt with 10 sections*",
    ),
    ("Plan Analysis", "*To be filled by analyze-plan prompt*"),
];

fn or_fallback<'a>(text: &'a str, fallback: &'a str) -> &'a str {
    if text.is_empty() {
        fallback
    } else {
        text
    }
}

/// Render the markdown body sent as the issue description.
pub fn render_body(issue: &IssueRecord) -> String {
    let mut body = String::new();

    if !issue.description.is_empty() {
        section(&mut body, "Description", &issue.description);
    }
    section(&mut body, "Story", or_fallback(&issue.story, STORY_FALLBACK));
    section(
        &mut body,
        "Acceptance Criteria",
        or_fallback(&issue.acceptance, SECTION_FALLBACK),
    );
    section(
        &mut body,
        "Files to Create/Modify",
        or_fallback(&issue.files, SECTION_FALLBACK),
    );
    section(
        &mut body,
        "Dependencies",
        &format!(
            "**Depends On**: {}\n**Blocks**: {}",
            issue.depends_on, issue.blocks
        ),
    );
    section(
        &mut body,
        "Testing",
        or_fallback(&issue.testing, SECTION_FALLBACK),
    );
    for (title, placeholder) in TRAILING_SECTIONS {
        section(&mut body, title, placeholder);
    }

    body
}

fn section(body: &mut String, title: &str, content: &str) {
    if !body.is_empty() {
        body.push('\n');
    }
    // Writing to a String cannot fail.
    let _ = writeln!(body, "## {title}\n{content}");
}

/// How record fields become GitHub labels.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LabelPolicy {
    /// Type labels renamed to labels that exist in the repository.
    pub aliases: BTreeMap<String, String>,
    /// Label every new issue starts with; empty to add none.
    pub initial: String,
}

impl Default for LabelPolicy {
    fn default() -> Self {
        let mut aliases = BTreeMap::new();
        aliases.insert("type:optimization".to_string(), "type:performance".to_string());
        LabelPolicy {
            aliases,
            initial: "ready".to_string(),
        }
    }
}

impl LabelPolicy {
    /// Labels for an issue: phase, type (aliased), priority, effort, initial label.
    pub fn labels(&self, issue: &IssueRecord) -> Vec<String> {
        let type_label = self
            .aliases
            .get(&issue.issue_type)
            .unwrap_or(&issue.issue_type);

        let candidates = [
            format!("phase-{}", phase_number(&issue.phase_name)),
            type_label.clone(),
            issue.priority.clone(),
            issue.effort.clone(),
            self.initial.clone(),
        ];

        let mut labels: Vec<String> = Vec::with_capacity(candidates.len());
        for label in candidates {
            if !label.is_empty() && !labels.contains(&label) {
                labels.push(label);
            }
        }
        labels
    }
}

#[cfg(test)]
#[path = "body_tests.rs"]
mod tests;
