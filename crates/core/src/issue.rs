// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Issue records parsed from phase files.
//!
//! An [`IssueRecord`] is the single transient structure flowing through a run:
//! parsed from markdown, rendered into a GitHub issue, then forgotten except
//! for its reference and the number GitHub assigned.

use regex::Regex;
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::fmt;
use std::hash::{Hash, Hasher};
use std::str::FromStr;
use std::sync::LazyLock;

use crate::error::{Error, Result};

/// Default `type:` label when a block has no `**Type**` field.
pub const DEFAULT_TYPE: &str = "type:feature";
/// Default priority label when a block has no `**Priority**` field.
pub const DEFAULT_PRIORITY: &str = "P2";
/// Default effort label when a block has no `**Effort**` field.
pub const DEFAULT_EFFORT: &str = "effort:small";
/// Placeholder used for absent `**Depends On**` / `**Blocks**` fields.
pub const NO_DEPENDENCIES: &str = "None";

static REF_RE: LazyLock<Regex> = LazyLock::new(|| match Regex::new(r"^M(\d+)-(\d+)$") {
    Ok(re) => re,
    Err(_) => unreachable!("static regex pattern"),
});
static REF_IN_TEXT_RE: LazyLock<Regex> = LazyLock::new(|| match Regex::new(r"\bM\d+-\d+\b") {
    Ok(re) => re,
    Err(_) => unreachable!("static regex pattern"),
});

/// Identifier of an issue inside the phase plan, e.g. `M0-1`.
///
/// Equality uses the literal text; ordering is natural (milestone, then item),
/// so `M0-2` sorts before `M0-10`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct IssueRef {
    text: String,
    milestone: u64,
    item: u64,
}

impl IssueRef {
    /// The reference exactly as written in the phase file.
    pub fn as_str(&self) -> &str {
        &self.text
    }
}

impl FromStr for IssueRef {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        let caps = REF_RE
            .captures(s)
            .ok_or_else(|| Error::InvalidIssueRef(s.to_string()))?;
        Ok(IssueRef {
            text: s.to_string(),
            milestone: sort_key(&caps[1]),
            item: sort_key(&caps[2]),
        })
    }
}

/// Numeric sort key of a ref component. Digit runs that do not fit (or are
/// not ASCII) sort after every ordinary number.
fn sort_key(digits: &str) -> u64 {
    digits.parse().unwrap_or(u64::MAX)
}

impl TryFrom<String> for IssueRef {
    type Error = Error;

    fn try_from(value: String) -> Result<Self> {
        value.parse()
    }
}

impl From<IssueRef> for String {
    fn from(value: IssueRef) -> Self {
        value.text
    }
}

impl fmt::Display for IssueRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.text)
    }
}

impl PartialEq for IssueRef {
    fn eq(&self, other: &Self) -> bool {
        self.text == other.text
    }
}

impl Eq for IssueRef {}

impl Hash for IssueRef {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.text.hash(state);
    }
}

impl Ord for IssueRef {
    fn cmp(&self, other: &Self) -> Ordering {
        (self.milestone, self.item, &self.text).cmp(&(other.milestone, other.item, &other.text))
    }
}

impl PartialOrd for IssueRef {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// One issue block from a phase file, with defaults applied.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct IssueRecord {
    #[serde(rename = "ref")]
    pub issue_ref: IssueRef,
    pub title: String,
    #[serde(rename = "type")]
    pub issue_type: String,
    pub priority: String,
    pub effort: String,
    pub depends_on: String,
    pub blocks: String,
    pub description: String,
    pub acceptance: String,
    pub files: String,
    pub testing: String,
    pub story: String,
    /// File stem of the phase file the block came from.
    pub phase_name: String,
}

impl IssueRecord {
    /// Creates a record with every optional field at its default.
    pub fn new(issue_ref: IssueRef, title: impl Into<String>, phase_name: impl Into<String>) -> Self {
        IssueRecord {
            issue_ref,
            title: title.into(),
            issue_type: DEFAULT_TYPE.to_string(),
            priority: DEFAULT_PRIORITY.to_string(),
            effort: DEFAULT_EFFORT.to_string(),
            depends_on: NO_DEPENDENCIES.to_string(),
            blocks: NO_DEPENDENCIES.to_string(),
            description: String::new(),
            acceptance: String::new(),
            files: String::new(),
            testing: String::new(),
            story: String::new(),
            phase_name: phase_name.into(),
        }
    }

    /// Title used for the GitHub issue: `"{ref}: {title}"`.
    pub fn github_title(&self) -> String {
        format!("{}: {}", self.issue_ref, self.title)
    }

    /// References named in the `Depends On` text.
    pub fn dependency_refs(&self) -> Vec<IssueRef> {
        refs_in_text(&self.depends_on)
    }

    /// References named in the `Blocks` text.
    pub fn blocked_refs(&self) -> Vec<IssueRef> {
        refs_in_text(&self.blocks)
    }
}

/// Extract every `M#-#` reference from free text, in order, without repeats.
pub fn refs_in_text(text: &str) -> Vec<IssueRef> {
    let mut refs: Vec<IssueRef> = Vec::new();
    for m in REF_IN_TEXT_RE.find_iter(text) {
        if let Ok(r) = m.as_str().parse::<IssueRef>() {
            if !refs.contains(&r) {
                refs.push(r);
            }
        }
    }
    refs
}

#[cfg(test)]
#[path = "issue_tests.rs"]
mod tests;
