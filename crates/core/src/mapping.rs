// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Ref-to-issue-number mapping written at the end of a run.
//!
//! The JSON form is a flat object in creation order with the numbers stored
//! as strings: `{"M0-1": "12", "M0-2": "13"}`. Integer values are accepted
//! when reading.

use indexmap::IndexMap;
use serde::ser::SerializeMap;
use serde::{Deserialize, Serialize, Serializer};

use crate::error::{Error, Result};
use crate::issue::IssueRef;

/// Ordered mapping from issue reference to GitHub issue number.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct IssueMapping {
    entries: IndexMap<String, u64>,
}

#[derive(Deserialize)]
#[serde(untagged)]
enum StoredNumber {
    Number(u64),
    Text(String),
}

impl IssueMapping {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record the number for a reference, returning the previous number if any.
    pub fn insert(&mut self, issue_ref: &IssueRef, number: u64) -> Option<u64> {
        self.entries.insert(issue_ref.to_string(), number)
    }

    pub fn get(&self, issue_ref: &IssueRef) -> Option<u64> {
        self.entries.get(issue_ref.as_str()).copied()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Pretty JSON (two-space indent), numbers written as strings.
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Parse a mapping file, accepting string or integer issue numbers.
    pub fn from_json(json: &str) -> Result<Self> {
        let raw: IndexMap<String, StoredNumber> = serde_json::from_str(json)?;
        let mut entries = IndexMap::with_capacity(raw.len());
        for (issue_ref, stored) in raw {
            let number = match stored {
                StoredNumber::Number(n) => n,
                StoredNumber::Text(text) => {
                    text.trim()
                        .trim_start_matches('#')
                        .parse()
                        .map_err(|_| Error::InvalidIssueNumber {
                            issue_ref: issue_ref.clone(),
                            value: text.clone(),
                        })?
                }
            };
            entries.insert(issue_ref, number);
        }
        Ok(IssueMapping { entries })
    }
}

impl Serialize for IssueMapping {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.entries.len()))?;
        for (issue_ref, number) in &self.entries {
            map.serialize_entry(issue_ref, &number.to_string())?;
        }
        map.end()
    }
}

#[cfg(test)]
#[path = "mapping_tests.rs"]
mod tests;
