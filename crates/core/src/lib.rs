// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! gs-core: Shared library for the ghseed issue bootstrapper
//!
//! This crate holds the I/O-free domain: issue references and records, the
//! phase-file parser, issue body and label rendering, and the mapping format
//! written at the end of a run.

pub mod body;
pub mod error;
pub mod issue;
pub mod mapping;
pub mod parser;
pub mod phase;

pub use body::{render_body, LabelPolicy};
pub use error::{Error, Result};
pub use issue::{IssueRecord, IssueRef};
pub use mapping::IssueMapping;
pub use parser::{find_duplicate_refs, parse_phase, unknown_references};
pub use phase::{default_milestone, is_phase_file, phase_name, phase_number, sort_phase_files};
