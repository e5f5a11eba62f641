// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Naming rules for phase files (`phase-<N>-<slug>.md`).

use regex::Regex;
use std::path::{Path, PathBuf};
use std::sync::LazyLock;

static PHASE_NUMBER_RE: LazyLock<Regex> = LazyLock::new(|| match Regex::new(r"^phase-(\d+)") {
    Ok(re) => re,
    Err(_) => unreachable!("static regex pattern"),
});

const PHASE_PREFIX: &str = "phase-";
const PHASE_EXTENSION: &str = ".md";

/// Phase number from a phase name (`phase-3-search` -> 3), or 0 when the
/// name does not start with `phase-<digits>`.
pub fn phase_number(phase_name: &str) -> u32 {
    PHASE_NUMBER_RE
        .captures(phase_name)
        .and_then(|caps| caps[1].parse().ok())
        .unwrap_or(0)
}

/// Milestone assigned to a phase when configuration does not override it.
///
/// Milestones are created in phase order starting from phase 0, so GitHub
/// numbers them one higher than the phase. Names without a phase number go
/// to milestone 1.
pub fn default_milestone(phase_name: &str) -> u32 {
    if PHASE_NUMBER_RE.is_match(phase_name) {
        phase_number(phase_name).saturating_add(1)
    } else {
        1
    }
}

/// Returns true for file names matching `phase-*.md`.
pub fn is_phase_file(file_name: &str) -> bool {
    file_name.len() >= PHASE_PREFIX.len() + PHASE_EXTENSION.len()
        && file_name.starts_with(PHASE_PREFIX)
        && file_name.ends_with(PHASE_EXTENSION)
}

/// Phase name for a file: its stem (`docs/plan/phase-1-setup.md` -> `phase-1-setup`).
pub fn phase_name(path: &Path) -> String {
    path.file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_default()
}

/// Sort phase files by phase number, then by file name.
pub fn sort_phase_files(files: &mut [PathBuf]) {
    files.sort_by_cached_key(|path| {
        let name = phase_name(path);
        (phase_number(&name), name)
    });
}

#[cfg(test)]
#[path = "phase_tests.rs"]
mod tests;
