// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

pub mod create;
pub mod init;
pub mod list;
pub mod show;
#[cfg(test)]
#[path = "mod_tests.rs"]
pub mod testing;

use std::fs;
use std::path::{Path, PathBuf};

use gs_core::{
    find_duplicate_refs, is_phase_file, parse_phase, phase_name, sort_phase_files,
    unknown_references, IssueMapping, IssueRecord,
};

use crate::cli::SourceArgs;
use crate::config::Project;
use crate::error::{Error, Result};

/// Where a command runs: the start directory and the project found from it.
#[derive(Debug, Clone)]
pub struct Context {
    pub cwd: PathBuf,
    pub project: Project,
}

impl Context {
    /// Open the context for `-C <path>`, or the working directory.
    pub fn open(directory: Option<&str>) -> Result<Self> {
        let cwd = start_dir(directory)?;
        let project = Project::discover(&cwd)?;
        Ok(Context { cwd, project })
    }

    /// Resolve a path given on the command line against the start directory.
    pub fn cli_path(&self, path: &Path) -> PathBuf {
        if path.is_absolute() {
            path.to_path_buf()
        } else {
            self.cwd.join(path)
        }
    }

    pub fn phase_dir(&self, source: &SourceArgs) -> PathBuf {
        match &source.phase_dir {
            Some(dir) => self.cli_path(dir),
            None => self.project.phase_dir(),
        }
    }

    pub fn mapping_file(&self, flag: Option<&Path>) -> PathBuf {
        match flag {
            Some(path) => self.cli_path(path),
            None => self.project.mapping_file(),
        }
    }
}

/// The directory named by `-C`, or the working directory.
pub fn start_dir(directory: Option<&str>) -> Result<PathBuf> {
    match directory {
        Some(dir) => Ok(fs::canonicalize(dir)?),
        None => Ok(std::env::current_dir()?),
    }
}

/// Issues parsed from one phase file.
#[derive(Debug, Clone)]
pub struct ParsedPhase {
    pub file_name: String,
    pub issues: Vec<IssueRecord>,
}

/// Parse every `phase-*.md` file in `dir`, in phase order.
pub fn load_phases(dir: &Path) -> Result<Vec<ParsedPhase>> {
    if !dir.is_dir() {
        return Err(Error::PhaseDirNotFound(dir.display().to_string()));
    }

    let mut files = Vec::new();
    for entry in fs::read_dir(dir)? {
        let path = entry?.path();
        let is_match = path
            .file_name()
            .and_then(|n| n.to_str())
            .is_some_and(is_phase_file);
        if is_match && path.is_file() {
            files.push(path);
        }
    }
    sort_phase_files(&mut files);

    let mut phases = Vec::with_capacity(files.len());
    for path in files {
        let content = fs::read_to_string(&path)?;
        let name = phase_name(&path);
        let issues = crate::time_phase!("parse::phase", parse_phase(&name, &content));
        tracing::debug!(file = %path.display(), issues = issues.len(), "parsed phase file");
        phases.push(ParsedPhase {
            file_name: path
                .file_name()
                .map(|n| n.to_string_lossy().into_owned())
                .unwrap_or(name),
            issues,
        });
    }
    Ok(phases)
}

/// All issues of the phases in order, warning about duplicate refs and
/// references to issues that are not defined anywhere.
pub fn collect_issues(phases: Vec<ParsedPhase>) -> Vec<IssueRecord> {
    let issues: Vec<IssueRecord> = phases.into_iter().flat_map(|p| p.issues).collect();
    for dup in find_duplicate_refs(&issues) {
        tracing::warn!(issue_ref = %dup, "issue reference defined more than once");
    }
    for (from, missing) in unknown_references(&issues) {
        tracing::warn!(issue_ref = %from, references = %missing, "reference to undefined issue");
    }
    issues
}

/// Parse the phase directory without printing progress.
pub fn load_issues(dir: &Path) -> Result<Vec<IssueRecord>> {
    Ok(collect_issues(load_phases(dir)?))
}

/// Load a mapping file, or an empty mapping when the file does not exist.
pub fn read_mapping(path: &Path) -> Result<IssueMapping> {
    if !path.exists() {
        return Ok(IssueMapping::new());
    }
    let content = fs::read_to_string(path)?;
    Ok(IssueMapping::from_json(&content)?)
}

/// Write a mapping file, creating its parent directory.
pub fn write_mapping(mapping: &IssueMapping, path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)?;
        }
    }
    fs::write(path, mapping.to_json()?)?;
    Ok(())
}
