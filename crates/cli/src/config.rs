// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Project configuration management.
//!
//! Configuration is stored in `ghseed.toml` at the project root and is
//! optional: without it every setting takes its default and the working
//! directory is the project root. Relative paths resolve against the root.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

use gs_core::LabelPolicy;

use crate::error::{Error, Result};

pub const CONFIG_FILE_NAME: &str = "ghseed.toml";

/// Project configuration stored in `ghseed.toml`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    /// Directory holding the `phase-*.md` files.
    pub phase_dir: PathBuf,
    /// Where the ref-to-issue-number mapping is written.
    pub mapping_file: PathBuf,
    /// Pause between issues, in milliseconds.
    pub delay_ms: u64,
    /// Limit for each `gh` invocation, in seconds.
    pub timeout_secs: u64,
    /// GitHub CLI executable.
    pub gh: String,
    /// Target repository (`owner/name`); defaults to the repository of the working directory.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub repo: Option<String>,
    /// Label added to every new issue; empty for none.
    pub initial_label: String,
    /// Type labels renamed before use.
    pub label_aliases: BTreeMap<String, String>,
    /// Milestone per phase name, overriding the phase-number default.
    pub milestones: BTreeMap<String, String>,
}

impl Default for Config {
    fn default() -> Self {
        let labels = LabelPolicy::default();
        Config {
            phase_dir: PathBuf::from("docs/plan"),
            mapping_file: PathBuf::from("scripts/issue-mapping.json"),
            delay_ms: 1000,
            timeout_secs: 10,
            gh: "gh".to_string(),
            repo: None,
            initial_label: labels.initial,
            label_aliases: labels.aliases,
            milestones: BTreeMap::new(),
        }
    }
}

impl Config {
    /// Parse configuration from TOML text.
    pub fn from_toml(content: &str) -> Result<Self> {
        let config: Config = toml::from_str(content)
            .map_err(|e| Error::Config(format!("failed to parse config: {}", e)))?;
        if config.timeout_secs == 0 {
            return Err(Error::Config("timeout_secs must be at least 1".to_string()));
        }
        Ok(config)
    }

    /// Loads configuration from a `ghseed.toml` file.
    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)
            .map_err(|e| Error::Config(format!("failed to read {}: {}", path.display(), e)))?;
        Self::from_toml(&content)
    }

    /// Saves configuration into `dir/ghseed.toml`.
    pub fn save(&self, dir: &Path) -> Result<PathBuf> {
        let path = dir.join(CONFIG_FILE_NAME);
        let content = toml::to_string_pretty(self)
            .map_err(|e| Error::Config(format!("failed to serialize config: {}", e)))?;
        fs::write(&path, content)?;
        Ok(path)
    }

    /// Label rules derived from `initial_label` and `label_aliases`.
    pub fn label_policy(&self) -> LabelPolicy {
        LabelPolicy {
            aliases: self.label_aliases.clone(),
            initial: self.initial_label.clone(),
        }
    }

    /// Milestone for a phase: configured override, else the phase-number default.
    pub fn milestone_for(&self, phase_name: &str) -> String {
        self.milestones
            .get(phase_name)
            .cloned()
            .unwrap_or_else(|| gs_core::default_milestone(phase_name).to_string())
    }

    pub fn delay(&self) -> Duration {
        Duration::from_millis(self.delay_ms)
    }

    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }
}

/// Loaded configuration together with the directory it applies to.
#[derive(Debug, Clone)]
pub struct Project {
    pub root: PathBuf,
    pub config: Config,
}

impl Project {
    /// Find `ghseed.toml` by walking up from `start`; defaults when none exists.
    pub fn discover(start: &Path) -> Result<Self> {
        match find_config(start) {
            Some(path) => {
                let config = Config::load(&path)?;
                let root = path.parent().unwrap_or(start).to_path_buf();
                tracing::debug!(config = %path.display(), "loaded configuration");
                Ok(Project { root, config })
            }
            None => Ok(Project {
                root: start.to_path_buf(),
                config: Config::default(),
            }),
        }
    }

    /// Resolve a configured path against the project root.
    pub fn resolve(&self, path: &Path) -> PathBuf {
        if path.is_absolute() {
            path.to_path_buf()
        } else {
            self.root.join(path)
        }
    }

    pub fn phase_dir(&self) -> PathBuf {
        self.resolve(&self.config.phase_dir)
    }

    pub fn mapping_file(&self) -> PathBuf {
        self.resolve(&self.config.mapping_file)
    }
}

/// Find `ghseed.toml` in `start` or any of its ancestors.
pub fn find_config(start: &Path) -> Option<PathBuf> {
    let mut current = start.to_path_buf();
    loop {
        let candidate = current.join(CONFIG_FILE_NAME);
        if candidate.is_file() {
            return Some(candidate);
        }
        if !current.pop() {
            return None;
        }
    }
}

/// Write a default `ghseed.toml` into `dir`.
pub fn init_config(dir: &Path) -> Result<PathBuf> {
    let path = dir.join(CONFIG_FILE_NAME);
    if path.exists() {
        return Err(Error::AlreadyInitialized(path.display().to_string()));
    }
    fs::create_dir_all(dir)?;
    Config::default().save(dir)
}

#[cfg(test)]
#[path = "config_tests.rs"]
mod tests;
