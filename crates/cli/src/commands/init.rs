// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

use std::path::{Path, PathBuf};

use crate::config::init_config;
use crate::error::Result;

use super::start_dir;

pub fn run(directory: Option<&str>, path: Option<String>) -> Result<()> {
    let base = start_dir(directory)?;
    let target = match path {
        Some(p) => base.join(p),
        None => base,
    };
    let written = run_impl(&target)?;
    println!("Initialized {}", written.display());
    Ok(())
}

/// Internal implementation for testing.
pub(crate) fn run_impl(target: &Path) -> Result<PathBuf> {
    let path = init_config(target)?;
    tracing::debug!(path = %path.display(), "wrote default configuration");
    Ok(path)
}

#[cfg(test)]
#[path = "init_tests.rs"]
mod tests;
