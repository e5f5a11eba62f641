// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

// Allow unused items: test helpers are shared across multiple test binaries,
// and not every test file uses every helper.
#![allow(dead_code)]
#![allow(unused_imports)]

use std::fs;
use std::path::{Path, PathBuf};

use assert_cmd::cargo::cargo_bin_cmd;
use assert_cmd::Command;

pub use predicates::prelude::*;
pub use tempfile::TempDir;

/// `ghseed` with logging and colors pinned so output is stable.
pub fn ghseed() -> Command {
    let mut cmd = cargo_bin_cmd!("ghseed");
    cmd.env_remove("GHSEED_GH")
        .env_remove("GHSEED_LOG")
        .env_remove("RUST_LOG")
        .env_remove("GHSEED_TIMINGS")
        .env_remove("COLOR")
        .env("NO_COLOR", "1");
    cmd
}

pub const PHASE_0: &str = "\
# Phase 0: Prerequisites

### M0-1: Set up workspace
**Type**: `type:chore`
**Priority**: `P0`
**Effort**: `effort:small`
**Depends On**: None
**Blocks**: M0-2

**Description**:
Create the cargo workspace.

**Acceptance Criteria**:
- [ ] cargo build succeeds

### M0-2: Add parser
**Type**: `type:optimization`
**Depends On**: M0-1
";

pub const PHASE_1: &str = "\
### M1-1: Ship it
**Priority**: `P1`
**Depends On**: M0-2
";

/// Temp project with `docs/plan/` holding two phase files.
pub fn project() -> TempDir {
    let temp = TempDir::new().unwrap();
    let plan = temp.path().join("docs/plan");
    fs::create_dir_all(&plan).unwrap();
    fs::write(plan.join("phase-0-prerequisites.md"), PHASE_0).unwrap();
    fs::write(plan.join("phase-1-launch.md"), PHASE_1).unwrap();
    temp
}

/// Install a fake `gh` that logs its arguments (one per line, calls separated
/// by `--`) to `gh.log` and answers `issue create` with an issue URL.
///
/// Numbering starts at 41. Titles starting with a ref in `fail_refs` make the
/// fake exit 1.
#[cfg(unix)]
pub fn fake_gh(dir: &Path, fail_refs: &[&str]) -> PathBuf {
    use std::os::unix::fs::PermissionsExt;

    let log = dir.join("gh.log");
    let counter = dir.join("gh.counter");
    let fail_cases: String = fail_refs
        .iter()
        .map(|r| format!("    {r}:*) echo 'HTTP 502: Bad Gateway' >&2; exit 1 ;;\n"))
        .collect();
    let script = format!(
        "#!/bin/sh
for a in \"$@\"; do printf '%s\\n' \"$a\"; done >> \"{log}\"
echo -- >> \"{log}\"
if [ \"$1 $2\" = \"issue create\" ]; then
  case \"$4\" in
{fail_cases}  esac
  n=$(cat \"{counter}\" 2>/dev/null || echo 41)
  echo $((n + 1)) > \"{counter}\"
  echo \"https://github.com/acme/app/issues/$n\"
fi
exit 0
",
        log = log.display(),
        counter = counter.display(),
    );
    let path = dir.join("fake-gh");
    fs::write(&path, script).unwrap();
    fs::set_permissions(&path, fs::Permissions::from_mode(0o755)).unwrap();
    path
}

/// Argument lists of every fake `gh` call, in order.
pub fn gh_calls(dir: &Path) -> Vec<Vec<String>> {
    let log = fs::read_to_string(dir.join("gh.log")).unwrap_or_default();
    let mut calls = Vec::new();
    let mut current = Vec::new();
    for line in log.lines() {
        if line == "--" {
            calls.push(std::mem::take(&mut current));
        } else {
            current.push(line.to_string());
        }
    }
    calls
}

pub fn read_mapping(path: &Path) -> serde_json::Value {
    serde_json::from_str(&fs::read_to_string(path).unwrap()).unwrap()
}
