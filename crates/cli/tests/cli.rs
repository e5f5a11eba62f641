// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

mod common;
use common::*;

#[test]
fn help_lists_commands() {
    ghseed()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("Issues:"))
        .stdout(predicate::str::contains("create"))
        .stdout(predicate::str::contains("Get started:"));
}

#[test]
fn version_flag() {
    ghseed()
        .arg("-v")
        .assert()
        .success()
        .stdout(predicate::str::contains(env!("CARGO_PKG_VERSION")));
}

#[test]
fn init_then_init_again() {
    let temp = TempDir::new().unwrap();
    ghseed()
        .arg("init")
        .current_dir(temp.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("Initialized"));
    assert!(temp.path().join("ghseed.toml").is_file());

    ghseed()
        .arg("init")
        .current_dir(temp.path())
        .assert()
        .failure()
        .stderr(predicate::str::contains("already initialized"));
}

#[test]
fn completion_bash() {
    ghseed()
        .args(["completion", "bash"])
        .assert()
        .success()
        .stdout(predicate::str::contains("ghseed"));
}
