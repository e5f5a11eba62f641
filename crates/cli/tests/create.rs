// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

#![cfg(unix)]

mod common;
use common::*;

fn create(temp: &TempDir, fail_refs: &[&str]) -> assert_cmd::assert::Assert {
    let gh = fake_gh(temp.path(), fail_refs);
    ghseed()
        .args(["create", "--delay-ms", "0"])
        .env("GHSEED_GH", &gh)
        .current_dir(temp.path())
        .assert()
}

#[test]
fn create_writes_mapping_of_created_issues() {
    let temp = project();
    create(&temp, &[])
        .success()
        .stdout(predicate::str::contains("Parsed phase-0-prerequisites.md: 2 issues"))
        .stdout(predicate::str::contains("Parsed phase-1-launch.md: 1 issues"))
        .stdout(predicate::str::contains("Total issues parsed: 3"))
        .stdout(predicate::str::contains("[  1/3] M0-1     -> #41"))
        .stdout(predicate::str::contains("[  3/3] M1-1     -> #43"))
        .stdout(predicate::str::contains("Created 3/3 issues"))
        .stdout(predicate::str::contains("Issue mapping saved to"));

    let mapping = read_mapping(&temp.path().join("scripts/issue-mapping.json"));
    assert_eq!(
        mapping,
        serde_json::json!({"M0-1": "41", "M0-2": "42", "M1-1": "43"})
    );
}

#[test]
fn create_passes_labels_and_milestones_to_gh() {
    let temp = project();
    create(&temp, &[]).success();

    let calls = gh_calls(temp.path());
    assert_eq!(calls.len(), 6);

    let first = &calls[0];
    assert_eq!(&first[..4], ["issue", "create", "--title", "M0-1: Set up workspace"]);
    for label in ["phase-0", "type:chore", "P0", "effort:small", "ready"] {
        assert!(first.iter().any(|a| a == label), "missing label {label}");
    }
    assert!(first.iter().any(|a| a == "Create the cargo workspace."));

    assert_eq!(calls[1], ["issue", "edit", "41", "--milestone", "1"]);
    assert!(calls[2].iter().any(|a| a == "type:performance"));
    assert_eq!(calls[5], ["issue", "edit", "43", "--milestone", "2"]);
}

#[test]
fn create_continues_after_failure_and_exits_nonzero() {
    let temp = project();
    create(&temp, &["M0-2"])
        .failure()
        .code(1)
        .stdout(predicate::str::contains("M0-2     -> FAILED"))
        .stdout(predicate::str::contains("[  3/3] M1-1     -> #42"))
        .stdout(predicate::str::contains("Created 2/3 issues"))
        .stderr(predicate::str::contains("failed to create issue"))
        .stderr(predicate::str::contains("error: some issues failed: 2 created, 1 failed"));

    let mapping = read_mapping(&temp.path().join("scripts/issue-mapping.json"));
    assert_eq!(mapping, serde_json::json!({"M0-1": "41", "M1-1": "42"}));
}

#[test]
fn create_missing_gh_fails_every_issue() {
    let temp = project();
    ghseed()
        .args(["create", "--delay-ms", "0"])
        .env("GHSEED_GH", temp.path().join("no-such-gh"))
        .current_dir(temp.path())
        .assert()
        .failure()
        .stdout(predicate::str::contains("Created 0/3 issues"))
        .stderr(predicate::str::contains("failed to run"));

    let mapping = read_mapping(&temp.path().join("scripts/issue-mapping.json"));
    assert_eq!(mapping, serde_json::json!({}));
}

#[test]
fn create_dry_run_makes_no_calls() {
    let temp = project();
    let gh = fake_gh(temp.path(), &[]);
    ghseed()
        .args(["create", "--dry-run"])
        .env("GHSEED_GH", &gh)
        .current_dir(temp.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("M0-2: Add parser"))
        .stdout(predicate::str::contains(
            "labels: phase-0, type:performance, P2, effort:small, ready",
        ))
        .stdout(predicate::str::contains("Dry run: 3 of 3 issues would be created"));

    assert!(gh_calls(temp.path()).is_empty());
    assert!(!temp.path().join("scripts/issue-mapping.json").exists());
}

#[test]
fn create_skip_existing_resumes() {
    let temp = project();
    let scripts = temp.path().join("scripts");
    std::fs::create_dir_all(&scripts).unwrap();
    std::fs::write(
        scripts.join("issue-mapping.json"),
        "{\n  \"M0-1\": \"7\"\n}",
    )
    .unwrap();

    let gh = fake_gh(temp.path(), &[]);
    ghseed()
        .args(["create", "--delay-ms", "0", "--skip-existing"])
        .env("GHSEED_GH", &gh)
        .current_dir(temp.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("M0-1     -> #7 (existing)"));

    let mapping = read_mapping(&scripts.join("issue-mapping.json"));
    assert_eq!(
        mapping,
        serde_json::json!({"M0-1": "7", "M0-2": "41", "M1-1": "42"})
    );
}

#[test]
fn create_only_selected_refs() {
    let temp = project();
    let gh = fake_gh(temp.path(), &[]);
    ghseed()
        .args(["create", "--delay-ms", "0", "--only", "M1-1"])
        .env("GHSEED_GH", &gh)
        .current_dir(temp.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("Created 1/1 issues"));

    let calls = gh_calls(temp.path());
    assert_eq!(calls.len(), 2);
    assert_eq!(calls[0][3], "M1-1: Ship it");
}

#[test]
fn create_with_repo_and_custom_mapping() {
    let temp = project();
    let gh = fake_gh(temp.path(), &[]);
    ghseed()
        .args([
            "create",
            "--delay-ms",
            "0",
            "-R",
            "acme/app",
            "--mapping",
            "out/map.json",
        ])
        .env("GHSEED_GH", &gh)
        .current_dir(temp.path())
        .assert()
        .success();

    let calls = gh_calls(temp.path());
    assert!(calls.iter().all(|c| c.ends_with(&["--repo".to_string(), "acme/app".to_string()])));
    assert!(temp.path().join("out/map.json").is_file());
}

#[test]
fn create_uses_config_file() {
    let temp = project();
    let gh = fake_gh(temp.path(), &[]);
    std::fs::write(
        temp.path().join("ghseed.toml"),
        format!(
            "delay_ms = 0\ngh = \"{}\"\nmapping_file = \"map.json\"\ninitial_label = \"\"\n\n[milestones]\n\"phase-1-launch\" = \"Launch\"\n",
            gh.display()
        ),
    )
    .unwrap();

    ghseed()
        .arg("create")
        .current_dir(temp.path())
        .assert()
        .success();

    let calls = gh_calls(temp.path());
    assert!(!calls[0].iter().any(|a| a == "ready"));
    assert_eq!(calls[5], ["issue", "edit", "43", "--milestone", "Launch"]);
    assert!(temp.path().join("map.json").is_file());
}

#[test]
fn create_missing_phase_dir() {
    let temp = TempDir::new().unwrap();
    ghseed()
        .arg("create")
        .current_dir(temp.path())
        .assert()
        .failure()
        .stderr(predicate::str::contains("phase directory not found"));
}
