//! End-to-end tests of the command line: exit codes, help output,
//! target validation and dispatch in dry-run mode.

mod common;

use common::WorkspaceFixture;
use predicates::prelude::*;

#[test]
fn test_no_arguments_prints_usage_and_fails() {
    let workspace = WorkspaceFixture::new();

    workspace
        .command()
        .assert()
        .code(1)
        .stdout(predicate::str::contains("Usage:"))
        .stdout(predicate::str::contains("clean_update"))
        .stderr(predicate::str::contains("Error:"));
}

#[test]
fn test_unknown_target_is_reported_by_name() {
    let workspace = WorkspaceFixture::new();

    workspace
        .command()
        .args(["update", "numpy", "foo"])
        .assert()
        .code(1)
        .stdout(predicate::str::contains("Usage:"))
        .stderr(predicate::str::contains("invalid target: foo"))
        .stderr(predicate::str::contains("invalid target: numpy").not());
}

#[test]
fn test_clone_introduces_new_target_for_later_actions() {
    let workspace = WorkspaceFixture::new();

    workspace
        .command()
        .args(["--dry-run", "update", "newpkg", "clone"])
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "would run: git clone https://github.com/newpkg/newpkg.git",
        ))
        .stdout(predicate::str::contains(":: pull newpkg"))
        .stdout(predicate::str::contains(
            "would run: python setup.py install --user",
        ))
        .stdout(predicate::str::contains("3 operations completed"));
}

#[test]
fn test_clone_runs_before_other_actions() {
    let workspace = WorkspaceFixture::new();

    let output = workspace
        .command()
        .args(["-n", "pull", "acct:thing", "clone"])
        .output()
        .unwrap();
    assert!(output.status.success());

    let stdout = String::from_utf8_lossy(&output.stdout);
    let clone_at = stdout.find(":: clone thing").expect("clone should run");
    let pull_at = stdout.find(":: pull thing").expect("pull should run");
    assert!(clone_at < pull_at);
    assert!(stdout.contains("https://github.com/acct/thing.git"));
}

#[test]
fn test_all_skips_projects_that_are_not_checked_out() {
    let workspace = WorkspaceFixture::new();
    workspace.checkout("numpy");

    workspace
        .command()
        .args(["-n", "pull", "all"])
        .assert()
        .success()
        .stdout(predicate::str::contains(":: pull numpy"))
        .stdout(predicate::str::contains(":: pull scipy").not());
}

#[test]
fn test_update_with_nothing_checked_out_succeeds() {
    let workspace = WorkspaceFixture::new();

    workspace
        .command()
        .arg("update")
        .assert()
        .success()
        .stdout(predicate::str::contains("::").not());
}

#[test]
fn test_discovered_checkout_can_be_targeted() {
    let workspace = WorkspaceFixture::new();
    workspace.checkout("localpkg");
    let build = workspace.build_artifacts("localpkg");

    workspace
        .command()
        .args(["clean", "localpkg/"])
        .assert()
        .success()
        .stdout(predicate::str::contains(":: clean localpkg"));
    assert!(!build.exists());
}

#[test]
fn test_dry_run_keeps_build_artifacts() {
    let workspace = WorkspaceFixture::new();
    workspace.checkout("localpkg");
    let build = workspace.build_artifacts("localpkg");

    workspace
        .command()
        .args(["--dry-run", "clean", "localpkg"])
        .assert()
        .success()
        .stdout(predicate::str::contains("would remove:"));
    assert!(build.exists());
}

#[cfg(unix)]
#[test]
fn test_failing_external_command_aborts() {
    let workspace = WorkspaceFixture::new();
    workspace.checkout("broken");
    let interpreter = workspace.failing_script("fail.sh", 1);
    workspace.write_config(&format!("python: {}\n", interpreter.display()));

    workspace
        .command()
        .args(["install", "broken", "clean"])
        .assert()
        .code(1)
        .stdout(predicate::str::contains(":: install broken"))
        .stdout(predicate::str::contains(":: clean broken").not())
        .stderr(predicate::str::contains("exited with status 1"));
}

#[test]
fn test_target_outside_workspace_is_rejected() {
    let workspace = WorkspaceFixture::new();

    workspace
        .command()
        .args(["-n", "clone", "../escape"])
        .assert()
        .code(1)
        .stdout(predicate::str::contains("would run:").not())
        .stderr(predicate::str::contains("Invalid target specification '../escape'"));
}

#[test]
fn test_dry_run_pull_of_missing_checkout_fails() {
    let workspace = WorkspaceFixture::new();

    workspace
        .command()
        .args(["-n", "pull", "numpy"])
        .assert()
        .code(1)
        .stdout(predicate::str::contains("would run:").not())
        .stderr(predicate::str::contains("Repository not found"));
}

#[test]
fn test_list_of_empty_registry_prints_nothing() {
    let workspace = WorkspaceFixture::new();
    workspace.write_config("projects: []\n");

    workspace
        .command()
        .arg("--list")
        .assert()
        .success()
        .stdout(predicate::str::is_empty());
}

#[test]
fn test_list_uses_config_override_and_discovery() {
    let workspace = WorkspaceFixture::new();
    workspace.write_config("projects:\n  - acct:mine\n");
    workspace.checkout("localpkg");

    workspace
        .command()
        .arg("--list")
        .assert()
        .success()
        .stdout(predicate::str::contains("mine"))
        .stdout(predicate::str::contains("acct"))
        .stdout(predicate::str::contains("localpkg"))
        .stdout(predicate::str::contains("numpy").not());
}

#[test]
fn test_config_can_extend_defaults() {
    let workspace = WorkspaceFixture::new();
    workspace.write_config("projects: [acct:mine]\nextend_defaults: true\n");

    workspace
        .command()
        .arg("--list")
        .assert()
        .success()
        .stdout(predicate::str::contains("mine"))
        .stdout(predicate::str::contains("numpy"));
}

#[test]
fn test_malformed_config_fails() {
    let workspace = WorkspaceFixture::new();
    workspace.write_config("prefx: /opt/py\n");

    workspace
        .command()
        .arg("update")
        .assert()
        .code(1)
        .stderr(predicate::str::contains("Configuration error"));
}

#[test]
fn test_config_host_is_used_for_clone_urls() {
    let workspace = WorkspaceFixture::new();
    workspace.write_config("host: https://git.example.com/mirror\n");

    workspace
        .command()
        .args(["-n", "clone", "numpy"])
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "would run: git clone https://git.example.com/mirror/numpy/numpy.git",
        ));
}
