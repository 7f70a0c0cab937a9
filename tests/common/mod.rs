//! Common test utilities and helpers
//!
//! Temporary workspaces with fake checkouts, and a preconfigured
//! command for running the binary against them.

#![allow(dead_code)]

use assert_cmd::Command;
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// A temporary workspace directory
pub struct WorkspaceFixture {
    dir: TempDir,
}

impl WorkspaceFixture {
    pub fn new() -> Self {
        Self {
            dir: TempDir::new().expect("Failed to create temp dir"),
        }
    }

    pub fn path(&self) -> &Path {
        self.dir.path()
    }

    /// Create a directory that looks like a checkout: `.git/` plus `setup.py`
    pub fn checkout(&self, name: &str) -> PathBuf {
        let dir = self.path().join(name);
        fs::create_dir_all(dir.join(".git")).expect("Failed to create .git");
        fs::write(dir.join("setup.py"), "from setuptools import setup\nsetup()\n")
            .expect("Failed to write setup.py");
        dir
    }

    /// Create a `build/` directory with one artifact inside `name`
    pub fn build_artifacts(&self, name: &str) -> PathBuf {
        let build = self.path().join(name).join("build");
        fs::create_dir_all(build.join("lib")).expect("Failed to create build dir");
        fs::write(build.join("lib").join("module.so"), "").expect("Failed to write artifact");
        build
    }

    /// Executable script at the workspace root that exits with `code`
    #[cfg(unix)]
    pub fn failing_script(&self, name: &str, code: i32) -> PathBuf {
        use std::os::unix::fs::PermissionsExt;

        let path = self.path().join(name);
        fs::write(&path, format!("#!/bin/sh\nexit {}\n", code)).expect("Failed to write script");
        fs::set_permissions(&path, fs::Permissions::from_mode(0o755))
            .expect("Failed to make script executable");
        path
    }

    pub fn write_config(&self, yaml: &str) {
        fs::write(self.path().join(".pkgdev.yaml"), yaml).expect("Failed to write config");
    }

    /// The binary, pointed at this workspace with colors and ambient overrides off
    pub fn command(&self) -> Command {
        let mut cmd = Command::cargo_bin("pkgdev").expect("binary should build");
        cmd.arg("-C")
            .arg(self.path())
            .arg("--no-color")
            .env_remove("PKGDEV_PREFIX")
            .env_remove("RUST_LOG");
        cmd
    }
}

impl Default for WorkspaceFixture {
    fn default() -> Self {
        Self::new()
    }
}
