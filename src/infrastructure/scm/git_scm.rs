use super::scm_interface::{ScmError, ScmOperations};
use crate::infrastructure::process::{CommandSpec, ProcessRunner};
use async_trait::async_trait;
use std::collections::BTreeSet;
use std::path::{Path, PathBuf};
use std::sync::Mutex;

/// Git implementation of SCM operations
pub struct GitScm {
    git_executable: String,
    runner: ProcessRunner,
    /// Destinations a dry run pretended to clone into
    dry_run_clones: Mutex<BTreeSet<PathBuf>>,
}

impl Default for GitScm {
    fn default() -> Self {
        Self {
            git_executable: "git".to_string(),
            runner: ProcessRunner::new(),
            dry_run_clones: Mutex::new(BTreeSet::new()),
        }
    }
}

impl GitScm {
    /// Create a new Git SCM instance
    pub fn new(runner: ProcessRunner) -> Self {
        Self {
            runner,
            ..Self::default()
        }
    }

    fn git(&self) -> CommandSpec {
        CommandSpec::new(&self.git_executable)
    }

    pub(crate) fn clone_command(&self, url: &str, dest_path: &Path) -> Result<CommandSpec, ScmError> {
        let dest = dest_path.to_str().ok_or_else(|| ScmError::InvalidPath {
            path: dest_path.display().to_string(),
        })?;
        Ok(self.git().args(["clone", url, dest]))
    }

    fn is_dry_run_clone(&self, path: &Path) -> bool {
        self.dry_run_clones
            .lock()
            .map(|clones| clones.contains(path))
            .unwrap_or(false)
    }

    pub(crate) fn pull_command(&self, repo_path: &Path) -> CommandSpec {
        self.git().arg("pull").current_dir(repo_path)
    }
}

#[async_trait]
impl ScmOperations for GitScm {
    async fn clone_repository(&self, url: &str, dest_path: &Path) -> Result<(), ScmError> {
        let command = self.clone_command(url, dest_path)?;
        self.runner
            .run(&command)
            .await
            .map_err(|e| ScmError::clone_failed(format!("git clone of {} failed: {}", url, e)))?;
        if self.runner.is_dry_run() {
            if let Ok(mut clones) = self.dry_run_clones.lock() {
                clones.insert(dest_path.to_path_buf());
            }
        }
        Ok(())
    }

    async fn pull_repository(&self, repo_path: &Path) -> Result<(), ScmError> {
        if !self.is_repository(repo_path) && !self.is_dry_run_clone(repo_path) {
            return Err(ScmError::repository_not_found(repo_path));
        }
        self.runner
            .run(&self.pull_command(repo_path))
            .await
            .map_err(|e| ScmError::pull_failed(format!("git pull failed: {}", e)))
    }

    fn metadata_dir(&self) -> &'static str {
        ".git"
    }
}
