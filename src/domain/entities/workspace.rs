use std::path::{Path, PathBuf};
use walkdir::WalkDir;

use super::workspace_config::WorkspaceConfig;
use crate::domain::value_objects::install_mode::InstallMode;

/// Version-control metadata directory marking a checkout
pub const SCM_METADATA_DIR: &str = ".git";

/// The directory holding every project checkout
#[derive(Debug, Clone)]
pub struct Workspace {
    /// Workspace root; each project is a direct child named after its repo
    pub root_path: PathBuf,

    /// Settings read from the configuration file
    pub config: WorkspaceConfig,

    /// Where install and uninstall operate
    pub install_mode: InstallMode,
}

impl Workspace {
    pub fn new(root_path: impl Into<PathBuf>, config: WorkspaceConfig) -> Self {
        Self {
            root_path: root_path.into(),
            config,
            install_mode: InstallMode::User,
        }
    }

    pub fn with_install_mode(mut self, install_mode: InstallMode) -> Self {
        self.install_mode = install_mode;
        self
    }

    /// Checkout directory of `repo`
    pub fn project_dir(&self, repo: &str) -> PathBuf {
        self.root_path.join(repo)
    }

    /// Whether a directory named `repo` currently exists
    pub fn is_present(&self, repo: &str) -> bool {
        self.project_dir(repo).is_dir()
    }

    /// Whether `repo` already has version-control metadata
    pub fn is_cloned(&self, repo: &str) -> bool {
        self.project_dir(repo).join(SCM_METADATA_DIR).is_dir()
    }

    /// Whether `dir` has both version-control metadata and the build descriptor
    pub fn looks_like_checkout(&self, dir: &Path) -> bool {
        dir.join(SCM_METADATA_DIR).is_dir() && dir.join(self.config.build_descriptor()).is_file()
    }

    /// Names of the immediate child directories that look like checkouts, sorted
    pub fn discover_checkouts(&self) -> Vec<String> {
        let mut found: Vec<String> = WalkDir::new(&self.root_path)
            .min_depth(1)
            .max_depth(1)
            .follow_links(true)
            .into_iter()
            .filter_map(|entry| entry.ok())
            .filter(|entry| entry.file_type().is_dir())
            .filter(|entry| self.looks_like_checkout(entry.path()))
            .filter_map(|entry| entry.file_name().to_str().map(str::to_string))
            .collect();
        found.sort();
        found
    }
}
