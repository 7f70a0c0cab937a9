use async_trait::async_trait;
use std::path::Path;

/// Version-control operations pkgdev needs from the hosting service
#[async_trait]
pub trait ScmOperations: Send + Sync {
    /// Clone the repository at `url` into `dest_path`
    async fn clone_repository(&self, url: &str, dest_path: &Path) -> Result<(), ScmError>;

    /// Pull new commits into the checkout at `repo_path`
    async fn pull_repository(&self, repo_path: &Path) -> Result<(), ScmError>;

    /// Name of the metadata directory identifying a checkout
    fn metadata_dir(&self) -> &'static str;

    /// Check if a directory is a checkout for this SCM
    fn is_repository(&self, path: &Path) -> bool {
        path.join(self.metadata_dir()).is_dir()
    }
}

/// Errors that can occur during SCM operations
#[derive(Debug, thiserror::Error)]
pub enum ScmError {
    #[error("Repository not found at path: {path}")]
    RepositoryNotFound { path: String },

    #[error("Clone operation failed: {message}")]
    CloneFailed { message: String },

    #[error("Pull operation failed: {message}")]
    PullFailed { message: String },

    #[error("Invalid destination path: {path}")]
    InvalidPath { path: String },
}

impl ScmError {
    pub fn clone_failed(message: impl Into<String>) -> Self {
        Self::CloneFailed {
            message: message.into(),
        }
    }

    pub fn pull_failed(message: impl Into<String>) -> Self {
        Self::PullFailed {
            message: message.into(),
        }
    }

    pub fn repository_not_found(path: &Path) -> Self {
        Self::RepositoryNotFound {
            path: path.display().to_string(),
        }
    }
}
