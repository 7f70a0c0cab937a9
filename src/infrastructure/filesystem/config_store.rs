use std::path::{Path, PathBuf};
use tokio::fs as async_fs;
use tracing::debug;

use crate::common::error::PkgdevError;
use crate::common::result::{PkgdevResult, ResultExt};
use crate::domain::entities::workspace_config::WorkspaceConfig;

/// Configuration file looked up in the working directory
pub const CONFIG_FILE_NAME: &str = ".pkgdev.yaml";

/// Reads the optional workspace configuration file
#[derive(Debug, Clone, Default)]
pub struct ConfigStore;

impl ConfigStore {
    pub fn new() -> Self {
        Self
    }

    /// Path the configuration is read from for `root`
    pub fn config_path(&self, root: &Path) -> PathBuf {
        root.join(CONFIG_FILE_NAME)
    }

    /// Load the configuration of `root`; `None` when there is no file
    pub async fn load(&self, root: &Path) -> PkgdevResult<Option<WorkspaceConfig>> {
        let path = self.config_path(root);
        if !path.is_file() {
            debug!("No configuration file at {}", path.display());
            return Ok(None);
        }

        let content = async_fs::read_to_string(&path)
            .await
            .with_filesystem_error("Failed to read configuration file", Some(path.clone()))?;
        let config = self.parse(&content, &path)?;
        debug!("Loaded configuration from {}", path.display());
        Ok(Some(config))
    }

    fn parse(&self, content: &str, path: &Path) -> PkgdevResult<WorkspaceConfig> {
        if content.trim().is_empty() {
            return Ok(WorkspaceConfig::default());
        }
        serde_yaml::from_str(content).map_err(|e| {
            PkgdevError::config_error_with_source(
                format!("Invalid configuration file {}", path.display()),
                Some(path.to_path_buf()),
                e,
            )
        })
    }
}
