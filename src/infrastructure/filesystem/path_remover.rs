use colored::Colorize;
use std::path::Path;
use tokio::fs as async_fs;
use tracing::debug;

use crate::common::error::PkgdevError;
use crate::common::result::{PkgdevResult, ResultExt};

/// Deletes files and directory trees, or only reports them in dry-run mode
#[derive(Debug, Clone, Default)]
pub struct PathRemover {
    dry_run: bool,
}

impl PathRemover {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn dry_run() -> Self {
        Self { dry_run: true }
    }

    /// Remove `path` if it exists. Returns whether anything was there.
    pub async fn remove(&self, path: &Path) -> PkgdevResult<bool> {
        let metadata = match async_fs::symlink_metadata(path).await {
            Ok(metadata) => metadata,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                debug!("Nothing to remove at {}", path.display());
                return Ok(false);
            }
            Err(e) => {
                return Err(PkgdevError::filesystem_error_with_source(
                    "Failed to inspect path",
                    Some(path.to_path_buf()),
                    e,
                ))
            }
        };

        if self.dry_run {
            println!("{} {}", "would remove:".dimmed(), path.display());
            return Ok(true);
        }

        debug!("Removing {}", path.display());
        let result = if metadata.is_dir() {
            async_fs::remove_dir_all(path).await
        } else {
            async_fs::remove_file(path).await
        };
        result.with_filesystem_error("Failed to remove path", Some(path.to_path_buf()))?;
        Ok(true)
    }
}
