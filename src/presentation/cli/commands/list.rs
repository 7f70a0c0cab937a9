use colored::Colorize;
use std::path::PathBuf;
use tracing::info;

use super::load_workspace;
use crate::common::result::PkgdevResult;
use crate::domain::entities::{ProjectRegistry, Workspace};

/// Handler for `pkgdev --list`
pub struct ListCommand {
    pub root: PathBuf,
    pub env_prefix: Option<String>,
}

impl ListCommand {
    pub fn new(root: PathBuf, env_prefix: Option<String>) -> Self {
        Self { root, env_prefix }
    }

    pub async fn execute(&self) -> PkgdevResult<()> {
        let (workspace, registry) =
            load_workspace(&self.root, self.env_prefix.as_deref()).await?;
        if registry.is_empty() {
            info!("No projects registered");
            return Ok(());
        }
        for line in format_registry(&registry, &workspace) {
            println!("{}", line);
        }
        Ok(())
    }
}

/// One line per registered project: name, namespace and checkout state
fn format_registry(registry: &ProjectRegistry, workspace: &Workspace) -> Vec<String> {
    let width = registry.repos().map(str::len).max().unwrap_or(0);
    registry
        .specs()
        .into_iter()
        .map(|spec| {
            let state = if workspace.is_cloned(&spec.repo) {
                "cloned".green()
            } else if workspace.is_present(&spec.repo) {
                "present".yellow()
            } else {
                "missing".red()
            };
            format!(
                "{:<width$}  {:<8} {}",
                spec.repo,
                state,
                spec.namespace,
                width = width
            )
        })
        .collect()
}
