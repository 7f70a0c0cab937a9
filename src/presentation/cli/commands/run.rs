use colored::Colorize;
use std::path::PathBuf;
use tracing::{debug, info};

use super::load_workspace;
use crate::application::use_cases::{classify_arguments, resolve_targets, DispatchActionsUseCase};
use crate::common::result::PkgdevResult;
use crate::infrastructure::{LocalPackageOperations, ProcessRunner};

/// Handler for `pkgdev [ACTION|TARGET]...`
pub struct RunCommand {
    pub root: PathBuf,
    pub args: Vec<String>,
    pub env_prefix: Option<String>,
    pub runner: ProcessRunner,
}

impl RunCommand {
    pub fn new(
        root: PathBuf,
        args: Vec<String>,
        env_prefix: Option<String>,
        runner: ProcessRunner,
    ) -> Self {
        Self {
            root,
            args,
            env_prefix,
            runner,
        }
    }

    pub async fn execute(&self) -> PkgdevResult<()> {
        let classified = classify_arguments(&self.args)?;
        debug!(
            "Actions {:?}, targets {:?}",
            classified.actions, classified.targets
        );

        let (workspace, mut registry) =
            load_workspace(&self.root, self.env_prefix.as_deref()).await?;
        debug!("Install mode: {}", workspace.install_mode);

        let targets = resolve_targets(
            &classified.targets,
            &classified.actions,
            &registry,
            &workspace,
        )?;
        if targets.is_empty() {
            info!("No checked-out projects to act on");
        }

        let operations = LocalPackageOperations::new(workspace, self.runner.clone());
        let report = DispatchActionsUseCase::new(&operations)
            .execute(&classified.actions, &targets, &mut registry)
            .await?;

        if !report.executed.is_empty() {
            println!(
                "{} {} operations completed",
                "✓".green().bold(),
                report.executed.len()
            );
        }
        Ok(())
    }
}
