use async_trait::async_trait;
use tracing::{debug, info};

use crate::common::result::PkgdevResult;
use crate::domain::entities::{ProjectSpec, Workspace};
use crate::infrastructure::build::SetupPyBuilder;
use crate::infrastructure::process::ProcessRunner;
use crate::infrastructure::scm::{GitScm, ScmOperations};

/// The base operations every action is composed of, one project at a time
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait PackageOperations: Send + Sync {
    async fn clone_project(&self, project: &ProjectSpec) -> PkgdevResult<()>;

    async fn pull(&self, project: &ProjectSpec) -> PkgdevResult<()>;

    async fn install(&self, project: &ProjectSpec) -> PkgdevResult<()>;

    async fn uninstall(&self, project: &ProjectSpec) -> PkgdevResult<()>;

    async fn clean(&self, project: &ProjectSpec) -> PkgdevResult<()>;
}

/// Operations against checkouts in a local workspace,
/// using git for version control and `setup.py` for building
pub struct LocalPackageOperations {
    workspace: Workspace,
    scm: Box<dyn ScmOperations>,
    builder: SetupPyBuilder,
}

impl LocalPackageOperations {
    pub fn new(workspace: Workspace, runner: ProcessRunner) -> Self {
        let builder = SetupPyBuilder::new(
            workspace.config.python(),
            workspace.config.build_descriptor(),
            workspace.install_mode.clone(),
            runner.clone(),
        );
        Self {
            workspace,
            scm: Box::new(GitScm::new(runner)),
            builder,
        }
    }

    pub fn with_scm(mut self, scm: Box<dyn ScmOperations>) -> Self {
        self.scm = scm;
        self
    }
}

#[async_trait]
impl PackageOperations for LocalPackageOperations {
    async fn clone_project(&self, project: &ProjectSpec) -> PkgdevResult<()> {
        let dest = self.workspace.project_dir(&project.repo);
        if self.scm.is_repository(&dest) {
            info!("{} is already cloned, skipping", project.repo);
            return Ok(());
        }
        let url = project.clone_url(self.workspace.config.host())?;
        self.scm.clone_repository(url.as_str(), &dest).await?;
        Ok(())
    }

    async fn pull(&self, project: &ProjectSpec) -> PkgdevResult<()> {
        let dir = self.workspace.project_dir(&project.repo);
        self.scm.pull_repository(&dir).await?;
        Ok(())
    }

    async fn install(&self, project: &ProjectSpec) -> PkgdevResult<()> {
        let dir = self.workspace.project_dir(&project.repo);
        debug!("Installing {} ({})", project.repo, self.builder.install_mode());
        self.builder.install(&dir).await
    }

    async fn uninstall(&self, project: &ProjectSpec) -> PkgdevResult<()> {
        let removed = self.builder.uninstall(&project.repo).await?;
        for path in removed {
            debug!("Removed {}", path.display());
        }
        Ok(())
    }

    async fn clean(&self, project: &ProjectSpec) -> PkgdevResult<()> {
        let dir = self.workspace.project_dir(&project.repo);
        if !self.builder.clean(&dir).await? {
            debug!("{} has no build directory", project.repo);
        }
        Ok(())
    }
}
