use colored::Colorize;
use tracing::{debug, warn};

use super::resolve_targets::{validate_targets, ResolvedTargets};
use crate::common::result::PkgdevResult;
use crate::domain::entities::{ProjectRegistry, ProjectSpec};
use crate::domain::value_objects::{Action, Operation};
use crate::infrastructure::package_operations::PackageOperations;

/// Label used when reporting unknown targets
pub const TARGET_LABEL: &str = "target";

/// One base operation that ran to completion
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExecutedOperation {
    pub operation: Operation,
    pub repo: String,
}

/// Everything a dispatch run did, in execution order
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DispatchReport {
    pub executed: Vec<ExecutedOperation>,
}

impl DispatchReport {
    /// Number of operations of kind `operation` that ran
    pub fn count(&self, operation: Operation) -> usize {
        self.executed
            .iter()
            .filter(|executed| executed.operation == operation)
            .count()
    }
}

/// Runs the requested actions against the resolved targets.
///
/// Cloning always runs first and registers its targets so that they pass
/// validation; every other action runs afterwards in command-line order.
/// The first failing operation ends the run.
pub struct DispatchActionsUseCase<'a, O: PackageOperations + ?Sized> {
    operations: &'a O,
}

impl<'a, O: PackageOperations + ?Sized> DispatchActionsUseCase<'a, O> {
    pub fn new(operations: &'a O) -> Self {
        Self { operations }
    }

    pub async fn execute(
        &self,
        actions: &[Action],
        targets: &ResolvedTargets,
        registry: &mut ProjectRegistry,
    ) -> PkgdevResult<DispatchReport> {
        let mut report = DispatchReport::default();

        let cloning = actions.contains(&Action::Clone);
        if cloning {
            for (repo, namespace) in targets {
                let project = ProjectSpec::new(repo.as_str(), namespace.as_str());
                self.run(Operation::Clone, &project, &mut report).await?;
                if let Some(previous) = registry.register(project) {
                    if previous != *namespace {
                        warn!(
                            "{} was registered under {}, now using {}",
                            repo, previous, namespace
                        );
                    }
                }
            }
        }

        validate_targets(targets.keys().map(String::as_str), registry, TARGET_LABEL)?;

        let remaining: Vec<Action> = actions
            .iter()
            .copied()
            .filter(|action| *action != Action::Clone)
            .collect();
        if remaining.is_empty() && !cloning {
            warn!("No action requested");
        }

        for action in remaining {
            debug!("Running {} on {} targets", action, targets.len());
            for (repo, namespace) in targets {
                let project = ProjectSpec::new(repo.as_str(), namespace.as_str());
                for operation in action.operations() {
                    self.run(*operation, &project, &mut report).await?;
                }
            }
        }

        Ok(report)
    }

    async fn run(
        &self,
        operation: Operation,
        project: &ProjectSpec,
        report: &mut DispatchReport,
    ) -> PkgdevResult<()> {
        println!("{} {} {}", "::".blue().bold(), operation, project.repo.bold());
        match operation {
            Operation::Clone => self.operations.clone_project(project).await?,
            Operation::Pull => self.operations.pull(project).await?,
            Operation::Install => self.operations.install(project).await?,
            Operation::Uninstall => self.operations.uninstall(project).await?,
            Operation::Clean => self.operations.clean(project).await?,
        }
        report.executed.push(ExecutedOperation {
            operation,
            repo: project.repo.clone(),
        });
        Ok(())
    }
}
