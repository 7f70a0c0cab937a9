use std::collections::{BTreeMap, BTreeSet};

use crate::common::error::PkgdevError;
use crate::common::result::PkgdevResult;
use crate::domain::entities::{ProjectRegistry, ProjectSpec, Workspace};
use crate::domain::value_objects::Action;

/// Pseudo-target standing for every known project
pub const ALL_TARGET: &str = "all";

/// Repository name → namespace of the projects an invocation acts on
pub type ResolvedTargets = BTreeMap<String, String>;

fn means_all(targets: &BTreeSet<String>) -> bool {
    targets.is_empty() || (targets.len() == 1 && targets.contains(ALL_TARGET))
}

/// Expand the requested targets into concrete projects.
///
/// No targets or `all` means the whole registry when cloning, and otherwise
/// only the registered projects that are checked out. Explicit targets are
/// parsed as they are; registry membership is checked by [`validate_targets`].
pub fn resolve_targets(
    targets: &BTreeSet<String>,
    actions: &[Action],
    registry: &ProjectRegistry,
    workspace: &Workspace,
) -> PkgdevResult<ResolvedTargets> {
    if means_all(targets) {
        let cloning = actions.contains(&Action::Clone);
        let resolved = registry
            .as_map()
            .iter()
            .filter(|(repo, _)| cloning || workspace.is_present(repo))
            .map(|(repo, namespace)| (repo.clone(), namespace.clone()))
            .collect();
        return Ok(resolved);
    }

    let mut resolved = ResolvedTargets::new();
    for target in targets {
        let spec: ProjectSpec = target.parse()?;
        resolved.insert(spec.repo, spec.namespace);
    }
    Ok(resolved)
}

/// Fail with every name in `repos` that the registry does not know
pub fn validate_targets<'a, I>(repos: I, registry: &ProjectRegistry, label: &str) -> PkgdevResult<()>
where
    I: IntoIterator<Item = &'a str>,
{
    let unknown = registry.unknown(repos);
    if unknown.is_empty() {
        Ok(())
    } else {
        Err(PkgdevError::invalid_targets(label, unknown))
    }
}
