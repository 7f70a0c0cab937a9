use tracing::debug;

use crate::common::error::PkgdevError;
use crate::common::result::PkgdevResult;
use crate::domain::entities::{ProjectRegistry, ProjectSpec, Workspace};

/// Builds the project registry of a workspace
#[derive(Debug, Clone, Default)]
pub struct RegistryLoader;

impl RegistryLoader {
    pub fn new() -> Self {
        Self
    }

    /// Registry from the configured project list, extended with every
    /// unregistered checkout found directly under the workspace root
    pub fn load(&self, workspace: &Workspace) -> PkgdevResult<ProjectRegistry> {
        let specs = workspace.config.project_specs();
        let mut registry = ProjectRegistry::from_specs(&specs).map_err(|e| {
            PkgdevError::config_error_with_source("Invalid project list", None, e)
        })?;

        for name in workspace.discover_checkouts() {
            if registry.register_if_absent(ProjectSpec::bare(name.as_str())) {
                debug!("Discovered checkout {}", name);
            }
        }

        debug!("Registry holds {} projects", registry.len());
        Ok(registry)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::entities::registry::DEFAULT_PROJECTS;
    use crate::domain::entities::WorkspaceConfig;
    use pretty_assertions::assert_eq;
    use std::fs;
    use std::path::Path;
    use tempfile::TempDir;

    fn make_checkout(root: &Path, name: &str) {
        let dir = root.join(name);
        fs::create_dir_all(dir.join(".git")).unwrap();
        fs::write(dir.join("setup.py"), "").unwrap();
    }

    #[test]
    fn test_defaults_without_config() {
        let temp_dir = TempDir::new().unwrap();
        let workspace = Workspace::new(temp_dir.path(), WorkspaceConfig::new());

        let registry = RegistryLoader::new().load(&workspace).unwrap();
        assert_eq!(registry, ProjectRegistry::defaults());
        assert_eq!(registry.len(), DEFAULT_PROJECTS.len());
    }

    #[test]
    fn test_override_replaces_defaults() {
        let temp_dir = TempDir::new().unwrap();
        let config = WorkspaceConfig::new().with_projects(vec!["acct:mine".to_string()]);
        let workspace = Workspace::new(temp_dir.path(), config);

        let registry = RegistryLoader::new().load(&workspace).unwrap();
        assert_eq!(registry.repos().collect::<Vec<_>>(), vec!["mine"]);
        assert!(!registry.contains("numpy"));
    }

    #[test]
    fn test_discovery_adds_unregistered_checkouts() {
        let temp_dir = TempDir::new().unwrap();
        make_checkout(temp_dir.path(), "localpkg");
        let config = WorkspaceConfig::new().with_projects(vec!["numpy".to_string()]);
        let workspace = Workspace::new(temp_dir.path(), config);

        let registry = RegistryLoader::new().load(&workspace).unwrap();
        assert_eq!(registry.namespace_of("localpkg"), Some("localpkg"));
        assert_eq!(registry.len(), 2);
    }

    #[test]
    fn test_discovery_never_overrides_registered_name() {
        let temp_dir = TempDir::new().unwrap();
        make_checkout(temp_dir.path(), "pandas");
        let workspace = Workspace::new(temp_dir.path(), WorkspaceConfig::new());

        let registry = RegistryLoader::new().load(&workspace).unwrap();
        assert_eq!(registry.namespace_of("pandas"), Some("pandas-dev"));
        assert_eq!(registry.len(), DEFAULT_PROJECTS.len());
    }

    #[test]
    fn test_malformed_project_list_is_config_error() {
        let temp_dir = TempDir::new().unwrap();
        let config = WorkspaceConfig::new().with_projects(vec!["acct:".to_string()]);
        let workspace = Workspace::new(temp_dir.path(), config);

        let result = RegistryLoader::new().load(&workspace);
        assert!(matches!(result, Err(PkgdevError::ConfigError { .. })));
    }
}
