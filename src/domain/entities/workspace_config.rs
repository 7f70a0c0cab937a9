use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use super::project::DEFAULT_HOST;
use super::registry::DEFAULT_PROJECTS;

/// Build script used when the configuration names none
pub const DEFAULT_BUILD_DESCRIPTOR: &str = "setup.py";

/// Interpreter used when the configuration names none
pub const DEFAULT_PYTHON: &str = "python";

/// Contents of the `.pkgdev.yaml` configuration file
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct WorkspaceConfig {
    /// Project list replacing the built-in defaults
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub projects: Option<Vec<String>>,

    /// Append `projects` to the defaults instead of replacing them
    #[serde(default)]
    pub extend_defaults: bool,

    /// Install prefix; takes precedence over the environment
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub prefix: Option<PathBuf>,

    /// Base URL of the hosting service
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub host: Option<String>,

    /// Interpreter running the build descriptor
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub python: Option<String>,

    /// Build descriptor file name
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub build_descriptor: Option<String>,
}

impl WorkspaceConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_projects(mut self, projects: Vec<String>) -> Self {
        self.projects = Some(projects);
        self
    }

    pub fn with_extend_defaults(mut self, extend: bool) -> Self {
        self.extend_defaults = extend;
        self
    }

    /// Project specifications the registry starts from.
    ///
    /// An override list replaces the defaults unless `extend_defaults` is set,
    /// in which case it is appended after them.
    pub fn project_specs(&self) -> Vec<String> {
        let defaults = DEFAULT_PROJECTS.iter().map(|s| s.to_string());
        match &self.projects {
            None => defaults.collect(),
            Some(projects) if self.extend_defaults => {
                defaults.chain(projects.iter().cloned()).collect()
            }
            Some(projects) => projects.clone(),
        }
    }

    pub fn host(&self) -> &str {
        self.host.as_deref().unwrap_or(DEFAULT_HOST)
    }

    pub fn python(&self) -> &str {
        self.python.as_deref().unwrap_or(DEFAULT_PYTHON)
    }

    pub fn build_descriptor(&self) -> &str {
        self.build_descriptor
            .as_deref()
            .unwrap_or(DEFAULT_BUILD_DESCRIPTOR)
    }
}
