use std::collections::BTreeMap;

use super::project::ProjectSpec;
use crate::common::result::PkgdevResult;

/// Project list used when no configuration overrides it
pub const DEFAULT_PROJECTS: &[&str] = &[
    "numpy",
    "scipy",
    "matplotlib",
    "ipython",
    "pandas-dev:pandas",
    "scikit-learn",
    "cython:cython",
];

/// Every known project, keyed by repository name
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProjectRegistry {
    projects: BTreeMap<String, String>,
}

impl ProjectRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registry built from `namespace:repo` / `repo` specifications.
    /// A later specification for the same repository replaces an earlier one.
    pub fn from_specs<S: AsRef<str>>(specs: &[S]) -> PkgdevResult<Self> {
        let mut registry = Self::new();
        for spec in specs {
            let spec: ProjectSpec = spec.as_ref().parse()?;
            registry.register(spec);
        }
        Ok(registry)
    }

    /// Registry of the built-in default projects
    pub fn defaults() -> Self {
        let mut registry = Self::new();
        for spec in DEFAULT_PROJECTS {
            if let Ok(spec) = spec.parse::<ProjectSpec>() {
                registry.register(spec);
            }
        }
        registry
    }

    /// Add or overwrite an entry, returning the namespace it replaced
    pub fn register(&mut self, spec: ProjectSpec) -> Option<String> {
        self.projects.insert(spec.repo, spec.namespace)
    }

    /// Add an entry only when the repository name is still unknown
    pub fn register_if_absent(&mut self, spec: ProjectSpec) -> bool {
        if self.projects.contains_key(&spec.repo) {
            return false;
        }
        self.projects.insert(spec.repo, spec.namespace);
        true
    }

    pub fn contains(&self, repo: &str) -> bool {
        self.projects.contains_key(repo)
    }

    pub fn namespace_of(&self, repo: &str) -> Option<&str> {
        self.projects.get(repo).map(String::as_str)
    }

    pub fn repos(&self) -> impl Iterator<Item = &str> {
        self.projects.keys().map(String::as_str)
    }

    /// Entries as project specifications, sorted by repository name
    pub fn specs(&self) -> Vec<ProjectSpec> {
        self.projects
            .iter()
            .map(|(repo, namespace)| ProjectSpec::new(repo.clone(), namespace.clone()))
            .collect()
    }

    /// Names in `repos` that are not registered, sorted
    pub fn unknown<'a, I>(&self, repos: I) -> Vec<String>
    where
        I: IntoIterator<Item = &'a str>,
    {
        let mut unknown: Vec<String> = repos
            .into_iter()
            .filter(|repo| !self.contains(repo))
            .map(str::to_string)
            .collect();
        unknown.sort();
        unknown.dedup();
        unknown
    }

    pub fn len(&self) -> usize {
        self.projects.len()
    }

    pub fn is_empty(&self) -> bool {
        self.projects.is_empty()
    }

    pub fn as_map(&self) -> &BTreeMap<String, String> {
        &self.projects
    }
}
