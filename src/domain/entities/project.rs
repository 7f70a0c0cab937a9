use std::fmt;
use std::str::FromStr;
use url::Url;

use crate::common::error::PkgdevError;

/// Default hosting service projects are cloned from
pub const DEFAULT_HOST: &str = "https://github.com";

/// A project reference: repository name plus the account owning it
///
/// Written either as `namespace:repo` or as a bare `repo`, in which case the
/// namespace is the repository name itself.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ProjectSpec {
    /// Repository name, also the checkout directory name
    pub repo: String,
    /// Account or organization on the hosting service
    pub namespace: String,
}

impl ProjectSpec {
    pub fn new(repo: impl Into<String>, namespace: impl Into<String>) -> Self {
        Self {
            repo: repo.into(),
            namespace: namespace.into(),
        }
    }

    /// Project whose namespace is the same as its repository name
    pub fn bare(repo: impl Into<String>) -> Self {
        let repo = repo.into();
        Self {
            namespace: repo.clone(),
            repo,
        }
    }

    /// Clone URL of this project on `host`
    pub fn clone_url(&self, host: &str) -> Result<Url, PkgdevError> {
        let mut base = host.trim().to_string();
        if !base.ends_with('/') {
            base.push('/');
        }
        let parse_error = |e: url::ParseError| {
            PkgdevError::config_error_with_source(format!("Invalid host URL '{}'", host), None, e)
        };
        Url::parse(&base)
            .and_then(|url| url.join(&format!("{}/{}.git", self.namespace, self.repo)))
            .map_err(parse_error)
    }
}

/// Why `part` cannot name a directory directly under the workspace root
fn invalid_part(part: &str) -> Option<&'static str> {
    if part.is_empty() {
        Some("is empty")
    } else if part == "." || part == ".." {
        Some("cannot be '.' or '..'")
    } else if part.contains(['/', '\\']) {
        Some("cannot contain a path separator")
    } else if part.contains(':') {
        Some("cannot contain ':'")
    } else {
        None
    }
}

impl FromStr for ProjectSpec {
    type Err = PkgdevError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (namespace, repo) = match s.split_once(':') {
            Some((namespace, repo)) => (Some(namespace), repo),
            None => (None, s),
        };
        if let Some(namespace) = namespace {
            if let Some(reason) = invalid_part(namespace) {
                return Err(PkgdevError::invalid_target_spec(
                    s,
                    format!("namespace {}", reason),
                ));
            }
        }
        if let Some(reason) = invalid_part(repo) {
            return Err(PkgdevError::invalid_target_spec(
                s,
                format!("repository name {}", reason),
            ));
        }
        Ok(match namespace {
            Some(namespace) => ProjectSpec::new(repo, namespace),
            None => ProjectSpec::bare(repo),
        })
    }
}

impl fmt::Display for ProjectSpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.namespace == self.repo {
            write!(f, "{}", self.repo)
        } else {
            write!(f, "{}:{}", self.namespace, self.repo)
        }
    }
}
