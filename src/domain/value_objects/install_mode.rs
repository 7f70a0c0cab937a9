use std::fmt;
use std::path::{Path, PathBuf};

/// Environment variable supplying the default install prefix
pub const PREFIX_ENV_VAR: &str = "PKGDEV_PREFIX";

/// Where packages get installed
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InstallMode {
    /// Per-user site directory
    User,
    /// Installation rooted at a prefix directory
    Prefix(PathBuf),
}

impl InstallMode {
    /// Pick the install mode: the config file wins over the environment,
    /// and per-user installation is the fallback. Blank values count as unset.
    pub fn resolve(config_prefix: Option<&Path>, env_prefix: Option<&str>) -> Self {
        if let Some(prefix) = config_prefix.filter(|p| !p.as_os_str().is_empty()) {
            return InstallMode::Prefix(prefix.to_path_buf());
        }
        match env_prefix.map(str::trim).filter(|p| !p.is_empty()) {
            Some(prefix) => InstallMode::Prefix(PathBuf::from(prefix)),
            None => InstallMode::User,
        }
    }

    /// Argument handed to the build tool's install command
    pub fn install_argument(&self) -> String {
        match self {
            InstallMode::User => "--user".to_string(),
            InstallMode::Prefix(prefix) => format!("--prefix={}", prefix.display()),
        }
    }
}

impl fmt::Display for InstallMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            InstallMode::User => write!(f, "user"),
            InstallMode::Prefix(prefix) => write!(f, "prefix {}", prefix.display()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_prefix_beats_environment() {
        let mode = InstallMode::resolve(Some(Path::new("/opt/config")), Some("/opt/env"));
        assert_eq!(mode, InstallMode::Prefix(PathBuf::from("/opt/config")));
    }

    #[test]
    fn test_environment_prefix_used_without_config() {
        let mode = InstallMode::resolve(None, Some("/opt/env"));
        assert_eq!(mode, InstallMode::Prefix(PathBuf::from("/opt/env")));
        assert_eq!(mode.install_argument(), "--prefix=/opt/env");
    }

    #[test]
    fn test_user_mode_fallback() {
        assert_eq!(InstallMode::resolve(None, None), InstallMode::User);
        assert_eq!(InstallMode::resolve(None, Some("  ")), InstallMode::User);
        assert_eq!(InstallMode::User.install_argument(), "--user");
    }
}
