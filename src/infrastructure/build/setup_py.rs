use regex::Regex;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

use crate::common::error::PkgdevError;
use crate::common::result::{PkgdevResult, ResultExt};
use crate::domain::value_objects::install_mode::InstallMode;
use crate::infrastructure::filesystem::PathRemover;
use crate::infrastructure::process::{CommandSpec, ProcessRunner};

/// Directory `clean` removes from a checkout
pub const BUILD_DIR: &str = "build";

const VERSION_QUERY: &str = "import sys; print('%d.%d' % sys.version_info[:2])";
const USER_SITE_QUERY: &str = "import site; print(site.getusersitepackages())";
const METADATA_SUFFIXES: &[&str] = &[".egg-info", ".egg", ".dist-info", ".egg-link"];

/// Builds, installs and removes packages through their `setup.py`
#[derive(Debug, Clone)]
pub struct SetupPyBuilder {
    python: String,
    descriptor: String,
    install_mode: InstallMode,
    runner: ProcessRunner,
    remover: PathRemover,
}

impl SetupPyBuilder {
    pub fn new(
        python: impl Into<String>,
        descriptor: impl Into<String>,
        install_mode: InstallMode,
        runner: ProcessRunner,
    ) -> Self {
        let remover = if runner.is_dry_run() {
            PathRemover::dry_run()
        } else {
            PathRemover::new()
        };
        Self {
            python: python.into(),
            descriptor: descriptor.into(),
            install_mode,
            runner,
            remover,
        }
    }

    pub fn install_mode(&self) -> &InstallMode {
        &self.install_mode
    }

    /// Directory packages are installed into for the current install mode
    pub async fn install_lib_dir(&self) -> PkgdevResult<PathBuf> {
        match &self.install_mode {
            InstallMode::User => {
                let query = CommandSpec::new(&self.python).args(["-c", USER_SITE_QUERY]);
                let site = self.runner.output(&query).await?;
                if site.is_empty() {
                    return Err(PkgdevError::internal_error(format!(
                        "{} reported no user site directory",
                        self.python
                    )));
                }
                Ok(PathBuf::from(site))
            }
            InstallMode::Prefix(prefix) => {
                let query = CommandSpec::new(&self.python).args(["-c", VERSION_QUERY]);
                let reported = self.runner.output(&query).await?;
                let version = parse_python_version(&reported).ok_or_else(|| {
                    PkgdevError::internal_error(format!(
                        "Unexpected interpreter version '{}'",
                        reported
                    ))
                })?;
                Ok(prefix_lib_dir(prefix, &version))
            }
        }
    }

    fn install_command(&self, project_dir: &Path) -> CommandSpec {
        CommandSpec::new(&self.python)
            .args([self.descriptor.as_str(), "install"])
            .arg(self.install_mode.install_argument())
            .current_dir(project_dir)
    }

    /// Build and install the checkout at `project_dir`
    pub async fn install(&self, project_dir: &Path) -> PkgdevResult<()> {
        let mut command = self.install_command(project_dir);

        if let InstallMode::Prefix(_) = self.install_mode {
            // setuptools refuses a prefix whose library directory is not importable
            let lib_dir = self.install_lib_dir().await?;
            if !self.runner.is_dry_run() {
                tokio::fs::create_dir_all(&lib_dir)
                    .await
                    .with_filesystem_error(
                        "Failed to create install directory",
                        Some(lib_dir.clone()),
                    )?;
            }
            command = command.env("PYTHONPATH", python_path_with(&lib_dir)?);
        }

        self.runner.run(&command).await
    }

    /// Remove everything installed for `repo`.
    /// Returns the removed paths; an uninstalled package is not an error.
    pub async fn uninstall(&self, repo: &str) -> PkgdevResult<Vec<PathBuf>> {
        let lib_dir = self.install_lib_dir().await?;
        if !lib_dir.is_dir() {
            debug!("Install directory {} does not exist", lib_dir.display());
            return Ok(Vec::new());
        }

        let module = module_name(repo);
        let mut entries = tokio::fs::read_dir(&lib_dir)
            .await
            .with_filesystem_error("Failed to list install directory", Some(lib_dir.clone()))?;

        let mut targets = Vec::new();
        while let Some(entry) = entries
            .next_entry()
            .await
            .with_filesystem_error("Failed to list install directory", Some(lib_dir.clone()))?
        {
            if let Some(name) = entry.file_name().to_str() {
                if is_installed_entry(name, &module) {
                    targets.push(entry.path());
                }
            }
        }
        targets.sort();

        let mut removed = Vec::new();
        for path in targets {
            if self.remover.remove(&path).await? {
                removed.push(path);
            }
        }
        if removed.is_empty() {
            info!("{} is not installed in {}", repo, lib_dir.display());
        }
        Ok(removed)
    }

    /// Remove build artifacts from the checkout at `project_dir`
    pub async fn clean(&self, project_dir: &Path) -> PkgdevResult<bool> {
        self.remover.remove(&project_dir.join(BUILD_DIR)).await
    }
}

/// Extract `X.Y` from the interpreter's version report
pub fn parse_python_version(reported: &str) -> Option<String> {
    let pattern = Regex::new(r"(\d+)\.(\d+)").ok()?;
    let captures = pattern.captures(reported)?;
    Some(format!("{}.{}", &captures[1], &captures[2]))
}

/// `<prefix>/lib/python<X.Y>/site-packages`
pub fn prefix_lib_dir(prefix: &Path, version: &str) -> PathBuf {
    prefix
        .join("lib")
        .join(format!("python{}", version))
        .join("site-packages")
}

/// Importable module name of a repository
pub fn module_name(repo: &str) -> String {
    repo.replace('-', "_").to_lowercase()
}

/// Whether an install-directory entry belongs to `module`
pub fn is_installed_entry(file_name: &str, module: &str) -> bool {
    let lowered = file_name.to_lowercase();
    if lowered == module || lowered == format!("{}.py", module) {
        return true;
    }
    let Some((dist, _)) = lowered.split_once('-') else {
        return false;
    };
    dist.replace('.', "_") == module
        && METADATA_SUFFIXES
            .iter()
            .any(|suffix| lowered.ends_with(suffix))
}

fn python_path_with(lib_dir: &Path) -> PkgdevResult<String> {
    let mut paths = vec![lib_dir.to_path_buf()];
    if let Some(existing) = std::env::var_os("PYTHONPATH") {
        paths.extend(std::env::split_paths(&existing));
    }
    let joined = std::env::join_paths(paths).map_err(|e| {
        PkgdevError::internal_error(format!("Cannot build PYTHONPATH: {}", e))
    })?;
    Ok(joined.to_string_lossy().into_owned())
}
