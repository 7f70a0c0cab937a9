/// One handler per top-level mode of the CLI
pub mod list;
pub mod run;

use std::path::Path;

use crate::application::services::RegistryLoader;
use crate::common::result::PkgdevResult;
use crate::domain::entities::{ProjectRegistry, Workspace};
use crate::domain::value_objects::InstallMode;
use crate::infrastructure::ConfigStore;

/// Workspace at `root` with its configuration applied, plus its registry
pub async fn load_workspace(
    root: &Path,
    env_prefix: Option<&str>,
) -> PkgdevResult<(Workspace, ProjectRegistry)> {
    let config = ConfigStore::new().load(root).await?.unwrap_or_default();
    let install_mode = InstallMode::resolve(config.prefix.as_deref(), env_prefix);
    let workspace = Workspace::new(root, config).with_install_mode(install_mode);
    let registry = RegistryLoader::new().load(&workspace)?;
    Ok((workspace, registry))
}
