/// Infrastructure layer modules
///
/// This layer provides concrete implementations for external system interactions:
/// - SCM operations (git clone and pull)
/// - Package builds through `setup.py`
/// - File system operations (configuration file, path removal)
/// - Process execution
pub mod build;
pub mod filesystem;
pub mod package_operations;
pub mod process;
pub mod scm;

// Re-export commonly used types
pub use filesystem::{config_store::ConfigStore, path_remover::PathRemover};
pub use package_operations::{LocalPackageOperations, PackageOperations};
pub use process::{CommandSpec, ProcessRunner};
pub use scm::{GitScm, ScmError, ScmOperations};
