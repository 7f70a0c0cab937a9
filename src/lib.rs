//! # pkgdev - package workspace manager
//!
//! `pkgdev` keeps a directory of package source checkouts up to date. It clones
//! projects from a hosting service, pulls new commits, and builds, installs,
//! uninstalls or cleans them through each package's `setup.py`.
//!
//! ## Quick Start
//!
//! ```bash
//! pkgdev clone numpy pandas-dev:pandas   # clone and register two projects
//! pkgdev update                          # pull and install every checkout
//! pkgdev clean_update scipy              # pull, clean, uninstall, install
//! pkgdev --list                          # show the registry
//! ```
//!
//! Actions and targets may be given in any order. With no target, or the
//! target `all`, an action applies to every registered project that is
//! checked out; `clone` applies to every registered project.
//!
//! ## Configuration
//!
//! An optional `.pkgdev.yaml` in the working directory may set:
//!
//! ```yaml
//! projects: [numpy, "pandas-dev:pandas"]
//! extend_defaults: false
//! prefix: /opt/py
//! host: https://github.com
//! python: python3
//! build_descriptor: setup.py
//! ```
//!
//! Without a `prefix` the `PKGDEV_PREFIX` environment variable is used, and
//! without either packages are installed per user.
//!
//! ## Architecture
//!
//! - [`domain`]: projects, the registry, the workspace and the action table
//! - [`application`]: registry loading, argument classification, target
//!   resolution and dispatch
//! - [`infrastructure`]: git, `setup.py`, the configuration file and process
//!   execution
//! - [`presentation`]: CLI interface
//! - [`common`]: error handling
//!
//! ## Using the Library
//!
//! ```rust,no_run
//! use pkgdev::application::services::RegistryLoader;
//! use pkgdev::application::use_cases::{classify_arguments, resolve_targets, DispatchActionsUseCase};
//! use pkgdev::domain::entities::{Workspace, WorkspaceConfig};
//! use pkgdev::infrastructure::{LocalPackageOperations, ProcessRunner};
//!
//! # async fn example() -> pkgdev::Result<()> {
//! let workspace = Workspace::new(".", WorkspaceConfig::default());
//! let mut registry = RegistryLoader::new().load(&workspace)?;
//!
//! let classified = classify_arguments(&["update", "numpy"])?;
//! let targets = resolve_targets(&classified.targets, &classified.actions, &registry, &workspace)?;
//!
//! let operations = LocalPackageOperations::new(workspace, ProcessRunner::dry_run());
//! let report = DispatchActionsUseCase::new(&operations)
//!     .execute(&classified.actions, &targets, &mut registry)
//!     .await?;
//! println!("{} operations", report.executed.len());
//! # Ok(())
//! # }
//! ```

pub mod application;
pub mod common;
pub mod domain;
pub mod infrastructure;
pub mod presentation;

// Re-export commonly used types for convenience
pub use crate::common::error::PkgdevError;
pub use crate::common::result::PkgdevResult as Result;
