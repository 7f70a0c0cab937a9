pub mod project;
pub mod registry;
pub mod workspace;
pub mod workspace_config;

pub use project::ProjectSpec;
pub use registry::ProjectRegistry;
pub use workspace::Workspace;
pub use workspace_config::WorkspaceConfig;
