pub mod registry_loader;

pub use registry_loader::RegistryLoader;
