/// Package build tooling
pub mod setup_py;

pub use setup_py::SetupPyBuilder;
