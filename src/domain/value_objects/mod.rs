pub mod action;
pub mod install_mode;

pub use action::{Action, Operation};
pub use install_mode::InstallMode;
