pub mod command_runner;

pub use command_runner::{CommandSpec, ProcessRunner};
