/// Presentation layer: command-line parsing and output
pub mod cli;
