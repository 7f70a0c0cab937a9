use colored::Colorize;
use std::path::{Path, PathBuf};
use std::process::Stdio;
use tokio::process::Command;
use tracing::debug;

use crate::common::error::PkgdevError;
use crate::common::result::PkgdevResult;

/// An external command line together with its working directory and environment
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandSpec {
    pub program: String,
    pub args: Vec<String>,
    pub working_dir: Option<PathBuf>,
    pub envs: Vec<(String, String)>,
}

impl CommandSpec {
    pub fn new(program: impl Into<String>) -> Self {
        Self {
            program: program.into(),
            args: Vec::new(),
            working_dir: None,
            envs: Vec::new(),
        }
    }

    pub fn arg(mut self, arg: impl Into<String>) -> Self {
        self.args.push(arg.into());
        self
    }

    pub fn args<I, S>(mut self, args: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.args.extend(args.into_iter().map(Into::into));
        self
    }

    pub fn current_dir(mut self, dir: impl AsRef<Path>) -> Self {
        self.working_dir = Some(dir.as_ref().to_path_buf());
        self
    }

    pub fn env(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.envs.push((key.into(), value.into()));
        self
    }

    /// Command line as a single printable string
    pub fn display(&self) -> String {
        if self.args.is_empty() {
            self.program.clone()
        } else {
            format!("{} {}", self.program, self.args.join(" "))
        }
    }

    fn to_command(&self) -> Command {
        let mut cmd = Command::new(&self.program);
        cmd.args(&self.args);
        if let Some(dir) = &self.working_dir {
            cmd.current_dir(dir);
        }
        for (key, value) in &self.envs {
            cmd.env(key, value);
        }
        cmd
    }
}

/// Runs external commands one at a time, failing on non-zero exit
#[derive(Debug, Clone, Default)]
pub struct ProcessRunner {
    dry_run: bool,
}

impl ProcessRunner {
    pub fn new() -> Self {
        Self::default()
    }

    /// Runner that prints mutating commands instead of running them
    pub fn dry_run() -> Self {
        Self { dry_run: true }
    }

    pub fn is_dry_run(&self) -> bool {
        self.dry_run
    }

    /// Run `spec` with inherited stdio and wait for it to finish
    pub async fn run(&self, spec: &CommandSpec) -> PkgdevResult<()> {
        let command_line = spec.display();
        if self.dry_run {
            println!("{} {}", "would run:".dimmed(), command_line);
            return Ok(());
        }

        debug!("Running {} in {:?}", command_line, spec.working_dir);
        let status = spec
            .to_command()
            .stdin(Stdio::null())
            .stdout(Stdio::inherit())
            .stderr(Stdio::inherit())
            .status()
            .await
            .map_err(|e| {
                PkgdevError::command_error_with_source(
                    format!("Failed to start '{}'", command_line),
                    command_line.clone(),
                    e,
                )
            })?;

        if !status.success() {
            return Err(exit_error(&command_line, status.code()));
        }
        Ok(())
    }

    /// Run a read-only query and return its trimmed stdout.
    /// Queries run even in dry-run mode.
    pub async fn output(&self, spec: &CommandSpec) -> PkgdevResult<String> {
        let command_line = spec.display();
        debug!("Querying {}", command_line);

        let output = spec
            .to_command()
            .stdin(Stdio::null())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .output()
            .await
            .map_err(|e| {
                PkgdevError::command_error_with_source(
                    format!("Failed to start '{}'", command_line),
                    command_line.clone(),
                    e,
                )
            })?;

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr);
            debug!("{} failed: {}", command_line, stderr.trim());
            return Err(exit_error(&command_line, output.status.code()));
        }

        Ok(String::from_utf8_lossy(&output.stdout).trim().to_string())
    }
}

fn exit_error(command_line: &str, code: Option<i32>) -> PkgdevError {
    let message = match code {
        Some(code) => format!("'{}' exited with status {}", command_line, code),
        None => format!("'{}' was terminated by a signal", command_line),
    };
    PkgdevError::command_error(message, command_line, code)
}
