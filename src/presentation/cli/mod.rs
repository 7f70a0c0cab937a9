pub mod commands;

use clap::{CommandFactory, Parser};
use colored::Colorize;
use std::env;
use std::path::PathBuf;
use std::process::exit;

use crate::common::error::PkgdevError;
use crate::common::result::{PkgdevResult, ResultExt};
use crate::domain::value_objects::action::Action;
use crate::domain::value_objects::install_mode::PREFIX_ENV_VAR;
use crate::infrastructure::process::ProcessRunner;

/// pkgdev - clone, update and install a workspace of package checkouts
#[derive(Parser, Debug)]
#[command(name = "pkgdev")]
#[command(about = "Clone, update and install a workspace of package checkouts")]
#[command(version)]
#[command(
    override_usage = "pkgdev [OPTIONS] [ACTION|TARGET]...",
    after_help = Action::help_table() + "\nTargets are `repo` or `namespace:repo`; `all` (the default) \
means every checked-out project, or every registered project when cloning."
)]
pub struct Cli {
    /// Actions and targets, in any order
    #[arg(value_name = "ACTION|TARGET")]
    pub args: Vec<String>,

    /// Enable verbose output
    #[arg(short, long)]
    pub verbose: bool,

    /// Disable colored output
    #[arg(long)]
    pub no_color: bool,

    /// Working directory (defaults to current directory)
    #[arg(short = 'C', long)]
    pub directory: Option<PathBuf>,

    /// Print external commands and removals instead of performing them
    #[arg(short = 'n', long)]
    pub dry_run: bool,

    /// List registered projects and exit
    #[arg(short, long, conflicts_with = "args")]
    pub list: bool,
}

/// CLI application runner
pub struct CliApp {
    cli: Cli,
}

impl CliApp {
    pub fn new() -> Self {
        Self { cli: Cli::parse() }
    }

    pub fn from_cli(cli: Cli) -> Self {
        Self { cli }
    }

    pub fn verbose(&self) -> bool {
        self.cli.verbose
    }

    pub async fn run(self) -> anyhow::Result<()> {
        colored::control::set_override(!self.cli.no_color);

        match self.handle_command().await {
            Ok(()) => Ok(()),
            Err(e) => {
                report_error(&e);
                exit(1);
            }
        }
    }

    async fn handle_command(&self) -> PkgdevResult<()> {
        if let Some(ref dir) = self.cli.directory {
            env::set_current_dir(dir)
                .with_filesystem_error("Cannot change directory", Some(dir.clone()))?;
        }
        let root = env::current_dir().with_filesystem_error("Cannot read current directory", None)?;
        let env_prefix = env::var(PREFIX_ENV_VAR).ok();

        if self.cli.list {
            use crate::presentation::cli::commands::list::ListCommand;
            return ListCommand::new(root, env_prefix).execute().await;
        }

        use crate::presentation::cli::commands::run::RunCommand;
        let runner = if self.cli.dry_run {
            ProcessRunner::dry_run()
        } else {
            ProcessRunner::new()
        };
        RunCommand::new(root, self.cli.args.clone(), env_prefix, runner)
            .execute()
            .await
    }
}

impl Default for CliApp {
    fn default() -> Self {
        Self::new()
    }
}

fn report_error(error: &PkgdevError) {
    if error.wants_usage() {
        // Help goes to stdout, the reason for failing to stderr
        let _ = Cli::command().print_help();
        println!();
    }

    match error.invalid_target_names() {
        Some((label, names)) => {
            for name in names {
                eprintln!("{} invalid {}: {}", "Error:".red().bold(), label, name);
            }
        }
        None => eprintln!("{} {}", "Error:".red().bold(), error),
    }
}
