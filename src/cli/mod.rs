//! Command-line interface for gitcc
//!
//! This module provides the main CLI structure and command dispatch.
//! It uses clap for argument parsing and maps outcomes to exit codes:
//! `0` success, `1` a check or hook action failed, `2` setup error
//! (bad repository, unknown validator, unreadable file, ...).

use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::{Path, PathBuf};
use std::process::ExitCode;

mod commands;
mod output;

pub use output::Output;

use crate::config::{ConfigLoader, GitccConfig};
use crate::git::GitRepo;
use crate::validation::{CommitValidator, ValidatorSelection};

pub const EXIT_SUCCESS: u8 = 0;
pub const EXIT_FAILURE: u8 = 1;
pub const EXIT_SETUP_ERROR: u8 = 2;

/// gitcc - check commit messages against pluggable rules
#[derive(Parser)]
#[command(name = "gitcc", author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Built-in validator to use (see 'gitcc validators')
    #[arg(long, value_name = "NAME", global = true, conflicts_with = "validator_file")]
    pub validator: Option<String>,

    /// File describing the validator to use (TOML, JSON or YAML)
    #[arg(long, value_name = "FILE", global = true)]
    pub validator_file: Option<PathBuf>,

    /// Configuration file path
    #[arg(long, value_name = "FILE", global = true)]
    pub config: Option<PathBuf>,

    /// Enable debug logging on stderr
    #[arg(long, global = true)]
    pub debug: bool,

    /// Subcommands
    #[command(subcommand)]
    pub command: Commands,
}

/// Available commands
#[derive(Subcommand)]
pub enum Commands {
    /// Check the given message text
    Message(commands::message::MessageArgs),
    /// Install or remove a git hook
    GitHook(commands::git_hook::GitHookArgs),
    /// Check the current commit
    Commit(commands::commit::CommitArgs),
    /// Check the current branch history
    History(commands::history::HistoryArgs),
    /// Check the current branch since its common ancestor with another branch
    Branch(commands::branch::BranchArgs),
    /// List the built-in validators
    Validators,
    /// Show the effective configuration
    Config(commands::config::ConfigArgs),
}

/// Global settings every command needs
pub struct Context {
    pub selection: ValidatorSelection,
    pub config_path: Option<PathBuf>,
}

impl Context {
    /// Load the configuration, looking for repository config in `repo_dir`
    pub fn config(&self, repo_dir: Option<&Path>) -> Result<GitccConfig> {
        ConfigLoader::new()
            .custom(self.config_path.as_deref())
            .repo_dir(repo_dir)
            .load()
    }

    pub fn validator(&self, config: &GitccConfig) -> Result<Box<dyn CommitValidator>> {
        Ok(self.selection.load(&config.validation)?)
    }
}

impl Cli {
    /// Execute the CLI command and turn the outcome into an exit code
    pub fn run(self) -> ExitCode {
        setup_logging(self.debug);

        match self.execute() {
            Ok(code) => code,
            Err(e) => {
                Output::new(false).error(&format!("{e:#}"));
                ExitCode::from(EXIT_SETUP_ERROR)
            }
        }
    }

    fn execute(self) -> Result<ExitCode> {
        let context = Context {
            selection: ValidatorSelection::from_args(self.validator, self.validator_file),
            config_path: self.config,
        };

        match self.command {
            Commands::Message(args) => commands::message::execute(args, &context),
            Commands::GitHook(args) => commands::git_hook::execute(args, &context),
            Commands::Commit(args) => commands::commit::execute(args, &context),
            Commands::History(args) => commands::history::execute(args, &context),
            Commands::Branch(args) => commands::branch::execute(args, &context),
            Commands::Validators => commands::validators::execute(),
            Commands::Config(args) => commands::config::execute(args, &context),
        }
    }
}

/// Open the repository given on the command line
pub(crate) fn open_repository(path: &Path) -> Result<GitRepo> {
    GitRepo::open(path).map_err(|e| {
        tracing::debug!("Failed to open repository: {e:#}");
        anyhow::anyhow!("Given path is not a repository: '{}'", path.display())
    })
}

/// Exit code for a passing or failing check
pub(crate) fn exit_code(passed: bool) -> ExitCode {
    if passed {
        ExitCode::from(EXIT_SUCCESS)
    } else {
        ExitCode::from(EXIT_FAILURE)
    }
}

fn setup_logging(debug: bool) {
    let filter = if debug {
        tracing_subscriber::EnvFilter::new("debug")
    } else {
        tracing_subscriber::EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn"))
    };

    // stdout carries the results, logs go to stderr
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .try_init();
}
