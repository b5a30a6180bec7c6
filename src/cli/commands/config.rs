//! Configuration command implementations
//!
//! Show the merged configuration or check that it yields a usable validator.

use anyhow::Result;
use clap::{Args, Subcommand};
use std::path::PathBuf;
use std::process::ExitCode;

use crate::cli::{Context, EXIT_SUCCESS, Output};

#[derive(Args)]
pub struct ConfigArgs {
    #[command(subcommand)]
    pub command: ConfigCommands,
}

#[derive(Subcommand)]
pub enum ConfigCommands {
    /// Print the effective configuration as TOML
    Show {
        /// Repository whose gitcc config is merged in (default: current directory)
        repository: Option<PathBuf>,
    },
    /// Check that the configuration and validator selection load
    Validate {
        /// Repository whose gitcc config is merged in (default: current directory)
        repository: Option<PathBuf>,
    },
}

pub fn execute(args: ConfigArgs, context: &Context) -> Result<ExitCode> {
    match args.command {
        ConfigCommands::Show { repository } => {
            let config = context.config(repository.as_deref())?;
            print!("{}", config.to_toml()?);
        }
        ConfigCommands::Validate { repository } => {
            let config = context.config(repository.as_deref())?;
            let spec = context.selection.spec(&config.validation)?;
            spec.build()?;
            Output::new(true).success(&format!("Configuration is valid, validator: {spec:?}"));
        }
    }
    Ok(ExitCode::from(EXIT_SUCCESS))
}
