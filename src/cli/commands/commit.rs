use anyhow::Result;
use clap::Args;
use std::path::PathBuf;
use std::process::ExitCode;

use crate::cli::{Context, Output, exit_code, open_repository};

#[derive(Args)]
pub struct CommitArgs {
    /// Path to the repository
    pub repository: PathBuf,
}

/// Check the commit `HEAD` points to; the result is always printed
pub fn execute(args: CommitArgs, context: &Context) -> Result<ExitCode> {
    let repo = open_repository(&args.repository)?;
    let config = context.config(repo.workdir())?;
    let validator = context.validator(&config)?;

    let result = validator.validate(&repo.head_commit()?);
    Output::new(true).result(&result);

    Ok(exit_code(result.is_ok()))
}
