//! Check the history of the current branch

use anyhow::Result;
use clap::Args;
use std::path::PathBuf;
use std::process::ExitCode;

use crate::cli::{Context, Output, exit_code, open_repository};
use crate::history::check_history;

pub const ALL_CORRECT: &str = "All commits have the correct format!";

#[derive(Args)]
pub struct HistoryArgs {
    /// Path to the repository
    pub repository: PathBuf,

    /// Check until this commit (exclusive)
    #[arg(long, value_name = "SHA")]
    pub sha: Option<String>,

    /// Print correct commits too
    #[arg(long)]
    pub verbose: bool,
}

pub fn execute(args: HistoryArgs, context: &Context) -> Result<ExitCode> {
    let repo = open_repository(&args.repository)?;
    let config = context.config(repo.workdir())?;
    let validator = context.validator(&config)?;

    let exit_hash = match args.sha.as_deref() {
        Some(sha) if !sha.is_empty() => repo.resolve_commit(sha)?,
        _ => String::new(),
    };

    let results = check_history(validator.as_ref(), &repo, &exit_hash)?.collect::<Result<Vec<_>>>()?;
    report(&results, args.verbose)
}

/// Print the results of a multi-commit check and pick the exit code
pub(super) fn report(results: &[crate::validation::ValidationResult], verbose: bool) -> Result<ExitCode> {
    let output = Output::new(verbose);
    let all_ok = output.print_results(results);
    if all_ok {
        output.success(ALL_CORRECT);
    }
    Ok(exit_code(all_ok))
}
