//! Check the current branch against another branch
//!
//! Same as `gitcc history --sha $(git merge-base HEAD <target>)`.

use anyhow::Result;
use clap::Args;
use std::path::PathBuf;
use std::process::ExitCode;

use crate::cli::{Context, open_repository};
use crate::history::check_branch;

#[derive(Args)]
pub struct BranchArgs {
    /// Target branch
    #[arg(value_name = "TARGET")]
    pub target: String,

    /// Path to the repository
    pub repository: PathBuf,

    /// Print correct commits too
    #[arg(long)]
    pub verbose: bool,
}

pub fn execute(args: BranchArgs, context: &Context) -> Result<ExitCode> {
    let repo = open_repository(&args.repository)?;
    let config = context.config(repo.workdir())?;
    let validator = context.validator(&config)?;

    let results = check_branch(validator.as_ref(), &repo, "HEAD", &args.target)?;
    super::history::report(&results, args.verbose)
}
