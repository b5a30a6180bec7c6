//! Git hooks command implementation
//!
//! Installs or removes the requested hooks, reporting each one and failing
//! at the end if any of them could not be handled.

use anyhow::Result;
use clap::Args;
use std::path::PathBuf;
use std::process::ExitCode;

use crate::cli::{Context, Output, exit_code, open_repository};
use crate::hooks::{self, HookAction, HookKind, HookOptions};

#[derive(Args)]
pub struct GitHookArgs {
    /// Install or remove
    #[arg(value_enum)]
    pub action: HookAction,

    /// Hooks to act on
    #[arg(value_enum, required = true, num_args = 1..)]
    pub hooks: Vec<HookKind>,

    /// Path to the repository
    pub repository: PathBuf,

    /// Overwrite an existing hook, or remove a customized one in strict mode
    #[arg(long)]
    pub force: bool,

    /// Only remove hooks that were installed by gitcc
    #[arg(long)]
    pub strict: bool,
}

pub fn execute(args: GitHookArgs, context: &Context) -> Result<ExitCode> {
    let repo = open_repository(&args.repository)?;
    let config = context.config(repo.workdir().or(Some(args.repository.as_path())))?;

    let options = HookOptions {
        force: args.force,
        strict_remove: args.strict || config.hooks.strict_remove,
        selection: context.selection.clone(),
    };

    let output = Output::new(true);
    let mut all_ok = true;
    for (kind, outcome) in hooks::apply_all(args.action, &args.hooks, &repo.hooks_dir(), &options) {
        match outcome {
            Ok(outcome) => output.success(&outcome.to_string()),
            Err(e) => {
                output.error(&format!("{kind} hook: {e}"));
                all_ok = false;
            }
        }
    }

    Ok(exit_code(all_ok))
}
