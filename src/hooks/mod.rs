//! Git hook management
//!
//! gitcc manages a single hook, `commit-msg`, which re-runs `gitcc message`
//! on every new commit message. A hook file is in one of three states:
//!
//! - absent
//! - managed: written by gitcc (any validator selection)
//! - foreign: anything else, e.g. a hand-written or another tool's hook
//!
//! Installing over an existing file needs `force`. Removing is idempotent;
//! in strict mode a foreign hook is only removed with `force`.

use std::fmt;
use std::path::{Path, PathBuf};

use crate::error::HookError;
use crate::validation::ValidatorSelection;

pub mod commit_msg;

/// Hooks gitcc can manage
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum HookKind {
    /// The `commit-msg` hook validating each new message
    Message,
}

impl HookKind {
    pub fn file_name(&self) -> &'static str {
        match self {
            HookKind::Message => commit_msg::HOOK_FILE,
        }
    }

    pub fn state(&self, hooks_dir: &Path) -> Result<HookState, HookError> {
        match self {
            HookKind::Message => commit_msg::state(hooks_dir),
        }
    }
}

impl fmt::Display for HookKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            HookKind::Message => f.write_str("message"),
        }
    }
}

/// What to do with the requested hooks
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum HookAction {
    Install,
    Remove,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HookState {
    Absent,
    Managed,
    Foreign,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HookOutcome {
    Installed(PathBuf),
    Removed(PathBuf),
    NotInstalled(PathBuf),
}

impl fmt::Display for HookOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            HookOutcome::Installed(path) => write!(f, "Installed hook '{}'", path.display()),
            HookOutcome::Removed(path) => write!(f, "Removed hook '{}'", path.display()),
            HookOutcome::NotInstalled(path) => {
                write!(f, "No hook installed at '{}'", path.display())
            }
        }
    }
}

/// Settings shared by every hook action of one invocation
#[derive(Debug, Clone)]
pub struct HookOptions {
    pub force: bool,
    pub strict_remove: bool,
    pub selection: ValidatorSelection,
}

/// Run `action` for a single hook
pub fn apply(
    action: HookAction,
    kind: HookKind,
    hooks_dir: &Path,
    options: &HookOptions,
) -> Result<HookOutcome, HookError> {
    match (action, kind) {
        (HookAction::Install, HookKind::Message) => {
            commit_msg::install(hooks_dir, options.force, &options.selection)
        }
        (HookAction::Remove, HookKind::Message) => {
            commit_msg::remove(hooks_dir, options.strict_remove, options.force)
        }
    }
}

/// Run `action` for every hook in `kinds`, carrying on past failures
pub fn apply_all(
    action: HookAction,
    kinds: &[HookKind],
    hooks_dir: &Path,
    options: &HookOptions,
) -> Vec<(HookKind, Result<HookOutcome, HookError>)> {
    kinds
        .iter()
        .map(|&kind| (kind, apply(action, kind, hooks_dir, options)))
        .collect()
}
