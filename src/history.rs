//! Apply a validator across a range of commits
//!
//! [`check_history`] walks the current branch newest-first until an optional,
//! exclusive stop commit. [`check_branch`] finds where the current branch
//! diverged from another ref and checks everything after that point.

use anyhow::Result;

use crate::validation::{Commit, CommitValidator, ValidationResult};

pub const NO_COMMON_ANCESTOR: &str = "ERROR: No common ancestor found";

/// Read access to a commit graph
pub trait CommitSource {
    /// Commits reachable from `start`, newest first
    fn commits<'a>(&'a self, start: &str)
    -> Result<Box<dyn Iterator<Item = Result<Commit>> + 'a>>;

    /// Hashes of the nearest common ancestors of `one` and `two`, best candidate first
    fn merge_bases(&self, one: &str, two: &str) -> Result<Vec<String>>;
}

/// Lazy walk validating each commit until the stop commit.
///
/// Every visited commit yields a result, including passing ones. A failing
/// commit never ends the walk; only the stop commit or a read error does.
pub struct HistoryCheck<'a> {
    validator: &'a dyn CommitValidator,
    commits: Box<dyn Iterator<Item = Result<Commit>> + 'a>,
    exit_hash: Option<String>,
    finished: bool,
}

impl<'a> HistoryCheck<'a> {
    fn new(
        validator: &'a dyn CommitValidator,
        commits: Box<dyn Iterator<Item = Result<Commit>> + 'a>,
        exit_hash: &str,
    ) -> Self {
        Self {
            validator,
            commits,
            exit_hash: (!exit_hash.is_empty()).then(|| exit_hash.to_string()),
            finished: false,
        }
    }
}

impl Iterator for HistoryCheck<'_> {
    type Item = Result<ValidationResult>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.finished {
            return None;
        }
        match self.commits.next() {
            None => {
                self.finished = true;
                None
            }
            Some(Err(e)) => {
                self.finished = true;
                Some(Err(e))
            }
            Some(Ok(commit)) => {
                if self.exit_hash.as_deref() == Some(commit.hexsha.as_str()) {
                    tracing::debug!("Reached stop commit {}", commit.hexsha);
                    self.finished = true;
                    return None;
                }
                tracing::debug!("Validating commit {}", commit.hexsha);
                Some(Ok(self.validator.validate(&commit)))
            }
        }
    }
}

/// Validate the current branch (`HEAD`) back to `exit_hash`, exclusive.
///
/// An empty `exit_hash` walks the whole history.
pub fn check_history<'a>(
    validator: &'a dyn CommitValidator,
    repo: &'a dyn CommitSource,
    exit_hash: &str,
) -> Result<HistoryCheck<'a>> {
    check_history_from(validator, repo, "HEAD", exit_hash)
}

/// Like [`check_history`] but starting from any ref
pub fn check_history_from<'a>(
    validator: &'a dyn CommitValidator,
    repo: &'a dyn CommitSource,
    start: &str,
    exit_hash: &str,
) -> Result<HistoryCheck<'a>> {
    Ok(HistoryCheck::new(validator, repo.commits(start)?, exit_hash))
}

/// Validate the commits of `source` made since it diverged from `target`.
///
/// When the refs share no ancestor a single failure is returned and nothing
/// is validated.
pub fn check_branch(
    validator: &dyn CommitValidator,
    repo: &dyn CommitSource,
    source: &str,
    target: &str,
) -> Result<Vec<ValidationResult>> {
    let bases = repo.merge_bases(source, target)?;
    let Some(base) = bases.first() else {
        tracing::debug!("No merge base between {source} and {target}");
        return Ok(vec![ValidationResult::failure(NO_COMMON_ANCESTOR)]);
    };
    tracing::debug!("Merge base of {source} and {target} is {base}");
    check_history_from(validator, repo, source, base)?.collect()
}

/// True when no result is a failure; warnings pass
pub fn all_passing(results: &[ValidationResult]) -> bool {
    results.iter().all(|result| !result.status.is_failure())
}
