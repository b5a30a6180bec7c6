//! Commit message validation
//!
//! A validator only ever sees a message split into its summary line and the
//! description body, so every strategy can be tested without a repository.
//! [`CommitValidator::validate`] wraps the message check and stamps the result
//! with the commit it came from.
//!
//! ## Built-in validators
//!
//! - [`Passthrough`] - accepts every message (the default)
//! - [`SimpleTag`] - `[<tag>] <Good Description>` summaries
//! - [`RegexValidator`] - full-match patterns for summary and description
//!
//! Validators are picked by name through the [`registry`].

use std::fmt;

pub mod passthrough;
pub mod pattern;
pub mod registry;
pub mod simple_tag;

pub use passthrough::Passthrough;
pub use pattern::RegexValidator;
pub use registry::{BuiltinValidator, ValidatorSelection, ValidatorSpec};
pub use simple_tag::SimpleTag;

/// Outcome of a single check, ordered from worst to best
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Status {
    Failure,
    Warning,
    Ok,
}

impl Status {
    /// Token used when rendering a result
    pub fn as_str(&self) -> &'static str {
        match self {
            Status::Failure => "Failure",
            Status::Warning => "Warning",
            Status::Ok => "Correct",
        }
    }

    pub fn is_failure(&self) -> bool {
        matches!(self, Status::Failure)
    }
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A commit as seen by the validators: its hash and full message
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Commit {
    pub hexsha: String,
    pub message: String,
}

impl Commit {
    pub fn new(hexsha: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            hexsha: hexsha.into(),
            message: message.into(),
        }
    }

    /// First line of the message
    pub fn summary(&self) -> &str {
        split_message(&self.message).0
    }
}

/// Result of validating one message, optionally tied to the commit it came from
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationResult {
    pub status: Status,
    pub message: String,
    pub commit: Option<Commit>,
}

impl ValidationResult {
    pub fn new(status: Status, message: impl Into<String>) -> Self {
        Self {
            status,
            message: message.into(),
            commit: None,
        }
    }

    pub fn ok() -> Self {
        Self::new(Status::Ok, "")
    }

    pub fn warning(message: impl Into<String>) -> Self {
        Self::new(Status::Warning, message)
    }

    pub fn failure(message: impl Into<String>) -> Self {
        Self::new(Status::Failure, message)
    }

    /// Attach the commit this result belongs to, replacing any previous one
    pub fn with_commit(mut self, commit: Commit) -> Self {
        self.commit = Some(commit);
        self
    }

    pub fn is_ok(&self) -> bool {
        self.status == Status::Ok
    }
}

impl fmt::Display for ValidationResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.status)?;
        if let Some(commit) = &self.commit {
            write!(f, " | {} - {}", commit.hexsha, commit.summary())?;
        }
        if !self.message.is_empty() {
            if self.commit.is_none() {
                f.write_str(" |")?;
            }
            write!(f, "\n        : {}", self.message)?;
        }
        Ok(())
    }
}

/// Split a raw message into summary (up to the first newline) and description
pub fn split_message(message: &str) -> (&str, &str) {
    message.split_once('\n').unwrap_or((message, ""))
}

/// A pluggable commit message check.
///
/// Implementors override [`validate_message`](Self::validate_message). Invalid
/// messages are reported as [`Status::Failure`] results; implementations must
/// not keep state between calls.
pub trait CommitValidator {
    /// Validate a commit, attaching it to the returned result
    fn validate(&self, commit: &Commit) -> ValidationResult {
        let (summary, description) = split_message(&commit.message);
        self.validate_message(summary, description)
            .with_commit(commit.clone())
    }

    /// Validate a message given as summary and description.
    ///
    /// Without an override every message gets a warning that no check was set up.
    fn validate_message(&self, _summary: &str, _description: &str) -> ValidationResult {
        ValidationResult::warning("A separate message check was not provided.")
    }
}

/// Validator relying on the trait's default message check
#[derive(Debug, Clone, Copy, Default)]
pub struct Unconfigured;

impl CommitValidator for Unconfigured {}
