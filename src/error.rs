//! Typed errors for the parts of gitcc callers need to tell apart
//!
//! Validation outcomes are never errors; these cover setup problems only.

use std::path::PathBuf;
use thiserror::Error;

/// Errors raised while installing or removing a hook script
#[derive(Debug, Error)]
pub enum HookError {
    #[error("A commit message hook already exists at '{}'! Use --force to overwrite it.", path.display())]
    AlreadyExists { path: PathBuf },

    #[error("The hook at '{}' was customized and does not match the gitcc template. Use --force to remove it anyway.", path.display())]
    Customized { path: PathBuf },

    #[error("Failed to access hook file '{}'", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Errors raised while constructing a validator
#[derive(Debug, Error)]
pub enum ValidatorError {
    #[error("Invalid {field} pattern '{pattern}'")]
    InvalidPattern {
        field: &'static str,
        pattern: String,
        #[source]
        source: regex::Error,
    },

    #[error("Unknown validator '{0}'. Run 'gitcc validators' to list the built-in validators.")]
    UnknownValidator(String),

    #[error("The regex validator needs at least one of 'summary' or 'description' patterns")]
    MissingPatterns,

    #[error("Failed to load validator file '{}'", path.display())]
    File {
        path: PathBuf,
        #[source]
        source: Box<figment::Error>,
    },
}
