//! # gitcc - commit message checks for git
//!
//! gitcc validates commit messages against pluggable rule sets and manages a
//! `commit-msg` hook that enforces those rules at commit time.
//!
//! ## Quick Start
//!
//! ```bash
//! # Check a message
//! gitcc --validator simple-tag message "[core] Add the parser"
//!
//! # Check the current branch against main
//! gitcc --validator simple-tag branch main .
//!
//! # Enforce the rules on every commit
//! gitcc --validator simple-tag git-hook install message .
//! ```
//!
//! ## Library Usage
//!
//! ```rust,no_run
//! use gitcc::git::GitRepo;
//! use gitcc::history::check_history;
//! use gitcc::validation::SimpleTag;
//!
//! let repo = GitRepo::open(".")?;
//! for result in check_history(&SimpleTag, &repo, "")? {
//!     println!("{}", result?);
//! }
//! # Ok::<(), anyhow::Error>(())
//! ```

pub mod cli;
pub mod config;
pub mod error;
pub mod git;
pub mod history;
pub mod hooks;
pub mod validation;

pub use cli::Cli;
pub use config::GitccConfig;

/// Result type alias for gitcc operations
pub type Result<T> = anyhow::Result<T>;

/// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
pub const PKG_NAME: &str = env!("CARGO_PKG_NAME");
