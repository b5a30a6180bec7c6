//! Command implementations for the gitcc CLI
//!
//! Each command lives in its own module with its clap `Args` and an
//! `execute` function returning the process exit code.

pub mod branch;
pub mod commit;
pub mod config;
pub mod git_hook;
pub mod history;
pub mod message;
pub mod validators;
