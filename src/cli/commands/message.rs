//! Check a single commit message
//!
//! With `--file` the text is read from a file, which is how the `commit-msg`
//! hook calls gitcc. When git filled the file from its editor template, the
//! template's comment lines are dropped; messages given with `git commit -m`
//! are checked as written.

use anyhow::{Context as _, Result};
use clap::Args;
use std::process::ExitCode;

use crate::cli::{Context, Output, exit_code};
use crate::validation::split_message;

/// Marks where `git commit --verbose` appends the diff, after the comment character
const SCISSORS: &str = "------------------------ >8 ------------------------";

const DEFAULT_COMMENT_CHAR: char = '#';

#[derive(Args)]
pub struct MessageArgs {
    /// Interpret TEXT as a path to a file holding the message
    #[arg(long)]
    pub file: bool,

    /// Text to check
    #[arg(value_name = "TEXT")]
    pub text: String,
}

pub fn execute(args: MessageArgs, context: &Context) -> Result<ExitCode> {
    let message = if args.file {
        let content = std::fs::read_to_string(&args.text)
            .with_context(|| format!("Failed to read message file '{}'", args.text))?;
        strip_comments(&content, comment_char())
    } else {
        args.text
    };

    let config = context.config(None)?;
    let validator = context.validator(&config)?;

    let (summary, description) = split_message(&message);
    let result = validator.validate_message(summary, description);
    Output::new(true).result(&result);

    Ok(exit_code(result.is_ok()))
}

/// Comment character from git's `core.commentChar`, `#` when unset or `auto`
fn comment_char() -> char {
    let config = git2::Repository::open_from_env()
        .and_then(|repo| repo.config())
        .or_else(|_| git2::Config::open_default());
    let value = match config.and_then(|config| config.get_string("core.commentChar")) {
        Ok(value) => value,
        Err(_) => return DEFAULT_COMMENT_CHAR,
    };
    match value.as_str() {
        "auto" => DEFAULT_COMMENT_CHAR,
        value => value.chars().next().unwrap_or(DEFAULT_COMMENT_CHAR),
    }
}

/// Drop the comment lines of git's editor template and everything below a scissors line.
///
/// The template always carries a line holding only the comment character, or
/// the scissors line in verbose mode. Without either the file is left alone.
fn strip_comments(content: &str, comment: char) -> String {
    let bare = comment.to_string();
    let scissors = format!("{comment} {SCISSORS}");
    let has_template = content
        .lines()
        .any(|line| line == bare || line == scissors);

    let mut kept = Vec::new();
    for line in content.lines() {
        if has_template && line == scissors {
            break;
        }
        if !(has_template && line.starts_with(comment)) {
            kept.push(line);
        }
    }
    kept.join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_strip_comments() {
        let content = "[ab] Good Description\n\nBody line\n# Please enter the commit message\n#\n";
        assert_eq!(
            strip_comments(content, '#'),
            "[ab] Good Description\n\nBody line"
        );
    }

    #[test]
    fn test_strip_verbose_diff() {
        let content = format!(
            "[ab] Good Description\n# {SCISSORS}\n# Do not modify or remove the line above.\ndiff --git a/x b/x\n"
        );
        assert_eq!(strip_comments(&content, '#'), "[ab] Good Description");
    }

    #[test]
    fn test_plain_message_unchanged() {
        assert_eq!(strip_comments("summary\nbody", '#'), "summary\nbody");
    }

    #[test]
    fn test_hash_summary_without_template_is_kept() {
        assert_eq!(strip_comments("#123 Fix it\n", '#'), "#123 Fix it");
        assert_eq!(
            strip_comments("#123 Fix it\n\n# note\n", '#'),
            "#123 Fix it\n\n# note"
        );
    }

    #[test]
    fn test_custom_comment_char() {
        let content = "#123 Fix it\n\n; Please enter the commit message\n;\n";
        assert_eq!(strip_comments(content, ';'), "#123 Fix it\n");
    }
}
