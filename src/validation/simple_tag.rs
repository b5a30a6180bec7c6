//! Tag validator for summaries shaped like `[<tag>] <Good Description>`

use lazy_static::lazy_static;
use regex::Regex;

use super::{CommitValidator, ValidationResult};

pub const FORMAT_ERROR: &str =
    "Summary has invalid format. It should be '[<tag>] <Good Description>'";
pub const TAG_ERROR: &str = "Invalid category tag. It should be either a single '*' or completely lowercase \
     letters or numbers, at least 2 characters long, other allowed characters are: '|', '-' and spaces.";
pub const DESCRIPTION_ERROR: &str = "Invalid description. It should start with an uppercase letter or number, \
     should be not to short and should not end with a punctuation.";

lazy_static! {
    static ref SUMMARY: Regex = Regex::new(r"\A\[(.*)\] (.*)\z").expect("valid summary pattern");
    // Clusters of 2+ lowercase alphanumerics, single separators only between clusters
    static ref CATEGORY: Regex =
        Regex::new(r"\A(?:\*|[a-z0-9]{2,}(?:[ |\-][a-z0-9]{2,})*)\z").expect("valid category pattern");
    static ref DESCRIPTION: Regex =
        Regex::new(r"\A[A-Z0-9]\S*(?:\s\S*)+[^.!?,\s]\z").expect("valid description pattern");
}

/// Checks the summary for `[<tag>] <Good Description>`; the description body is ignored.
///
/// The tag is either `*` or lowercase alphanumeric clusters of at least two
/// characters joined by a single space, `|` or `-`. The description starts
/// with an uppercase letter or a digit, has at least two words and does not
/// end with punctuation or whitespace.
#[derive(Debug, Clone, Copy, Default)]
pub struct SimpleTag;

impl SimpleTag {
    pub fn new() -> Self {
        Self
    }
}

impl CommitValidator for SimpleTag {
    fn validate_message(&self, summary: &str, _description: &str) -> ValidationResult {
        let Some(captures) = SUMMARY.captures(summary) else {
            return ValidationResult::failure(FORMAT_ERROR);
        };
        if !CATEGORY.is_match(&captures[1]) {
            return ValidationResult::failure(TAG_ERROR);
        }
        if !DESCRIPTION.is_match(&captures[2]) {
            return ValidationResult::failure(DESCRIPTION_ERROR);
        }
        ValidationResult::ok()
    }
}
