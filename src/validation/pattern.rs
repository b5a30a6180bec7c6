//! Regex validator with optional summary and description patterns

use regex::Regex;

use super::{CommitValidator, ValidationResult};
use crate::error::ValidatorError;

/// A configured pattern; `regex` is anchored so it only accepts full matches
#[derive(Debug, Clone)]
struct FullMatch {
    pattern: String,
    regex: Regex,
}

impl FullMatch {
    fn compile(field: &'static str, pattern: &str) -> Result<Self, ValidatorError> {
        let regex = Regex::new(&format!(r"\A(?:{pattern})\z")).map_err(|source| {
            ValidatorError::InvalidPattern {
                field,
                pattern: pattern.to_string(),
                source,
            }
        })?;
        Ok(Self {
            pattern: pattern.to_string(),
            regex,
        })
    }

    fn matches(&self, text: &str) -> bool {
        self.regex.is_match(text)
    }
}

/// Requires the summary and/or the description to fully match a pattern.
///
/// The summary pattern is checked first; the first failing pattern decides the
/// message. Without any pattern every message passes.
#[derive(Debug, Clone)]
pub struct RegexValidator {
    summary: Option<FullMatch>,
    description: Option<FullMatch>,
}

impl RegexValidator {
    pub fn new(summary: Option<&str>, description: Option<&str>) -> Result<Self, ValidatorError> {
        Ok(Self {
            summary: summary
                .map(|pattern| FullMatch::compile("summary", pattern))
                .transpose()?,
            description: description
                .map(|pattern| FullMatch::compile("description", pattern))
                .transpose()?,
        })
    }

    pub fn summary_pattern(&self) -> Option<&str> {
        self.summary.as_ref().map(|p| p.pattern.as_str())
    }

    pub fn description_pattern(&self) -> Option<&str> {
        self.description.as_ref().map(|p| p.pattern.as_str())
    }
}

impl CommitValidator for RegexValidator {
    fn validate_message(&self, summary: &str, description: &str) -> ValidationResult {
        if let Some(pattern) = &self.summary {
            if !pattern.matches(summary) {
                return ValidationResult::failure(format!(
                    "Summary does not match the pattern '{}'",
                    pattern.pattern
                ));
            }
        }
        if let Some(pattern) = &self.description {
            if !pattern.matches(description) {
                return ValidationResult::failure(format!(
                    "Description does not match the pattern '{}'",
                    pattern.pattern
                ));
            }
        }
        ValidationResult::ok()
    }
}
