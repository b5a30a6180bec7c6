//! Built-in validators and validator files
//!
//! Validators are chosen by name (`--validator simple-tag`) or described in a
//! TOML, JSON or YAML file (`--validator-file`) that picks a built-in strategy
//! and configures it:
//!
//! ```toml
//! kind = "regex"
//! summary = '\[[a-z]+\] .+'
//! ```

use std::fmt;
use std::path::{Path, PathBuf};
use std::str::FromStr;

use figment::Figment;
use figment::providers::{Format, Json, Toml, Yaml};
use serde::Deserialize;

use super::{CommitValidator, Passthrough, RegexValidator, SimpleTag, Unconfigured};
use crate::config::ValidationConfig;
use crate::error::ValidatorError;

/// Validators shipped with gitcc
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BuiltinValidator {
    Default,
    SimpleTag,
    Regex,
    Unconfigured,
}

impl BuiltinValidator {
    pub const ALL: [BuiltinValidator; 4] = [
        BuiltinValidator::Default,
        BuiltinValidator::SimpleTag,
        BuiltinValidator::Regex,
        BuiltinValidator::Unconfigured,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            BuiltinValidator::Default => "default",
            BuiltinValidator::SimpleTag => "simple-tag",
            BuiltinValidator::Regex => "regex",
            BuiltinValidator::Unconfigured => "unconfigured",
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            BuiltinValidator::Default => "Accept every message",
            BuiltinValidator::SimpleTag => "Summary must look like '[<tag>] <Good Description>'",
            BuiltinValidator::Regex => {
                "Summary/description must fully match the patterns in [validation.regex]"
            }
            BuiltinValidator::Unconfigured => "Warn that no message check was provided",
        }
    }
}

impl fmt::Display for BuiltinValidator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for BuiltinValidator {
    type Err = ValidatorError;

    fn from_str(name: &str) -> Result<Self, Self::Err> {
        match name {
            "default" => Ok(BuiltinValidator::Default),
            "simple-tag" | "SimpleTag" => Ok(BuiltinValidator::SimpleTag),
            "regex" | "Regex" => Ok(BuiltinValidator::Regex),
            "unconfigured" => Ok(BuiltinValidator::Unconfigured),
            other => Err(ValidatorError::UnknownValidator(other.to_string())),
        }
    }
}

/// A built-in strategy together with its settings
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(tag = "kind", rename_all = "kebab-case")]
pub enum ValidatorSpec {
    Default,
    #[serde(alias = "SimpleTag")]
    SimpleTag,
    Regex {
        #[serde(default)]
        summary: Option<String>,
        #[serde(default)]
        description: Option<String>,
    },
    Unconfigured,
}

impl ValidatorSpec {
    /// Spec for a built-in validator, taking regex patterns from the configuration
    pub fn from_builtin(builtin: BuiltinValidator, config: &ValidationConfig) -> Self {
        match builtin {
            BuiltinValidator::Default => ValidatorSpec::Default,
            BuiltinValidator::SimpleTag => ValidatorSpec::SimpleTag,
            BuiltinValidator::Regex => ValidatorSpec::Regex {
                summary: config.regex.summary.clone(),
                description: config.regex.description.clone(),
            },
            BuiltinValidator::Unconfigured => ValidatorSpec::Unconfigured,
        }
    }

    /// Read a validator file; the format follows the file extension (TOML by default)
    pub fn from_file(path: &Path) -> Result<Self, ValidatorError> {
        let file_error = |source: figment::Error| ValidatorError::File {
            path: path.to_path_buf(),
            source: Box::new(source),
        };

        let content = std::fs::read_to_string(path)
            .map_err(|e| file_error(figment::Error::from(e.to_string())))?;

        let extension = path
            .extension()
            .and_then(|ext| ext.to_str())
            .unwrap_or_default()
            .to_ascii_lowercase();
        let figment = match extension.as_str() {
            "json" => Figment::from(Json::string(&content)),
            "yaml" | "yml" => Figment::from(Yaml::string(&content)),
            _ => Figment::from(Toml::string(&content)),
        };

        figment.extract().map_err(file_error)
    }

    pub fn build(&self) -> Result<Box<dyn CommitValidator>, ValidatorError> {
        Ok(match self {
            ValidatorSpec::Default => Box::new(Passthrough),
            ValidatorSpec::SimpleTag => Box::new(SimpleTag::new()),
            ValidatorSpec::Regex {
                summary,
                description,
            } => {
                if summary.is_none() && description.is_none() {
                    return Err(ValidatorError::MissingPatterns);
                }
                Box::new(RegexValidator::new(
                    summary.as_deref(),
                    description.as_deref(),
                )?)
            }
            ValidatorSpec::Unconfigured => Box::new(Unconfigured),
        })
    }
}

/// Where the validator for this run comes from
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidatorSelection {
    /// `--validator <name>`
    Builtin(String),
    /// `--validator-file <path>`
    File(PathBuf),
    /// Nothing on the command line; use the `[validation]` configuration
    Configured,
}

impl ValidatorSelection {
    pub fn from_args(validator: Option<String>, validator_file: Option<PathBuf>) -> Self {
        match (validator, validator_file) {
            (Some(name), _) => ValidatorSelection::Builtin(name),
            (None, Some(path)) => ValidatorSelection::File(path),
            (None, None) => ValidatorSelection::Configured,
        }
    }

    pub fn spec(&self, config: &ValidationConfig) -> Result<ValidatorSpec, ValidatorError> {
        match self {
            ValidatorSelection::Builtin(name) => {
                Ok(ValidatorSpec::from_builtin(name.parse()?, config))
            }
            ValidatorSelection::File(path) => ValidatorSpec::from_file(path),
            ValidatorSelection::Configured => match &config.file {
                Some(path) => ValidatorSpec::from_file(&path.relative()),
                None => Ok(ValidatorSpec::from_builtin(
                    config.validator.parse()?,
                    config,
                )),
            },
        }
    }

    pub fn load(&self, config: &ValidationConfig) -> Result<Box<dyn CommitValidator>, ValidatorError> {
        let spec = self.spec(config)?;
        tracing::debug!("Using validator {:?}", spec);
        spec.build()
    }

    /// Arguments that make a hook script use the same validator
    pub fn hook_args(&self) -> Vec<String> {
        match self {
            ValidatorSelection::Builtin(name) => vec!["--validator".to_string(), name.clone()],
            ValidatorSelection::File(path) => {
                let path = std::path::absolute(path).unwrap_or_else(|_| path.clone());
                vec![
                    "--validator-file".to_string(),
                    path.to_string_lossy().into_owned(),
                ]
            }
            ValidatorSelection::Configured => Vec::new(),
        }
    }
}
