//! Configuration management for gitcc
//!
//! Settings are merged by [`core`] from embedded defaults, the user config,
//! the repository config and `GITCC_*` environment variables.

use figment::value::magic::RelativePathBuf;
use serde::{Deserialize, Serialize, Serializer};

mod core;

pub use self::core::ConfigLoader;

/// Main configuration structure for gitcc
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct GitccConfig {
    /// Validator selection
    #[serde(default)]
    pub validation: ValidationConfig,

    /// Hook management
    #[serde(default)]
    pub hooks: HooksConfig,
}

/// Which validator runs when none is given on the command line
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ValidationConfig {
    /// Built-in validator name
    #[serde(default = "default_validator")]
    pub validator: String,

    /// Validator file, takes precedence over `validator`.
    ///
    /// A relative path is relative to the config file that set it.
    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        serialize_with = "serialize_relative"
    )]
    pub file: Option<RelativePathBuf>,

    /// Patterns for the `regex` validator
    #[serde(default)]
    pub regex: RegexConfig,
}

fn serialize_relative<S: Serializer>(
    path: &Option<RelativePathBuf>,
    serializer: S,
) -> Result<S::Ok, S::Error> {
    path.as_ref().map(RelativePathBuf::relative).serialize(serializer)
}

fn default_validator() -> String {
    "default".to_string()
}

impl Default for ValidationConfig {
    fn default() -> Self {
        Self {
            validator: default_validator(),
            file: None,
            regex: RegexConfig::default(),
        }
    }
}

/// Full-match patterns for the `regex` validator
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct RegexConfig {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub summary: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

/// Hook management settings
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct HooksConfig {
    /// Only remove hooks that still match the generated script
    #[serde(default)]
    pub strict_remove: bool,
}

impl GitccConfig {
    /// Load using the standard search locations relative to `repo_dir`
    pub fn load(repo_dir: Option<&std::path::Path>) -> anyhow::Result<Self> {
        ConfigLoader::new().repo_dir(repo_dir).load()
    }

    /// Render the effective configuration as TOML
    pub fn to_toml(&self) -> anyhow::Result<String> {
        Ok(toml::to_string_pretty(self)?)
    }
}
