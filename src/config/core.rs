use anyhow::{Context, Result};
use figment::{
    Figment,
    providers::{Env, Format, Json, Toml, Yaml},
};
use std::path::{Path, PathBuf};

use super::GitccConfig;

// Embed the default config at compile time
const DEFAULT_CONFIG: &str = include_str!("../../default-config.toml");

const REPO_CONFIG_STEM: &str = "gitcc";

/// Builds a [`GitccConfig`] from layered sources.
///
/// Priority, lowest first: embedded defaults, user config, repository config,
/// `GITCC_*` environment variables. An explicit config file replaces the user
/// and repository layers.
#[derive(Debug, Clone, Default)]
pub struct ConfigLoader {
    custom: Option<PathBuf>,
    repo_dir: Option<PathBuf>,
    home: Option<PathBuf>,
}

impl ConfigLoader {
    pub fn new() -> Self {
        Self::default()
    }

    /// Use only this file on top of the defaults
    pub fn custom(mut self, path: Option<&Path>) -> Self {
        self.custom = path.map(Path::to_path_buf);
        self
    }

    /// Directory searched for `gitcc.{toml,json,yaml,yml}`; the working directory when unset
    pub fn repo_dir(mut self, dir: Option<&Path>) -> Self {
        self.repo_dir = dir.map(Path::to_path_buf);
        self
    }

    /// Home directory holding `.config/gitcc/`; `$HOME` when unset
    pub fn home(mut self, dir: Option<&Path>) -> Self {
        self.home = dir.map(Path::to_path_buf);
        self
    }

    pub fn figment(&self) -> Result<Figment> {
        let mut figment = Figment::new().merge(Toml::string(DEFAULT_CONFIG));

        if let Some(custom_path) = &self.custom {
            if !custom_path.is_file() {
                anyhow::bail!("Config file '{}' does not exist", custom_path.display());
            }
            figment = merge_by_extension(figment, custom_path);
        } else {
            if let Some(user_dir) = self.user_config_dir() {
                figment = merge_all_formats(figment, &user_dir, "config");
            }
            let repo_dir = match &self.repo_dir {
                Some(dir) => dir.clone(),
                None => PathBuf::from("."),
            };
            figment = merge_all_formats(figment, &repo_dir, REPO_CONFIG_STEM);
        }

        // Environment variables always have highest priority
        Ok(figment.merge(Env::prefixed("GITCC_").split("__")))
    }

    pub fn load(&self) -> Result<GitccConfig> {
        let config: GitccConfig = self
            .figment()?
            .extract()
            .context("Failed to load gitcc configuration")?;
        tracing::debug!("Loaded configuration: {:?}", config);
        Ok(config)
    }

    fn user_config_dir(&self) -> Option<PathBuf> {
        let home = match &self.home {
            Some(home) => home.clone(),
            None => PathBuf::from(std::env::var_os("HOME")?),
        };
        Some(home.join(".config").join("gitcc"))
    }
}

fn merge_all_formats(figment: Figment, dir: &Path, stem: &str) -> Figment {
    figment
        .merge(Toml::file(dir.join(format!("{stem}.toml"))))
        .merge(Json::file(dir.join(format!("{stem}.json"))))
        .merge(Yaml::file(dir.join(format!("{stem}.yaml"))))
        .merge(Yaml::file(dir.join(format!("{stem}.yml"))))
}

fn merge_by_extension(figment: Figment, path: &Path) -> Figment {
    match path.extension().and_then(|ext| ext.to_str()) {
        Some("json") => figment.merge(Json::file(path)),
        Some("yaml" | "yml") => figment.merge(Yaml::file(path)),
        _ => figment.merge(Toml::file(path)),
    }
}
