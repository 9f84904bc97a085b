// src/infrastructure/config.rs
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::application::StoreSettings;
use crate::constants::{DEFAULT_BUILTIN_FOLDER_NAME, DEFAULT_TAG_COLOR, UNTITLED_TITLE};

/// TOML configuration for a notes session
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq, Default)]
pub struct Config {
    #[serde(default)]
    pub defaults: Defaults,
    #[serde(default)]
    pub seed: SeedConfig,
}

#[derive(Debug, Clone, Deserialize, Serialize, PartialEq)]
pub struct Defaults {
    #[serde(default = "default_builtin_folder_name")]
    pub builtin_folder_name: String,
    #[serde(default = "default_untitled_title")]
    pub untitled_title: String,
    #[serde(default = "default_tag_color")]
    pub tag_color: String,
}

#[derive(Debug, Clone, Deserialize, Serialize, PartialEq)]
pub struct SeedConfig {
    /// Start with the demo folders, tags and notes
    #[serde(default = "default_demo")]
    pub demo: bool,
}

fn default_builtin_folder_name() -> String { DEFAULT_BUILTIN_FOLDER_NAME.to_string() }
fn default_untitled_title() -> String { UNTITLED_TITLE.to_string() }
fn default_tag_color() -> String { DEFAULT_TAG_COLOR.to_string() }
fn default_demo() -> bool { true }

impl Default for Defaults {
    fn default() -> Self {
        Self {
            builtin_folder_name: default_builtin_folder_name(),
            untitled_title: default_untitled_title(),
            tag_color: default_tag_color(),
        }
    }
}

impl Default for SeedConfig {
    fn default() -> Self {
        Self { demo: default_demo() }
    }
}

impl Config {
    /// Load configuration from TOML file
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;

        let config: Config = toml::from_str(&content)
            .context("Failed to parse TOML config")?;

        Ok(config)
    }

    /// Load from `path` if given, otherwise use defaults
    pub fn load_or_default(path: Option<&Path>) -> Result<Self> {
        match path {
            Some(path) => Self::load(path),
            None => Ok(Self::default()),
        }
    }

    pub fn store_settings(&self) -> StoreSettings {
        StoreSettings {
            builtin_folder_name: self.defaults.builtin_folder_name.clone(),
            untitled_title: self.defaults.untitled_title.clone(),
        }
    }
}
