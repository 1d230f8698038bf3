//! Configuration loader for mdhtml.
//!
//! `defaults/mdhtml.default.toml` is embedded into the crate. Callers layer
//! user files and single-key overrides on top of it via [`Loader`] before
//! deserializing into [`MdhtmlConfig`].

use config::builder::DefaultState;
use config::{Config, ConfigBuilder, ConfigError, File, FileFormat, ValueKind};
use serde::Deserialize;
use std::collections::HashMap;
use std::path::{Path, PathBuf};

use crate::markdown::building::TagRenames;

const DEFAULT_TOML: &str = include_str!("../../defaults/mdhtml.default.toml");

/// Top-level configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct MdhtmlConfig {
    pub convert: ConvertConfig,
    pub html: HtmlConfig,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ConvertConfig {
    pub format: String,
}

/// Knobs of the HTML renderer.
#[derive(Debug, Clone, Deserialize)]
pub struct HtmlConfig {
    #[serde(default)]
    pub template: Option<PathBuf>,
    pub title_fallback: String,
    pub tag_renames: HashMap<String, String>,
}

impl HtmlConfig {
    pub fn renames(&self) -> TagRenames {
        TagRenames::from_map(self.tag_renames.clone())
    }
}

/// Helper for layering user overrides over the built-in defaults.
#[derive(Debug, Clone)]
pub struct Loader {
    builder: ConfigBuilder<DefaultState>,
}

impl Loader {
    /// Start a loader seeded with the embedded defaults.
    pub fn new() -> Self {
        let builder = Config::builder().add_source(File::from_str(DEFAULT_TOML, FileFormat::Toml));
        Self { builder }
    }

    /// Layer a configuration file. Missing files trigger an error.
    pub fn with_file(mut self, path: impl AsRef<Path>) -> Self {
        let source = File::from(path.as_ref())
            .format(FileFormat::Toml)
            .required(true);
        self.builder = self.builder.add_source(source);
        self
    }

    /// Apply a single key/value override (used for CLI flags).
    pub fn set_override<I>(mut self, key: &str, value: I) -> Result<Self, ConfigError>
    where
        I: Into<ValueKind>,
    {
        self.builder = self.builder.set_override(key, value)?;
        Ok(self)
    }

    pub fn build(self) -> Result<MdhtmlConfig, ConfigError> {
        self.builder.build()?.try_deserialize()
    }
}

impl Default for Loader {
    fn default() -> Self {
        Self::new()
    }
}

pub fn load_defaults() -> Result<MdhtmlConfig, ConfigError> {
    Loader::new().build()
}
