//! Conversion pipeline
//!
//! ```text
//! source text ─ parse ─▶ Document ─ extract ─▶ Vec<Element> ─ build ─▶ page
//! ```
//!
//! [`Converter`] owns a [`FormatRegistry`] and the tag renames, so one
//! instance serves any number of conversions.

use std::fs;
use std::path::PathBuf;

use thiserror::Error;

use crate::markdown::ast::Document;
use crate::markdown::building::{extract, Element, TagRenames};
use crate::markdown::config::MdhtmlConfig;
use crate::markdown::formats::{FormatError, FormatRegistry, HtmlFormatter, Template};
use crate::markdown::parsing::{parse, ParseError};

#[derive(Debug, Error)]
pub enum ConvertError {
    #[error(transparent)]
    Parse(#[from] ParseError),
    #[error(transparent)]
    Format(#[from] FormatError),
    #[error("failed to read template {path}: {source}")]
    Template {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("invalid configuration: {0}")]
    Config(#[from] config::ConfigError),
}

pub struct Converter {
    registry: FormatRegistry,
    renames: TagRenames,
}

impl Converter {
    pub fn new() -> Self {
        Self {
            registry: FormatRegistry::with_defaults(),
            renames: TagRenames::default(),
        }
    }

    pub fn with_registry(registry: FormatRegistry, renames: TagRenames) -> Self {
        Self { registry, renames }
    }

    /// Build a converter whose HTML renderer follows the configuration
    ///
    /// Reads the configured template file, if any.
    pub fn from_config(config: &MdhtmlConfig) -> Result<Self, ConvertError> {
        let template = match &config.html.template {
            Some(path) => {
                let text = fs::read_to_string(path).map_err(|source| ConvertError::Template {
                    path: path.clone(),
                    source,
                })?;
                Template::new(text)
            }
            None => Template::skeleton(),
        };
        let renames = config.html.renames();

        let mut registry = FormatRegistry::new();
        registry.register(
            HtmlFormatter::new()
                .with_template(template)
                .with_renames(renames.clone())
                .with_title_fallback(config.html.title_fallback.clone()),
        );
        Ok(Self::with_registry(registry, renames))
    }

    pub fn registry(&self) -> &FormatRegistry {
        &self.registry
    }

    pub fn parse(&self, source: &str) -> Result<Document, ConvertError> {
        Ok(parse(source)?)
    }

    pub fn convert(&self, source: &str, format: &str) -> Result<String, ConvertError> {
        let doc = self.parse(source)?;
        let output = self.registry.render(&doc, format)?;
        tracing::debug!(format, bytes = output.len(), "converted document");
        Ok(output)
    }

    /// The element records the renderers would see
    pub fn inspect(&self, source: &str) -> Result<Vec<Element>, ConvertError> {
        let doc = self.parse(source)?;
        Ok(extract(&doc, &self.renames))
    }
}

impl Default for Converter {
    fn default() -> Self {
        Self::new()
    }
}

/// Parse and render with the default converter
pub fn convert(source: &str, format: &str) -> Result<String, ConvertError> {
    Converter::new().convert(source, format)
}
