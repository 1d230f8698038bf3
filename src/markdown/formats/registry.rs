//! Format registry for document rendering
//!
//! Format names resolve against [`OutputFormat`] at the call boundary; a name
//! that is not a variant, or a variant with no registered formatter, is a
//! [`FormatError::UnknownFormat`].

use std::collections::HashMap;
use std::fmt;
use std::str::FromStr;

use thiserror::Error;

use super::html::{HtmlFormatter, TemplateError};
use crate::markdown::ast::Document;

/// Error that can occur during rendering
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FormatError {
    /// No renderer for the requested format
    #[error("unknown output format '{0}'")]
    UnknownFormat(String),
    /// The template could not be filled in
    #[error(transparent)]
    Template(#[from] TemplateError),
}

/// The output formats this crate knows about
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum OutputFormat {
    Html,
}

impl OutputFormat {
    pub const ALL: &'static [OutputFormat] = &[OutputFormat::Html];

    pub fn name(&self) -> &'static str {
        match self {
            OutputFormat::Html => "html",
        }
    }
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for OutputFormat {
    type Err = FormatError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        OutputFormat::ALL
            .iter()
            .copied()
            .find(|format| format.name().eq_ignore_ascii_case(s))
            .ok_or_else(|| FormatError::UnknownFormat(s.to_string()))
    }
}

/// Trait for document renderers
pub trait Formatter: Send + Sync {
    /// The format this renderer produces
    fn format(&self) -> OutputFormat;

    /// Render a document to this format
    fn render(&self, doc: &Document) -> Result<String, FormatError>;

    /// Optional description of this format
    fn description(&self) -> &str {
        ""
    }
}

/// Registry of document renderers
pub struct FormatRegistry {
    formatters: HashMap<OutputFormat, Box<dyn Formatter>>,
}

impl FormatRegistry {
    /// Create a new empty registry
    pub fn new() -> Self {
        FormatRegistry {
            formatters: HashMap::new(),
        }
    }

    /// Register a formatter
    ///
    /// If a formatter for the same format already exists, it will be replaced.
    pub fn register<F: Formatter + 'static>(&mut self, formatter: F) {
        self.formatters.insert(formatter.format(), Box::new(formatter));
    }

    pub fn get(&self, format: OutputFormat) -> Option<&dyn Formatter> {
        self.formatters.get(&format).map(|f| f.as_ref())
    }

    pub fn has(&self, format: OutputFormat) -> bool {
        self.formatters.contains_key(&format)
    }

    /// Render a document using the named format
    pub fn render(&self, doc: &Document, format: &str) -> Result<String, FormatError> {
        let format: OutputFormat = format.parse()?;
        let formatter = self
            .get(format)
            .ok_or_else(|| FormatError::UnknownFormat(format.name().to_string()))?;
        tracing::debug!(%format, "rendering document");
        formatter.render(doc)
    }

    /// List all registered format names (sorted)
    pub fn list_formats(&self) -> Vec<String> {
        let mut formats: Vec<_> = self.formatters.keys().copied().collect();
        formats.sort();
        formats.iter().map(|f| f.name().to_string()).collect()
    }

    /// Registered formats with their descriptions (sorted by name)
    pub fn describe(&self) -> Vec<(String, String)> {
        let mut formats: Vec<_> = self.formatters.keys().copied().collect();
        formats.sort();
        formats
            .into_iter()
            .filter_map(|format| self.get(format))
            .map(|f| (f.format().name().to_string(), f.description().to_string()))
            .collect()
    }

    /// Create a registry with default formatters
    pub fn with_defaults() -> Self {
        let mut registry = Self::new();
        registry.register(HtmlFormatter::default());
        registry
    }
}

impl Default for FormatRegistry {
    fn default() -> Self {
        Self::with_defaults()
    }
}
