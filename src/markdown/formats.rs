//! Output formats for rendered documents
//!
//! Every format is a variant of the closed [`OutputFormat`] enum with a
//! [`Formatter`] registered for it in the [`FormatRegistry`]. Only HTML is
//! built in.

pub mod html;
pub mod registry;

pub use html::{HtmlFormatter, Template, TemplateError};
pub use registry::{FormatError, FormatRegistry, Formatter, OutputFormat};

use crate::markdown::ast::Document;

/// Render a document with the default registry
pub fn render(doc: &Document, format: &str) -> Result<String, FormatError> {
    FormatRegistry::with_defaults().render(doc, format)
}
