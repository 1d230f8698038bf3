//! HTML output
//!
//! Extracts the element records of a document, builds each top-level record
//! with [`builder::build_element`], and fills the page template with the
//! joined blocks and the document title.

pub mod builder;
pub mod template;

pub use builder::{build_attributes, build_block, build_element, build_item, TAB_SEP};
pub use template::{Template, TemplateError};

use super::registry::{FormatError, Formatter, OutputFormat};
use crate::markdown::ast::Document;
use crate::markdown::building::{extract, TagRenames};

/// Separator between rendered top-level blocks
const BLOCK_SEPARATOR: &str = "\n\n";

/// Render a document into a full HTML page
pub fn render_document(
    doc: &Document,
    template: &Template,
    renames: &TagRenames,
    title_fallback: &str,
) -> Result<String, TemplateError> {
    let elements = extract(doc, renames);
    tracing::debug!(elements = elements.len(), "extracted elements");

    let content = elements
        .iter()
        .map(build_element)
        .collect::<Vec<_>>()
        .join(BLOCK_SEPARATOR);
    let title = doc.title().unwrap_or(title_fallback);

    template.substitute(&[("title", title), ("content", &content)])
}

/// The HTML renderer
#[derive(Debug, Clone, Default)]
pub struct HtmlFormatter {
    template: Template,
    renames: TagRenames,
    title_fallback: String,
}

impl HtmlFormatter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_template(mut self, template: Template) -> Self {
        self.template = template;
        self
    }

    pub fn with_renames(mut self, renames: TagRenames) -> Self {
        self.renames = renames;
        self
    }

    pub fn with_title_fallback(mut self, title: impl Into<String>) -> Self {
        self.title_fallback = title.into();
        self
    }
}

impl Formatter for HtmlFormatter {
    fn format(&self) -> OutputFormat {
        OutputFormat::Html
    }

    fn render(&self, doc: &Document) -> Result<String, FormatError> {
        Ok(render_document(
            doc,
            &self.template,
            &self.renames,
            &self.title_fallback,
        )?)
    }

    fn description(&self) -> &str {
        "HTML page built from the page template"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::markdown::parsing::parse;

    fn body(source: &str) -> String {
        let doc = parse(source).unwrap();
        render_document(&doc, &Template::new("$content"), &TagRenames::default(), "")
            .unwrap()
    }

    #[test]
    fn test_blocks_are_separated_by_blank_lines() {
        assert_eq!(
            body("# Title\n\nSome text\n"),
            "    <h1>Title</h1>\n\n    <p>\n        Some text\n    </p>"
        );
    }

    #[test]
    fn test_title_from_first_heading() {
        let doc = parse("## Sub\n\n# Main\n").unwrap();
        let page =
            render_document(&doc, &Template::new("$title"), &TagRenames::default(), "x")
                .unwrap();
        assert_eq!(page, "Sub");
    }

    #[test]
    fn test_title_fallback() {
        let doc = parse("just text\n").unwrap();
        let formatter = HtmlFormatter::new()
            .with_template(Template::new("[$title]"))
            .with_title_fallback("Untitled");
        assert_eq!(formatter.render(&doc).unwrap(), "[Untitled]");
    }

    #[test]
    fn test_template_errors_surface_as_format_errors() {
        let formatter = HtmlFormatter::new().with_template(Template::new("$missing"));
        let result = formatter.render(&Document::default());
        assert_eq!(
            result,
            Err(FormatError::Template(TemplateError::UnknownPlaceholder(
                "missing".to_string()
            )))
        );
    }

    #[test]
    fn test_custom_renames() {
        let formatter = HtmlFormatter::new()
            .with_template(Template::new("$content"))
            .with_renames(TagRenames::none().with("quote", "aside"));
        let doc = parse("> hi\n").unwrap();
        assert_eq!(
            formatter.render(&doc).unwrap(),
            "    <aside>\n        hi\n    </aside>"
        );
    }
}
