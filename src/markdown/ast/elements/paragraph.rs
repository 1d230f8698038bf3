//! Paragraph and quote element definitions
//!
//! Both are flowed blocks: a sequence of [`Line`]s whose inlines have already
//! been joined by the grammar, rendered with only outer linebreaks.

use super::super::options::RenderOptions;
use super::super::traits::{AstNode, MarkdownNode};
use super::inline::Inline;
use std::fmt;

/// One source line of a flowed block
///
/// A grouping node: no tag and no text, so the extractor splices its inlines
/// into the enclosing paragraph or quote.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Line {
    pub inlines: Vec<Inline>,
}

impl Line {
    pub fn new(inlines: Vec<Inline>) -> Self {
        Self { inlines }
    }

    pub fn text(&self) -> String {
        self.inlines.iter().map(Inline::content).collect()
    }
}

impl AstNode for Line {
    fn node_type(&self) -> &'static str {
        "Line"
    }
    fn display_label(&self) -> String {
        self.text()
    }
}

impl MarkdownNode for Line {
    fn children(&self) -> Vec<&dyn MarkdownNode> {
        self.inlines
            .iter()
            .map(|inline| inline as &dyn MarkdownNode)
            .collect()
    }
}

fn flowed_text(lines: &[Line]) -> String {
    lines.iter().map(Line::text).collect()
}

fn label(text: String) -> String {
    if text.chars().count() > 50 {
        format!("{}...", text.chars().take(50).collect::<String>())
    } else {
        text
    }
}

/// A paragraph of inline text
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Paragraph {
    pub lines: Vec<Line>,
}

impl Paragraph {
    pub fn new(lines: Vec<Line>) -> Self {
        Self { lines }
    }

    /// Visible text of the whole paragraph, lines already joined
    pub fn text(&self) -> String {
        flowed_text(&self.lines)
    }

    pub fn inlines(&self) -> impl Iterator<Item = &Inline> {
        self.lines.iter().flat_map(|line| line.inlines.iter())
    }
}

impl AstNode for Paragraph {
    fn node_type(&self) -> &'static str {
        "Paragraph"
    }
    fn display_label(&self) -> String {
        label(self.text())
    }
}

impl MarkdownNode for Paragraph {
    fn tag(&self) -> Option<String> {
        Some("p".to_string())
    }
    fn options(&self) -> RenderOptions {
        RenderOptions::flowed()
    }
    fn children(&self) -> Vec<&dyn MarkdownNode> {
        self.lines
            .iter()
            .map(|line| line as &dyn MarkdownNode)
            .collect()
    }
}

impl fmt::Display for Paragraph {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Paragraph({} lines)", self.lines.len())
    }
}

/// A blockquote built from consecutive `>` lines
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Quote {
    pub lines: Vec<Line>,
}

impl Quote {
    pub fn new(lines: Vec<Line>) -> Self {
        Self { lines }
    }

    pub fn text(&self) -> String {
        flowed_text(&self.lines)
    }

    pub fn inlines(&self) -> impl Iterator<Item = &Inline> {
        self.lines.iter().flat_map(|line| line.inlines.iter())
    }
}

impl AstNode for Quote {
    fn node_type(&self) -> &'static str {
        "Quote"
    }
    fn display_label(&self) -> String {
        label(self.text())
    }
}

impl MarkdownNode for Quote {
    fn tag(&self) -> Option<String> {
        Some("quote".to_string())
    }
    fn options(&self) -> RenderOptions {
        RenderOptions::flowed()
    }
    fn children(&self) -> Vec<&dyn MarkdownNode> {
        self.lines
            .iter()
            .map(|line| line as &dyn MarkdownNode)
            .collect()
    }
}

impl fmt::Display for Quote {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Quote({} lines)", self.lines.len())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn text(s: &str) -> Inline {
        Inline::SimpleText(s.to_string())
    }

    #[test]
    fn test_paragraph_text_concatenates_lines() {
        let para = Paragraph::new(vec![
            Line::new(vec![text("one "), Inline::Bold("two".to_string())]),
            Line::new(vec![text(" three")]),
        ]);
        assert_eq!(para.text(), "one two three");
        assert_eq!(para.inlines().count(), 3);
    }

    #[test]
    fn test_line_is_a_grouping_node() {
        let line = Line::new(vec![text("x")]);
        assert!(line.tag().is_none());
        assert!(MarkdownNode::text(&line).is_none());
        assert_eq!(line.children().len(), 1);
    }

    #[test]
    fn test_quote_is_flowed() {
        let quote = Quote::new(vec![Line::new(vec![text("q")])]);
        assert_eq!(quote.tag().as_deref(), Some("quote"));
        assert!(quote.options().only_outer_linebreaks);
    }

    #[test]
    fn test_long_label_is_truncated() {
        let para = Paragraph::new(vec![Line::new(vec![text(&"a".repeat(60))])]);
        assert_eq!(para.display_label(), format!("{}...", "a".repeat(50)));
    }
}
