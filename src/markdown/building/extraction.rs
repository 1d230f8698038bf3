//! Element Extraction from the Parse Tree
//!
//! Flattens the heterogeneous parse tree into a uniform sequence of
//! [`Element`] records, the only input the renderers see.
//!
//! # Architecture
//!
//! ```text
//! Document (Block / Line / ListItem / Inline nodes)
//!     ↓ extract(node, renames)
//!     - tagged node      → one Element, recursing into its children
//!     - untagged node    → its extracted children spliced into the parent
//!     - empty leaf node  → dropped
//!     ↓
//! Vec<Element> { tag, text, children, attributes, options }
//! ```
//!
//! Grouping nodes (paragraph and quote lines) and empty lines have no tag,
//! so they are structurally invisible in the output. Renames only touch
//! tagged nodes.

use serde::Serialize;
use std::collections::HashMap;

use crate::markdown::ast::{Attributes, MarkdownNode, RenderOptions};

// ============================================================================
// DATA STRUCTURES
// ============================================================================

/// A normalized element record
///
/// `text` is only a render source when `children` is empty.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Element {
    pub tag: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub children: Vec<Element>,
    #[serde(skip_serializing_if = "Attributes::is_empty")]
    pub attributes: Attributes,
    pub options: RenderOptions,
}

impl Element {
    pub fn new(tag: impl Into<String>) -> Self {
        Self {
            tag: tag.into(),
            text: None,
            children: Vec::new(),
            attributes: Attributes::new(),
            options: RenderOptions::default(),
        }
    }

    pub fn with_text(mut self, text: impl Into<String>) -> Self {
        self.text = Some(text.into());
        self
    }

    pub fn with_children(mut self, children: Vec<Element>) -> Self {
        self.children = children;
        self
    }

    pub fn with_attributes(mut self, attributes: Attributes) -> Self {
        self.attributes = attributes;
        self
    }

    pub fn with_options(mut self, options: RenderOptions) -> Self {
        self.options = options;
        self
    }

    /// A leaf renders its text; anything else renders its children
    pub fn is_leaf(&self) -> bool {
        self.text.is_some() && self.children.is_empty()
    }
}

/// Tag substitutions applied during extraction
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TagRenames(HashMap<String, String>);

impl TagRenames {
    pub fn none() -> Self {
        Self(HashMap::new())
    }

    pub fn from_map(renames: HashMap<String, String>) -> Self {
        Self(renames)
    }

    pub fn with(mut self, from: impl Into<String>, to: impl Into<String>) -> Self {
        self.0.insert(from.into(), to.into());
        self
    }

    pub fn apply(&self, tag: String) -> String {
        self.0.get(&tag).cloned().unwrap_or(tag)
    }
}

/// HTML container names for the grammar's list and quote tags
impl Default for TagRenames {
    fn default() -> Self {
        Self::none()
            .with("unordered_list", "ul")
            .with("ordered_list", "ol")
            .with("quote", "blockquote")
    }
}

// ============================================================================
// EXTRACTION
// ============================================================================

/// Extract the element records for the children of `node`
pub fn extract(node: &dyn MarkdownNode, renames: &TagRenames) -> Vec<Element> {
    let mut elements = Vec::new();

    for child in node.children() {
        let tag = child.tag().map(|tag| renames.apply(tag));
        let text = child.text().map(str::to_string);
        let children = if tag.is_none() || text.is_none() {
            extract(child, renames)
        } else {
            Vec::new()
        };

        match tag {
            Some(tag) => elements.push(Element {
                tag,
                text,
                children,
                attributes: child.attributes(),
                options: child.options(),
            }),
            None => elements.extend(children),
        }
    }

    elements
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::markdown::ast::{
        Block, Document, Heading, Inline, Line, Link, List, ListItem, ListKind, Paragraph,
        PreBlock, Quote,
    };

    fn text(s: &str) -> Inline {
        Inline::SimpleText(s.to_string())
    }

    #[test]
    fn test_heading_is_a_leaf() {
        let doc = Document::new(vec![Block::Heading(Heading::new(2, "Intro"))]);
        assert_eq!(
            extract(&doc, &TagRenames::default()),
            vec![Element::new("h2").with_text("Intro")]
        );
    }

    #[test]
    fn test_empty_lines_vanish() {
        let doc = Document::new(vec![Block::EmptyLine, Block::EmptyLine]);
        assert!(extract(&doc, &TagRenames::default()).is_empty());
    }

    #[test]
    fn test_paragraph_lines_are_spliced() {
        let doc = Document::new(vec![Block::Paragraph(Paragraph::new(vec![
            Line::new(vec![text("one ")]),
            Line::new(vec![Inline::Bold("two".to_string())]),
        ]))]);
        assert_eq!(
            extract(&doc, &TagRenames::default()),
            vec![Element::new("p")
                .with_options(RenderOptions::flowed())
                .with_children(vec![
                    Element::new("text").with_text("one "),
                    Element::new("b").with_text("two"),
                ])]
        );
    }

    #[test]
    fn test_containers_are_renamed() {
        let doc = Document::new(vec![
            Block::List(List::new(
                ListKind::Unordered,
                vec![ListItem::new("*", vec![text("a")])],
            )),
            Block::List(List::new(
                ListKind::Ordered,
                vec![ListItem::new("1.", vec![text("b")])],
            )),
            Block::Quote(Quote::new(vec![Line::new(vec![text("c")])])),
        ]);
        let tags: Vec<_> = extract(&doc, &TagRenames::default())
            .into_iter()
            .map(|element| element.tag)
            .collect();
        assert_eq!(tags, vec!["ul", "ol", "blockquote"]);
    }

    #[test]
    fn test_without_renames_grammar_tags_survive() {
        let doc = Document::new(vec![Block::Quote(Quote::new(vec![Line::new(vec![
            text("c"),
        ])]))]);
        assert_eq!(extract(&doc, &TagRenames::none())[0].tag, "quote");
    }

    #[test]
    fn test_list_items_keep_inline_children() {
        let doc = Document::new(vec![Block::List(List::new(
            ListKind::Unordered,
            vec![ListItem::new("*", vec![text("a "), Inline::Italic("b".to_string())])],
        ))]);
        let elements = extract(&doc, &TagRenames::default());
        let item = &elements[0].children[0];
        assert_eq!(item.tag, "li");
        assert!(item.text.is_none());
        assert_eq!(item.children.len(), 2);
        assert!(!item.is_leaf());
        assert!(item.children[1].is_leaf());
    }

    #[test]
    fn test_link_attributes_are_carried() {
        let doc = Document::new(vec![Block::Paragraph(Paragraph::new(vec![Line::new(vec![
            Inline::Link(Link::new("x", "https://x.org")),
        ])]))]);
        let elements = extract(&doc, &TagRenames::default());
        assert_eq!(
            elements[0].children[0],
            Element::new("a")
                .with_text("x")
                .with_attributes(Attributes::new().with("href", "https://x.org"))
        );
    }

    #[test]
    fn test_pre_block_options() {
        let doc = Document::new(vec![Block::PreBlock(PreBlock::new("x"))]);
        let elements = extract(&doc, &TagRenames::default());
        assert_eq!(elements[0].tag, "pre");
        assert!(!elements[0].options.indentation);
        assert_eq!(elements[0].children, vec![Element::new("code").with_text("x")]);
    }

    #[test]
    fn test_elements_serialize() {
        let element = Element::new("a")
            .with_text("x")
            .with_attributes(Attributes::new().with("href", "u"));
        assert_eq!(
            serde_json::to_string(&element).unwrap(),
            r#"{"tag":"a","text":"x","attributes":{"href":"u"},"options":{"indentation":true,"onlyOuterLinebreaks":false}}"#
        );
    }
}
