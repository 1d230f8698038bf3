//! Inline element definitions
//!
//! Inline nodes are always leaves: they carry a tag and a text payload and
//! never have children. Inline code text is HTML-escaped by the grammar.

use super::super::options::Attributes;
use super::super::traits::{AstNode, MarkdownNode};
use std::fmt;

/// A `[text](href "title")` link
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Link {
    pub text: String,
    pub href: String,
    pub title: Option<String>,
}

impl Link {
    pub fn new(text: impl Into<String>, href: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            href: href.into(),
            title: None,
        }
    }

    pub fn with_title(mut self, title: Option<String>) -> Self {
        self.title = title;
        self
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Inline {
    Bold(String),
    Italic(String),
    InlineCode(String),
    Link(Link),
    AutomaticLink(String),
    SimpleText(String),
}

impl Inline {
    /// True for plain text runs, the only inline the line joiner may touch
    pub fn is_text(&self) -> bool {
        matches!(self, Inline::SimpleText(_))
    }

    /// The visible text of this inline, without markup
    pub fn content(&self) -> &str {
        match self {
            Inline::Bold(text)
            | Inline::Italic(text)
            | Inline::InlineCode(text)
            | Inline::AutomaticLink(text)
            | Inline::SimpleText(text) => text,
            Inline::Link(link) => &link.text,
        }
    }
}

impl AstNode for Inline {
    fn node_type(&self) -> &'static str {
        match self {
            Inline::Bold(_) => "Bold",
            Inline::Italic(_) => "Italic",
            Inline::InlineCode(_) => "InlineCode",
            Inline::Link(_) => "Link",
            Inline::AutomaticLink(_) => "AutomaticLink",
            Inline::SimpleText(_) => "SimpleText",
        }
    }
    fn display_label(&self) -> String {
        self.content().to_string()
    }
}

impl MarkdownNode for Inline {
    fn tag(&self) -> Option<String> {
        let tag = match self {
            Inline::Bold(_) => "b",
            Inline::Italic(_) => "i",
            Inline::InlineCode(_) => "code",
            Inline::Link(_) | Inline::AutomaticLink(_) => "a",
            Inline::SimpleText(_) => "text",
        };
        Some(tag.to_string())
    }

    fn text(&self) -> Option<&str> {
        Some(self.content())
    }

    fn attributes(&self) -> Attributes {
        match self {
            Inline::Link(link) => {
                let mut attrs = Attributes::new().with("href", link.href.as_str());
                if let Some(title) = &link.title {
                    attrs.insert("title", title.as_str());
                }
                attrs
            }
            Inline::AutomaticLink(url) => Attributes::new().with("href", url.as_str()),
            _ => Attributes::new(),
        }
    }
}

impl fmt::Display for Inline {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}('{}')", self.node_type(), self.content())
    }
}
