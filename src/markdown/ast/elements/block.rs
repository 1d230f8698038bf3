//! Block-level content

use super::super::options::{Attributes, RenderOptions};
use super::super::traits::{AstNode, MarkdownNode};
use super::code::PreBlock;
use super::heading::Heading;
use super::list::List;
use super::paragraph::{Paragraph, Quote};
use std::fmt;

/// One top-level construct of a document
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Block {
    Heading(Heading),
    List(List),
    Quote(Quote),
    Paragraph(Paragraph),
    EmptyLine,
    PreBlock(PreBlock),
}

impl Block {
    pub fn is_empty_line(&self) -> bool {
        matches!(self, Block::EmptyLine)
    }

    fn node(&self) -> Option<&dyn MarkdownNode> {
        match self {
            Block::Heading(h) => Some(h),
            Block::List(l) => Some(l),
            Block::Quote(q) => Some(q),
            Block::Paragraph(p) => Some(p),
            Block::PreBlock(pre) => Some(pre),
            Block::EmptyLine => None,
        }
    }
}

impl AstNode for Block {
    fn node_type(&self) -> &'static str {
        self.node().map_or("EmptyLine", |node| node.node_type())
    }
    fn display_label(&self) -> String {
        self.node().map(|node| node.display_label()).unwrap_or_default()
    }
}

impl MarkdownNode for Block {
    fn tag(&self) -> Option<String> {
        self.node().and_then(|node| node.tag())
    }
    fn text(&self) -> Option<&str> {
        self.node().and_then(|node| node.text())
    }
    fn attributes(&self) -> Attributes {
        self.node()
            .map(|node| node.attributes())
            .unwrap_or_default()
    }
    fn options(&self) -> RenderOptions {
        self.node().map(|node| node.options()).unwrap_or_default()
    }
    fn children(&self) -> Vec<&dyn MarkdownNode> {
        self.node().map(|node| node.children()).unwrap_or_default()
    }
}

impl fmt::Display for Block {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Block::Heading(h) => write!(f, "{}", h),
            Block::List(l) => write!(f, "{}", l),
            Block::Quote(q) => write!(f, "{}", q),
            Block::Paragraph(p) => write!(f, "{}", p),
            Block::EmptyLine => write!(f, "EmptyLine"),
            Block::PreBlock(pre) => write!(f, "{}", pre),
        }
    }
}
