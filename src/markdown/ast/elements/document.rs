//! Document element definition

use super::super::traits::{AstNode, MarkdownNode};
use super::block::Block;
use super::heading::Heading;
use std::fmt;

/// Root of the parse tree
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Document {
    pub blocks: Vec<Block>,
}

impl Document {
    pub fn new(blocks: Vec<Block>) -> Self {
        Self { blocks }
    }

    /// Blocks other than empty separator lines
    pub fn content_blocks(&self) -> impl Iterator<Item = &Block> {
        self.blocks.iter().filter(|block| !block.is_empty_line())
    }

    pub fn find_heading(&self) -> Option<&Heading> {
        self.blocks.iter().find_map(|block| match block {
            Block::Heading(heading) => Some(heading),
            _ => None,
        })
    }

    /// Page title: the text of the first heading
    pub fn title(&self) -> Option<&str> {
        self.find_heading().map(|heading| heading.text.as_str())
    }
}

impl AstNode for Document {
    fn node_type(&self) -> &'static str {
        "Document"
    }
    fn display_label(&self) -> String {
        format!("Document ({} blocks)", self.blocks.len())
    }
}

impl MarkdownNode for Document {
    fn children(&self) -> Vec<&dyn MarkdownNode> {
        self.blocks
            .iter()
            .map(|block| block as &dyn MarkdownNode)
            .collect()
    }
}

impl fmt::Display for Document {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.display_label())
    }
}
