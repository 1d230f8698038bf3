//! Parse tree for the markdown dialect
//!
//! The tree is built once by the grammar and never mutated afterwards. Block
//! and inline nodes are owned recursive enums; grouping nodes (paragraph lines,
//! quote lines) carry neither tag nor text and disappear during extraction.

pub mod elements;
pub mod options;
pub mod traits;

pub use elements::{
    Block, CodeBlock, Document, Heading, Inline, Line, Link, List, ListItem, ListKind, Paragraph,
    PreBlock, Quote,
};
pub use options::{Attributes, RenderOptions};
pub use traits::{AstNode, MarkdownNode};
