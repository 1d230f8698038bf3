//! AST traits - Common interfaces for uniform node access
//!
//! Every node in the parse tree can be viewed through [`MarkdownNode`], which
//! is all the element extractor needs: an optional tag, an optional text
//! payload, attributes, render options and the ordered children.

use super::options::{Attributes, RenderOptions};

/// Common interface for all AST nodes
pub trait AstNode {
    fn node_type(&self) -> &'static str;
    fn display_label(&self) -> String;
}

/// Uniform tag/text/children view over heterogeneous parse nodes
pub trait MarkdownNode: AstNode {
    /// Semantic element name (`"h2"`, `"li"`, `"text"`), `None` for grouping nodes
    fn tag(&self) -> Option<String> {
        None
    }

    /// Leaf payload. Only meaningful when the node has no children.
    fn text(&self) -> Option<&str> {
        None
    }

    fn attributes(&self) -> Attributes {
        Attributes::new()
    }

    fn options(&self) -> RenderOptions {
        RenderOptions::default()
    }

    fn children(&self) -> Vec<&dyn MarkdownNode> {
        Vec::new()
    }
}
