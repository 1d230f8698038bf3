//! Code block element definitions

use super::super::options::RenderOptions;
use super::super::traits::{AstNode, MarkdownNode};
use std::fmt;

/// Indented code; `text` is de-indented and HTML-escaped
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CodeBlock {
    pub text: String,
}

impl AstNode for CodeBlock {
    fn node_type(&self) -> &'static str {
        "CodeBlock"
    }
    fn display_label(&self) -> String {
        self.text.lines().next().unwrap_or_default().to_string()
    }
}

impl MarkdownNode for CodeBlock {
    fn tag(&self) -> Option<String> {
        Some("code".to_string())
    }
    fn text(&self) -> Option<&str> {
        Some(&self.text)
    }
}

/// The `pre` container around a [`CodeBlock`]; never re-indented
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PreBlock {
    pub code: CodeBlock,
}

impl PreBlock {
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            code: CodeBlock { text: text.into() },
        }
    }
}

impl AstNode for PreBlock {
    fn node_type(&self) -> &'static str {
        "PreBlock"
    }
    fn display_label(&self) -> String {
        self.code.display_label()
    }
}

impl MarkdownNode for PreBlock {
    fn tag(&self) -> Option<String> {
        Some("pre".to_string())
    }
    fn options(&self) -> RenderOptions {
        RenderOptions::verbatim()
    }
    fn children(&self) -> Vec<&dyn MarkdownNode> {
        vec![&self.code]
    }
}

impl fmt::Display for PreBlock {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "PreBlock({} lines)", self.code.text.lines().count())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pre_block_wraps_code() {
        let pre = PreBlock::new("let x = 1;");
        assert_eq!(pre.tag().as_deref(), Some("pre"));
        assert!(!pre.options().indentation);
        let children = pre.children();
        assert_eq!(children.len(), 1);
        assert_eq!(children[0].tag().as_deref(), Some("code"));
        assert_eq!(children[0].text(), Some("let x = 1;"));
    }
}
