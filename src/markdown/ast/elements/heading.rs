//! Heading element definition

use super::super::traits::{AstNode, MarkdownNode};
use std::fmt;

/// An ATX heading, `#` through `######`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Heading {
    pub level: u8,
    pub text: String,
}

impl Heading {
    pub fn new(level: u8, text: impl Into<String>) -> Self {
        Self {
            level,
            text: text.into(),
        }
    }
}

impl AstNode for Heading {
    fn node_type(&self) -> &'static str {
        "Heading"
    }
    fn display_label(&self) -> String {
        format!("{} {}", "#".repeat(self.level as usize), self.text)
    }
}

impl MarkdownNode for Heading {
    fn tag(&self) -> Option<String> {
        Some(format!("h{}", self.level))
    }
    fn text(&self) -> Option<&str> {
        Some(&self.text)
    }
}

impl fmt::Display for Heading {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Heading(h{}, '{}')", self.level, self.text)
    }
}
