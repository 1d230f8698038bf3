//! List element definitions

use super::super::traits::{AstNode, MarkdownNode};
use super::inline::Inline;
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ListKind {
    Unordered,
    Ordered,
}

/// A single list item; `marker` is the source marker (`*`, `-`, `+`, `12.`)
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListItem {
    pub marker: String,
    pub inlines: Vec<Inline>,
}

impl ListItem {
    pub fn new(marker: impl Into<String>, inlines: Vec<Inline>) -> Self {
        Self {
            marker: marker.into(),
            inlines,
        }
    }

    pub fn text(&self) -> String {
        self.inlines.iter().map(Inline::content).collect()
    }
}

impl AstNode for ListItem {
    fn node_type(&self) -> &'static str {
        "ListItem"
    }
    fn display_label(&self) -> String {
        format!("{} {}", self.marker, self.text())
    }
}

impl MarkdownNode for ListItem {
    fn tag(&self) -> Option<String> {
        Some("li".to_string())
    }
    fn children(&self) -> Vec<&dyn MarkdownNode> {
        self.inlines
            .iter()
            .map(|inline| inline as &dyn MarkdownNode)
            .collect()
    }
}

/// Consecutive list items of the same kind
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct List {
    pub kind: ListKind,
    pub items: Vec<ListItem>,
}

impl List {
    pub fn new(kind: ListKind, items: Vec<ListItem>) -> Self {
        Self { kind, items }
    }

    pub fn is_ordered(&self) -> bool {
        self.kind == ListKind::Ordered
    }
}

impl AstNode for List {
    fn node_type(&self) -> &'static str {
        match self.kind {
            ListKind::Unordered => "UnorderedList",
            ListKind::Ordered => "OrderedList",
        }
    }
    fn display_label(&self) -> String {
        format!("{} items", self.items.len())
    }
}

impl MarkdownNode for List {
    fn tag(&self) -> Option<String> {
        let tag = match self.kind {
            ListKind::Unordered => "unordered_list",
            ListKind::Ordered => "ordered_list",
        };
        Some(tag.to_string())
    }
    fn children(&self) -> Vec<&dyn MarkdownNode> {
        self.items
            .iter()
            .map(|item| item as &dyn MarkdownNode)
            .collect()
    }
}

impl fmt::Display for List {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}({} items)", self.node_type(), self.items.len())
    }
}
