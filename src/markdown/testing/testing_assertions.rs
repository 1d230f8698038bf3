//! Fluent assertion API for parse trees

use super::testing_matchers::TextMatch;
use crate::markdown::ast::{
    AstNode, Block, Document, Heading, Inline, Line, List, ListItem, PreBlock,
};

// ============================================================================
// Entry Point
// ============================================================================

/// Create an assertion builder for a document
pub fn assert_doc(doc: &Document) -> DocumentAssertion<'_> {
    DocumentAssertion { doc }
}

fn summarize(blocks: &[&Block]) -> String {
    blocks
        .iter()
        .map(|block| block.node_type())
        .collect::<Vec<_>>()
        .join(", ")
}

// ============================================================================
// Document Assertions
// ============================================================================

pub struct DocumentAssertion<'a> {
    doc: &'a Document,
}

impl<'a> DocumentAssertion<'a> {
    /// Assert the number of blocks, empty lines included
    pub fn block_count(self, expected: usize) -> Self {
        let blocks: Vec<_> = self.doc.blocks.iter().collect();
        assert_eq!(
            blocks.len(),
            expected,
            "Expected {expected} blocks, found {}: [{}]",
            blocks.len(),
            summarize(&blocks)
        );
        self
    }

    /// Assert the number of blocks other than empty lines
    pub fn content_block_count(self, expected: usize) -> Self {
        let blocks: Vec<_> = self.doc.content_blocks().collect();
        assert_eq!(
            blocks.len(),
            expected,
            "Expected {expected} content blocks, found {}: [{}]",
            blocks.len(),
            summarize(&blocks)
        );
        self
    }

    pub fn block<F>(self, index: usize, assertion: F) -> Self
    where
        F: FnOnce(BlockAssertion<'a>),
    {
        let block = self.doc.blocks.get(index).unwrap_or_else(|| {
            panic!(
                "Block index {index} out of bounds (document has {} blocks)",
                self.doc.blocks.len()
            )
        });
        assertion(BlockAssertion {
            block,
            context: format!("blocks[{index}]"),
        });
        self
    }

    /// Assert on the n-th block, skipping empty lines
    pub fn content_block<F>(self, index: usize, assertion: F) -> Self
    where
        F: FnOnce(BlockAssertion<'a>),
    {
        let doc = self.doc;
        let block = doc.content_blocks().nth(index).unwrap_or_else(|| {
            panic!(
                "Content block index {index} out of bounds (document has {} content blocks)",
                doc.content_blocks().count()
            )
        });
        assertion(BlockAssertion {
            block,
            context: format!("content_blocks[{index}]"),
        });
        self
    }

    pub fn title(self, expected: Option<&str>) -> Self {
        assert_eq!(self.doc.title(), expected, "document title");
        self
    }
}

// ============================================================================
// Block Assertions
// ============================================================================

pub struct BlockAssertion<'a> {
    block: &'a Block,
    context: String,
}

impl<'a> BlockAssertion<'a> {
    fn mismatch(&self, expected: &str) -> ! {
        panic!(
            "{}: Expected {expected}, found {} '{}'",
            self.context,
            self.block.node_type(),
            self.block.display_label()
        )
    }

    pub fn assert_heading(self) -> HeadingAssertion<'a> {
        match self.block {
            Block::Heading(heading) => HeadingAssertion {
                heading,
                context: self.context,
            },
            _ => self.mismatch("Heading"),
        }
    }

    pub fn assert_paragraph(self) -> FlowedAssertion<'a> {
        match self.block {
            Block::Paragraph(paragraph) => FlowedAssertion {
                lines: &paragraph.lines,
                context: self.context,
            },
            _ => self.mismatch("Paragraph"),
        }
    }

    pub fn assert_quote(self) -> FlowedAssertion<'a> {
        match self.block {
            Block::Quote(quote) => FlowedAssertion {
                lines: &quote.lines,
                context: self.context,
            },
            _ => self.mismatch("Quote"),
        }
    }

    pub fn assert_list(self) -> ListAssertion<'a> {
        match self.block {
            Block::List(list) => ListAssertion {
                list,
                context: self.context,
            },
            _ => self.mismatch("List"),
        }
    }

    pub fn assert_pre(self) -> PreAssertion<'a> {
        match self.block {
            Block::PreBlock(pre) => PreAssertion {
                pre,
                context: self.context,
            },
            _ => self.mismatch("PreBlock"),
        }
    }

    pub fn assert_empty_line(self) {
        if !self.block.is_empty_line() {
            self.mismatch("EmptyLine")
        }
    }

    pub fn is_paragraph(&self) -> bool {
        matches!(self.block, Block::Paragraph(_))
    }

    pub fn is_list(&self) -> bool {
        matches!(self.block, Block::List(_))
    }
}

// ============================================================================
// Heading Assertions
// ============================================================================

pub struct HeadingAssertion<'a> {
    heading: &'a Heading,
    context: String,
}

impl<'a> HeadingAssertion<'a> {
    pub fn level(self, expected: u8) -> Self {
        assert_eq!(
            self.heading.level, expected,
            "{}: Expected heading level {expected}, found {}",
            self.context, self.heading.level
        );
        self
    }

    pub fn text(self, expected: &str) -> Self {
        TextMatch::Exact(expected.to_string()).assert(&self.heading.text, &self.context);
        self
    }
}

// ============================================================================
// Paragraph / Quote Assertions
// ============================================================================

/// Assertions shared by paragraphs and quotes
pub struct FlowedAssertion<'a> {
    lines: &'a [Line],
    context: String,
}

impl<'a> FlowedAssertion<'a> {
    fn text_value(&self) -> String {
        self.lines.iter().map(Line::text).collect()
    }

    fn inlines(&self) -> Vec<&'a Inline> {
        self.lines.iter().flat_map(|line| line.inlines.iter()).collect()
    }

    /// Assert the joined text of all lines
    pub fn text(self, expected: &str) -> Self {
        TextMatch::Exact(expected.to_string()).assert(&self.text_value(), &self.context);
        self
    }

    pub fn text_starts_with(self, prefix: &str) -> Self {
        TextMatch::StartsWith(prefix.to_string()).assert(&self.text_value(), &self.context);
        self
    }

    pub fn text_contains(self, substring: &str) -> Self {
        TextMatch::Contains(substring.to_string()).assert(&self.text_value(), &self.context);
        self
    }

    pub fn line_count(self, expected: usize) -> Self {
        assert_eq!(
            self.lines.len(),
            expected,
            "{}: Expected {expected} lines, found {}",
            self.context,
            self.lines.len()
        );
        self
    }

    /// Assert the number of inlines across all lines
    pub fn inline_count(self, expected: usize) -> Self {
        let actual = self.inlines().len();
        assert_eq!(
            actual, expected,
            "{}: Expected {expected} inlines, found {actual}",
            self.context
        );
        self
    }

    pub fn inline<F>(self, index: usize, assertion: F) -> Self
    where
        F: FnOnce(InlineAssertion<'a>),
    {
        let inlines = self.inlines();
        let inline = inlines.get(index).copied().unwrap_or_else(|| {
            panic!(
                "{}: Inline index {index} out of bounds ({} inlines)",
                self.context,
                inlines.len()
            )
        });
        assertion(InlineAssertion {
            inline,
            context: format!("{}:inlines[{index}]", self.context),
        });
        self
    }
}

// ============================================================================
// List Assertions
// ============================================================================

pub struct ListAssertion<'a> {
    list: &'a List,
    context: String,
}

impl<'a> ListAssertion<'a> {
    pub fn ordered(self) -> Self {
        assert!(
            self.list.is_ordered(),
            "{}: Expected an ordered list",
            self.context
        );
        self
    }

    pub fn unordered(self) -> Self {
        assert!(
            !self.list.is_ordered(),
            "{}: Expected an unordered list",
            self.context
        );
        self
    }

    pub fn item_count(self, expected: usize) -> Self {
        assert_eq!(
            self.list.items.len(),
            expected,
            "{}: Expected {expected} list items, found {}",
            self.context,
            self.list.items.len()
        );
        self
    }

    pub fn item<F>(self, index: usize, assertion: F) -> Self
    where
        F: FnOnce(ListItemAssertion<'a>),
    {
        let item = self.list.items.get(index).unwrap_or_else(|| {
            panic!(
                "{}: Item index {index} out of bounds (list has {} items)",
                self.context,
                self.list.items.len()
            )
        });
        assertion(ListItemAssertion {
            item,
            context: format!("{}:items[{index}]", self.context),
        });
        self
    }
}

pub struct ListItemAssertion<'a> {
    item: &'a ListItem,
    context: String,
}

impl<'a> ListItemAssertion<'a> {
    pub fn marker(self, expected: &str) -> Self {
        assert_eq!(
            self.item.marker, expected,
            "{}: Expected marker '{expected}', found '{}'",
            self.context, self.item.marker
        );
        self
    }

    pub fn text(self, expected: &str) -> Self {
        TextMatch::Exact(expected.to_string()).assert(&self.item.text(), &self.context);
        self
    }

    pub fn inline_count(self, expected: usize) -> Self {
        assert_eq!(
            self.item.inlines.len(),
            expected,
            "{}: Expected {expected} inlines, found {}",
            self.context,
            self.item.inlines.len()
        );
        self
    }

    pub fn inline<F>(self, index: usize, assertion: F) -> Self
    where
        F: FnOnce(InlineAssertion<'a>),
    {
        let inline = self.item.inlines.get(index).unwrap_or_else(|| {
            panic!(
                "{}: Inline index {index} out of bounds ({} inlines)",
                self.context,
                self.item.inlines.len()
            )
        });
        assertion(InlineAssertion {
            inline,
            context: format!("{}:inlines[{index}]", self.context),
        });
        self
    }
}

// ============================================================================
// Code Assertions
// ============================================================================

pub struct PreAssertion<'a> {
    pre: &'a PreBlock,
    context: String,
}

impl<'a> PreAssertion<'a> {
    /// Assert the escaped code text
    pub fn code(self, expected: &str) -> Self {
        TextMatch::Exact(expected.to_string()).assert(&self.pre.code.text, &self.context);
        self
    }

    pub fn line_count(self, expected: usize) -> Self {
        let actual = self.pre.code.text.split('\n').count();
        assert_eq!(
            actual, expected,
            "{}: Expected {expected} code lines, found {actual}",
            self.context
        );
        self
    }
}

// ============================================================================
// Inline Assertions
// ============================================================================

pub struct InlineAssertion<'a> {
    inline: &'a Inline,
    context: String,
}

impl<'a> InlineAssertion<'a> {
    fn mismatch(&self, expected: &str) -> ! {
        panic!(
            "{}: Expected {expected}, found {:?}",
            self.context, self.inline
        )
    }

    pub fn bold(self, expected: &str) -> Self {
        match self.inline {
            Inline::Bold(text) => TextMatch::Exact(expected.to_string()).assert(text, &self.context),
            _ => self.mismatch("Bold"),
        }
        self
    }

    pub fn italic(self, expected: &str) -> Self {
        match self.inline {
            Inline::Italic(text) => {
                TextMatch::Exact(expected.to_string()).assert(text, &self.context)
            }
            _ => self.mismatch("Italic"),
        }
        self
    }

    /// Assert inline code with its escaped text
    pub fn code(self, expected: &str) -> Self {
        match self.inline {
            Inline::InlineCode(text) => {
                TextMatch::Exact(expected.to_string()).assert(text, &self.context)
            }
            _ => self.mismatch("InlineCode"),
        }
        self
    }

    pub fn text(self, expected: &str) -> Self {
        match self.inline {
            Inline::SimpleText(text) => {
                TextMatch::Exact(expected.to_string()).assert(text, &self.context)
            }
            _ => self.mismatch("SimpleText"),
        }
        self
    }

    pub fn link(self, text: &str, href: &str) -> Self {
        match self.inline {
            Inline::Link(link) => {
                TextMatch::Exact(text.to_string()).assert(&link.text, &self.context);
                TextMatch::Exact(href.to_string()).assert(&link.href, &self.context);
            }
            _ => self.mismatch("Link"),
        }
        self
    }

    pub fn link_title(self, expected: Option<&str>) -> Self {
        match self.inline {
            Inline::Link(link) => assert_eq!(
                link.title.as_deref(),
                expected,
                "{}: link title",
                self.context
            ),
            _ => self.mismatch("Link"),
        }
        self
    }

    pub fn autolink(self, url: &str) -> Self {
        match self.inline {
            Inline::AutomaticLink(href) => {
                TextMatch::Exact(url.to_string()).assert(href, &self.context)
            }
            _ => self.mismatch("AutomaticLink"),
        }
        self
    }
}
