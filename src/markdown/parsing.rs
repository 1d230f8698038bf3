//! Parser for the markdown dialect
//!
//! The grammar is a scannerless chumsky parser over `char`s. Every alternation
//! site is an ordered choice: alternatives are tried in declaration order and
//! the first one that matches wins, with full backtracking on failure. That
//! order is the only disambiguation mechanism (bold is tried before italic,
//! lists before paragraphs).
//!
//! The whole input must match; there is no recovery and no partial tree.

pub mod blocks;
pub mod combinators;
pub mod document;
pub mod error;
pub mod inlines;
pub mod joining;
#[cfg(test)]
mod tests;

use chumsky::Parser;

use crate::markdown::ast::Document;

pub use document::document;
pub use error::ParseError;
pub use joining::join_lines;

/// Parse markdown source into a document tree
pub fn parse(source: &str) -> Result<Document, ParseError> {
    let doc = document()
        .parse(source)
        .map_err(|errors| ParseError::from_errors(source, errors))?;
    tracing::debug!(blocks = doc.blocks.len(), "parsed markdown document");
    Ok(doc)
}
