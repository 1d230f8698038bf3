//! Document-level parser: the ordered block alternation, anchored at end of input.

use chumsky::prelude::*;

use super::blocks::{
    empty_line, heading, ordered_list, paragraph, pre_block, quote, unordered_list,
};
use super::combinators::ParserError;
use crate::markdown::ast::Document;

/// Parse a document
///
/// Blocks are tried in this order at every position: heading, unordered list,
/// ordered list, quote, paragraph, empty line, code block. Input that none of
/// them accepts, trailing content included, fails the parse.
pub fn document() -> impl Parser<char, Document, Error = ParserError> + Clone {
    choice((
        heading(),
        unordered_list(),
        ordered_list(),
        quote(),
        paragraph(),
        empty_line(),
        pre_block(),
    ))
    .repeated()
    .then_ignore(end())
    .map(Document::new)
}
