//! Block constructs: headings, lists, quotes, paragraphs, code blocks and
//! empty lines.
//!
//! Every block parser starts at the beginning of a line and consumes through
//! the line end of its last line, so the document parser never has to assert
//! "beginning of line" explicitly.

use chumsky::prelude::*;

use super::combinators::{eol, escape_html, inline_ws, is_line_break, line_end, ParserError};
use super::inlines::inline;
use super::joining::join_lines;
use crate::markdown::ast::{
    Block, Heading, Inline, List, ListItem, ListKind, Paragraph, PreBlock, Quote,
};

/// A line holding only optional whitespace
pub(crate) fn empty_line() -> impl Parser<char, Block, Error = ParserError> + Clone {
    let terminated = inline_ws().repeated().then_ignore(eol()).ignored();
    // The last line of input may be blank without a line break, but must not be zero-width.
    let trailing = inline_ws()
        .repeated()
        .at_least(1)
        .then_ignore(end())
        .ignored();

    terminated
        .or(trailing)
        .to(Block::EmptyLine)
        .labelled("empty line")
}

/// `#` to `######`, one space, the rest of the line
pub(crate) fn heading() -> impl Parser<char, Block, Error = ParserError> + Clone {
    just('#')
        .repeated()
        .at_least(1)
        .at_most(6)
        .then_ignore(just(' '))
        .then(filter(|c: &char| !is_line_break(c)).repeated().collect::<String>())
        .then_ignore(line_end())
        .map(|(hashes, text)| Block::Heading(Heading::new(hashes.len() as u8, text)))
        .labelled("heading")
}

/// Inline content of one line; trailing whitespace after markup is dropped
fn inline_run(min: usize) -> impl Parser<char, Vec<Inline>, Error = ParserError> + Clone {
    inline()
        .repeated()
        .at_least(min)
        .then_ignore(inline_ws().repeated())
}

/// Items are single lines, so their trailing blanks go the way a block's last line does
fn trim_item_end(mut inlines: Vec<Inline>) -> Vec<Inline> {
    if let Some(Inline::SimpleText(text)) = inlines.last_mut() {
        text.truncate(text.trim_end().len());
    }
    inlines
}

fn unordered_item() -> impl Parser<char, ListItem, Error = ParserError> + Clone {
    one_of("*-+")
        .then_ignore(just(' '))
        .then(inline_run(1))
        .map(|(marker, inlines)| ListItem::new(marker.to_string(), trim_item_end(inlines)))
        .labelled("unordered list item")
}

fn ordered_item() -> impl Parser<char, ListItem, Error = ParserError> + Clone {
    filter(|c: &char| c.is_ascii_digit())
        .repeated()
        .at_least(1)
        .collect::<String>()
        .then_ignore(just(". "))
        .then(inline_run(1))
        .map(|(number, inlines)| ListItem::new(format!("{number}."), trim_item_end(inlines)))
        .labelled("ordered list item")
}

/// Items of one kind on consecutive lines, optionally bounded by empty lines
fn list<P>(item: P, kind: ListKind) -> impl Parser<char, Block, Error = ParserError> + Clone
where
    P: Parser<char, ListItem, Error = ParserError> + Clone,
{
    empty_line()
        .or_not()
        .ignore_then(item.clone().then(eol().ignore_then(item).repeated()))
        .then_ignore(line_end())
        .then_ignore(empty_line().or_not())
        .map(move |(first, rest)| {
            let mut items = Vec::with_capacity(rest.len() + 1);
            items.push(first);
            items.extend(rest);
            Block::List(List::new(kind, items))
        })
}

pub(crate) fn unordered_list() -> impl Parser<char, Block, Error = ParserError> + Clone {
    list(unordered_item(), ListKind::Unordered).labelled("unordered list")
}

pub(crate) fn ordered_list() -> impl Parser<char, Block, Error = ParserError> + Clone {
    list(ordered_item(), ListKind::Ordered).labelled("ordered list")
}

/// Consecutive `>` lines merged into one quote
pub(crate) fn quote() -> impl Parser<char, Block, Error = ParserError> + Clone {
    let quote_line = just('>')
        .ignore_then(just(' ').or_not())
        .ignore_then(inline_run(0))
        .then_ignore(line_end());

    quote_line
        .repeated()
        .at_least(1)
        .map(|lines| Block::Quote(Quote::new(join_lines(lines))))
        .labelled("quote")
}

/// The default block: lines of inline content
pub(crate) fn paragraph() -> impl Parser<char, Block, Error = ParserError> + Clone {
    // A tab opening a line starts a code block.
    let text_line = none_of("\t")
        .rewind()
        .ignore_then(inline_run(1))
        .then_ignore(line_end());

    empty_line()
        .or_not()
        .ignore_then(text_line.repeated().at_least(1))
        .then_ignore(empty_line().or_not())
        .map(|lines| Block::Paragraph(Paragraph::new(join_lines(lines))))
        .labelled("paragraph")
}

/// Lines indented by four spaces or a tab, de-indented and escaped
pub(crate) fn pre_block() -> impl Parser<char, Block, Error = ParserError> + Clone {
    let indent = just("    ").ignored().or(just('\t').ignored());
    let code_line = indent
        .ignore_then(filter(|c: &char| !is_line_break(c)).repeated().collect::<String>())
        .then_ignore(line_end());

    code_line
        .repeated()
        .at_least(1)
        .map(|lines| Block::PreBlock(PreBlock::new(escape_html(&lines.join("\n")))))
        .labelled("code block")
}
