//! Inline constructs: emphasis, code spans, links and plain text.
//!
//! [`inline`] is the ordered choice used everywhere a run of inline content is
//! allowed. Bold must come before italic: a leading `**` is also a valid start
//! for two consecutive italic attempts.

use chumsky::prelude::*;

use super::combinators::{
    escape_html, inline_ws, is_autolink_char, is_code_char, is_emphasis_char, is_link_text_char,
    is_text_char, is_text_start, is_url_char, prose_char, verbatim_char, ParserError,
};
use crate::markdown::ast::{Inline, Link};

/// `**text**`
pub(crate) fn bold() -> impl Parser<char, Inline, Error = ParserError> + Clone {
    prose_char(is_emphasis_char)
        .repeated()
        .at_least(1)
        .collect::<String>()
        .delimited_by(just("**"), just("**"))
        .map(Inline::Bold)
        .labelled("bold")
}

/// `*text*`
pub(crate) fn italic() -> impl Parser<char, Inline, Error = ParserError> + Clone {
    prose_char(is_emphasis_char)
        .repeated()
        .at_least(1)
        .collect::<String>()
        .delimited_by(just('*'), just('*'))
        .map(Inline::Italic)
        .labelled("italic")
}

/// `` `code` ``, content escaped for HTML
pub(crate) fn inline_code() -> impl Parser<char, Inline, Error = ParserError> + Clone {
    verbatim_char(is_code_char)
        .repeated()
        .at_least(1)
        .map(|parts| parts.concat())
        .delimited_by(just('`'), just('`'))
        .map(|code| Inline::InlineCode(escape_html(&code)))
        .labelled("inline code")
}

/// `[text](url)` or `[text](url "title")`
pub(crate) fn link() -> impl Parser<char, Inline, Error = ParserError> + Clone {
    let text = prose_char(is_link_text_char)
        .repeated()
        .at_least(1)
        .collect::<String>()
        .delimited_by(just('['), just(']'));

    let url = filter(is_url_char).repeated().at_least(1).collect::<String>();

    let title = inline_ws().repeated().at_least(1).ignore_then(
        none_of("\"\r\n")
            .repeated()
            .collect::<String>()
            .delimited_by(just('"'), just('"')),
    );

    let target = url
        .then(title.or_not())
        .then_ignore(inline_ws().repeated())
        .delimited_by(just('('), just(')'));

    text.then(target)
        .map(|(text, (href, title))| Inline::Link(Link::new(text, href).with_title(title)))
        .labelled("link")
}

/// `<url>`
pub(crate) fn automatic_link() -> impl Parser<char, Inline, Error = ParserError> + Clone {
    filter(is_autolink_char)
        .repeated()
        .at_least(1)
        .collect::<String>()
        .delimited_by(just('<'), just('>'))
        .map(Inline::AutomaticLink)
        .labelled("automatic link")
}

/// Plain text: up to three leading blanks (kept), a non-sentinel start
/// character, then anything up to the next markup character or line break.
///
/// A run of one to three blanks directly followed by markup is also text, so
/// that `**a** *b*` keeps the space between the two spans. Blanks are spaces
/// or tabs; a tab opening a line is kept out by the paragraph rule.
pub(crate) fn simple_text() -> impl Parser<char, Inline, Error = ParserError> + Clone {
    let word = inline_ws()
        .repeated()
        .at_most(3)
        .then(prose_char(is_text_start))
        .then(prose_char(is_text_char).repeated())
        .map(|((lead, first), rest)| {
            let mut text: String = lead.into_iter().collect();
            text.push(first);
            text.extend(rest);
            text
        });

    let spacer = inline_ws()
        .repeated()
        .at_least(1)
        .at_most(3)
        .then_ignore(one_of("*`[").rewind())
        .collect::<String>();

    word.or(spacer).map(Inline::SimpleText).labelled("text")
}

/// Any inline construct, tried in declaration order
pub fn inline() -> impl Parser<char, Inline, Error = ParserError> + Clone {
    choice((
        bold(),
        italic(),
        inline_code(),
        link(),
        automatic_link(),
        simple_text(),
    ))
    .boxed()
}
