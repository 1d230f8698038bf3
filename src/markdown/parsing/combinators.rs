//! Character classes and line-level building blocks shared by the grammar.
//!
//! Whitespace is never skipped implicitly: each rule states exactly where
//! spaces may appear.

use chumsky::prelude::*;

/// Type alias for parser error
pub type ParserError = Simple<char>;

pub(crate) fn is_line_break(c: &char) -> bool {
    matches!(c, '\n' | '\r')
}

/// Run characters of `**bold**` and `*italic*`
pub(crate) fn is_emphasis_char(c: &char) -> bool {
    !matches!(c, '*' | '\n' | '\r')
}

pub(crate) fn is_code_char(c: &char) -> bool {
    !matches!(c, '`' | '\n' | '\r')
}

/// First character of a plain text run: never a block or inline sentinel
pub(crate) fn is_text_start(c: &char) -> bool {
    !c.is_whitespace() && !matches!(c, '#' | '>' | '*' | '`' | '[')
}

pub(crate) fn is_text_char(c: &char) -> bool {
    !matches!(c, '\n' | '\r' | '*' | '`' | '[')
}

pub(crate) fn is_autolink_char(c: &char) -> bool {
    !c.is_whitespace() && !matches!(c, '[' | '`' | '*' | '>')
}

pub(crate) fn is_url_char(c: &char) -> bool {
    !c.is_whitespace() && !matches!(c, '(' | ')')
}

pub(crate) fn is_link_text_char(c: &char) -> bool {
    !matches!(c, ']' | '\n' | '\r')
}

/// Space or tab
pub(crate) fn inline_ws() -> impl Parser<char, char, Error = ParserError> + Clone {
    one_of(" \t")
}

/// A hard line break: `\r\n`, `\n` or `\r`
pub(crate) fn eol() -> impl Parser<char, (), Error = ParserError> + Clone {
    choice((
        just("\r\n").ignored(),
        just('\n').ignored(),
        just('\r').ignored(),
    ))
    .labelled("line break")
}

/// End of a line: a line break, or the end of input for an unterminated last line
pub(crate) fn line_end() -> impl Parser<char, (), Error = ParserError> + Clone {
    eol().or(end())
}

/// `\x` admits any non-newline character `x` into a run
fn escaped_char() -> impl Parser<char, char, Error = ParserError> + Clone {
    just('\\').ignore_then(filter(|c: &char| !is_line_break(c)))
}

/// One character of a prose run; escapes resolve to the escaped character
pub(crate) fn prose_char(
    allowed: fn(&char) -> bool,
) -> impl Parser<char, char, Error = ParserError> + Clone {
    escaped_char().or(filter(allowed))
}

/// One character of a verbatim run; escapes are kept as written
pub(crate) fn verbatim_char(
    allowed: fn(&char) -> bool,
) -> impl Parser<char, String, Error = ParserError> + Clone {
    just('\\')
        .then(filter(|c: &char| !is_line_break(c)))
        .map(|(slash, c)| format!("{slash}{c}"))
        .or(filter(allowed).map(String::from))
}

/// Escape `&`, `<` and `>` for element content
pub(crate) fn escape_html(text: &str) -> String {
    html_escape::encode_text(text).into_owned()
}
