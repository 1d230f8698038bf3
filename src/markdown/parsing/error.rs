//! Parse failures
//!
//! The grammar has no error recovery: the first position no alternative can
//! get past fails the whole parse. Of the errors chumsky reports, the one that
//! got furthest into the input is kept.

use chumsky::error::Simple;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error(
    "parse error at line {line}, column {column}{}: expected {}, found {}",
    describe_rule(.rule),
    describe_expected(.expected),
    describe_found(.found)
)]
pub struct ParseError {
    /// Offset of the failure, in chars
    pub offset: usize,
    /// 1-based line
    pub line: usize,
    /// 1-based column, in chars
    pub column: usize,
    /// Alternatives that would have been accepted at `offset`, sorted
    pub expected: Vec<String>,
    /// Character found at `offset`, `None` at end of input
    pub found: Option<char>,
    /// Innermost labelled grammar rule that failed, when known
    pub rule: Option<String>,
}

impl ParseError {
    pub(crate) fn from_errors(source: &str, errors: Vec<Simple<char>>) -> Self {
        let Some(furthest) = errors.into_iter().max_by_key(|err| err.span().start) else {
            return Self::at(source, 0, Vec::new(), source.chars().next(), None);
        };

        let mut expected: Vec<String> = furthest
            .expected()
            .map(|item| match item {
                Some(c) => format!("{c:?}"),
                None => "end of input".to_string(),
            })
            .collect();
        expected.sort();
        expected.dedup();

        Self::at(
            source,
            furthest.span().start,
            expected,
            furthest.found().copied(),
            furthest.label().map(str::to_string),
        )
    }

    fn at(
        source: &str,
        offset: usize,
        expected: Vec<String>,
        found: Option<char>,
        rule: Option<String>,
    ) -> Self {
        let (line, column) = line_column(source, offset);
        Self {
            offset,
            line,
            column,
            expected,
            found,
            rule,
        }
    }
}

fn line_column(source: &str, offset: usize) -> (usize, usize) {
    source
        .chars()
        .take(offset)
        .fold((1, 1), |(line, column), c| match c {
            '\n' => (line + 1, 1),
            _ => (line, column + 1),
        })
}

fn describe_rule(rule: &Option<String>) -> String {
    rule.as_ref()
        .map(|rule| format!(" (in {rule})"))
        .unwrap_or_default()
}

fn describe_expected(expected: &[String]) -> String {
    match expected {
        [] => "something else".to_string(),
        [only] => only.clone(),
        _ => format!("one of {}", expected.join(", ")),
    }
}

fn describe_found(found: &Option<char>) -> String {
    match found {
        Some(c) => format!("{c:?}"),
        None => "end of input".to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_line_column() {
        assert_eq!(line_column("ab\ncd", 0), (1, 1));
        assert_eq!(line_column("ab\ncd", 2), (1, 3));
        assert_eq!(line_column("ab\ncd", 4), (2, 2));
    }

    #[test]
    fn test_display() {
        let err = ParseError {
            offset: 6,
            line: 1,
            column: 7,
            expected: vec!["'*'".to_string()],
            found: Some('\n'),
            rule: Some("bold".to_string()),
        };
        assert_eq!(
            err.to_string(),
            r"parse error at line 1, column 7 (in bold): expected '*', found '\n'"
        );
    }

    #[test]
    fn test_display_at_end_of_input() {
        let err = ParseError {
            offset: 3,
            line: 1,
            column: 4,
            expected: vec!["'*'".to_string(), "'\\\\'".to_string()],
            found: None,
            rule: None,
        };
        assert_eq!(
            err.to_string(),
            r"parse error at line 1, column 4: expected one of '*', '\\', found end of input"
        );
    }
}
