//! Grammar tests covering the interplay between block rules

use super::parse;
use crate::markdown::ast::{Block, Inline, ListKind};

fn node_types(source: &str) -> Vec<&'static str> {
    use crate::markdown::ast::AstNode;
    parse(source)
        .unwrap()
        .blocks
        .iter()
        .map(|block| block.node_type())
        .collect()
}

#[test]
fn test_empty_input_is_an_empty_document() {
    assert!(parse("").unwrap().blocks.is_empty());
}

#[test]
fn test_block_sequence() {
    let source = "# Title\n\nSome text\n\n* a\n* b\n\n1. one\n\n> quoted\n\n    code\n";
    assert_eq!(
        node_types(source),
        vec![
            "Heading",
            "Paragraph",
            "UnorderedList",
            "OrderedList",
            "Quote",
            "EmptyLine",
            "PreBlock"
        ]
    );
}

#[test]
fn test_list_does_not_need_a_leading_empty_line() {
    let doc = parse("* one\n* two\n").unwrap();
    assert_eq!(doc.blocks.len(), 1);
    assert!(matches!(&doc.blocks[0], Block::List(list) if list.kind == ListKind::Unordered));
}

#[test]
fn test_paragraph_ends_at_list() {
    assert_eq!(
        node_types("intro\n* item\n"),
        vec!["Paragraph", "UnorderedList"]
    );
}

#[test]
fn test_paragraph_ends_at_code_block() {
    assert_eq!(node_types("intro\n    code\n"), vec!["Paragraph", "PreBlock"]);
}

#[test]
fn test_number_prefixed_text_after_paragraph_line_continues_paragraph() {
    assert_eq!(node_types("intro\n1. not a list\n"), vec!["Paragraph"]);
}

#[test]
fn test_crlf_line_endings() {
    let doc = parse("# T\r\n\r\nline one\r\nline two\r\n").unwrap();
    let Block::Paragraph(p) = &doc.blocks[1] else {
        panic!("expected paragraph, got {:?}", doc.blocks[1]);
    };
    assert_eq!(p.text(), "line one line two");
}

#[test]
fn test_last_line_without_newline() {
    let doc = parse("text **bold**").unwrap();
    let Block::Paragraph(p) = &doc.blocks[0] else {
        panic!("expected paragraph");
    };
    assert_eq!(
        p.inlines().cloned().collect::<Vec<_>>(),
        vec![
            Inline::SimpleText("text ".to_string()),
            Inline::Bold("bold".to_string())
        ]
    );
}

#[test]
fn test_trailing_whitespace_after_markup() {
    assert!(parse("**bold**  \nmore\n").is_ok());
}

#[test]
fn test_failure_reports_furthest_position() {
    let err = parse("# Title\n\n**bold\n").unwrap_err();
    assert_eq!(err.line, 3);
    assert_eq!(err.column, 7);
    assert_eq!(err.found, Some('\n'));
}

#[test]
fn test_unparsable_sentinel_fails() {
    assert!(parse("#hashtag\n").is_err());
    assert!(parse("[link](\n").is_err());
    assert!(parse("####### seven\n").is_err());
}
