//! Indented code blocks and inline code

use mdhtml::markdown::parsing::parse;
use mdhtml::markdown::testing::{assert_doc, Samples};
use rstest::rstest;

#[test]
fn test_code_sample() {
    let doc = Samples::parse("030-code.md").unwrap();

    assert_doc(&doc)
        .block_count(4)
        .block(0, |block| {
            block.assert_paragraph().text("Some code:");
        })
        .block(1, |block| {
            block.assert_pre().line_count(3).code(
                "fn main() {\n    println!(\"a &lt; b &amp;&amp; c &gt; d\");\n}",
            );
        })
        .block(2, |block| block.assert_empty_line())
        .block(3, |block| {
            block.assert_pre().code("tab indented");
        });
}

#[rstest]
#[case("    a < b\n", "a &lt; b")]
#[case("\tx & y\n", "x &amp; y")]
#[case("    one\n    two", "one\ntwo")]
#[case("      deeper\n", "  deeper")]
fn test_code_block_content(#[case] source: &str, #[case] code: &str) {
    let doc = parse(source).unwrap();
    assert_doc(&doc).block_count(1).block(0, |block| {
        block.assert_pre().code(code);
    });
}

#[rstest]
#[case("`<tag>`\n", "&lt;tag&gt;")]
#[case("`a && b`\n", "a &amp;&amp; b")]
#[case("`**not bold**`\n", "**not bold**")]
fn test_inline_code_is_escaped(#[case] source: &str, #[case] code: &str) {
    let doc = parse(source).unwrap();
    assert_doc(&doc).block(0, |block| {
        block.assert_paragraph().inline(0, |inline| {
            inline.code(code);
        });
    });
}

#[test]
fn test_code_block_after_paragraph() {
    let doc = parse("text\n    code\n").unwrap();
    assert_doc(&doc)
        .block_count(2)
        .block(0, |block| {
            block.assert_paragraph().text("text");
        })
        .block(1, |block| {
            block.assert_pre().code("code");
        });
}
