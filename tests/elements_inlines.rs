//! Inline constructs inside paragraphs

use mdhtml::markdown::parsing::parse;
use mdhtml::markdown::testing::{assert_doc, Samples};

#[test]
fn test_inlines_sample() {
    let doc = Samples::parse("040-inlines.md").unwrap();

    assert_doc(&doc).block_count(1).block(0, |block| {
        block
            .assert_paragraph()
            .line_count(3)
            .inline_count(11)
            .inline(0, |inline| {
                inline.text("Plain ");
            })
            .inline(1, |inline| {
                inline.bold("bold");
            })
            .inline(3, |inline| {
                inline.italic("italic");
            })
            .inline(5, |inline| {
                inline.code("a &lt; b");
            })
            .inline(6, |inline| {
                inline.text(" code. ");
            })
            .inline(7, |inline| {
                inline.autolink("https://rust-lang.org");
            })
            .inline(9, |inline| {
                inline
                    .link("link", "https://example.com")
                    .link_title(Some("Example"));
            })
            .inline(10, |inline| {
                inline.text(" escaped *stars* stay literal.");
            });
    });
}

#[test]
fn test_bold_wins_over_italic() {
    let doc = parse("**strong**\n").unwrap();
    assert_doc(&doc).block(0, |block| {
        block.assert_paragraph().inline_count(1).inline(0, |inline| {
            inline.bold("strong");
        });
    });
}

#[test]
fn test_space_between_adjacent_spans() {
    let doc = parse("**a** *b*\n").unwrap();
    assert_doc(&doc).block(0, |block| {
        block
            .assert_paragraph()
            .inline_count(3)
            .text("a b")
            .inline(1, |inline| {
                inline.text(" ");
            });
    });
}

#[test]
fn test_escaped_bracket_in_text() {
    let doc = parse("see \\[1\\]\n").unwrap();
    assert_doc(&doc).block(0, |block| {
        block.assert_paragraph().inline_count(1).text("see [1]");
    });
}

#[test]
fn test_link_title_with_spaces() {
    let doc = parse("[docs](https://docs.rs \"The docs\")\n").unwrap();
    assert_doc(&doc).block(0, |block| {
        block.assert_paragraph().inline(0, |inline| {
            inline
                .link("docs", "https://docs.rs")
                .link_title(Some("The docs"));
        });
    });
}
