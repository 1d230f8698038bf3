//! Inter-line whitespace normalization for flowed blocks (paragraphs, quotes)
//!
//! Source lines of a flowed block are rendered on one output line. Text on
//! either side of a break is trimmed at the break and exactly one space is put
//! back, unless both sides of the break are markup:
//!
//! - a line ending in plain text has its trailing whitespace trimmed and one
//!   space appended;
//! - a continuation line has its leading whitespace trimmed; if the previous
//!   content line ended in markup (link, code, emphasis), the space goes in
//!   front of its leading text instead;
//! - empty lines (a bare `>` in a quote) are skipped when deciding what came
//!   before, and the last line holding content only has its trailing
//!   whitespace trimmed.
//!
//! Leading whitespace of the first content line is left alone. The
//! transformation consumes the raw lines and builds new ones; the grammar runs
//! it before the block node exists, so the tree is never touched after
//! construction.

use crate::markdown::ast::{Inline, Line};

/// Join raw inline lines into the lines stored in a paragraph or quote
pub fn join_lines(lines: Vec<Vec<Inline>>) -> Vec<Line> {
    let last_content = lines.iter().rposition(|inlines| !inlines.is_empty());
    let mut seen_content = false;
    let mut previous_ends_in_markup = false;

    lines
        .into_iter()
        .enumerate()
        .map(|(index, inlines)| {
            if inlines.is_empty() {
                return Line::new(inlines);
            }
            let lead = match (seen_content, previous_ends_in_markup) {
                (false, _) => Lead::Keep,
                (true, false) => Lead::Trim,
                (true, true) => Lead::Pad,
            };
            let is_last = last_content.map_or(true, |last| index >= last);
            seen_content = true;
            previous_ends_in_markup = inlines.last().is_some_and(|inline| !inline.is_text());
            Line::new(rejoin(inlines, lead, is_last))
        })
        .collect()
}

/// What happens to the leading text of a line
#[derive(Clone, Copy)]
enum Lead {
    Keep,
    Trim,
    Pad,
}

fn rejoin(inlines: Vec<Inline>, lead: Lead, is_last_line: bool) -> Vec<Inline> {
    let last = inlines.len().saturating_sub(1);

    inlines
        .into_iter()
        .enumerate()
        .filter_map(|(index, inline)| match inline {
            Inline::SimpleText(text) => {
                let text = match (index, lead) {
                    (0, Lead::Trim) => text.trim_start().to_string(),
                    (0, Lead::Pad) => format!(" {}", text.trim_start()),
                    _ => text,
                };
                let text = match (index == last, is_last_line) {
                    (true, true) => text.trim_end().to_string(),
                    (true, false) => format!("{} ", text.trim_end()),
                    (false, _) => text,
                };
                // a blank run before markup vanishes once its line is trimmed
                (!text.is_empty()).then_some(Inline::SimpleText(text))
            }
            other => Some(other),
        })
        .collect()
}
