//! HTML block builder
//!
//! Renders normalized [`Element`] records into indented HTML. Only the
//! outermost level (nesting 1) is laid out over several lines; anything
//! deeper is written inline inside its parent's line.
//!
//! ```text
//!     <ul>                    nesting 1, children on their own lines
//!         <li><b>x</b> y</li> nesting 2, inline
//!     </ul>
//! ```

use crate::markdown::ast::{Attributes, RenderOptions};
use crate::markdown::building::Element;

/// One indentation step
pub const TAB_SEP: &str = "    ";

/// Tag of plain text leaves, written without a wrapping element
pub const TEXT_TAG: &str = "text";

/// Render one top-level element
pub fn build_element(element: &Element) -> String {
    build_block(
        &element.tag,
        &element.children,
        element.text.as_deref(),
        &element.attributes,
        &element.options,
        1,
    )
}

pub fn build_block(
    tag: &str,
    children: &[Element],
    text: Option<&str>,
    attributes: &Attributes,
    options: &RenderOptions,
    nesting: usize,
) -> String {
    let mut content = format!(
        "{}<{}{}>",
        TAB_SEP.repeat(nesting),
        tag,
        build_attributes(attributes)
    );
    if children.is_empty() {
        if let Some(text) = text {
            content.push_str(text);
        }
    }

    let mut broke_line = false;
    for child in children {
        let line_break = nesting == 1
            && options.indentation
            && (!options.only_outer_linebreaks || !broke_line);
        if line_break {
            content.push('\n');
            broke_line = true;
        }

        match child.text.as_deref() {
            Some(text) if child.children.is_empty() => {
                if line_break {
                    content.push_str(&TAB_SEP.repeat(nesting + 1));
                }
                content.push_str(&build_item(&child.tag, text, &child.attributes));
            }
            _ => content.push_str(&build_block(
                &child.tag,
                &child.children,
                child.text.as_deref(),
                &child.attributes,
                &child.options,
                nesting + 1,
            )),
        }
    }

    if nesting == 1 && !children.is_empty() && options.indentation {
        content.push('\n');
        content.push_str(&TAB_SEP.repeat(nesting));
    }
    content.push_str(&format!("</{tag}>"));

    tracing::trace!(tag, nesting, children = children.len(), "built block");
    content
}

/// Render a leaf element
pub fn build_item(tag: &str, text: &str, attributes: &Attributes) -> String {
    if tag == TEXT_TAG {
        text.to_string()
    } else {
        format!("<{tag}{}>{text}</{tag}>", build_attributes(attributes))
    }
}

pub fn build_attributes(attributes: &Attributes) -> String {
    attributes
        .iter()
        .map(|(name, value)| format!(" {name}=\"{}\"", value.replace('"', "&quot;")))
        .collect()
}
