//! Testing utilities for parse-tree assertions
//!
//! Tests should take their Markdown from the curated files under `samples/`
//! (via [`Samples`]) and check the resulting tree with the fluent
//! [`assert_doc`] API rather than matching on enums by hand.
//!
//! ```rust,ignore
//! use mdhtml::markdown::parsing::parse;
//! use mdhtml::markdown::testing::{assert_doc, Samples};
//!
//! let doc = parse(&Samples::get("010-lists.md")?)?;
//!
//! assert_doc(&doc)
//!     .content_block_count(2)
//!     .content_block(0, |block| {
//!         block.assert_list().unordered().item_count(3);
//!     });
//! ```

mod samples;
mod testing_assertions;
mod testing_matchers;

pub use samples::Samples;
pub use testing_assertions::{
    assert_doc, BlockAssertion, DocumentAssertion, FlowedAssertion, HeadingAssertion,
    InlineAssertion, ListAssertion, ListItemAssertion, PreAssertion,
};
pub use testing_matchers::TextMatch;
