//! # mdhtml
//!
//! Converts a small, fixed Markdown dialect into indented HTML.
//!
//! The pipeline is `parse` (ordered-choice grammar) → `extract` (element
//! records) → `render` (HTML builder + page template). Anything outside the
//! grammar is a hard parse failure.
//!
//! ## Testing
//!
//! Integration tests use the fluent assertions in [`markdown::testing`] and the
//! sample documents under `samples/`.

pub mod markdown;

pub use markdown::formats::{render, FormatError, OutputFormat};
pub use markdown::parsing::{parse, ParseError};
pub use markdown::pipeline::{convert, ConvertError, Converter};
