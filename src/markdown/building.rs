//! Tree normalization: parse tree → element records

pub mod extraction;

pub use extraction::{extract, Element, TagRenames};
