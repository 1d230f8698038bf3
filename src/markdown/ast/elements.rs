//! Element definitions for the markdown parse tree

pub mod block;
pub mod code;
pub mod document;
pub mod heading;
pub mod inline;
pub mod list;
pub mod paragraph;

pub use block::Block;
pub use code::{CodeBlock, PreBlock};
pub use document::Document;
pub use heading::Heading;
pub use inline::{Inline, Link};
pub use list::{List, ListItem, ListKind};
pub use paragraph::{Line, Paragraph, Quote};
