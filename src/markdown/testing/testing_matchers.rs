//! Text matching utilities for tree assertions

/// Text matching strategies for assertions
#[derive(Debug, Clone)]
pub enum TextMatch {
    Exact(String),
    StartsWith(String),
    Contains(String),
}

impl TextMatch {
    /// Assert that the actual text matches this pattern
    pub fn assert(&self, actual: &str, context: &str) {
        match self {
            TextMatch::Exact(expected) => {
                assert_eq!(
                    actual, expected,
                    "{context}: Expected text to be '{expected}', but got '{actual}'"
                );
            }
            TextMatch::StartsWith(prefix) => {
                assert!(
                    actual.starts_with(prefix.as_str()),
                    "{context}: Expected text to start with '{prefix}', but got '{actual}'"
                );
            }
            TextMatch::Contains(substring) => {
                assert!(
                    actual.contains(substring.as_str()),
                    "{context}: Expected text to contain '{substring}', but got '{actual}'"
                );
            }
        }
    }
}
