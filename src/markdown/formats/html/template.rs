//! Page templates
//!
//! A template is plain text with `$name` or `${name}` placeholders. `$$`
//! writes a literal `$`. Substituting a name that was not supplied, or a `$`
//! that starts no valid placeholder, is an error.

use once_cell::sync::Lazy;
use regex::Regex;
use thiserror::Error;

static PLACEHOLDER: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r"\$(?:(?P<escaped>\$)|(?P<named>[_A-Za-z][_A-Za-z0-9]*)|\{(?P<braced>[_A-Za-z][_A-Za-z0-9]*)\}|(?P<invalid>))",
    )
    .unwrap()
});

const SKELETON: &str = include_str!("../../../../templates/skeleton.html");

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TemplateError {
    #[error("template references unknown placeholder '{0}'")]
    UnknownPlaceholder(String),
    #[error("invalid placeholder in template at line {line}, column {column}")]
    InvalidPlaceholder { line: usize, column: usize },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Template {
    text: String,
}

impl Template {
    pub fn new(text: impl Into<String>) -> Self {
        Self { text: text.into() }
    }

    /// The built-in HTML page
    pub fn skeleton() -> Self {
        Self::new(SKELETON)
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn substitute(&self, values: &[(&str, &str)]) -> Result<String, TemplateError> {
        let mut output = String::with_capacity(self.text.len());
        let mut last = 0;

        for caps in PLACEHOLDER.captures_iter(&self.text) {
            let Some(whole) = caps.get(0) else {
                continue;
            };
            output.push_str(&self.text[last..whole.start()]);
            last = whole.end();

            if caps.name("escaped").is_some() {
                output.push('$');
                continue;
            }
            let name = caps.name("named").or_else(|| caps.name("braced"));
            let Some(name) = name.map(|m| m.as_str()) else {
                let (line, column) = position(&self.text, whole.start());
                return Err(TemplateError::InvalidPlaceholder { line, column });
            };
            let value = values
                .iter()
                .find(|(key, _)| *key == name)
                .map(|(_, value)| *value)
                .ok_or_else(|| TemplateError::UnknownPlaceholder(name.to_string()))?;
            output.push_str(value);
        }

        output.push_str(&self.text[last..]);
        Ok(output)
    }
}

impl Default for Template {
    fn default() -> Self {
        Self::skeleton()
    }
}

fn position(text: &str, offset: usize) -> (usize, usize) {
    let before = &text[..offset];
    let line = before.matches('\n').count() + 1;
    let column = before.rsplit('\n').next().map_or(0, |l| l.chars().count()) + 1;
    (line, column)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_named_and_braced() {
        let template = Template::new("<t>$title</t>${content}!");
        assert_eq!(
            template
                .substitute(&[("title", "T"), ("content", "C")])
                .unwrap(),
            "<t>T</t>C!"
        );
    }

    #[test]
    fn test_dollar_escape() {
        let template = Template::new("costs $$5 $title");
        assert_eq!(
            template.substitute(&[("title", "x")]).unwrap(),
            "costs $5 x"
        );
    }

    #[test]
    fn test_values_are_not_rescanned() {
        let template = Template::new("$content");
        assert_eq!(
            template.substitute(&[("content", "$title")]).unwrap(),
            "$title"
        );
    }

    #[test]
    fn test_unknown_placeholder() {
        let template = Template::new("$author");
        assert_eq!(
            template.substitute(&[("title", "x")]),
            Err(TemplateError::UnknownPlaceholder("author".to_string()))
        );
    }

    #[test]
    fn test_invalid_placeholder_position() {
        let template = Template::new("ok\n  $ 5");
        assert_eq!(
            template.substitute(&[]),
            Err(TemplateError::InvalidPlaceholder { line: 2, column: 3 })
        );
    }

    #[test]
    fn test_skeleton_has_both_placeholders() {
        let out = Template::skeleton()
            .substitute(&[("title", "Hi"), ("content", "BODY")])
            .unwrap();
        assert!(out.contains("<title>Hi</title>"));
        assert!(out.contains("BODY"));
    }
}
