//! Per-node attributes and rendering flags

use serde::ser::{Serialize, SerializeMap, Serializer};

/// Rendering flags attached to a node
///
/// `indentation = false` keeps the renderer from inserting linebreaks or
/// indentation inside the element (code blocks). `only_outer_linebreaks`
/// restricts the renderer to a single linebreak after the opening tag so that
/// flowed text stays on one line (paragraphs, quotes).
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RenderOptions {
    pub indentation: bool,
    pub only_outer_linebreaks: bool,
}

impl RenderOptions {
    pub fn flowed() -> Self {
        Self {
            only_outer_linebreaks: true,
            ..Self::default()
        }
    }

    pub fn verbatim() -> Self {
        Self {
            indentation: false,
            ..Self::default()
        }
    }
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            indentation: true,
            only_outer_linebreaks: false,
        }
    }
}

/// Element attributes, kept in insertion order
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Attributes(Vec<(String, String)>);

impl Attributes {
    pub fn new() -> Self {
        Self(Vec::new())
    }

    /// Set an attribute. Re-setting a name keeps its original position.
    pub fn insert(&mut self, name: impl Into<String>, value: impl Into<String>) {
        let name = name.into();
        let value = value.into();
        match self.0.iter_mut().find(|(existing, _)| *existing == name) {
            Some(slot) => slot.1 = value,
            None => self.0.push((name, value)),
        }
    }

    pub fn with(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.insert(name, value);
        self
    }

    pub fn get(&self, name: &str) -> Option<&str> {
        self.0
            .iter()
            .find(|(existing, _)| existing == name)
            .map(|(_, value)| value.as_str())
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.0
            .iter()
            .map(|(name, value)| (name.as_str(), value.as_str()))
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl Serialize for Attributes {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.0.len()))?;
        for (name, value) in &self.0 {
            map.serialize_entry(name, value)?;
        }
        map.end()
    }
}
