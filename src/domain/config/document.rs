//! In-memory INI document
//!
//! Comment lines are kept as written (marker included) and belong to the
//! header or key that follows them.

use std::collections::HashMap;

/// One `[section]` with its entries in insertion order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Section {
    name: String,
    entries: Vec<(String, String)>,
    comments: Vec<String>,
    key_comments: HashMap<String, Vec<String>>,
}

impl Section {
    /// Create an empty section
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Self::default()
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Entries as `(key, value)` pairs
    pub fn entries(&self) -> &[(String, String)] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Look up a key
    pub fn get(&self, key: &str) -> Option<&str> {
        self.entries
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }

    /// Insert or update a key. An existing key keeps its position.
    pub fn set(&mut self, key: &str, value: &str) {
        match self.entries.iter_mut().find(|(k, _)| k == key) {
            Some((_, v)) => {
                v.clear();
                v.push_str(value);
            }
            None => self.entries.push((key.to_string(), value.to_string())),
        }
    }

    /// Remove a key and its comments, returning the value
    pub fn remove(&mut self, key: &str) -> Option<String> {
        let pos = self.entries.iter().position(|(k, _)| k == key)?;
        self.key_comments.remove(key);
        Some(self.entries.remove(pos).1)
    }

    /// Drop all entries. Comments above the header stay.
    pub fn clear(&mut self) {
        self.entries.clear();
        self.key_comments.clear();
    }

    /// Comment lines above the header
    pub fn comments(&self) -> &[String] {
        &self.comments
    }

    pub fn add_comments(&mut self, lines: impl IntoIterator<Item = String>) {
        self.comments.extend(lines);
    }

    /// Comment lines above a key
    pub fn key_comments(&self, key: &str) -> &[String] {
        self.key_comments.get(key).map_or(&[], Vec::as_slice)
    }

    /// Attach comment lines to an existing key
    pub fn add_key_comments(&mut self, key: &str, lines: impl IntoIterator<Item = String>) {
        if self.get(key).is_none() {
            return;
        }
        let mut lines = lines.into_iter().peekable();
        if lines.peek().is_some() {
            self.key_comments
                .entry(key.to_string())
                .or_default()
                .extend(lines);
        }
    }
}

/// Ordered mapping of section name to key/value entries.
///
/// Keys are unique within a section. The unnamed section `""` holds
/// entries that appear before the first header.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ConfigDocument {
    sections: Vec<Section>,
    trailing_comments: Vec<String>,
}

impl ConfigDocument {
    /// Create an empty document
    pub fn new() -> Self {
        Self::default()
    }

    pub fn sections(&self) -> &[Section] {
        &self.sections
    }

    pub fn section(&self, name: &str) -> Option<&Section> {
        self.sections.iter().find(|s| s.name == name)
    }

    pub fn section_mut(&mut self, name: &str) -> Option<&mut Section> {
        self.sections.iter_mut().find(|s| s.name == name)
    }

    /// Get the named section, appending it if absent
    pub fn ensure_section(&mut self, name: &str) -> &mut Section {
        let pos = match self.sections.iter().position(|s| s.name == name) {
            Some(pos) => pos,
            None => {
                self.sections.push(Section::new(name));
                self.sections.len() - 1
            }
        };
        &mut self.sections[pos]
    }

    pub fn get(&self, section: &str, key: &str) -> Option<&str> {
        self.section(section).and_then(|s| s.get(key))
    }

    /// Upsert a value, creating the section when needed
    pub fn set(&mut self, section: &str, key: &str, value: &str) {
        self.ensure_section(section).set(key, value);
    }

    /// Remove one key. The section header stays even when it becomes empty.
    pub fn remove_key(&mut self, section: &str, key: &str) -> Option<String> {
        self.section_mut(section).and_then(|s| s.remove(key))
    }

    /// Remove a section and everything in it
    pub fn remove_section(&mut self, name: &str) -> Option<Section> {
        let pos = self.sections.iter().position(|s| s.name == name)?;
        Some(self.sections.remove(pos))
    }

    pub fn is_empty(&self) -> bool {
        self.sections.is_empty()
    }

    /// Comment lines after the last entry
    pub fn trailing_comments(&self) -> &[String] {
        &self.trailing_comments
    }

    pub fn set_trailing_comments(&mut self, lines: Vec<String>) {
        self.trailing_comments = lines;
    }

    /// Drop all sections and comments
    pub fn reset(&mut self) {
        self.sections.clear();
        self.trailing_comments.clear();
    }
}
