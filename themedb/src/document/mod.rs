// Theme document model - sections of key/value entries with preserved comments

use crate::error::{Result, ThemeDbError};
use indexmap::IndexMap;
use std::path::{Path, PathBuf};

/// One named section of a theme file: an ordered key -> value map plus the
/// comment/blank/unparseable lines that were found inside the section,
/// preserved verbatim.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Section {
    entries: IndexMap<String, String>,
    extras: Vec<String>,
}

impl Section {
    /// Iterate the `key = value` entries in order.
    pub fn entries(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    /// Preserved non-assignment lines (comments, blanks, malformed content).
    pub fn extras(&self) -> &[String] {
        &self.extras
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.entries.get(key).map(String::as_str)
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.entries.contains_key(key)
    }

    /// True when the section would serialize to nothing: no entries and no
    /// extras with visible content.
    pub fn is_blank(&self) -> bool {
        self.entries.is_empty() && self.extras.iter().all(|l| l.trim().is_empty())
    }
}

/// An in-memory theme file: an ordered map of sections tied to the path it
/// was loaded from (or will be saved to).
///
/// In-memory order is insertion order; saving re-derives its own normalized
/// ordering (see [`crate::persist`]), so the two may diverge between saves.
#[derive(Debug, Clone)]
pub struct ThemeDocument {
    path: PathBuf,
    sections: IndexMap<String, Section>,
}

impl ThemeDocument {
    /// Create an empty document to be authored from scratch.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        ThemeDocument {
            path: path.into(),
            sections: IndexMap::new(),
        }
    }

    /// Load a theme file from disk. A missing file is not an error: it
    /// yields an empty document waiting to be authored. Callers that need
    /// to distinguish "empty" from "missing" must check existence first.
    pub fn load(path: impl Into<PathBuf>) -> Result<Self> {
        let path = path.into();
        match std::fs::read_to_string(&path) {
            Ok(text) => {
                let mut doc = Self::parse(&text);
                doc.path = path;
                Ok(doc)
            }
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(Self::new(path)),
            Err(e) => Err(e.into()),
        }
    }

    /// Parse theme text into a document with an empty path.
    ///
    /// `[Name]` lines open (or re-open) a section; the header itself is not
    /// stored. Inside a section, lines containing `=` become entries keyed
    /// on the trimmed text before the first `=`; a duplicate key later in
    /// the file updates the first occurrence's value in place. Everything
    /// else inside a section (comments, blanks, content with no `=`) is
    /// preserved verbatim. Lines before the first header are dropped.
    pub fn parse(text: &str) -> Self {
        let mut doc = Self::new(PathBuf::new());
        let mut current: Option<String> = None;

        for line in text.lines() {
            let trimmed = line.trim();

            if trimmed.len() >= 2 && trimmed.starts_with('[') && trimmed.ends_with(']') {
                let name = &trimmed[1..trimmed.len() - 1];
                doc.sections.entry(name.to_string()).or_default();
                current = Some(name.to_string());
                continue;
            }

            let Some(section_name) = &current else {
                continue;
            };
            let section = doc.sections.entry(section_name.clone()).or_default();

            if trimmed.is_empty() || trimmed.starts_with('#') || trimmed.starts_with(';') {
                section.extras.push(line.to_string());
            } else if let Some(eq) = line.find('=') {
                let key = line[..eq].trim().to_string();
                let value = line[eq + 1..].trim().to_string();
                section.entries.insert(key, value);
            } else {
                // Malformed non-comment content is carried opaquely.
                section.extras.push(line.to_string());
            }
        }

        doc
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn set_path(&mut self, path: impl Into<PathBuf>) {
        self.path = path.into();
    }

    /// Iterate sections in their in-memory order.
    pub fn sections(&self) -> impl Iterator<Item = (&str, &Section)> {
        self.sections.iter().map(|(n, s)| (n.as_str(), s))
    }

    pub fn section(&self, name: &str) -> Option<&Section> {
        self.sections.get(name)
    }

    pub fn contains_section(&self, name: &str) -> bool {
        self.sections.contains_key(name)
    }

    pub fn value(&self, section: &str, key: &str) -> Option<&str> {
        self.sections.get(section).and_then(|s| s.get(key))
    }

    pub fn is_empty(&self) -> bool {
        self.sections.is_empty()
    }

    /// Add a section. No-op if it already exists.
    pub fn add_section(&mut self, name: &str) {
        self.sections.entry(name.to_string()).or_default();
    }

    /// Remove a section and everything in it. No-op if absent.
    pub fn remove_section(&mut self, name: &str) {
        self.sections.shift_remove(name);
    }

    /// Insert or update a key. Creates the section if missing. An existing
    /// key keeps its position; a new key is appended.
    pub fn add_key(&mut self, section: &str, key: &str, value: &str) -> Result<()> {
        if section.is_empty() {
            return Err(ThemeDbError::InvalidSection(
                "section name may not be empty".into(),
            ));
        }
        let key = key.trim();
        if key.is_empty() {
            return Err(ThemeDbError::InvalidKey("key may not be empty".into()));
        }
        if key.contains('=') {
            return Err(ThemeDbError::InvalidKey(format!(
                "key '{key}' may not contain '='"
            )));
        }

        self.sections
            .entry(section.to_string())
            .or_default()
            .entries
            .insert(key.to_string(), value.trim().to_string());
        Ok(())
    }

    /// Remove a key from a section. No-op when the section or key is
    /// absent; preserved comment lines are never touched.
    pub fn remove_key(&mut self, section: &str, key: &str) {
        if let Some(s) = self.sections.get_mut(section) {
            s.entries.shift_remove(key);
        }
    }

    /// Rename a section. Fails when `old` is absent or `new` is taken;
    /// neither section is modified on failure.
    pub fn rename_section(&mut self, old: &str, new: &str) -> Result<()> {
        if !self.sections.contains_key(old) {
            return Err(ThemeDbError::SectionNotFound(old.to_string()));
        }
        if self.sections.contains_key(new) {
            return Err(ThemeDbError::NameConflict(format!(
                "section '{new}' already exists"
            )));
        }
        if let Some(section) = self.sections.shift_remove(old) {
            self.sections.insert(new.to_string(), section);
        }
        Ok(())
    }

    /// Rename a key within a section, keeping its position and value text.
    /// Fails when the section or `old` is absent, either name is empty,
    /// `new` contains `=`, or `new` is already present in the section.
    pub fn rename_key(&mut self, section: &str, old: &str, new: &str) -> Result<()> {
        if old.is_empty() || new.is_empty() {
            return Err(ThemeDbError::InvalidKey("key may not be empty".into()));
        }
        if new.contains('=') {
            return Err(ThemeDbError::InvalidKey(format!(
                "key '{new}' may not contain '='"
            )));
        }
        let s = self
            .sections
            .get_mut(section)
            .ok_or_else(|| ThemeDbError::SectionNotFound(section.to_string()))?;
        if s.entries.contains_key(new) {
            return Err(ThemeDbError::NameConflict(format!(
                "key '{new}' already exists in section '{section}'"
            )));
        }
        let Some(idx) = s.entries.get_index_of(old) else {
            return Err(ThemeDbError::KeyNotFound {
                section: section.to_string(),
                key: old.to_string(),
            });
        };
        if let Some(value) = s.entries.shift_remove(old) {
            s.entries.shift_insert(idx, new.to_string(), value);
        }
        Ok(())
    }

    /// Move a key from one section to another, overwriting any key of the
    /// same name already present in the target (last write wins). Fails
    /// when either section is absent or the key is missing from `source`.
    pub fn move_key(&mut self, source: &str, key: &str, target: &str) -> Result<()> {
        if !self.sections.contains_key(source) {
            return Err(ThemeDbError::SectionNotFound(source.to_string()));
        }
        if !self.sections.contains_key(target) {
            return Err(ThemeDbError::SectionNotFound(target.to_string()));
        }
        let value = self
            .sections
            .get_mut(source)
            .and_then(|s| s.entries.shift_remove(key))
            .ok_or_else(|| ThemeDbError::KeyNotFound {
                section: source.to_string(),
                key: key.to_string(),
            })?;
        if let Some(t) = self.sections.get_mut(target) {
            t.entries.insert(key.to_string(), value);
        }
        Ok(())
    }
}
