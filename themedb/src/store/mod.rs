// Theme directory store - resolves theme names to files under one root

use crate::document::ThemeDocument;
use crate::error::Result;
use std::path::{Path, PathBuf};

/// A directory of `*.ini` theme files. The root directory is injected by
/// the caller; nothing is derived from the install location.
pub struct ThemeStore {
    root: PathBuf,
}

impl ThemeStore {
    /// Create a store over the given directory. No filesystem access
    /// happens until a theme is listed or loaded.
    pub fn new(root: impl Into<PathBuf>) -> Self {
        ThemeStore { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Resolve a theme name to its path, appending `.ini` when the name
    /// does not already carry it.
    pub fn theme_path(&self, name: &str) -> PathBuf {
        if name.ends_with(".ini") {
            self.root.join(name)
        } else {
            self.root.join(format!("{name}.ini"))
        }
    }

    /// Sorted, de-duplicated names of the themes in the store directory.
    /// A missing directory is reported as a warning and yields an empty
    /// list rather than an error.
    pub fn list_themes(&self) -> Vec<String> {
        if !self.root.is_dir() {
            log::warn!("Theme directory not found: '{}'", self.root.display());
            return Vec::new();
        }

        let pattern = format!("{}/*.ini", self.root.display());
        let paths = match glob::glob(&pattern) {
            Ok(paths) => paths,
            Err(e) => {
                log::warn!("Bad theme glob pattern '{pattern}': {e}");
                return Vec::new();
            }
        };

        let mut names: Vec<String> = paths
            .filter_map(|r| r.ok())
            .filter(|p| p.is_file())
            .filter_map(|p| p.file_stem().map(|s| s.to_string_lossy().into_owned()))
            .collect();
        names.sort();
        names.dedup();
        names
    }

    /// Load a theme by name. A theme that does not exist yet loads as an
    /// empty document bound to its would-be path.
    pub fn load(&self, name: &str) -> Result<ThemeDocument> {
        let path = self.theme_path(name);
        let doc = ThemeDocument::load(&path)?;
        log::info!("Theme from '{}' has been loaded", path.display());
        Ok(doc)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_list_themes_sorted_unique() {
        let tmp = TempDir::new().unwrap();
        std::fs::write(tmp.path().join("zebra.ini"), "[S]\nk = 1\n").unwrap();
        std::fs::write(tmp.path().join("dark.ini"), "[S]\nk = 1\n").unwrap();
        std::fs::write(tmp.path().join("notes.txt"), "ignored").unwrap();

        let store = ThemeStore::new(tmp.path());
        assert_eq!(store.list_themes(), ["dark", "zebra"]);
    }

    #[test]
    fn test_list_themes_missing_directory() {
        let store = ThemeStore::new("/definitely/not/here");
        assert!(store.list_themes().is_empty());
    }

    #[test]
    fn test_theme_path_appends_extension() {
        let store = ThemeStore::new("/themes");
        assert_eq!(store.theme_path("dark"), PathBuf::from("/themes/dark.ini"));
        assert_eq!(store.theme_path("dark.ini"), PathBuf::from("/themes/dark.ini"));
    }

    #[test]
    fn test_load_missing_theme_is_empty() {
        let tmp = TempDir::new().unwrap();
        let store = ThemeStore::new(tmp.path());
        let doc = store.load("brand-new").unwrap();
        assert!(doc.is_empty());
        assert_eq!(doc.path(), store.theme_path("brand-new"));
    }

    #[test]
    fn test_load_existing_theme() {
        let tmp = TempDir::new().unwrap();
        std::fs::write(tmp.path().join("dark.ini"), "[Colors]\nbg = 0, 0, 0\n").unwrap();
        let store = ThemeStore::new(tmp.path());
        let doc = store.load("dark").unwrap();
        assert_eq!(doc.value("Colors", "bg"), Some("0, 0, 0"));
    }
}
