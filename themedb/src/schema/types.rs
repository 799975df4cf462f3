use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Semantic type of a theme value. The closed set the validator understands.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TypeTag {
    Color,
    Int,
    Float,
    Bool,
    String,
    Path,
}

impl TypeTag {
    pub fn as_str(&self) -> &'static str {
        match self {
            TypeTag::Color => "color",
            TypeTag::Int => "int",
            TypeTag::Float => "float",
            TypeTag::Bool => "bool",
            TypeTag::String => "string",
            TypeTag::Path => "path",
        }
    }
}

impl std::fmt::Display for TypeTag {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A type contract for theme files: section name -> key name -> type tag.
///
/// A schema lives independently of any document: it may describe sections
/// and keys a given document does not have, and a document may carry keys
/// the schema says nothing about.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Schema {
    sections: BTreeMap<String, BTreeMap<String, TypeTag>>,
}

impl Schema {
    pub fn new() -> Self {
        Self::default()
    }

    /// Look up the declared type for a `(section, key)` pair.
    pub fn lookup(&self, section: &str, key: &str) -> Option<TypeTag> {
        self.sections.get(section).and_then(|s| s.get(key)).copied()
    }

    pub fn insert(&mut self, section: &str, key: &str, tag: TypeTag) {
        self.sections
            .entry(section.to_string())
            .or_default()
            .insert(key.to_string(), tag);
    }

    pub fn is_empty(&self) -> bool {
        self.sections.is_empty()
    }

    /// Iterate declared sections and their key types, sorted by name.
    pub fn sections(&self) -> impl Iterator<Item = (&str, &BTreeMap<String, TypeTag>)> {
        self.sections.iter().map(|(n, s)| (n.as_str(), s))
    }
}
