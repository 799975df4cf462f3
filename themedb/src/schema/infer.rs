// Type inference - bootstrap a schema from a reference theme

use super::types::{Schema, TypeTag};
use crate::document::ThemeDocument;

/// Guess the semantic type of a raw value. First match wins, in this
/// order: color, float, int, bool, path, string. Note that `1` and `0`
/// land on `int` before the bool check ever sees them.
pub fn infer_type(value: &str) -> TypeTag {
    let value = value.trim();

    if is_color_list(value) {
        return TypeTag::Color;
    }
    if value.contains('.') && value.parse::<f64>().is_ok() {
        return TypeTag::Float;
    }
    if value.parse::<i64>().is_ok() {
        return TypeTag::Int;
    }
    if matches!(
        value.to_lowercase().as_str(),
        "true" | "false" | "yes" | "no" | "1" | "0"
    ) {
        return TypeTag::Bool;
    }
    if value.starts_with("res/") || value.contains('/') || value.contains('\\') {
        return TypeTag::Path;
    }
    TypeTag::String
}

/// 3 or 4 comma-separated unsigned integers, whitespace allowed around
/// the commas.
fn is_color_list(value: &str) -> bool {
    let parts: Vec<&str> = value.split(',').collect();
    if parts.len() != 3 && parts.len() != 4 {
        return false;
    }
    parts.iter().all(|p| {
        let p = p.trim();
        !p.is_empty() && p.bytes().all(|b| b.is_ascii_digit())
    })
}

/// Infer a type for every entry of every section of a reference document.
pub fn generate_schema(doc: &ThemeDocument) -> Schema {
    let mut schema = Schema::new();
    for (section, body) in doc.sections() {
        for (key, value) in body.entries() {
            schema.insert(section, key, infer_type(value));
        }
    }
    schema
}
