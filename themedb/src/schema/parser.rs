use super::types::Schema;
use crate::error::Result;
use std::path::Path;

/// Parse a schema.json file into a Schema.
pub fn parse_schema(path: &Path) -> Result<Schema> {
    let content = std::fs::read_to_string(path)?;
    parse_schema_str(&content)
}

/// Parse a schema JSON string into a Schema.
pub fn parse_schema_str(content: &str) -> Result<Schema> {
    let schema: Schema = serde_json::from_str(content)?;
    Ok(schema)
}

/// Write a Schema out as pretty-printed JSON.
pub fn write_schema(path: &Path, schema: &Schema) -> Result<()> {
    let json = serde_json::to_string_pretty(schema)?;
    std::fs::write(path, json)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::schema::TypeTag;
    use tempfile::TempDir;

    #[test]
    fn test_parse_schema_str() {
        let schema = parse_schema_str(
            r#"{ "Colors": { "bg": "color", "opacity": "float" }, "Meta": { "name": "string" } }"#,
        )
        .unwrap();
        assert_eq!(schema.lookup("Colors", "bg"), Some(TypeTag::Color));
        assert_eq!(schema.lookup("Colors", "opacity"), Some(TypeTag::Float));
        assert_eq!(schema.lookup("Meta", "name"), Some(TypeTag::String));
    }

    #[test]
    fn test_parse_schema_rejects_unknown_tag() {
        assert!(parse_schema_str(r#"{ "Colors": { "bg": "rainbow" } }"#).is_err());
    }

    #[test]
    fn test_write_then_parse_round_trip() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("schema.json");

        let mut schema = Schema::new();
        schema.insert("Colors", "bg", TypeTag::Color);
        schema.insert("System", "FontSize", TypeTag::Float);
        write_schema(&path, &schema).unwrap();

        let reloaded = parse_schema(&path).unwrap();
        assert_eq!(reloaded, schema);
    }
}
