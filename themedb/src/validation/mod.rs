use crate::document::ThemeDocument;
use crate::schema::{Schema, TypeTag};

/// One value that failed its declared type check.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationFailure {
    pub section: String,
    pub key: String,
    pub value: String,
    pub expected: TypeTag,
}

impl std::fmt::Display for ValidationFailure {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "[{}] {} = '{}' is not a valid {}",
            self.section, self.key, self.value, self.expected
        )
    }
}

/// Check a raw value string against a type tag.
pub fn validate_value(tag: TypeTag, value: &str) -> bool {
    match tag {
        TypeTag::Color => {
            let parts: Vec<&str> = value.split(',').collect();
            if parts.len() != 3 && parts.len() != 4 {
                return false;
            }
            parts.iter().all(|p| {
                let p = p.trim();
                !p.is_empty()
                    && p.parse::<i64>()
                        .map(|n| (0..=255).contains(&n))
                        .unwrap_or(false)
            })
        }
        TypeTag::Int => value.parse::<i64>().is_ok(),
        TypeTag::Float => value.parse::<f64>().is_ok(),
        TypeTag::Bool => matches!(
            value.to_lowercase().as_str(),
            "true" | "false" | "1" | "0" | "yes" | "no"
        ),
        TypeTag::String => true,
        TypeTag::Path => !value.is_empty(),
    }
}

/// Check every entry of every section against the schema, collecting the
/// failures. Keys the schema does not declare are not checked: the schema
/// is advisory, not a closed-world contract. Neither the document nor the
/// schema is touched, so this can be re-run freely.
pub fn validate_document(doc: &ThemeDocument, schema: &Schema) -> Vec<ValidationFailure> {
    let mut failures = Vec::new();
    for (section, body) in doc.sections() {
        for (key, value) in body.entries() {
            if let Some(expected) = schema.lookup(section, key) {
                if !validate_value(expected, value) {
                    failures.push(ValidationFailure {
                        section: section.to_string(),
                        key: key.to_string(),
                        value: value.to_string(),
                        expected,
                    });
                }
            }
        }
    }
    failures
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_color_boundaries() {
        assert!(validate_value(TypeTag::Color, "255,255,255,255"));
        assert!(validate_value(TypeTag::Color, "0, 0, 0"));
        assert!(!validate_value(TypeTag::Color, "256,0,0"));
        assert!(!validate_value(TypeTag::Color, "-1,0,0"));
        assert!(!validate_value(TypeTag::Color, "10,20"));
        assert!(!validate_value(TypeTag::Color, "10,20,30,40,50"));
        assert!(!validate_value(TypeTag::Color, "10,,30"));
    }

    #[test]
    fn test_validate_numbers() {
        assert!(validate_value(TypeTag::Int, "42"));
        assert!(validate_value(TypeTag::Int, "-42"));
        assert!(!validate_value(TypeTag::Int, "3.5"));
        assert!(validate_value(TypeTag::Float, "3.5"));
        assert!(validate_value(TypeTag::Float, "7"));
        assert!(!validate_value(TypeTag::Float, "abc"));
    }

    #[test]
    fn test_validate_bool_string_path() {
        for v in ["true", "False", "YES", "no", "1", "0"] {
            assert!(validate_value(TypeTag::Bool, v), "{v} should be a bool");
        }
        assert!(!validate_value(TypeTag::Bool, "maybe"));
        assert!(validate_value(TypeTag::String, ""));
        assert!(validate_value(TypeTag::Path, "res/img/a.png"));
        assert!(!validate_value(TypeTag::Path, ""));
    }

    #[test]
    fn test_validate_document_skips_undeclared_keys() {
        let doc = ThemeDocument::parse("[Colors]\nbg = 300, 0, 0\nundeclared = junk\n");
        let mut schema = Schema::new();
        schema.insert("Colors", "bg", TypeTag::Color);

        let failures = validate_document(&doc, &schema);
        assert_eq!(failures.len(), 1);
        assert_eq!(failures[0].section, "Colors");
        assert_eq!(failures[0].key, "bg");
        assert_eq!(failures[0].value, "300, 0, 0");
        assert_eq!(failures[0].expected, TypeTag::Color);
    }

    #[test]
    fn test_validate_document_clean() {
        let doc = ThemeDocument::parse("[Colors]\nbg = 10, 10, 10\n\n[Meta]\nname = Test\n");
        let mut schema = Schema::new();
        schema.insert("Colors", "bg", TypeTag::Color);
        schema.insert("Meta", "name", TypeTag::String);
        // The schema may also declare things the document lacks.
        schema.insert("Meta", "version", TypeTag::String);

        assert!(validate_document(&doc, &schema).is_empty());
    }
}
