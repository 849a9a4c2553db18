//! Parser for form definition documents (YAML/TOML).
//!
//! This crate turns a declarative form document into a built
//! [`Schema`](forms_core::Schema), running the schema invariant checks as
//! part of parsing: a document that names a duplicate field or dangles a
//! cross-field reference fails here, not at validation time.
//!
//! Custom-predicate rules are code-only and have no document form.
//!
//! # Example
//!
//! ```rust
//! use forms_parser::parse_yaml;
//!
//! let yaml = r#"
//! form: login
//! fields:
//!   - name: email
//!     rules:
//!       - type: required
//!       - type: email
//!   - name: password
//!     rules:
//!       - type: required
//! "#;
//!
//! let definition = parse_yaml(yaml).expect("valid definition");
//! assert_eq!(definition.name, "login");
//! assert_eq!(definition.schema.len(), 2);
//! ```

use std::path::Path;

use forms_core::{Rule, Schema, SchemaBuilder, SchemaError};
use forms_core::{DEFAULT_MAX_PHONE_DIGITS, DEFAULT_MIN_PHONE_DIGITS};
use serde::Deserialize;
use thiserror::Error;

/// Errors that can occur while parsing a form definition.
#[derive(Debug, Error)]
pub enum ParserError {
    /// YAML parsing or deserialization failed
    #[error("failed to parse YAML: {0}")]
    YamlError(#[from] serde_yaml_ng::Error),

    /// TOML parsing or deserialization failed
    #[error("failed to parse TOML: {0}")]
    TomlError(String),

    /// File I/O error
    #[error("file I/O error: {0}")]
    IoError(#[from] std::io::Error),

    /// The document parsed but its schema is inconsistent
    #[error("invalid schema: {0}")]
    SchemaError(#[from] SchemaError),

    /// Unsupported file format
    #[error("unsupported file format: {0}")]
    UnsupportedFormat(String),

    /// Invalid file extension
    #[error("invalid or missing file extension")]
    InvalidExtension,
}

/// Result type alias for parser operations.
pub type Result<T> = std::result::Result<T, ParserError>;

/// Supported definition file formats.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DefinitionFormat {
    /// YAML format (.yml, .yaml)
    Yaml,
    /// TOML format (.toml)
    Toml,
}

/// A parsed form definition: the form's name and its built schema.
#[derive(Debug, Clone)]
pub struct FormDefinition {
    /// Name of the form (e.g. "registration")
    pub name: String,
    /// The schema, already past the builder's invariant checks
    pub schema: Schema,
}

#[derive(Debug, Deserialize)]
struct FormDoc {
    form: String,
    #[serde(default)]
    fields: Vec<FieldDoc>,
}

#[derive(Debug, Deserialize)]
struct FieldDoc {
    name: String,
    #[serde(default)]
    rules: Vec<RuleDoc>,
}

#[derive(Debug, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
enum RuleDoc {
    Required {
        message: Option<String>,
    },
    Length {
        min: Option<usize>,
        max: Option<usize>,
        message: Option<String>,
    },
    Email {
        message: Option<String>,
    },
    Phone {
        min_digits: Option<usize>,
        max_digits: Option<usize>,
        message: Option<String>,
    },
    Equals {
        other: String,
        message: Option<String>,
    },
}

impl RuleDoc {
    fn into_rule(self) -> Rule {
        let (rule, message) = match self {
            RuleDoc::Required { message } => (Rule::required(), message),
            RuleDoc::Length { min, max, message } => (Rule::length(min, max), message),
            RuleDoc::Email { message } => (Rule::email(), message),
            RuleDoc::Phone {
                min_digits,
                max_digits,
                message,
            } => (
                Rule::phone_digits(
                    min_digits.unwrap_or(DEFAULT_MIN_PHONE_DIGITS),
                    max_digits.unwrap_or(DEFAULT_MAX_PHONE_DIGITS),
                ),
                message,
            ),
            RuleDoc::Equals { other, message } => (Rule::equals_field(other), message),
        };

        match message {
            Some(message) => rule.with_message(message),
            None => rule,
        }
    }
}

impl FormDoc {
    fn into_definition(self) -> Result<FormDefinition> {
        let mut builder = SchemaBuilder::new();
        for field in self.fields {
            let rules = field.rules.into_iter().map(RuleDoc::into_rule).collect();
            builder = builder.field(field.name, rules);
        }

        Ok(FormDefinition {
            name: self.form,
            schema: builder.build()?,
        })
    }
}

/// Parse a form definition from a YAML string.
pub fn parse_yaml(content: &str) -> Result<FormDefinition> {
    let doc: FormDoc = serde_yaml_ng::from_str(content)?;
    doc.into_definition()
}

/// Parse a form definition from a TOML string.
pub fn parse_toml(content: &str) -> Result<FormDefinition> {
    let doc: FormDoc =
        toml::from_str(content).map_err(|e| ParserError::TomlError(e.to_string()))?;
    doc.into_definition()
}

/// Detect the definition format from a file path based on its extension.
///
/// # Errors
///
/// Returns [`ParserError::InvalidExtension`] if the file has no extension,
/// and [`ParserError::UnsupportedFormat`] if the extension is unrecognized.
pub fn detect_format(path: &Path) -> Result<DefinitionFormat> {
    let extension = path
        .extension()
        .and_then(|ext| ext.to_str())
        .ok_or(ParserError::InvalidExtension)?;

    match extension.to_lowercase().as_str() {
        "yaml" | "yml" => Ok(DefinitionFormat::Yaml),
        "toml" => Ok(DefinitionFormat::Toml),
        other => Err(ParserError::UnsupportedFormat(other.to_string())),
    }
}

/// Parse a form definition from a file with automatic format detection.
pub fn parse_file(path: &Path) -> Result<FormDefinition> {
    let content = std::fs::read_to_string(path)?;
    let format = detect_format(path)?;

    match format {
        DefinitionFormat::Yaml => parse_yaml(&content),
        DefinitionFormat::Toml => parse_toml(&content),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use forms_core::RuleKind;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_parse_minimal_yaml() {
        let yaml = r#"
form: newsletter
fields:
  - name: email
    rules:
      - type: required
      - type: email
"#;

        let definition = parse_yaml(yaml).expect("failed to parse valid YAML");
        assert_eq!(definition.name, "newsletter");
        assert_eq!(definition.schema.len(), 1);
        assert_eq!(definition.schema.rules_for("email").unwrap().len(), 2);
    }

    #[test]
    fn test_parse_yaml_all_rule_kinds() {
        let yaml = r#"
form: registration
fields:
  - name: email
    rules:
      - type: required
      - type: email
  - name: password
    rules:
      - type: length
        min: 8
        max: 128
  - name: confirm_password
    rules:
      - type: equals
        other: password
        message: passwords do not match
  - name: phone
    rules:
      - type: phone
        min_digits: 10
        max_digits: 10
"#;

        let definition = parse_yaml(yaml).expect("failed to parse YAML with rules");
        let schema = &definition.schema;
        assert_eq!(schema.len(), 4);

        match schema.rules_for("password").unwrap()[0].kind() {
            RuleKind::Length { min, max } => {
                assert_eq!(*min, Some(8));
                assert_eq!(*max, Some(128));
            }
            other => panic!("expected Length, got {other:?}"),
        }

        let confirm = &schema.rules_for("confirm_password").unwrap()[0];
        assert_eq!(confirm.message(), "passwords do not match");

        match schema.rules_for("phone").unwrap()[0].kind() {
            RuleKind::PhoneFormat {
                min_digits,
                max_digits,
            } => {
                assert_eq!(*min_digits, 10);
                assert_eq!(*max_digits, 10);
            }
            other => panic!("expected PhoneFormat, got {other:?}"),
        }
    }

    #[test]
    fn test_parse_yaml_phone_defaults() {
        let yaml = r#"
form: contact
fields:
  - name: phone
    rules:
      - type: phone
"#;

        let definition = parse_yaml(yaml).unwrap();
        match definition.schema.rules_for("phone").unwrap()[0].kind() {
            RuleKind::PhoneFormat {
                min_digits,
                max_digits,
            } => {
                assert_eq!(*min_digits, DEFAULT_MIN_PHONE_DIGITS);
                assert_eq!(*max_digits, DEFAULT_MAX_PHONE_DIGITS);
            }
            other => panic!("expected PhoneFormat, got {other:?}"),
        }
    }

    #[test]
    fn test_parse_yaml_field_without_rules() {
        let yaml = r#"
form: survey
fields:
  - name: comments
"#;

        let definition = parse_yaml(yaml).unwrap();
        assert_eq!(definition.schema.rules_for("comments").unwrap().len(), 0);
    }

    #[test]
    fn test_duplicate_field_surfaces_schema_error() {
        let yaml = r#"
form: broken
fields:
  - name: email
    rules:
      - type: required
  - name: email
    rules:
      - type: email
"#;

        let err = parse_yaml(yaml).unwrap_err();
        assert!(matches!(
            err,
            ParserError::SchemaError(SchemaError::DuplicateField(ref f)) if f == "email"
        ));
    }

    #[test]
    fn test_dangling_reference_surfaces_schema_error() {
        let yaml = r#"
form: broken
fields:
  - name: confirm
    rules:
      - type: equals
        other: missing
"#;

        let err = parse_yaml(yaml).unwrap_err();
        assert!(matches!(
            err,
            ParserError::SchemaError(SchemaError::DanglingReference { .. })
        ));
    }

    #[test]
    fn test_parse_invalid_yaml() {
        let result = parse_yaml("form: [unclosed");
        assert!(matches!(result.unwrap_err(), ParserError::YamlError(_)));
    }

    #[test]
    fn test_unknown_rule_type_rejected() {
        let yaml = r#"
form: broken
fields:
  - name: email
    rules:
      - type: telepathy
"#;

        assert!(matches!(
            parse_yaml(yaml).unwrap_err(),
            ParserError::YamlError(_)
        ));
    }

    #[test]
    fn test_parse_toml() {
        let toml = r#"
form = "registration"

[[fields]]
name = "email"

[[fields.rules]]
type = "required"

[[fields.rules]]
type = "email"

[[fields]]
name = "password"

[[fields.rules]]
type = "length"
min = 8
max = 128
"#;

        let definition = parse_toml(toml).expect("failed to parse valid TOML");
        assert_eq!(definition.name, "registration");
        assert_eq!(definition.schema.len(), 2);
        assert_eq!(definition.schema.rules_for("email").unwrap().len(), 2);
    }

    #[test]
    fn test_parse_invalid_toml() {
        let result = parse_toml("form = \"x\"\n[[[broken");
        assert!(matches!(result.unwrap_err(), ParserError::TomlError(_)));
    }

    #[test]
    fn test_detect_format() {
        assert_eq!(
            detect_format(Path::new("login.yaml")).unwrap(),
            DefinitionFormat::Yaml
        );
        assert_eq!(
            detect_format(Path::new("login.yml")).unwrap(),
            DefinitionFormat::Yaml
        );
        assert_eq!(
            detect_format(Path::new("login.toml")).unwrap(),
            DefinitionFormat::Toml
        );
        assert!(matches!(
            detect_format(Path::new("login.json")).unwrap_err(),
            ParserError::UnsupportedFormat(_)
        ));
        assert!(matches!(
            detect_format(Path::new("login")).unwrap_err(),
            ParserError::InvalidExtension
        ));
    }

    #[test]
    fn test_field_order_preserved() {
        let yaml = r#"
form: login
fields:
  - name: email
    rules:
      - type: required
  - name: password
    rules:
      - type: required
"#;

        let definition = parse_yaml(yaml).unwrap();
        assert_eq!(
            definition.schema.field_names().collect::<Vec<_>>(),
            vec!["email", "password"]
        );
    }
}
