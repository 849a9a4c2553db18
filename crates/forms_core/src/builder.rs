//! Builder for form schemas.
//!
//! Construction is the single point where schema invariants are checked:
//! field names must be unique and every `EqualsField` rule must reference a
//! field declared in the same schema. A successfully built schema is
//! guaranteed internally consistent.

use std::collections::HashSet;

use crate::error::{Result, SchemaError};
use crate::schema::{FieldRules, Rule, RuleKind, Schema};

/// Builder for creating a [`Schema`].
///
/// Fields validate in the order they are added, and each field's rules
/// evaluate in the order they appear in its list.
///
/// # Example
///
/// ```rust
/// use forms_core::{Rule, SchemaBuilder};
///
/// let schema = SchemaBuilder::new()
///     .field("password", vec![Rule::required(), Rule::length(Some(6), Some(100))])
///     .field("confirm", vec![Rule::equals_field("password")])
///     .build()
///     .unwrap();
/// ```
#[derive(Debug, Default)]
pub struct SchemaBuilder {
    fields: Vec<FieldRules>,
}

impl SchemaBuilder {
    /// Creates an empty builder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a field and its ordered rule list.
    pub fn field(mut self, name: impl Into<String>, rules: Vec<Rule>) -> Self {
        self.fields.push(FieldRules::new(name.into(), rules));
        self
    }

    /// Builds the schema, checking its invariants.
    ///
    /// # Errors
    ///
    /// Returns [`SchemaError::DuplicateField`] if a field name repeats, and
    /// [`SchemaError::DanglingReference`] if an `EqualsField` rule names a
    /// field absent from the schema.
    pub fn build(self) -> Result<Schema> {
        let mut seen = HashSet::new();
        for field in &self.fields {
            if !seen.insert(field.name()) {
                return Err(SchemaError::DuplicateField(field.name().to_string()));
            }
        }

        for field in &self.fields {
            for rule in field.rules() {
                if let RuleKind::EqualsField { other } = rule.kind() {
                    if !seen.contains(other.as_str()) {
                        return Err(SchemaError::DanglingReference {
                            field: field.name().to_string(),
                            target: other.clone(),
                        });
                    }
                }
            }
        }

        Ok(Schema::new(self.fields))
    }
}
