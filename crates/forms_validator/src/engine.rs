//! Validation execution loop.

use forms_core::{Schema, ValueMap};
use tracing::debug;

use crate::message;
use crate::report::{FieldErrors, ValidationResult};
use crate::rules;

/// Validates a submission against a schema.
///
/// Walks the schema's fields in declaration order and each field's rules in
/// rule order, evaluating every rule exactly once (collect-all: a failing
/// rule never suppresses later rules on the same field). A schema field
/// absent from the value map is treated as present-but-null.
///
/// This function cannot fail: malformed values produce messages in the
/// result, never a panic or an error.
pub fn validate(schema: &Schema, values: &ValueMap) -> ValidationResult {
    let mut errors = Vec::new();

    for field in schema.fields() {
        let value = values.get(field.name());

        let messages: Vec<String> = field
            .rules()
            .iter()
            .filter(|rule| !rules::evaluate(rule.kind(), value, values))
            .map(message::render)
            .collect();

        if !messages.is_empty() {
            errors.push(FieldErrors {
                field: field.name().to_string(),
                messages,
            });
        }
    }

    debug!(
        fields = schema.len(),
        failing = errors.len(),
        "validated submission"
    );

    ValidationResult::new(errors)
}
