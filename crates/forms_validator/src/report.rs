//! Validation results.

use serde::Serialize;

/// The errors collected for one field.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FieldErrors {
    /// The field name
    pub field: String,
    /// Rendered failure messages, in rule-declaration order
    pub messages: Vec<String>,
}

/// Outcome of validating one submission against a schema.
///
/// Fields appear in schema-declaration order and only when at least one of
/// their rules failed; a fully passing field is absent rather than present
/// with an empty list. [`ValidationResult::is_valid`] holds exactly when the
/// error list is empty.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ValidationResult {
    errors: Vec<FieldErrors>,
}

impl ValidationResult {
    pub(crate) fn new(errors: Vec<FieldErrors>) -> Self {
        Self { errors }
    }

    /// A result with no errors.
    pub fn ok() -> Self {
        Self { errors: Vec::new() }
    }

    /// True when every rule of every field passed.
    pub fn is_valid(&self) -> bool {
        self.errors.is_empty()
    }

    /// The failing fields, in schema-declaration order.
    pub fn errors(&self) -> &[FieldErrors] {
        &self.errors
    }

    /// The messages for one field, or `None` if all its rules passed.
    pub fn errors_for(&self, field: &str) -> Option<&[String]> {
        self.errors
            .iter()
            .find(|e| e.field == field)
            .map(|e| e.messages.as_slice())
    }

    /// Total number of failure messages across all fields.
    pub fn error_count(&self) -> usize {
        self.errors.iter().map(|e| e.messages.len()).sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ok_result() {
        let result = ValidationResult::ok();
        assert!(result.is_valid());
        assert!(result.errors().is_empty());
        assert_eq!(result.error_count(), 0);
    }

    #[test]
    fn test_valid_iff_errors_empty() {
        let result = ValidationResult::new(vec![FieldErrors {
            field: "email".to_string(),
            messages: vec!["this field is required".to_string()],
        }]);
        assert!(!result.is_valid());
        assert_eq!(result.error_count(), 1);
        assert_eq!(
            result.errors_for("email"),
            Some(&["this field is required".to_string()][..])
        );
        assert_eq!(result.errors_for("phone"), None);
    }

    #[test]
    fn test_serializes_to_json() {
        let result = ValidationResult::new(vec![FieldErrors {
            field: "email".to_string(),
            messages: vec!["must be a valid email address".to_string()],
        }]);
        let json = serde_json::to_value(&result).unwrap();
        assert_eq!(json["errors"][0]["field"], "email");
    }
}
