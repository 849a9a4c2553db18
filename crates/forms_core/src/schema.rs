//! Form schema types and structures.
//!
//! This module contains the core types for describing form schemas: the
//! declarative rules attached to each field and the immutable, ordered
//! `Schema` the validator executes against.

use std::fmt;
use std::sync::Arc;

use crate::values::ValueMap;

/// Default minimum number of digits accepted by a phone-format rule.
pub const DEFAULT_MIN_PHONE_DIGITS: usize = 6;

/// Default maximum number of digits accepted by a phone-format rule.
pub const DEFAULT_MAX_PHONE_DIGITS: usize = 15;

/// A custom validation predicate.
///
/// Receives the field's value (`None` when absent or null) and the full
/// value map, and returns `true` when the value is acceptable. Predicates
/// must be pure functions of their inputs: no I/O, no shared mutable state.
pub type Predicate = Arc<dyn Fn(Option<&str>, &ValueMap) -> bool + Send + Sync>;

/// The kind of constraint a [`Rule`] applies to a field.
#[derive(Clone)]
pub enum RuleKind {
    /// Value must be present and non-empty after trimming.
    Required,

    /// Trimmed character count must fall within the given bounds.
    /// An absent bound is unbounded on that side. Absent and empty
    /// values pass.
    Length {
        /// Minimum length (inclusive)
        min: Option<usize>,
        /// Maximum length (inclusive)
        max: Option<usize>,
    },

    /// Value must look like an email address (`local@domain` with at least
    /// one dot in the domain). Absent and empty values pass.
    EmailFormat,

    /// Value may only contain digits, `+`, spaces, `-` and parentheses, and
    /// its digit count must fall within the given range. Absent and empty
    /// values pass.
    PhoneFormat {
        /// Minimum number of digits (inclusive)
        min_digits: usize,
        /// Maximum number of digits (inclusive)
        max_digits: usize,
    },

    /// Value must exactly equal another field's value. Absence-sensitive:
    /// two absent values compare equal.
    EqualsField {
        /// Name of the field to compare against
        other: String,
    },

    /// User-supplied predicate over the value and the full value map.
    Custom {
        /// Name identifying the predicate in debug output
        name: String,
        /// The predicate itself
        predicate: Predicate,
    },
}

impl fmt::Debug for RuleKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RuleKind::Required => write!(f, "Required"),
            RuleKind::Length { min, max } => f
                .debug_struct("Length")
                .field("min", min)
                .field("max", max)
                .finish(),
            RuleKind::EmailFormat => write!(f, "EmailFormat"),
            RuleKind::PhoneFormat {
                min_digits,
                max_digits,
            } => f
                .debug_struct("PhoneFormat")
                .field("min_digits", min_digits)
                .field("max_digits", max_digits)
                .finish(),
            RuleKind::EqualsField { other } => {
                f.debug_struct("EqualsField").field("other", other).finish()
            }
            RuleKind::Custom { name, .. } => {
                f.debug_struct("Custom").field("name", name).finish_non_exhaustive()
            }
        }
    }
}

/// A single declarative constraint on a field.
///
/// A rule pairs a [`RuleKind`] with a human-readable message template. Each
/// constructor installs a default template; [`Rule::with_message`] overrides
/// it. Templates may contain `{min}`, `{max}` and `{other}` placeholders
/// which the validator substitutes when rendering a failure.
///
/// # Example
///
/// ```rust
/// use forms_core::Rule;
///
/// let rule = Rule::length(Some(8), None).with_message("pick at least {min} characters");
/// assert_eq!(rule.message(), "pick at least {min} characters");
/// ```
#[derive(Debug, Clone)]
pub struct Rule {
    kind: RuleKind,
    message: String,
}

impl Rule {
    /// Creates a rule requiring a present, non-blank value.
    pub fn required() -> Self {
        Self {
            kind: RuleKind::Required,
            message: "this field is required".to_string(),
        }
    }

    /// Creates a length-bounds rule. Either bound may be `None` for
    /// unbounded on that side.
    pub fn length(min: Option<usize>, max: Option<usize>) -> Self {
        let message = match (min, max) {
            (Some(_), Some(_)) => "must be between {min} and {max} characters",
            (Some(_), None) => "must be at least {min} characters",
            (None, Some(_)) => "must be at most {max} characters",
            (None, None) => "has an invalid length",
        };
        Self {
            kind: RuleKind::Length { min, max },
            message: message.to_string(),
        }
    }

    /// Creates a minimum-length rule.
    pub fn min_length(min: usize) -> Self {
        Self::length(Some(min), None)
    }

    /// Creates a maximum-length rule.
    pub fn max_length(max: usize) -> Self {
        Self::length(None, Some(max))
    }

    /// Creates an email-format rule.
    pub fn email() -> Self {
        Self {
            kind: RuleKind::EmailFormat,
            message: "must be a valid email address".to_string(),
        }
    }

    /// Creates a phone-format rule with the default digit range.
    pub fn phone() -> Self {
        Self::phone_digits(DEFAULT_MIN_PHONE_DIGITS, DEFAULT_MAX_PHONE_DIGITS)
    }

    /// Creates a phone-format rule with an explicit digit range.
    pub fn phone_digits(min_digits: usize, max_digits: usize) -> Self {
        Self {
            kind: RuleKind::PhoneFormat {
                min_digits,
                max_digits,
            },
            message: "must be a valid phone number".to_string(),
        }
    }

    /// Creates a cross-field equality rule against `other`.
    ///
    /// The referenced field must exist in the same schema; this is checked
    /// when the schema is built.
    pub fn equals_field(other: impl Into<String>) -> Self {
        Self {
            kind: RuleKind::EqualsField {
                other: other.into(),
            },
            message: "does not match {other}".to_string(),
        }
    }

    /// Creates a custom-predicate rule.
    pub fn custom(
        name: impl Into<String>,
        predicate: impl Fn(Option<&str>, &ValueMap) -> bool + Send + Sync + 'static,
    ) -> Self {
        Self {
            kind: RuleKind::Custom {
                name: name.into(),
                predicate: Arc::new(predicate),
            },
            message: "invalid value".to_string(),
        }
    }

    /// Replaces the default message template.
    pub fn with_message(mut self, message: impl Into<String>) -> Self {
        self.message = message.into();
        self
    }

    /// The constraint this rule applies.
    pub fn kind(&self) -> &RuleKind {
        &self.kind
    }

    /// The message template rendered when this rule fails.
    pub fn message(&self) -> &str {
        &self.message
    }
}

/// A field and its ordered list of rules.
#[derive(Debug, Clone)]
pub struct FieldRules {
    name: String,
    rules: Vec<Rule>,
}

impl FieldRules {
    pub(crate) fn new(name: String, rules: Vec<Rule>) -> Self {
        Self { name, rules }
    }

    /// The field name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The rules attached to this field, in declaration order.
    pub fn rules(&self) -> &[Rule] {
        &self.rules
    }
}

/// An immutable, ordered set of per-field rule lists for one form.
///
/// A `Schema` is built once per form type via
/// [`SchemaBuilder`](crate::SchemaBuilder) and is internally consistent for
/// the lifetime of the process: field names are unique and every
/// cross-field reference resolves. It holds no mutable state and is safe to
/// share across concurrent validation calls.
#[derive(Debug, Clone)]
pub struct Schema {
    fields: Vec<FieldRules>,
}

impl Schema {
    pub(crate) fn new(fields: Vec<FieldRules>) -> Self {
        Self { fields }
    }

    /// The fields of this schema, in declaration order.
    pub fn fields(&self) -> &[FieldRules] {
        &self.fields
    }

    /// Number of fields in the schema.
    pub fn len(&self) -> usize {
        self.fields.len()
    }

    /// Returns true if the schema declares no fields.
    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    /// Returns true if the schema declares a field with this name.
    pub fn contains(&self, name: &str) -> bool {
        self.fields.iter().any(|f| f.name == name)
    }

    /// The rules for a named field, if declared.
    pub fn rules_for(&self, name: &str) -> Option<&[Rule]> {
        self.fields
            .iter()
            .find(|f| f.name == name)
            .map(|f| f.rules.as_slice())
    }

    /// Iterator over the declared field names, in order.
    pub fn field_names(&self) -> impl Iterator<Item = &str> {
        self.fields.iter().map(|f| f.name.as_str())
    }
}
