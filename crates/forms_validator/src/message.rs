//! Error message rendering.
//!
//! Substitutes rule parameters into the rule's message template. Unknown
//! placeholders are left verbatim; rendering never fails.

use forms_core::{Rule, RuleKind};

/// Renders the failure message for a rule, substituting its parameters.
pub(crate) fn render(rule: &Rule) -> String {
    let mut message = rule.message().to_string();
    for (key, value) in params(rule.kind()) {
        message = message.replace(&format!("{{{key}}}"), &value);
    }
    message
}

/// Placeholder substitutions a rule kind provides.
fn params(kind: &RuleKind) -> Vec<(&'static str, String)> {
    match kind {
        RuleKind::Length { min, max } => {
            let mut params = Vec::new();
            if let Some(min) = min {
                params.push(("min", min.to_string()));
            }
            if let Some(max) = max {
                params.push(("max", max.to_string()));
            }
            params
        }
        RuleKind::PhoneFormat {
            min_digits,
            max_digits,
        } => vec![
            ("min", min_digits.to_string()),
            ("max", max_digits.to_string()),
        ],
        RuleKind::EqualsField { other } => vec![("other", other.clone())],
        RuleKind::Required | RuleKind::EmailFormat | RuleKind::Custom { .. } => Vec::new(),
    }
}
