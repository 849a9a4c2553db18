//! Rule evaluators.
//!
//! Each evaluator is a pure function of the field's value and, for
//! cross-field rules, the full value map. Evaluators return `true` on pass.
//!
//! Presence policy: format rules (email, phone) and length bounds pass on an
//! absent value *and* on an empty-after-trim value. Presence is exclusively
//! the `Required` rule's concern; compose `Required` with a format rule to
//! force both.

use std::sync::LazyLock;

use forms_core::{RuleKind, ValueMap};
use regex::Regex;
use validator::ValidateEmail;

/// Characters a phone number may contain.
static PHONE_CHARS: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[0-9+\-() ]+$").expect("phone pattern is valid"));

/// Evaluates a single rule against a field value. Returns `true` on pass.
pub(crate) fn evaluate(kind: &RuleKind, value: Option<&str>, values: &ValueMap) -> bool {
    match kind {
        RuleKind::Required => check_required(value),
        RuleKind::Length { min, max } => check_length(value, *min, *max),
        RuleKind::EmailFormat => check_email(value),
        RuleKind::PhoneFormat {
            min_digits,
            max_digits,
        } => check_phone(value, *min_digits, *max_digits),
        RuleKind::EqualsField { other } => value == values.get(other),
        RuleKind::Custom { predicate, .. } => predicate(value, values),
    }
}

fn check_required(value: Option<&str>) -> bool {
    value.is_some_and(|v| !v.trim().is_empty())
}

fn check_length(value: Option<&str>, min: Option<usize>, max: Option<usize>) -> bool {
    let Some(value) = value.map(str::trim) else {
        return true;
    };
    if value.is_empty() {
        return true;
    }
    let count = value.chars().count();
    min.is_none_or(|min| count >= min) && max.is_none_or(|max| count <= max)
}

fn check_email(value: Option<&str>) -> bool {
    let Some(value) = value.map(str::trim) else {
        return true;
    };
    if value.is_empty() {
        return true;
    }
    value.validate_email()
        && value
            .rsplit_once('@')
            .is_some_and(|(_, domain)| domain.contains('.'))
}

fn check_phone(value: Option<&str>, min_digits: usize, max_digits: usize) -> bool {
    let Some(value) = value.map(str::trim) else {
        return true;
    };
    if value.is_empty() {
        return true;
    }
    if !PHONE_CHARS.is_match(value) {
        return false;
    }
    let digits = value.chars().filter(char::is_ascii_digit).count();
    digits >= min_digits && digits <= max_digits
}
