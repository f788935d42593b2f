//! Declarative field extractors shared by the schema DTOs.
//!
//! Each extractor records violations into the shared list and returns the
//! extracted value when (and only when) the field is well-formed, so one
//! validation pass can surface every problem in a payload.

use crate::schema::FieldViolation;
use once_cell::sync::Lazy;
use regex::Regex;
use serde_json::{Map, Value};

static EMAIL_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[^@\s]+@[^@\s]+\.[^@\s]+$").expect("valid email regex"));

/// Interprets the payload root as a JSON object.
pub(crate) fn payload_object<'a>(
    raw: &'a Value,
    violations: &mut Vec<FieldViolation>,
) -> Option<&'a Map<String, Value>> {
    match raw {
        Value::Object(map) => Some(map),
        _ => {
            violations.push(FieldViolation::new("$", "payload must be a JSON object"));
            None
        }
    }
}

/// Flags any payload field outside the declared set.
pub(crate) fn sweep_unknown_fields(
    map: &Map<String, Value>,
    allowed: &[&str],
    violations: &mut Vec<FieldViolation>,
) {
    for key in map.keys() {
        if !allowed.contains(&key.as_str()) {
            violations.push(FieldViolation::new(key.clone(), "unknown field"));
        }
    }
}

pub(crate) fn required_str(
    map: &Map<String, Value>,
    field: &str,
    min_chars: usize,
    max_chars: usize,
    violations: &mut Vec<FieldViolation>,
) -> Option<String> {
    match map.get(field) {
        None | Some(Value::Null) => {
            violations.push(FieldViolation::new(field, "is required"));
            None
        }
        Some(value) => bounded_str(value, field, min_chars, max_chars, violations),
    }
}

/// Absent and explicit-null fields both read as `None` without a violation.
pub(crate) fn optional_str(
    map: &Map<String, Value>,
    field: &str,
    max_chars: usize,
    violations: &mut Vec<FieldViolation>,
) -> Option<String> {
    match map.get(field) {
        None | Some(Value::Null) => None,
        Some(value) => bounded_str(value, field, 0, max_chars, violations),
    }
}

pub(crate) fn required_email(
    map: &Map<String, Value>,
    field: &str,
    violations: &mut Vec<FieldViolation>,
) -> Option<String> {
    let value = required_str(map, field, 3, 254, violations)?;
    checked_email(value, field, violations)
}

pub(crate) fn optional_email(
    map: &Map<String, Value>,
    field: &str,
    violations: &mut Vec<FieldViolation>,
) -> Option<String> {
    let value = optional_str(map, field, 254, violations)?;
    checked_email(value, field, violations)
}

pub(crate) fn required_number(
    map: &Map<String, Value>,
    field: &str,
    violations: &mut Vec<FieldViolation>,
) -> Option<f64> {
    match map.get(field) {
        None | Some(Value::Null) => {
            violations.push(FieldViolation::new(field, "is required"));
            None
        }
        Some(value) => finite_number(value, field, violations),
    }
}

pub(crate) fn optional_number(
    map: &Map<String, Value>,
    field: &str,
    violations: &mut Vec<FieldViolation>,
) -> Option<f64> {
    match map.get(field) {
        None | Some(Value::Null) => None,
        Some(value) => finite_number(value, field, violations),
    }
}

pub(crate) fn optional_int(
    map: &Map<String, Value>,
    field: &str,
    violations: &mut Vec<FieldViolation>,
) -> Option<i64> {
    match map.get(field) {
        None | Some(Value::Null) => None,
        Some(Value::Number(number)) => match number.as_i64() {
            Some(value) => Some(value),
            None => {
                violations.push(FieldViolation::new(field, "must be an integer"));
                None
            }
        },
        Some(_) => {
            violations.push(FieldViolation::new(field, "must be an integer"));
            None
        }
    }
}

fn bounded_str(
    value: &Value,
    field: &str,
    min_chars: usize,
    max_chars: usize,
    violations: &mut Vec<FieldViolation>,
) -> Option<String> {
    let Value::String(text) = value else {
        violations.push(FieldViolation::new(field, "must be a string"));
        return None;
    };

    let chars = text.chars().count();
    if chars < min_chars || chars > max_chars {
        violations.push(FieldViolation::new(
            field,
            format!("must be between {min_chars} and {max_chars} characters"),
        ));
        return None;
    }

    Some(text.clone())
}

fn checked_email(
    value: String,
    field: &str,
    violations: &mut Vec<FieldViolation>,
) -> Option<String> {
    if EMAIL_RE.is_match(&value) {
        Some(value)
    } else {
        violations.push(FieldViolation::new(field, "must be a valid email address"));
        None
    }
}

fn finite_number(
    value: &Value,
    field: &str,
    violations: &mut Vec<FieldViolation>,
) -> Option<f64> {
    let Value::Number(number) = value else {
        violations.push(FieldViolation::new(field, "must be a number"));
        return None;
    };

    match number.as_f64() {
        Some(parsed) if parsed.is_finite() => Some(parsed),
        _ => {
            violations.push(FieldViolation::new(field, "must be a finite number"));
            None
        }
    }
}
