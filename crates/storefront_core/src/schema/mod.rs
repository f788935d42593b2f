//! DTO boundary: shapes and validation for data crossing the process edge.
//!
//! # Responsibility
//! - Validate raw JSON payloads against declarative field constraints.
//! - Define input DTOs (exactly the caller-suppliable fields) and output
//!   DTOs (exactly the fields safe to expose).
//!
//! # Invariants
//! - Validation is single-pass and exhaustive: every violated constraint in
//!   a payload is reported, never just the first.
//! - Input DTOs never carry server-assigned fields (ids, timestamps).

use std::error::Error;
use std::fmt::{Display, Formatter};

pub(crate) mod fields;

pub mod customer;
pub mod product;

/// One violated field constraint.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize)]
pub struct FieldViolation {
    /// Field path; `$` refers to the payload as a whole.
    pub field: String,
    pub message: String,
}

impl FieldViolation {
    pub fn new(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            message: message.into(),
        }
    }
}

/// Malformed input detected at the schema boundary.
///
/// Carries every violation found in the payload so callers can report all
/// problems at once.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationError {
    pub violations: Vec<FieldViolation>,
}

impl Display for ValidationError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "validation failed:")?;
        for violation in &self.violations {
            write!(f, " {}: {};", violation.field, violation.message)?;
        }
        Ok(())
    }
}

impl Error for ValidationError {}

impl ValidationError {
    pub(crate) fn from_violations(violations: Vec<FieldViolation>) -> Self {
        Self { violations }
    }
}
