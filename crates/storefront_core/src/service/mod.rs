//! Business-rule services.
//!
//! # Responsibility
//! - Own every domain rule; orchestrate repository calls per operation.
//! - Translate repository errors into service outcomes without losing
//!   classification.
//!
//! # Invariants
//! - Rules are evaluated before any repository write; a rejected operation
//!   leaves storage untouched.
//! - Services speak DTOs upward and entity shapes downward; no transport
//!   concerns (status codes, headers) exist here.

use crate::repo::RepoError;
use std::error::Error;
use std::fmt::{Display, Formatter};

pub mod customer_service;
pub mod product_service;

const DEFAULT_LIST_LIMIT: u32 = 100;
const MAX_LIST_LIMIT: u32 = 500;

pub type ServiceResult<T> = Result<T, ServiceError>;

/// Domain-level outcome for failed service operations.
#[derive(Debug)]
pub enum ServiceError {
    /// A business rule rejected the operation before storage was touched,
    /// or storage reported a constraint the rule layer also owns.
    RuleViolation {
        rule: &'static str,
        detail: String,
    },
    /// The referenced entity does not exist.
    NotFound {
        entity: &'static str,
        key: String,
    },
    /// Infrastructure fault, surfaced with meaning intact.
    Storage(RepoError),
}

impl Display for ServiceError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::RuleViolation { rule, detail } => {
                write!(f, "business rule `{rule}` violated: {detail}")
            }
            Self::NotFound { entity, key } => write!(f, "{entity} not found: {key}"),
            Self::Storage(err) => write!(f, "{err}"),
        }
    }
}

impl Error for ServiceError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Storage(err) => Some(err),
            _ => None,
        }
    }
}

/// Re-signals a repository error for one entity type.
///
/// `NotFound` keeps its classification; `Conflict` is reported as the rule
/// the storage constraint backs; everything else is an infrastructure fault.
pub(crate) fn re_signal(entity: &'static str, err: RepoError) -> ServiceError {
    match err {
        RepoError::NotFound(id) => ServiceError::NotFound {
            entity,
            key: id.to_string(),
        },
        RepoError::Conflict { constraint } => ServiceError::RuleViolation {
            rule: "storage_constraint",
            detail: constraint.to_string(),
        },
        other => ServiceError::Storage(other),
    }
}

/// Clamps a caller-supplied page size to the service's bounds.
pub(crate) fn normalize_limit(limit: Option<u32>) -> u32 {
    limit
        .unwrap_or(DEFAULT_LIST_LIMIT)
        .clamp(1, MAX_LIST_LIMIT)
}
