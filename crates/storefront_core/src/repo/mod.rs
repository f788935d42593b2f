//! Repository layer abstractions and persistence implementations.
//!
//! # Responsibility
//! - Define entity-oriented data access contracts.
//! - Isolate SQLite query details from service/business orchestration.
//!
//! # Invariants
//! - Repository APIs return semantic errors (`NotFound`, `Conflict`) in
//!   addition to DB transport errors; classification is never collapsed.
//! - No domain rule evaluation happens here, only storage-level constraints.

use crate::db::DbError;
use std::error::Error;
use std::fmt::{Display, Formatter};

pub mod customer_repo;
pub mod product_repo;

pub type RepoResult<T> = Result<T, RepoError>;

/// Generic repository error for entity persistence and query operations.
#[derive(Debug)]
pub enum RepoError {
    /// Referenced row does not exist.
    NotFound(i64),
    /// A storage-level uniqueness or CHECK constraint rejected the write.
    Conflict { constraint: &'static str },
    /// Infrastructure fault from the storage engine.
    Db(DbError),
    /// Persisted state could not be read back into a valid entity.
    InvalidData(String),
}

impl Display for RepoError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::NotFound(id) => write!(f, "row not found: id={id}"),
            Self::Conflict { constraint } => {
                write!(f, "storage constraint violated: {constraint}")
            }
            Self::Db(err) => write!(f, "{err}"),
            Self::InvalidData(message) => write!(f, "invalid persisted data: {message}"),
        }
    }
}

impl Error for RepoError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Db(err) => Some(err),
            _ => None,
        }
    }
}

impl From<DbError> for RepoError {
    fn from(value: DbError) -> Self {
        Self::Db(value)
    }
}

impl From<rusqlite::Error> for RepoError {
    fn from(value: rusqlite::Error) -> Self {
        Self::Db(DbError::Sqlite(value))
    }
}

/// Maps a write-path SQLite error, turning constraint failures into
/// `Conflict` so the service layer can re-signal them as rule outcomes.
pub(crate) fn map_write_error(err: rusqlite::Error, constraint: &'static str) -> RepoError {
    if let rusqlite::Error::SqliteFailure(failure, _) = &err {
        if failure.code == rusqlite::ErrorCode::ConstraintViolation {
            return RepoError::Conflict { constraint };
        }
    }
    err.into()
}
