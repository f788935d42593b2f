//! Customer entity.
//!
//! # Responsibility
//! - Define the stored customer record and the shapes repositories persist.
//!
//! # Invariants
//! - `email` is unique across customers (enforced by storage, pre-checked
//!   by the service layer).
//! - `id` is stable for the lifetime of the row.

use serde::{Deserialize, Serialize};

/// Storage-assigned customer identifier (SQLite rowid).
pub type CustomerId = i64;

/// Persisted customer record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Customer {
    /// Assigned by storage on insert.
    pub id: CustomerId,
    pub name: String,
    pub email: String,
    pub phone: Option<String>,
    pub address: Option<String>,
    /// Unix epoch milliseconds, assigned by storage on insert.
    pub created_at_ms: i64,
}

/// Draft customer handed to `CustomerRepository::create`.
///
/// Carries exactly the caller-supplied fields; identity and creation time
/// do not exist until the row does.
#[derive(Debug, Clone, PartialEq)]
pub struct NewCustomer {
    pub name: String,
    pub email: String,
    pub phone: Option<String>,
    pub address: Option<String>,
}

/// Partial update applied by `CustomerRepository::update`.
///
/// `None` fields are left untouched.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CustomerChanges {
    pub name: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub address: Option<String>,
}

impl CustomerChanges {
    /// Returns whether this change set would modify anything.
    pub fn is_empty(&self) -> bool {
        self.name.is_none()
            && self.email.is_none()
            && self.phone.is_none()
            && self.address.is_none()
    }
}
