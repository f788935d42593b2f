//! Product entity.
//!
//! # Responsibility
//! - Define the stored product record and the shapes repositories persist.
//!
//! # Invariants
//! - `price` and `stock` are kept non-negative by the service layer; storage
//!   additionally enforces `stock >= 0` via CHECK constraint.

use serde::{Deserialize, Serialize};

/// Storage-assigned product identifier (SQLite rowid).
pub type ProductId = i64;

/// Persisted product record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    /// Assigned by storage on insert.
    pub id: ProductId,
    pub name: String,
    pub description: Option<String>,
    pub price: f64,
    pub stock: i64,
    /// Unix epoch milliseconds, assigned by storage on insert.
    pub created_at_ms: i64,
}

/// Draft product handed to `ProductRepository::create`.
#[derive(Debug, Clone, PartialEq)]
pub struct NewProduct {
    pub name: String,
    pub description: Option<String>,
    pub price: f64,
    pub stock: i64,
}

/// Partial update applied by `ProductRepository::update`.
///
/// `None` fields are left untouched.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ProductChanges {
    pub name: Option<String>,
    pub description: Option<String>,
    pub price: Option<f64>,
    pub stock: Option<i64>,
}

impl ProductChanges {
    /// Returns whether this change set would modify anything.
    pub fn is_empty(&self) -> bool {
        self.name.is_none()
            && self.description.is_none()
            && self.price.is_none()
            && self.stock.is_none()
    }
}
