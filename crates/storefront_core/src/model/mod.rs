//! Persisted entity shapes for the storefront domain.
//!
//! # Responsibility
//! - Define the canonical records owned by the repository layer.
//! - Keep entities pure structure: no behavior beyond constructors.
//!
//! # Invariants
//! - `id` and `created_at_ms` are assigned by storage, never by callers.
//! - Entities never cross the router boundary; DTOs in `schema` do.

pub mod customer;
pub mod product;
