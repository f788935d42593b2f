//! Request handlers: thin adaptation between transport and services.
//!
//! Each handler validates input through the schema DTOs, calls the matching
//! service method under the scoped connection, and returns a DTO. No
//! business logic, retries, or storage access happens at this layer.

pub mod customers;
pub mod products;
