//! Storefront core: layered CRUD domain logic.
//!
//! Layering, outermost collaborator first:
//! transport (see `storefront_server`) -> `schema` (DTO validation) ->
//! `service` (business rules) -> `repo` (storage access) -> `model`
//! (persisted entities) -> `db` (SQLite bootstrap).
//!
//! Each layer talks only to its direct neighbor: entities never cross the
//! transport boundary and DTOs never reach the repositories.

pub mod db;
pub mod logging;
pub mod model;
pub mod repo;
pub mod schema;
pub mod service;

pub use logging::{default_log_level, init_logging, logging_status};
pub use model::customer::{Customer, CustomerChanges, CustomerId, NewCustomer};
pub use model::product::{NewProduct, Product, ProductChanges, ProductId};
pub use repo::customer_repo::{CustomerListQuery, CustomerRepository, SqliteCustomerRepository};
pub use repo::product_repo::{ProductListQuery, ProductRepository, SqliteProductRepository};
pub use repo::{RepoError, RepoResult};
pub use schema::customer::{CustomerCreate, CustomerDto, CustomerUpdate};
pub use schema::product::{ProductCreate, ProductDto, ProductUpdate};
pub use schema::{FieldViolation, ValidationError};
pub use service::customer_service::{CustomerListParams, CustomerService};
pub use service::product_service::{ProductListParams, ProductService};
pub use service::{ServiceError, ServiceResult};

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}

#[cfg(test)]
mod tests {
    use super::core_version;

    #[test]
    fn version_is_not_empty() {
        assert!(!core_version().is_empty());
    }
}
