//! Product business rules.
//!
//! # Responsibility
//! - Enforce product domain rules (non-negative price and stock) before
//!   persistence.
//! - Provide the DTO-shaped CRUD surface the transport layer calls.
//!
//! # Invariants
//! - Rules run before any repository call; a rejected create/update never
//!   reaches storage.

use crate::model::product::ProductId;
use crate::repo::product_repo::{ProductListQuery, ProductRepository};
use crate::schema::product::{ProductCreate, ProductDto, ProductUpdate};
use crate::service::{normalize_limit, re_signal, ServiceError, ServiceResult};

const ENTITY: &str = "product";

/// Caller-facing list parameters, normalized before hitting the repository.
#[derive(Debug, Clone, Default)]
pub struct ProductListParams {
    pub name_contains: Option<String>,
    pub min_price: Option<f64>,
    pub max_price: Option<f64>,
    pub skip: u32,
    pub limit: Option<u32>,
}

/// Business-rule service for products.
pub struct ProductService<R: ProductRepository> {
    repo: R,
}

impl<R: ProductRepository> ProductService<R> {
    pub fn new(repo: R) -> Self {
        Self { repo }
    }

    /// Creates a product after checking price/stock rules.
    pub fn create(&self, input: ProductCreate) -> ServiceResult<ProductDto> {
        check_price(input.price)?;
        check_stock(input.stock)?;

        let created = self
            .repo
            .create(&input.into())
            .map_err(|err| re_signal(ENTITY, err))?;
        Ok(created.into())
    }

    pub fn get(&self, id: ProductId) -> ServiceResult<ProductDto> {
        let product = self
            .repo
            .get(id)
            .map_err(|err| re_signal(ENTITY, err))?
            .ok_or(ServiceError::NotFound {
                entity: ENTITY,
                key: id.to_string(),
            })?;
        Ok(product.into())
    }

    pub fn list(&self, params: ProductListParams) -> ServiceResult<Vec<ProductDto>> {
        let query = ProductListQuery {
            name_contains: params.name_contains,
            min_price: params.min_price,
            max_price: params.max_price,
            limit: Some(normalize_limit(params.limit)),
            offset: params.skip,
        };
        let products = self
            .repo
            .list(&query)
            .map_err(|err| re_signal(ENTITY, err))?;
        Ok(products.into_iter().map(Into::into).collect())
    }

    /// Applies a partial update after checking rules on the supplied fields.
    pub fn update(&self, id: ProductId, input: ProductUpdate) -> ServiceResult<ProductDto> {
        if let Some(price) = input.price {
            check_price(price)?;
        }
        if let Some(stock) = input.stock {
            check_stock(stock)?;
        }

        let updated = self
            .repo
            .update(id, &input.into())
            .map_err(|err| re_signal(ENTITY, err))?;
        Ok(updated.into())
    }

    pub fn delete(&self, id: ProductId) -> ServiceResult<()> {
        self.repo.delete(id).map_err(|err| re_signal(ENTITY, err))
    }

    pub fn count(&self) -> ServiceResult<u64> {
        self.repo.count().map_err(|err| re_signal(ENTITY, err))
    }
}

fn check_price(price: f64) -> ServiceResult<()> {
    if price < 0.0 {
        return Err(ServiceError::RuleViolation {
            rule: "product_price_non_negative",
            detail: format!("price must be >= 0, got {price}"),
        });
    }
    Ok(())
}

fn check_stock(stock: i64) -> ServiceResult<()> {
    if stock < 0 {
        return Err(ServiceError::RuleViolation {
            rule: "product_stock_non_negative",
            detail: format!("stock must be >= 0, got {stock}"),
        });
    }
    Ok(())
}
