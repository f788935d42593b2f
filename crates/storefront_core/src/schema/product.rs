//! Product DTOs and boundary validation.
//!
//! # Responsibility
//! - Shape product data crossing the transport boundary in both directions.
//!
//! # Invariants
//! - Price sign is deliberately NOT checked here: "price must not be
//!   negative" is a business rule owned by the service layer, so the schema
//!   only guarantees `price` is a finite number.

use crate::model::product::{NewProduct, Product, ProductChanges, ProductId};
use crate::schema::fields::{
    optional_int, optional_number, optional_str, payload_object, required_number, required_str,
    sweep_unknown_fields,
};
use crate::schema::{FieldViolation, ValidationError};
use serde::Serialize;
use serde_json::Value;

const NAME_MIN_CHARS: usize = 3;
const NAME_MAX_CHARS: usize = 100;
const DESCRIPTION_MAX_CHARS: usize = 500;

const CREATE_FIELDS: &[&str] = &["name", "description", "price", "stock"];

/// Validated input for creating a product.
#[derive(Debug, Clone, PartialEq)]
pub struct ProductCreate {
    pub name: String,
    pub description: Option<String>,
    pub price: f64,
    /// Defaults to 0 when omitted.
    pub stock: i64,
}

impl ProductCreate {
    /// Validates a raw JSON payload, reporting every violated constraint.
    pub fn validate(raw: &Value) -> Result<Self, ValidationError> {
        let mut violations = Vec::new();
        let Some(map) = payload_object(raw, &mut violations) else {
            return Err(ValidationError::from_violations(violations));
        };

        sweep_unknown_fields(map, CREATE_FIELDS, &mut violations);
        let name = required_str(map, "name", NAME_MIN_CHARS, NAME_MAX_CHARS, &mut violations);
        let description = optional_str(map, "description", DESCRIPTION_MAX_CHARS, &mut violations);
        let price = required_number(map, "price", &mut violations);
        let stock = optional_int(map, "stock", &mut violations);

        if !violations.is_empty() {
            return Err(ValidationError::from_violations(violations));
        }

        Ok(Self {
            name: name.unwrap_or_default(),
            description,
            price: price.unwrap_or_default(),
            stock: stock.unwrap_or(0),
        })
    }
}

impl From<ProductCreate> for NewProduct {
    fn from(dto: ProductCreate) -> Self {
        Self {
            name: dto.name,
            description: dto.description,
            price: dto.price,
            stock: dto.stock,
        }
    }
}

/// Validated partial update for a product.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ProductUpdate {
    pub name: Option<String>,
    pub description: Option<String>,
    pub price: Option<f64>,
    pub stock: Option<i64>,
}

impl ProductUpdate {
    /// Validates a raw JSON payload, reporting every violated constraint.
    pub fn validate(raw: &Value) -> Result<Self, ValidationError> {
        let mut violations = Vec::new();
        let Some(map) = payload_object(raw, &mut violations) else {
            return Err(ValidationError::from_violations(violations));
        };

        sweep_unknown_fields(map, CREATE_FIELDS, &mut violations);
        let update = Self {
            name: match map.get("name") {
                None | Some(Value::Null) => None,
                Some(_) => required_str(map, "name", NAME_MIN_CHARS, NAME_MAX_CHARS, &mut violations),
            },
            description: optional_str(map, "description", DESCRIPTION_MAX_CHARS, &mut violations),
            price: optional_number(map, "price", &mut violations),
            stock: optional_int(map, "stock", &mut violations),
        };

        if violations.is_empty() && update == Self::default() {
            violations.push(FieldViolation::new(
                "$",
                "at least one updatable field must be provided",
            ));
        }

        if !violations.is_empty() {
            return Err(ValidationError::from_violations(violations));
        }

        Ok(update)
    }
}

impl From<ProductUpdate> for ProductChanges {
    fn from(dto: ProductUpdate) -> Self {
        Self {
            name: dto.name,
            description: dto.description,
            price: dto.price,
            stock: dto.stock,
        }
    }
}

/// Outbound product representation.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ProductDto {
    pub id: ProductId,
    pub name: String,
    pub description: Option<String>,
    pub price: f64,
    pub stock: i64,
    pub created_at_ms: i64,
}

impl From<Product> for ProductDto {
    fn from(entity: Product) -> Self {
        Self {
            id: entity.id,
            name: entity.name,
            description: entity.description,
            price: entity.price,
            stock: entity.stock,
            created_at_ms: entity.created_at_ms,
        }
    }
}
