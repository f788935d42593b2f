//! Customer DTOs and boundary validation.
//!
//! # Responsibility
//! - Shape customer data crossing the transport boundary in both directions.
//!
//! # Invariants
//! - `CustomerCreate`/`CustomerUpdate` carry only caller-suppliable fields.
//! - `CustomerDto` carries exactly the fields safe to expose.

use crate::model::customer::{Customer, CustomerChanges, CustomerId, NewCustomer};
use crate::schema::fields::{
    optional_email, optional_str, payload_object, required_email, required_str,
    sweep_unknown_fields,
};
use crate::schema::{FieldViolation, ValidationError};
use serde::Serialize;
use serde_json::Value;

const NAME_MIN_CHARS: usize = 3;
const NAME_MAX_CHARS: usize = 100;
const PHONE_MAX_CHARS: usize = 20;
const ADDRESS_MAX_CHARS: usize = 200;

const CREATE_FIELDS: &[&str] = &["name", "email", "phone", "address"];

/// Validated input for creating a customer.
#[derive(Debug, Clone, PartialEq)]
pub struct CustomerCreate {
    pub name: String,
    pub email: String,
    pub phone: Option<String>,
    pub address: Option<String>,
}

impl CustomerCreate {
    /// Validates a raw JSON payload, reporting every violated constraint.
    pub fn validate(raw: &Value) -> Result<Self, ValidationError> {
        let mut violations = Vec::new();
        let Some(map) = payload_object(raw, &mut violations) else {
            return Err(ValidationError::from_violations(violations));
        };

        sweep_unknown_fields(map, CREATE_FIELDS, &mut violations);
        let name = required_str(map, "name", NAME_MIN_CHARS, NAME_MAX_CHARS, &mut violations);
        let email = required_email(map, "email", &mut violations);
        let phone = optional_str(map, "phone", PHONE_MAX_CHARS, &mut violations);
        let address = optional_str(map, "address", ADDRESS_MAX_CHARS, &mut violations);

        if !violations.is_empty() {
            return Err(ValidationError::from_violations(violations));
        }

        // Required extractors only return None alongside a violation.
        Ok(Self {
            name: name.unwrap_or_default(),
            email: email.unwrap_or_default(),
            phone,
            address,
        })
    }
}

impl From<CustomerCreate> for NewCustomer {
    fn from(dto: CustomerCreate) -> Self {
        Self {
            name: dto.name,
            email: dto.email,
            phone: dto.phone,
            address: dto.address,
        }
    }
}

/// Validated partial update for a customer.
///
/// Only supplied fields change; a payload with no recognized field is
/// rejected at this boundary.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CustomerUpdate {
    pub name: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub address: Option<String>,
}

impl CustomerUpdate {
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
            email: optional_email(map, "email", &mut violations),
            phone: optional_str(map, "phone", PHONE_MAX_CHARS, &mut violations),
            address: optional_str(map, "address", ADDRESS_MAX_CHARS, &mut violations),
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

impl From<CustomerUpdate> for CustomerChanges {
    fn from(dto: CustomerUpdate) -> Self {
        Self {
            name: dto.name,
            email: dto.email,
            phone: dto.phone,
            address: dto.address,
        }
    }
}

/// Outbound customer representation.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CustomerDto {
    pub id: CustomerId,
    pub name: String,
    pub email: String,
    pub phone: Option<String>,
    pub address: Option<String>,
    pub created_at_ms: i64,
}

impl From<Customer> for CustomerDto {
    fn from(entity: Customer) -> Self {
        Self {
            id: entity.id,
            name: entity.name,
            email: entity.email,
            phone: entity.phone,
            address: entity.address,
            created_at_ms: entity.created_at_ms,
        }
    }
}
