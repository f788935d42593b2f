//! Customer business rules.
//!
//! # Responsibility
//! - Enforce customer domain rules (unique email) before persistence.
//! - Provide the DTO-shaped CRUD surface the transport layer calls.
//!
//! # Invariants
//! - Email uniqueness is pre-checked before create and before any update
//!   that changes the email, so rejections leave storage untouched.

use crate::model::customer::CustomerId;
use crate::repo::customer_repo::{CustomerListQuery, CustomerRepository};
use crate::schema::customer::{CustomerCreate, CustomerDto, CustomerUpdate};
use crate::service::{normalize_limit, re_signal, ServiceError, ServiceResult};

const ENTITY: &str = "customer";

/// Caller-facing list parameters, normalized before hitting the repository.
#[derive(Debug, Clone, Default)]
pub struct CustomerListParams {
    pub name_contains: Option<String>,
    pub skip: u32,
    pub limit: Option<u32>,
}

/// Business-rule service for customers.
pub struct CustomerService<R: CustomerRepository> {
    repo: R,
}

impl<R: CustomerRepository> CustomerService<R> {
    pub fn new(repo: R) -> Self {
        Self { repo }
    }

    /// Creates a customer after checking the unique-email rule.
    pub fn create(&self, input: CustomerCreate) -> ServiceResult<CustomerDto> {
        self.check_email_free(&input.email)?;

        let created = self
            .repo
            .create(&input.into())
            .map_err(|err| re_signal(ENTITY, err))?;
        Ok(created.into())
    }

    pub fn get(&self, id: CustomerId) -> ServiceResult<CustomerDto> {
        let customer = self
            .repo
            .get(id)
            .map_err(|err| re_signal(ENTITY, err))?
            .ok_or(ServiceError::NotFound {
                entity: ENTITY,
                key: id.to_string(),
            })?;
        Ok(customer.into())
    }

    /// Looks a customer up by its natural key.
    pub fn get_by_email(&self, email: &str) -> ServiceResult<CustomerDto> {
        let customer = self
            .repo
            .find_by_email(email)
            .map_err(|err| re_signal(ENTITY, err))?
            .ok_or_else(|| ServiceError::NotFound {
                entity: ENTITY,
                key: email.to_string(),
            })?;
        Ok(customer.into())
    }

    pub fn list(&self, params: CustomerListParams) -> ServiceResult<Vec<CustomerDto>> {
        let query = CustomerListQuery {
            name_contains: params.name_contains,
            limit: Some(normalize_limit(params.limit)),
            offset: params.skip,
        };
        let customers = self
            .repo
            .list(&query)
            .map_err(|err| re_signal(ENTITY, err))?;
        Ok(customers.into_iter().map(Into::into).collect())
    }

    /// Applies a partial update; an email change re-runs the uniqueness rule.
    pub fn update(&self, id: CustomerId, input: CustomerUpdate) -> ServiceResult<CustomerDto> {
        if let Some(new_email) = &input.email {
            let current = self
                .repo
                .get(id)
                .map_err(|err| re_signal(ENTITY, err))?
                .ok_or(ServiceError::NotFound {
                    entity: ENTITY,
                    key: id.to_string(),
                })?;
            if *new_email != current.email {
                self.check_email_free(new_email)?;
            }
        }

        let updated = self
            .repo
            .update(id, &input.into())
            .map_err(|err| re_signal(ENTITY, err))?;
        Ok(updated.into())
    }

    pub fn delete(&self, id: CustomerId) -> ServiceResult<()> {
        self.repo.delete(id).map_err(|err| re_signal(ENTITY, err))
    }

    pub fn count(&self) -> ServiceResult<u64> {
        self.repo.count().map_err(|err| re_signal(ENTITY, err))
    }

    fn check_email_free(&self, email: &str) -> ServiceResult<()> {
        let existing = self
            .repo
            .find_by_email(email)
            .map_err(|err| re_signal(ENTITY, err))?;
        match existing {
            Some(_) => Err(ServiceError::RuleViolation {
                rule: "customer_email_unique",
                detail: format!("email `{email}` is already registered"),
            }),
            None => Ok(()),
        }
    }
}
