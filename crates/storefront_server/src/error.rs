//! Transport-level error translation.
//!
//! The router is the only layer allowed to turn an error kind into a status
//! code, and the mapping is fixed: validation -> 400, business rule -> 422,
//! not found -> 404, storage fault -> 500. Storage detail is logged, never
//! put in a response body.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use log::error;
use serde_json::json;
use storefront_core::{ServiceError, ValidationError};

/// API error carrying its own HTTP semantics.
#[derive(Debug)]
pub enum ApiError {
    Validation(ValidationError),
    RuleViolation { rule: &'static str, detail: String },
    NotFound { entity: &'static str, key: String },
    Internal,
}

impl From<ValidationError> for ApiError {
    fn from(err: ValidationError) -> Self {
        Self::Validation(err)
    }
}

impl From<ServiceError> for ApiError {
    fn from(err: ServiceError) -> Self {
        match err {
            ServiceError::RuleViolation { rule, detail } => Self::RuleViolation { rule, detail },
            ServiceError::NotFound { entity, key } => Self::NotFound { entity, key },
            ServiceError::Storage(storage_err) => {
                error!(
                    "event=storage_error module=server status=error error={}",
                    storage_err
                );
                Self::Internal
            }
        }
    }
}

impl ApiError {
    pub fn status(&self) -> StatusCode {
        match self {
            Self::Validation(_) => StatusCode::BAD_REQUEST,
            Self::RuleViolation { .. } => StatusCode::UNPROCESSABLE_ENTITY,
            Self::NotFound { .. } => StatusCode::NOT_FOUND,
            Self::Internal => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        let body = match self {
            Self::Validation(err) => json!({
                "error": "validation_error",
                "message": "request payload failed validation",
                "details": err.violations,
            }),
            Self::RuleViolation { rule, detail } => json!({
                "error": "business_rule_violation",
                "message": detail,
                "rule": rule,
            }),
            Self::NotFound { entity, key } => json!({
                "error": "not_found",
                "message": format!("{entity} not found: {key}"),
            }),
            Self::Internal => json!({
                "error": "internal_error",
                "message": "internal server error",
            }),
        };
        (status, Json(body)).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::ApiError;
    use axum::http::StatusCode;
    use storefront_core::{FieldViolation, RepoError, ServiceError, ValidationError};

    #[test]
    fn validation_maps_to_bad_request() {
        let err = ApiError::from(ValidationError {
            violations: vec![FieldViolation::new("name", "is required")],
        });
        assert_eq!(err.status(), StatusCode::BAD_REQUEST);
    }

    #[test]
    fn rule_violation_maps_to_unprocessable() {
        let err = ApiError::from(ServiceError::RuleViolation {
            rule: "product_price_non_negative",
            detail: "price must be >= 0, got -5".to_string(),
        });
        assert_eq!(err.status(), StatusCode::UNPROCESSABLE_ENTITY);
    }

    #[test]
    fn not_found_maps_to_404() {
        let err = ApiError::from(ServiceError::NotFound {
            entity: "customer",
            key: "999".to_string(),
        });
        assert_eq!(err.status(), StatusCode::NOT_FOUND);
    }

    #[test]
    fn storage_fault_maps_to_500_without_detail() {
        let err = ApiError::from(ServiceError::Storage(RepoError::InvalidData(
            "secret internals".to_string(),
        )));
        assert_eq!(err.status(), StatusCode::INTERNAL_SERVER_ERROR);
        assert!(matches!(err, ApiError::Internal));
    }
}
