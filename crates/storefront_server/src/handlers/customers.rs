//! Customer endpoints.

use crate::error::ApiError;
use crate::state::AppState;
use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::Json;
use serde::Deserialize;
use serde_json::{json, Value};
use storefront_core::{
    CustomerCreate, CustomerDto, CustomerListParams, CustomerService, CustomerUpdate,
    SqliteCustomerRepository,
};

/// Query parameters for `GET /customers`.
#[derive(Debug, Default, Deserialize)]
pub struct ListQueryParams {
    pub skip: Option<u32>,
    pub limit: Option<u32>,
    /// Substring filter on customer name.
    pub name: Option<String>,
}

pub async fn create(
    State(state): State<AppState>,
    Json(body): Json<Value>,
) -> Result<(StatusCode, Json<CustomerDto>), ApiError> {
    let input = CustomerCreate::validate(&body)?;
    let conn = state.conn();
    let service = CustomerService::new(SqliteCustomerRepository::new(&conn));
    let created = service.create(input)?;
    Ok((StatusCode::CREATED, Json(created)))
}

pub async fn list(
    State(state): State<AppState>,
    Query(params): Query<ListQueryParams>,
) -> Result<Json<Vec<CustomerDto>>, ApiError> {
    let conn = state.conn();
    let service = CustomerService::new(SqliteCustomerRepository::new(&conn));
    let customers = service.list(CustomerListParams {
        name_contains: params.name,
        skip: params.skip.unwrap_or(0),
        limit: params.limit,
    })?;
    Ok(Json(customers))
}

pub async fn count(State(state): State<AppState>) -> Result<Json<Value>, ApiError> {
    let conn = state.conn();
    let service = CustomerService::new(SqliteCustomerRepository::new(&conn));
    let total = service.count()?;
    Ok(Json(json!({ "count": total })))
}

pub async fn get(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<Json<CustomerDto>, ApiError> {
    let conn = state.conn();
    let service = CustomerService::new(SqliteCustomerRepository::new(&conn));
    let customer = service.get(id)?;
    Ok(Json(customer))
}

pub async fn get_by_email(
    State(state): State<AppState>,
    Path(email): Path<String>,
) -> Result<Json<CustomerDto>, ApiError> {
    let conn = state.conn();
    let service = CustomerService::new(SqliteCustomerRepository::new(&conn));
    let customer = service.get_by_email(&email)?;
    Ok(Json(customer))
}

pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    Json(body): Json<Value>,
) -> Result<Json<CustomerDto>, ApiError> {
    let input = CustomerUpdate::validate(&body)?;
    let conn = state.conn();
    let service = CustomerService::new(SqliteCustomerRepository::new(&conn));
    let updated = service.update(id, input)?;
    Ok(Json(updated))
}

pub async fn delete(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<StatusCode, ApiError> {
    let conn = state.conn();
    let service = CustomerService::new(SqliteCustomerRepository::new(&conn));
    service.delete(id)?;
    Ok(StatusCode::NO_CONTENT)
}
