//! Product endpoints.

use crate::error::ApiError;
use crate::state::AppState;
use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::Json;
use serde::Deserialize;
use serde_json::{json, Value};
use storefront_core::{
    ProductCreate, ProductDto, ProductListParams, ProductService, ProductUpdate,
    SqliteProductRepository,
};

/// Query parameters for `GET /products`.
#[derive(Debug, Default, Deserialize)]
pub struct ListQueryParams {
    pub skip: Option<u32>,
    pub limit: Option<u32>,
    /// Substring filter on product name.
    pub name: Option<String>,
    pub min_price: Option<f64>,
    pub max_price: Option<f64>,
}

pub async fn create(
    State(state): State<AppState>,
    Json(body): Json<Value>,
) -> Result<(StatusCode, Json<ProductDto>), ApiError> {
    let input = ProductCreate::validate(&body)?;
    let conn = state.conn();
    let service = ProductService::new(SqliteProductRepository::new(&conn));
    let created = service.create(input)?;
    Ok((StatusCode::CREATED, Json(created)))
}

pub async fn list(
    State(state): State<AppState>,
    Query(params): Query<ListQueryParams>,
) -> Result<Json<Vec<ProductDto>>, ApiError> {
    let conn = state.conn();
    let service = ProductService::new(SqliteProductRepository::new(&conn));
    let products = service.list(ProductListParams {
        name_contains: params.name,
        min_price: params.min_price,
        max_price: params.max_price,
        skip: params.skip.unwrap_or(0),
        limit: params.limit,
    })?;
    Ok(Json(products))
}

pub async fn count(State(state): State<AppState>) -> Result<Json<Value>, ApiError> {
    let conn = state.conn();
    let service = ProductService::new(SqliteProductRepository::new(&conn));
    let total = service.count()?;
    Ok(Json(json!({ "count": total })))
}

pub async fn get(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<Json<ProductDto>, ApiError> {
    let conn = state.conn();
    let service = ProductService::new(SqliteProductRepository::new(&conn));
    let product = service.get(id)?;
    Ok(Json(product))
}

pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    Json(body): Json<Value>,
) -> Result<Json<ProductDto>, ApiError> {
    let input = ProductUpdate::validate(&body)?;
    let conn = state.conn();
    let service = ProductService::new(SqliteProductRepository::new(&conn));
    let updated = service.update(id, input)?;
    Ok(Json(updated))
}

pub async fn delete(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<StatusCode, ApiError> {
    let conn = state.conn();
    let service = ProductService::new(SqliteProductRepository::new(&conn));
    service.delete(id)?;
    Ok(StatusCode::NO_CONTENT)
}
