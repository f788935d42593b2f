//! Route registration.
//!
//! # Responsibility
//! - Wire every endpoint to its handler; nothing else lives here.
//!
//! # Invariants
//! - Static segments (`/count`, `/email`) are registered alongside the
//!   `/{id}` captures; the router matches static paths first.

use crate::handlers::{customers, products};
use crate::state::AppState;
use axum::routing::get;
use axum::{Json, Router};
use serde_json::{json, Value};

pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/", get(root))
        .route("/health", get(health))
        .route("/customers", get(customers::list).post(customers::create))
        .route("/customers/count", get(customers::count))
        .route("/customers/email/:email", get(customers::get_by_email))
        .route(
            "/customers/:id",
            get(customers::get)
                .put(customers::update)
                .delete(customers::delete),
        )
        .route("/products", get(products::list).post(products::create))
        .route("/products/count", get(products::count))
        .route(
            "/products/:id",
            get(products::get)
                .put(products::update)
                .delete(products::delete),
        )
        .with_state(state)
}

async fn root() -> Json<Value> {
    Json(json!({
        "name": "storefront",
        "version": env!("CARGO_PKG_VERSION"),
        "status": "online",
    }))
}

async fn health() -> Json<Value> {
    Json(json!({ "status": "healthy" }))
}
