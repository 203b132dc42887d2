//! HTTP route handlers for the API.
//!
//! # Route Structure
//!
//! ```text
//! GET    /health                - Health check
//!
//! # Products
//! GET    /api/products          - List all products
//! GET    /api/products/{id}     - Product by id
//! POST   /api/products          - Create product
//! PUT    /api/products/{id}     - Partial update
//! DELETE /api/products/{id}     - Delete product
//!
//! # Orders
//! POST   /api/orders            - Create order
//! GET    /api/orders/{id}       - Order by id
//!
//! # Categories
//! GET    /api/categories        - Static category set
//! ```
//!
//! Anything else falls through to a JSON 404.

pub mod categories;
pub mod orders;
pub mod products;

use axum::{
    Json, Router,
    http::StatusCode,
    routing::get,
};
use serde_json::json;

use crate::state::AppState;

/// Create the product routes router.
pub fn product_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(products::index).post(products::create))
        .route(
            "/{id}",
            get(products::show)
                .put(products::update)
                .delete(products::destroy),
        )
}

/// Create the order routes router.
pub fn order_routes() -> Router<AppState> {
    Router::new()
        .route("/", axum::routing::post(orders::create))
        .route("/{id}", get(orders::show))
}

/// Create all routes for the API.
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/health", get(health))
        .nest("/api/products", product_routes())
        .nest("/api/orders", order_routes())
        .route("/api/categories", get(categories::index))
        .fallback(not_found)
}

/// Liveness health check endpoint.
async fn health() -> &'static str {
    "healthy"
}

/// JSON 404 for unmatched routes.
async fn not_found() -> (StatusCode, Json<serde_json::Value>) {
    (
        StatusCode::NOT_FOUND,
        Json(json!({ "message": "Route not found" })),
    )
}
