//! Product route handlers.

use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
};
use serde_json::{Value, json};

use shopfront_core::{Product, ProductId};

use crate::error::{ApiError, Result};
use crate::state::AppState;
use crate::store::{NewProduct, ProductPatch};

/// Parse a path segment as a product id.
///
/// Non-numeric ids behave like ids that match nothing: the client gets a
/// 404, not a 400.
fn parse_id(raw: &str) -> Result<ProductId> {
    raw.parse::<i64>()
        .map(ProductId::new)
        .map_err(|_| ApiError::NotFound("Product".to_string()))
}

/// `GET /api/products` - the full collection in insertion order.
pub async fn index(State(state): State<AppState>) -> Json<Vec<Product>> {
    Json(state.store().list_products())
}

/// `GET /api/products/{id}`
pub async fn show(State(state): State<AppState>, Path(id): Path<String>) -> Result<Json<Product>> {
    let id = parse_id(&id)?;
    state
        .store()
        .get_product(id)
        .map(Json)
        .ok_or_else(|| ApiError::NotFound("Product".to_string()))
}

/// `POST /api/products`
pub async fn create(
    State(state): State<AppState>,
    Json(payload): Json<NewProduct>,
) -> Result<(StatusCode, Json<Product>)> {
    let product = state.store().create_product(payload)?;
    tracing::info!(product_id = %product.id, "Product created");
    Ok((StatusCode::CREATED, Json(product)))
}

/// `PUT /api/products/{id}`
///
/// 404 when the product does not exist; updates never fabricate an entity
/// from defaults.
pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(payload): Json<ProductPatch>,
) -> Result<Json<Product>> {
    let id = parse_id(&id)?;
    let product = state.store().update_product(id, payload)?;
    Ok(Json(product))
}

/// `DELETE /api/products/{id}`
pub async fn destroy(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<Value>> {
    let id = parse_id(&id)?;
    if state.store().delete_product(id) {
        Ok(Json(json!({ "message": "Product deleted successfully" })))
    } else {
        Err(ApiError::NotFound("Product".to_string()))
    }
}
