//! Order route handlers.

use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
};
use serde::Serialize;

use shopfront_core::{Order, OrderId};

use crate::error::{ApiError, Result};
use crate::state::AppState;
use crate::store::NewOrder;

/// Response body for a created order.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderCreated {
    pub message: &'static str,
    pub order_id: OrderId,
    pub order: Order,
}

/// `POST /api/orders`
pub async fn create(
    State(state): State<AppState>,
    Json(payload): Json<NewOrder>,
) -> Result<(StatusCode, Json<OrderCreated>)> {
    let order = state.store().create_order(payload)?;
    tracing::info!(order_id = %order.id, total = %order.total, "Order created");
    Ok((
        StatusCode::CREATED,
        Json(OrderCreated {
            message: "Order created successfully",
            order_id: order.id,
            order,
        }),
    ))
}

/// `GET /api/orders/{id}`
pub async fn show(State(state): State<AppState>, Path(id): Path<String>) -> Result<Json<Order>> {
    let id = id
        .parse::<i64>()
        .map(OrderId::new)
        .map_err(|_| ApiError::NotFound("Order".to_string()))?;
    state
        .store()
        .get_order(id)
        .map(Json)
        .ok_or_else(|| ApiError::NotFound("Order".to_string()))
}
