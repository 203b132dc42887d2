//! Category route handlers.

use axum::{Json, extract::State};

use shopfront_core::Category;

use crate::state::AppState;

/// `GET /api/categories` - the static category set. Always succeeds.
pub async fn index(State(state): State<AppState>) -> Json<Vec<Category>> {
    Json(state.store().categories())
}
