//! Delivery history endpoint

use axum::{extract::State, routing::get, Json, Router};

use crate::error::ApiResult;
use crate::services::HistoryView;
use crate::AppState;

/// GET /history
pub async fn list_history(State(state): State<AppState>) -> ApiResult<Json<Vec<HistoryView>>> {
    let history = state.lifecycle.list_history().await?;
    Ok(Json(history))
}

/// Build history routes
pub fn routes() -> Router<AppState> {
    Router::new().route("/history", get(list_history))
}
