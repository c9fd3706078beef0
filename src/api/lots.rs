//! Lot table endpoints: listing and free-text field edits

use axum::{
    extract::{Path, State},
    http::StatusCode,
    routing::{get, put},
    Json, Router,
};
use serde::{Deserialize, Serialize};

use crate::error::ApiResult;
use crate::models::Lot;
use crate::AppState;

/// Lot with its numeric id, for list responses
#[derive(Debug, Serialize)]
pub struct LotRow {
    pub id: u32,
    #[serde(flatten)]
    pub lot: Lot,
}

/// Body of a field edit request
#[derive(Debug, Deserialize)]
pub struct FieldEdit {
    pub value: String,
}

/// GET /lotes
pub async fn list_lots(State(state): State<AppState>) -> ApiResult<Json<Vec<LotRow>>> {
    let lots = state.lifecycle.list_lots().await?;
    Ok(Json(lots.into_iter().map(|(id, lot)| LotRow { id, lot }).collect()))
}

/// GET /lotes/free: filled lots not reserved for any client
pub async fn list_free_lots(State(state): State<AppState>) -> ApiResult<Json<Vec<LotRow>>> {
    let lots = state.lifecycle.free_lots().await?;
    Ok(Json(lots.into_iter().map(|(id, lot)| LotRow { id, lot }).collect()))
}

/// PUT /lotes/:id/description, the only edit that touches the ledger
pub async fn edit_description(
    State(state): State<AppState>,
    Path(id): Path<u32>,
    Json(edit): Json<FieldEdit>,
) -> ApiResult<StatusCode> {
    state.lifecycle.edit_description(id, &edit.value).await?;
    Ok(StatusCode::NO_CONTENT)
}

/// PUT /lotes/:id/trade
pub async fn edit_trade(
    State(state): State<AppState>,
    Path(id): Path<u32>,
    Json(edit): Json<FieldEdit>,
) -> ApiResult<StatusCode> {
    state.lifecycle.edit_trade(id, &edit.value).await?;
    Ok(StatusCode::NO_CONTENT)
}

/// Build lot routes
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/lotes", get(list_lots))
        .route("/lotes/free", get(list_free_lots))
        .route("/lotes/:id/description", put(edit_description))
        .route("/lotes/:id/trade", put(edit_trade))
}
