//! Assignment and delivery endpoints

use axum::{
    extract::{Path, State},
    http::StatusCode,
    routing::{get, post},
    Json, Router,
};
use serde::Deserialize;
use serde_json::json;

use crate::api::lots::LotRow;
use crate::error::ApiResult;
use crate::AppState;

#[derive(Debug, Deserialize)]
pub struct AssignRequest {
    pub lote: u32,
    pub client: String,
}

#[derive(Debug, Deserialize)]
pub struct DeliverRequest {
    pub lote: u32,
}

#[derive(Debug, Deserialize)]
pub struct DeliverAllRequest {
    pub client: String,
}

/// POST /assign: reserve a lot for a client
pub async fn assign(
    State(state): State<AppState>,
    Json(request): Json<AssignRequest>,
) -> ApiResult<StatusCode> {
    state.lifecycle.assign(request.lote, &request.client).await?;
    Ok(StatusCode::NO_CONTENT)
}

/// POST /deliver: confirm delivery of one lot
pub async fn deliver(
    State(state): State<AppState>,
    Json(request): Json<DeliverRequest>,
) -> ApiResult<StatusCode> {
    state.lifecycle.deliver(request.lote).await?;
    Ok(StatusCode::NO_CONTENT)
}

/// POST /deliver-all: deliver every pending lot of a client
pub async fn deliver_all(
    State(state): State<AppState>,
    Json(request): Json<DeliverAllRequest>,
) -> ApiResult<Json<serde_json::Value>> {
    let delivered = state.lifecycle.deliver_all(&request.client).await?;
    Ok(Json(json!({ "delivered": delivered })))
}

/// GET /clients/:id/pending: lots assigned to a client awaiting delivery
pub async fn pending(
    State(state): State<AppState>,
    Path(client_id): Path<String>,
) -> ApiResult<Json<Vec<LotRow>>> {
    let lots = state.lifecycle.pending_for(&client_id).await?;
    Ok(Json(lots.into_iter().map(|(id, lot)| LotRow { id, lot }).collect()))
}

/// Build assignment/delivery routes
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/assign", post(assign))
        .route("/deliver", post(deliver))
        .route("/deliver-all", post(deliver_all))
        .route("/clients/:id/pending", get(pending))
}
