//! Low-stock report endpoint

use axum::{
    extract::{Query, State},
    routing::get,
    Json, Router,
};
use serde::{Deserialize, Serialize};

use crate::error::ApiResult;
use crate::services::LowStockAlert;
use crate::AppState;

#[derive(Debug, Deserialize)]
pub struct StockQuery {
    /// Override the configured low-stock threshold for this request
    pub threshold: Option<u32>,
}

#[derive(Debug, Serialize)]
pub struct LowStockResponse {
    pub threshold: u32,
    pub alerts: Vec<LowStockAlert>,
}

/// GET /stock/low
pub async fn low_stock(
    State(state): State<AppState>,
    Query(query): Query<StockQuery>,
) -> ApiResult<Json<LowStockResponse>> {
    let threshold = query.threshold.unwrap_or(state.low_stock_limit);
    let alerts = state.ledger.scan_low(threshold).await?;
    Ok(Json(LowStockResponse { threshold, alerts }))
}

/// Build stock report routes
pub fn routes() -> Router<AppState> {
    Router::new().route("/stock/low", get(low_stock))
}
