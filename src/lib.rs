//! roupeiro: donated apparel lot manager
//!
//! Free-text lot descriptions are classified into canonical attributes
//! (size, gender, age category, garment category), and those attributes
//! drive an aggregate stock ledger with low-stock alerting. The ledger is
//! reconciled incrementally on every description edit and delivery, never
//! re-derived from scratch.

pub mod api;
pub mod config;
pub mod error;
pub mod extract;
pub mod models;
pub mod services;
pub mod store;

pub use crate::config::Config;
pub use crate::error::{ApiError, ApiResult, Error, Result};

use axum::Router;
use chrono::{DateTime, Utc};
use std::sync::Arc;
use tower_http::trace::TraceLayer;

use crate::extract::Extractor;
use crate::services::{LotLifecycle, Reconciler, StockLedger};
use crate::store::DocumentStore;

/// Application state shared across handlers
#[derive(Clone)]
pub struct AppState {
    /// Lot/client lifecycle operations; sole caller of the reconciler
    pub lifecycle: LotLifecycle,
    /// Stock ledger, exposed directly only for the read-only report
    pub ledger: StockLedger,
    /// Configured low-stock report threshold
    pub low_stock_limit: u32,
    /// Service startup timestamp for uptime tracking
    pub startup_time: DateTime<Utc>,
}

impl AppState {
    pub fn new(store: Arc<dyn DocumentStore>, config: &Config) -> Self {
        let ledger = StockLedger::new(store.clone());
        let reconciler = Reconciler::new(Extractor::new(config.shoe_band()), ledger.clone());
        let lifecycle = LotLifecycle::new(store, reconciler, config.max_lots);

        Self {
            lifecycle,
            ledger,
            low_stock_limit: config.low_stock_limit,
            startup_time: Utc::now(),
        }
    }
}

/// Build application router
pub fn build_router(state: AppState) -> Router {
    Router::new()
        .merge(api::lots::routes())
        .merge(api::clients::routes())
        .merge(api::assignment::routes())
        .merge(api::history::routes())
        .merge(api::stock::routes())
        .merge(api::health::routes())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
