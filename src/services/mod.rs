//! Service layer: stock ledger, reconciliation engine, lot lifecycle

pub mod ledger;
pub mod lifecycle;
pub mod reconcile;

pub use ledger::{LowStockAlert, StockLedger};
pub use lifecycle::{HistoryView, LotLifecycle};
pub use reconcile::Reconciler;
