//! Domain models for roupeiro

pub mod attributes;
pub mod client;
pub mod history;
pub mod ledger;
pub mod lot;

pub use attributes::{AgeCategory, AttributeKey, AttributeTuple, GarmentCategory, Gender};
pub use client::Client;
pub use history::HistoryRecord;
pub use ledger::LedgerEntry;
pub use lot::Lot;
