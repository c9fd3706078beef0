//! Stock ledger service
//!
//! Single owner of all ledger mutations. Every caller goes through
//! `increment`/`decrement` with an [`AttributeKey`], so the key string is
//! built in exactly one place and increments and decrements can never drift
//! apart on key shape.
//!
//! The count update is a get-then-put with no transaction; two concurrent
//! editors hitting the same key can lose an update. That window is part of
//! the store contract, not a bug in this service.

use serde::Serialize;
use serde_json::json;
use std::sync::Arc;
use tracing::{debug, warn};

use crate::models::{AgeCategory, AttributeKey, GarmentCategory, LedgerEntry};
use crate::store::{collections, from_document, to_document, Document, DocumentStore};
use crate::Result;

/// Aggregate stock counts per attribute key
#[derive(Clone)]
pub struct StockLedger {
    store: Arc<dyn DocumentStore>,
}

/// One low-stock report row, annotated with the Portuguese labels the
/// report is rendered with
#[derive(Debug, Clone, Serialize)]
pub struct LowStockAlert {
    pub gender: String,
    pub size: String,
    pub age_type: String,
    pub category: String,
    pub count: u32,
}

impl StockLedger {
    pub fn new(store: Arc<dyn DocumentStore>) -> Self {
        Self { store }
    }

    /// Add one unit under the key, creating the entry on first sight
    pub async fn increment(
        &self,
        key: &AttributeKey,
        age_type: AgeCategory,
        category: GarmentCategory,
    ) -> Result<()> {
        let id = key.storage_key();

        match self.store.get(collections::SIZES, &id).await? {
            None => {
                let entry = LedgerEntry::first(key, age_type, category);
                self.store
                    .put(collections::SIZES, &id, to_document(&entry)?, false)
                    .await?;
                debug!(key = %id, "Ledger entry created");
            }
            Some(doc) => {
                let entry: LedgerEntry = from_document(doc)?;
                self.put_count(&id, entry.count + 1).await?;
                debug!(key = %id, count = entry.count + 1, "Ledger incremented");
            }
        }

        Ok(())
    }

    /// Remove one unit under the key, floored at zero
    ///
    /// A decrement against a key that was never incremented is a no-op: the
    /// entry is not fabricated and the count never goes negative. It is
    /// logged, because an unexpected one means the ledger has drifted.
    pub async fn decrement(&self, key: &AttributeKey) -> Result<()> {
        let id = key.storage_key();

        match self.store.get(collections::SIZES, &id).await? {
            None => {
                warn!(key = %id, "Decrement for unknown ledger key (ignored)");
            }
            Some(doc) => {
                let entry: LedgerEntry = from_document(doc)?;
                self.put_count(&id, entry.count.saturating_sub(1)).await?;
                debug!(key = %id, count = entry.count.saturating_sub(1), "Ledger decremented");
            }
        }

        Ok(())
    }

    /// All entries at or below the threshold, annotated for the report
    ///
    /// Read-only; malformed entries are skipped with a warning rather than
    /// failing the whole report.
    pub async fn scan_low(&self, threshold: u32) -> Result<Vec<LowStockAlert>> {
        let mut alerts = Vec::new();

        for (id, doc) in self.store.enumerate(collections::SIZES).await? {
            let entry: LedgerEntry = match from_document(doc) {
                Ok(entry) => entry,
                Err(err) => {
                    warn!(key = %id, error = %err, "Skipping malformed ledger entry");
                    continue;
                }
            };

            if entry.count > threshold {
                continue;
            }

            alerts.push(LowStockAlert {
                gender: entry.gender.label().to_string(),
                size: entry.size,
                age_type: entry.age_type.label().to_string(),
                category: entry.category.label().to_string(),
                count: entry.count,
            });
        }

        Ok(alerts)
    }

    async fn put_count(&self, id: &str, count: u32) -> Result<()> {
        let mut fields = Document::new();
        fields.insert("count".to_string(), json!(count));
        self.store.put(collections::SIZES, id, fields, true).await
    }
}
