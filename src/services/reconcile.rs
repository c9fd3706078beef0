//! Reconciliation engine
//!
//! Computes and applies the minimal ledger delta when a lot description
//! changes state. Both texts are extracted before anything is mutated, so a
//! failed extraction can never leave a half-applied update. A failure
//! *between* the decrement and increment of a changed key is a different
//! story: there is no rollback, the caller surfaces the store error and the
//! ledger is short one unit until someone re-edits.

use tracing::debug;

use crate::extract::Extractor;
use crate::models::AttributeTuple;
use crate::services::StockLedger;
use crate::Result;

/// Applies description-edit and delivery deltas to the stock ledger
#[derive(Clone)]
pub struct Reconciler {
    extractor: Extractor,
    ledger: StockLedger,
}

impl Reconciler {
    pub fn new(extractor: Extractor, ledger: StockLedger) -> Self {
        Self { extractor, ledger }
    }

    pub fn extractor(&self) -> &Extractor {
        &self.extractor
    }

    /// Reconcile the ledger for one description edit
    ///
    /// Four cases on the (old, new) attribute keys: removed → decrement,
    /// added → increment, changed → decrement then increment, unchanged or
    /// never present → nothing. Must be called exactly once per description
    /// edit, and never for trade edits.
    pub async fn reconcile(&self, old_text: &str, new_text: &str) -> Result<()> {
        let old = self.extractor.extract(old_text);
        let new = self.extractor.extract(new_text);

        match (old, new) {
            (Some(old), None) => {
                debug!(key = %old.key().storage_key(), "Attributes removed");
                self.ledger.decrement(&old.key()).await?;
            }
            (None, Some(new)) => {
                debug!(key = %new.key().storage_key(), "Attributes added");
                self.ledger
                    .increment(&new.key(), new.age_category, new.garment_category)
                    .await?;
            }
            (Some(old), Some(new)) => {
                if old.key() != new.key() {
                    debug!(
                        from = %old.key().storage_key(),
                        to = %new.key().storage_key(),
                        "Attributes changed"
                    );
                    self.ledger.decrement(&old.key()).await?;
                    self.ledger
                        .increment(&new.key(), new.age_category, new.garment_category)
                        .await?;
                }
            }
            (None, None) => {}
        }

        Ok(())
    }

    /// One unit leaves inventory at delivery
    ///
    /// Not an old/new reconciliation: the lot is leaving entirely, so the
    /// current description's key is decremented exactly once. Returns the
    /// extracted tuple so the caller can snapshot it into history.
    pub async fn decrement_on_delivery(&self, text: &str) -> Result<Option<AttributeTuple>> {
        let tuple = self.extractor.extract(text);

        if let Some(tuple) = &tuple {
            self.ledger.decrement(&tuple.key()).await?;
        }

        Ok(tuple)
    }
}
