//! Lot lifecycle controller
//!
//! Orchestrates lot state transitions (unfilled, filled, assigned,
//! delivered) and is the only caller of the reconciliation engine. Each
//! operation runs to completion as one task; there is no retry and no
//! compensating transaction, so a store failure mid-operation is surfaced
//! to the caller as-is.
//!
//! Delivery archives: decrement the ledger once, snapshot to history, then
//! delete the lot record.

use chrono::Utc;
use serde::Serialize;
use std::sync::Arc;
use tracing::{info, warn};
use uuid::Uuid;

use crate::models::{AttributeTuple, Client, HistoryRecord, Lot};
use crate::services::Reconciler;
use crate::store::{collections, from_document, to_document, Document, DocumentStore};
use crate::{Error, Result};

/// Name shown for history rows whose client no longer exists
const UNKNOWN_CLIENT: &str = "Desconhecido";

/// Lot and client lifecycle operations over the document store
#[derive(Clone)]
pub struct LotLifecycle {
    store: Arc<dyn DocumentStore>,
    reconciler: Reconciler,
    max_lots: u32,
}

/// History row with the client name resolved for display
#[derive(Debug, Clone, Serialize)]
pub struct HistoryView {
    pub client_name: String,
    #[serde(flatten)]
    pub record: HistoryRecord,
}

impl LotLifecycle {
    pub fn new(store: Arc<dyn DocumentStore>, reconciler: Reconciler, max_lots: u32) -> Self {
        Self {
            store,
            reconciler,
            max_lots,
        }
    }

    /// Derive the attribute tuple of arbitrary description text
    pub fn extract_attributes(&self, text: &str) -> Option<AttributeTuple> {
        self.reconciler.extractor().extract(text)
    }

    // ========================================================================
    // Lots
    // ========================================================================

    /// Edit a lot's description
    ///
    /// Reconciles the ledger against the previous description first, then
    /// persists, or deletes the record instead when both free-text fields
    /// are now empty.
    pub async fn edit_description(&self, id: u32, new_text: &str) -> Result<()> {
        self.check_lot_id(id)?;
        let new_text = new_text.trim();

        let lot = self.load_lot(id).await?.unwrap_or_default();
        self.check_not_delivered(id, &lot)?;

        self.reconciler.reconcile(&lot.description, new_text).await?;

        let mut updated = lot;
        updated.description = new_text.to_string();
        if updated.is_empty_shell() {
            // Nothing left in the record; delete instead of keeping a shell
            self.store
                .delete(collections::LOTES, &id.to_string())
                .await?;
            info!(lote = id, "Empty lot record removed");
        } else {
            self.put_field(id, "description", new_text).await?;
        }

        Ok(())
    }

    /// Edit a lot's trade field; no attribute semantics, so no ledger effect
    pub async fn edit_trade(&self, id: u32, new_trade: &str) -> Result<()> {
        self.check_lot_id(id)?;
        let new_trade = new_trade.trim();

        let lot = self.load_lot(id).await?.unwrap_or_default();
        self.check_not_delivered(id, &lot)?;

        let mut updated = lot;
        updated.trade = new_trade.to_string();
        if updated.is_empty_shell() {
            self.store
                .delete(collections::LOTES, &id.to_string())
                .await?;
            info!(lote = id, "Empty lot record removed");
        } else {
            self.put_field(id, "trade", new_trade).await?;
        }

        Ok(())
    }

    /// Reserve a lot for a client; attributes are unchanged, so the ledger
    /// is untouched
    pub async fn assign(&self, lot_id: u32, client_id: &str) -> Result<()> {
        self.check_lot_id(lot_id)?;

        if self.load_lot(lot_id).await?.is_none() {
            return Err(Error::NotFound(format!("Lote {lot_id}")));
        }
        if self
            .store
            .get(collections::CLIENTS, client_id)
            .await?
            .is_none()
        {
            return Err(Error::NotFound(format!("Client {client_id}")));
        }

        let mut fields = Document::new();
        fields.insert(
            "assignedClient".to_string(),
            serde_json::Value::String(client_id.to_string()),
        );
        fields.insert("delivered".to_string(), serde_json::Value::Bool(false));
        self.store
            .put(collections::LOTES, &lot_id.to_string(), fields, true)
            .await?;

        info!(lote = lot_id, client = %client_id, "Lot assigned");
        Ok(())
    }

    /// Deliver a lot: one unit leaves inventory
    ///
    /// Order matters for the failure mode: the ledger decrement happens
    /// first, the history snapshot second, the lot deletion last. A crash in
    /// between leaves history without deletion; visible, and resolved by
    /// retrying the delivery.
    pub async fn deliver(&self, id: u32) -> Result<()> {
        let lot = self
            .load_lot(id)
            .await?
            .ok_or_else(|| Error::NotFound(format!("Lote {id}")))?;

        let tuple = self
            .reconciler
            .decrement_on_delivery(&lot.description)
            .await?;

        let record = HistoryRecord {
            lote: id,
            description: lot.description.clone(),
            trade: lot.trade.clone(),
            client: lot.assigned_client.clone(),
            delivered_at: Utc::now(),
            category: tuple.as_ref().map(|t| t.garment_category),
            age_type: tuple.as_ref().map(|t| t.age_category),
        };
        let history_id = Uuid::new_v4().to_string();
        self.store
            .put(
                collections::HISTORY,
                &history_id,
                to_document(&record)?,
                false,
            )
            .await?;

        self.store
            .delete(collections::LOTES, &id.to_string())
            .await?;

        info!(lote = id, "Lot delivered and archived");
        Ok(())
    }

    /// Deliver every pending lot assigned to a client
    pub async fn deliver_all(&self, client_id: &str) -> Result<u32> {
        let pending = self.pending_for(client_id).await?;
        let total = pending.len() as u32;

        for (id, _) in pending {
            self.deliver(id).await?;
        }

        info!(client = %client_id, count = total, "Bulk delivery completed");
        Ok(total)
    }

    /// All persisted lots, ordered by numeric id
    pub async fn list_lots(&self) -> Result<Vec<(u32, Lot)>> {
        let mut lots = Vec::new();

        for (id, doc) in self.store.enumerate(collections::LOTES).await? {
            let Ok(number) = id.parse::<u32>() else {
                warn!(id = %id, "Skipping lot with non-numeric id");
                continue;
            };
            match from_document::<Lot>(doc) {
                Ok(lot) => lots.push((number, lot)),
                Err(err) => warn!(lote = number, error = %err, "Skipping malformed lot"),
            }
        }

        lots.sort_by_key(|(number, _)| *number);
        Ok(lots)
    }

    /// Filled lots not yet reserved for any client
    pub async fn free_lots(&self) -> Result<Vec<(u32, Lot)>> {
        Ok(self
            .list_lots()
            .await?
            .into_iter()
            .filter(|(_, lot)| lot.is_free())
            .collect())
    }

    /// Lots assigned to the client and awaiting delivery
    pub async fn pending_for(&self, client_id: &str) -> Result<Vec<(u32, Lot)>> {
        Ok(self
            .list_lots()
            .await?
            .into_iter()
            .filter(|(_, lot)| lot.is_pending_for(client_id))
            .collect())
    }

    // ========================================================================
    // Clients
    // ========================================================================

    /// Create a client; validation failures reject before any store call
    pub async fn create_client(&self, client: Client) -> Result<String> {
        client.validate()?;

        let client = Client {
            created_at: Some(Utc::now()),
            ..client
        };
        let id = Uuid::new_v4().to_string();
        self.store
            .put(collections::CLIENTS, &id, to_document(&client)?, false)
            .await?;

        info!(client = %id, "Client created");
        Ok(id)
    }

    /// Replace a client's fields, keeping the original creation timestamp
    pub async fn update_client(&self, id: &str, client: Client) -> Result<()> {
        client.validate()?;

        let existing: Client = match self.store.get(collections::CLIENTS, id).await? {
            Some(doc) => from_document(doc)?,
            None => return Err(Error::NotFound(format!("Client {id}"))),
        };

        let client = Client {
            created_at: existing.created_at,
            ..client
        };
        self.store
            .put(collections::CLIENTS, id, to_document(&client)?, false)
            .await
    }

    pub async fn delete_client(&self, id: &str) -> Result<()> {
        self.store.delete(collections::CLIENTS, id).await
    }

    pub async fn list_clients(&self) -> Result<Vec<(String, Client)>> {
        let mut clients = Vec::new();

        for (id, doc) in self.store.enumerate(collections::CLIENTS).await? {
            match from_document::<Client>(doc) {
                Ok(client) => clients.push((id, client)),
                Err(err) => warn!(client = %id, error = %err, "Skipping malformed client"),
            }
        }

        Ok(clients)
    }

    // ========================================================================
    // History
    // ========================================================================

    /// Delivery history with client names resolved for display
    pub async fn list_history(&self) -> Result<Vec<HistoryView>> {
        let mut views = Vec::new();

        for (id, doc) in self.store.enumerate(collections::HISTORY).await? {
            let record: HistoryRecord = match from_document(doc) {
                Ok(record) => record,
                Err(err) => {
                    warn!(entry = %id, error = %err, "Skipping malformed history record");
                    continue;
                }
            };

            let client_name = match &record.client {
                Some(client_id) => match self.store.get(collections::CLIENTS, client_id).await? {
                    Some(doc) => from_document::<Client>(doc)
                        .map(|client| client.name)
                        .unwrap_or_else(|_| UNKNOWN_CLIENT.to_string()),
                    None => UNKNOWN_CLIENT.to_string(),
                },
                None => UNKNOWN_CLIENT.to_string(),
            };

            views.push(HistoryView {
                client_name,
                record,
            });
        }

        Ok(views)
    }

    // ========================================================================
    // Internals
    // ========================================================================

    async fn load_lot(&self, id: u32) -> Result<Option<Lot>> {
        match self.store.get(collections::LOTES, &id.to_string()).await? {
            Some(doc) => Ok(Some(from_document(doc)?)),
            None => Ok(None),
        }
    }

    async fn put_field(&self, id: u32, field: &str, value: &str) -> Result<()> {
        let mut fields = Document::new();
        fields.insert(
            field.to_string(),
            serde_json::Value::String(value.to_string()),
        );
        self.store
            .put(collections::LOTES, &id.to_string(), fields, true)
            .await
    }

    fn check_lot_id(&self, id: u32) -> Result<()> {
        if id == 0 || id > self.max_lots {
            return Err(Error::InvalidInput(format!(
                "Lot id {id} outside 1..={}",
                self.max_lots
            )));
        }
        Ok(())
    }

    fn check_not_delivered(&self, id: u32, lot: &Lot) -> Result<()> {
        if lot.delivered {
            return Err(Error::InvalidInput(format!("Lote {id} is archived")));
        }
        Ok(())
    }
}
