//! Lot record: one donated bundle of goods

use serde::{Deserialize, Serialize};

/// A lot document from the `lotes` collection
///
/// Lots are keyed by their externally assigned numeric id (decimal string in
/// the store). A lot whose `description` and `trade` are both empty has no
/// reason to exist and is deleted rather than persisted as an empty shell.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Lot {
    /// Free text entered by the operator; empty means "unfilled".
    /// The attribute tuple is derived from this field and only this field.
    #[serde(default)]
    pub description: String,
    /// What the donor received in exchange; carried through unchanged
    #[serde(default)]
    pub trade: String,
    /// Client document id this lot is reserved for, if any
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub assigned_client: Option<String>,
    #[serde(default)]
    pub delivered: bool,
}

impl Lot {
    /// True when the record is an empty shell that should be deleted
    pub fn is_empty_shell(&self) -> bool {
        self.description.is_empty() && self.trade.is_empty()
    }

    /// Free for assignment: filled but not reserved for a client
    pub fn is_free(&self) -> bool {
        !self.description.is_empty() && self.assigned_client.is_none()
    }

    /// Assigned to the given client and still awaiting delivery
    pub fn is_pending_for(&self, client_id: &str) -> bool {
        self.assigned_client.as_deref() == Some(client_id) && !self.delivered
    }
}
