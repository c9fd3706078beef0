//! Client record

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::{Error, Result};

/// A client document from the `clients` collection
///
/// Clients own zero or more active lots by reference (`Lot::assigned_client`).
/// No attribute-extraction relevance.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Client {
    pub name: String,
    /// Phone contact: digits only, at most 9 digits
    pub contact: String,
    pub address: String,
    #[serde(default)]
    pub notes: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,
}

impl Client {
    /// Validate required fields before any store call
    ///
    /// Rejected input is never partially applied.
    pub fn validate(&self) -> Result<()> {
        if self.name.trim().is_empty() {
            return Err(Error::InvalidInput("Client name is required".to_string()));
        }
        if self.address.trim().is_empty() {
            return Err(Error::InvalidInput(
                "Client address is required".to_string(),
            ));
        }
        if self.contact.is_empty() {
            return Err(Error::InvalidInput(
                "Client contact is required".to_string(),
            ));
        }
        if self.contact.len() > 9 || !self.contact.chars().all(|c| c.is_ascii_digit()) {
            return Err(Error::InvalidInput(
                "Client contact must be at most 9 digits".to_string(),
            ));
        }
        Ok(())
    }
}
