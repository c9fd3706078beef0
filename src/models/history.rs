//! Delivery history record

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::{AgeCategory, GarmentCategory};

/// Immutable archival snapshot written when a lot is delivered
///
/// Created once in the `history` collection under a generated id, never
/// mutated or deleted. Description and trade are preserved verbatim;
/// `category`/`age_type` are the derived attributes at delivery time, absent
/// when the description had no recognizable attributes.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HistoryRecord {
    /// Numeric id of the delivered lot
    pub lote: u32,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub trade: String,
    /// Client the lot was delivered to, if it was assigned
    #[serde(default)]
    pub client: Option<String>,
    pub delivered_at: DateTime<Utc>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<GarmentCategory>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub age_type: Option<AgeCategory>,
}
