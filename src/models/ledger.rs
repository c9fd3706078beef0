//! Aggregate stock ledger entry

use serde::{Deserialize, Serialize};

use super::{AgeCategory, AttributeKey, GarmentCategory, Gender};

/// One ledger document from the `sizes` collection, keyed by
/// `AttributeKey::storage_key()`
///
/// Created on first increment with `count = 1`. The count is floored at zero
/// and the entry is never deleted: a zero count is a valid terminal state and
/// exactly what the low-stock report exists to surface.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LedgerEntry {
    pub gender: Gender,
    pub size: String,
    #[serde(default)]
    pub count: u32,
    /// Denormalized for reporting; not part of the key
    #[serde(default)]
    pub age_type: AgeCategory,
    /// Denormalized for reporting; not part of the key
    #[serde(default)]
    pub category: GarmentCategory,
}

impl LedgerEntry {
    /// Fresh entry for a first increment
    pub fn first(key: &AttributeKey, age_type: AgeCategory, category: GarmentCategory) -> Self {
        Self {
            gender: key.gender,
            size: key.size.clone(),
            count: 1,
            age_type,
            category,
        }
    }
}
