//! In-memory document store
//!
//! Test double for the SQLite store with identical semantics. Also useful
//! for throwaway runs without a database file.

use async_trait::async_trait;
use std::collections::{BTreeMap, HashMap};
use tokio::sync::RwLock;

use super::{Document, DocumentStore};
use crate::Result;

/// Document store backed by an in-memory map
#[derive(Debug, Default)]
pub struct MemoryStore {
    // BTreeMap keeps enumerate ordered by id like the SQLite query does
    collections: RwLock<HashMap<String, BTreeMap<String, Document>>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl DocumentStore for MemoryStore {
    async fn get(&self, collection: &str, id: &str) -> Result<Option<Document>> {
        let collections = self.collections.read().await;
        Ok(collections
            .get(collection)
            .and_then(|docs| docs.get(id))
            .cloned())
    }

    async fn put(&self, collection: &str, id: &str, fields: Document, merge: bool) -> Result<()> {
        let mut collections = self.collections.write().await;
        let docs = collections.entry(collection.to_string()).or_default();

        match docs.get_mut(id) {
            Some(existing) if merge => {
                existing.extend(fields);
            }
            _ => {
                docs.insert(id.to_string(), fields);
            }
        }

        Ok(())
    }

    async fn delete(&self, collection: &str, id: &str) -> Result<()> {
        let mut collections = self.collections.write().await;
        if let Some(docs) = collections.get_mut(collection) {
            docs.remove(id);
        }
        Ok(())
    }

    async fn enumerate(&self, collection: &str) -> Result<Vec<(String, Document)>> {
        let collections = self.collections.read().await;
        Ok(collections
            .get(collection)
            .map(|docs| {
                docs.iter()
                    .map(|(id, doc)| (id.clone(), doc.clone()))
                    .collect()
            })
            .unwrap_or_default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn doc(value: serde_json::Value) -> Document {
        value.as_object().unwrap().clone()
    }

    #[tokio::test]
    async fn test_same_semantics_as_sqlite_merge() {
        let store = MemoryStore::new();

        store
            .put("lotes", "1", doc(json!({"description": "x", "trade": "y"})), false)
            .await
            .unwrap();
        store
            .put("lotes", "1", doc(json!({"description": "z"})), true)
            .await
            .unwrap();

        let loaded = store.get("lotes", "1").await.unwrap().unwrap();
        assert_eq!(loaded["description"], "z");
        assert_eq!(loaded["trade"], "y");
    }

    #[tokio::test]
    async fn test_delete_absent_is_noop() {
        let store = MemoryStore::new();
        store.delete("lotes", "404").await.unwrap();
        assert!(store.enumerate("lotes").await.unwrap().is_empty());
    }
}
