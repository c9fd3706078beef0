//! Opaque document service
//!
//! All lot, client, ledger, and history persistence goes through the four
//! operations of [`DocumentStore`]; the core is agnostic to the backing
//! implementation (SQLite in production, an in-memory map in tests).
//!
//! The store offers no transactions and no atomic increment; the
//! reconciliation engine is written for exactly that contract and must not
//! be given a stronger one silently.

pub mod memory;
pub mod sqlite;

use async_trait::async_trait;
use serde::{de::DeserializeOwned, Serialize};
use serde_json::Value;

use crate::{Error, Result};

pub use memory::MemoryStore;
pub use sqlite::SqliteStore;

/// A stored document: a flat JSON object
pub type Document = serde_json::Map<String, Value>;

/// Collection names used by the core
pub mod collections {
    pub const LOTES: &str = "lotes";
    pub const CLIENTS: &str = "clients";
    pub const SIZES: &str = "sizes";
    pub const HISTORY: &str = "history";
}

/// Key-value document service with get/put/delete/enumerate
#[async_trait]
pub trait DocumentStore: Send + Sync {
    /// Fetch one document, `None` when absent
    async fn get(&self, collection: &str, id: &str) -> Result<Option<Document>>;

    /// Write a document. With `merge`, fields are shallow-merged into the
    /// existing document (or create it when absent); without, the document
    /// is replaced wholesale.
    async fn put(&self, collection: &str, id: &str, fields: Document, merge: bool) -> Result<()>;

    /// Delete a document; deleting an absent document is a no-op
    async fn delete(&self, collection: &str, id: &str) -> Result<()>;

    /// All documents of a collection as `(id, document)` pairs, ordered by id
    async fn enumerate(&self, collection: &str) -> Result<Vec<(String, Document)>>;
}

/// Serialize a model into a store document
pub fn to_document<T: Serialize>(value: &T) -> Result<Document> {
    match serde_json::to_value(value)? {
        Value::Object(map) => Ok(map),
        other => Err(Error::InvalidInput(format!(
            "Expected a JSON object, got {}",
            other
        ))),
    }
}

/// Deserialize a store document into a model
pub fn from_document<T: DeserializeOwned>(doc: Document) -> Result<T> {
    Ok(serde_json::from_value(Value::Object(doc))?)
}
