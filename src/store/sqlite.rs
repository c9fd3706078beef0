//! SQLite-backed document store
//!
//! One `documents` table keyed by `(collection, id)` with the document body
//! as a JSON text column. `put` with merge is a read-modify-write, matching
//! the trait contract: no transactional guarantee is promised to callers.

use async_trait::async_trait;
use sqlx::{Row, SqlitePool};
use std::path::Path;
use tracing::debug;

use super::{Document, DocumentStore};
use crate::Result;

/// Document store on a shared SQLite pool
#[derive(Debug, Clone)]
pub struct SqliteStore {
    pool: SqlitePool,
}

impl SqliteStore {
    /// Open (or create) the database file and initialize the schema
    pub async fn open(db_path: &Path) -> Result<Self> {
        if let Some(parent) = db_path.parent() {
            if !parent.as_os_str().is_empty() {
                std::fs::create_dir_all(parent)?;
            }
        }

        let db_url = format!("sqlite://{}?mode=rwc", db_path.display());
        debug!("Connecting to database: {}", db_url);

        let pool = SqlitePool::connect(&db_url).await?;
        Self::with_pool(pool).await
    }

    /// Wrap an existing pool (used by tests with `sqlite::memory:`)
    pub async fn with_pool(pool: SqlitePool) -> Result<Self> {
        sqlx::query(
            r#"
            CREATE TABLE IF NOT EXISTS documents (
                collection TEXT NOT NULL,
                id TEXT NOT NULL,
                data TEXT NOT NULL,
                PRIMARY KEY (collection, id)
            )
            "#,
        )
        .execute(&pool)
        .await?;

        Ok(Self { pool })
    }
}

#[async_trait]
impl DocumentStore for SqliteStore {
    async fn get(&self, collection: &str, id: &str) -> Result<Option<Document>> {
        let row = sqlx::query(
            r#"
            SELECT data
            FROM documents
            WHERE collection = ? AND id = ?
            "#,
        )
        .bind(collection)
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        match row {
            Some(row) => {
                let data: String = row.get("data");
                Ok(Some(serde_json::from_str(&data)?))
            }
            None => Ok(None),
        }
    }

    async fn put(&self, collection: &str, id: &str, fields: Document, merge: bool) -> Result<()> {
        let document = if merge {
            match self.get(collection, id).await? {
                Some(mut existing) => {
                    existing.extend(fields);
                    existing
                }
                None => fields,
            }
        } else {
            fields
        };

        sqlx::query(
            r#"
            INSERT INTO documents (collection, id, data)
            VALUES (?, ?, ?)
            ON CONFLICT(collection, id) DO UPDATE SET data = excluded.data
            "#,
        )
        .bind(collection)
        .bind(id)
        .bind(serde_json::to_string(&document)?)
        .execute(&self.pool)
        .await?;

        Ok(())
    }

    async fn delete(&self, collection: &str, id: &str) -> Result<()> {
        sqlx::query(
            r#"
            DELETE FROM documents
            WHERE collection = ? AND id = ?
            "#,
        )
        .bind(collection)
        .bind(id)
        .execute(&self.pool)
        .await?;

        Ok(())
    }

    async fn enumerate(&self, collection: &str) -> Result<Vec<(String, Document)>> {
        let rows = sqlx::query(
            r#"
            SELECT id, data
            FROM documents
            WHERE collection = ?
            ORDER BY id
            "#,
        )
        .bind(collection)
        .fetch_all(&self.pool)
        .await?;

        let mut documents = Vec::with_capacity(rows.len());
        for row in rows {
            let id: String = row.get("id");
            let data: String = row.get("data");
            documents.push((id, serde_json::from_str(&data)?));
        }

        Ok(documents)
    }
}
