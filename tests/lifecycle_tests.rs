//! Lot lifecycle acceptance tests
//!
//! Full controller flows over the in-memory store: edits, empty-shell
//! cleanup, assignment, delivery with history snapshots, bulk delivery, and
//! client validation.

use std::sync::Arc;

use roupeiro::extract::Extractor;
use roupeiro::models::Client;
use roupeiro::services::{LotLifecycle, Reconciler, StockLedger};
use roupeiro::store::{collections, DocumentStore, MemoryStore};

fn setup() -> (Arc<MemoryStore>, LotLifecycle) {
    let store = Arc::new(MemoryStore::new());
    let ledger = StockLedger::new(store.clone());
    let reconciler = Reconciler::new(Extractor::default(), ledger);
    let lifecycle = LotLifecycle::new(store.clone(), reconciler, 400);
    (store, lifecycle)
}

fn client() -> Client {
    Client {
        name: "Maria Silva".to_string(),
        contact: "912345678".to_string(),
        address: "Rua das Flores 1, Lisboa".to_string(),
        notes: String::new(),
        created_at: None,
    }
}

async fn ledger_count(store: &MemoryStore, key: &str) -> Option<u64> {
    store
        .get(collections::SIZES, key)
        .await
        .unwrap()
        .map(|doc| doc["count"].as_u64().unwrap())
}

#[tokio::test]
async fn test_first_edit_creates_record_and_increments() {
    let (store, lifecycle) = setup();

    lifecycle.edit_description(7, "vestido senhora M").await.unwrap();

    let doc = store.get(collections::LOTES, "7").await.unwrap().unwrap();
    assert_eq!(doc["description"], "vestido senhora M");
    assert_eq!(ledger_count(&store, "F-M").await, Some(1));
}

#[tokio::test]
async fn test_trade_edit_has_no_ledger_effect() {
    let (store, lifecycle) = setup();

    lifecycle.edit_trade(3, "camisola L menino").await.unwrap();

    // The trade field carries no attribute semantics, even when its text
    // would extract cleanly as a description
    assert!(store.enumerate(collections::SIZES).await.unwrap().is_empty());
    let doc = store.get(collections::LOTES, "3").await.unwrap().unwrap();
    assert_eq!(doc["trade"], "camisola L menino");
}

#[tokio::test]
async fn test_clearing_both_fields_deletes_the_record() {
    let (store, lifecycle) = setup();

    lifecycle.edit_description(5, "saia menina 6 anos").await.unwrap();
    lifecycle.edit_trade(5, "alimentos").await.unwrap();

    lifecycle.edit_trade(5, "").await.unwrap();
    assert!(store.get(collections::LOTES, "5").await.unwrap().is_some());

    lifecycle.edit_description(5, "").await.unwrap();

    // Both fields empty: logically nonexistent, so not stored either
    assert!(store.get(collections::LOTES, "5").await.unwrap().is_none());
    // The cleared description still reconciled its unit away
    assert_eq!(ledger_count(&store, "GIRL-6 ANOS").await, Some(0));
}

#[tokio::test]
async fn test_lot_id_bounds_are_enforced() {
    let (_store, lifecycle) = setup();

    assert!(lifecycle.edit_description(0, "camisola").await.is_err());
    assert!(lifecycle.edit_description(401, "camisola").await.is_err());
    assert!(lifecycle.edit_description(400, "camisola").await.is_ok());
}

#[tokio::test]
async fn test_delivery_decrements_snapshots_and_deletes() {
    let (store, lifecycle) = setup();

    lifecycle.edit_description(12, "6 anos unissexo").await.unwrap();
    lifecycle.edit_description(13, "6 anos unissexo").await.unwrap();
    lifecycle.edit_trade(12, "livros").await.unwrap();
    assert_eq!(ledger_count(&store, "UNISEX-6 ANOS").await, Some(2));

    let client_id = lifecycle.create_client(client()).await.unwrap();
    lifecycle.assign(12, &client_id).await.unwrap();
    lifecycle.deliver(12).await.unwrap();

    // One physical unit left inventory
    assert_eq!(ledger_count(&store, "UNISEX-6 ANOS").await, Some(1));
    // The lot record is gone, not cleared for reuse
    assert!(store.get(collections::LOTES, "12").await.unwrap().is_none());

    // One immutable snapshot with the description preserved verbatim
    let history = store.enumerate(collections::HISTORY).await.unwrap();
    assert_eq!(history.len(), 1);
    let (_, record) = &history[0];
    assert_eq!(record["lote"], 12);
    assert_eq!(record["description"], "6 anos unissexo");
    assert_eq!(record["trade"], "livros");
    assert_eq!(record["client"], client_id.as_str());
    assert_eq!(record["ageType"], "child");
}

#[tokio::test]
async fn test_delivery_of_unmatched_description_skips_ledger() {
    let (store, lifecycle) = setup();

    lifecycle.edit_description(1, "roupa variada").await.unwrap();
    let client_id = lifecycle.create_client(client()).await.unwrap();
    lifecycle.assign(1, &client_id).await.unwrap();
    lifecycle.deliver(1).await.unwrap();

    assert!(store.enumerate(collections::SIZES).await.unwrap().is_empty());
    let history = store.enumerate(collections::HISTORY).await.unwrap();
    assert_eq!(history.len(), 1);
    assert!(history[0].1.get("ageType").is_none());
}

#[tokio::test]
async fn test_deliver_all_for_client() {
    let (store, lifecycle) = setup();

    let client_id = lifecycle.create_client(client()).await.unwrap();

    for (id, text) in [(1, "camisola L menino"), (2, "vestido M senhora"), (3, "botas 38")] {
        lifecycle.edit_description(id, text).await.unwrap();
        lifecycle.assign(id, &client_id).await.unwrap();
    }
    // An unassigned lot must not be swept up by the bulk delivery
    lifecycle.edit_description(4, "saia menina 6 anos").await.unwrap();

    let delivered = lifecycle.deliver_all(&client_id).await.unwrap();
    assert_eq!(delivered, 3);

    assert!(store.get(collections::LOTES, "1").await.unwrap().is_none());
    assert!(store.get(collections::LOTES, "4").await.unwrap().is_some());
    assert_eq!(store.enumerate(collections::HISTORY).await.unwrap().len(), 3);
    assert_eq!(ledger_count(&store, "GIRL-6 ANOS").await, Some(1));
}

#[tokio::test]
async fn test_assign_requires_existing_lot_and_client() {
    let (_store, lifecycle) = setup();

    let client_id = lifecycle.create_client(client()).await.unwrap();
    assert!(lifecycle.assign(9, &client_id).await.is_err());

    lifecycle.edit_description(9, "camisola M").await.unwrap();
    assert!(lifecycle.assign(9, "no-such-client").await.is_err());
    assert!(lifecycle.assign(9, &client_id).await.is_ok());
}

#[tokio::test]
async fn test_client_validation_rejects_before_store() {
    let (store, lifecycle) = setup();

    let mut bad = client();
    bad.contact = "91234567890".to_string();

    assert!(lifecycle.create_client(bad).await.is_err());
    assert!(store.enumerate(collections::CLIENTS).await.unwrap().is_empty());
}

#[tokio::test]
async fn test_history_resolves_client_names() {
    let (_store, lifecycle) = setup();

    let client_id = lifecycle.create_client(client()).await.unwrap();
    lifecycle.edit_description(2, "casaco senhora L").await.unwrap();
    lifecycle.assign(2, &client_id).await.unwrap();
    lifecycle.deliver(2).await.unwrap();

    let history = lifecycle.list_history().await.unwrap();
    assert_eq!(history.len(), 1);
    assert_eq!(history[0].client_name, "Maria Silva");

    // Deleting the client downgrades the display name, not the record
    lifecycle.delete_client(&client_id).await.unwrap();
    let history = lifecycle.list_history().await.unwrap();
    assert_eq!(history[0].client_name, "Desconhecido");
    assert_eq!(history[0].record.lote, 2);
}

#[test]
fn test_extract_attributes_surface() {
    let (_store, lifecycle) = setup();

    let tuple = lifecycle.extract_attributes("vestido senhora M").unwrap();
    assert_eq!(tuple.size, "M");
    assert_eq!(tuple.key().storage_key(), "F-M");

    assert!(lifecycle.extract_attributes("roupa variada").is_none());
}

#[tokio::test]
async fn test_free_and_pending_listings() {
    let (_store, lifecycle) = setup();

    let client_id = lifecycle.create_client(client()).await.unwrap();
    lifecycle.edit_description(1, "camisola M").await.unwrap();
    lifecycle.edit_description(2, "vestido S").await.unwrap();
    lifecycle.assign(2, &client_id).await.unwrap();

    let free: Vec<u32> = lifecycle
        .free_lots()
        .await
        .unwrap()
        .into_iter()
        .map(|(id, _)| id)
        .collect();
    assert_eq!(free, vec![1]);

    let pending: Vec<u32> = lifecycle
        .pending_for(&client_id)
        .await
        .unwrap()
        .into_iter()
        .map(|(id, _)| id)
        .collect();
    assert_eq!(pending, vec![2]);
}
