//! Black-box scenario tests
//!
//! Each test boots the real router on an ephemeral port with a fresh
//! in-memory store, then drives it through the client library.

use entity_client::EntityClient;
use entity_core::MemoryTableStore;
use entity_server::{router, AppState};
use std::sync::Arc;

async fn spawn_server() -> EntityClient {
    let store = Arc::new(MemoryTableStore::new());
    let state = AppState::new(store, "EntityPartitionKey");
    let app = router(state);

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .expect("bind ephemeral port");
    let addr = listener.local_addr().expect("local addr");
    tokio::spawn(async move {
        axum::serve(listener, app).await.expect("serve");
    });

    EntityClient::new(format!("http://{}/entity", addr))
}

#[tokio::test]
async fn create_round_trips_through_get() {
    let client = spawn_server().await;

    let created = client.create("First").await.unwrap();
    assert!(!created.id.is_empty());
    assert_eq!(created.name.as_deref(), Some("First"));
    assert_eq!(created.id, created.row_key);

    let fetched = client.get_by_id(&created.id).await.unwrap();
    assert_eq!(fetched.id, created.id);
    assert_eq!(fetched.name.as_deref(), Some("First"));
}

#[tokio::test]
async fn created_ids_are_unique() {
    let client = spawn_server().await;

    let a = client.create("same name").await.unwrap();
    let b = client.create("same name").await.unwrap();
    assert_ne!(a.id, b.id);
}

#[tokio::test]
async fn update_changes_name_and_keeps_id() {
    let client = spawn_server().await;

    let created = client.create("before").await.unwrap();
    let updated = client.update(&created.id, "after").await.unwrap();
    assert_eq!(updated.id, created.id);
    assert_eq!(updated.name.as_deref(), Some("after"));

    let fetched = client.get_by_id(&created.id).await.unwrap();
    assert_eq!(fetched.name.as_deref(), Some("after"));
}

#[tokio::test]
async fn update_unknown_id_is_not_found() {
    let client = spawn_server().await;

    let err = client.update("no-such-id", "anything").await.unwrap_err();
    assert!(err.is_not_found());
}

#[tokio::test]
async fn delete_one_then_get_is_not_found() {
    let client = spawn_server().await;

    let created = client.create("doomed").await.unwrap();
    client.delete_one(&created.id).await.unwrap();

    let err = client.get_by_id(&created.id).await.unwrap_err();
    assert!(err.is_not_found());
}

#[tokio::test]
async fn delete_unknown_id_is_not_found() {
    let client = spawn_server().await;

    let err = client.delete_one("no-such-id").await.unwrap_err();
    assert!(err.is_not_found());
}

#[tokio::test]
async fn get_never_created_id_is_not_found() {
    let client = spawn_server().await;

    let err = client.get_by_id("never-created").await.unwrap_err();
    assert!(err.is_not_found());
}

#[tokio::test]
async fn list_returns_three_after_three_creates() {
    let client = spawn_server().await;

    for name in ["one", "two", "three"] {
        client.create(name).await.unwrap();
    }

    let entities = client.list_all().await.unwrap();
    assert_eq!(entities.len(), 3);
}

#[tokio::test]
async fn list_on_fresh_store_is_empty() {
    let client = spawn_server().await;

    let entities = client.list_all().await.unwrap();
    assert!(entities.is_empty());
}

#[tokio::test]
async fn delete_all_empties_the_collection() {
    let client = spawn_server().await;

    for name in ["one", "two", "three"] {
        client.create(name).await.unwrap();
    }
    client.delete_all().await.unwrap();

    let entities = client.list_all().await.unwrap();
    assert!(entities.is_empty());
}

#[tokio::test]
async fn delete_all_on_empty_collection_is_not_found() {
    let client = spawn_server().await;

    let err = client.delete_all().await.unwrap_err();
    assert!(err.is_not_found());
}

#[tokio::test]
async fn full_crud_scenario() {
    let client = spawn_server().await;

    let created = client.create("First").await.unwrap();
    assert_eq!(created.name.as_deref(), Some("First"));

    let fetched = client.get_by_id(&created.id).await.unwrap();
    assert_eq!(fetched.id, created.id);
    assert_eq!(fetched.name.as_deref(), Some("First"));

    let updated = client.update(&created.id, "Updated First").await.unwrap();
    assert_eq!(updated.name.as_deref(), Some("Updated First"));

    let fetched = client.get_by_id(&created.id).await.unwrap();
    assert_eq!(fetched.name.as_deref(), Some("Updated First"));

    client.delete_one(&created.id).await.unwrap();

    let err = client.get_by_id(&created.id).await.unwrap_err();
    assert!(err.is_not_found());
}
