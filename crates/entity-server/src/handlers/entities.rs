//! Entity CRUD handlers
//!
//! Each handler parses its input, issues exactly one logical store
//! operation, and maps the outcome to an HTTP response. `NotFound` is the
//! only store error translated (to 404); everything else is logged and
//! surfaces as 500.

use crate::AppState;
use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use entity_core::{Entity, StoreError};

fn map_store_error(op: &str, err: StoreError) -> StatusCode {
    if err.is_not_found() {
        return StatusCode::NOT_FOUND;
    }
    tracing::error!("{} failed: {}", op, err);
    StatusCode::INTERNAL_SERVER_ERROR
}

/// POST /entity — body is a JSON-encoded string holding the name.
pub async fn create(
    State(state): State<AppState>,
    Json(name): Json<String>,
) -> Result<Json<Entity>, StatusCode> {
    let entity = Entity::new(state.partition_key.as_ref(), Some(name));

    let stored = state
        .store
        .insert(&entity)
        .await
        .map_err(|e| map_store_error("create", e))?;

    tracing::info!(
        "New entity created Id = {}, Name = {:?}",
        stored.id,
        stored.name
    );
    Ok(Json(stored))
}

/// GET /entity/:id
pub async fn get_by_id(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<Entity>, StatusCode> {
    tracing::info!("Getting entity {}", id);

    match state.store.get(&state.partition_key, &id).await {
        Ok(entity) => Ok(Json(entity)),
        Err(StoreError::NotFound) => {
            tracing::info!("Entity {} not found", id);
            Err(StatusCode::NOT_FOUND)
        }
        Err(e) => Err(map_store_error("get", e)),
    }
}

/// GET /entity — first page of the partition scan only.
pub async fn list(State(state): State<AppState>) -> Result<Json<Vec<Entity>>, StatusCode> {
    tracing::info!("Getting all entity items");

    let page = state
        .store
        .query_page(&state.partition_key)
        .await
        .map_err(|e| map_store_error("list", e))?;

    Ok(Json(page))
}

/// PUT /entity/:id — body is a JSON-encoded string holding the new name.
///
/// The replace is conditioned on the token read here; a racing writer
/// makes it fail rather than be silently overwritten.
pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(new_name): Json<String>,
) -> Result<Json<Entity>, StatusCode> {
    tracing::info!("Updating item with id = {}", id);

    let mut existing = match state.store.get(&state.partition_key, &id).await {
        Ok(entity) => entity,
        Err(StoreError::NotFound) => return Err(StatusCode::NOT_FOUND),
        Err(e) => return Err(map_store_error("update", e)),
    };

    let etag = existing
        .etag
        .take()
        .ok_or(StatusCode::INTERNAL_SERVER_ERROR)?;
    existing.name = Some(new_name);

    let updated = state
        .store
        .replace(&existing, &etag)
        .await
        .map_err(|e| map_store_error("update", e))?;

    Ok(Json(updated))
}

/// DELETE /entity/:id — unconditional, ignores concurrency tokens.
pub async fn delete_one(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<StatusCode, StatusCode> {
    tracing::info!("Deleting entity by {}", id);

    match state.store.delete(&state.partition_key, &id).await {
        Ok(()) => Ok(StatusCode::OK),
        Err(StoreError::NotFound) => Err(StatusCode::NOT_FOUND),
        Err(e) => Err(map_store_error("delete", e)),
    }
}

/// DELETE /entity — drops every row in the partition. An already-empty
/// partition reports not-found, which maps to 404.
pub async fn delete_all(State(state): State<AppState>) -> Result<StatusCode, StatusCode> {
    tracing::info!("Deleting all entity items");

    match state.store.delete_partition(&state.partition_key).await {
        Ok(()) => Ok(StatusCode::OK),
        Err(StoreError::NotFound) => Err(StatusCode::NOT_FOUND),
        Err(e) => Err(map_store_error("delete_all", e)),
    }
}
