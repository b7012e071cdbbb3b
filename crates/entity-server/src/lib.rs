//! Entity Service HTTP Server
//!
//! Exposes CRUD routes over a table-style store. Each handler performs one
//! store operation; all shared state lives in the store itself.

pub mod config;
pub mod handlers;

use axum::{
    routing::{get, post},
    Router,
};
use entity_core::TableStore;
use std::sync::Arc;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

pub use config::Config;

/// Application state shared across handlers
#[derive(Clone)]
pub struct AppState {
    pub store: Arc<dyn TableStore>,
    pub partition_key: Arc<str>,
}

impl AppState {
    pub fn new(store: Arc<dyn TableStore>, partition_key: &str) -> Self {
        AppState {
            store,
            partition_key: Arc::from(partition_key),
        }
    }
}

/// Build the HTTP router with all entity routes wired up.
pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(handlers::health))
        .route(
            "/entity",
            post(handlers::entities::create)
                .get(handlers::entities::list)
                .delete(handlers::entities::delete_all),
        )
        .route(
            "/entity/:id",
            get(handlers::entities::get_by_id)
                .put(handlers::entities::update)
                .delete(handlers::entities::delete_one),
        )
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        )
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
