//! API route definitions

use crate::config::InventoryConfig;
use axum::{Router, routing::get};
use std::sync::Arc;
use tower::ServiceBuilder;
use tower_http::{cors::CorsLayer, trace::TraceLayer};

use super::handlers;

/// Application state shared across handlers
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<InventoryConfig>,
}

/// Create the main API router
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/api/vcc/lora-hashes", get(handlers::list_lora_hashes))
        // The static segment takes priority over the wildcard below
        .route("/api/vcc/lora-hash/ping", get(handlers::ping))
        .route(
            "/api/vcc/lora-hash/{*filename}",
            get(handlers::single_lora_hash),
        )
        // A bare or trailing-slash path carries no filename
        .route("/api/vcc/lora-hash", get(handlers::missing_filename))
        .route("/api/vcc/lora-hash/", get(handlers::missing_filename))
        .with_state(state)
        .layer(
            ServiceBuilder::new()
                .layer(TraceLayer::new_for_http())
                .layer(CorsLayer::permissive()),
        )
}
