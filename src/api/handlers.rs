//! API request handlers

use super::models::{LoraHashesResponse, PingResponse, SingleLoraHashResponse};
use super::routes::AppState;
use crate::error::InventoryError;
use crate::inventory;
use axum::{
    Json,
    extract::{Path, State},
};

/// GET /api/vcc/lora-hashes - list every recognized file with its hash
pub async fn list_lora_hashes(
    State(state): State<AppState>,
) -> Result<Json<LoraHashesResponse>, InventoryError> {
    let roots = state.config.lora_roots();
    let loras = inventory::list_with_hashes(roots, state.config.hash_chunk_size).await?;
    let total = loras.len();

    tracing::debug!(total, "Listed LoRA files");

    Ok(Json(LoraHashesResponse {
        success: true,
        loras,
        total,
    }))
}

/// GET /api/vcc/lora-hash/{*filename} - hash one file by name or relative path
///
/// The wildcard keeps embedded path separators intact; axum
/// percent-decodes the captured value before it reaches the locator.
pub async fn single_lora_hash(
    State(state): State<AppState>,
    Path(filename): Path<String>,
) -> Result<Json<SingleLoraHashResponse>, InventoryError> {
    let roots = state.config.lora_roots();
    let record = inventory::hash_one(roots, filename, state.config.hash_chunk_size).await?;

    Ok(Json(record.into()))
}

/// GET /api/vcc/lora-hash and /api/vcc/lora-hash/ - no filename given
pub async fn missing_filename() -> InventoryError {
    InventoryError::MissingFilename
}

/// GET /api/vcc/lora-hash/ping - liveness check
pub async fn ping() -> Json<PingResponse> {
    Json(PingResponse {
        success: true,
        message: "lora-inventory is running".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
    })
}
