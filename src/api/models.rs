//! API response models

use crate::inventory::{HashedRecord, LoraHashEntry};
use serde::{Deserialize, Serialize};

/// Response for the listing endpoint
#[derive(Debug, Serialize, Deserialize)]
pub struct LoraHashesResponse {
    pub success: bool,
    pub loras: Vec<LoraHashEntry>,
    pub total: usize,
}

/// Response for the single-file endpoint
#[derive(Debug, Serialize, Deserialize)]
pub struct SingleLoraHashResponse {
    pub success: bool,
    pub filename: String,
    pub relative_path: String,
    pub sha256: String,
}

impl From<HashedRecord> for SingleLoraHashResponse {
    fn from(record: HashedRecord) -> Self {
        Self {
            success: true,
            filename: record.filename,
            relative_path: record.relative_path,
            sha256: record.sha256,
        }
    }
}

/// Liveness check response
#[derive(Debug, Serialize, Deserialize)]
pub struct PingResponse {
    pub success: bool,
    pub message: String,
    pub version: String,
}
