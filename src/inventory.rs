//! Inventory operations composing the locator and hasher
//!
//! Each operation is a pure read: it re-scans the configured roots and
//! re-hashes from scratch, with no state carried between calls.

use crate::error::{InventoryError, InventoryResult};
use crate::hasher;
use crate::locator::{self, FileRecord};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// One listing entry. `sha256` is `None` when hashing that file failed;
/// the rest of the batch is unaffected.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoraHashEntry {
    pub filename: String,
    pub relative_path: String,
    pub sha256: Option<String>,
}

/// A successfully resolved and hashed single lookup.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HashedRecord {
    pub filename: String,
    pub relative_path: String,
    pub sha256: String,
}

/// Enumerate all recognized files under `roots` and hash each one.
///
/// The directory walk runs on the blocking pool so a deep tree never
/// stalls the runtime. Zero configured roots yields an empty batch.
pub async fn list_with_hashes(
    roots: Vec<PathBuf>,
    chunk_size: usize,
) -> InventoryResult<Vec<LoraHashEntry>> {
    let records = tokio::task::spawn_blocking(move || locator::list_all(&roots))
        .await
        .map_err(|e| InventoryError::Internal(e.into()))?;

    Ok(hash_records(records, chunk_size).await)
}

/// Hash a batch of already-discovered records.
///
/// A per-file failure (deleted since discovery, unreadable, disk error)
/// degrades that entry to `sha256: None` and the batch continues.
pub async fn hash_records(records: Vec<FileRecord>, chunk_size: usize) -> Vec<LoraHashEntry> {
    let mut entries = Vec::with_capacity(records.len());

    for record in records {
        let sha256 = match hasher::sha256_file_with_chunk_size(&record.full_path, chunk_size).await
        {
            Ok(digest) => Some(digest),
            Err(err) => {
                tracing::warn!(
                    path = %record.full_path.display(),
                    error = %err,
                    "Failed to hash file"
                );
                None
            }
        };

        entries.push(LoraHashEntry {
            filename: record.filename,
            relative_path: record.relative_path,
            sha256,
        });
    }

    entries
}

/// Resolve `query` to one file and hash it.
///
/// An empty query is rejected up front; an unresolvable query is
/// `NotFound`; a resolved file that cannot be read is an `Io` failure.
pub async fn hash_one(
    roots: Vec<PathBuf>,
    query: String,
    chunk_size: usize,
) -> InventoryResult<HashedRecord> {
    if query.is_empty() {
        return Err(InventoryError::MissingFilename);
    }

    let lookup = query.clone();
    let record = tokio::task::spawn_blocking(move || locator::find_one(&roots, &lookup))
        .await
        .map_err(|e| InventoryError::Internal(e.into()))?
        .ok_or(InventoryError::NotFound { query })?;

    let sha256 = hasher::sha256_file_with_chunk_size(&record.full_path, chunk_size)
        .await
        .map_err(|source| InventoryError::Io {
            path: record.full_path.clone(),
            source,
        })?;

    Ok(HashedRecord {
        filename: record.filename,
        relative_path: record.relative_path,
        sha256,
    })
}
