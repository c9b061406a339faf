//! Streaming SHA-256 file hashing
//!
//! LoRA weight files run from hundreds of megabytes to tens of
//! gigabytes, so files are read in fixed-size chunks and fed into an
//! incremental hasher rather than loaded whole.

use sha2::{Digest, Sha256};
use std::io;
use std::path::Path;
use tokio::fs::File;
use tokio::io::AsyncReadExt;

/// Default read chunk size (64 KiB).
pub const DEFAULT_CHUNK_SIZE: usize = 64 * 1024;

/// Compute the SHA-256 digest of a file as a lowercase hex string.
///
/// Either the complete digest is returned or the `io::Error` that
/// interrupted the read; there are no partial results. The file handle
/// is closed on every exit path. Each chunk read is an await point, so
/// hashing a large file never monopolizes the runtime.
pub async fn sha256_file(path: &Path) -> io::Result<String> {
    sha256_file_with_chunk_size(path, DEFAULT_CHUNK_SIZE).await
}

/// Same as [`sha256_file`] with an explicit chunk size.
///
/// The digest is independent of the chunk size used.
pub async fn sha256_file_with_chunk_size(path: &Path, chunk_size: usize) -> io::Result<String> {
    let mut file = File::open(path).await?;
    let mut hasher = Sha256::new();
    let mut buf = vec![0u8; chunk_size];

    loop {
        let n = file.read(&mut buf).await?;
        if n == 0 {
            break;
        }
        hasher.update(&buf[..n]);
    }

    Ok(format!("{:x}", hasher.finalize()))
}
