//! File discovery under configured search roots
//!
//! Walks each configured root for files with a recognized weight-file
//! suffix and resolves single-file queries. Every query re-walks the
//! filesystem; nothing is cached.

use serde::Serialize;
use std::path::{Component, Path, PathBuf};
use walkdir::WalkDir;

/// File suffixes recognized as LoRA weight files, matched
/// case-sensitively against the basename.
pub const RECOGNIZED_EXTENSIONS: &[&str] = &[".safetensors", ".ckpt", ".pt"];

/// A discovered weight file.
///
/// `full_path` is valid at the moment of discovery; a file removed
/// between discovery and hashing surfaces as a hash failure, not a
/// stale record.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct FileRecord {
    /// Basename exactly as stored on disk
    pub filename: String,
    /// Path relative to its search root, forward-slash separated
    pub relative_path: String,
    /// Absolute path used for hashing, not serialized
    #[serde(skip)]
    pub full_path: PathBuf,
}

fn has_recognized_extension(name: &str) -> bool {
    RECOGNIZED_EXTENSIONS.iter().any(|ext| name.ends_with(ext))
}

fn to_forward_slashes(path: &Path) -> String {
    path.components()
        .map(|c| c.as_os_str().to_string_lossy())
        .collect::<Vec<_>>()
        .join("/")
}

/// A query may only be joined onto a root if it cannot escape it.
fn is_plain_relative(path: &Path) -> bool {
    path.is_relative()
        && path
            .components()
            .all(|c| matches!(c, Component::Normal(_)))
}

/// Enumerate every recognized file under every root.
///
/// Roots are visited in configured order; within a root, records are
/// sorted by relative path so repeated scans enumerate identically.
/// A root that does not exist contributes nothing and raises no error.
/// Symlinks are followed; walkdir's ancestor check bounds link cycles,
/// and unreadable entries are skipped with a warning.
pub fn list_all(roots: &[PathBuf]) -> Vec<FileRecord> {
    let mut records = Vec::new();

    for root in roots {
        if !root.is_dir() {
            continue;
        }

        let mut in_root = Vec::new();
        for entry in WalkDir::new(root).follow_links(true) {
            let entry = match entry {
                Ok(entry) => entry,
                Err(err) => {
                    tracing::warn!(root = %root.display(), error = %err, "Skipping unreadable entry");
                    continue;
                }
            };

            if !entry.file_type().is_file() {
                continue;
            }

            let filename = entry.file_name().to_string_lossy().to_string();
            if !has_recognized_extension(&filename) {
                continue;
            }

            let Ok(relative) = entry.path().strip_prefix(root) else {
                continue;
            };

            in_root.push(FileRecord {
                filename,
                relative_path: to_forward_slashes(relative),
                full_path: entry.path().to_path_buf(),
            });
        }

        in_root.sort_by(|a, b| a.relative_path.cmp(&b.relative_path));
        records.extend(in_root);
    }

    records
}

/// Resolve a query to a single record, or `None` if nothing matches.
///
/// Precedence: direct join under each root, then exact basename match,
/// then exact relative-path match, always in root order then walk
/// order. `query` must already be percent-decoded; matching is
/// case-sensitive.
pub fn find_one(roots: &[PathBuf], query: &str) -> Option<FileRecord> {
    let query_path = Path::new(query);

    if is_plain_relative(query_path) && has_recognized_extension(query) {
        for root in roots {
            let candidate = root.join(query_path);
            if candidate.is_file() {
                return Some(FileRecord {
                    filename: query_path.file_name()?.to_string_lossy().to_string(),
                    relative_path: to_forward_slashes(query_path),
                    full_path: candidate,
                });
            }
        }
    }

    let records = list_all(roots);

    if let Some(record) = records.iter().find(|r| r.filename == query) {
        return Some(record.clone());
    }

    records.into_iter().find(|r| r.relative_path == query)
}
