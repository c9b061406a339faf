//! Integration tests that run the API in-process for code coverage
//!
//! These tests exercise the API handlers directly using axum-test,
//! which runs in-process against temporary model directories.

use axum_test::TestServer;
use lora_inventory::api::{AppState, create_router};
use lora_inventory::config::InventoryConfig;
use sha2::{Digest, Sha256};
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tempfile::TempDir;

/// Helper to create a test server over the given model roots
fn create_test_server(roots: Vec<PathBuf>) -> TestServer {
    let config = InventoryConfig {
        model_roots: roots,
        ..Default::default()
    };

    let state = AppState {
        config: Arc::new(config),
    };

    let app = create_router(state);
    TestServer::new(app)
}

fn touch(root: &Path, relative: &str, content: &[u8]) {
    let path = root.join(relative);
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent).expect("Failed to create parent dirs");
    }
    std::fs::write(&path, content).expect("Failed to write file");
}

fn hex_digest(content: &[u8]) -> String {
    format!("{:x}", Sha256::digest(content))
}

#[tokio::test]
async fn test_ping() {
    let server = create_test_server(Vec::new());

    let response = server.get("/api/vcc/lora-hash/ping").await;

    assert_eq!(response.status_code(), 200);

    let body: serde_json::Value = response.json();
    assert_eq!(body["success"], true);
    assert!(body["message"].is_string());
    assert_eq!(body["version"], env!("CARGO_PKG_VERSION"));
}

#[tokio::test]
async fn test_ping_ignores_filesystem_state() {
    // Roots that do not exist must not affect liveness
    let server = create_test_server(vec![PathBuf::from("/definitely/not/present")]);

    let response = server.get("/api/vcc/lora-hash/ping").await;

    assert_eq!(response.status_code(), 200);
    let body: serde_json::Value = response.json();
    assert_eq!(body["success"], true);
}

#[tokio::test]
async fn test_list_hashes_across_two_roots() {
    let root_a = TempDir::new().unwrap();
    let root_b = TempDir::new().unwrap();
    touch(root_a.path(), "x/sub/model1.safetensors", b"weights one");
    touch(root_a.path(), "model2.pt", b"weights two");
    touch(root_b.path(), "model1.safetensors", b"different content");

    let server = create_test_server(vec![
        root_a.path().to_path_buf(),
        root_b.path().to_path_buf(),
    ]);

    let response = server.get("/api/vcc/lora-hashes").await;

    assert_eq!(response.status_code(), 200);

    let body: serde_json::Value = response.json();
    assert_eq!(body["success"], true);
    assert_eq!(body["total"], 3);

    let loras = body["loras"].as_array().unwrap();
    let paths: Vec<&str> = loras
        .iter()
        .map(|l| l["relative_path"].as_str().unwrap())
        .collect();
    assert_eq!(
        paths,
        vec!["model2.pt", "x/sub/model1.safetensors", "model1.safetensors"]
    );

    // Duplicate basenames in different roots are distinct records with
    // their own digests.
    assert_eq!(loras[0]["sha256"], hex_digest(b"weights two"));
    assert_eq!(loras[1]["sha256"], hex_digest(b"weights one"));
    assert_eq!(loras[2]["sha256"], hex_digest(b"different content"));
    assert_ne!(loras[1]["sha256"], loras[2]["sha256"]);
}

#[tokio::test]
async fn test_list_hashes_no_roots_configured() {
    let server = create_test_server(Vec::new());

    let response = server.get("/api/vcc/lora-hashes").await;

    assert_eq!(response.status_code(), 200);

    let body: serde_json::Value = response.json();
    assert_eq!(body["success"], true);
    assert_eq!(body["total"], 0);
    assert_eq!(body["loras"].as_array().unwrap().len(), 0);
}

#[tokio::test]
async fn test_list_hashes_missing_root_contributes_nothing() {
    let root = TempDir::new().unwrap();
    touch(root.path(), "only.pt", b"w");

    let server = create_test_server(vec![
        PathBuf::from("/definitely/not/present"),
        root.path().to_path_buf(),
    ]);

    let response = server.get("/api/vcc/lora-hashes").await;

    assert_eq!(response.status_code(), 200);

    let body: serde_json::Value = response.json();
    assert_eq!(body["total"], 1);
    assert_eq!(body["loras"][0]["filename"], "only.pt");
}

#[tokio::test]
async fn test_single_hash_by_basename() {
    let root = TempDir::new().unwrap();
    touch(root.path(), "model2.pt", b"weights two");

    let server = create_test_server(vec![root.path().to_path_buf()]);

    let response = server.get("/api/vcc/lora-hash/model2.pt").await;

    assert_eq!(response.status_code(), 200);

    let body: serde_json::Value = response.json();
    assert_eq!(body["success"], true);
    assert_eq!(body["filename"], "model2.pt");
    assert_eq!(body["relative_path"], "model2.pt");
    assert_eq!(body["sha256"], hex_digest(b"weights two"));
}

#[tokio::test]
async fn test_single_hash_by_nested_relative_path() {
    let root = TempDir::new().unwrap();
    touch(root.path(), "x/sub/model1.safetensors", b"weights one");

    let server = create_test_server(vec![root.path().to_path_buf()]);

    // The path parameter carries embedded separators
    let response = server.get("/api/vcc/lora-hash/x/sub/model1.safetensors").await;

    assert_eq!(response.status_code(), 200);

    let body: serde_json::Value = response.json();
    assert_eq!(body["filename"], "model1.safetensors");
    assert_eq!(body["relative_path"], "x/sub/model1.safetensors");
    assert_eq!(body["sha256"], hex_digest(b"weights one"));
}

#[tokio::test]
async fn test_single_hash_percent_encoded_filename() {
    let root = TempDir::new().unwrap();
    touch(root.path(), "my model.safetensors", b"spaced out");

    let server = create_test_server(vec![root.path().to_path_buf()]);

    let response = server.get("/api/vcc/lora-hash/my%20model.safetensors").await;

    assert_eq!(response.status_code(), 200);

    let body: serde_json::Value = response.json();
    assert_eq!(body["filename"], "my model.safetensors");
    assert_eq!(body["sha256"], hex_digest(b"spaced out"));
}

#[tokio::test]
async fn test_single_hash_basename_found_in_subdirectory() {
    let root = TempDir::new().unwrap();
    touch(root.path(), "styles/anime.safetensors", b"w");

    let server = create_test_server(vec![root.path().to_path_buf()]);

    let response = server.get("/api/vcc/lora-hash/anime.safetensors").await;

    assert_eq!(response.status_code(), 200);

    let body: serde_json::Value = response.json();
    assert_eq!(body["relative_path"], "styles/anime.safetensors");
}

#[tokio::test]
async fn test_single_hash_not_found() {
    let root = TempDir::new().unwrap();
    touch(root.path(), "present.pt", b"w");

    let server = create_test_server(vec![root.path().to_path_buf()]);

    let response = server.get("/api/vcc/lora-hash/does-not-exist.pt").await;

    assert_eq!(response.status_code(), 404);

    let body: serde_json::Value = response.json();
    assert_eq!(body["success"], false);
    assert!(
        body["error"]
            .as_str()
            .unwrap()
            .contains("does-not-exist.pt")
    );
}

#[tokio::test]
async fn test_single_hash_missing_filename() {
    let server = create_test_server(Vec::new());

    let response = server.get("/api/vcc/lora-hash/").await;
    assert_eq!(response.status_code(), 400);

    let body: serde_json::Value = response.json();
    assert_eq!(body["success"], false);
    assert_eq!(body["error"], "filename is required");

    let response = server.get("/api/vcc/lora-hash").await;
    assert_eq!(response.status_code(), 400);
}
