//! Configuration structures and loading logic

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use crate::hasher::DEFAULT_CHUNK_SIZE;

/// Service configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct InventoryConfig {
    pub api_port: u16,

    /// Ordered search roots for the LoRA file category. Order matters:
    /// single-file lookups return the first match in root order.
    pub model_roots: Vec<PathBuf>,

    /// Read chunk size for hashing, in bytes
    pub hash_chunk_size: usize,
}

impl Default for InventoryConfig {
    fn default() -> Self {
        Self {
            api_port: default_api_port(),
            model_roots: Vec::new(),
            hash_chunk_size: DEFAULT_CHUNK_SIZE,
        }
    }
}

impl InventoryConfig {
    /// Load configuration from file with environment variable overrides
    pub fn load(path: Option<PathBuf>) -> Result<Self> {
        let mut config = if let Some(path) = path {
            let content = std::fs::read_to_string(&path)
                .with_context(|| format!("Failed to read config file: {:?}", path))?;
            toml::from_str(&content).context("Failed to parse TOML config")?
        } else {
            Self::default()
        };

        // Environment variable overrides
        if let Ok(port) = std::env::var("LORA_INVENTORY_API_PORT") {
            config.api_port = port
                .parse()
                .context("Invalid LORA_INVENTORY_API_PORT value")?;
        }
        if let Ok(roots) = std::env::var("LORA_INVENTORY_MODEL_ROOTS") {
            config.model_roots = std::env::split_paths(&roots).collect();
        }
        if let Ok(chunk) = std::env::var("LORA_INVENTORY_HASH_CHUNK_SIZE") {
            config.hash_chunk_size = chunk
                .parse()
                .context("Invalid LORA_INVENTORY_HASH_CHUNK_SIZE value")?;
        }

        Ok(config)
    }

    /// Validate configuration
    pub fn validate(&self) -> Result<()> {
        if self.api_port < 1024 {
            anyhow::bail!("API port must be >= 1024 (got {})", self.api_port);
        }

        if self.hash_chunk_size < 4096 {
            anyhow::bail!(
                "Hash chunk size must be >= 4096 bytes (got {})",
                self.hash_chunk_size
            );
        }

        for root in &self.model_roots {
            if !root.is_absolute() {
                anyhow::bail!("Model root must be an absolute path: {:?}", root);
            }
        }

        // Missing roots are skipped at query time; only worth a warning here.
        for root in &self.model_roots {
            if !root.is_dir() {
                tracing::warn!(root = %root.display(), "Configured model root does not exist");
            }
        }

        Ok(())
    }

    /// Ordered search roots for the LoRA category, read per request.
    pub fn lora_roots(&self) -> Vec<PathBuf> {
        self.model_roots.clone()
    }
}

fn default_api_port() -> u16 {
    9000
}
