use std::env;
use std::path::PathBuf;

use crate::errors::CoreError;
use crate::storage::kv::{KeyValueStore, MemoryStore};

/// Blob name the watchlist snapshot is stored under.
pub const DEFAULT_STORAGE_KEY: &str = "watchlist-storage";

pub const ENV_STORAGE_KEY: &str = "PROPWATCH_STORAGE_KEY";
pub const ENV_DATA_DIR: &str = "PROPWATCH_DATA_DIR";

/// Where and under which key the watchlist is persisted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StoreConfig {
    pub storage_key: String,
    /// Directory for file-backed storage; `None` keeps snapshots in memory.
    pub data_dir: Option<PathBuf>,
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            storage_key: DEFAULT_STORAGE_KEY.to_string(),
            data_dir: None,
        }
    }
}

impl StoreConfig {
    /// Read `PROPWATCH_STORAGE_KEY` / `PROPWATCH_DATA_DIR`, loading a `.env`
    /// file first when one exists.
    pub fn from_env() -> Result<Self, CoreError> {
        dotenvy::dotenv().ok();

        let storage_key =
            env::var(ENV_STORAGE_KEY).unwrap_or_else(|_| DEFAULT_STORAGE_KEY.to_string());
        let data_dir = env::var(ENV_DATA_DIR)
            .ok()
            .filter(|d| !d.trim().is_empty())
            .map(PathBuf::from);

        let config = Self {
            storage_key,
            data_dir,
        };
        config.validate()?;
        Ok(config)
    }

    pub fn with_data_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.data_dir = Some(dir.into());
        self
    }

    pub fn with_storage_key(mut self, key: impl Into<String>) -> Self {
        self.storage_key = key.into();
        self
    }

    pub fn validate(&self) -> Result<(), CoreError> {
        if self.storage_key.trim().is_empty() {
            return Err(CoreError::ValidationError(
                "storage key must not be empty".into(),
            ));
        }
        Ok(())
    }

    /// File-backed store when a data directory is configured (native only),
    /// in-memory otherwise.
    pub fn open_store(&self) -> Result<Box<dyn KeyValueStore>, CoreError> {
        self.validate()?;
        match &self.data_dir {
            #[cfg(not(target_arch = "wasm32"))]
            Some(dir) => Ok(Box::new(crate::storage::kv::FileStore::open(dir)?)),
            _ => Ok(Box::new(MemoryStore::new())),
        }
    }
}
