use crate::errors::CoreError;
use crate::models::watchlist::Watchlist;

use super::format;
use super::kv::KeyValueStore;

/// High-level snapshot operations: save/load a watchlist to/from strings or
/// a key-value store.
pub struct StorageManager;

impl StorageManager {
    /// Flow: Watchlist → JSON envelope
    pub fn save_to_string(watchlist: &Watchlist) -> Result<String, CoreError> {
        format::write_snapshot(watchlist)
    }

    /// Flow: JSON envelope → version check → Watchlist
    pub fn load_from_str(data: &str) -> Result<Watchlist, CoreError> {
        format::read_snapshot(data)
    }

    /// Write the full snapshot under `key`.
    pub fn save_to_store(
        store: &mut dyn KeyValueStore,
        key: &str,
        watchlist: &Watchlist,
    ) -> Result<(), CoreError> {
        let blob = Self::save_to_string(watchlist)?;
        store.set(key, &blob)
    }

    /// Read the snapshot under `key`. `Ok(None)` when nothing was ever written.
    pub fn load_from_store(
        store: &dyn KeyValueStore,
        key: &str,
    ) -> Result<Option<Watchlist>, CoreError> {
        match store.get(key)? {
            Some(blob) => Self::load_from_str(&blob).map(Some),
            None => Ok(None),
        }
    }
}
