use chrono::{DateTime, Utc};

use crate::config::StoreConfig;
use crate::errors::CoreError;
use crate::models::property::Property;
use crate::models::valuation::MarkerCategory;
use crate::models::watchlist::{NewAlert, Watchlist, WatchlistItem};
use crate::services::valuation_service::ValuationService;
use crate::services::watchlist_service::WatchlistService;
use crate::storage::kv::{KeyValueStore, MemoryStore};
use crate::storage::manager::StorageManager;

/// The user's watchlist: single owner of the in-memory snapshot and
/// write-through cache over a key-value blob.
///
/// Mutations apply to memory first, then the whole snapshot is written.
/// A failed write never fails the mutation: memory stays authoritative, the
/// store is marked dirty and the error is kept for [`Self::last_persist_error`].
#[must_use]
pub struct WatchlistStore {
    watchlist: Watchlist,
    watchlist_service: WatchlistService,
    backend: Box<dyn KeyValueStore>,
    storage_key: String,
    /// Memory holds changes the backend has not accepted yet.
    dirty: bool,
    last_persist_error: Option<String>,
}

impl std::fmt::Debug for WatchlistStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("WatchlistStore")
            .field("items", &self.watchlist.len())
            .field("backend", &self.backend.name())
            .field("storage_key", &self.storage_key)
            .field("dirty", &self.dirty)
            .finish()
    }
}

impl WatchlistStore {
    /// Load the last snapshot from `backend`. A missing, unreadable or
    /// corrupt snapshot yields an empty watchlist.
    pub fn open(backend: Box<dyn KeyValueStore>, storage_key: impl Into<String>) -> Self {
        let storage_key = storage_key.into();
        let mut last_persist_error = None;

        let watchlist = match StorageManager::load_from_store(backend.as_ref(), &storage_key) {
            Ok(Some(watchlist)) => {
                tracing::info!(key = %storage_key, items = watchlist.len(), "watchlist restored");
                watchlist
            }
            Ok(None) => Watchlist::new(),
            Err(e) => {
                tracing::warn!(key = %storage_key, error = %e, "failed to load watchlist snapshot, starting empty");
                last_persist_error = Some(e.to_string());
                Watchlist::new()
            }
        };

        Self {
            watchlist,
            watchlist_service: WatchlistService::new(),
            backend,
            storage_key,
            dirty: false,
            last_persist_error,
        }
    }

    /// Open the backend described by `config` and load from it.
    pub fn from_config(config: &StoreConfig) -> Result<Self, CoreError> {
        let backend = config.open_store()?;
        Ok(Self::open(backend, config.storage_key.clone()))
    }

    /// Empty store over a private in-memory backend.
    pub fn in_memory() -> Self {
        Self::open(Box::new(MemoryStore::new()), crate::config::DEFAULT_STORAGE_KEY)
    }

    // ── Membership ──────────────────────────────────────────────────

    /// Watch a property. No-op (returns `false`) if its id is already watched.
    pub fn add(&mut self, property: Property) -> bool {
        self.add_at(property, Utc::now())
    }

    /// Like [`Self::add`] with an explicit `added_at`.
    pub fn add_at(&mut self, property: Property, added_at: DateTime<Utc>) -> bool {
        let changed = self.watchlist_service.add(&mut self.watchlist, property, added_at);
        if changed {
            self.persist();
        }
        changed
    }

    /// Stop watching a property. No-op (returns `false`) if it wasn't watched.
    pub fn remove(&mut self, property_id: &str) -> bool {
        let changed = self.watchlist_service.remove(&mut self.watchlist, property_id);
        if changed {
            self.persist();
        }
        changed
    }

    #[must_use]
    pub fn contains(&self, property_id: &str) -> bool {
        self.watchlist.contains(property_id)
    }

    // ── Alerts ──────────────────────────────────────────────────────

    /// Attach an unread alert; returns its id, or `None` if the property is
    /// not watched.
    pub fn add_alert(&mut self, property_id: &str, alert: NewAlert) -> Option<String> {
        let id = self.watchlist_service.add_alert(&mut self.watchlist, property_id, alert);
        if id.is_some() {
            self.persist();
        }
        id
    }

    /// Mark an alert read. Returns `true` if it was unread.
    pub fn mark_alert_read(&mut self, property_id: &str, alert_id: &str) -> bool {
        let changed = self
            .watchlist_service
            .mark_alert_read(&mut self.watchlist, property_id, alert_id);
        if changed {
            self.persist();
        }
        changed
    }

    /// Drop every alert of one property. Returns `true` if any were dropped.
    pub fn clear_alerts(&mut self, property_id: &str) -> bool {
        let changed = self.watchlist_service.clear_alerts(&mut self.watchlist, property_id);
        if changed {
            self.persist();
        }
        changed
    }

    /// Drop every alert of every property in one update and one write.
    /// Returns the number of alerts dropped.
    pub fn clear_all_alerts(&mut self) -> usize {
        let dropped = self.watchlist_service.clear_all_alerts(&mut self.watchlist);
        if dropped > 0 {
            self.persist();
        }
        dropped
    }

    // ── Queries ─────────────────────────────────────────────────────

    /// Watched items in the order they were added.
    #[must_use]
    pub fn items(&self) -> &[WatchlistItem] {
        self.watchlist.items()
    }

    #[must_use]
    pub fn watchlist(&self) -> &Watchlist {
        &self.watchlist
    }

    #[must_use]
    pub fn get(&self, property_id: &str) -> Option<&WatchlistItem> {
        self.watchlist.get(property_id)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.watchlist.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.watchlist.is_empty()
    }

    /// Unread alerts across the whole watchlist.
    #[must_use]
    pub fn unread_count(&self) -> usize {
        self.watchlist.unread_count()
    }

    /// Marker category of a watched property, computed from its score.
    #[must_use]
    pub fn category_of(&self, property_id: &str) -> Option<MarkerCategory> {
        self.get(property_id)
            .map(|item| ValuationService::classify_property(&item.property))
    }

    // ── Persistence ─────────────────────────────────────────────────

    #[must_use]
    pub fn storage_key(&self) -> &str {
        &self.storage_key
    }

    /// `true` when the last write failed and memory is ahead of storage.
    #[must_use]
    pub fn has_unsaved_changes(&self) -> bool {
        self.dirty
    }

    /// Message of the most recent load/write failure, cleared by the next
    /// successful write.
    #[must_use]
    pub fn last_persist_error(&self) -> Option<&str> {
        self.last_persist_error.as_deref()
    }

    /// Write the current snapshot again and report the outcome.
    pub fn retry_persist(&mut self) -> Result<(), CoreError> {
        let result = StorageManager::save_to_store(self.backend.as_mut(), &self.storage_key, &self.watchlist);
        self.record_persist(&result);
        result
    }

    /// Snapshot blob exactly as it is written to storage.
    pub fn to_json(&self) -> Result<String, CoreError> {
        StorageManager::save_to_string(&self.watchlist)
    }

    // ── Internal ────────────────────────────────────────────────────

    fn persist(&mut self) {
        let result = StorageManager::save_to_store(self.backend.as_mut(), &self.storage_key, &self.watchlist);
        if let Err(e) = &result {
            tracing::warn!(
                key = %self.storage_key,
                backend = self.backend.name(),
                error = %e,
                "failed to persist watchlist, keeping in-memory state"
            );
        }
        self.record_persist(&result);
    }

    fn record_persist(&mut self, result: &Result<(), CoreError>) {
        match result {
            Ok(()) => {
                self.dirty = false;
                self.last_persist_error = None;
            }
            Err(e) => {
                self.dirty = true;
                self.last_persist_error = Some(e.to_string());
            }
        }
    }
}
