use chrono::{TimeZone, Utc};

use propwatch_core::errors::CoreError;
use propwatch_core::models::watchlist::{AlertType, NewAlert, Watchlist};
use propwatch_core::providers::mock::seed_properties;
use propwatch_core::services::watchlist_service::WatchlistService;
use propwatch_core::storage::format::{self, CURRENT_VERSION};
use propwatch_core::storage::kv::{FileStore, KeyValueStore, MemoryStore};
use propwatch_core::storage::manager::StorageManager;

/// Watchlist with three seed listings and a mix of read/unread alerts.
fn sample_watchlist() -> Watchlist {
    let svc = WatchlistService::new();
    let mut w = Watchlist::new();
    let props = seed_properties();
    let base = Utc.with_ymd_and_hms(2025, 1, 15, 8, 30, 45).unwrap();

    for (n, p) in props.into_iter().take(3).enumerate() {
        svc.add(&mut w, p, base + chrono::Duration::hours(n as i64));
    }
    svc.add_alert(
        &mut w,
        "1",
        NewAlert::at(AlertType::PriceDrop, "Down to S$640/sqft", base),
    );
    let read_id = svc
        .add_alert(
            &mut w,
            "1",
            NewAlert::at(AlertType::UndervaluationChange, "Now 14% below", base),
        )
        .unwrap();
    svc.mark_alert_read(&mut w, "1", &read_id);
    svc.add_alert(
        &mut w,
        "3",
        NewAlert::at(AlertType::PriceDrop, "Down 2%", base),
    );
    w
}

// ═══════════════════════════════════════════════════════════════════
// Snapshot format
// ═══════════════════════════════════════════════════════════════════

mod snapshot_format {
    use super::*;

    #[test]
    fn envelope_layout() {
        let blob = format::write_snapshot(&sample_watchlist()).unwrap();
        let value: serde_json::Value = serde_json::from_str(&blob).unwrap();
        assert_eq!(value["version"], CURRENT_VERSION);
        let items = value["state"]["watchlist"].as_array().unwrap();
        assert_eq!(items.len(), 3);
        assert_eq!(items[0]["property"]["id"], "1");
        assert_eq!(items[0]["alerts"][0]["type"], "PRICE_DROP");
        assert_eq!(items[0]["alerts"][1]["read"], true);
    }

    #[test]
    fn round_trip_preserves_everything() {
        let original = sample_watchlist();
        let blob = format::write_snapshot(&original).unwrap();
        let restored = format::read_snapshot(&blob).unwrap();

        assert_eq!(restored, original);
        let ids: Vec<&str> = restored.items().iter().map(|i| i.property_id()).collect();
        assert_eq!(ids, vec!["1", "2", "3"]);
        for (a, b) in restored.items().iter().zip(original.items()) {
            assert_eq!(a.added_at.timestamp(), b.added_at.timestamp());
            assert_eq!(a.alerts, b.alerts);
        }
        assert!(restored.contains("2"));
        assert_eq!(restored.unread_count(), 2);
    }

    #[test]
    fn empty_watchlist_round_trip() {
        let blob = format::write_snapshot(&Watchlist::new()).unwrap();
        assert!(format::read_snapshot(&blob).unwrap().is_empty());
    }

    #[test]
    fn reads_client_written_blob() {
        let blob = r#"{"state":{"watchlist":[{"property":{"id":"7","name":"Bishan Loft",
            "address":"Block 279A, #14-177, Bishan Street 24","pricePerSqft":800,"size":1300,
            "type":"HDB","roomType":"5-room","undervaluationScore":0,
            "coordinates":{"latitude":1.3526,"longitude":103.8352},
            "priceHistory":[{"month":"Jan","price":790}]},
            "addedAt":"2025-04-02T03:04:05.678Z",
            "alerts":[{"id":"x1y2z3a","type":"PRICE_DROP","message":"Dropped","createdAt":"2025-04-03T00:00:00.000Z","read":false}]}]},
            "version":0}"#;
        let w = format::read_snapshot(blob).unwrap();
        let item = w.get("7").unwrap();
        assert_eq!(
            item.added_at,
            Utc.with_ymd_and_hms(2025, 4, 2, 3, 4, 5).unwrap() + chrono::Duration::milliseconds(678)
        );
        assert_eq!(item.alerts[0].id, "x1y2z3a");
    }

    #[test]
    fn missing_version_defaults_to_current() {
        let w = format::read_snapshot(r#"{"state":{"watchlist":[]}}"#).unwrap();
        assert!(w.is_empty());
    }

    #[test]
    fn rejects_other_versions() {
        let err = format::read_snapshot(r#"{"state":{"watchlist":[]},"version":3}"#).unwrap_err();
        assert!(matches!(err, CoreError::UnsupportedVersion(3)));
    }

    #[test]
    fn rejects_garbage() {
        for blob in ["", "not json", "[]", r#"{"state":{"watchlist":{}}}"#] {
            let err = format::read_snapshot(blob).unwrap_err();
            assert!(matches!(err, CoreError::Deserialization(_)), "blob {blob:?}");
        }
    }
}

// ═══════════════════════════════════════════════════════════════════
// MemoryStore
// ═══════════════════════════════════════════════════════════════════

mod memory_store {
    use super::*;

    #[test]
    fn get_set_remove() {
        let mut store = MemoryStore::new();
        assert_eq!(store.get("k").unwrap(), None);
        store.set("k", "v1").unwrap();
        store.set("k", "v2").unwrap();
        assert_eq!(store.get("k").unwrap().as_deref(), Some("v2"));
        store.remove("k").unwrap();
        assert_eq!(store.get("k").unwrap(), None);
        store.remove("k").unwrap();
    }

    #[test]
    fn clones_share_entries() {
        let handle = MemoryStore::new();
        let mut owned = handle.clone();
        owned.set("k", "v").unwrap();
        assert_eq!(handle.get("k").unwrap().as_deref(), Some("v"));
    }
}

// ═══════════════════════════════════════════════════════════════════
// FileStore
// ═══════════════════════════════════════════════════════════════════

mod file_store {
    use super::*;

    #[test]
    fn creates_directory_and_round_trips() {
        let dir = tempfile::tempdir().unwrap();
        let nested = dir.path().join("a").join("b");
        let mut store = FileStore::open(&nested).unwrap();
        assert!(nested.is_dir());

        assert_eq!(store.get("watchlist-storage").unwrap(), None);
        store.set("watchlist-storage", "{\"x\":1}").unwrap();
        assert!(nested.join("watchlist-storage.json").is_file());
        assert!(!nested.join("watchlist-storage.json.tmp").exists());
        assert_eq!(
            store.get("watchlist-storage").unwrap().as_deref(),
            Some("{\"x\":1}")
        );

        store.remove("watchlist-storage").unwrap();
        assert_eq!(store.get("watchlist-storage").unwrap(), None);
        store.remove("watchlist-storage").unwrap();
    }

    #[test]
    fn rejects_path_like_keys() {
        let dir = tempfile::tempdir().unwrap();
        let mut store = FileStore::open(dir.path()).unwrap();
        for key in ["", "..", "a/b", "a\\b"] {
            assert!(
                matches!(store.set(key, "v"), Err(CoreError::ValidationError(_))),
                "key {key:?}"
            );
        }
    }

    #[test]
    fn reopen_sees_previous_writes() {
        let dir = tempfile::tempdir().unwrap();
        {
            let mut store = FileStore::open(dir.path()).unwrap();
            store.set("k", "persisted").unwrap();
        }
        let store = FileStore::open(dir.path()).unwrap();
        assert_eq!(store.get("k").unwrap().as_deref(), Some("persisted"));
    }
}

// ═══════════════════════════════════════════════════════════════════
// StorageManager
// ═══════════════════════════════════════════════════════════════════

mod storage_manager {
    use super::*;

    #[test]
    fn string_round_trip() {
        let w = sample_watchlist();
        let s = StorageManager::save_to_string(&w).unwrap();
        assert_eq!(StorageManager::load_from_str(&s).unwrap(), w);
    }

    #[test]
    fn store_round_trip() {
        let mut store = MemoryStore::new();
        let w = sample_watchlist();
        StorageManager::save_to_store(&mut store, "wl", &w).unwrap();
        let loaded = StorageManager::load_from_store(&store, "wl").unwrap();
        assert_eq!(loaded, Some(w));
    }

    #[test]
    fn missing_key_is_none() {
        let store = MemoryStore::new();
        assert_eq!(StorageManager::load_from_store(&store, "wl").unwrap(), None);
    }

    #[test]
    fn corrupt_blob_is_error() {
        let mut store = MemoryStore::new();
        store.set("wl", "{broken").unwrap();
        assert!(StorageManager::load_from_store(&store, "wl").is_err());
    }

    #[test]
    fn file_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let mut store = FileStore::open(dir.path()).unwrap();
        let w = sample_watchlist();
        StorageManager::save_to_store(&mut store, "watchlist-storage", &w).unwrap();

        let reopened = FileStore::open(dir.path()).unwrap();
        let loaded = StorageManager::load_from_store(&reopened, "watchlist-storage")
            .unwrap()
            .unwrap();
        assert_eq!(loaded, w);
    }
}
