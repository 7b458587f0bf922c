use chrono::{DateTime, Utc};
use uuid::Uuid;

use crate::models::property::Property;
use crate::models::watchlist::{NewAlert, Watchlist, WatchlistAlert, WatchlistItem};

/// Watchlist membership and alert lifecycle rules.
///
/// Pure business logic, no I/O. Lookups on unknown ids are no-ops reported
/// through the return value, never errors.
pub struct WatchlistService;

impl WatchlistService {
    pub fn new() -> Self {
        Self
    }

    /// Append a property. First add wins: an existing entry is left untouched
    /// (including its `added_at`) and `false` is returned.
    pub fn add(&self, watchlist: &mut Watchlist, property: Property, added_at: DateTime<Utc>) -> bool {
        if watchlist.contains(&property.id) {
            tracing::debug!(property_id = %property.id, "already on watchlist");
            return false;
        }
        watchlist.push(WatchlistItem::new(property, added_at))
    }

    pub fn remove(&self, watchlist: &mut Watchlist, property_id: &str) -> bool {
        let removed = watchlist.remove(property_id).is_some();
        if !removed {
            tracing::debug!(property_id, "remove: not on watchlist");
        }
        removed
    }

    /// Append an unread alert to a watched property and return its new id.
    /// Returns `None` when the property is not on the watchlist.
    pub fn add_alert(&self, watchlist: &mut Watchlist, property_id: &str, alert: NewAlert) -> Option<String> {
        let Some(alerts) = watchlist.alerts_mut(property_id) else {
            tracing::debug!(property_id, "add_alert: not on watchlist");
            return None;
        };

        let id = Self::fresh_alert_id(alerts);
        alerts.push(WatchlistAlert {
            id: id.clone(),
            alert_type: alert.alert_type,
            message: alert.message,
            created_at: alert.created_at,
            read: false,
        });
        Some(id)
    }

    /// Mark one alert read. Returns `true` only if the alert flipped from
    /// unread to read; repeated calls are harmless.
    pub fn mark_alert_read(&self, watchlist: &mut Watchlist, property_id: &str, alert_id: &str) -> bool {
        let Some(alert) = watchlist
            .alerts_mut(property_id)
            .and_then(|alerts| alerts.iter_mut().find(|a| a.id == alert_id))
        else {
            tracing::debug!(property_id, alert_id, "mark_alert_read: alert not found");
            return false;
        };

        if alert.read {
            return false;
        }
        alert.read = true;
        true
    }

    /// Empty one item's alerts. Returns `true` if any alerts were dropped.
    pub fn clear_alerts(&self, watchlist: &mut Watchlist, property_id: &str) -> bool {
        match watchlist.alerts_mut(property_id) {
            Some(alerts) => {
                let had_alerts = !alerts.is_empty();
                alerts.clear();
                had_alerts
            }
            None => {
                tracing::debug!(property_id, "clear_alerts: not on watchlist");
                false
            }
        }
    }

    /// Empty every item's alerts. Returns the number of alerts dropped.
    pub fn clear_all_alerts(&self, watchlist: &mut Watchlist) -> usize {
        watchlist
            .alerts_iter_mut()
            .map(|alerts| {
                let n = alerts.len();
                alerts.clear();
                n
            })
            .sum()
    }

    // Unique within the item, including short ids loaded from older snapshots.
    fn fresh_alert_id(alerts: &[WatchlistAlert]) -> String {
        loop {
            let id = Uuid::new_v4().to_string();
            if alerts.iter().all(|a| a.id != id) {
                return id;
            }
        }
    }
}

impl Default for WatchlistService {
    fn default() -> Self {
        Self::new()
    }
}
