use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

use super::property::Property;

/// What triggered an alert on a watched property.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum AlertType {
    PriceDrop,
    UndervaluationChange,
}

impl std::fmt::Display for AlertType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            AlertType::PriceDrop => write!(f, "PRICE_DROP"),
            AlertType::UndervaluationChange => write!(f, "UNDERVALUATION_CHANGE"),
        }
    }
}

/// A notification attached to a watched property.
///
/// `read` only ever moves from `false` to `true`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WatchlistAlert {
    /// Unique within the parent item. Older snapshots carry short random
    /// strings, new alerts get a UUID.
    pub id: String,

    #[serde(rename = "type")]
    pub alert_type: AlertType,

    pub message: String,

    pub created_at: DateTime<Utc>,

    #[serde(default)]
    pub read: bool,
}

/// Alert payload handed in by the caller; the store assigns id and read state.
#[derive(Debug, Clone, PartialEq)]
pub struct NewAlert {
    pub alert_type: AlertType,
    pub message: String,
    pub created_at: DateTime<Utc>,
}

impl NewAlert {
    /// Alert stamped with the current time.
    pub fn new(alert_type: AlertType, message: impl Into<String>) -> Self {
        Self::at(alert_type, message, Utc::now())
    }

    pub fn at(alert_type: AlertType, message: impl Into<String>, created_at: DateTime<Utc>) -> Self {
        Self {
            alert_type,
            message: message.into(),
            created_at,
        }
    }

    pub fn price_drop(message: impl Into<String>) -> Self {
        Self::new(AlertType::PriceDrop, message)
    }

    pub fn undervaluation_change(message: impl Into<String>) -> Self {
        Self::new(AlertType::UndervaluationChange, message)
    }
}

/// One watched property with its alert history.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WatchlistItem {
    pub property: Property,

    pub added_at: DateTime<Utc>,

    /// Oldest first
    #[serde(default)]
    pub alerts: Vec<WatchlistAlert>,
}

impl WatchlistItem {
    pub fn new(property: Property, added_at: DateTime<Utc>) -> Self {
        Self {
            property,
            added_at,
            alerts: Vec::new(),
        }
    }

    pub fn property_id(&self) -> &str {
        &self.property.id
    }

    pub fn unread_count(&self) -> usize {
        self.alerts.iter().filter(|a| !a.read).count()
    }

    pub fn has_unread_alerts(&self) -> bool {
        self.alerts.iter().any(|a| !a.read)
    }

    pub fn find_alert(&self, alert_id: &str) -> Option<&WatchlistAlert> {
        self.alerts.iter().find(|a| a.id == alert_id)
    }
}

/// Ordered watchlist with an id index for constant-time membership checks.
///
/// Serializes as a plain JSON array of items; the index is rebuilt on load.
/// If a snapshot contains the same property id twice, the first entry wins.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(from = "Vec<WatchlistItem>", into = "Vec<WatchlistItem>")]
pub struct Watchlist {
    items: Vec<WatchlistItem>,
    index: HashMap<String, usize>,
}

impl Watchlist {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn items(&self) -> &[WatchlistItem] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn contains(&self, property_id: &str) -> bool {
        self.index.contains_key(property_id)
    }

    pub fn get(&self, property_id: &str) -> Option<&WatchlistItem> {
        self.index.get(property_id).map(|&idx| &self.items[idx])
    }

    /// Mutable alerts of one item. Items themselves are never handed out
    /// mutably, so the property id stays in step with the index.
    pub fn alerts_mut(&mut self, property_id: &str) -> Option<&mut Vec<WatchlistAlert>> {
        let idx = *self.index.get(property_id)?;
        self.items.get_mut(idx).map(|item| &mut item.alerts)
    }

    /// Mutable alerts of every item, in watchlist order.
    pub fn alerts_iter_mut(&mut self) -> impl Iterator<Item = &mut Vec<WatchlistAlert>> + '_ {
        self.items.iter_mut().map(|item| &mut item.alerts)
    }

    /// Append an item. Returns `false` (and drops the item) if its property id
    /// is already present.
    pub fn push(&mut self, item: WatchlistItem) -> bool {
        if self.contains(item.property_id()) {
            return false;
        }
        self.index.insert(item.property.id.clone(), self.items.len());
        self.items.push(item);
        true
    }

    /// Remove and return the item for `property_id`, preserving the order of
    /// the remaining items.
    pub fn remove(&mut self, property_id: &str) -> Option<WatchlistItem> {
        let idx = self.index.remove(property_id)?;
        let removed = self.items.remove(idx);
        for pos in self.index.values_mut() {
            if *pos > idx {
                *pos -= 1;
            }
        }
        Some(removed)
    }

    /// Total unread alerts across all items.
    pub fn unread_count(&self) -> usize {
        self.items.iter().map(WatchlistItem::unread_count).sum()
    }
}

impl PartialEq for Watchlist {
    fn eq(&self, other: &Self) -> bool {
        self.items == other.items
    }
}

impl From<Vec<WatchlistItem>> for Watchlist {
    fn from(items: Vec<WatchlistItem>) -> Self {
        let mut watchlist = Watchlist::new();
        for item in items {
            watchlist.push(item);
        }
        watchlist
    }
}

impl From<Watchlist> for Vec<WatchlistItem> {
    fn from(watchlist: Watchlist) -> Self {
        watchlist.items
    }
}
