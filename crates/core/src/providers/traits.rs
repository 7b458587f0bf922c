use async_trait::async_trait;

use crate::errors::CoreError;
use crate::models::property::{Property, PropertyType};

/// Upstream listing data source.
///
/// The UI layer fetches listings through this trait and hands individual
/// `Property` values to the watchlist store; the store itself never calls it.
/// Failures surface as `CoreError::Fetch` for the caller to display.
#[cfg_attr(target_arch = "wasm32", async_trait(?Send))]
#[cfg_attr(not(target_arch = "wasm32"), async_trait)]
pub trait PropertySource: Send + Sync {
    /// Human-readable name of this source (for logs/errors).
    fn name(&self) -> &str;

    /// Every listing, in source order.
    async fn fetch_all(&self) -> Result<Vec<Property>, CoreError>;

    /// A single listing, `None` if the id is unknown.
    async fn fetch_by_id(&self, id: &str) -> Result<Option<Property>, CoreError>;

    async fn fetch_by_type(&self, property_type: PropertyType) -> Result<Vec<Property>, CoreError>;

    /// Listings whose price per sqft lies in `[min, max]` (inclusive).
    async fn fetch_by_price_range(&self, min: f64, max: f64) -> Result<Vec<Property>, CoreError>;
}
