use serde::{Deserialize, Serialize};

use super::property::PropertyType;

/// Lower bound of the default price range, SGD per sqft.
pub const DEFAULT_MIN_PSF: f64 = 0.0;

/// Upper bound of the default price range, SGD per sqft.
pub const DEFAULT_MAX_PSF: f64 = 5000.0;

/// Property-type selector of the filter bar.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum PropertyTypeFilter {
    #[default]
    #[serde(rename = "ALL")]
    All,
    #[serde(untagged)]
    Only(PropertyType),
}

impl PropertyTypeFilter {
    pub fn matches(&self, property_type: PropertyType) -> bool {
        match self {
            PropertyTypeFilter::All => true,
            PropertyTypeFilter::Only(t) => *t == property_type,
        }
    }
}

impl From<PropertyType> for PropertyTypeFilter {
    fn from(t: PropertyType) -> Self {
        PropertyTypeFilter::Only(t)
    }
}

/// Inclusive price-per-sqft bounds.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PriceRange {
    pub min: f64,
    pub max: f64,
}

impl PriceRange {
    pub fn new(min: f64, max: f64) -> Self {
        Self { min, max }
    }

    pub fn contains(&self, price_per_sqft: f64) -> bool {
        price_per_sqft >= self.min && price_per_sqft <= self.max
    }
}

impl Default for PriceRange {
    fn default() -> Self {
        Self::new(DEFAULT_MIN_PSF, DEFAULT_MAX_PSF)
    }
}

/// Current filter-bar selection.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PropertyFilter {
    pub property_type: PropertyTypeFilter,
    pub price_range: PriceRange,
    /// Kept for the filter bar; listings carry no district yet, so it does
    /// not narrow results.
    #[serde(default)]
    pub district: Option<String>,
}
