use serde::{Deserialize, Serialize};

/// Housing segment of a listing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PropertyType {
    /// Public housing flat
    #[serde(rename = "HDB")]
    Hdb,
    /// Condominium / private residence
    #[serde(rename = "PRIVATE")]
    Private,
}

impl std::fmt::Display for PropertyType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            PropertyType::Hdb => write!(f, "HDB"),
            PropertyType::Private => write!(f, "PRIVATE"),
        }
    }
}

/// How much the valuation model trusts a listing's score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ValuationConfidence {
    Low,
    Medium,
    High,
    #[serde(rename = "Very High")]
    VeryHigh,
}

impl std::fmt::Display for ValuationConfidence {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ValuationConfidence::Low => write!(f, "Low"),
            ValuationConfidence::Medium => write!(f, "Medium"),
            ValuationConfidence::High => write!(f, "High"),
            ValuationConfidence::VeryHigh => write!(f, "Very High"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Coordinates {
    pub latitude: f64,
    pub longitude: f64,
}

/// One month of the listing's price-per-sqft history.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PricePoint {
    /// Month label as supplied by the source (e.g., "Jan")
    pub month: String,
    pub price: f64,
}

impl PricePoint {
    pub fn new(month: impl Into<String>, price: f64) -> Self {
        Self {
            month: month.into(),
            price,
        }
    }
}

/// Optional extra facts shown on the property detail card.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AdditionalDetails {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub floor_level: Option<u32>,

    /// e.g., "High", "Mid", "Low"
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub floor_category: Option<String>,

    /// Remaining lease in years
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub remaining_lease: Option<f64>,

    /// Transit accessibility on a 0-10 scale
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub mrt_proximity: Option<f64>,

    /// Number of comparable transactions behind the score
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub comparable_count: Option<u32>,

    /// Median price per sqft in the surrounding area
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub median_area_price: Option<f64>,
}

/// A listing supplied by the property source. Treated as an immutable value.
///
/// Field names serialize in camelCase so persisted snapshots keep the same
/// layout the mobile client has always written.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Property {
    /// Unique listing id
    pub id: String,

    pub name: String,

    pub address: String,

    /// Asking price per square foot, in SGD
    pub price_per_sqft: f64,

    /// Floor area in square feet
    pub size: f64,

    #[serde(rename = "type")]
    pub property_type: PropertyType,

    /// e.g., "4-room" for HDB, "3BR" for private
    pub room_type: String,

    /// Percent difference to comparable market price.
    /// Positive means priced below market, negative means above.
    pub undervaluation_score: f64,

    pub coordinates: Coordinates,

    /// Chronological price history
    #[serde(default)]
    pub price_history: Vec<PricePoint>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub valuation_confidence: Option<ValuationConfidence>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub additional_details: Option<AdditionalDetails>,
}

impl Property {
    /// Build a listing with the required fields; history and optional
    /// details start empty.
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        address: impl Into<String>,
        property_type: PropertyType,
        room_type: impl Into<String>,
        price_per_sqft: f64,
        size: f64,
        undervaluation_score: f64,
        coordinates: Coordinates,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            address: address.into(),
            price_per_sqft,
            size,
            property_type,
            room_type: room_type.into(),
            undervaluation_score,
            coordinates,
            price_history: Vec::new(),
            valuation_confidence: None,
            additional_details: None,
        }
    }

    pub fn with_price_history(mut self, history: Vec<PricePoint>) -> Self {
        self.price_history = history;
        self
    }

    pub fn with_confidence(mut self, confidence: ValuationConfidence) -> Self {
        self.valuation_confidence = Some(confidence);
        self
    }

    pub fn with_details(mut self, details: AdditionalDetails) -> Self {
        self.additional_details = Some(details);
        self
    }

    /// Asking price for the whole unit (price per sqft × size).
    pub fn total_price(&self) -> f64 {
        self.price_per_sqft * self.size
    }

    /// Most recent entry of the price history, if any.
    pub fn latest_price(&self) -> Option<&PricePoint> {
        self.price_history.last()
    }
}
