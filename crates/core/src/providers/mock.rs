use async_trait::async_trait;

use crate::errors::CoreError;
use crate::models::property::{Coordinates, PricePoint, Property, PropertyType};
use super::traits::PropertySource;

const MONTHS: [&str; 6] = ["Jan", "Feb", "Mar", "Apr", "May", "Jun"];

/// In-memory property source.
///
/// `MockPropertySource::new()` serves the seven seed listings the mobile
/// client ships with; `with_properties` serves an arbitrary set.
pub struct MockPropertySource {
    properties: Vec<Property>,
}

impl MockPropertySource {
    pub fn new() -> Self {
        Self::with_properties(seed_properties())
    }

    pub fn with_properties(properties: Vec<Property>) -> Self {
        Self { properties }
    }

    pub fn len(&self) -> usize {
        self.properties.len()
    }

    pub fn is_empty(&self) -> bool {
        self.properties.is_empty()
    }
}

impl Default for MockPropertySource {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg_attr(target_arch = "wasm32", async_trait(?Send))]
#[cfg_attr(not(target_arch = "wasm32"), async_trait)]
impl PropertySource for MockPropertySource {
    fn name(&self) -> &str {
        "Mock"
    }

    async fn fetch_all(&self) -> Result<Vec<Property>, CoreError> {
        Ok(self.properties.clone())
    }

    async fn fetch_by_id(&self, id: &str) -> Result<Option<Property>, CoreError> {
        Ok(self.properties.iter().find(|p| p.id == id).cloned())
    }

    async fn fetch_by_type(&self, property_type: PropertyType) -> Result<Vec<Property>, CoreError> {
        Ok(self
            .properties
            .iter()
            .filter(|p| p.property_type == property_type)
            .cloned()
            .collect())
    }

    /// Inclusive on both ends; an inverted range matches nothing.
    async fn fetch_by_price_range(&self, min: f64, max: f64) -> Result<Vec<Property>, CoreError> {
        Ok(self
            .properties
            .iter()
            .filter(|p| p.price_per_sqft >= min && p.price_per_sqft <= max)
            .cloned()
            .collect())
    }
}

#[allow(clippy::too_many_arguments)]
fn listing(
    id: &str,
    name: &str,
    address: &str,
    property_type: PropertyType,
    room_type: &str,
    price_per_sqft: f64,
    size: f64,
    score: f64,
    (latitude, longitude): (f64, f64),
    history: [f64; 6],
) -> Property {
    let price_history = MONTHS
        .iter()
        .zip(history)
        .map(|(month, price)| PricePoint::new(*month, price))
        .collect();

    Property::new(
        id,
        name,
        address,
        property_type,
        room_type,
        price_per_sqft,
        size,
        score,
        Coordinates { latitude, longitude },
    )
    .with_price_history(price_history)
}

/// The seed listings: a spread of HDB and private units across all three
/// marker categories, including the -10 boundary.
pub fn seed_properties() -> Vec<Property> {
    vec![
        listing(
            "1",
            "Tampines GreenView",
            "Block 123A, #02-134, Tampines Street 45",
            PropertyType::Hdb,
            "4-room",
            650.0,
            1200.0,
            14.0,
            (1.3521, 103.8198),
            [600.0, 620.0, 630.0, 640.0, 650.0, 650.0],
        ),
        listing(
            "2",
            "Sengkang Rivervale",
            "Block 456B, #08-221, Sengkang East Avenue",
            PropertyType::Hdb,
            "3-room",
            700.0,
            950.0,
            5.0,
            (1.3644, 103.8890),
            [680.0, 685.0, 690.0, 695.0, 700.0, 700.0],
        ),
        listing(
            "3",
            "The Pinnacle @ Duxton",
            "1 Cantonment Road, #32-18",
            PropertyType::Hdb,
            "5-room",
            1200.0,
            1080.0,
            -10.0,
            (1.2790, 103.8414),
            [1150.0, 1160.0, 1170.0, 1180.0, 1190.0, 1200.0],
        ),
        listing(
            "4",
            "Skyline Residences",
            "120 Telok Blangah Road, #15-77",
            PropertyType::Private,
            "3BR",
            2200.0,
            1500.0,
            12.0,
            (1.2712, 103.8200),
            [2100.0, 2120.0, 2140.0, 2160.0, 2180.0, 2200.0],
        ),
        listing(
            "5",
            "Marina Bay Residences",
            "18 Marina Boulevard, #42-08",
            PropertyType::Private,
            "4BR",
            3100.0,
            2200.0,
            -15.0,
            (1.2821, 103.8539),
            [2900.0, 2950.0, 3000.0, 3050.0, 3075.0, 3100.0],
        ),
        listing(
            "6",
            "Punggol Emerald",
            "Block 268C, #10-304, Punggol Field",
            PropertyType::Hdb,
            "4-room",
            680.0,
            1100.0,
            8.0,
            (1.3984, 103.9072),
            [650.0, 660.0, 665.0, 670.0, 675.0, 680.0],
        ),
        listing(
            "7",
            "Bishan Loft",
            "Block 279A, #14-177, Bishan Street 24",
            PropertyType::Hdb,
            "5-room",
            800.0,
            1300.0,
            0.0,
            (1.3526, 103.8352),
            [790.0, 792.0, 795.0, 797.0, 798.0, 800.0],
        ),
    ]
}
