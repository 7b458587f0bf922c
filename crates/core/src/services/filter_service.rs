use crate::models::filter::{PriceRange, PropertyFilter, PropertyTypeFilter};
use crate::models::property::Property;

/// Applies the filter-bar selection to a list of listings.
///
/// Pure business logic with no I/O.
#[derive(Debug)]
pub struct FilterService;

impl FilterService {
    pub fn new() -> Self {
        Self
    }

    /// Listings matching the filter, in source order.
    pub fn apply<'a>(&self, filter: &PropertyFilter, properties: &'a [Property]) -> Vec<&'a Property> {
        properties
            .iter()
            .filter(|p| self.matches(filter, p))
            .collect()
    }

    pub fn matches(&self, filter: &PropertyFilter, property: &Property) -> bool {
        filter.property_type.matches(property.property_type)
            && filter.price_range.contains(property.price_per_sqft)
    }

    /// Change the type selector. Returns `false` when it was already selected
    /// so callers can skip a redundant re-render.
    pub fn set_property_type(&self, filter: &mut PropertyFilter, property_type: PropertyTypeFilter) -> bool {
        if filter.property_type == property_type {
            return false;
        }
        filter.property_type = property_type;
        true
    }

    /// Bounds are normalized so `min <= max`.
    pub fn set_price_range(&self, filter: &mut PropertyFilter, min: f64, max: f64) {
        filter.price_range = if min <= max {
            PriceRange::new(min, max)
        } else {
            PriceRange::new(max, min)
        };
    }

    pub fn set_district(&self, filter: &mut PropertyFilter, district: Option<String>) {
        filter.district = district.filter(|d| !d.trim().is_empty());
    }

    pub fn reset(&self, filter: &mut PropertyFilter) {
        *filter = PropertyFilter::default();
    }
}

impl Default for FilterService {
    fn default() -> Self {
        Self::new()
    }
}
