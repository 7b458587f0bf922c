use crate::models::filter::{PropertyFilter, PropertyTypeFilter};
use crate::models::property::Property;
use crate::services::filter_service::FilterService;

/// Filter-bar selection for the map view. Session-only; never persisted.
#[derive(Debug, Default)]
pub struct FilterStore {
    filter: PropertyFilter,
    filter_service: FilterService,
}

impl FilterStore {
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn filter(&self) -> &PropertyFilter {
        &self.filter
    }

    /// Returns `false` when the type was already selected.
    pub fn set_property_type(&mut self, property_type: impl Into<PropertyTypeFilter>) -> bool {
        self.filter_service
            .set_property_type(&mut self.filter, property_type.into())
    }

    pub fn set_price_range(&mut self, min: f64, max: f64) {
        self.filter_service.set_price_range(&mut self.filter, min, max);
    }

    pub fn set_district(&mut self, district: Option<String>) {
        self.filter_service.set_district(&mut self.filter, district);
    }

    pub fn reset(&mut self) {
        self.filter_service.reset(&mut self.filter);
    }

    /// Listings visible under the current selection.
    #[must_use]
    pub fn apply<'a>(&self, properties: &'a [Property]) -> Vec<&'a Property> {
        self.filter_service.apply(&self.filter, properties)
    }
}
