//! Property Watch core library.
//!
//! Domain logic behind the listing browser: valuation classification,
//! display formatting, listing filters and the persisted watchlist. The UI
//! owns one [`WatchlistStore`] and one [`FilterStore`] and calls into them
//! from its event handlers.

pub mod config;
pub mod errors;
pub mod models;
pub mod providers;
pub mod services;
pub mod storage;
pub mod store;

pub use config::StoreConfig;
pub use errors::CoreError;
pub use models::valuation::MarkerCategory;
pub use services::valuation_service::ValuationService;
pub use store::filter_store::FilterStore;
pub use store::watchlist_store::WatchlistStore;
