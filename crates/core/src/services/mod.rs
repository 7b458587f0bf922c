pub mod filter_service;
pub mod format_service;
pub mod valuation_service;
pub mod watchlist_service;
