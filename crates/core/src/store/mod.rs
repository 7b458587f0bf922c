pub mod filter_store;
pub mod watchlist_store;
