pub mod filter;
pub mod property;
pub mod valuation;
pub mod watchlist;
