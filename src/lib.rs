pub mod config;
pub mod fetch_error;
pub mod listing_fetcher;
pub mod point_fetcher;
pub mod store;
pub mod sync;
pub mod timestamp;
