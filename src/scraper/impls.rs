pub mod connection;
pub mod infohash_input;
pub mod protocol_client;
pub mod scrape_outcome;
pub mod scraper;
pub mod tracker_scrape;
