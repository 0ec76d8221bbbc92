/// Per tracker runtime state.
pub mod connection;

/// Connect/scrape driver for one tracker.
pub mod protocol_client;

/// Statistics of one infohash on one tracker.
pub mod scrape_result;

/// Orchestrator over all trackers.
pub mod scraper;

/// One entry of the aggregate response.
pub mod tracker_scrape;
