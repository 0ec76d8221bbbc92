/// Protocol client state machine states.
pub mod client_state;

/// Accepted shapes of raw infohash input.
pub mod infohash_input;

/// Results or failure of one tracker.
pub mod scrape_outcome;

/// Tracker scoped errors.
pub mod scrape_error;
