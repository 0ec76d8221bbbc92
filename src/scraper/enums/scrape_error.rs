use std::time::Duration;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ScrapeError {
    #[error("{0}")]
    MalformedResponse(String),

    #[error("Transaction id mismatch: expected {expected}, received {received}")]
    TransactionMismatch { expected: u32, received: u32 },

    #[error("Action mismatch: expected {expected}, received {received}")]
    ActionMismatch { expected: u32, received: u32 },

    #[error("Tracker did not respond within {0:?}")]
    Timeout(Duration),

    #[error("Tracker returned an error: {0}")]
    TrackerError(String),

    #[error("Socket error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid tracker URI: {0}")]
    InvalidTrackerUri(String),

    #[error("Unsupported tracker protocol: {0}")]
    UnsupportedProtocol(String),

    #[error("Could not resolve tracker host {0}")]
    Resolve(String),

    #[error("No connection established with the tracker")]
    NotConnected,
}
