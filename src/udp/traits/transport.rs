use std::time::Duration;
use async_trait::async_trait;
use crate::scraper::enums::scrape_error::ScrapeError;

/// One datagram channel towards a single tracker.
///
/// Implementations own their socket exclusively; nothing else sends or
/// receives on it while a scrape is running. Dropping the transport closes it.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait Transport: Send + Sync {
    async fn send(&self, payload: &[u8]) -> Result<(), ScrapeError>;

    /// Waits for the next datagram, giving up after [`Transport::timeout`].
    async fn recv(&self, max_size: usize) -> Result<Vec<u8>, ScrapeError>;

    fn timeout(&self) -> Duration;
}
