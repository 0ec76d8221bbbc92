use std::time::Duration;
use async_trait::async_trait;
use crate::scraper::enums::scrape_error::ScrapeError;
use crate::tracker::structs::tracker_address::TrackerAddress;
use crate::udp::traits::transport::Transport;

#[async_trait]
pub trait Connector: Send + Sync {
    async fn open(&self, tracker: &TrackerAddress, timeout: Duration) -> Result<Box<dyn Transport>, ScrapeError>;
}
