use std::sync::Arc;
use std::time::Duration;
use futures_util::StreamExt;
use log::{debug, info, warn};
use crate::config::structs::configuration::Configuration;
use crate::scraper::enums::infohash_input::InfohashInput;
use crate::scraper::enums::scrape_error::ScrapeError;
use crate::scraper::scraper::{parse_infohashes, DEFAULT_CONCURRENCY, DEFAULT_TIMEOUT_SECS};
use crate::scraper::structs::protocol_client::ProtocolClient;
use crate::scraper::structs::scrape_result::ScrapeResult;
use crate::scraper::structs::scraper::Scraper;
use crate::scraper::structs::tracker_scrape::TrackerScrape;
use crate::scraper::types::ScrapeResponse;
use crate::tracker::structs::tracker_address::TrackerAddress;
use crate::tracker::tracker::get_trackers;
use crate::udp::structs::udp_connector::UdpConnector;
use crate::udp::traits::connector::Connector;

impl Scraper {
    pub fn new(trackers: Vec<String>, infohashes: impl Into<InfohashInput>) -> Scraper {
        Scraper {
            trackers,
            infohashes: infohashes.into(),
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
            concurrency: DEFAULT_CONCURRENCY,
            connector: Arc::new(UdpConnector::new()),
        }
    }

    pub fn from_config(config: &Configuration, infohashes: impl Into<InfohashInput>) -> Scraper {
        Scraper::new(config.trackers.clone(), infohashes)
            .with_timeout(Duration::from_secs(config.timeout))
            .with_concurrency(config.concurrency)
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Scraper {
        self.timeout = timeout;
        self
    }

    pub fn with_concurrency(mut self, concurrency: usize) -> Scraper {
        self.concurrency = concurrency.max(1);
        self
    }

    pub fn with_connector(mut self, connector: Arc<dyn Connector>) -> Scraper {
        self.connector = connector;
        self
    }

    pub fn parse_infohashes(&self) -> Vec<String> {
        parse_infohashes(&self.infohashes)
    }

    pub fn get_trackers(&self) -> Vec<String> {
        get_trackers(&self.trackers)
    }

    /// Scrapes every tracker for every valid infohash.
    ///
    /// Returns one entry per tracker in tracker order. A tracker that cannot
    /// be reached or answers with garbage yields a failure entry; it never
    /// prevents the other trackers from completing. Without any valid
    /// infohash no tracker is contacted and the response is empty.
    pub async fn scrape(&self) -> ScrapeResponse {
        let infohashes = self.parse_infohashes();
        if infohashes.is_empty() {
            info!("[SCRAPER] No valid infohashes supplied, nothing to scrape");
            return Vec::new();
        }

        let trackers = self.get_trackers();
        info!("[SCRAPER] Scraping {} infohashes on {} trackers ({} at a time, {:?} timeout)", infohashes.len(), trackers.len(), self.concurrency, self.timeout);

        let infohashes = infohashes.as_slice();
        let response: ScrapeResponse = futures_util::stream::iter(trackers.iter())
            .map(move |tracker| async move {
                TrackerScrape::from_result(tracker, self.scrape_tracker(tracker, infohashes).await)
            })
            .buffered(self.concurrency.max(1))
            .collect()
            .await;

        let succeeded = response.iter().filter(|entry| entry.outcome.is_success()).count();
        info!("[SCRAPER] Finished: {succeeded} of {} trackers answered", response.len());

        response
    }

    /// Runs connect and scrape against a single tracker.
    pub async fn scrape_tracker(&self, tracker: &str, infohashes: &[String]) -> Result<Vec<ScrapeResult>, ScrapeError> {
        let result = self.exchange(tracker, infohashes).await;
        match &result {
            Ok(results) => debug!("[SCRAPER] {tracker} returned {} records", results.len()),
            Err(error) => warn!("[SCRAPER] {tracker} failed: {error}"),
        }
        result
    }

    async fn exchange(&self, tracker: &str, infohashes: &[String]) -> Result<Vec<ScrapeResult>, ScrapeError> {
        let address = TrackerAddress::parse(tracker)?;
        let mut client = ProtocolClient::open(self.connector.as_ref(), &address, self.timeout).await?;
        client.scrape(infohashes).await
    }
}
