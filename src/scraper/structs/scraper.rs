use std::sync::Arc;
use std::time::Duration;
use crate::scraper::enums::infohash_input::InfohashInput;
use crate::udp::traits::connector::Connector;

pub struct Scraper {
    pub trackers: Vec<String>,
    pub infohashes: InfohashInput,
    pub timeout: Duration,
    pub concurrency: usize,
    pub(crate) connector: Arc<dyn Connector>,
}
