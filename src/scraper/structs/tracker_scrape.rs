use serde::{Deserialize, Serialize};
use crate::scraper::enums::scrape_outcome::ScrapeOutcome;

/// Serialized as `{"tracker": .., "results": [..]}` or `{"tracker": .., "error": ".."}`.
#[derive(Serialize, Deserialize, PartialEq, Eq, Clone, Debug)]
pub struct TrackerScrape {
    pub tracker: String,
    #[serde(flatten)]
    pub outcome: ScrapeOutcome,
}
