use serde::{Deserialize, Serialize};
use crate::scraper::structs::scrape_result::ScrapeResult;

#[derive(Serialize, Deserialize, PartialEq, Eq, Clone, Debug)]
pub enum ScrapeOutcome {
    #[serde(rename = "results")]
    Results(Vec<ScrapeResult>),
    #[serde(rename = "error")]
    Failed(String),
}
