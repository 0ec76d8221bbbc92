use crate::scraper::enums::scrape_outcome::ScrapeOutcome;
use crate::scraper::structs::scrape_result::ScrapeResult;

impl ScrapeOutcome {
    pub fn is_success(&self) -> bool {
        matches!(self, ScrapeOutcome::Results(_))
    }

    pub fn results(&self) -> Option<&[ScrapeResult]> {
        match self {
            ScrapeOutcome::Results(results) => Some(results),
            ScrapeOutcome::Failed(_) => None,
        }
    }

    pub fn error(&self) -> Option<&str> {
        match self {
            ScrapeOutcome::Results(_) => None,
            ScrapeOutcome::Failed(reason) => Some(reason),
        }
    }
}
