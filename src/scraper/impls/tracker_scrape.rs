use crate::scraper::enums::scrape_error::ScrapeError;
use crate::scraper::enums::scrape_outcome::ScrapeOutcome;
use crate::scraper::structs::scrape_result::ScrapeResult;
use crate::scraper::structs::tracker_scrape::TrackerScrape;

impl TrackerScrape {
    pub fn success(tracker: &str, results: Vec<ScrapeResult>) -> TrackerScrape {
        TrackerScrape {
            tracker: tracker.to_string(),
            outcome: ScrapeOutcome::Results(results),
        }
    }

    pub fn failure(tracker: &str, error: &ScrapeError) -> TrackerScrape {
        TrackerScrape {
            tracker: tracker.to_string(),
            outcome: ScrapeOutcome::Failed(error.to_string()),
        }
    }

    pub fn from_result(tracker: &str, result: Result<Vec<ScrapeResult>, ScrapeError>) -> TrackerScrape {
        match result {
            Ok(results) => TrackerScrape::success(tracker, results),
            Err(error) => TrackerScrape::failure(tracker, &error),
        }
    }
}
