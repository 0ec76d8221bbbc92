use crate::scraper::structs::tracker_scrape::TrackerScrape;

/// One entry per tracker, in the order the trackers were given.
pub type ScrapeResponse = Vec<TrackerScrape>;
