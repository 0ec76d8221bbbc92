use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize, PartialEq, Eq, Clone, Debug)]
pub struct ScrapeResult {
    pub infohash: String,
    pub seeders: u32,
    pub completed: u32,
    pub leechers: u32,
}
