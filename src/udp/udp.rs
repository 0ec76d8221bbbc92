use std::time::Duration;

pub const PROTOCOL_IDENTIFIER: u64 = 4_497_486_125_440;
pub const MAX_SCRAPE_TORRENTS: usize = 74;
pub const MAX_PACKET_SIZE: usize = 1496;

pub const ACTION_CONNECT: u32 = 0;
pub const ACTION_SCRAPE: u32 = 2;
pub const ACTION_ERROR: u32 = 3;

pub const CONNECT_REQUEST_SIZE: usize = 16;
pub const CONNECT_RESPONSE_SIZE: usize = 16;
pub const SCRAPE_REQUEST_HEADER_SIZE: usize = 16;
pub const SCRAPE_RESPONSE_HEADER_SIZE: usize = 8;
pub const SCRAPE_STATISTICS_SIZE: usize = 12;

/// Trackers only honour a connection id for one minute after handing it out.
pub const CONNECTION_ID_LIFETIME: Duration = Duration::from_secs(60);

/// Size a scrape response must have for `torrents` requested info hashes.
#[inline]
pub fn scrape_response_size(torrents: usize) -> usize {
    SCRAPE_RESPONSE_HEADER_SIZE + torrents * SCRAPE_STATISTICS_SIZE
}
