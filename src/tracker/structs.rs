//! Data structures identifying trackers and torrents.

/// 20-byte torrent info hash identifier.
///
/// A wrapper around `[u8; 20]`; only built when a scrape packet is encoded.
pub mod info_hash;

/// Host and port of a UDP tracker.
pub mod tracker_address;
