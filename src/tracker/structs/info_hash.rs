//! BitTorrent info hash identifier.

/// A 20-byte BitTorrent info hash.
///
/// The info hash is the SHA-1 hash of the "info" dictionary in a torrent file.
/// It uniquely identifies a torrent across the BitTorrent network.
///
/// # Example
///
/// ```rust
/// use torrent_tracker_scraper::tracker::structs::info_hash::InfoHash;
///
/// let hash: InfoHash = "88334ec1d90afe94a22c6de5756268599f5f8ea2".parse().unwrap();
/// assert_eq!(hash.0[0], 0x88);
/// assert_eq!(hash.to_string(), "88334ec1d90afe94a22c6de5756268599f5f8ea2");
/// ```
///
/// # Serialization
///
/// On the command line and in results the info hash is a 40-character
/// hexadecimal string; the binary form only travels inside scrape packets.
#[derive(PartialEq, Eq, PartialOrd, Ord, Hash, Clone, Copy, Debug)]
pub struct InfoHash(pub [u8; 20]);
