//! Tracker side identifiers and the tracker registry.
//!
//! # Main Components
//!
//! - `InfoHash` - 20-byte torrent identifier, parsed from 40 hex characters
//! - `TrackerAddress` - host and UDP port parsed from a `udp://` URI
//! - `get_trackers` - explicit tracker list, or the built-in defaults
//!
//! # Example
//!
//! ```rust
//! use torrent_tracker_scraper::tracker::structs::tracker_address::TrackerAddress;
//!
//! let tracker: TrackerAddress = "udp://tracker.opentrackr.org:1337/announce".parse().unwrap();
//! assert_eq!(tracker.host, "tracker.opentrackr.org");
//! assert_eq!(tracker.port, 1337);
//! ```

/// Implementation blocks for tracker structs.
pub mod impls;

/// Data structures for tracker identifiers.
pub mod structs;

/// Built-in tracker list and resolution.
#[allow(clippy::module_inception)]
pub mod tracker;
