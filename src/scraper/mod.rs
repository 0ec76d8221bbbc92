//! Scrape engine.
//!
//! Turns raw infohash input and a tracker list into per-tracker swarm
//! statistics using the UDP tracker protocol.
//!
//! # Flow
//!
//! 1. [`scraper::parse_infohashes`] trims, splits and filters the input
//! 2. [`structs::scraper::Scraper`] resolves the tracker list and fans out
//! 3. One [`structs::protocol_client::ProtocolClient`] per tracker runs
//!    connect, then scrape, over its own [`structs::connection::Connection`]
//! 4. Failures stay scoped to their tracker and are reported as entries
//!
//! # Example
//!
//! ```rust,ignore
//! use torrent_tracker_scraper::scraper::structs::scraper::Scraper;
//!
//! let scraper = Scraper::new(
//!     vec![String::from("udp://tracker.opentrackr.org:1337/announce")],
//!     "88334ec1d90afe94a22c6de5756268599f5f8ea2",
//! );
//! for entry in scraper.scrape().await {
//!     println!("{}: {:?}", entry.tracker, entry.outcome);
//! }
//! ```

/// Enumerations for client state, input shapes, outcomes and errors.
pub mod enums;

/// Implementation blocks for the scrape engine.
pub mod impls;

/// Data structures for connections, clients and results.
pub mod structs;

/// Type aliases for scrape results.
pub mod types;

/// Infohash validation.
#[allow(clippy::module_inception)]
pub mod scraper;
