//! # Torrent Tracker Scraper
//!
//! Queries BitTorrent trackers speaking the UDP tracker protocol for swarm
//! statistics: seeders, leechers and completed downloads per infohash.
//!
//! ## Overview
//!
//! Callers hand over a list of tracker URIs and one or more infohashes. Each
//! tracker is contacted independently (connect, then scrape) and reported
//! either with its statistics or with the reason it failed. One broken
//! tracker never spoils the others.
//!
//! ## BEP Compliance
//!
//! - BEP 15: UDP Tracker Protocol (connect, scrape and error messages)
//! - BEP 48: Tracker Protocol Extension: Scrape
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use torrent_tracker_scraper::scraper::structs::scraper::Scraper;
//!
//! let scraper = Scraper::new(
//!     vec![String::from("udp://tracker.opentrackr.org:1337/announce")],
//!     vec!["88334ec1d90afe94a22c6de5756268599f5f8ea2"],
//! );
//! let response = scraper.scrape().await;
//! println!("{}", serde_json::to_string_pretty(&response)?);
//! ```
//!
//! ## Modules
//!
//! - [`common`] - Logging setup and shared error type
//! - [`config`] - Configuration management and TOML parsing
//! - [`scraper`] - Infohash validation, protocol client and orchestration
//! - [`structs`] - CLI argument parsing
//! - [`tracker`] - Info hash and tracker address types, default trackers
//! - [`udp`] - UDP tracker protocol codec and transports (BEP 15)

/// Common utilities and shared functionality.
///
/// Contains log level parsing, logging setup and the `CustomError` type
/// used at the binary boundary.
pub mod common;

/// Configuration management module.
///
/// Handles loading, parsing, validating and writing the TOML configuration.
pub mod config;

/// Scrape engine.
///
/// Validates infohashes, drives the connect/scrape exchange per tracker and
/// assembles the ordered per-tracker response.
pub mod scraper;

/// CLI argument parsing.
pub mod structs;

/// Tracker identifiers.
///
/// Info hashes, tracker addresses and the built-in tracker list.
pub mod tracker;

/// UDP tracker protocol implementation (BEP 15).
///
/// Packet codec for connect, scrape and error messages plus the transport
/// traits and their tokio based implementation.
pub mod udp;
