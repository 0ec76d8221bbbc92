//! Configuration management module.
//!
//! This module handles loading, parsing, and validating the scraper
//! configuration from a TOML file.
//!
//! # Configuration Structure
//!
//! The configuration file (`config.toml` by default) holds:
//! - **log_level**: `off`, `trace`, `debug`, `info`, `warn` or `error`
//! - **timeout**: seconds to wait for each tracker response
//! - **concurrency**: how many trackers are scraped at the same time
//! - **trackers**: `udp://host:port` URIs; empty means the built-in list
//!
//! # Example
//!
//! ```rust,ignore
//! use torrent_tracker_scraper::config::structs::configuration::Configuration;
//!
//! let config = Configuration::load_file("config.toml")?;
//! config.validate()?;
//!
//! Configuration::save_from_config("config.toml", &Configuration::init())?;
//! ```

/// Configuration error enumeration.
pub mod enums;

/// Configuration data structures.
pub mod structs;

/// Implementation blocks for configuration loading/saving.
pub mod impls;

/// Unit tests for configuration handling.
pub mod tests;
