//! UDP tracker protocol implementation (BEP 15).
//!
//! This module implements the client side of the UDP tracker protocol as
//! specified in BEP 15, limited to the messages needed for scraping.
//!
//! # Protocol Overview
//!
//! The UDP tracker protocol uses a connection-oriented approach:
//! 1. Client sends a connect request
//! 2. Server responds with a connection ID
//! 3. Client uses connection ID for scrape requests
//!
//! # Message Types
//!
//! - **Connect** (action=0): Establish connection, get connection ID
//! - **Scrape** (action=2): Query torrent statistics
//! - **Error** (action=3): Error response
//!
//! Both directions of every message can be written and parsed, so the same
//! codec drives the scraper and the loopback trackers used in tests.
//!
//! # Transport
//!
//! Sockets are hidden behind the [`traits::transport::Transport`] and
//! [`traits::connector::Connector`] traits. The production implementation
//! wraps a tokio `UdpSocket` connected to a single tracker endpoint.

/// Enumerations for UDP protocol messages.
pub mod enums;

/// Implementation blocks for UDP packet handling.
pub mod impls;

/// Data structures for UDP protocol messages.
pub mod structs;

/// Traits for the transport seam.
pub mod traits;

/// Protocol constants.
#[allow(clippy::module_inception)]
pub mod udp;
