/// Connect request (action 0).
pub mod connect_request;

/// Connect response carrying the connection id.
pub mod connect_response;

/// 64-bit connection id handed out by the tracker.
pub mod connection_id;

/// Error response (action 3).
pub mod error_response;

/// Completed download counter.
pub mod number_of_downloads;

/// Seeder/leecher counter.
pub mod number_of_peers;

/// Scrape request (action 2).
pub mod scrape_request;

/// Scrape response.
pub mod scrape_response;

/// Per torrent statistics inside a scrape response.
pub mod torrent_scrape_statistics;

/// 32-bit transaction id echoed by the tracker.
pub mod transaction_id;

/// Connector producing UDP transports.
pub mod udp_connector;

/// UDP socket bound to one tracker.
pub mod udp_transport;
