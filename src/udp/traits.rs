/// Opens transports towards trackers.
pub mod connector;

/// Send/receive capability of one tracker connection.
pub mod transport;
