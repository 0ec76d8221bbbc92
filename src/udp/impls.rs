pub mod request;
pub mod response;
pub mod transaction_id;
pub mod udp_connector;
pub mod udp_transport;
