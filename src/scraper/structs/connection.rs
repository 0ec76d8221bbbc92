use std::time::{Duration, Instant};
use crate::udp::structs::connection_id::ConnectionId;
use crate::udp::structs::transaction_id::TransactionId;
use crate::udp::traits::transport::Transport;

/// Runtime state of one tracker exchange.
///
/// Lives for a single connect + scrape cycle and is never shared between
/// trackers; dropping it closes the underlying transport.
pub struct Connection {
    pub(crate) transport: Box<dyn Transport>,
    pub host: String,
    pub port: u16,
    pub timeout: Duration,
    pub transaction_id: Option<TransactionId>,
    pub connection_id: Option<ConnectionId>,
    pub connected_at: Option<Instant>,
}
