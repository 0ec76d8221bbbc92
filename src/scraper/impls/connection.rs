use std::time::{Duration, Instant};
use crate::scraper::structs::connection::Connection;
use crate::udp::structs::connection_id::ConnectionId;
use crate::udp::traits::transport::Transport;
use crate::udp::udp::CONNECTION_ID_LIFETIME;

impl Connection {
    pub fn new(transport: Box<dyn Transport>, host: &str, port: u16) -> Connection {
        let timeout = transport.timeout();
        Connection {
            transport,
            host: host.to_string(),
            port,
            timeout,
            transaction_id: None,
            connection_id: None,
            connected_at: None,
        }
    }

    pub fn set_connection_id(&mut self, connection_id: ConnectionId) {
        self.connection_id = Some(connection_id);
        self.connected_at = Some(Instant::now());
    }

    /// Time left before the tracker stops honouring the connection id.
    pub fn remaining_lifetime(&self) -> Option<Duration> {
        self.connected_at
            .map(|connected_at| CONNECTION_ID_LIFETIME.saturating_sub(connected_at.elapsed()))
    }

    pub fn is_expired(&self) -> bool {
        self.remaining_lifetime().is_none_or(|remaining| remaining.is_zero())
    }
}
