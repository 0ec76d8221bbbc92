use std::net::SocketAddr;
use std::time::Duration;
use tokio::net::UdpSocket;

/// A UDP socket connected to exactly one tracker endpoint.
///
/// The socket is closed when the transport is dropped.
#[derive(Debug)]
pub struct UdpTransport {
    pub(crate) socket: UdpSocket,
    pub(crate) remote_addr: SocketAddr,
    pub(crate) timeout: Duration,
}
