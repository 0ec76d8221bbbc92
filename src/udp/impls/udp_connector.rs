use std::io;
use std::net::{Ipv4Addr, Ipv6Addr, SocketAddr};
use std::time::Duration;
use async_trait::async_trait;
use log::debug;
use socket2::{Domain, Protocol, Socket, Type};
use tokio::net::{lookup_host, UdpSocket};
use crate::scraper::enums::scrape_error::ScrapeError;
use crate::tracker::structs::tracker_address::TrackerAddress;
use crate::udp::structs::udp_connector::UdpConnector;
use crate::udp::structs::udp_transport::UdpTransport;
use crate::udp::traits::connector::Connector;
use crate::udp::traits::transport::Transport;

impl UdpConnector {
    pub fn new() -> UdpConnector {
        UdpConnector
    }

    /// Creates an unbound-port socket of the same address family as `remote_addr`.
    pub fn bind_for(remote_addr: SocketAddr) -> Result<UdpSocket, io::Error> {
        let (domain, bind_address) = if remote_addr.is_ipv4() {
            (Domain::IPV4, SocketAddr::from((Ipv4Addr::UNSPECIFIED, 0)))
        } else {
            (Domain::IPV6, SocketAddr::from((Ipv6Addr::UNSPECIFIED, 0)))
        };

        let socket = Socket::new(domain, Type::DGRAM, Some(Protocol::UDP))?;
        socket.bind(&bind_address.into())?;
        socket.set_nonblocking(true)?;

        let std_socket: std::net::UdpSocket = socket.into();
        UdpSocket::from_std(std_socket)
    }

    pub async fn resolve(tracker: &TrackerAddress, timeout: Duration) -> Result<SocketAddr, ScrapeError> {
        let lookup = tokio::time::timeout(timeout, lookup_host((tracker.host.as_str(), tracker.port)))
            .await
            .map_err(|_| ScrapeError::Timeout(timeout))?;

        lookup
            .map_err(|e| ScrapeError::Resolve(format!("{}: {e}", tracker.host)))?
            .next()
            .ok_or_else(|| ScrapeError::Resolve(format!("{}: no addresses found", tracker.host)))
    }
}

#[async_trait]
impl Connector for UdpConnector {
    async fn open(&self, tracker: &TrackerAddress, timeout: Duration) -> Result<Box<dyn Transport>, ScrapeError> {
        let remote_addr = UdpConnector::resolve(tracker, timeout).await?;
        let socket = UdpConnector::bind_for(remote_addr)?;
        socket.connect(remote_addr).await?;
        debug!("[UDP] Opened socket {:?} towards {tracker} ({remote_addr})", socket.local_addr().ok());

        Ok(Box::new(UdpTransport::new(socket, remote_addr, timeout)))
    }
}
