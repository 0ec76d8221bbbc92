use std::net::SocketAddr;
use std::time::Duration;
use async_trait::async_trait;
use log::debug;
use tokio::net::UdpSocket;
use crate::scraper::enums::scrape_error::ScrapeError;
use crate::udp::structs::udp_transport::UdpTransport;
use crate::udp::traits::transport::Transport;

impl UdpTransport {
    pub fn new(socket: UdpSocket, remote_addr: SocketAddr, timeout: Duration) -> UdpTransport {
        UdpTransport {
            socket,
            remote_addr,
            timeout,
        }
    }

    pub fn remote_addr(&self) -> SocketAddr {
        self.remote_addr
    }
}

#[async_trait]
impl Transport for UdpTransport {
    async fn send(&self, payload: &[u8]) -> Result<(), ScrapeError> {
        let sent = self.socket.send(payload).await?;
        debug!("[UDP] Sent {sent} bytes to {}", self.remote_addr);
        Ok(())
    }

    async fn recv(&self, max_size: usize) -> Result<Vec<u8>, ScrapeError> {
        let mut buffer = vec![0u8; max_size];
        match tokio::time::timeout(self.timeout, self.socket.recv(&mut buffer)).await {
            Ok(Ok(valid_bytes)) => {
                debug!("[UDP] Received {valid_bytes} bytes from {}", self.remote_addr);
                buffer.truncate(valid_bytes);
                Ok(buffer)
            }
            Ok(Err(error)) => Err(ScrapeError::Io(error)),
            Err(_) => Err(ScrapeError::Timeout(self.timeout)),
        }
    }

    fn timeout(&self) -> Duration {
        self.timeout
    }
}
