#![allow(dead_code)]
use rand::RngExt;
use std::net::{Ipv4Addr, SocketAddr};
use std::sync::Arc;
use tempfile::TempDir;
use tokio::net::UdpSocket;
use torrent_tracker_scraper::tracker::structs::info_hash::InfoHash;
use torrent_tracker_scraper::udp::enums::request::Request;
use torrent_tracker_scraper::udp::enums::response::Response;
use torrent_tracker_scraper::udp::structs::connect_response::ConnectResponse;
use torrent_tracker_scraper::udp::structs::connection_id::ConnectionId;
use torrent_tracker_scraper::udp::structs::error_response::ErrorResponse;
use torrent_tracker_scraper::udp::structs::number_of_downloads::NumberOfDownloads;
use torrent_tracker_scraper::udp::structs::number_of_peers::NumberOfPeers;
use torrent_tracker_scraper::udp::structs::scrape_response::ScrapeResponse;
use torrent_tracker_scraper::udp::structs::torrent_scrape_statistics::TorrentScrapeStatistics;
use torrent_tracker_scraper::udp::udp::MAX_PACKET_SIZE;

pub const MOCK_CONNECTION_ID: u64 = 5802853403918399090;

pub fn create_temp_dir() -> TempDir {
    tempfile::tempdir().expect("Failed to create temp directory")
}

pub fn random_info_hash() -> InfoHash {
    let mut rng = rand::rng();
    let bytes: [u8; 20] = rng.random();
    InfoHash(bytes)
}

/// Statistics the mock tracker reports for a torrent.
pub fn mock_stats(info_hash: &InfoHash) -> TorrentScrapeStatistics {
    TorrentScrapeStatistics {
        seeders: NumberOfPeers(info_hash.0[0] as u32),
        completed: NumberOfDownloads(info_hash.0[1] as u32 * 10),
        leechers: NumberOfPeers(info_hash.0[2] as u32),
    }
}

fn mock_reply(packet: &[u8]) -> Option<Vec<u8>> {
    let response: Response = match Request::from_bytes(packet).ok()? {
        Request::Connect(r) => ConnectResponse {
            connection_id: ConnectionId(MOCK_CONNECTION_ID),
            transaction_id: r.transaction_id,
        }.into(),
        Request::Scrape(r) if r.connection_id != ConnectionId(MOCK_CONNECTION_ID) => ErrorResponse {
            transaction_id: r.transaction_id,
            message: "Connection ID missmatch".into(),
        }.into(),
        Request::Scrape(r) => ScrapeResponse {
            transaction_id: r.transaction_id,
            torrent_stats: r.info_hashes.iter().map(mock_stats).collect(),
        }.into(),
    };
    response.write_to_vec().ok()
}

async fn bind_localhost() -> UdpSocket {
    UdpSocket::bind(SocketAddr::from((Ipv4Addr::LOCALHOST, 0))).await.expect("Failed to bind test socket")
}

/// Starts a UDP tracker on localhost that answers connect and scrape requests.
pub async fn spawn_mock_tracker() -> SocketAddr {
    let socket = bind_localhost().await;
    let addr = socket.local_addr().expect("Failed to read local address");

    tokio::spawn(async move {
        let mut buffer = [0u8; MAX_PACKET_SIZE];
        while let Ok((size, remote)) = socket.recv_from(&mut buffer).await {
            if let Some(reply) = mock_reply(&buffer[..size]) {
                let _ = socket.send_to(&reply, remote).await;
            }
        }
    });

    addr
}

/// Starts a tracker that answers every datagram with four bytes.
pub async fn spawn_garbage_tracker() -> SocketAddr {
    let socket = bind_localhost().await;
    let addr = socket.local_addr().expect("Failed to read local address");

    tokio::spawn(async move {
        let mut buffer = [0u8; MAX_PACKET_SIZE];
        while let Ok((_, remote)) = socket.recv_from(&mut buffer).await {
            let _ = socket.send_to(&[0, 0, 0, 0], remote).await;
        }
    });

    addr
}

/// Binds a socket that never answers. Keep the returned socket alive for the
/// duration of the test.
pub async fn spawn_silent_tracker() -> (Arc<UdpSocket>, SocketAddr) {
    let socket = Arc::new(bind_localhost().await);
    let addr = socket.local_addr().expect("Failed to read local address");
    (socket, addr)
}

pub fn tracker_uri(addr: SocketAddr) -> String {
    format!("udp://{addr}/announce")
}
