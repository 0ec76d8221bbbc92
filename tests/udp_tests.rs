mod common;

use std::time::Duration;
use torrent_tracker_scraper::scraper::enums::client_state::ClientState;
use torrent_tracker_scraper::scraper::structs::protocol_client::ProtocolClient;
use torrent_tracker_scraper::tracker::structs::tracker_address::TrackerAddress;
use torrent_tracker_scraper::udp::enums::request::Request;
use torrent_tracker_scraper::udp::enums::response::Response;
use torrent_tracker_scraper::udp::structs::connect_request::ConnectRequest;
use torrent_tracker_scraper::udp::structs::connection_id::ConnectionId;
use torrent_tracker_scraper::udp::structs::scrape_request::ScrapeRequest;
use torrent_tracker_scraper::udp::structs::transaction_id::TransactionId;
use torrent_tracker_scraper::udp::structs::udp_connector::UdpConnector;
use torrent_tracker_scraper::udp::udp::{MAX_SCRAPE_TORRENTS, PROTOCOL_IDENTIFIER};

#[test]
fn test_udp_connect_request_parsing() {
    let mut packet = vec![];
    packet.extend_from_slice(&PROTOCOL_IDENTIFIER.to_be_bytes());
    packet.extend_from_slice(&0u32.to_be_bytes());
    packet.extend_from_slice(&12345u32.to_be_bytes());

    match Request::from_bytes(&packet).expect("Should parse valid connect request") {
        Request::Connect(connect_req) => assert_eq!(connect_req.transaction_id.0, 12345, "Transaction ID should match"),
        _ => panic!("Should be Connect request"),
    }
}

#[test]
fn test_udp_scrape_request_parsing() {
    let info_hashes: Vec<_> = (0..3).map(|_| common::random_info_hash()).collect();
    let packet = Request::from(ScrapeRequest {
        connection_id: ConnectionId(common::MOCK_CONNECTION_ID),
        transaction_id: TransactionId(9),
        info_hashes: info_hashes.clone(),
    }).write_to_vec().unwrap();

    match Request::from_bytes(&packet).expect("Should parse valid scrape request") {
        Request::Scrape(scrape_req) => {
            assert_eq!(scrape_req.connection_id, ConnectionId(common::MOCK_CONNECTION_ID));
            assert_eq!(scrape_req.info_hashes, info_hashes, "Info hashes should keep their order");
        }
        _ => panic!("Should be Scrape request"),
    }
}

#[test]
fn test_udp_malformed_packet() {
    assert!(Request::from_bytes(&[1, 2, 3]).is_err(), "Should fail on malformed packet");
    assert!(Response::from_bytes(&[1, 2, 3]).is_err(), "Should fail on malformed packet");
}

#[test]
fn test_udp_connect_request_size() {
    let bytes = Request::from(ConnectRequest { transaction_id: TransactionId(1) }).write_to_vec().unwrap();
    assert_eq!(bytes.len(), 16, "Connect request should be 16 bytes");
}

#[tokio::test]
async fn test_udp_client_against_mock_tracker() {
    let addr = common::spawn_mock_tracker().await;
    let tracker = TrackerAddress::parse(&common::tracker_uri(addr)).unwrap();
    let mut client = ProtocolClient::open(&UdpConnector::new(), &tracker, Duration::from_secs(2)).await.unwrap();

    let (transaction_id, connection_id) = client.connect_request(TransactionId(14400)).await.unwrap();
    assert_eq!(transaction_id, TransactionId(14400));
    assert_eq!(connection_id, ConnectionId(common::MOCK_CONNECTION_ID));

    let info_hash = common::random_info_hash();
    let stats = client.scrape_request(TransactionId(15), &[info_hash]).await.unwrap();
    assert_eq!(stats, vec![common::mock_stats(&info_hash)]);
    assert_eq!(client.state(), ClientState::Done);
}

#[tokio::test]
async fn test_udp_client_batches_large_scrapes() {
    let addr = common::spawn_mock_tracker().await;
    let tracker = TrackerAddress::parse(&common::tracker_uri(addr)).unwrap();
    let mut client = ProtocolClient::open(&UdpConnector::new(), &tracker, Duration::from_secs(2)).await.unwrap();

    let info_hashes: Vec<String> = (0..MAX_SCRAPE_TORRENTS * 2 + 3).map(|_| common::random_info_hash().to_string()).collect();
    let results = client.scrape(&info_hashes).await.unwrap();

    assert_eq!(results.len(), info_hashes.len());
    for (result, info_hash) in results.iter().zip(&info_hashes) {
        let expected = common::mock_stats(&info_hash.parse().unwrap());
        assert_eq!(&result.infohash, info_hash);
        assert_eq!(result.seeders, expected.seeders.0);
        assert_eq!(result.completed, expected.completed.0);
        assert_eq!(result.leechers, expected.leechers.0);
    }
}

#[tokio::test]
async fn test_udp_client_garbage_connect_response() {
    let addr = common::spawn_garbage_tracker().await;
    let tracker = TrackerAddress::parse(&common::tracker_uri(addr)).unwrap();
    let mut client = ProtocolClient::open(&UdpConnector::new(), &tracker, Duration::from_secs(2)).await.unwrap();

    let error = client.connect_request(TransactionId(123)).await.unwrap_err();
    assert!(error.to_string().contains("Unpacking connect request response failed"));
    assert_eq!(client.state(), ClientState::Failed);
}
