use std::time::Duration;
use log::debug;
use crate::scraper::enums::client_state::ClientState;
use crate::scraper::enums::scrape_error::ScrapeError;
use crate::scraper::structs::connection::Connection;
use crate::scraper::structs::protocol_client::ProtocolClient;
use crate::scraper::structs::scrape_result::ScrapeResult;
use crate::tracker::structs::info_hash::InfoHash;
use crate::tracker::structs::tracker_address::TrackerAddress;
use crate::udp::enums::request::Request;
use crate::udp::enums::response::Response;
use crate::udp::structs::connect_request::ConnectRequest;
use crate::udp::structs::connection_id::ConnectionId;
use crate::udp::structs::scrape_request::ScrapeRequest;
use crate::udp::structs::torrent_scrape_statistics::TorrentScrapeStatistics;
use crate::udp::structs::transaction_id::TransactionId;
use crate::udp::traits::connector::Connector;
use crate::udp::udp::{scrape_response_size, ACTION_CONNECT, ACTION_SCRAPE, MAX_PACKET_SIZE, MAX_SCRAPE_TORRENTS, SCRAPE_RESPONSE_HEADER_SIZE};

pub const CONNECT_UNPACK_FAILED: &str = "Unpacking connect request response failed";
pub const SCRAPE_UNPACK_FAILED: &str = "Unpacking scrape request response failed";

impl ProtocolClient {
    pub fn new(connection: Connection) -> ProtocolClient {
        ProtocolClient {
            connection,
            state: ClientState::Init,
        }
    }

    pub async fn open(connector: &dyn Connector, tracker: &TrackerAddress, timeout: Duration) -> Result<ProtocolClient, ScrapeError> {
        let transport = connector.open(tracker, timeout).await?;
        Ok(ProtocolClient::new(Connection::new(transport, &tracker.host, tracker.port)))
    }

    pub fn state(&self) -> ClientState {
        self.state
    }

    pub fn connection(&self) -> &Connection {
        &self.connection
    }

    /// Runs the connect phase and returns the echoed transaction id together
    /// with the connection id handed out by the tracker.
    pub async fn connect_request(&mut self, transaction_id: TransactionId) -> Result<(TransactionId, ConnectionId), ScrapeError> {
        self.state = ClientState::Connecting;
        match self.exchange_connect(transaction_id).await {
            Ok(result) => {
                self.state = ClientState::Connected;
                Ok(result)
            }
            Err(error) => {
                self.state = ClientState::Failed;
                Err(error)
            }
        }
    }

    async fn exchange_connect(&mut self, transaction_id: TransactionId) -> Result<(TransactionId, ConnectionId), ScrapeError> {
        self.connection.transaction_id = Some(transaction_id);

        let packet = Request::from(ConnectRequest { transaction_id }).write_to_vec()?;
        self.connection.transport.send(&packet).await?;
        let buffer = self.connection.transport.recv(MAX_PACKET_SIZE).await?;

        let response = Response::from_bytes(&buffer).map_err(|error| {
            debug!("[CONNECT] {}:{} sent {} undecodable bytes: {error}", self.connection.host, self.connection.port, buffer.len());
            ScrapeError::MalformedResponse(format!("{CONNECT_UNPACK_FAILED}: {error}"))
        })?;

        match response {
            Response::Connect(r) => {
                if r.transaction_id != transaction_id {
                    return Err(ScrapeError::TransactionMismatch {
                        expected: transaction_id.0,
                        received: r.transaction_id.0,
                    });
                }
                self.connection.set_connection_id(r.connection_id);
                debug!("[CONNECT] {}:{} connection id {}", self.connection.host, self.connection.port, r.connection_id.0);
                Ok((r.transaction_id, r.connection_id))
            }
            Response::Error(r) => {
                if r.transaction_id != transaction_id {
                    return Err(ScrapeError::TransactionMismatch {
                        expected: transaction_id.0,
                        received: r.transaction_id.0,
                    });
                }
                Err(ScrapeError::TrackerError(r.message.into_owned()))
            }
            other => Err(ScrapeError::ActionMismatch {
                expected: ACTION_CONNECT,
                received: other.action(),
            }),
        }
    }

    /// Runs one scrape request on an established connection.
    ///
    /// Statistics are returned in the order of `info_hashes`; the tracker
    /// answers positionally and carries no infohash in its records.
    pub async fn scrape_request(&mut self, transaction_id: TransactionId, info_hashes: &[InfoHash]) -> Result<Vec<TorrentScrapeStatistics>, ScrapeError> {
        let connection_id = match (self.state, self.connection.connection_id) {
            (ClientState::Connected | ClientState::Done, Some(connection_id)) => connection_id,
            _ => return Err(ScrapeError::NotConnected),
        };

        self.state = ClientState::Scraping;
        match self.exchange_scrape(connection_id, transaction_id, info_hashes).await {
            Ok(stats) => {
                self.state = ClientState::Done;
                Ok(stats)
            }
            Err(error) => {
                self.state = ClientState::Failed;
                Err(error)
            }
        }
    }

    async fn exchange_scrape(&mut self, connection_id: ConnectionId, transaction_id: TransactionId, info_hashes: &[InfoHash]) -> Result<Vec<TorrentScrapeStatistics>, ScrapeError> {
        self.connection.transaction_id = Some(transaction_id);

        let packet = Request::from(ScrapeRequest {
            connection_id,
            transaction_id,
            info_hashes: info_hashes.to_vec(),
        }).write_to_vec()?;
        self.connection.transport.send(&packet).await?;
        let buffer = self.connection.transport.recv(MAX_PACKET_SIZE).await?;

        if buffer.len() < SCRAPE_RESPONSE_HEADER_SIZE {
            return Err(ScrapeError::MalformedResponse(format!(
                "{SCRAPE_UNPACK_FAILED}: {} bytes received", buffer.len()
            )));
        }

        let response = Response::from_bytes(&buffer).map_err(|error| {
            ScrapeError::MalformedResponse(format!("{SCRAPE_UNPACK_FAILED}: {error}"))
        })?;

        match response {
            Response::Scrape(r) => {
                let expected_size = scrape_response_size(info_hashes.len());
                if buffer.len() != expected_size {
                    return Err(ScrapeError::MalformedResponse(format!(
                        "{SCRAPE_UNPACK_FAILED}: expected {expected_size} bytes, received {}", buffer.len()
                    )));
                }
                if r.transaction_id != transaction_id {
                    return Err(ScrapeError::TransactionMismatch {
                        expected: transaction_id.0,
                        received: r.transaction_id.0,
                    });
                }
                Ok(r.torrent_stats)
            }
            Response::Error(r) => {
                if r.transaction_id != transaction_id {
                    return Err(ScrapeError::TransactionMismatch {
                        expected: transaction_id.0,
                        received: r.transaction_id.0,
                    });
                }
                Err(ScrapeError::TrackerError(r.message.into_owned()))
            }
            other => Err(ScrapeError::ActionMismatch {
                expected: ACTION_SCRAPE,
                received: other.action(),
            }),
        }
    }

    /// Connects if needed, then scrapes `infohashes` in batches of at most
    /// [`MAX_SCRAPE_TORRENTS`]. A connection id older than
    /// [`CONNECTION_ID_LIFETIME`](crate::udp::udp::CONNECTION_ID_LIFETIME)
    /// is replaced by a fresh connect before the next batch goes out.
    pub async fn scrape(&mut self, infohashes: &[String]) -> Result<Vec<ScrapeResult>, ScrapeError> {
        let requested: Vec<(&String, InfoHash)> = infohashes
            .iter()
            .filter_map(|infohash| infohash.parse::<InfoHash>().ok().map(|hash| (infohash, hash)))
            .collect();

        if requested.is_empty() {
            return Ok(Vec::new());
        }

        let mut results = Vec::with_capacity(requested.len());
        for batch in requested.chunks(MAX_SCRAPE_TORRENTS) {
            if self.connection.is_expired() {
                if self.connection.connection_id.is_some() {
                    debug!("[SCRAPE] {}:{} connection id aged out, refreshing", self.connection.host, self.connection.port);
                }
                self.connect_request(TransactionId::random()).await?;
            }

            let hashes: Vec<InfoHash> = batch.iter().map(|(_, hash)| *hash).collect();
            let stats = self.scrape_request(TransactionId::random(), &hashes).await?;

            results.extend(batch.iter().zip(stats).map(|((infohash, _), stat)| ScrapeResult {
                infohash: infohash.to_string(),
                seeders: stat.seeders.0,
                completed: stat.completed.0,
                leechers: stat.leechers.0,
            }));
        }

        Ok(results)
    }
}
