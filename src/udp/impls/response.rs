use std::io;
use std::io::{Cursor, Write};
use byteorder::{NetworkEndian, ReadBytesExt, WriteBytesExt};
use crate::udp::enums::response::Response;
use crate::udp::structs::connect_response::ConnectResponse;
use crate::udp::structs::connection_id::ConnectionId;
use crate::udp::structs::error_response::ErrorResponse;
use crate::udp::structs::number_of_downloads::NumberOfDownloads;
use crate::udp::structs::number_of_peers::NumberOfPeers;
use crate::udp::structs::scrape_response::ScrapeResponse;
use crate::udp::structs::torrent_scrape_statistics::TorrentScrapeStatistics;
use crate::udp::structs::transaction_id::TransactionId;
use crate::udp::udp::{ACTION_CONNECT, ACTION_ERROR, ACTION_SCRAPE, CONNECT_RESPONSE_SIZE, SCRAPE_RESPONSE_HEADER_SIZE, SCRAPE_STATISTICS_SIZE};

impl From<ConnectResponse> for Response {
    fn from(r: ConnectResponse) -> Self {
        Self::Connect(r)
    }
}

impl From<ScrapeResponse> for Response {
    fn from(r: ScrapeResponse) -> Self {
        Self::Scrape(r)
    }
}

impl From<ErrorResponse> for Response {
    fn from(r: ErrorResponse) -> Self {
        Self::Error(r)
    }
}

impl Response {
    #[tracing::instrument(skip(bytes), level = "debug")]
    #[inline]
    pub fn write(&self, bytes: &mut impl Write) -> Result<(), io::Error> {
        match self {
            Response::Connect(r) => {
                bytes.write_u32::<NetworkEndian>(ACTION_CONNECT)?;
                bytes.write_u32::<NetworkEndian>(r.transaction_id.0)?;
                bytes.write_u64::<NetworkEndian>(r.connection_id.0)?;
            }
            Response::Scrape(r) => {
                bytes.write_u32::<NetworkEndian>(ACTION_SCRAPE)?;
                bytes.write_u32::<NetworkEndian>(r.transaction_id.0)?;

                let stats_count = r.torrent_stats.len();
                if stats_count > 0 {
                    let mut stats_buffer = Vec::with_capacity(stats_count * SCRAPE_STATISTICS_SIZE);
                    for torrent_stat in &r.torrent_stats {
                        stats_buffer.write_u32::<NetworkEndian>(torrent_stat.seeders.0)?;
                        stats_buffer.write_u32::<NetworkEndian>(torrent_stat.completed.0)?;
                        stats_buffer.write_u32::<NetworkEndian>(torrent_stat.leechers.0)?;
                    }
                    bytes.write_all(&stats_buffer)?;
                }
            }
            Response::Error(r) => {
                bytes.write_u32::<NetworkEndian>(ACTION_ERROR)?;
                bytes.write_u32::<NetworkEndian>(r.transaction_id.0)?;
                bytes.write_all(r.message.as_bytes())?;
            }
        }

        Ok(())
    }

    /// Decodes a tracker response.
    ///
    /// Every fixed field must be present; a truncated buffer is an
    /// `UnexpectedEof` error and a scrape body that is not a whole number of
    /// statistics records is `InvalidData`. Unknown actions are rejected.
    #[tracing::instrument(level = "debug")]
    #[inline]
    pub fn from_bytes(bytes: &[u8]) -> Result<Self, io::Error> {
        let mut cursor = Cursor::new(bytes);

        let action = cursor.read_u32::<NetworkEndian>()?;
        let transaction_id = cursor.read_u32::<NetworkEndian>()?;

        match action {
            ACTION_CONNECT => {
                let connection_id = cursor.read_u64::<NetworkEndian>()?;

                Ok(ConnectResponse {
                    connection_id: ConnectionId(connection_id),
                    transaction_id: TransactionId(transaction_id),
                }
                    .into())
            }
            ACTION_SCRAPE => {
                let remaining_bytes = &bytes[SCRAPE_RESPONSE_HEADER_SIZE..];

                let torrent_stats = parse_scrape_stats(remaining_bytes)?;
                Ok(ScrapeResponse {
                    transaction_id: TransactionId(transaction_id),
                    torrent_stats,
                }
                    .into())
            }
            ACTION_ERROR => {
                let message_bytes = &bytes[SCRAPE_RESPONSE_HEADER_SIZE..];
                let message = String::from_utf8_lossy(message_bytes).into_owned();

                Ok(ErrorResponse {
                    transaction_id: TransactionId(transaction_id),
                    message: message.into(),
                }
                    .into())
            }
            _ => Err(io::Error::new(io::ErrorKind::InvalidData, format!("Invalid action {action}"))),
        }
    }

    #[inline]
    pub fn action(&self) -> u32 {
        match self {
            Response::Connect(_) => ACTION_CONNECT,
            Response::Scrape(_) => ACTION_SCRAPE,
            Response::Error(_) => ACTION_ERROR,
        }
    }

    #[inline]
    pub fn transaction_id(&self) -> TransactionId {
        match self {
            Response::Connect(r) => r.transaction_id,
            Response::Scrape(r) => r.transaction_id,
            Response::Error(r) => r.transaction_id,
        }
    }

    #[inline]
    pub fn estimated_size(&self) -> usize {
        match self {
            Response::Connect(_) => CONNECT_RESPONSE_SIZE,
            Response::Scrape(r) => SCRAPE_RESPONSE_HEADER_SIZE + (r.torrent_stats.len() * SCRAPE_STATISTICS_SIZE),
            Response::Error(r) => SCRAPE_RESPONSE_HEADER_SIZE + r.message.len(),
        }
    }

    #[inline]
    pub fn write_to_vec(&self) -> Result<Vec<u8>, io::Error> {
        let estimated_size = self.estimated_size();
        let mut buffer = Vec::with_capacity(estimated_size);
        self.write(&mut buffer)?;
        Ok(buffer)
    }
}

#[inline]
fn parse_scrape_stats(bytes: &[u8]) -> Result<Vec<TorrentScrapeStatistics>, io::Error> {
    if bytes.len() % SCRAPE_STATISTICS_SIZE != 0 {
        return Err(io::Error::new(
            io::ErrorKind::InvalidData,
            format!("Scrape statistics section of {} bytes is not a multiple of {SCRAPE_STATISTICS_SIZE}", bytes.len()),
        ));
    }

    let stats_count = bytes.len() / SCRAPE_STATISTICS_SIZE;
    let mut stats = Vec::with_capacity(stats_count);

    for chunk in bytes.chunks_exact(SCRAPE_STATISTICS_SIZE) {
        let mut cursor = Cursor::new(chunk);

        let seeders = cursor.read_u32::<NetworkEndian>()?;
        let downloads = cursor.read_u32::<NetworkEndian>()?;
        let leechers = cursor.read_u32::<NetworkEndian>()?;

        stats.push(TorrentScrapeStatistics {
            seeders: NumberOfPeers(seeders),
            completed: NumberOfDownloads(downloads),
            leechers: NumberOfPeers(leechers),
        });
    }

    Ok(stats)
}
