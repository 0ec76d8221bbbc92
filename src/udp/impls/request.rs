use std::io;
use std::io::{Cursor, Write};
use byteorder::{NetworkEndian, ReadBytesExt, WriteBytesExt};
use crate::tracker::structs::info_hash::InfoHash;
use crate::udp::enums::request::Request;
use crate::udp::structs::connect_request::ConnectRequest;
use crate::udp::structs::connection_id::ConnectionId;
use crate::udp::structs::scrape_request::ScrapeRequest;
use crate::udp::structs::transaction_id::TransactionId;
use crate::udp::udp::{ACTION_CONNECT, ACTION_SCRAPE, CONNECT_REQUEST_SIZE, MAX_SCRAPE_TORRENTS, PROTOCOL_IDENTIFIER, SCRAPE_REQUEST_HEADER_SIZE};

impl From<ConnectRequest> for Request {
    fn from(r: ConnectRequest) -> Self {
        Self::Connect(r)
    }
}

impl From<ScrapeRequest> for Request {
    fn from(r: ScrapeRequest) -> Self {
        Self::Scrape(r)
    }
}

impl Request {
    #[tracing::instrument(skip(bytes), level = "debug")]
    pub fn write(&self, bytes: &mut impl Write) -> Result<(), io::Error> {
        match self {
            Request::Connect(r) => {
                bytes.write_u64::<NetworkEndian>(PROTOCOL_IDENTIFIER)?;
                bytes.write_u32::<NetworkEndian>(ACTION_CONNECT)?;
                bytes.write_u32::<NetworkEndian>(r.transaction_id.0)?;
            }

            Request::Scrape(r) => {
                bytes.write_u64::<NetworkEndian>(r.connection_id.0)?;
                bytes.write_u32::<NetworkEndian>(ACTION_SCRAPE)?;
                bytes.write_u32::<NetworkEndian>(r.transaction_id.0)?;

                for info_hash in &r.info_hashes {
                    bytes.write_all(&info_hash.0)?;
                }
            }
        }

        Ok(())
    }

    #[inline]
    pub fn estimated_size(&self) -> usize {
        match self {
            Request::Connect(_) => CONNECT_REQUEST_SIZE,
            Request::Scrape(r) => SCRAPE_REQUEST_HEADER_SIZE + (r.info_hashes.len() * 20),
        }
    }

    #[inline]
    pub fn write_to_vec(&self) -> Result<Vec<u8>, io::Error> {
        let mut buffer = Vec::with_capacity(self.estimated_size());
        self.write(&mut buffer)?;
        Ok(buffer)
    }

    /// Parses a request the way a tracker would receive it.
    #[tracing::instrument(level = "debug")]
    pub fn from_bytes(bytes: &[u8]) -> Result<Self, io::Error> {
        if bytes.len() < CONNECT_REQUEST_SIZE {
            return Err(io::Error::new(io::ErrorKind::UnexpectedEof, "Packet too short"));
        }

        let mut cursor = Cursor::new(bytes);

        let connection_id = cursor.read_u64::<NetworkEndian>()?;
        let action = cursor.read_u32::<NetworkEndian>()?;
        let transaction_id = cursor.read_u32::<NetworkEndian>()?;

        match action {
            ACTION_CONNECT => {
                if connection_id != PROTOCOL_IDENTIFIER {
                    return Err(io::Error::new(io::ErrorKind::InvalidData, "Protocol identifier missing"));
                }
                Ok(ConnectRequest {
                    transaction_id: TransactionId(transaction_id),
                }.into())
            }

            ACTION_SCRAPE => {
                let remaining_bytes = &bytes[SCRAPE_REQUEST_HEADER_SIZE..];

                if remaining_bytes.is_empty() || remaining_bytes.len() % 20 != 0 {
                    return Err(io::Error::new(io::ErrorKind::InvalidData, "Invalid info hash section"));
                }

                let info_hashes: Vec<InfoHash> = remaining_bytes
                    .chunks_exact(20)
                    .take(MAX_SCRAPE_TORRENTS)
                    .map(InfoHash::from)
                    .collect();

                Ok(ScrapeRequest {
                    connection_id: ConnectionId(connection_id),
                    transaction_id: TransactionId(transaction_id),
                    info_hashes,
                }.into())
            }

            _ => Err(io::Error::new(io::ErrorKind::InvalidData, format!("Invalid action {action}"))),
        }
    }

    pub fn transaction_id(&self) -> TransactionId {
        match self {
            Request::Connect(r) => r.transaction_id,
            Request::Scrape(r) => r.transaction_id,
        }
    }
}
