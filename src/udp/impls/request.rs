use std::io;
use std::io::Write;
use byteorder::{ByteOrder, NetworkEndian};
use crate::tracker::structs::info_hash::InfoHash;
use crate::udp::enums::action::Action;
use crate::udp::enums::request::Request;
use crate::udp::structs::connect_request::ConnectRequest;
use crate::udp::structs::connection_id::ConnectionId;
use crate::udp::structs::scrape_request::ScrapeRequest;
use crate::udp::structs::transaction_id::TransactionId;
use crate::udp::udp::{scrape_response_size, CONNECT_RESPONSE_SIZE, INFO_HASH_SIZE, PROTOCOL_IDENTIFIER, REQUEST_HEADER_SIZE};

impl ConnectRequest {
    pub fn new() -> ConnectRequest {
        ConnectRequest {
            transaction_id: TransactionId::random(),
        }
    }
}

impl Default for ConnectRequest {
    fn default() -> Self {
        ConnectRequest::new()
    }
}

impl ScrapeRequest {
    pub fn new(connection_id: ConnectionId, info_hashes: &[InfoHash]) -> ScrapeRequest {
        ScrapeRequest {
            connection_id,
            transaction_id: TransactionId::random(),
            info_hashes: info_hashes.to_vec(),
        }
    }
}

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
    pub fn action(&self) -> Action {
        match self {
            Request::Connect(_) => Action::Connect,
            Request::Scrape(_) => Action::Scrape,
        }
    }

    pub fn transaction_id(&self) -> TransactionId {
        match self {
            Request::Connect(r) => r.transaction_id,
            Request::Scrape(r) => r.transaction_id,
        }
    }

    pub fn encoded_size(&self) -> usize {
        match self {
            Request::Connect(_) => REQUEST_HEADER_SIZE,
            Request::Scrape(r) => REQUEST_HEADER_SIZE + INFO_HASH_SIZE * r.info_hashes.len(),
        }
    }

    /// Minimum size of a well-formed response to this request.
    pub fn expected_response_size(&self) -> usize {
        match self {
            Request::Connect(_) => CONNECT_RESPONSE_SIZE,
            Request::Scrape(r) => scrape_response_size(r.info_hashes.len()),
        }
    }

    #[tracing::instrument(skip(self), level = "debug")]
    pub fn to_bytes(&self) -> Vec<u8> {
        let mut bytes = vec![0u8; self.encoded_size()];
        match self {
            Request::Connect(r) => {
                NetworkEndian::write_u64(&mut bytes[0..8], PROTOCOL_IDENTIFIER);
                NetworkEndian::write_u32(&mut bytes[8..12], Action::Connect.code());
                NetworkEndian::write_u32(&mut bytes[12..16], r.transaction_id.0);
            }

            Request::Scrape(r) => {
                NetworkEndian::write_u64(&mut bytes[0..8], r.connection_id.0);
                NetworkEndian::write_u32(&mut bytes[8..12], Action::Scrape.code());
                NetworkEndian::write_u32(&mut bytes[12..16], r.transaction_id.0);

                for (chunk, info_hash) in bytes[REQUEST_HEADER_SIZE..].chunks_exact_mut(INFO_HASH_SIZE).zip(&r.info_hashes) {
                    chunk.copy_from_slice(&info_hash.0);
                }
            }
        }
        bytes
    }

    pub fn write(&self, bytes: &mut impl Write) -> Result<(), io::Error> {
        bytes.write_all(&self.to_bytes())
    }

    /// Parses a request the way a tracker would.
    ///
    /// Only connect and scrape requests are understood.
    #[tracing::instrument(level = "debug")]
    pub fn from_bytes(bytes: &[u8]) -> Result<Self, io::Error> {
        if bytes.len() < REQUEST_HEADER_SIZE {
            return Err(io::Error::new(io::ErrorKind::InvalidData, "Packet too short"));
        }

        let connection_id = NetworkEndian::read_u64(&bytes[0..8]);
        let action = NetworkEndian::read_u32(&bytes[8..12]);
        let transaction_id = TransactionId(NetworkEndian::read_u32(&bytes[12..16]));

        match Action::from_code(action) {
            Some(Action::Connect) => {
                if connection_id != PROTOCOL_IDENTIFIER {
                    return Err(io::Error::new(io::ErrorKind::InvalidData, "Protocol identifier missing"));
                }
                Ok(ConnectRequest { transaction_id }.into())
            }

            Some(Action::Scrape) => {
                let remaining_bytes = &bytes[REQUEST_HEADER_SIZE..];
                if remaining_bytes.is_empty() || remaining_bytes.len() % INFO_HASH_SIZE != 0 {
                    return Err(io::Error::new(io::ErrorKind::InvalidData, "Invalid info hash list"));
                }

                let info_hashes = remaining_bytes
                    .chunks_exact(INFO_HASH_SIZE)
                    .map(InfoHash::try_from)
                    .collect::<Result<Vec<InfoHash>, _>>()
                    .map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))?;

                Ok(ScrapeRequest {
                    connection_id: ConnectionId(connection_id),
                    transaction_id,
                    info_hashes,
                }.into())
            }

            _ => Err(io::Error::new(io::ErrorKind::InvalidData, "Invalid action")),
        }
    }
}
