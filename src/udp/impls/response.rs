use std::io;
use std::io::Write;
use byteorder::{ByteOrder, NetworkEndian, WriteBytesExt};
use crate::udp::enums::action::Action;
use crate::udp::enums::response::Response;
use crate::udp::structs::connect_response::ConnectResponse;
use crate::udp::structs::connection_id::ConnectionId;
use crate::udp::structs::error_response::ErrorResponse;
use crate::udp::structs::scrape_response::ScrapeResponse;
use crate::udp::structs::transaction_id::TransactionId;
use crate::udp::udp::{parse_scrape_statistics, scrape_response_size, CONNECT_RESPONSE_SIZE, RESPONSE_HEADER_SIZE, SCRAPE_STATISTICS_SIZE};

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
    pub fn transaction_id(&self) -> TransactionId {
        match self {
            Response::Connect(r) => r.transaction_id,
            Response::Scrape(r) => r.transaction_id,
            Response::Error(r) => r.transaction_id,
        }
    }

    /// Writes the response as a tracker would send it.
    ///
    /// Scrape entries go out as seeders, leechers, completed, the order the
    /// client reads them back in.
    #[tracing::instrument(skip(bytes), level = "debug")]
    #[inline]
    pub fn write(&self, bytes: &mut impl Write) -> Result<(), io::Error> {
        match self {
            Response::Connect(r) => {
                bytes.write_u32::<NetworkEndian>(Action::Connect.code())?;
                bytes.write_u32::<NetworkEndian>(r.transaction_id.0)?;
                bytes.write_u64::<NetworkEndian>(r.connection_id.0)?;
            }
            Response::Scrape(r) => {
                bytes.write_u32::<NetworkEndian>(Action::Scrape.code())?;
                bytes.write_u32::<NetworkEndian>(r.transaction_id.0)?;

                let stats_count = r.torrent_stats.len();
                if stats_count > 0 {
                    let mut stats_buffer = Vec::with_capacity(stats_count * 12);
                    for torrent_stat in &r.torrent_stats {
                        stats_buffer.write_u32::<NetworkEndian>(torrent_stat.seeders)?;
                        stats_buffer.write_u32::<NetworkEndian>(torrent_stat.leechers)?;
                        stats_buffer.write_u32::<NetworkEndian>(torrent_stat.completed)?;
                    }
                    bytes.write_all(&stats_buffer)?;
                }
            }
            Response::Error(r) => {
                bytes.write_u32::<NetworkEndian>(Action::Error.code())?;
                bytes.write_u32::<NetworkEndian>(r.transaction_id.0)?;
                bytes.write_all(r.message.as_bytes())?;
            }
        }

        Ok(())
    }

    #[inline]
    pub fn estimated_size(&self) -> usize {
        match self {
            Response::Connect(_) => CONNECT_RESPONSE_SIZE,
            Response::Scrape(r) => scrape_response_size(r.torrent_stats.len()),
            Response::Error(r) => RESPONSE_HEADER_SIZE + r.message.len(),
        }
    }

    #[inline]
    pub fn write_to_vec(&self) -> Result<Vec<u8>, io::Error> {
        let mut buffer = Vec::with_capacity(self.estimated_size());
        self.write(&mut buffer)?;
        Ok(buffer)
    }

    /// Parses a response without knowing the request it answers.
    ///
    /// Scrape entries are read in the same order `write` emits them.
    #[tracing::instrument(level = "debug")]
    pub fn from_bytes(bytes: &[u8]) -> Result<Self, io::Error> {
        if bytes.len() < RESPONSE_HEADER_SIZE {
            return Err(io::Error::new(io::ErrorKind::InvalidData, "Packet too short"));
        }

        let action = NetworkEndian::read_u32(&bytes[0..4]);
        let transaction_id = TransactionId(NetworkEndian::read_u32(&bytes[4..8]));

        match Action::from_code(action) {
            Some(Action::Connect) => {
                if bytes.len() < CONNECT_RESPONSE_SIZE {
                    return Err(io::Error::new(io::ErrorKind::InvalidData, "Connect response too short"));
                }
                Ok(ConnectResponse {
                    connection_id: ConnectionId(NetworkEndian::read_u64(&bytes[8..16])),
                    transaction_id,
                }.into())
            }

            Some(Action::Scrape) => {
                let remaining_bytes = bytes.len() - RESPONSE_HEADER_SIZE;
                if remaining_bytes % SCRAPE_STATISTICS_SIZE != 0 {
                    return Err(io::Error::new(io::ErrorKind::InvalidData, "Invalid scrape statistics length"));
                }
                let torrent_stats = parse_scrape_statistics(bytes, remaining_bytes / SCRAPE_STATISTICS_SIZE)
                    .map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e.to_string()))?;
                Ok(ScrapeResponse { transaction_id, torrent_stats }.into())
            }

            Some(Action::Error) => Ok(ErrorResponse {
                transaction_id,
                message: String::from_utf8_lossy(&bytes[RESPONSE_HEADER_SIZE..]).into_owned().into(),
            }.into()),

            _ => Err(io::Error::new(io::ErrorKind::InvalidData, "Invalid action")),
        }
    }
}
