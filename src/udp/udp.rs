use std::time::Duration;
use byteorder::{ByteOrder, NetworkEndian};
use log::debug;
use crate::tracker::structs::info_hash::InfoHash;
use crate::udp::enums::action::Action;
use crate::udp::enums::request::Request;
use crate::udp::enums::tracker_client_error::TrackerClientError;
use crate::udp::structs::connect_request::ConnectRequest;
use crate::udp::structs::connection_id::ConnectionId;
use crate::udp::structs::scrape_request::ScrapeRequest;
use crate::udp::structs::torrent_scrape_statistics::TorrentScrapeStatistics;
use crate::udp::structs::transaction_id::TransactionId;

pub const PROTOCOL_IDENTIFIER: u64 = 0x0417_2710_1980;
pub const MAX_SCRAPE_TORRENTS: u8 = 74;
pub const MAX_PACKET_SIZE: usize = 1496;

pub const INFO_HASH_SIZE: usize = 20;
pub const REQUEST_HEADER_SIZE: usize = 16;
pub const RESPONSE_HEADER_SIZE: usize = 8;
pub const CONNECT_RESPONSE_SIZE: usize = 16;
pub const SCRAPE_STATISTICS_SIZE: usize = 12;

/// How long a tracker honours a connection ID.
pub const CONNECTION_ID_LIFETIME: Duration = Duration::from_secs(60);

pub const DEFAULT_UDP_TRACKER_HOST: &str = "tracker.opentrackr.org:1337";

/// Encodes a connect request with a fresh transaction ID.
///
/// The transaction ID is returned so the caller can validate the response.
pub fn encode_connect() -> (Vec<u8>, TransactionId) {
    let request = Request::from(ConnectRequest::new());
    (request.to_bytes(), request.transaction_id())
}

/// Encodes a scrape request for `info_hashes`, in the given order, with a
/// fresh transaction ID.
pub fn encode_scrape(connection_id: ConnectionId, info_hashes: &[InfoHash]) -> (Vec<u8>, TransactionId) {
    let request = Request::from(ScrapeRequest::new(connection_id, info_hashes));
    (request.to_bytes(), request.transaction_id())
}

/// Size of a scrape response carrying `count` entries.
#[inline]
pub fn scrape_response_size(count: usize) -> usize {
    RESPONSE_HEADER_SIZE + SCRAPE_STATISTICS_SIZE * count
}

/// Validates a received datagram against the request that elicited it.
///
/// The datagram must be at least `expected_length` bytes long, error
/// responses included. An error response is then reported as
/// [`TrackerClientError::TrackerError`]; any other response must echo both
/// the expected action and the expected transaction ID.
///
/// On success the whole buffer is handed back for the caller to interpret.
#[tracing::instrument(skip(bytes), level = "debug")]
pub fn decode_response(bytes: &[u8], expected_action: Action, expected_transaction_id: TransactionId, expected_length: usize) -> Result<&[u8], TrackerClientError> {
    if bytes.len() < expected_length || bytes.len() < RESPONSE_HEADER_SIZE {
        return Err(TrackerClientError::TruncatedResponse {
            expected: expected_length.max(RESPONSE_HEADER_SIZE),
            received: bytes.len(),
        });
    }

    let action = NetworkEndian::read_u32(&bytes[0..4]);
    if action == Action::Error.code() {
        let message = String::from_utf8_lossy(&bytes[RESPONSE_HEADER_SIZE..]).into_owned();
        debug!("[UDP] Tracker returned an error: {message}");
        return Err(TrackerClientError::TrackerError(message));
    }

    if action != expected_action.code() {
        return Err(TrackerClientError::ActionMismatch {
            expected: expected_action,
            received: action,
        });
    }

    let transaction_id = TransactionId(NetworkEndian::read_u32(&bytes[4..8]));
    if transaction_id != expected_transaction_id {
        return Err(TrackerClientError::TransactionIdMismatch {
            expected: expected_transaction_id,
            received: transaction_id,
        });
    }

    Ok(bytes)
}

/// Reads the connection ID out of a validated connect response.
pub fn read_connection_id(bytes: &[u8]) -> Result<ConnectionId, TrackerClientError> {
    if bytes.len() < CONNECT_RESPONSE_SIZE {
        return Err(TrackerClientError::TruncatedResponse { expected: CONNECT_RESPONSE_SIZE, received: bytes.len() });
    }
    Ok(ConnectionId(NetworkEndian::read_u64(&bytes[8..16])))
}

/// Reads `count` statistics entries out of a validated scrape response.
///
/// Each entry is read as seeders, leechers, completed, in that order.
pub fn parse_scrape_statistics(bytes: &[u8], count: usize) -> Result<Vec<TorrentScrapeStatistics>, TrackerClientError> {
    let expected = scrape_response_size(count);
    if bytes.len() < expected {
        return Err(TrackerClientError::TruncatedResponse { expected, received: bytes.len() });
    }

    Ok(bytes[RESPONSE_HEADER_SIZE..expected]
        .chunks_exact(SCRAPE_STATISTICS_SIZE)
        .map(|chunk| TorrentScrapeStatistics {
            seeders: NetworkEndian::read_u32(&chunk[0..4]),
            leechers: NetworkEndian::read_u32(&chunk[4..8]),
            completed: NetworkEndian::read_u32(&chunk[8..12]),
        })
        .collect())
}
