mod common;

use byteorder::{ByteOrder, NetworkEndian};
use btshow::udp::enums::action::Action;
use btshow::udp::enums::request::Request;
use btshow::udp::enums::response::Response;
use btshow::udp::enums::tracker_client_error::TrackerClientError;
use btshow::udp::structs::connection_id::ConnectionId;
use btshow::udp::structs::scrape_response::ScrapeResponse;
use btshow::udp::structs::transaction_id::TransactionId;
use btshow::udp::udp::{decode_response, encode_connect, encode_scrape, parse_scrape_statistics, read_connection_id, scrape_response_size, MAX_SCRAPE_TORRENTS, PROTOCOL_IDENTIFIER};

#[test]
fn test_udp_connect_request_encoding() {
    let (packet, transaction_id) = encode_connect();

    assert_eq!(&packet[0..8], &PROTOCOL_IDENTIFIER.to_be_bytes(), "Packet should start with the protocol magic");
    match Request::from_bytes(&packet).expect("Should parse encoded connect request") {
        Request::Connect(connect_req) => assert_eq!(connect_req.transaction_id, transaction_id),
        _ => panic!("Should be Connect request"),
    }
}

#[test]
fn test_udp_scrape_request_max_torrents() {
    let info_hashes: Vec<_> = (0..MAX_SCRAPE_TORRENTS).map(|_| common::random_info_hash()).collect();
    let (packet, _) = encode_scrape(ConnectionId(1), &info_hashes);

    assert_eq!(packet.len(), 16 + 20 * MAX_SCRAPE_TORRENTS as usize);
    assert!(packet.len() <= 1496, "A full scrape should fit in one datagram");
}

#[test]
fn test_udp_connect_response_decoding() {
    use btshow::udp::structs::connect_response::ConnectResponse;

    let response = Response::from(ConnectResponse {
        connection_id: ConnectionId(common::TEST_CONNECTION_ID),
        transaction_id: TransactionId(12345),
    });
    let bytes = response.write_to_vec().unwrap();

    let validated = decode_response(&bytes, Action::Connect, TransactionId(12345), 16).expect("Response should validate");
    assert_eq!(read_connection_id(validated).unwrap(), ConnectionId(common::TEST_CONNECTION_ID));
}

#[test]
fn test_udp_scrape_response_decoding() {
    let info_hashes = [common::random_info_hash(), common::random_info_hash()];
    let response = Response::from(ScrapeResponse {
        transaction_id: TransactionId(7),
        torrent_stats: info_hashes.iter().map(common::stats_for).collect(),
    });
    let bytes = response.write_to_vec().unwrap();
    assert_eq!(bytes.len(), scrape_response_size(2));

    let validated = decode_response(&bytes, Action::Scrape, TransactionId(7), scrape_response_size(2)).unwrap();
    let stats = parse_scrape_statistics(validated, 2).unwrap();
    assert_eq!(stats[0], common::stats_for(&info_hashes[0]));
    assert_eq!(stats[1], common::stats_for(&info_hashes[1]));
}

#[test]
fn test_udp_scrape_response_field_order() {
    let mut bytes = vec![0u8; 20];
    NetworkEndian::write_u32(&mut bytes[0..4], 2);
    NetworkEndian::write_u32(&mut bytes[4..8], 99);
    NetworkEndian::write_u32(&mut bytes[8..12], 5);
    NetworkEndian::write_u32(&mut bytes[12..16], 3);
    NetworkEndian::write_u32(&mut bytes[16..20], 1);

    let stats = parse_scrape_statistics(&bytes, 1).unwrap();
    assert_eq!(stats[0].seeders, 5);
    assert_eq!(stats[0].leechers, 3);
    assert_eq!(stats[0].completed, 1);
}

#[test]
fn test_udp_error_response_decoding() {
    use btshow::udp::structs::error_response::ErrorResponse;

    let response = Response::from(ErrorResponse {
        transaction_id: TransactionId(1),
        message: "Connection ID missmatch.".into(),
    });
    let bytes = response.write_to_vec().unwrap();

    match decode_response(&bytes, Action::Scrape, TransactionId(1), scrape_response_size(1)) {
        Err(TrackerClientError::TrackerError(message)) => assert_eq!(message, "Connection ID missmatch."),
        other => panic!("Expected tracker error, got {:?}", other),
    }
}

#[test]
fn test_udp_malformed_response() {
    let result = decode_response(&[1, 2, 3], Action::Connect, TransactionId(1), 16);
    assert!(matches!(result, Err(TrackerClientError::TruncatedResponse { .. })), "Should fail on malformed packet");
}
