/// Connect request message.
pub mod connect_request;

/// Connect response message.
pub mod connect_response;

/// Connection ID handed out by the tracker.
pub mod connection_id;

/// Cached connection ID with the moment it was obtained.
pub mod connection_state;

/// Error response message.
pub mod error_response;

/// Scrape coordinator: batched scrape and demultiplexing.
pub mod scrape_client;

/// Scrape request message.
pub mod scrape_request;

/// Scrape response message.
pub mod scrape_response;

/// Per torrent scrape statistics.
pub mod torrent_scrape_statistics;

/// Connection manager: handshake and connection ID reuse.
pub mod tracker_connection;

/// Transaction ID correlating a request with its response.
pub mod transaction_id;

/// Connected UDP socket implementing the transport trait.
pub mod udp_transport;
