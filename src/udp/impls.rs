pub mod action;
pub mod connection_id;
pub mod connection_state;
pub mod request;
pub mod response;
pub mod scrape_client;
pub mod tracker_client_error;
pub mod tracker_connection;
pub mod transaction_id;
pub mod udp_transport;
