//! UDP tracker protocol client (BEP 15).
//!
//! This module implements the client side of the UDP tracker protocol as
//! specified in BEP 15, limited to the connect handshake and scrape queries.
//!
//! # Protocol Overview
//!
//! The UDP tracker protocol uses a connection-oriented approach on top of a
//! connectionless transport:
//! 1. Client sends a connect request carrying the protocol magic
//! 2. Tracker responds with a connection ID, valid for one minute
//! 3. Client uses the connection ID for scrape requests
//!
//! # Message Types
//!
//! - **Connect** (action=0): Establish connection, get connection ID
//! - **Scrape** (action=2): Query torrent statistics for up to 74 info hashes
//! - **Error** (action=3): Error response carrying a text message
//!
//! # Layers
//!
//! - [`udp`] - Wire codec: constants and pure encode/decode functions
//! - [`traits::transport::Transport`] - Blocking datagram channel
//! - [`structs::tracker_connection::TrackerConnection`] - Handshake and
//!   connection ID reuse
//! - [`structs::scrape_client::ScrapeClient`] - Batched scrape and result
//!   demultiplexing
//!
//! # Example
//!
//! ```rust,no_run
//! use btshow::config::structs::configuration::Configuration;
//! use btshow::tracker::structs::info_hash::InfoHash;
//! use btshow::udp::structs::scrape_client::ScrapeClient;
//!
//! let config = Configuration::init();
//! let mut client = ScrapeClient::connect("tracker.opentrackr.org:1337", &config.tracker_client)?;
//! let info_hash: InfoHash = "c12fe1c06bba254a9dc9f519b335aa7c1367a88a".parse().unwrap();
//! let stats = client.scrape(&[info_hash])?;
//! println!("{:?}", stats.get(&info_hash));
//! client.close()?;
//! # Ok::<(), btshow::udp::enums::tracker_client_error::TrackerClientError>(())
//! ```

/// Enumerations for UDP protocol actions, messages and errors.
pub mod enums;

/// Implementation blocks for UDP protocol types.
pub mod impls;

/// Data structures for UDP protocol messages and client state.
pub mod structs;

/// Traits for the transport seam.
pub mod traits;

/// Type aliases for scrape results.
pub mod types;

/// Wire codec: protocol constants and encode/decode functions.
#[allow(clippy::module_inception)]
pub mod udp;
