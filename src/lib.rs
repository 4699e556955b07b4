//! # btshow
//!
//! A command line client for querying BitTorrent UDP trackers.
//!
//! ## Overview
//!
//! btshow speaks the client side of the UDP tracker protocol (BEP 15). It
//! performs the connect handshake, caches the connection ID the tracker hands
//! out for its one minute lifetime, and asks for swarm statistics (seeders,
//! leechers and completed downloads) of one or more torrents in a single
//! scrape request.
//!
//! ## BEP Compliance
//!
//! - BEP 15: UDP Tracker Protocol (connect and scrape)
//! - BEP 48: Tracker Protocol Extension: Scrape
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use btshow::config::structs::configuration::Configuration;
//! use btshow::tracker::structs::info_hash::InfoHash;
//! use btshow::udp::structs::scrape_client::ScrapeClient;
//!
//! let config = Configuration::init();
//! let mut client = ScrapeClient::connect(&config.tracker_client.udp_tracker_host, &config.tracker_client)?;
//! let info_hash: InfoHash = "c12fe1c06bba254a9dc9f519b335aa7c1367a88a".parse().unwrap();
//! for (hash, stats) in client.scrape(&[info_hash])? {
//!     println!("{hash}: {} seeders", stats.seeders);
//! }
//! # Ok::<(), btshow::udp::enums::tracker_client_error::TrackerClientError>(())
//! ```
//!
//! ## Modules
//!
//! - [`common`] - Logging setup, hex helpers and the shell error type
//! - [`config`] - Configuration management and TOML parsing
//! - [`structs`] - CLI argument parsing
//! - [`tracker`] - Torrent identifiers
//! - [`udp`] - UDP tracker protocol client (BEP 15)

/// Common utilities and shared functionality.
///
/// Contains logging setup, hex conversion and the error type used by the
/// command line shell.
pub mod common;

/// Configuration management module.
///
/// Handles loading, validating and saving the TOML configuration file.
pub mod config;

/// CLI argument definitions.
pub mod structs;

/// Torrent identifiers.
pub mod tracker;

/// UDP tracker protocol client.
///
/// Wire codec, connection ID management and batched scrape queries.
pub mod udp;
