//! Torrent identifiers shared by the protocol engine and the CLI.
//!
//! The only identifier a scrape needs is the 20-byte info hash. It is the
//! key of every scrape result and is parsed from / printed as a 40 character
//! hexadecimal string.
//!
//! # Example
//!
//! ```rust
//! use btshow::tracker::structs::info_hash::InfoHash;
//!
//! let hash: InfoHash = "0123456789abcdef0123456789abcdef01234567".parse().unwrap();
//! assert_eq!(hash.to_string(), "0123456789abcdef0123456789abcdef01234567");
//! ```

/// Data structures for torrent identifiers.
pub mod structs;

/// Implementation blocks for torrent identifiers.
pub mod impls;

/// Unit tests for torrent identifiers.
pub mod tests;
