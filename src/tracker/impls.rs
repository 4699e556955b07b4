//! Implementation blocks for torrent identifiers.

/// InfoHash implementation: Display, FromStr, Serialize, Deserialize.
pub mod info_hash;
