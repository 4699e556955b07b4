//! Data structures for torrent identifiers.

/// 20-byte torrent info hash identifier.
///
/// A wrapper around `[u8; 20]` that implements common traits for use as
/// a map key and for serialization.
pub mod info_hash;
