//! BitTorrent info hash identifier.

/// A 20-byte BitTorrent info hash.
///
/// The info hash is the SHA-1 hash of the "info" dictionary in a torrent file.
/// It uniquely identifies a torrent towards a tracker, and is the key under
/// which scrape statistics are returned.
///
/// # Example
///
/// ```rust
/// use btshow::tracker::structs::info_hash::InfoHash;
///
/// // Create from a 20-byte array
/// let hash = InfoHash([0u8; 20]);
///
/// // Access the underlying bytes
/// let bytes: &[u8; 20] = &hash.0;
/// ```
///
/// # Serialization
///
/// The info hash is represented as a 40-character lowercase hexadecimal
/// string on the command line and in JSON output.
#[derive(PartialEq, Eq, PartialOrd, Ord, Hash, Clone, Copy, Debug)]
pub struct InfoHash(pub [u8; 20]);
