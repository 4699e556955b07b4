use serde::{Deserialize, Serialize};

/// Swarm statistics of a single torrent as reported by a tracker.
#[derive(PartialEq, Eq, Debug, Copy, Clone, Default, Serialize, Deserialize)]
pub struct TorrentScrapeStatistics {
    pub seeders: u32,
    pub completed: u32,
    pub leechers: u32,
}
