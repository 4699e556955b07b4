use std::collections::HashMap;
use crate::tracker::structs::info_hash::InfoHash;
use crate::udp::structs::torrent_scrape_statistics::TorrentScrapeStatistics;

/// Scrape statistics keyed by info hash, one entry per distinct requested hash.
pub type ScrapeResult = HashMap<InfoHash, TorrentScrapeStatistics>;
