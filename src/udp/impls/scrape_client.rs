use log::{debug, warn};
use crate::config::structs::tracker_client_config::TrackerClientConfig;
use crate::tracker::structs::info_hash::InfoHash;
use crate::udp::enums::action::Action;
use crate::udp::enums::tracker_client_error::TrackerClientError;
use crate::udp::structs::scrape_client::ScrapeClient;
use crate::udp::structs::tracker_connection::TrackerConnection;
use crate::udp::structs::udp_transport::UdpTransport;
use crate::udp::traits::transport::Transport;
use crate::udp::types::ScrapeResult;
use crate::udp::udp::{encode_scrape, parse_scrape_statistics, scrape_response_size, MAX_SCRAPE_TORRENTS};

impl ScrapeClient<UdpTransport> {
    /// Opens a UDP socket to `host` (`host:port`) and wraps it in a client
    /// configured from `config`.
    pub fn connect(host: &str, config: &TrackerClientConfig) -> Result<ScrapeClient<UdpTransport>, TrackerClientError> {
        let transport = UdpTransport::connect(host, config)?;
        let connection = TrackerConnection::new(transport).with_connection_id_lifetime(config.connection_id_lifetime());
        Ok(ScrapeClient::new(connection))
    }
}

impl<T: Transport> ScrapeClient<T> {
    pub fn new(connection: TrackerConnection<T>) -> ScrapeClient<T> {
        ScrapeClient { connection }
    }

    pub fn connection(&self) -> &TrackerConnection<T> {
        &self.connection
    }

    pub fn connection_mut(&mut self) -> &mut TrackerConnection<T> {
        &mut self.connection
    }

    pub fn into_inner(self) -> TrackerConnection<T> {
        self.connection
    }

    /// Scrapes `info_hashes` in a single request.
    ///
    /// The handshake runs first when no valid connection ID is cached; its
    /// errors are returned unchanged and no scrape request is sent. When the
    /// same info hash is listed more than once, the statistics of its last
    /// occurrence win.
    #[tracing::instrument(skip(self), level = "debug")]
    pub fn scrape(&mut self, info_hashes: &[InfoHash]) -> Result<ScrapeResult, TrackerClientError> {
        if info_hashes.is_empty() {
            return Err(TrackerClientError::EmptyScrape);
        }
        if info_hashes.len() > MAX_SCRAPE_TORRENTS as usize {
            warn!("[SCRAPE] {} info hashes exceed the usual tracker limit of {MAX_SCRAPE_TORRENTS}, the tracker may truncate or reject the request", info_hashes.len());
        }

        let connection_id = self.connection.connect()?;
        let (request, transaction_id) = encode_scrape(connection_id, info_hashes);
        let response = self.connection.exchange(&request, Action::Scrape, transaction_id, scrape_response_size(info_hashes.len()))?;
        let torrent_stats = parse_scrape_statistics(&response, info_hashes.len())?;

        let mut result = ScrapeResult::with_capacity(info_hashes.len());
        for (info_hash, stats) in info_hashes.iter().zip(torrent_stats) {
            result.insert(*info_hash, stats);
        }
        debug!("[SCRAPE] Scraped {} info hashes", result.len());
        Ok(result)
    }

    pub fn close(&mut self) -> Result<(), TrackerClientError> {
        self.connection.close()
    }
}
