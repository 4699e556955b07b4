use crate::udp::structs::tracker_connection::TrackerConnection;
use crate::udp::traits::transport::Transport;

/// Scrape coordinator.
///
/// Sends one batched scrape per call through the injected
/// [`TrackerConnection`] and maps the statistics back onto the requested
/// info hashes. Performs exactly one scrape round trip per call and never
/// retries, so callers can wrap it in their own retry policy.
#[derive(Debug)]
pub struct ScrapeClient<T: Transport> {
    pub(crate) connection: TrackerConnection<T>,
}
