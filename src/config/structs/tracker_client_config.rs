use serde::{Deserialize, Serialize};

/// Settings for the UDP tracker client.
///
/// Timeouts and the connection ID lifetime are expressed in seconds. A
/// timeout of `0` means the socket blocks without limit.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct TrackerClientConfig {
    /// Tracker used when `--udp-tracker-host` is not given, as `host:port`.
    pub udp_tracker_host: String,
    pub receive_timeout: u64,
    pub send_timeout: u64,
    /// How long a connection ID is reused before a new handshake. BEP 15
    /// allows at most 60 seconds.
    pub connection_id_lifetime: u64,
    /// `SO_RCVBUF` for the client socket, `0` keeps the OS default.
    pub recv_buffer_size: usize
}
