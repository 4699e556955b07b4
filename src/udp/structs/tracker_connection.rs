use std::time::Duration;
use crate::udp::structs::connection_state::ConnectionState;
use crate::udp::traits::transport::Transport;

/// Connection manager for a single tracker endpoint.
///
/// Owns the transport and the cached connection ID. The connection ID is
/// only ever handed out by [`TrackerConnection::connect`], which is the one
/// place the lifetime rule is enforced.
///
/// Not meant to be shared between threads: the cache check and the handshake
/// are not atomic.
#[derive(Debug)]
pub struct TrackerConnection<T: Transport> {
    pub(crate) transport: T,
    pub(crate) state: Option<ConnectionState>,
    pub(crate) connection_id_lifetime: Duration,
    pub(crate) closed: bool,
}
