use std::time::Instant;
use crate::udp::structs::connection_id::ConnectionId;

/// A connection ID together with the moment the handshake completed.
///
/// Only the connection manager holds one of these.
#[derive(PartialEq, Eq, Clone, Copy, Debug)]
pub struct ConnectionState {
    pub connection_id: ConnectionId,
    pub established_at: Instant,
}
