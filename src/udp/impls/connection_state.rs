use std::time::{Duration, Instant};
use crate::udp::structs::connection_id::ConnectionId;
use crate::udp::structs::connection_state::ConnectionState;

impl ConnectionState {
    pub fn new(connection_id: ConnectionId) -> ConnectionState {
        ConnectionState {
            connection_id,
            established_at: Instant::now(),
        }
    }

    pub fn age(&self) -> Duration {
        self.established_at.elapsed()
    }

    /// True while the connection ID is younger than `lifetime`.
    pub fn is_valid(&self, lifetime: Duration) -> bool {
        self.age() < lifetime
    }
}
