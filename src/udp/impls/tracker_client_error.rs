use std::io;
use crate::udp::enums::tracker_client_error::TrackerClientError;

impl TrackerClientError {
    pub fn is_transport(&self) -> bool {
        matches!(self, TrackerClientError::Transport(_))
    }

    /// True when the receive timeout expired before a datagram arrived.
    pub fn is_timeout(&self) -> bool {
        match self {
            TrackerClientError::Transport(e) => matches!(e.kind(), io::ErrorKind::WouldBlock | io::ErrorKind::TimedOut),
            _ => false,
        }
    }

    pub fn is_protocol_mismatch(&self) -> bool {
        matches!(self, TrackerClientError::ActionMismatch { .. } | TrackerClientError::TransactionIdMismatch { .. })
    }
}
