use thiserror::Error;
use crate::udp::enums::action::Action;
use crate::udp::structs::transaction_id::TransactionId;

/// Everything that can go wrong talking to a tracker.
///
/// None of these are retried by the client. `ActionMismatch` and
/// `TransactionIdMismatch` are the two protocol mismatch cases.
#[derive(Error, Debug)]
pub enum TrackerClientError {
    #[error("transport error: {0}")]
    Transport(#[from] std::io::Error),

    #[error("response too short: expected {expected} bytes, received {received}")]
    TruncatedResponse { expected: usize, received: usize },

    #[error("unexpected action in response: {received} (wanted {})", .expected.code())]
    ActionMismatch { expected: Action, received: u32 },

    #[error("transaction ID mismatch: sent {expected}, received {received}")]
    TransactionIdMismatch { expected: TransactionId, received: TransactionId },

    #[error("tracker error: {0}")]
    TrackerError(String),

    #[error("scrape requires at least one info hash")]
    EmptyScrape,
}
