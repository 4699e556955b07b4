use std::fmt;
use rand::RngExt;
use crate::udp::structs::transaction_id::TransactionId;

impl TransactionId {
    /// Draws a transaction ID uniformly from the 32-bit space.
    pub fn random() -> TransactionId {
        let mut rng = rand::rng();
        TransactionId(rng.random())
    }
}

impl fmt::Display for TransactionId {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{:#010x}", self.0)
    }
}
