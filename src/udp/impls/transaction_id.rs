use std::fmt;
use std::fmt::Formatter;
use rand::RngExt;
use crate::udp::structs::transaction_id::TransactionId;

impl TransactionId {
    pub fn random() -> TransactionId {
        let mut rng = rand::rng();
        TransactionId(rng.random())
    }
}

impl From<u32> for TransactionId {
    fn from(value: u32) -> Self {
        TransactionId(value)
    }
}

impl fmt::Display for TransactionId {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
