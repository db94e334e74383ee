// tezos-indexer/src/types.rs

use serde::{Deserialize, Serialize};

/// Items that carry an indexer timestamp.
///
/// The aggregator orders combined results by this value alone, so fetch
/// completion order is never observable.
pub trait Timestamped {
    /// Epoch milliseconds assigned by the indexer
    fn timestamp(&self) -> i64;
}

/// A transaction record as returned by the indexing service.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IndexedTransaction {
    pub source: String,
    pub destination: String,
    /// Amount in mutez
    pub amount: u64,
    /// Fee in mutez
    pub fee: u64,
    /// Epoch milliseconds
    pub timestamp: i64,
    pub block_level: u64,
    pub operation_group_hash: String,
}

impl Timestamped for IndexedTransaction {
    fn timestamp(&self) -> i64 {
        self.timestamp
    }
}
