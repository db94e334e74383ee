// tezos-indexer/src/lib.rs

//! Concurrent queries against a Conseil-style indexing service
//!
//! This crate provides:
//! - Typed records for indexed transactions
//! - A gateway trait at the HTTP transport boundary
//! - A fan-out/fan-in result aggregator with fail-fast semantics
//! - A client that merges multi-source paginated queries

pub mod aggregate;
pub mod client;
pub mod config;
pub mod types;

pub use aggregate::{aggregate, combine};
pub use client::{IndexerClient, IndexerGateway};
pub use config::{IndexerConfig, Network, Platform};
pub use types::{IndexedTransaction, Timestamped};

/// Result type for indexer queries
pub type IndexerResult<T> = Result<T, IndexerError>;

/// Errors surfaced by indexer queries.
///
/// The aggregator never recovers a failed sub-query; the first failure
/// in input order is reported verbatim.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum IndexerError {
    #[error("Query failed: {0}")]
    Query(String),

    #[error("Query timed out: {0}")]
    Timeout(String),
}
