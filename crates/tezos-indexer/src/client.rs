// tezos-indexer/src/client.rs

use async_trait::async_trait;

use crate::{aggregate, IndexedTransaction, IndexerResult};

/// The transport boundary to the indexing service.
///
/// Implementations issue the actual HTTP queries (and own timeouts);
/// this crate only sees their typed results. A timed out fetch must
/// resolve to an error, which aggregation treats like any other failure.
#[async_trait]
pub trait IndexerGateway: Send + Sync {
    /// Transactions sent from `account`, newest page first
    async fn transactions_sent(
        &self,
        account: &str,
        limit: usize,
    ) -> IndexerResult<Vec<IndexedTransaction>>;

    /// Transactions received by `account`, newest page first
    async fn transactions_received(
        &self,
        account: &str,
        limit: usize,
    ) -> IndexerResult<Vec<IndexedTransaction>>;

    /// Addresses of accounts originated by `account`
    async fn originated_accounts(
        &self,
        account: &str,
        limit: usize,
    ) -> IndexerResult<Vec<String>>;
}

/// A client for a Conseil-style indexing service.
pub struct IndexerClient<G> {
    gateway: G,
}

impl<G: IndexerGateway> IndexerClient<G> {
    pub fn new(gateway: G) -> Self {
        Self { gateway }
    }

    /// All transactions touching `account`: received and sent queries
    /// run concurrently, and the combined result is ordered by timestamp
    /// and trimmed to `limit`.
    ///
    /// If either sub-query fails the whole call fails; failures are
    /// reported in query order (received first), not completion order.
    pub async fn transactions(
        &self,
        account: &str,
        limit: usize,
    ) -> IndexerResult<Vec<IndexedTransaction>> {
        tracing::debug!(account, limit, "fetching sent and received transactions");

        let received = self.gateway.transactions_received(account, limit);
        let sent = self.gateway.transactions_sent(account, limit);
        let combined = aggregate(vec![received, sent], limit).await?;

        tracing::debug!(count = combined.len(), "combined transaction history");
        Ok(combined)
    }

    /// Transactions sent from `account`.
    pub async fn transactions_sent(
        &self,
        account: &str,
        limit: usize,
    ) -> IndexerResult<Vec<IndexedTransaction>> {
        self.gateway.transactions_sent(account, limit).await
    }

    /// Transactions received by `account`.
    pub async fn transactions_received(
        &self,
        account: &str,
        limit: usize,
    ) -> IndexerResult<Vec<IndexedTransaction>> {
        self.gateway.transactions_received(account, limit).await
    }

    /// Accounts originated by `account`.
    pub async fn originated_accounts(
        &self,
        account: &str,
        limit: usize,
    ) -> IndexerResult<Vec<String>> {
        self.gateway.originated_accounts(account, limit).await
    }
}
