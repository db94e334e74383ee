// tezos-indexer/src/aggregate.rs

//! Fan-out/fan-in aggregation of paginated query results.
//!
//! All sub-queries run concurrently and are joined before any result is
//! inspected; a failed sub-query fails the whole aggregate. Partial data
//! is never returned as success.

use std::future::Future;

use futures::future::join_all;

use crate::Timestamped;

/// Combine completed sub-query results.
///
/// Results are scanned in input order: the first failure wins, no matter
/// which sub-query finished first. On success the sequences are
/// concatenated in input order.
pub fn combine<T, E>(partials: Vec<Result<Vec<T>, E>>) -> Result<Vec<T>, E> {
    let mut combined = Vec::new();
    for partial in partials {
        combined.extend(partial?);
    }
    Ok(combined)
}

/// Run the given fetches concurrently, wait for all of them, then merge,
/// sort by timestamp ascending and truncate to `limit`.
pub async fn aggregate<T, E, F>(fetches: Vec<F>, limit: usize) -> Result<Vec<T>, E>
where
    T: Timestamped,
    F: Future<Output = Result<Vec<T>, E>>,
{
    // join_all preserves input order regardless of completion order
    let partials = join_all(fetches).await;

    let mut combined = combine(partials)?;
    combined.sort_by_key(Timestamped::timestamp);
    combined.truncate(limit);
    Ok(combined)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{IndexerError, IndexerResult};
    use tokio::time::{sleep, Duration};

    #[derive(Debug, Clone, PartialEq)]
    struct Item(i64);

    impl Timestamped for Item {
        fn timestamp(&self) -> i64 {
            self.0
        }
    }

    async fn fetch(result: IndexerResult<Vec<Item>>) -> IndexerResult<Vec<Item>> {
        result
    }

    async fn fetch_after(ms: u64, result: IndexerResult<Vec<Item>>) -> IndexerResult<Vec<Item>> {
        sleep(Duration::from_millis(ms)).await;
        result
    }

    #[test]
    fn test_combine_concatenates_in_input_order() {
        let combined = combine::<_, IndexerError>(vec![
            Ok(vec![Item(5), Item(1)]),
            Ok(vec![Item(3)]),
        ])
        .unwrap();
        assert_eq!(combined, vec![Item(5), Item(1), Item(3)]);
    }

    #[test]
    fn test_combine_first_failure_wins() {
        let result = combine(vec![
            Err(IndexerError::Query("a".into())),
            Ok(vec![Item(1)]),
            Err(IndexerError::Query("c".into())),
        ]);
        assert_eq!(result, Err(IndexerError::Query("a".into())));
    }

    #[tokio::test]
    async fn test_merge_sort_and_limit() {
        let fetches = vec![
            fetch(Ok(vec![Item(5), Item(1)])),
            fetch(Ok(vec![Item(3)])),
        ];
        let combined = aggregate(fetches, 2).await.unwrap();
        assert_eq!(combined, vec![Item(1), Item(3)]);
    }

    #[tokio::test]
    async fn test_limit_beyond_total_returns_all() {
        let fetches = vec![
            fetch(Ok(vec![Item(2)])),
            fetch(Ok(vec![Item(1)])),
        ];
        let combined = aggregate(fetches, 100).await.unwrap();
        assert_eq!(combined, vec![Item(1), Item(2)]);
    }

    #[tokio::test]
    async fn test_any_failure_fails_the_aggregate() {
        let fetches = vec![
            fetch(Ok(vec![Item(1), Item(2), Item(3)])),
            fetch(Err(IndexerError::Query("boom".into()))),
        ];
        let result = aggregate(fetches, 10).await;
        assert_eq!(result, Err(IndexerError::Query("boom".into())));
    }

    #[tokio::test]
    async fn test_failure_order_is_input_order_not_completion_order() {
        // The second fetch fails immediately, the first fails later; the
        // reported failure is still the first one's.
        let fetches = vec![
            fetch_after(50, Err(IndexerError::Query("first".into()))),
            fetch_after(0, Err(IndexerError::Query("second".into()))),
        ];
        let result = aggregate(fetches, 10).await;
        assert_eq!(result, Err(IndexerError::Query("first".into())));
    }

    #[tokio::test]
    async fn test_slow_success_does_not_reorder_items() {
        let fetches = vec![
            fetch_after(50, Ok(vec![Item(1)])),
            fetch_after(0, Ok(vec![Item(2)])),
        ];
        let combined = aggregate(fetches, 10).await.unwrap();
        assert_eq!(combined, vec![Item(1), Item(2)]);
    }

    #[tokio::test]
    async fn test_timeout_fails_like_any_fetch_failure() {
        let fetches = vec![
            fetch(Ok(vec![Item(1)])),
            fetch(Err(IndexerError::Timeout("sent".into()))),
        ];
        let result = aggregate(fetches, 10).await;
        assert_eq!(result, Err(IndexerError::Timeout("sent".into())));
    }

    #[tokio::test]
    async fn test_no_fetches_yields_empty() {
        let fetches: Vec<_> = Vec::<futures::future::Ready<IndexerResult<Vec<Item>>>>::new();
        let combined = aggregate(fetches, 10).await.unwrap();
        assert!(combined.is_empty());
    }
}
