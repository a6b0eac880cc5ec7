//! Range-based pagination over the store's fixed page cap.

use serde_json::Value;
use tracing::debug;

use crate::errors::StoreError;
use crate::query::TableQuery;
use crate::traits::TableStore;

/// Maximum number of rows the hosted store returns per query.
pub const PAGE_SIZE: usize = 1000;

/// Fetches every row matching `query` by walking [`PAGE_SIZE`]-row ranges.
///
/// The walk stops on an empty page or a page shorter than `PAGE_SIZE`; a
/// total row count that is an exact multiple of the page size therefore
/// costs one extra request that returns no rows. Pages are fetched
/// sequentially with no retry; the first error aborts the walk and the
/// partial accumulation is discarded.
pub async fn fetch_all(
    store: &dyn TableStore,
    query: &TableQuery,
) -> Result<Vec<Value>, StoreError> {
    let mut all_rows = Vec::new();
    let mut start = 0usize;
    let mut page_count = 0usize;

    loop {
        let end = start + PAGE_SIZE - 1;
        let page = store.query(&query.clone().range(start, end)).await?;
        page_count += 1;

        debug!(
            "Page {}: fetched {} rows (range {}-{})",
            page_count,
            page.len(),
            start,
            end
        );

        if page.is_empty() {
            break;
        }

        let short_page = page.len() < PAGE_SIZE;
        all_rows.extend(page);

        if short_page {
            break;
        }

        start += PAGE_SIZE;
    }

    Ok(all_rows)
}

#[cfg(test)]
mod tests {
    use std::collections::VecDeque;
    use std::sync::Mutex;

    use async_trait::async_trait;
    use serde_json::json;

    use super::*;

    /// Fake store serving a scripted sequence of pages.
    struct PagedStore {
        pages: Mutex<VecDeque<Result<Vec<Value>, StoreError>>>,
        calls: Mutex<Vec<TableQuery>>,
    }

    impl PagedStore {
        fn new(pages: Vec<Result<Vec<Value>, StoreError>>) -> Self {
            Self {
                pages: Mutex::new(pages.into()),
                calls: Mutex::new(Vec::new()),
            }
        }

        fn calls(&self) -> Vec<TableQuery> {
            self.calls.lock().unwrap().clone()
        }
    }

    #[async_trait]
    impl TableStore for PagedStore {
        async fn query(&self, query: &TableQuery) -> Result<Vec<Value>, StoreError> {
            self.calls.lock().unwrap().push(query.clone());
            self.pages
                .lock()
                .unwrap()
                .pop_front()
                .expect("unexpected extra page request")
        }
    }

    fn rows(n: usize) -> Vec<Value> {
        (0..n).map(|i| json!({ "row": i })).collect()
    }

    #[tokio::test]
    async fn short_final_page_terminates_the_walk() {
        let store = PagedStore::new(vec![Ok(rows(1000)), Ok(rows(1000)), Ok(rows(437))]);
        let query = TableQuery::new("financials");

        let all = fetch_all(&store, &query).await.unwrap();

        assert_eq!(all.len(), 2437);
        let calls = store.calls();
        assert_eq!(calls.len(), 3);
        assert_eq!(calls[0].row_range(), Some((0, 999)));
        assert_eq!(calls[1].row_range(), Some((1000, 1999)));
        assert_eq!(calls[2].row_range(), Some((2000, 2999)));
    }

    #[tokio::test]
    async fn exact_multiple_needs_one_empty_page() {
        let store = PagedStore::new(vec![
            Ok(rows(1000)),
            Ok(rows(1000)),
            Ok(rows(1000)),
            Ok(rows(0)),
        ]);
        let query = TableQuery::new("financials");

        let all = fetch_all(&store, &query).await.unwrap();

        assert_eq!(all.len(), 3000);
        assert_eq!(store.calls().len(), 4);
    }

    #[tokio::test]
    async fn empty_table_is_one_request() {
        let store = PagedStore::new(vec![Ok(rows(0))]);
        let query = TableQuery::new("financials");

        let all = fetch_all(&store, &query).await.unwrap();

        assert!(all.is_empty());
        assert_eq!(store.calls().len(), 1);
    }

    #[tokio::test]
    async fn error_aborts_and_discards_partial_pages() {
        let store = PagedStore::new(vec![
            Ok(rows(1000)),
            Err(StoreError::Api {
                status: 503,
                message: "unavailable".to_string(),
            }),
        ]);
        let query = TableQuery::new("financials");

        let result = fetch_all(&store, &query).await;

        assert!(matches!(result, Err(StoreError::Api { status: 503, .. })));
        assert_eq!(store.calls().len(), 2);
    }

    #[tokio::test]
    async fn projection_and_order_are_preserved_per_page() {
        let store = PagedStore::new(vec![Ok(rows(2))]);
        let query = TableQuery::new("financials")
            .select("ticker, company_name, listed_exchange")
            .order("ticker", crate::SortDirection::Ascending);

        fetch_all(&store, &query).await.unwrap();

        let call = &store.calls()[0];
        assert_eq!(call.select_clause(), "ticker, company_name, listed_exchange");
        assert_eq!(
            call.order_clause(),
            Some(("ticker", crate::SortDirection::Ascending))
        );
    }
}
