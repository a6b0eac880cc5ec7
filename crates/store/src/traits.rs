//! Store trait definition.

use async_trait::async_trait;
use serde_json::Value;

use crate::errors::StoreError;
use crate::query::TableQuery;

/// Capability interface over the remote tabular store.
///
/// Implementations execute a single [`TableQuery`] and return the matching
/// rows as raw JSON objects. The trait is object-safe so the service layer
/// can hold an `Arc<dyn TableStore>` and tests can substitute an in-memory
/// fake.
#[async_trait]
pub trait TableStore: Send + Sync {
    /// Executes `query` and returns the matching rows.
    ///
    /// The store caps each call at [`PAGE_SIZE`](crate::PAGE_SIZE) rows;
    /// use [`fetch_all`](crate::fetch_all) to retrieve a full result set.
    async fn query(&self, query: &TableQuery) -> Result<Vec<Value>, StoreError>;
}
