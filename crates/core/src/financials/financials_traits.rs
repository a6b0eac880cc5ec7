//! Financials service trait.
//!
//! The HTTP layer depends on this trait rather than the concrete service,
//! so request handlers can be exercised against a fake in tests.

use async_trait::async_trait;

use super::financials_model::{CacheStatus, FinancialRecord, TickerSummary};
use crate::errors::Result;

/// Contract for serving financial-statement records.
#[async_trait]
pub trait FinancialsServiceTrait: Send + Sync {
    /// Returns every row of the financials table.
    ///
    /// Served from the full-table cache unless the entry is absent,
    /// expired, or `force_refresh` is set; a refresh failure leaves any
    /// previously cached data in place.
    async fn get_financials(&self, force_refresh: bool) -> Result<Vec<FinancialRecord>>;

    /// Returns the rows for one ticker symbol, matched case-insensitively
    /// with the restricted column projection.
    async fn get_financials_by_ticker(&self, ticker: &str) -> Result<Vec<FinancialRecord>>;

    /// Returns one entry per distinct ticker symbol, collapsed to the
    /// best-scoring row. Recomputed from a fresh fetch on every call.
    async fn list_tickers(&self) -> Result<Vec<TickerSummary>>;

    /// Reports the state of the full-table cache entry.
    fn cache_status(&self) -> CacheStatus;

    /// Empties the full-table entry and all per-ticker entries.
    fn clear_cache(&self);
}
