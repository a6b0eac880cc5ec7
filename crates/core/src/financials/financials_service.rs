use std::collections::hash_map::Entry;
use std::collections::HashMap;
use std::sync::Arc;

use chrono::{Duration, Utc};
use log::{debug, info};
use serde::Deserialize;
use serde_json::Value;

use fundamentals_store::{fetch_all, SortDirection, TableQuery, TableStore};

use super::financials_cache::FinancialsCache;
use super::financials_constants::{FINANCIALS_TABLE, TICKER_LIST_PROJECTION, TICKER_PROJECTION};
use super::financials_model::{CacheStatus, FinancialRecord, TickerSummary};
use super::financials_traits::FinancialsServiceTrait;
use crate::errors::{Error, Result};

/// Service serving financial-statement records out of the remote store,
/// with full-table and per-ticker TTL caching.
pub struct FinancialsService {
    store: Arc<dyn TableStore>,
    cache: FinancialsCache,
}

impl FinancialsService {
    /// Creates a new FinancialsService over `store` with the given cache
    /// time-to-live.
    pub fn new(store: Arc<dyn TableStore>, ttl: Duration) -> Self {
        Self {
            store,
            cache: FinancialsCache::new(ttl),
        }
    }

    fn decode_records(rows: Vec<Value>) -> Result<Vec<FinancialRecord>> {
        rows.into_iter()
            .map(|row| serde_json::from_value(row).map_err(|e| Error::Decode(e.to_string())))
            .collect()
    }

    async fn refresh_full_table(&self) -> Result<Vec<FinancialRecord>> {
        info!("Cache miss or expired - fetching full financials table");
        let rows = fetch_all(self.store.as_ref(), &TableQuery::new(FINANCIALS_TABLE)).await?;
        let records = Self::decode_records(rows)?;
        self.cache.put_full(records.clone(), Utc::now());
        Ok(records)
    }
}

#[async_trait::async_trait]
impl FinancialsServiceTrait for FinancialsService {
    async fn get_financials(&self, force_refresh: bool) -> Result<Vec<FinancialRecord>> {
        if !force_refresh {
            if let Some(records) = self.cache.get_full(Utc::now()) {
                debug!("Serving {} records from cache", records.len());
                return Ok(records);
            }
        }

        self.refresh_full_table().await
    }

    async fn get_financials_by_ticker(&self, ticker: &str) -> Result<Vec<FinancialRecord>> {
        let symbol = ticker.to_uppercase();

        if let Some(records) = self.cache.get_ticker(&symbol, Utc::now()) {
            debug!("Serving {} cached records for {}", records.len(), symbol);
            return Ok(records);
        }

        let query = TableQuery::new(FINANCIALS_TABLE)
            .select(TICKER_PROJECTION)
            .eq("ticker", symbol.as_str());
        let rows = self.store.query(&query).await?;
        let records = Self::decode_records(rows)?;

        self.cache.put_ticker(&symbol, records.clone(), Utc::now());
        Ok(records)
    }

    async fn list_tickers(&self) -> Result<Vec<TickerSummary>> {
        let query = TableQuery::new(FINANCIALS_TABLE)
            .select(TICKER_LIST_PROJECTION)
            .order("ticker", SortDirection::Ascending);
        let rows = fetch_all(self.store.as_ref(), &query).await?;

        Ok(dedup_tickers(rows))
    }

    fn cache_status(&self) -> CacheStatus {
        self.cache.status(Utc::now())
    }

    fn clear_cache(&self) {
        self.cache.clear();
        info!("Cache cleared");
    }
}

#[derive(Deserialize)]
struct RawTickerRow {
    #[serde(default)]
    ticker: Option<String>,
    #[serde(default)]
    company_name: Option<String>,
    #[serde(default)]
    listed_exchange: Option<Value>,
}

/// Collapses duplicate symbols to the best-scoring row per symbol.
///
/// Tickers are normalized (upper-cased, trimmed) and rows with an empty
/// normalized ticker are dropped. A later candidate replaces an earlier
/// one only with a strictly greater score, so the first row seen wins
/// ties and keeps its slot; output preserves the encounter order of each
/// symbol's first qualifying row.
pub fn dedup_tickers(rows: Vec<Value>) -> Vec<TickerSummary> {
    let mut index_by_ticker: HashMap<String, usize> = HashMap::new();
    let mut retained: Vec<(TickerSummary, u32)> = Vec::new();

    for row in rows {
        let raw: RawTickerRow = match serde_json::from_value(row) {
            Ok(raw) => raw,
            Err(_) => continue,
        };

        let ticker = raw.ticker.as_deref().unwrap_or("").trim().to_uppercase();
        if ticker.is_empty() {
            continue;
        }

        let candidate = TickerSummary {
            ticker: ticker.clone(),
            company_name: raw.company_name,
            listed_exchange: raw.listed_exchange,
        };
        let score = candidate.score();

        match index_by_ticker.entry(ticker) {
            Entry::Occupied(slot) => {
                let existing = &mut retained[*slot.get()];
                if score > existing.1 {
                    *existing = (candidate, score);
                }
            }
            Entry::Vacant(slot) => {
                slot.insert(retained.len());
                retained.push((candidate, score));
            }
        }
    }

    retained.into_iter().map(|(summary, _)| summary).collect()
}
