//! In-process TTL cache for financial records.

use std::collections::HashMap;
use std::sync::RwLock;

use chrono::{DateTime, Duration, Utc};

use super::financials_model::{CacheState, CacheStatus, FinancialRecord};

/// A cached value together with the instant it was fetched.
///
/// Entries are stored as `Option<CacheEntry<T>>`, so a value and its
/// timestamp are always present or absent together.
#[derive(Debug, Clone)]
pub struct CacheEntry<T> {
    pub data: T,
    pub fetched_at: DateTime<Utc>,
}

impl<T> CacheEntry<T> {
    pub fn new(data: T, fetched_at: DateTime<Utc>) -> Self {
        Self { data, fetched_at }
    }

    pub fn age(&self, now: DateTime<Utc>) -> Duration {
        now - self.fetched_at
    }

    /// An entry expires once its age reaches the TTL (inclusive).
    pub fn is_expired(&self, ttl: Duration, now: DateTime<Utc>) -> bool {
        self.age(now) >= ttl
    }
}

/// Cache owned by the financials service: one full-table snapshot plus
/// per-ticker snapshots keyed by upper-cased symbol.
///
/// Entries are replaced on refresh and removed only by [`clear`]; the
/// per-ticker map otherwise grows without bound. Concurrent refreshes may
/// both fetch and write (last writer wins) - there is no single-flight
/// coordination, and locks are never held across awaits.
///
/// [`clear`]: FinancialsCache::clear
pub struct FinancialsCache {
    ttl: Duration,
    full: RwLock<Option<CacheEntry<Vec<FinancialRecord>>>>,
    by_ticker: RwLock<HashMap<String, CacheEntry<Vec<FinancialRecord>>>>,
}

impl FinancialsCache {
    pub fn new(ttl: Duration) -> Self {
        Self {
            ttl,
            full: RwLock::new(None),
            by_ticker: RwLock::new(HashMap::new()),
        }
    }

    pub fn ttl(&self) -> Duration {
        self.ttl
    }

    /// Returns the full-table snapshot when present and unexpired.
    pub fn get_full(&self, now: DateTime<Utc>) -> Option<Vec<FinancialRecord>> {
        let full = self.full.read().unwrap();
        full.as_ref()
            .filter(|entry| !entry.is_expired(self.ttl, now))
            .map(|entry| entry.data.clone())
    }

    pub fn put_full(&self, records: Vec<FinancialRecord>, now: DateTime<Utc>) {
        let mut full = self.full.write().unwrap();
        *full = Some(CacheEntry::new(records, now));
    }

    /// Returns the snapshot for one upper-cased symbol when unexpired.
    pub fn get_ticker(&self, symbol: &str, now: DateTime<Utc>) -> Option<Vec<FinancialRecord>> {
        let by_ticker = self.by_ticker.read().unwrap();
        by_ticker
            .get(symbol)
            .filter(|entry| !entry.is_expired(self.ttl, now))
            .map(|entry| entry.data.clone())
    }

    pub fn put_ticker(&self, symbol: &str, records: Vec<FinancialRecord>, now: DateTime<Utc>) {
        let mut by_ticker = self.by_ticker.write().unwrap();
        by_ticker.insert(symbol.to_string(), CacheEntry::new(records, now));
    }

    /// Empties the full-table entry and every per-ticker entry. Idempotent.
    pub fn clear(&self) {
        *self.full.write().unwrap() = None;
        self.by_ticker.write().unwrap().clear();
    }

    /// Reports the state of the full-table entry only.
    pub fn status(&self, now: DateTime<Utc>) -> CacheStatus {
        let ttl_minutes = self.ttl.num_minutes();
        let full = self.full.read().unwrap();

        match full.as_ref() {
            None => CacheStatus {
                status: CacheState::Empty,
                records: 0,
                age_minutes: None,
                ttl_minutes,
            },
            Some(entry) => {
                let age = entry.age(now);
                let age_minutes = age.num_seconds() as f64 / 60.0;
                let status = if entry.is_expired(self.ttl, now) {
                    CacheState::Expired
                } else {
                    CacheState::Valid
                };

                CacheStatus {
                    status,
                    records: entry.data.len(),
                    age_minutes: Some((age_minutes * 10.0).round() / 10.0),
                    ttl_minutes,
                }
            }
        }
    }
}
