//! Financials module - domain models, cache, service, and traits.

mod financials_cache;
mod financials_constants;
mod financials_model;
mod financials_service;
mod financials_traits;



// Re-export the public interface
pub use financials_cache::{CacheEntry, FinancialsCache};
pub use financials_constants::*;
pub use financials_model::{CacheState, CacheStatus, FinancialRecord, TickerSummary};
pub use financials_service::{dedup_tickers, FinancialsService};
pub use financials_traits::FinancialsServiceTrait;
