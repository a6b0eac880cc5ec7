use serde::{Deserialize, Serialize};
use serde_json::Value;

/// One financial-statement row from the `financials` table.
///
/// Statement payloads are opaque JSON documents; this service never looks
/// inside them. Fields serialize as snake_case, matching the backing
/// table's column names and the wire format the frontend consumes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FinancialRecord {
    /// Ticker symbol, upper-cased in the backing table.
    #[serde(default)]
    pub ticker: String,
    #[serde(default)]
    pub year: Option<i32>,
    #[serde(default)]
    pub quarter: Option<i32>,
    #[serde(default)]
    pub income_statement: Option<Value>,
    #[serde(default)]
    pub balance_sheet: Option<Value>,
    #[serde(default)]
    pub cash_flow: Option<Value>,
    #[serde(default)]
    pub company_name: Option<String>,
    /// Exchange listing; the table holds either a string or a sequence.
    #[serde(default)]
    pub listed_exchange: Option<Value>,
}

/// One entry of the deduplicated ticker directory.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TickerSummary {
    pub ticker: String,
    #[serde(default)]
    pub company_name: Option<String>,
    #[serde(default)]
    pub listed_exchange: Option<Value>,
}

impl TickerSummary {
    /// Heuristic quality score used to pick the best row per symbol.
    ///
    /// +10 for a non-empty trimmed company name, +5 for a non-empty
    /// exchange (string or sequence), +2 more when the trimmed company
    /// name is longer than 5 characters. Maximum 17. The point values
    /// match the observed behavior and are not meant to be improved.
    pub fn score(&self) -> u32 {
        let mut score = 0;

        if let Some(name) = &self.company_name {
            let trimmed = name.trim();
            if !trimmed.is_empty() {
                score += 10;
                if trimmed.len() > 5 {
                    score += 2;
                }
            }
        }

        match &self.listed_exchange {
            Some(Value::String(exchange)) if !exchange.is_empty() => score += 5,
            Some(Value::Array(exchanges)) if !exchanges.is_empty() => score += 5,
            _ => {}
        }

        score
    }
}

/// Health of the full-table cache entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CacheState {
    Empty,
    Valid,
    Expired,
}

/// Snapshot of the full-table cache entry, as reported by the status
/// endpoint. Per-ticker entries are not reported.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CacheStatus {
    pub status: CacheState,
    pub records: usize,
    /// Age of the entry in minutes, rounded to 0.1; absent when empty.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub age_minutes: Option<f64>,
    pub ttl_minutes: i64,
}
