/// Name of the backing table in the hosted store.
pub const FINANCIALS_TABLE: &str = "financials";

/// Default cache time-to-live in minutes (24 hours).
pub const DEFAULT_TTL_MINUTES: i64 = 1440;

/// Column projection for per-ticker lookups.
pub const TICKER_PROJECTION: &str =
    "ticker, year, quarter, income_statement, balance_sheet, cash_flow, company_name, listed_exchange";

/// Column projection for the deduplicated ticker list.
pub const TICKER_LIST_PROJECTION: &str = "ticker, company_name, listed_exchange";
