//! Table query builder.

/// Sort direction for an `order` clause.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortDirection {
    Ascending,
    Descending,
}

impl SortDirection {
    /// PostgREST direction suffix (`order=col.asc` / `order=col.desc`).
    pub fn as_str(&self) -> &'static str {
        match self {
            SortDirection::Ascending => "asc",
            SortDirection::Descending => "desc",
        }
    }
}

/// A single query against one table: column projection, equality filters,
/// optional ordering, and an optional inclusive row range.
///
/// The builder is pure data; [`TableStore`](crate::TableStore)
/// implementations translate it to the wire.
#[derive(Debug, Clone, PartialEq)]
pub struct TableQuery {
    table: String,
    select: String,
    filters: Vec<(String, String)>,
    order: Option<(String, SortDirection)>,
    range: Option<(usize, usize)>,
}

impl TableQuery {
    /// Starts a query against `table`, projecting all columns.
    pub fn new(table: impl Into<String>) -> Self {
        Self {
            table: table.into(),
            select: "*".to_string(),
            filters: Vec::new(),
            order: None,
            range: None,
        }
    }

    /// Sets the column projection, e.g. `"ticker, year, quarter"`.
    pub fn select(mut self, columns: impl Into<String>) -> Self {
        self.select = columns.into();
        self
    }

    /// Adds an equality filter on `column`.
    pub fn eq(mut self, column: impl Into<String>, value: impl Into<String>) -> Self {
        self.filters.push((column.into(), value.into()));
        self
    }

    /// Orders the result set by `column`.
    pub fn order(mut self, column: impl Into<String>, direction: SortDirection) -> Self {
        self.order = Some((column.into(), direction));
        self
    }

    /// Restricts the result set to the inclusive row range `[start, end]`.
    pub fn range(mut self, start: usize, end: usize) -> Self {
        self.range = Some((start, end));
        self
    }

    pub fn table(&self) -> &str {
        &self.table
    }

    pub fn select_clause(&self) -> &str {
        &self.select
    }

    pub fn filters(&self) -> &[(String, String)] {
        &self.filters
    }

    pub fn order_clause(&self) -> Option<(&str, SortDirection)> {
        self.order
            .as_ref()
            .map(|(column, direction)| (column.as_str(), *direction))
    }

    pub fn row_range(&self) -> Option<(usize, usize)> {
        self.range
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_to_full_projection() {
        let query = TableQuery::new("financials");
        assert_eq!(query.table(), "financials");
        assert_eq!(query.select_clause(), "*");
        assert!(query.filters().is_empty());
        assert_eq!(query.order_clause(), None);
        assert_eq!(query.row_range(), None);
    }

    #[test]
    fn builder_records_all_clauses() {
        let query = TableQuery::new("financials")
            .select("ticker, company_name")
            .eq("ticker", "AAPL")
            .order("ticker", SortDirection::Ascending)
            .range(0, 999);

        assert_eq!(query.select_clause(), "ticker, company_name");
        assert_eq!(
            query.filters(),
            &[("ticker".to_string(), "AAPL".to_string())]
        );
        assert_eq!(
            query.order_clause(),
            Some(("ticker", SortDirection::Ascending))
        );
        assert_eq!(query.row_range(), Some((0, 999)));
    }

    #[test]
    fn range_is_inclusive_and_replaceable() {
        let query = TableQuery::new("financials").range(0, 999).range(1000, 1999);
        assert_eq!(query.row_range(), Some((1000, 1999)));
    }

    #[test]
    fn sort_direction_suffixes() {
        assert_eq!(SortDirection::Ascending.as_str(), "asc");
        assert_eq!(SortDirection::Descending.as_str(), "desc");
    }
}
