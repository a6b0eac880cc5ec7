//! Supabase/PostgREST client implementation.
//!
//! Projection, equality filters and ordering travel as query parameters
//! (`select=...`, `{col}=eq.{value}`, `order={col}.{dir}`); row ranges use
//! the `Range` / `Range-Unit: items` headers, which is how PostgREST pages
//! result sets. Credentials are the project service-role key, sent both as
//! the `apikey` header and as a bearer token.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use serde_json::Value;
use tracing::debug;

use crate::errors::StoreError;
use crate::query::TableQuery;
use crate::traits::TableStore;

const REST_PATH: &str = "rest/v1";

/// Client for a hosted Supabase project's REST endpoint.
pub struct PostgrestClient {
    client: Client,
    base_url: String,
    api_key: String,
}

impl PostgrestClient {
    /// Creates a client for the project at `base_url` using `api_key` as
    /// the service-role credential.
    pub fn new(base_url: impl Into<String>, api_key: impl Into<String>) -> Self {
        let client = Client::builder()
            .timeout(Duration::from_secs(30))
            .build()
            .unwrap_or_else(|_| Client::new());

        let base_url: String = base_url.into();

        Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
            api_key: api_key.into(),
        }
    }
}

#[async_trait]
impl TableStore for PostgrestClient {
    async fn query(&self, query: &TableQuery) -> Result<Vec<Value>, StoreError> {
        let url = format!("{}/{}/{}", self.base_url, REST_PATH, query.table());

        let mut request = self
            .client
            .get(&url)
            .header("apikey", &self.api_key)
            .bearer_auth(&self.api_key)
            .query(&[("select", query.select_clause())]);

        for (column, value) in query.filters() {
            request = request.query(&[(column.as_str(), format!("eq.{}", value))]);
        }

        if let Some((column, direction)) = query.order_clause() {
            request = request.query(&[("order", format!("{}.{}", column, direction.as_str()))]);
        }

        if let Some((start, end)) = query.row_range() {
            request = request
                .header("Range-Unit", "items")
                .header("Range", format!("{}-{}", start, end));
        }

        debug!(
            "Store request: table={} filters={} range={:?}",
            query.table(),
            query.filters().len(),
            query.row_range()
        );

        let response = request.send().await.map_err(|e| {
            if e.is_timeout() {
                StoreError::Timeout {
                    table: query.table().to_string(),
                }
            } else {
                StoreError::Request {
                    message: e.to_string(),
                }
            }
        })?;

        let status = response.status();
        if !status.is_success() {
            let message = response.text().await.unwrap_or_default();
            return Err(StoreError::Api {
                status: status.as_u16(),
                message,
            });
        }

        response
            .json::<Vec<Value>>()
            .await
            .map_err(|e| StoreError::Decode {
                message: e.to_string(),
            })
    }
}
