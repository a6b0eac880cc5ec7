//! Error types for the store crate.

use thiserror::Error;

/// Errors that can occur while talking to the remote tabular store.
///
/// Store failures are terminal for the fetch they occur in: callers do not
/// retry, and any partially accumulated pages are discarded.
#[derive(Error, Debug)]
pub enum StoreError {
    /// The request to the store timed out.
    #[error("Timeout querying table: {table}")]
    Timeout {
        /// The table being queried when the timeout hit
        table: String,
    },

    /// The request could not be sent or the connection failed.
    #[error("Store request failed: {message}")]
    Request {
        /// The underlying transport error
        message: String,
    },

    /// The store answered with a non-success HTTP status.
    #[error("Store responded with status {status}: {message}")]
    Api {
        /// HTTP status code returned by the store
        status: u16,
        /// Response body, as returned by the store
        message: String,
    },

    /// The response body could not be decoded as a row set.
    #[error("Failed to decode store response: {message}")]
    Decode {
        /// The decode failure
        message: String,
    },
}
