//! Core error types for the fundamentals services.
//!
//! Store-communication failures are the only distinguished failure class:
//! they are never retried and propagate to the HTTP layer carrying the
//! original cause.

use fundamentals_store::StoreError;
use thiserror::Error;

/// Type alias for Result using our Error type.
pub type Result<T> = std::result::Result<T, Error>;

/// Root error type for the fundamentals services.
#[derive(Error, Debug)]
pub enum Error {
    /// The remote store failed during a fetch.
    #[error("Store operation failed: {0}")]
    Store(#[from] StoreError),

    /// A row returned by the store could not be decoded into a record.
    #[error("Failed to decode record: {0}")]
    Decode(String),
}
