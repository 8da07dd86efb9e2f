//! Error Types
//!
//! Errors surfaced by the persistence layer. None of them are fatal: the UI
//! logs them and carries on with in-memory state.

use thiserror::Error;

/// Common result type for widget operations
pub type WidgetResult<T> = Result<T, WidgetError>;

#[derive(Debug, Error)]
pub enum WidgetError {
    /// The backing key-value store refused a read or write
    #[error("storage error: {0}")]
    Storage(String),

    /// No key-value store is reachable (e.g. storage disabled by the browser)
    #[error("storage unavailable")]
    StorageUnavailable,

    /// Snapshot could not be encoded or decoded
    #[error("snapshot serialization failed: {0}")]
    Serialize(#[from] serde_json::Error),
}
