//! Typed errors for the work order library.
//!
//! Uses `thiserror` for library errors (not `anyhow`) to provide
//! strongly-typed, composable error handling.

use std::time::Duration;
use thiserror::Error;

/// Errors that can occur during work order operations.
#[derive(Debug, Error)]
pub enum WorkOrderError {
    /// Configuration error (missing credential, invalid settings)
    #[error("config error: {0}")]
    Config(String),

    /// Extraction service call failed (network, quota, API)
    #[error("extraction service error: {0}")]
    Extraction(#[source] Box<dyn std::error::Error + Send + Sync>),

    /// Service response violated the record contract
    #[error("malformed extraction result: {reason}")]
    Schema { reason: String },

    /// Message source failed
    #[error("message fetch error: {0}")]
    Fetch(#[source] Box<dyn std::error::Error + Send + Sync>),

    /// Transform invoked with no message held
    #[error("no message loaded")]
    NoMessage,

    /// An awaited operation exceeded its deadline
    #[error("{operation} timed out after {elapsed:?}")]
    Timeout {
        operation: String,
        elapsed: Duration,
    },
}

/// Result type alias for work order operations.
pub type Result<T> = std::result::Result<T, WorkOrderError>;
