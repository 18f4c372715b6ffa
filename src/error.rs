//! Typed errors for the aggregation library.
//!
//! Uses `thiserror` for library errors (not `anyhow`) to provide
//! strongly-typed, composable error handling.
//!
//! Only the source boundary can fail. The merge/dedup/statistics
//! pipeline itself is infallible: a source error is converted to an
//! absent entry before the merger ever sees it, and the worst pipeline
//! outcome is an all-empty document.

use thiserror::Error;

/// Errors that can occur while probing one content source.
#[derive(Debug, Error)]
pub enum SourceError {
    /// The probe did not resolve within the bounded wait
    #[error("source timed out")]
    Timeout,

    /// The probe resolved but carried no reply at all
    #[error("source returned no response")]
    NoResponse,

    /// The probe reported a failure of its own
    #[error("source failed: {reason}")]
    Failed { reason: String },

    /// The scrape was torn down while the probe was outstanding
    #[error("scrape cancelled")]
    Cancelled,

    /// The probe replied with something that is neither an envelope
    /// nor a bare metadata object
    #[error("payload parse error: {0}")]
    Payload(#[from] serde_json::Error),
}

/// Result type alias for source operations.
pub type SourceResult<T> = std::result::Result<T, SourceError>;
