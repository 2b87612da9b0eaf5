//! Capture-side error types.
//!
//! Every variant here is caught at the interceptor's top-level guard, logged,
//! and swallowed; capture failures never reach the business operation's
//! caller. (Read-side errors live in `vita-db` and are surfaced.)

use thiserror::Error;

/// Errors from resolver execution, enrichment, or the record sink.
#[derive(Debug, Error)]
pub enum CaptureError {
    /// A resolver callback failed.
    #[error("Resolver failed at {stage}: {message}")]
    Resolver {
        stage: &'static str,
        message: String,
    },

    /// The record sink rejected the finished record.
    #[error("Audit write failed: {0}")]
    Sink(anyhow::Error),

    /// Snapshot or payload serialization failed.
    #[error("Snapshot serialization failed: {0}")]
    Serialization(#[from] serde_json::Error),

    /// Catch-all for unexpected errors.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl CaptureError {
    /// Build a resolver-stage error from any displayable cause.
    pub fn resolver(stage: &'static str, cause: impl std::fmt::Display) -> Self {
        Self::Resolver {
            stage,
            message: cause.to_string(),
        }
    }
}
