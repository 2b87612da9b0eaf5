//! Database error types for vita-db.
//!
//! Unlike the capture side, read-side errors are surfaced to callers of the
//! query service and statistics aggregator.

use thiserror::Error;

/// Errors from database operations.
#[derive(Debug, Error)]
pub enum DatabaseError {
    /// A SQL query failed.
    #[error("Query failed: {0}")]
    Query(String),

    /// Schema migration failed.
    #[error("Migration failed: {0}")]
    Migration(String),

    /// Expected a result row but none was returned (distinct not-found outcome).
    #[error("No result returned")]
    NoResult,

    /// A filter or parameter was malformed.
    #[error("Invalid query: {0}")]
    InvalidQuery(String),

    /// Underlying libSQL error.
    #[error("libSQL error: {0}")]
    LibSql(#[from] libsql::Error),

    /// Catch-all for unexpected errors.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}
