//! # vita-db
//!
//! libSQL persistence for the Vitalog audit log.
//!
//! Holds the append-only `audit_log` table and the read-only domain tables
//! the enrichment fallback queries (users, donations, campaigns,
//! appointments, inventory, messages, blood banks, notifications).
//!
//! Uses the `libsql` crate (C `SQLite` fork): native local databases with a
//! stable async API.

pub mod directory;
pub mod error;
pub mod helpers;
mod migrations;
pub mod store;

#[cfg(test)]
mod test_support;

use error::DatabaseError;
use libsql::Builder;

/// Central database handle for all Vitalog state.
///
/// Wraps a libSQL database and connection. Provides ID generation; the
/// `AuditStore` in [`store`] hosts all query methods.
pub struct VitaDb {
    #[allow(dead_code)]
    db: libsql::Database,
    conn: libsql::Connection,
}

impl VitaDb {
    /// Open a local-only database at the given path.
    ///
    /// Runs migrations automatically on first open.
    ///
    /// # Errors
    ///
    /// Returns `DatabaseError` if the database cannot be opened or
    /// migrations fail.
    pub async fn open_local(path: &str) -> Result<Self, DatabaseError> {
        let db = Builder::new_local(path).build().await?;
        let conn = db.connect()?;

        // Enable foreign keys (must be per-connection in SQLite)
        conn.execute("PRAGMA foreign_keys = ON", ())
            .await
            .map_err(|e| DatabaseError::Migration(format!("PRAGMA foreign_keys: {e}")))?;

        let vita_db = Self { db, conn };
        vita_db.run_migrations().await?;
        tracing::debug!(path, "database opened");
        Ok(vita_db)
    }

    /// Access the underlying libSQL connection for direct queries.
    #[must_use]
    pub const fn conn(&self) -> &libsql::Connection {
        &self.conn
    }

    /// Generate a prefixed ID via libSQL. Returns e.g., `"aud-a3f8b2c1"`.
    ///
    /// Uses `randomblob(4)` in SQL to produce 8-char hex, then prepends the prefix.
    ///
    /// # Errors
    ///
    /// Returns `DatabaseError` if the query fails or returns no rows.
    pub async fn generate_id(&self, prefix: &str) -> Result<String, DatabaseError> {
        let mut rows = self
            .conn
            .query(
                &format!("SELECT '{prefix}-' || lower(hex(randomblob(4)))"),
                (),
            )
            .await?;
        let row = rows.next().await?.ok_or(DatabaseError::NoResult)?;
        Ok(row.get::<String>(0)?)
    }
}
