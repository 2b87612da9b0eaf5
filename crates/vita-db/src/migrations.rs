//! Database migration runner.
//!
//! Embeds the SQL migration file at compile time and executes it on database
//! open. All statements use `IF NOT EXISTS` for idempotent re-running.

use crate::VitaDb;
use crate::error::DatabaseError;

/// Initial schema: the append-only audit log plus the eight domain tables the
/// enrichment fallback reads.
const MIGRATION_001: &str = include_str!("../migrations/001_initial.sql");

impl VitaDb {
    /// Run all embedded migrations in sequence.
    pub(crate) async fn run_migrations(&self) -> Result<(), DatabaseError> {
        self.conn
            .execute_batch(MIGRATION_001)
            .await
            .map_err(|e| DatabaseError::Migration(format!("001_initial: {e}")))?;
        Ok(())
    }
}
