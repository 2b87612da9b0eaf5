//! The audit store: writer, query service, and statistics aggregator.
//!
//! Methods are split across `impl AuditStore` blocks, one file per concern:
//! [`append`] (the append-only writer), [`query`] (filtered, paginated
//! reads), [`stats`] (windowed aggregation).

pub mod append;
pub mod query;
pub mod stats;

use std::sync::Arc;

use vita_core::entities::AuditRecord;

use crate::VitaDb;
use crate::directory::DomainDirectory;
use crate::error::DatabaseError;
use crate::helpers::{get_opt_string, parse_datetime, parse_enum, parse_optional_json};

pub(crate) const SELECT_COLS: &str = "id, actor_id, actor_name, action, entity_type, entity_id, \
     entity_name, old_values, new_values, source_address, user_agent, created_at";

pub(crate) fn row_to_record(row: &libsql::Row) -> Result<AuditRecord, DatabaseError> {
    Ok(AuditRecord {
        id: row.get(0)?,
        actor_id: row.get(1)?,
        actor_name: row.get(2)?,
        action: parse_enum(&row.get::<String>(3)?)?,
        entity_type: parse_enum(&row.get::<String>(4)?)?,
        entity_id: row.get(5)?,
        entity_name: row.get(6)?,
        old_values: parse_optional_json(get_opt_string(row, 7)?.as_deref())?,
        new_values: parse_optional_json(get_opt_string(row, 8)?.as_deref())?,
        source_address: get_opt_string(row, 9)?,
        user_agent: get_opt_string(row, 10)?,
        created_at: parse_datetime(&row.get::<String>(11)?)?,
    })
}

/// Read/write surface over the audit log.
///
/// The writer side is append-only; the read side (query service and
/// statistics aggregator) surfaces its errors, unlike the swallow-and-log
/// capture path.
pub struct AuditStore {
    db: Arc<VitaDb>,
    default_limit: u32,
    default_window_days: u32,
}

impl AuditStore {
    /// Open a store over a local database at the given path.
    ///
    /// # Errors
    ///
    /// Returns `DatabaseError` if the database cannot be opened.
    pub async fn new_local(path: &str) -> Result<Self, DatabaseError> {
        let db = VitaDb::open_local(path).await?;
        Ok(Self::from_db(Arc::new(db)))
    }

    /// Wrap an existing database handle.
    #[must_use]
    pub fn from_db(db: Arc<VitaDb>) -> Self {
        Self {
            db,
            default_limit: 20,
            default_window_days: 30,
        }
    }

    /// Override the default page size (normally from `QueryConfig`).
    #[must_use]
    pub const fn with_default_limit(mut self, default_limit: u32) -> Self {
        self.default_limit = default_limit;
        self
    }

    /// Override the default stats window (normally from `QueryConfig`).
    #[must_use]
    pub const fn with_default_window_days(mut self, default_window_days: u32) -> Self {
        self.default_window_days = default_window_days;
        self
    }

    /// Access the underlying database handle.
    #[must_use]
    pub fn db(&self) -> &VitaDb {
        &self.db
    }

    /// Read-only domain directory over the same database, for enrichment.
    #[must_use]
    pub fn directory(&self) -> DomainDirectory {
        DomainDirectory::new(Arc::clone(&self.db))
    }

    pub(crate) const fn default_limit(&self) -> u32 {
        self.default_limit
    }

    pub(crate) const fn default_window_days(&self) -> u32 {
        self.default_window_days
    }
}
