//! The audit record writer.
//!
//! Append-only: the store exposes no update or delete over `audit_log`.
//! Snapshots are serialized to one canonical JSON TEXT form here, so the
//! read side deserializes unconditionally.

use chrono::{DateTime, Utc};

use vita_core::entities::{AuditRecord, NewAuditRecord};
use vita_core::ids::PREFIX_AUDIT;

use vita_capture::ports::RecordSink;
use vita_capture::resolver::BoxFuture;

use crate::error::DatabaseError;
use crate::store::AuditStore;

impl AuditStore {
    /// Append a finished record, assigning its id and capture timestamp.
    ///
    /// # Errors
    ///
    /// Returns `DatabaseError` if the INSERT fails.
    pub async fn append(&self, record: NewAuditRecord) -> Result<AuditRecord, DatabaseError> {
        self.append_at(record, Utc::now()).await
    }

    /// Append with an explicit `created_at`.
    ///
    /// The writer normally assigns the timestamp; accepting one exists for
    /// backfills and tests. Callers are responsible for monotonic ordering.
    ///
    /// # Errors
    ///
    /// Returns `DatabaseError` if the INSERT fails.
    pub async fn append_at(
        &self,
        record: NewAuditRecord,
        created_at: DateTime<Utc>,
    ) -> Result<AuditRecord, DatabaseError> {
        let id = self.db().generate_id(PREFIX_AUDIT).await?;

        self.db()
            .conn()
            .execute(
                "INSERT INTO audit_log (id, actor_id, actor_name, action, entity_type, entity_id,
                     entity_name, old_values, new_values, source_address, user_agent, created_at)
                 VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9, ?10, ?11, ?12)",
                libsql::params![
                    id.as_str(),
                    record.actor.id.as_str(),
                    record.actor.name.as_str(),
                    record.action.as_str(),
                    record.entity_type.as_str(),
                    record.entity_id.as_str(),
                    record.entity_name.as_str(),
                    record
                        .old_values
                        .as_ref()
                        .map(std::string::ToString::to_string)
                        .as_deref(),
                    record
                        .new_values
                        .as_ref()
                        .map(std::string::ToString::to_string)
                        .as_deref(),
                    record.source_address.as_deref(),
                    record.user_agent.as_deref(),
                    created_at.to_rfc3339()
                ],
            )
            .await?;

        Ok(AuditRecord {
            id,
            actor_id: record.actor.id,
            actor_name: record.actor.name,
            action: record.action,
            entity_type: record.entity_type,
            entity_id: record.entity_id,
            entity_name: record.entity_name,
            old_values: record.old_values,
            new_values: record.new_values,
            source_address: record.source_address,
            user_agent: record.user_agent,
            created_at,
        })
    }
}

impl RecordSink for AuditStore {
    fn append(&self, record: NewAuditRecord) -> BoxFuture<'_, anyhow::Result<()>> {
        Box::pin(async move {
            Self::append(self, record).await?;
            Ok(())
        })
    }
}
