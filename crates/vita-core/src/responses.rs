//! Read-side response types for the query service and statistics aggregator.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::entities::AuditRecord;
use crate::enums::{AuditAction, EntityType};

/// One page of audit records plus pagination metadata.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct AuditPage {
    pub records: Vec<AuditRecord>,
    /// Total records matching the filters, across all pages.
    pub total: u64,
    /// 1-indexed page this response covers.
    pub page: u32,
    pub limit: u32,
    /// `ceil(total / limit)`.
    pub total_pages: u64,
}

/// Count of records for one action.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct ActionCount {
    pub action: AuditAction,
    pub count: u64,
}

/// Count of records for one entity type.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct EntityCount {
    pub entity_type: EntityType,
    pub count: u64,
}

/// Activity of one actor within the stats window.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct ActorActivity {
    pub actor_id: String,
    pub actor_name: String,
    pub count: u64,
}

/// Record count for one calendar day.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct DailyCount {
    /// `YYYY-MM-DD`.
    pub date: String,
    pub count: u64,
}

/// Windowed summary over the audit log.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct AuditStats {
    /// Records with `created_at` inside the trailing window.
    pub total_actions: u64,
    /// Grouped by action, descending by count.
    pub actions_by_type: Vec<ActionCount>,
    /// Grouped by entity type, descending by count.
    pub actions_by_entity: Vec<EntityCount>,
    /// Top 10 actors by count, descending.
    pub active_actors: Vec<ActorActivity>,
    /// Per-day counts for the trailing 7 days, newest date first.
    pub daily_activity: Vec<DailyCount>,
}

/// One `(actor_id, actor_name)` pair present in the log.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct ActorOption {
    pub actor_id: String,
    pub actor_name: String,
}

/// Distinct values present in the log, used to populate filter choices.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct FilterOptions {
    pub actions: Vec<AuditAction>,
    pub entity_types: Vec<EntityType>,
    pub actors: Vec<ActorOption>,
}
