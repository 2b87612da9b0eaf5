//! The audit record entity and actor identity.

use chrono::{DateTime, Utc};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::enums::{AuditAction, EntityType};

/// Lightweight authenticated operator identity for cross-crate passing.
///
/// Produced by the portal's identity layer, consumed by the capture
/// pipeline. Contains only data fields, no auth logic.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct Actor {
    /// Operator account id.
    pub id: String,
    /// Display name at capture time.
    pub name: String,
}

impl Actor {
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
        }
    }
}

/// An append-only audit entry recording one successful mutation.
///
/// Invariant: `entity_name` is never empty; it is resolved via an explicit
/// label resolver or the enrichment fallback chain, terminating in a
/// synthesized placeholder.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct AuditRecord {
    pub id: String,
    pub actor_id: String,
    pub actor_name: String,
    pub action: AuditAction,
    pub entity_type: EntityType,
    pub entity_id: String,
    pub entity_name: String,
    /// Snapshot of relevant fields prior to the mutation (caller-defined shape).
    pub old_values: Option<serde_json::Value>,
    /// Snapshot of the fields that changed or were set (caller-defined shape).
    pub new_values: Option<serde_json::Value>,
    pub source_address: Option<String>,
    pub user_agent: Option<String>,
    pub created_at: DateTime<Utc>,
}

/// A fully-resolved record ready to be persisted.
///
/// The store assigns `id` and `created_at` on append.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewAuditRecord {
    pub actor: Actor,
    pub action: AuditAction,
    pub entity_type: EntityType,
    pub entity_id: String,
    pub entity_name: String,
    pub old_values: Option<serde_json::Value>,
    pub new_values: Option<serde_json::Value>,
    pub source_address: Option<String>,
    pub user_agent: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn record_roundtrip() {
        let record = AuditRecord {
            id: "aud-deadbeef".to_string(),
            actor_id: "admin-1".to_string(),
            actor_name: "Admin One".to_string(),
            action: AuditAction::UpdateInventory,
            entity_type: EntityType::Inventory,
            entity_id: "5_O+".to_string(),
            entity_name: "Central Bank - O+".to_string(),
            old_values: Some(serde_json::json!({"units_available": 10})),
            new_values: Some(serde_json::json!({"operation": "add", "units_changed": 2})),
            source_address: Some("10.0.0.7".to_string()),
            user_agent: None,
            created_at: Utc::now(),
        };

        let json = serde_json::to_string(&record).unwrap();
        let recovered: AuditRecord = serde_json::from_str(&json).unwrap();
        assert_eq!(recovered, record);
    }
}
