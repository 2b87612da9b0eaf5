//! Shared test utilities for vita-db tests.

pub(crate) mod helpers {
    use std::sync::Arc;

    use chrono::{DateTime, Utc};

    use vita_core::entities::{Actor, NewAuditRecord};
    use vita_core::enums::{AuditAction, EntityType};

    use crate::VitaDb;
    use crate::store::AuditStore;

    /// Create an in-memory store.
    pub async fn test_store() -> Arc<AuditStore> {
        let db = VitaDb::open_local(":memory:").await.unwrap();
        Arc::new(AuditStore::from_db(Arc::new(db)))
    }

    /// Seed the domain tables with the fixture rows the enrichment tests use.
    pub async fn seed_domain(store: &AuditStore) {
        let statements = [
            "INSERT INTO users (id, name, location) VALUES (1, 'Dana Reyes', 'Springfield')",
            "INSERT INTO users (id, name, location) VALUES (2, 'Sam Okafor', 'Riverton')",
            "INSERT INTO blood_banks (id, name, city) VALUES (5, 'Central Blood Bank', 'Springfield')",
            "INSERT INTO inventory (blood_bank_id, blood_type, units_available) VALUES (5, 'O+', 10)",
            "INSERT INTO messages (id, sender_id, subject) VALUES (42, 1, 'Stock request')",
            "INSERT INTO campaigns (id, organizer_id, title) VALUES (1, 1, 'Summer Drive')",
            "INSERT INTO appointments (id, donor_id, scheduled_date) VALUES (1, 2, '2026-09-01')",
            "INSERT INTO donations (id, donor_id, blood_type) VALUES (1, 2, 'A-')",
            "INSERT INTO notifications (id, title) VALUES (1, 'Inventory low')",
        ];
        for sql in statements {
            store.db().conn().execute(sql, ()).await.unwrap();
        }
    }

    /// A minimal finished record for write-side tests.
    pub fn sample_record(action: AuditAction, entity_type: EntityType, entity_id: &str) -> NewAuditRecord {
        NewAuditRecord {
            actor: Actor::new("admin-1", "Admin One"),
            action,
            entity_type,
            entity_id: entity_id.to_string(),
            entity_name: format!("{} #{entity_id}", entity_type.label()),
            old_values: None,
            new_values: None,
            source_address: None,
            user_agent: None,
        }
    }

    /// Append a record with an explicit timestamp (for windowing tests).
    pub async fn append_at(
        store: &AuditStore,
        record: NewAuditRecord,
        created_at: DateTime<Utc>,
    ) -> String {
        store.append_at(record, created_at).await.unwrap().id
    }
}
