//! The audit statistics aggregator.
//!
//! Summarized views over a trailing window. `daily_activity` always covers
//! the trailing 7 calendar days, independent of `window_days`.

use chrono::{Days, Duration, Utc};

use vita_core::responses::{ActionCount, ActorActivity, AuditStats, DailyCount, EntityCount};

use crate::error::DatabaseError;
use crate::helpers::{get_count, parse_enum};
use crate::store::AuditStore;

/// Number of top actors reported.
const ACTIVE_ACTOR_LIMIT: u32 = 10;

/// Calendar days covered by `daily_activity` (today included).
const DAILY_ACTIVITY_DAYS: u64 = 7;

impl AuditStore {
    /// Aggregate the log over the store's configured default window.
    ///
    /// # Errors
    ///
    /// Returns `DatabaseError` if a query fails.
    pub async fn stats_default(&self) -> Result<AuditStats, DatabaseError> {
        self.stats(self.default_window_days()).await
    }

    /// Aggregate the log over the trailing `window_days`.
    ///
    /// # Errors
    ///
    /// Returns `DatabaseError` if a query fails.
    pub async fn stats(&self, window_days: u32) -> Result<AuditStats, DatabaseError> {
        let cutoff = (Utc::now() - Duration::days(i64::from(window_days))).to_rfc3339();

        let mut rows = self
            .db()
            .conn()
            .query(
                "SELECT COUNT(*) FROM audit_log WHERE created_at >= ?1",
                [cutoff.as_str()],
            )
            .await?;
        let row = rows.next().await?.ok_or(DatabaseError::NoResult)?;
        let total_actions = get_count(&row, 0)?;

        let mut actions_by_type = Vec::new();
        let mut rows = self
            .db()
            .conn()
            .query(
                "SELECT action, COUNT(*) AS n FROM audit_log WHERE created_at >= ?1
                 GROUP BY action ORDER BY n DESC, action",
                [cutoff.as_str()],
            )
            .await?;
        while let Some(row) = rows.next().await? {
            actions_by_type.push(ActionCount {
                action: parse_enum(&row.get::<String>(0)?)?,
                count: get_count(&row, 1)?,
            });
        }

        let mut actions_by_entity = Vec::new();
        let mut rows = self
            .db()
            .conn()
            .query(
                "SELECT entity_type, COUNT(*) AS n FROM audit_log WHERE created_at >= ?1
                 GROUP BY entity_type ORDER BY n DESC, entity_type",
                [cutoff.as_str()],
            )
            .await?;
        while let Some(row) = rows.next().await? {
            actions_by_entity.push(EntityCount {
                entity_type: parse_enum(&row.get::<String>(0)?)?,
                count: get_count(&row, 1)?,
            });
        }

        let mut active_actors = Vec::new();
        let mut rows = self
            .db()
            .conn()
            .query(
                &format!(
                    "SELECT actor_id, actor_name, COUNT(*) AS n FROM audit_log
                     WHERE created_at >= ?1
                     GROUP BY actor_id, actor_name ORDER BY n DESC, actor_name
                     LIMIT {ACTIVE_ACTOR_LIMIT}"
                ),
                [cutoff.as_str()],
            )
            .await?;
        while let Some(row) = rows.next().await? {
            active_actors.push(ActorActivity {
                actor_id: row.get(0)?,
                actor_name: row.get(1)?,
                count: get_count(&row, 2)?,
            });
        }

        // Trailing 7 calendar days, today included, independent of the window.
        let daily_cutoff = Utc::now()
            .date_naive()
            .checked_sub_days(Days::new(DAILY_ACTIVITY_DAYS - 1))
            .ok_or_else(|| DatabaseError::InvalidQuery("date underflow".into()))?
            .format("%Y-%m-%d")
            .to_string();
        let mut daily_activity = Vec::new();
        let mut rows = self
            .db()
            .conn()
            .query(
                "SELECT date(created_at) AS day, COUNT(*) AS n FROM audit_log
                 WHERE date(created_at) >= ?1
                 GROUP BY day ORDER BY day DESC",
                [daily_cutoff.as_str()],
            )
            .await?;
        while let Some(row) = rows.next().await? {
            daily_activity.push(DailyCount {
                date: row.get(0)?,
                count: get_count(&row, 1)?,
            });
        }

        Ok(AuditStats {
            total_actions,
            actions_by_type,
            actions_by_entity,
            active_actors,
            daily_activity,
        })
    }
}
