//! The audit query service.
//!
//! Filtered, paginated, read-only access over the log. All filters are
//! AND-combined; date bounds are inclusive and compared against the date
//! portion of `created_at`; ordering is strictly newest-first.

use chrono::NaiveDate;

use vita_core::entities::AuditRecord;
use vita_core::responses::{ActorOption, AuditPage, FilterOptions};

use crate::error::DatabaseError;
use crate::helpers::{get_count, parse_enum};
use crate::store::{AuditStore, SELECT_COLS, row_to_record};

/// Filter criteria for audit queries. All fields optional, AND-combined.
#[derive(Debug, Default, Clone)]
pub struct AuditQuery {
    pub actor_id: Option<String>,
    pub action: Option<vita_core::enums::AuditAction>,
    pub entity_type: Option<vita_core::enums::EntityType>,
    /// Inclusive lower bound on `date(created_at)`.
    pub start_date: Option<NaiveDate>,
    /// Inclusive upper bound on `date(created_at)`.
    pub end_date: Option<NaiveDate>,
    /// Case-insensitive substring over actor name, entity name, and action.
    pub search: Option<String>,
    /// 1-indexed page; defaults to 1.
    pub page: Option<u32>,
    /// Page size; defaults to the store's configured limit.
    pub limit: Option<u32>,
}

/// Escape `LIKE` metacharacters so a search term matches literally.
fn escape_like(term: &str) -> String {
    let mut escaped = String::with_capacity(term.len());
    for c in term.chars() {
        if matches!(c, '%' | '_' | '\\') {
            escaped.push('\\');
        }
        escaped.push(c);
    }
    escaped
}

impl AuditQuery {
    fn conditions(&self) -> (String, Vec<libsql::Value>) {
        let mut conditions = Vec::new();
        let mut params: Vec<libsql::Value> = Vec::new();

        if let Some(ref actor_id) = self.actor_id {
            params.push(libsql::Value::Text(actor_id.clone()));
            conditions.push(format!("actor_id = ?{}", params.len()));
        }
        if let Some(action) = self.action {
            params.push(libsql::Value::Text(action.as_str().to_string()));
            conditions.push(format!("action = ?{}", params.len()));
        }
        if let Some(entity_type) = self.entity_type {
            params.push(libsql::Value::Text(entity_type.as_str().to_string()));
            conditions.push(format!("entity_type = ?{}", params.len()));
        }
        if let Some(start) = self.start_date {
            params.push(libsql::Value::Text(start.format("%Y-%m-%d").to_string()));
            conditions.push(format!("date(created_at) >= ?{}", params.len()));
        }
        if let Some(end) = self.end_date {
            params.push(libsql::Value::Text(end.format("%Y-%m-%d").to_string()));
            conditions.push(format!("date(created_at) <= ?{}", params.len()));
        }
        if let Some(ref term) = self.search {
            let pattern = format!("%{}%", escape_like(&term.to_lowercase()));
            params.push(libsql::Value::Text(pattern));
            let n = params.len();
            conditions.push(format!(
                "(LOWER(actor_name) LIKE ?{n} ESCAPE '\\' OR LOWER(entity_name) LIKE ?{n} ESCAPE '\\' OR LOWER(action) LIKE ?{n} ESCAPE '\\')"
            ));
        }

        let where_clause = if conditions.is_empty() {
            String::new()
        } else {
            format!("WHERE {}", conditions.join(" AND "))
        };
        (where_clause, params)
    }
}

impl AuditStore {
    /// Run a filtered, paginated query, newest first.
    ///
    /// # Errors
    ///
    /// Returns `DatabaseError` on malformed filters or query failure.
    pub async fn query(&self, filter: &AuditQuery) -> Result<AuditPage, DatabaseError> {
        let page = filter.page.unwrap_or(1);
        if page == 0 {
            return Err(DatabaseError::InvalidQuery("page is 1-indexed".into()));
        }
        let limit = filter.limit.unwrap_or_else(|| self.default_limit());
        if limit == 0 {
            return Err(DatabaseError::InvalidQuery("limit must be positive".into()));
        }

        let (where_clause, params) = filter.conditions();

        let count_sql = format!("SELECT COUNT(*) FROM audit_log {where_clause}");
        let mut rows = self
            .db()
            .conn()
            .query(&count_sql, libsql::params_from_iter(params.clone()))
            .await?;
        let row = rows.next().await?.ok_or(DatabaseError::NoResult)?;
        let total = get_count(&row, 0)?;

        let offset = u64::from(page - 1) * u64::from(limit);
        let sql = format!(
            "SELECT {SELECT_COLS} FROM audit_log {where_clause}
             ORDER BY created_at DESC LIMIT {limit} OFFSET {offset}"
        );
        let mut rows = self
            .db()
            .conn()
            .query(&sql, libsql::params_from_iter(params))
            .await?;

        let mut records = Vec::new();
        while let Some(row) = rows.next().await? {
            records.push(row_to_record(&row)?);
        }

        Ok(AuditPage {
            records,
            total,
            page,
            limit,
            total_pages: total.div_ceil(u64::from(limit)),
        })
    }

    /// Fetch a single record by id.
    ///
    /// # Errors
    ///
    /// Returns `DatabaseError::NoResult` when no record has this id, a
    /// distinct outcome from query failure.
    pub async fn get_by_id(&self, id: &str) -> Result<AuditRecord, DatabaseError> {
        let mut rows = self
            .db()
            .conn()
            .query(
                &format!("SELECT {SELECT_COLS} FROM audit_log WHERE id = ?1"),
                [id],
            )
            .await?;
        let row = rows.next().await?.ok_or(DatabaseError::NoResult)?;
        row_to_record(&row)
    }

    /// The most recent records, newest first (dashboard convenience).
    ///
    /// # Errors
    ///
    /// Returns `DatabaseError` if the query fails.
    pub async fn recent(&self, limit: u32) -> Result<Vec<AuditRecord>, DatabaseError> {
        let mut rows = self
            .db()
            .conn()
            .query(
                &format!(
                    "SELECT {SELECT_COLS} FROM audit_log ORDER BY created_at DESC LIMIT ?1"
                ),
                [i64::from(limit)],
            )
            .await?;
        let mut records = Vec::new();
        while let Some(row) = rows.next().await? {
            records.push(row_to_record(&row)?);
        }
        Ok(records)
    }

    /// Distinct filter values actually present in the log.
    ///
    /// # Errors
    ///
    /// Returns `DatabaseError` if a query fails.
    pub async fn filter_options(&self) -> Result<FilterOptions, DatabaseError> {
        let mut actions = Vec::new();
        let mut rows = self
            .db()
            .conn()
            .query("SELECT DISTINCT action FROM audit_log ORDER BY action", ())
            .await?;
        while let Some(row) = rows.next().await? {
            actions.push(parse_enum(&row.get::<String>(0)?)?);
        }

        let mut entity_types = Vec::new();
        let mut rows = self
            .db()
            .conn()
            .query(
                "SELECT DISTINCT entity_type FROM audit_log ORDER BY entity_type",
                (),
            )
            .await?;
        while let Some(row) = rows.next().await? {
            entity_types.push(parse_enum(&row.get::<String>(0)?)?);
        }

        let mut actors = Vec::new();
        let mut rows = self
            .db()
            .conn()
            .query(
                "SELECT DISTINCT actor_id, actor_name FROM audit_log ORDER BY actor_name",
                (),
            )
            .await?;
        while let Some(row) = rows.next().await? {
            actors.push(ActorOption {
                actor_id: row.get(0)?,
                actor_name: row.get(1)?,
            });
        }

        Ok(FilterOptions {
            actions,
            entity_types,
            actors,
        })
    }
}
