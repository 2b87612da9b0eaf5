//! The mutation interceptor.
//!
//! Wraps a single `(action, entity type)` operation: captures before-state,
//! awaits the mutation, and only on confirmed success runs the resolver
//! and enrichment sequence and appends a record through the sink. The whole
//! capture sequence sits under one guard; failures are logged and swallowed,
//! and the operation's own result is returned to the caller untouched.

use std::sync::Arc;

use serde::Serialize;

use vita_config::CaptureConfig;
use vita_core::entities::{Actor, NewAuditRecord};
use vita_core::enums::{AuditAction, EntityType};

use crate::enrichment::EnrichmentRegistry;
use crate::error::CaptureError;
use crate::ports::{IdentityProvider, RecordSink};
use crate::registry::ResolverRegistry;
use crate::request::{CaptureRequest, MutationOutcome};
use crate::resolver::ResolverSet;

pub struct MutationInterceptor {
    resolvers: ResolverRegistry,
    enrichment: EnrichmentRegistry,
    identity: Arc<dyn IdentityProvider>,
    sink: Arc<dyn RecordSink>,
    record_provenance: bool,
}

impl MutationInterceptor {
    #[must_use]
    pub fn new(
        resolvers: ResolverRegistry,
        enrichment: EnrichmentRegistry,
        identity: Arc<dyn IdentityProvider>,
        sink: Arc<dyn RecordSink>,
    ) -> Self {
        Self {
            resolvers,
            enrichment,
            identity,
            sink,
            record_provenance: true,
        }
    }

    /// Toggle recording of `source_address` / `user_agent`.
    #[must_use]
    pub const fn with_provenance(mut self, record_provenance: bool) -> Self {
        self.record_provenance = record_provenance;
        self
    }

    /// Apply the capture-side configuration toggles.
    #[must_use]
    pub const fn with_config(self, config: &CaptureConfig) -> Self {
        self.with_provenance(config.record_provenance)
    }

    /// Run a mutating operation with audit capture.
    ///
    /// Ordering contract: the before-state resolver is awaited before the
    /// mutation; the record is written only after the mutation's success
    /// signal. On failure (or missing actor identity) no record is produced.
    /// Capture errors never propagate; the mutation's own result is
    /// authoritative.
    pub async fn execute<T, E, F>(
        &self,
        action: AuditAction,
        entity_type: EntityType,
        request: CaptureRequest,
        mutation: F,
    ) -> Result<T, E>
    where
        T: Serialize,
        F: Future<Output = Result<T, E>>,
    {
        let Some(actor) = self.identity.current() else {
            tracing::debug!(action = %action, entity = %entity_type, "no actor identity, capture skipped");
            return mutation.await;
        };

        let set = self.resolvers.get(action, entity_type);

        // Prior state is unrecoverable after the mutation runs.
        let before = set.before(&request).await;

        let result = mutation.await;
        let Ok(value) = &result else {
            return result;
        };

        let outcome =
            MutationOutcome::new(serde_json::to_value(value).unwrap_or(serde_json::Value::Null));

        if let Err(e) = self
            .capture(actor, action, entity_type, &request, &outcome, before, &set)
            .await
        {
            tracing::warn!(action = %action, entity = %entity_type, error = %e, "audit capture failed");
        }

        result
    }

    /// The guarded resolver-invocation-and-write sequence.
    ///
    /// Any error aborts this capture attempt as a whole, with no partial
    /// persistence.
    async fn capture(
        &self,
        actor: Actor,
        action: AuditAction,
        entity_type: EntityType,
        request: &CaptureRequest,
        outcome: &MutationOutcome,
        before: Result<Option<serde_json::Value>, CaptureError>,
        set: &Arc<dyn ResolverSet>,
    ) -> Result<(), CaptureError> {
        let old_values = before?;
        let key = set.entity_key(request).await?;
        let label = set.label(request, outcome).await?;
        let entity_name = match label {
            Some(label) if !label.trim().is_empty() => label,
            _ => self.enrichment.entity_name(entity_type, &key).await,
        };
        let new_values = set.after(request, outcome).await?;

        let (source_address, user_agent) = if self.record_provenance {
            (request.source_address.clone(), request.user_agent.clone())
        } else {
            (None, None)
        };

        let record = NewAuditRecord {
            actor,
            action,
            entity_type,
            entity_id: key.storage_key(),
            entity_name,
            old_values,
            new_values,
            source_address,
            user_agent,
        };

        self.sink
            .append(record)
            .await
            .map_err(CaptureError::Sink)?;
        Ok(())
    }
}
