//! The resolver protocol.
//!
//! Each registered `(action, entity type)` operation may supply up to four
//! resolver callbacks. Every resolver returns a boxed future the interceptor
//! always awaits; there is one calling convention, no runtime inspection of
//! sync vs. deferred. Defaults cover the common cases so a set only overrides
//! what it needs.

use std::future::Future;
use std::pin::Pin;

use vita_core::key::EntityKey;

use crate::error::CaptureError;
use crate::request::{CaptureRequest, MutationOutcome};

/// Dyn-compatible future type returned by every resolver.
pub type BoxFuture<'a, T> = Pin<Box<dyn Future<Output = T> + Send + 'a>>;

/// Conventional path parameter consulted by the default identity resolver.
pub const DEFAULT_ID_PARAM: &str = "id";

/// Per-operation resolver callbacks.
///
/// Implementations hold only injected ports, never closures over ambient state.
/// All four methods have defaults; override what the operation needs.
pub trait ResolverSet: Send + Sync {
    /// Compute the entity key from the request.
    ///
    /// Default: the `"id"` path parameter as a simple key, else
    /// [`EntityKey::Unknown`]. Override to synthesize composite keys.
    fn entity_key<'a>(
        &'a self,
        request: &'a CaptureRequest,
    ) -> BoxFuture<'a, Result<EntityKey, CaptureError>> {
        Box::pin(async move { Ok(default_entity_key(request)) })
    }

    /// Compute a human-readable entity label.
    ///
    /// Returning `None` (or blank) hands label resolution to the enrichment
    /// fallback chain.
    fn label<'a>(
        &'a self,
        _request: &'a CaptureRequest,
        _outcome: &'a MutationOutcome,
    ) -> BoxFuture<'a, Result<Option<String>, CaptureError>> {
        Box::pin(async move { Ok(None) })
    }

    /// Snapshot the relevant fields *prior* to the mutation.
    ///
    /// The interceptor awaits this before the underlying mutation executes;
    /// the prior state is otherwise unrecoverable.
    fn before<'a>(
        &'a self,
        _request: &'a CaptureRequest,
    ) -> BoxFuture<'a, Result<Option<serde_json::Value>, CaptureError>> {
        Box::pin(async move { Ok(None) })
    }

    /// Snapshot the fields that changed or were set.
    fn after<'a>(
        &'a self,
        _request: &'a CaptureRequest,
        _outcome: &'a MutationOutcome,
    ) -> BoxFuture<'a, Result<Option<serde_json::Value>, CaptureError>> {
        Box::pin(async move { Ok(None) })
    }
}

/// The conventional identity resolution: `"id"` path param, else unknown.
#[must_use]
pub fn default_entity_key(request: &CaptureRequest) -> EntityKey {
    request
        .param(DEFAULT_ID_PARAM)
        .map_or(EntityKey::Unknown, EntityKey::simple)
}
