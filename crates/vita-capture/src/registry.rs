//! Resolver registry keyed by `(action, entity type)`.

use std::collections::HashMap;
use std::sync::Arc;

use vita_core::enums::{AuditAction, EntityType};

use crate::resolver::ResolverSet;

/// A resolver set that relies entirely on the trait defaults: entity key from
/// the conventional `"id"` parameter, label and snapshots left to the
/// fallback chain.
pub struct DefaultResolverSet;

impl ResolverSet for DefaultResolverSet {}

/// Explicit registry of per-operation resolver sets.
///
/// Unregistered operations resolve through [`DefaultResolverSet`], so the
/// interceptor always has a uniform contract to call.
pub struct ResolverRegistry {
    sets: HashMap<(AuditAction, EntityType), Arc<dyn ResolverSet>>,
    default_set: Arc<dyn ResolverSet>,
}

impl ResolverRegistry {
    #[must_use]
    pub fn new() -> Self {
        Self {
            sets: HashMap::new(),
            default_set: Arc::new(DefaultResolverSet),
        }
    }

    /// Register the resolver set for one `(action, entity type)` operation.
    ///
    /// Re-registering replaces the previous set.
    pub fn register(
        &mut self,
        action: AuditAction,
        entity_type: EntityType,
        set: Arc<dyn ResolverSet>,
    ) {
        self.sets.insert((action, entity_type), set);
    }

    /// The resolver set for an operation, falling back to the defaults.
    #[must_use]
    pub fn get(&self, action: AuditAction, entity_type: EntityType) -> Arc<dyn ResolverSet> {
        self.sets
            .get(&(action, entity_type))
            .map_or_else(|| Arc::clone(&self.default_set), Arc::clone)
    }

    /// Whether an explicit set is registered for this operation.
    #[must_use]
    pub fn is_registered(&self, action: AuditAction, entity_type: EntityType) -> bool {
        self.sets.contains_key(&(action, entity_type))
    }
}

impl Default for ResolverRegistry {
    fn default() -> Self {
        Self::new()
    }
}
